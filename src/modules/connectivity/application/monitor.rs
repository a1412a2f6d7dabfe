use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::info;

use crate::connectivity::application::ports::outgoing::probe::ConnectivityProbe;

/// Tracks whether the remote store is reachable. Cheap to clone; all clones
/// share the same channel. Transitions come from the background sampler or
/// from the host platform pushing its own online/offline signal.
#[derive(Clone)]
pub struct ConnectivityMonitor {
    status: Arc<watch::Sender<bool>>,
}

impl ConnectivityMonitor {
    pub fn new(initially_online: bool) -> Self {
        let (tx, _) = watch::channel(initially_online);
        Self {
            status: Arc::new(tx),
        }
    }

    pub fn is_online(&self) -> bool {
        *self.status.borrow()
    }

    /// Records a transition. Repeating the current status notifies nobody,
    /// so a duplicate "online" report cannot re-trigger listeners.
    /// Returns whether the status actually changed.
    pub fn set_online(&self, online: bool) -> bool {
        self.status.send_if_modified(|current| {
            if *current == online {
                false
            } else {
                *current = online;
                true
            }
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.status.subscribe()
    }

    /// Samples the probe at a fixed interval and feeds transitions into the
    /// monitor. Runs until the process exits.
    pub fn spawn_sampler(
        &self,
        probe: Arc<dyn ConnectivityProbe>,
        interval: Duration,
    ) -> JoinHandle<()> {
        let monitor = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                let online = probe.check().await;
                if monitor.set_online(online) {
                    info!("Connectivity changed: online={}", online);
                }
            }
        })
    }
}
