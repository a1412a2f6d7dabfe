use async_trait::async_trait;

/// A single reachability check against the remote store. Probes never fail:
/// an error is simply "offline".
#[async_trait]
pub trait ConnectivityProbe: Send + Sync {
    async fn check(&self) -> bool;
}
