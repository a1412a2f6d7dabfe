use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single operator session. Issued by the external identity provider,
/// held in memory by the gate, persisted so a restart resumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    /// Identifier that logged in (the operator's email).
    pub operator: String,
    /// Absent when the provider issued a non-expiring token.
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(at) => at <= Utc::now(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn session(expires_at: Option<DateTime<Utc>>) -> Session {
        Session {
            token: "tok".to_string(),
            operator: "owner@example.com".to_string(),
            expires_at,
        }
    }

    #[test]
    fn test_session_without_expiry_never_expires() {
        assert!(!session(None).is_expired());
    }

    #[test]
    fn test_session_expiry() {
        assert!(session(Some(Utc::now() - Duration::minutes(1))).is_expired());
        assert!(!session(Some(Utc::now() + Duration::hours(1))).is_expired());
    }
}
