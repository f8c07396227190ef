//! Shared-secret access gate

use std::sync::Arc;

/// Header carrying the caller's API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Paths served without a credential: health check and interface docs.
pub const OPEN_PATHS: &[&str] = &["/health", "/openapi.json", "/docs", "/docs/oauth2-redirect"];

/// Outcome of evaluating one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Allowlisted path; the credential was not consulted.
    Open,
    /// Credential matched the configured secret.
    Allowed,
    /// Credential missing or wrong. The two cases are indistinguishable.
    Rejected,
}

/// Compares a presented key against the process-wide secret.
///
/// The secret is fixed at construction; there is no rotation.
#[derive(Clone)]
pub struct ApiKeyGate {
    secret: Arc<str>,
}

impl ApiKeyGate {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    pub fn is_open_path(path: &str) -> bool {
        OPEN_PATHS.contains(&path)
    }

    pub fn check(&self, path: &str, presented: Option<&str>) -> GateDecision {
        if Self::is_open_path(path) {
            return GateDecision::Open;
        }

        match presented {
            Some(key) if key == &*self.secret => GateDecision::Allowed,
            _ => GateDecision::Rejected,
        }
    }
}

impl std::fmt::Debug for ApiKeyGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKeyGate")
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_paths_skip_credential() {
        let gate = ApiKeyGate::new("s3cret");
        for path in OPEN_PATHS {
            assert_eq!(gate.check(path, None), GateDecision::Open);
            assert_eq!(gate.check(path, Some("wrong")), GateDecision::Open);
        }
    }

    #[test]
    fn test_missing_and_wrong_key_rejected_alike() {
        let gate = ApiKeyGate::new("s3cret");
        assert_eq!(gate.check("/search", None), GateDecision::Rejected);
        assert_eq!(gate.check("/search", Some("nope")), GateDecision::Rejected);
        assert_eq!(gate.check("/search", Some("")), GateDecision::Rejected);
    }

    #[test]
    fn test_match_is_exact() {
        let gate = ApiKeyGate::new("s3cret");
        assert_eq!(gate.check("/init", Some("s3cret")), GateDecision::Allowed);
        assert_eq!(gate.check("/init", Some("S3CRET")), GateDecision::Rejected);
        assert_eq!(gate.check("/init", Some("s3cret ")), GateDecision::Rejected);
    }

    #[test]
    fn test_open_path_match_is_exact() {
        let gate = ApiKeyGate::new("s3cret");
        assert_eq!(gate.check("/health/", None), GateDecision::Rejected);
        assert_eq!(gate.check("/docs/other", None), GateDecision::Rejected);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let gate = ApiKeyGate::new("s3cret");
        assert!(!format!("{gate:?}").contains("s3cret"));
    }
}
