//! Identity provider surface
//!
//! The identity provider is an external collaborator; this module defines
//! the trait the rest of the client consumes plus a fixed in-memory
//! implementation for shells and tests.

use async_trait::async_trait;
use tokio::sync::watch;

use crate::ClientResult;

/// Authenticated identity as reported by the identity provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub email: String,
}

/// External identity provider
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Current authenticated identity, if any
    fn current(&self) -> Option<Identity>;

    /// Bearer token for the current identity
    async fn bearer_token(&self) -> ClientResult<String>;

    /// Receiver notified on sign-in/sign-out
    fn subscribe(&self) -> watch::Receiver<Option<Identity>>;
}

/// Identity provider backed by a fixed token
///
/// Holds the identity and token in memory; sign-in/out is driven by the
/// embedding shell calling [`FixedIdentityProvider::sign_in`] /
/// [`FixedIdentityProvider::sign_out`].
pub struct FixedIdentityProvider {
    token: std::sync::RwLock<Option<String>>,
    sender: watch::Sender<Option<Identity>>,
}

impl FixedIdentityProvider {
    /// Create a signed-out provider
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            token: std::sync::RwLock::new(None),
            sender,
        }
    }

    /// Create a provider already signed in
    pub fn signed_in(identity: Identity, token: impl Into<String>) -> Self {
        let (sender, _) = watch::channel(Some(identity));
        Self {
            token: std::sync::RwLock::new(Some(token.into())),
            sender,
        }
    }

    /// Record a sign-in and notify subscribers
    pub fn sign_in(&self, identity: Identity, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = Some(token.into());
        let _ = self.sender.send(Some(identity));
    }

    /// Record a sign-out and notify subscribers
    pub fn sign_out(&self) {
        *self.token.write().unwrap_or_else(|e| e.into_inner()) = None;
        let _ = self.sender.send(None);
    }
}

impl Default for FixedIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IdentityProvider for FixedIdentityProvider {
    fn current(&self) -> Option<Identity> {
        self.sender.borrow().clone()
    }

    async fn bearer_token(&self) -> ClientResult<String> {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
            .ok_or(crate::ClientError::Unauthorized)
    }

    fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.sender.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sign_in_and_out_notify_subscribers() {
        let provider = FixedIdentityProvider::new();
        let mut receiver = provider.subscribe();
        assert!(provider.current().is_none());
        assert!(provider.bearer_token().await.is_err());

        let identity = Identity {
            id: "u-1".to_string(),
            email: "user@curio.example".to_string(),
        };
        provider.sign_in(identity.clone(), "token-1");

        receiver.changed().await.unwrap();
        assert_eq!(provider.current(), Some(identity));
        assert_eq!(provider.bearer_token().await.unwrap(), "token-1");

        provider.sign_out();
        receiver.changed().await.unwrap();
        assert!(provider.current().is_none());
    }
}
