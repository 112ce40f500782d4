//! Signed-in session slot.
//!
//! One process-wide slot holding the currently signed-in account, persisted
//! in the substrate under [`SESSION_KEY`](crate::SESSION_KEY). The context is
//! injectable rather than ambient so tests can run several independent
//! "sessions" in one process.

use std::sync::Arc;

use herb_core::entities::Account;

use crate::{SESSION_KEY, Substrate};

/// Handle to the shared session slot.
///
/// Reads go through the substrate on every call, so a fresh process over a
/// persistent substrate restores the previously signed-in account, and a
/// write from another context is visible on the next read. Last write wins;
/// there is no locking beyond the substrate's own interior mutability.
#[derive(Clone)]
pub struct SessionContext {
    substrate: Arc<dyn Substrate>,
}

impl SessionContext {
    #[must_use]
    pub fn new(substrate: Arc<dyn Substrate>) -> Self {
        Self { substrate }
    }

    /// The currently signed-in account, if any.
    #[must_use]
    pub fn current(&self) -> Option<Account> {
        let raw = self.substrate.get(SESSION_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(account) => Some(account),
            Err(error) => {
                tracing::warn!(%error, "stored session is unreadable; treating as signed out");
                None
            }
        }
    }

    /// Overwrite the slot. `None` represents logout.
    pub fn set_current(&self, account: Option<&Account>) {
        match account {
            Some(account) => match serde_json::to_string(account) {
                Ok(json) => self.substrate.set(SESSION_KEY, &json),
                Err(error) => {
                    tracing::warn!(%error, "session could not be encoded; write skipped");
                }
            },
            None => self.substrate.remove(SESSION_KEY),
        }
    }

    /// Clear the slot.
    pub fn logout(&self) {
        self.set_current(None);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::MemoryStore;

    use super::*;

    fn account(id: &str) -> Account {
        Account {
            id: id.to_string(),
            email: format!("{id}@x.com"),
            name: id.to_string(),
        }
    }

    #[test]
    fn empty_substrate_means_signed_out() {
        let session = SessionContext::new(Arc::new(MemoryStore::new()));
        assert_eq!(session.current(), None);
    }

    #[test]
    fn set_current_then_read_back() {
        let session = SessionContext::new(Arc::new(MemoryStore::new()));
        let ana = account("usr-1");

        session.set_current(Some(&ana));
        assert_eq!(session.current(), Some(ana));
    }

    #[test]
    fn logout_clears_the_slot() {
        let session = SessionContext::new(Arc::new(MemoryStore::new()));
        session.set_current(Some(&account("usr-1")));

        session.logout();
        assert_eq!(session.current(), None);
    }

    #[test]
    fn last_write_wins_across_contexts() {
        let substrate: Arc<dyn Substrate> = Arc::new(MemoryStore::new());
        let first = SessionContext::new(Arc::clone(&substrate));
        let second = SessionContext::new(Arc::clone(&substrate));

        first.set_current(Some(&account("usr-1")));
        second.set_current(Some(&account("usr-2")));

        assert_eq!(first.current().map(|a| a.id), Some("usr-2".to_string()));
    }

    #[test]
    fn garbage_session_value_reads_as_signed_out() {
        let substrate = Arc::new(MemoryStore::new());
        substrate.set(SESSION_KEY, "{broken");

        let session = SessionContext::new(substrate);
        assert_eq!(session.current(), None);
    }
}
