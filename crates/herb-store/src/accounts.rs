//! Account registry.
//!
//! Registration, lookup, and login against the substrate-backed account
//! list. Exactly one account may exist per distinct email (case-sensitive
//! exact match).

use std::sync::Arc;

use herb_core::entities::Account;
use herb_core::ids;

use crate::substrate::{read_list, write_list};
use crate::{ACCOUNTS_KEY, SessionContext, StoreError, Substrate};

/// The single accepted login secret. Login is a demo rule: whatever was
/// supplied at registration is neither stored nor compared.
const DEMO_PASSWORD: &str = "password123";

/// Registry of user accounts.
pub struct AccountStore {
    substrate: Arc<dyn Substrate>,
}

impl AccountStore {
    #[must_use]
    pub fn new(substrate: Arc<dyn Substrate>) -> Self {
        Self { substrate }
    }

    /// All registered accounts, in registration order.
    #[must_use]
    pub fn all(&self) -> Vec<Account> {
        read_list(self.substrate.as_ref(), ACCOUNTS_KEY)
    }

    /// Look up an account by exact email. Pure read, no side effect.
    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<Account> {
        self.all().into_iter().find(|a| a.email == email)
    }

    /// Create a new account and sign it in.
    ///
    /// The password is accepted but not stored or validated; login uses the
    /// fixed demo secret instead.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateEmail`] if an account with this email
    /// already exists.
    pub fn register(
        &self,
        session: &SessionContext,
        name: &str,
        email: &str,
        _password: &str,
    ) -> Result<Account, StoreError> {
        let mut accounts = self.all();
        if accounts.iter().any(|a| a.email == email) {
            return Err(StoreError::DuplicateEmail(email.to_string()));
        }

        let account = Account {
            id: ids::generate(ids::PREFIX_ACCOUNT),
            email: email.to_string(),
            name: name.to_string(),
        };
        accounts.push(account.clone());
        write_list(self.substrate.as_ref(), ACCOUNTS_KEY, &accounts);

        session.set_current(Some(&account));
        tracing::debug!(account = %account.id, "account registered");
        Ok(account)
    }

    /// Sign an existing account in.
    ///
    /// On success the session slot is set to the matched account.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UserNotFound`] if no account matches `email`,
    /// or [`StoreError::InvalidCredentials`] if `password` is not the demo
    /// secret.
    pub fn login(
        &self,
        session: &SessionContext,
        email: &str,
        password: &str,
    ) -> Result<Account, StoreError> {
        let account = self
            .find_by_email(email)
            .ok_or_else(|| StoreError::UserNotFound(email.to_string()))?;

        if password != DEMO_PASSWORD {
            return Err(StoreError::InvalidCredentials);
        }

        session.set_current(Some(&account));
        tracing::debug!(account = %account.id, "signed in");
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::MemoryStore;

    use super::*;

    fn fixture() -> (AccountStore, SessionContext) {
        let substrate: Arc<dyn Substrate> = Arc::new(MemoryStore::new());
        (
            AccountStore::new(Arc::clone(&substrate)),
            SessionContext::new(substrate),
        )
    }

    #[test]
    fn register_creates_account_and_signs_in() {
        let (accounts, session) = fixture();

        let ana = accounts
            .register(&session, "Ana", "ana@x.com", "abc")
            .expect("register");

        assert!(ana.id.starts_with("usr-"));
        assert_eq!(ana.email, "ana@x.com");
        assert_eq!(ana.name, "Ana");
        assert_eq!(session.current(), Some(ana));
    }

    #[test]
    fn duplicate_email_is_rejected_and_set_unchanged() {
        let (accounts, session) = fixture();
        accounts
            .register(&session, "Ana", "ana@x.com", "abc")
            .expect("first register");

        let result = accounts.register(&session, "Other", "ana@x.com", "xyz");
        assert!(matches!(result, Err(StoreError::DuplicateEmail(_))));
        assert_eq!(accounts.all().len(), 1);
    }

    #[test]
    fn emails_match_case_sensitively() {
        let (accounts, session) = fixture();
        accounts
            .register(&session, "Ana", "ana@x.com", "abc")
            .expect("register");

        // A differently-cased email is a different identity.
        assert!(accounts.find_by_email("Ana@x.com").is_none());
        let second = accounts.register(&session, "Ana2", "Ana@x.com", "abc");
        assert!(second.is_ok());
        assert_eq!(accounts.all().len(), 2);
    }

    #[test]
    fn login_with_demo_secret_succeeds_regardless_of_registration_password() {
        let (accounts, session) = fixture();
        let ana = accounts
            .register(&session, "Ana", "ana@x.com", "abc")
            .expect("register");
        session.logout();

        let back = accounts
            .login(&session, "ana@x.com", "password123")
            .expect("login");
        assert_eq!(back, ana);
        assert_eq!(session.current(), Some(back));
    }

    #[rstest]
    #[case("abc")]
    #[case("password124")]
    #[case("")]
    fn login_with_any_other_password_fails(#[case] password: &str) {
        let (accounts, session) = fixture();
        accounts
            .register(&session, "Ana", "ana@x.com", "abc")
            .expect("register");
        session.logout();

        let result = accounts.login(&session, "ana@x.com", password);
        assert!(matches!(result, Err(StoreError::InvalidCredentials)));
        assert_eq!(session.current(), None);
    }

    #[test]
    fn login_unknown_email_fails_with_user_not_found() {
        let (accounts, session) = fixture();
        let result = accounts.login(&session, "nobody@x.com", "password123");
        assert!(matches!(result, Err(StoreError::UserNotFound(_))));
    }

    #[test]
    fn find_by_email_has_no_side_effect_on_session() {
        let (accounts, session) = fixture();
        accounts
            .register(&session, "Ana", "ana@x.com", "abc")
            .expect("register");
        session.logout();

        assert!(accounts.find_by_email("ana@x.com").is_some());
        assert_eq!(session.current(), None);
    }
}
