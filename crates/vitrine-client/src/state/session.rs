//! Auth context.
//!
//! Who the storefront is acting for. Commands read it; nothing in this
//! crate can change it. Signing in or out tears the whole client down and
//! builds a new one around the new context, so a session never observes
//! its own identity changing.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What the client knows about a signed-in shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub display_name: String,
    pub email: String,
}

/// The identity every command runs under.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuthContext {
    /// Anonymous shopper, tracked by a minted session id.
    Guest { session_id: String },
    /// Authenticated shopper.
    SignedIn { user: UserSummary },
}

impl AuthContext {
    /// Starts a guest session with a fresh id.
    pub fn guest() -> Self {
        AuthContext::Guest {
            session_id: Uuid::new_v4().to_string(),
        }
    }

    pub fn signed_in(user: UserSummary) -> Self {
        AuthContext::SignedIn { user }
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, AuthContext::SignedIn { .. })
    }

    /// The id orders are partitioned by: user id when signed in, session
    /// id for guests.
    pub fn customer_id(&self) -> &str {
        match self {
            AuthContext::Guest { session_id } => session_id,
            AuthContext::SignedIn { user } => &user.id,
        }
    }

    /// Key the shell persists this session's cart under.
    ///
    /// Guest and user carts live under different keys so a guest cart
    /// survives sign-in and can be merged into the account cart.
    pub fn storage_key(&self) -> String {
        match self {
            AuthContext::Guest { session_id } => format!("cart:session:{}", session_id),
            AuthContext::SignedIn { user } => format!("cart:user:{}", user.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserSummary {
        UserSummary {
            id: "user-42".to_string(),
            display_name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn test_guest_sessions_are_distinct() {
        let a = AuthContext::guest();
        let b = AuthContext::guest();
        assert_ne!(a.customer_id(), b.customer_id());
        assert!(!a.is_signed_in());
    }

    #[test]
    fn test_storage_keys_separate_guest_and_user() {
        let guest = AuthContext::Guest {
            session_id: "abc".to_string(),
        };
        assert_eq!(guest.storage_key(), "cart:session:abc");

        let signed = AuthContext::signed_in(user());
        assert_eq!(signed.storage_key(), "cart:user:user-42");
        assert_eq!(signed.customer_id(), "user-42");
        assert!(signed.is_signed_in());
    }
}
