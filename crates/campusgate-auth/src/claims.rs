//! JWT claims for session tokens.

use campusgate_core::{Role, ViewAs};
use serde::{Deserialize, Serialize};

/// Claims embedded in an access token.
///
/// A token carries everything needed to rebuild an
/// [`AuthState`](crate::AuthState) without a backend round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: String,
    /// User's email address
    pub email: String,
    /// The user's own role
    pub role: Role,
    /// Admin preview override; ignored for non-admins when read
    #[serde(default)]
    pub view_as: ViewAs,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_serialize() {
        let claims = Claims {
            sub: "user-id-123".to_string(),
            email: "test@example.com".to_string(),
            role: Role::Admin,
            view_as: ViewAs::Role(Role::Instructor),
            exp: 1234567890,
            iat: 1234567800,
        };
        let serialized = serde_json::to_string(&claims).unwrap();
        assert!(serialized.contains(r#""sub":"user-id-123""#));
        assert!(serialized.contains(r#""role":"admin""#));
        assert!(serialized.contains(r#""view_as":"instructor""#));
    }

    #[test]
    fn test_claims_deserialize_without_view_as() {
        let json = r#"{"sub":"user-id-456","email":"user@test.com","role":"student","exp":9999999999,"iat":9999999900}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.sub, "user-id-456");
        assert_eq!(claims.role, Role::Student);
        assert_eq!(claims.view_as, ViewAs::Current);
        assert_eq!(claims.exp, 9999999999);
    }

    #[test]
    fn test_claims_reject_unknown_role() {
        let json = r#"{"sub":"u","email":"u@test.com","role":"system_admin","exp":1,"iat":1}"#;
        assert!(serde_json::from_str::<Claims>(json).is_err());
    }
}
