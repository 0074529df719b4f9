use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::identity::Identity;

/// Claim set carried by every issued token.
///
/// Field names on the wire are `_id` and `userName`, matching what clients of the
/// favourites API already decode. `exp` is only written when an expiry is configured.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// User identifier
    #[serde(rename = "_id")]
    pub id: String,

    /// User name at the time of issuance
    #[serde(rename = "userName")]
    pub user_name: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    /// Create claims for a verified identity.
    ///
    /// # Arguments
    /// * `identity` - Identity returned by credential verification
    /// * `expiration_hours` - Hours until the token expires, `None` for no expiry
    ///
    /// # Returns
    /// Claims with `_id`, `userName`, `iat` and optionally `exp` set
    pub fn for_identity(identity: &Identity, expiration_hours: Option<i64>) -> Self {
        let now = Utc::now();

        Self {
            id: identity.id.clone(),
            user_name: identity.user_name.clone(),
            iat: now.timestamp(),
            exp: expiration_hours.map(|hours| (now + Duration::hours(hours)).timestamp()),
        }
    }

    /// Identity embedded in the claims.
    pub fn identity(&self) -> Identity {
        Identity::new(self.id.clone(), self.user_name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Identity {
        Identity::new("4f0c6a52-8d59-4d1c-9a53-3f3b8e1f7c11", "alice")
    }

    #[test]
    fn test_for_identity_without_expiry() {
        let claims = Claims::for_identity(&alice(), None);

        assert_eq!(claims.id, "4f0c6a52-8d59-4d1c-9a53-3f3b8e1f7c11");
        assert_eq!(claims.user_name, "alice");
        assert!(claims.iat > 0);
        assert!(claims.exp.is_none());
    }

    #[test]
    fn test_for_identity_with_expiry() {
        let claims = Claims::for_identity(&alice(), Some(24));

        let exp = claims.exp.unwrap();
        assert_eq!(exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_wire_field_names() {
        let claims = Claims {
            id: "abc".to_string(),
            user_name: "alice".to_string(),
            iat: 1_700_000_000,
            exp: None,
        };

        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(value["_id"], "abc");
        assert_eq!(value["userName"], "alice");
        assert_eq!(value["iat"], 1_700_000_000);
        assert!(value.get("exp").is_none());
    }

    #[test]
    fn test_identity_roundtrip() {
        let claims = Claims::for_identity(&alice(), None);
        assert_eq!(claims.identity(), alice());
    }
}
