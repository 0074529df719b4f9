/// Identity derived from a verified credential.
///
/// Only ever built from a user record returned by the credential store, or from the
/// payload of a token whose signature has been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub user_name: String,
}

impl Identity {
    pub fn new(id: impl ToString, user_name: impl ToString) -> Self {
        Self {
            id: id.to_string(),
            user_name: user_name.to_string(),
        }
    }
}
