//! Authentication utilities library
//!
//! Provides the authentication infrastructure of the favourites API:
//! - Password hashing (Argon2id)
//! - Stateless identity tokens (HS256 JWT carrying `_id` and `userName`)
//! - Parsing of the `Authorization: jwt <token>` header
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Issuing and Verifying Tokens
//! ```
//! use auth::{Authenticator, Identity};
//!
//! let authenticator = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//! let identity = Identity::new("4f0c6a52-8d59-4d1c-9a53-3f3b8e1f7c11", "alice");
//!
//! let token = authenticator.issue_token(&identity).unwrap();
//! let header = format!("jwt {}", token);
//!
//! let authenticated = authenticator.authenticate(Some(&header)).unwrap();
//! assert_eq!(authenticated, identity);
//! ```

pub mod authenticator;
pub mod credential;
pub mod identity;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use identity::Identity;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
