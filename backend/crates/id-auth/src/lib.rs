pub mod claims;
pub mod error;
pub mod password;
pub mod token_issuer;
pub mod token_verifier;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use password::PasswordHasher;
pub use token_issuer::TokenIssuer;
pub use token_verifier::TokenVerifier;
