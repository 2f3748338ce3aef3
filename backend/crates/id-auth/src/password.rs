use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Salted one-way password hashing with bcrypt.
///
/// The cost is fixed at construction; it comes from configuration so
/// deployments can raise it without a code change.
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// bcrypt only accepts costs in 4..=31; out-of-range values are
    /// clamped rather than rejected so a bad config cannot disable
    /// signup entirely.
    pub fn new(cost: u32) -> Self {
        Self {
            cost: cost.clamp(4, 31),
        }
    }

    /// Hash a plaintext password. Each call salts independently, so
    /// equal inputs produce different hashes.
    #[track_caller]
    pub fn hash(&self, plaintext: &str) -> AuthErrorResult<String> {
        bcrypt::hash(plaintext, self.cost).map_err(|e| AuthError::PasswordHash {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Check a plaintext password against a stored hash.
    ///
    /// Returns `Ok(false)` on mismatch; `Err` only when the stored
    /// hash is malformed.
    #[track_caller]
    pub fn verify(&self, plaintext: &str, hash: &str) -> AuthErrorResult<bool> {
        bcrypt::verify(plaintext, hash).map_err(|e| AuthError::PasswordHash {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
