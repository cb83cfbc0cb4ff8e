//! Password hashing and verification.
//!
//! Used at login and again by the disbursement AUTH phase, which makes
//! the actor re-enter their login password rather than a separate secret.

use crate::error::{CoreError, CoreResult};

/// Bcrypt cost used when seeding employee records. Kept low because the
/// store is an in-process simulation, not a production credential vault.
pub const HASH_COST: u32 = 4;

/// Hashes a plaintext password for storage on an employee record.
pub fn hash_password(plain: &str) -> CoreResult<String> {
    bcrypt::hash(plain, HASH_COST)
        .map_err(|e| CoreError::transport(format!("password hashing failed: {e}")))
}

/// Verifies a plaintext password against a stored hash.
pub fn verify_password(plain: &str, hash: &str) -> CoreResult<bool> {
    bcrypt::verify(plain, hash)
        .map_err(|e| CoreError::transport(format!("password verification failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_round_trip() {
        let hash = hash_password("s3cret").unwrap();
        assert!(verify_password("s3cret", &hash).unwrap());
    }

    #[test]
    fn test_wrong_password_fails_verification() {
        let hash = hash_password("s3cret").unwrap();
        assert!(!verify_password("wrong", &hash).unwrap());
    }

    #[test]
    fn test_garbage_hash_is_a_transport_error() {
        let err = verify_password("s3cret", "not-a-bcrypt-hash").unwrap_err();
        assert!(matches!(err, CoreError::Transport { .. }));
    }
}
