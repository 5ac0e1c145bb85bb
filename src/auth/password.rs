//! Password Hashing
//!
//! bcrypt wrapper for credential hashing and verification. bcrypt embeds a
//! per-record random salt in the digest and is deliberately slow, so two
//! hashes of the same password differ and offline guessing stays expensive.
//! Verification is constant-time inside the library.

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// Hash a plaintext password for storage
///
/// The returned digest embeds the cost factor and a random salt; it is the
/// only representation of the password that ever reaches the database.
pub fn hash_password(plaintext: &str) -> Result<String, BcryptError> {
    hash(plaintext, DEFAULT_COST)
}

/// Verify a plaintext password against a stored digest
///
/// A mismatch returns `Ok(false)`; errors are reserved for malformed digests
/// or library failure.
pub fn verify_password(plaintext: &str, digest: &str) -> Result<bool, BcryptError> {
    verify(plaintext, digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_verify_round_trip() {
        let digest = hash_password("abc12345").unwrap();
        assert!(verify_password("abc12345", &digest).unwrap());
    }

    #[test]
    fn test_wrong_password_rejected() {
        let digest = hash_password("abc12345").unwrap();
        assert!(!verify_password("abc12346", &digest).unwrap());
        assert!(!verify_password("", &digest).unwrap());
    }

    #[test]
    fn test_salted_hashes_differ() {
        let a = hash_password("abc12345").unwrap();
        let b = hash_password("abc12345").unwrap();
        assert_ne!(a, b);
        assert!(verify_password("abc12345", &a).unwrap());
        assert!(verify_password("abc12345", &b).unwrap());
    }

    #[test]
    fn test_malformed_digest_is_an_error() {
        assert!(verify_password("abc12345", "not-a-bcrypt-digest").is_err());
    }
}
