use sha2::{Digest, Sha256};

/// Password literal hashed by the `hash_password` binary.
pub const DUMMY_PASSWORD: &str = "dummyhash2";

/// Computes the stored form of a password.
///
/// The backend compares administrator passwords against an unkeyed SHA-256 of the
/// UTF-8 bytes, so this produces exactly that: a lowercase hexadecimal string of
/// 64 characters.
///
/// # Arguments
///
/// * `password` - The plaintext password.
///
/// # Returns
///
/// A hexadecimal string representation of the SHA-256 digest.
///
/// # Examples
///
/// ```rust
/// use learner_report_seed::utils::hash_password;
///
/// let hash = hash_password("dummyhash2");
/// assert_eq!(hash.len(), 64);
/// ```
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}
