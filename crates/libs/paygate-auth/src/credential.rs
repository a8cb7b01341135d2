//! Password hashing and verification.
//!
//! Credentials are stored as `hex(PBKDF2-HMAC-SHA256(password, salt)) ^ salt`:
//! the lowercase hex digest, a fixed delimiter, and the salt that produced
//! it. The digest is hex and the salt is ASCII letters, so the delimiter
//! can never collide with either component and `split_once` recovers both.
//!
//! # Usage
//!
//! - [`encode_credential`]: create a storable credential from a password
//! - [`verify_password`]: check a password against a stored credential
//!
//! # Examples
//!
//! ```rust
//! use paygate_auth::credential::{encode_credential, verify_password};
//!
//! let credential = encode_credential("pw12345");
//! assert!(verify_password("pw12345", &credential));
//! assert!(!verify_password("wrong", &credential));
//! ```

use pbkdf2::pbkdf2_hmac;
use rand::Rng;
use sha2::Sha256;

/// Separates the hex digest from the salt inside a stored credential.
pub const HASH_SALT_DELIMITER: char = '^';

/// Salt length used for freshly encoded credentials.
pub const SALT_LENGTH: usize = 10;

/// PBKDF2 iteration count. Fixed CPU cost imposed on every guess.
pub const PBKDF2_ITERATIONS: u32 = 20_000;

const ASCII_LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Returns a salt of exactly `length` ASCII letters drawn uniformly from
/// the provided random source.
///
/// A zero `length` yields the empty string. The salt only has to defeat
/// precomputed-hash lookups, so any general-purpose [`Rng`] is acceptable;
/// callers that need reproducibility (tests) pass a seeded one.
///
/// # Examples
///
/// ```rust
/// use paygate_auth::credential::generate_salt;
///
/// let salt = generate_salt(&mut rand::thread_rng(), 10);
/// assert_eq!(salt.len(), 10);
/// assert!(salt.chars().all(|c| c.is_ascii_alphabetic()));
/// ```
pub fn generate_salt<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| ASCII_LETTERS[rng.gen_range(0..ASCII_LETTERS.len())] as char)
        .collect()
}

/// Hashes a password with the given salt.
///
/// Deterministic PBKDF2-HMAC-SHA256 over 20 000 iterations, rendered as a
/// lowercase hex digest. The same `(password, salt)` pair always produces
/// the same output; different salts produce different digests for the same
/// password.
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut derived = [0u8; 32];
    pbkdf2_hmac::<Sha256>(
        password.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ITERATIONS,
        &mut derived,
    );
    hex::encode(derived)
}

/// Encodes a password into a storable credential with a fresh random salt.
///
/// This is the only way new credentials are created.
pub fn encode_credential(password: &str) -> String {
    encode_credential_with(&mut rand::thread_rng(), password)
}

/// Like [`encode_credential`], with an explicit random source for the salt.
pub fn encode_credential_with<R: Rng + ?Sized>(rng: &mut R, password: &str) -> String {
    let salt = generate_salt(rng, SALT_LENGTH);
    let hash = hash_password(password, &salt);
    format!("{hash}{HASH_SALT_DELIMITER}{salt}")
}

/// Verifies a password against a stored credential.
///
/// Splits the credential into digest and salt, recomputes the digest with
/// the recovered salt, and compares. Fails closed: a credential without
/// the delimiter verifies as `false` rather than raising.
pub fn verify_password(password: &str, stored_credential: &str) -> bool {
    let Some((hash, salt)) = stored_credential.split_once(HASH_SALT_DELIMITER) else {
        return false;
    };
    hash_password(password, salt) == hash
}
