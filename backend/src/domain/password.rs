//! Credential handling for user records.
//!
//! Plaintext passwords only live inside [`Password`], which wipes its buffer
//! on drop. Persisted credentials are [`PasswordHash`] values holding an
//! Argon2id PHC string (`$argon2id$v=19$m=..,t=..,p=..$<salt>$<hash>`).

use std::fmt;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash as PhcString, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use zeroize::Zeroizing;

const ALGORITHM: &str = "argon2id";

/// Plaintext password supplied by a client.
///
/// The `Debug` output is redacted and the buffer is zeroed when dropped.
#[derive(Clone)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Wrap a plaintext password. Callers validate emptiness beforehand.
    pub fn new(plaintext: impl Into<String>) -> Self {
        Self(Zeroizing::new(plaintext.into()))
    }

    fn expose(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}

/// Argon2id PHC string as stored by persistence adapters.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

/// Errors raised while producing or interpreting a stored hash.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordHashError {
    /// The value is not an Argon2id PHC string.
    #[error("password hash is not an argon2id PHC string")]
    Malformed,
    /// The hasher refused the input or its parameters.
    #[error("password hashing failed: {message}")]
    Hashing { message: String },
}

impl PasswordHash {
    /// Hash `password` with Argon2id under a fresh random salt.
    pub fn derive(password: &Password) -> Result<Self, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.expose(), &salt)
            .map(|hash| Self(hash.to_string()))
            .map_err(|err| PasswordHashError::Hashing {
                message: err.to_string(),
            })
    }

    /// Rehydrate a hash read back from storage.
    pub fn parse(stored: impl Into<String>) -> Result<Self, PasswordHashError> {
        let stored = stored.into();
        let parsed = PhcString::new(&stored).map_err(|_| PasswordHashError::Malformed)?;
        if parsed.algorithm.as_str() != ALGORITHM {
            return Err(PasswordHashError::Malformed);
        }
        Ok(Self(stored))
    }

    /// Check `candidate` against this hash in constant time.
    pub fn verify(&self, candidate: &Password) -> bool {
        let Ok(parsed) = PhcString::new(&self.0) else {
            return false;
        };
        Argon2::default()
            .verify_password(candidate.expose(), &parsed)
            .is_ok()
    }
}

impl AsRef<str> for PasswordHash {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}
