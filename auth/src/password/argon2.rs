use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Well-formed Argon2id digest with the default cost parameters that no
/// password is known to match. Verifying against it costs as much as a real
/// check.
const DECOY_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$Y29sbGVnZW1lZGlhLWRlYw$veuboir4+nPln+fE08SK4RZWF912xyB3PN9svDOpHdc";

/// One-way adaptive password hashing (Argon2id).
///
/// Every digest embeds its own random salt and parameters in PHC string form,
/// so verification needs nothing but the stored string.
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password with a freshly generated salt.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (algorithm, parameters, salt and digest)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a candidate password against a stored PHC digest.
    ///
    /// The comparison runs in constant time. A digest that cannot be parsed
    /// simply fails verification.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }

    /// Run a full verification against a decoy digest and discard the result.
    ///
    /// Used when there is no stored hash to check, so that the response time
    /// does not reveal whether an account exists.
    pub fn verify_decoy(&self, password: &str) {
        let _ = self.verify(password, DECOY_HASH);
    }
}
