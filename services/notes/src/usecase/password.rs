use argon2::{
    Argon2, Params,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};

use crate::error::NotesServiceError;

/// Argon2id hashing for user passwords. Hashes are PHC strings.
#[derive(Clone, Default)]
pub struct PasswordHashing {
    argon2: Argon2<'static>,
}

impl PasswordHashing {
    /// Custom cost parameters, e.g. cheaper ones for tests.
    pub fn with_params(params: Params) -> Self {
        Self {
            argon2: Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params),
        }
    }

    pub fn hash(&self, password: &str) -> Result<String, NotesServiceError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| NotesServiceError::PasswordHash(e.to_string()))?;
        Ok(hash.to_string())
    }
}
