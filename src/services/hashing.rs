use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};

pub const MIN_PASSWORD_LENGTH: usize = 8;

#[derive(Debug, thiserror::Error)]
pub enum HashingError {
    #[error("weak password, must be at least {min} characters")]
    TooShort { min: usize },

    #[error("hashing failed: {0}")]
    Hash(String),
}

// Tuned parameters: faster but still secure
// m=8MB, t=2 iterations, p=1 parallelism
fn get_argon2() -> Result<Argon2<'static>, HashingError> {
    let params = Params::new(8192, 2, 1, None).map_err(|e| HashingError::Hash(e.to_string()))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

fn hash(secret: &str) -> Result<String, HashingError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = get_argon2()?
        .hash_password(secret.as_bytes(), &salt)
        .map_err(|e| HashingError::Hash(e.to_string()))?;
    Ok(hash.to_string())
}

fn verify(secret: &str, digest: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(digest) else {
        return false;
    };
    match get_argon2() {
        Ok(argon2) => argon2.verify_password(secret.as_bytes(), &parsed_hash).is_ok(),
        Err(_) => false,
    }
}

/// Account passwords. Shorter than [`MIN_PASSWORD_LENGTH`] is a validation failure.
pub fn hash_password(password: &str) -> Result<String, HashingError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(HashingError::TooShort {
            min: MIN_PASSWORD_LENGTH,
        });
    }
    hash(password)
}

pub fn verify_password(password: &str, digest: &str) -> bool {
    verify(password, digest)
}

/// Shared mathematician secrets.
pub fn hash_secret(secret: &str) -> Result<String, HashingError> {
    hash(secret)
}

pub fn verify_secret(secret: &str, digest: &str) -> bool {
    verify(secret, digest)
}

/// Numeric developer codes.
pub fn hash_code(code: u32) -> Result<String, HashingError> {
    hash(&code.to_string())
}

pub fn verify_code(code: u32, digest: &str) -> bool {
    verify(&code.to_string(), digest)
}
