use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::Hmac;
use pbkdf2::pbkdf2;
use rand::Rng;
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Nombre d'itérations par défaut (valeur de Werkzeug)
pub const DEFAULT_ITERATIONS: u32 = 260000;
const KEY_LENGTH: usize = 32;
const SALT_LENGTH: usize = 16;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("invalid password hash format")]
    InvalidFormat,
    #[error("invalid hash encoding: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("password hashing failed")]
    Hashing,
}

/// Hash des mots de passe au format Werkzeug: pbkdf2:sha256:iterations$salt$hash
///
/// Partagé entre les workers via `web::Data`, le nombre d'itérations vient de la config.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    iterations: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS)
    }
}

impl PasswordHasher {
    pub fn new(iterations: u32) -> Self {
        Self { iterations }
    }

    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        let mut salt = [0u8; SALT_LENGTH];
        rand::thread_rng().fill(&mut salt);

        let mut key = [0u8; KEY_LENGTH];
        pbkdf2::<HmacSha256>(password.as_bytes(), &salt, self.iterations, &mut key)
            .map_err(|_| PasswordError::Hashing)?;

        Ok(format!(
            "pbkdf2:sha256:{}${}${}",
            self.iterations,
            URL_SAFE_NO_PAD.encode(salt),
            URL_SAFE_NO_PAD.encode(key)
        ))
    }
}

/// Vérifie un mot de passe contre un hash produit par `hash_password`.
/// Les itérations sont relues dans le hash, pas dans la config.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, PasswordError> {
    let mut parts = stored_hash.split('$');
    let (Some(header), Some(salt_str), Some(hash_str), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(PasswordError::InvalidFormat);
    };

    let iterations = match header.split(':').collect::<Vec<_>>().as_slice() {
        ["pbkdf2", "sha256", n] => n.parse::<u32>().map_err(|_| PasswordError::InvalidFormat)?,
        _ => return Err(PasswordError::InvalidFormat),
    };

    let salt = URL_SAFE_NO_PAD.decode(salt_str)?;
    let expected = URL_SAFE_NO_PAD.decode(hash_str)?;
    if expected.is_empty() {
        return Err(PasswordError::InvalidFormat);
    }

    let mut computed = vec![0u8; expected.len()];
    pbkdf2::<HmacSha256>(password.as_bytes(), &salt, iterations, &mut computed)
        .map_err(|_| PasswordError::Hashing)?;

    Ok(computed == expected)
}
