use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::PasswordHash;
use argon2::PasswordHasher;
use argon2::PasswordVerifier;
use argon2::Version;
use argon2::password_hash::Error;
use argon2::password_hash::SaltString;

/// Argon2id with one fixed cost configuration, shared by every hash the
/// service computes (decoy included) so all verifications cost the same.
#[derive(Clone)]
pub struct Hasher {
    argon: Argon2<'static>,
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new(Params::default())
    }
}

impl Hasher {
    pub fn new(params: Params) -> Self {
        Self {
            argon: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }

    /// Hash of `password` in PHC string format, fresh salt included.
    pub fn hash(&self, password: &str) -> Result<String, Error> {
        self.argon
            .hash_password(password.as_bytes(), &salt()?)
            .map(|h| h.to_string())
    }

    /// False on mismatch and on stored hashes that do not parse.
    pub fn verify(&self, password: &str, hashword: &str) -> bool {
        PasswordHash::new(hashword)
            .map(|hash| {
                self.argon
                    .verify_password(password.as_bytes(), &hash)
                    .is_ok()
            })
            .unwrap_or(false)
    }
}

fn salt() -> Result<SaltString, Error> {
    use rand::Rng;
    let ref mut bytes = [0u8; 16];
    rand::rng().fill(bytes);
    SaltString::encode_b64(bytes)
}
