use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    let parsed_hash = match PasswordHash::new(hash) {
        Ok(h) => h,
        Err(_) => return false,
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_round_trips() {
        let hash = hash_password("letmein").unwrap();
        assert!(verify_password("letmein", &hash));
    }

    #[test]
    fn wrong_password_fails() {
        let hash = hash_password("letmein").unwrap();
        assert!(!verify_password("letmeout", &hash));
    }

    #[test]
    fn garbage_hash_fails_instead_of_panicking() {
        assert!(!verify_password("letmein", "not a phc string"));
    }
}
