use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    hash(password, DEFAULT_COST)
}

/// A malformed stored hash counts as a mismatch.
pub fn verify_password(password: &str, hash: &str) -> bool {
    verify(password, hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_only_the_hashed_password() {
        let hashed = hash_password("correct horse").expect("hashing succeeds");
        assert_ne!(hashed, "correct horse");
        assert!(verify_password("correct horse", &hashed));
        assert!(!verify_password("battery staple", &hashed));
    }

    #[test]
    fn garbage_hash_never_verifies() {
        assert!(!verify_password("anything", "not-a-bcrypt-hash"));
    }
}
