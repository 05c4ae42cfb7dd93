use bcrypt::{hash, verify, BcryptError};

#[cfg(not(test))]
const HASH_COST: u32 = bcrypt::DEFAULT_COST;
// Minimum cost keeps fixture setup fast.
#[cfg(test)]
const HASH_COST: u32 = 4;

pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    hash(password, HASH_COST)
}

/// `false` for a mismatch and for a malformed stored hash alike.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    verify(password, password_hash).unwrap_or(false)
}

/// Emails are the login identifier and are compared case-insensitively.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_only_the_hashed_password() {
        let h = hash_password("s3cret").unwrap();
        assert_ne!(h, "s3cret");
        assert!(verify_password("s3cret", &h));
        assert!(!verify_password("S3cret", &h));
    }

    #[test]
    fn malformed_hash_never_verifies() {
        assert!(!verify_password("anything", "not-a-bcrypt-hash"));
    }

    #[test]
    fn emails_are_normalized() {
        assert_eq!(normalize_email("  Demo@Example.COM "), "demo@example.com");
    }
}
