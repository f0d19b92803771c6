//! SHA-256 hashing for record content addressing.

use sha2::{Digest, Sha256};

/// Calculate the SHA-256 hash of in-memory data.
pub fn sha256(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_known_digest() {
        assert_eq!(
            sha256(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn deterministic_and_content_sensitive() {
        assert_eq!(sha256(b"ACGT"), sha256(b"ACGT"));
        assert_ne!(sha256(b"ACGT"), sha256(b"TGCA"));
    }
}
