use sha2::{Digest, Sha256};

/// Stable group identifier for a normalized term.
///
/// Identical terms get identical IDs in every run; only the first 12 hex
/// characters of the SHA-256 digest are kept.
pub fn group_id_for(normalized_term: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(normalized_term.as_bytes());
    let digest = hasher.finalize();
    let hex = hex::encode(digest);
    format!("grp-{}", &hex[..12])
}
