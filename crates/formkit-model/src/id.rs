//! Entity id generation.

use rand::Rng;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 9;

/// Generate a 9-character lowercase base-36 id.
///
/// Matches the id shape of previously persisted templates and
/// submissions, so new and old entities are indistinguishable on the
/// wire.
#[must_use]
pub fn generate_id() -> String {
    let mut rng = rand::rng();
    (0..ID_LEN)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_nine_lowercase_base36_chars() {
        for _ in 0..100 {
            let id = generate_id();
            assert_eq!(id.len(), 9);
            assert!(id.bytes().all(|b| ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn ids_are_distinct_in_practice() {
        let a = generate_id();
        let b = generate_id();
        assert_ne!(a, b);
    }
}
