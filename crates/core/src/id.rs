//! Document id generation
//!
//! Ids are a base-36 millisecond timestamp followed by nine random base-36
//! characters: time-ordered enough to be debuggable, high-entropy enough to
//! be collision-resistant within a collection's lifetime.

use chrono::Utc;
use rand::Rng;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RANDOM_SUFFIX_LEN: usize = 9;

fn to_base36(mut n: u128) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(ALPHABET[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).expect("base-36 digits are ASCII")
}

/// Generate a fresh globally-unique document id
pub fn generate_id() -> String {
    let mut id = to_base36(Utc::now().timestamp_millis() as u128);
    let mut rng = rand::thread_rng();
    for _ in 0..RANDOM_SUFFIX_LEN {
        id.push(ALPHABET[rng.gen_range(0..ALPHABET.len())] as char);
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_base36_digits() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(36 * 36 + 1), "101");
    }

    #[test]
    fn test_id_is_base36() {
        let id = generate_id();
        assert!(id.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn test_id_has_random_suffix() {
        // timestamp prefix is 8+ chars for any modern clock
        assert!(generate_id().len() > RANDOM_SUFFIX_LEN);
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: HashSet<String> = (0..10_000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 10_000);
    }
}
