//! Prefixed random identifiers.
//!
//! All entities created by the mock backend carry ids of the form
//! `<prefix>_<9 base-36 chars>` (`user_k3j9x0a2b`, `app_...`, `doc_...`).

use rand::Rng;

const ID_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 9;

/// Generates an id with the given prefix and a random 9-character
/// base-36 suffix.
pub fn random_id(prefix: &str) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_CHARSET[rng.gen_range(0..ID_CHARSET.len())] as char)
        .collect();
    format!("{}_{}", prefix, suffix)
}
