pub fn u8s_from_str(input: &str) -> [u8; 32] {
    blake3::hash(input.as_bytes()).into()
}

/// Derives the 32 byte seed of one run.
///
/// Runs sharing a `seed` string but using different nonces get independent
/// random streams, so repeated trials over the same instance stay reproducible.
pub fn calc_seed(seed: &str, nonce: u64) -> [u8; 32] {
    u8s_from_str(&format!("{}_{}", seed, nonce))
}
