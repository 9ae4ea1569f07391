use crate::error::AppError;
use sha2::{Digest, Sha256};

/// Repeatable pseudo-random source keyed by an arbitrary string. Detail data
/// is reconstructed from just the record id, so the sequence for a given seed
/// must never change: the seed is hashed to a 64-bit state and stepped with a
/// fixed splitmix64 round. Do not swap this for a library RNG whose stream is
/// not stable across versions.
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    pub fn new(seed: &str) -> Self {
        let digest = Sha256::digest(seed.as_bytes());
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&digest[..8]);
        Self {
            state: u64::from_le_bytes(bytes),
        }
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        // 53 bits of mantissa, same construction as the usual f64 open range
        (z >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Consumes one draw to index deterministically into `options`. An empty
/// option list is a contract violation, not a silent default.
pub fn pick<'a, T>(rng: &mut SeededRng, options: &'a [T]) -> Result<&'a T, AppError> {
    if options.is_empty() {
        return Err(AppError::Validation("pick requires a non-empty option list".to_string()));
    }
    let idx = (rng.next_f64() * options.len() as f64) as usize;
    Ok(&options[idx.min(options.len() - 1)])
}
