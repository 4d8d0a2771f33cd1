//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! Every shuffle in the engine draws from a `Pcg32`. A session seed is split
//! into independent streams per component (key cycler, colour cycler, cell
//! cyclers) so that adding draws to one component never perturbs another.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 64-bit seed.
///
/// # Arguments
/// * `seed` - A 64-bit seed value
///
/// # Returns
/// A deterministically initialized PCG32 generator
pub fn create_rng(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Derives a seed for a named component from the base seed.
///
/// Hashes the base seed (little-endian) followed by the component key with
/// BLAKE3 and keeps the first eight bytes.
///
/// # Arguments
/// * `base_seed` - The session seed
/// * `key` - A string identifier for the component (e.g., "keys", "seed:major")
///
/// # Returns
/// A derived u64 seed for the component
pub fn derive_component_seed(base_seed: u64, key: &str) -> u64 {
    let mut input = Vec::with_capacity(8 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);

    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}

/// Creates the RNG for a named component.
///
/// Convenience function that derives the component seed and creates the RNG.
///
/// # Arguments
/// * `base_seed` - The session seed
/// * `key` - A string identifier for the component
///
/// # Returns
/// A PCG32 generator initialized with the derived component seed
pub fn component_rng(base_seed: u64, key: &str) -> Pcg32 {
    create_rng(derive_component_seed(base_seed, key))
}

/// Splits a child generator off `rng`, advancing it by one draw.
///
/// # Arguments
/// * `rng` - The parent generator
///
/// # Returns
/// A PCG32 generator seeded from the parent's next u64
pub fn fork_rng(rng: &mut Pcg32) -> Pcg32 {
    create_rng(rng.gen())
}

/// A fresh seed from the thread-local OS-seeded generator.
pub fn entropy_seed() -> u64 {
    rand::thread_rng().gen()
}
