//! RNG seed derivation utilities for deterministic match behavior.
//!
//! Every round of a match shuffles from its own seed, derived from the match
//! seed, so a match replays identically given the same seed and the same moves.

/// Derive a seed for shuffling the deck of a round.
///
/// Same match seed + round number ⇒ same deck order.
pub fn derive_dealing_seed(match_seed: u64, round_no: u32) -> u64 {
    match_seed
        .wrapping_add((round_no as u64).wrapping_mul(1_000_000))
        .wrapping_add(2) // Offset to distinguish from the leader seed
}

/// Derive a seed for choosing the first leader of a match.
pub fn derive_leader_seed(match_seed: u64) -> u64 {
    match_seed.wrapping_mul(0x9E37_79B9_7F4A_7C15).wrapping_add(1)
}

/// Derive a per-match seed from a simulator/base seed and match index.
pub fn derive_match_seed(base_seed: u64, match_no: u32) -> u64 {
    base_seed
        .wrapping_add((match_no as u64).wrapping_mul(10_000))
        .wrapping_add(3)
}
