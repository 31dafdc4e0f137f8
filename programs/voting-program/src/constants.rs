use anchor_lang::prelude::*;

// PDA seeds for the two record kinds
pub const ELECTION_SEED: &[u8] = b"election";
pub const VOTER_SEED: &[u8] = b"voter";

/// Native Ed25519 signature-verification program. Certificates are checked by
/// a sibling instruction addressed to this program within the same transaction.
pub const ED25519_PROGRAM_ID: Pubkey = pubkey!("Ed25519SigVerify111111111111111111111111111");

/// Commitments are SHA-256 digests.
pub const COMMITMENT_LEN: usize = 32;

pub const MAX_ELECTION_NAME_LEN: usize = 64;
pub const MAX_ELECTION_ID_LEN: usize = 64;
pub const MAX_REVEALED_VOTE_LEN: usize = 128;
