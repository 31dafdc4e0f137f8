use anchor_lang::prelude::*;
use solana_sha256_hasher::hash;

use crate::constants::{COMMITMENT_LEN, MAX_REVEALED_VOTE_LEN};
use crate::error::ErrorCode;

/// A registered voter, stored at the PDA `[b"voter", election, voter_address]`.
///
/// Progress is monotonic: `has_committed` and `has_revealed` are each set
/// exactly once and never cleared. A voter who never commits simply stays in
/// that state after voting closes; their vote is not counted.
#[account]
#[derive(InitSpace)]
pub struct Voter {
    /// PDA bump seed
    pub bump: u8,
    /// Public key of the voter, not of the PDA itself
    pub voter_address: Pubkey,
    /// Weight certified by the voting authority at registration
    pub voter_stake: u64,
    pub has_committed: bool,
    pub has_revealed: bool,
    /// SHA-256 digest of `vote_payload || nonce`; empty until commit
    #[max_len(COMMITMENT_LEN)]
    pub commitment: Vec<u8>,
    /// The payload disclosed at reveal, stored verbatim
    #[max_len(MAX_REVEALED_VOTE_LEN)]
    pub revealed_vote: Option<Vec<u8>>,
    /// Decoded ballot: true = yes, false = no. None when the payload is an
    /// opaque ciphertext the program cannot decode.
    pub vote: Option<bool>,
}

impl Voter {
    pub fn record_commitment(&mut self, commitment: Vec<u8>) -> Result<()> {
        require!(!self.has_committed, ErrorCode::AlreadyCommitted);
        require!(
            commitment.len() == COMMITMENT_LEN,
            ErrorCode::InvalidCommitment
        );
        self.commitment = commitment;
        self.has_committed = true;
        Ok(())
    }

    /// Checks the reveal against the stored commitment and, on success,
    /// moves the voter to the terminal Revealed state. Returns the decoded
    /// ballot when the payload is a plaintext yes/no byte.
    pub fn record_reveal(&mut self, vote_payload: Vec<u8>, nonce: &[u8]) -> Result<Option<bool>> {
        require!(self.has_committed, ErrorCode::VoteNotCommitted);
        require!(!self.has_revealed, ErrorCode::VoteAlreadyRevealed);

        let digest = hash(&[vote_payload.as_slice(), nonce].concat());
        require!(
            digest.to_bytes().as_slice() == self.commitment.as_slice(),
            ErrorCode::CommitmentMismatch
        );

        let choice = decode_ballot(&vote_payload);
        self.vote = choice;
        self.revealed_vote = Some(vote_payload);
        self.has_revealed = true;
        Ok(choice)
    }
}

/// A one-byte payload of 0 or 1 is a plaintext no/yes ballot. Anything else
/// is treated as ciphertext to be tallied off chain by the voting authority.
fn decode_ballot(payload: &[u8]) -> Option<bool> {
    match payload {
        [0] => Some(false),
        [1] => Some(true),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn voter() -> Voter {
        Voter {
            bump: 254,
            voter_address: Pubkey::new_unique(),
            voter_stake: 100,
            has_committed: false,
            has_revealed: false,
            commitment: Vec::new(),
            revealed_vote: None,
            vote: None,
        }
    }

    fn commitment_for(payload: &[u8], nonce: &[u8]) -> Vec<u8> {
        hash(&[payload, nonce].concat()).to_bytes().to_vec()
    }

    #[test]
    fn commitment_digest_is_sha256() {
        let digest = commitment_for(&[1], b"nonce");
        assert_eq!(digest.len(), COMMITMENT_LEN);
        // a committed digest must round-trip through record_commitment
        let mut v = voter();
        v.record_commitment(digest).unwrap();
        v.record_reveal(vec![1], b"nonce").unwrap();
        assert!(v.has_revealed);
    }

    #[test]
    fn commitment_set_exactly_once() {
        let mut v = voter();
        v.record_commitment(vec![7u8; 32]).unwrap();
        assert!(v.has_committed);
        assert_eq!(v.commitment, vec![7u8; 32]);
        assert_eq!(
            v.record_commitment(vec![8u8; 32]).unwrap_err(),
            ErrorCode::AlreadyCommitted.into()
        );
        assert_eq!(v.commitment, vec![7u8; 32]);
    }

    #[test]
    fn commitment_must_be_a_digest() {
        let mut v = voter();
        assert_eq!(
            v.record_commitment(vec![1u8; 16]).unwrap_err(),
            ErrorCode::InvalidCommitment.into()
        );
        assert!(!v.has_committed);
    }

    #[test]
    fn reveal_round_trip() {
        let mut v = voter();
        let payload = vec![1u8];
        let nonce = b"random-nonce";
        v.record_commitment(commitment_for(&payload, nonce)).unwrap();

        let choice = v.record_reveal(payload.clone(), nonce).unwrap();
        assert_eq!(choice, Some(true));
        assert!(v.has_revealed);
        assert_eq!(v.revealed_vote, Some(payload));
    }

    #[test]
    fn reveal_rejects_wrong_preimage() {
        let mut v = voter();
        let nonce = b"nonce";
        v.record_commitment(commitment_for(&[1], nonce)).unwrap();

        assert_eq!(
            v.record_reveal(vec![0], nonce).unwrap_err(),
            ErrorCode::CommitmentMismatch.into()
        );
        assert!(!v.has_revealed);
        assert_eq!(v.vote, None);

        assert_eq!(
            v.record_reveal(vec![1], b"other").unwrap_err(),
            ErrorCode::CommitmentMismatch.into()
        );
        assert!(!v.has_revealed);
    }

    #[test]
    fn reveal_requires_commitment() {
        let mut v = voter();
        assert_eq!(
            v.record_reveal(vec![1], b"nonce").unwrap_err(),
            ErrorCode::VoteNotCommitted.into()
        );
    }

    #[test]
    fn reveal_is_terminal() {
        let mut v = voter();
        let nonce = b"nonce";
        v.record_commitment(commitment_for(&[0], nonce)).unwrap();
        v.record_reveal(vec![0], nonce).unwrap();
        assert_eq!(
            v.record_reveal(vec![0], nonce).unwrap_err(),
            ErrorCode::VoteAlreadyRevealed.into()
        );
    }

    #[test]
    fn opaque_payloads_are_stored_undecoded() {
        let mut v = voter();
        let payload = vec![0xAB; 48];
        let nonce = b"n";
        v.record_commitment(commitment_for(&payload, nonce)).unwrap();
        let choice = v.record_reveal(payload.clone(), nonce).unwrap();
        assert_eq!(choice, None);
        assert_eq!(v.revealed_vote, Some(payload));
    }
}
