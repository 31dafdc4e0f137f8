use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("You are not authorized to perform this action.")]
    Unauthorized,

    #[msg("Voting duration must be greater than zero.")]
    InvalidVotingDuration,

    #[msg("Reveal duration must be greater than zero.")]
    InvalidRevealDuration,

    #[msg("The election is already active.")]
    ElectionAlreadyActive,

    #[msg("Voting has already started.")]
    VotingAlreadyStarted,

    #[msg("Voting is not active.")]
    VotingNotActive,

    #[msg("Voting is still active.")]
    VotingStillActive,

    #[msg("The commit window has closed.")]
    CommitPhaseEnded,

    #[msg("The reveal window has closed.")]
    RevealPhaseEnded,

    #[msg("This voter is already registered.")]
    VoterAlreadyRegistered,

    #[msg("A vote commitment was already recorded for this voter.")]
    AlreadyCommitted,

    #[msg("No vote commitment was recorded for this voter.")]
    VoteNotCommitted,

    #[msg("This voter has already revealed their vote.")]
    VoteAlreadyRevealed,

    #[msg("Commitment must be a 32-byte hash digest.")]
    InvalidCommitment,

    #[msg("Revealed vote does not match the stored commitment.")]
    CommitmentMismatch,

    #[msg("No Ed25519 verification instruction found in the transaction.")]
    MissingVerificationInstruction,

    #[msg("Ed25519 verification instruction data is malformed.")]
    MalformedVerificationInstruction,

    #[msg("Verified public key does not match the expected signer.")]
    PublicKeyMismatch,

    #[msg("Verified message does not match the expected certificate payload.")]
    MessageMismatch,

    #[msg("Certificate does not match the verified signature.")]
    CertificateMismatch,

    #[msg("Overflow occurred during arithmetic operation.")]
    Overflow,
}
