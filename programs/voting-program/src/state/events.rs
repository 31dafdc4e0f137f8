use anchor_lang::prelude::*;

#[event]
pub struct ElectionInitialized {
    pub election: Pubkey,
    pub election_id: String,
    pub admin: Pubkey,
}

#[event]
pub struct ElectionStarted {
    pub timestamp: i64,
    pub voting_ends_at: i64,
}

#[event]
pub struct VotingEnded {
    pub timestamp: i64,
}

#[event]
pub struct VoterRegistered {
    pub voter: Pubkey,
    pub stake: u64,
}

#[event]
pub struct VoteCommitted {
    pub voter: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct VoteRevealed {
    pub voter: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct FinalResultSubmitted {
    pub yes_votes: u64,
    pub no_votes: u64,
}
