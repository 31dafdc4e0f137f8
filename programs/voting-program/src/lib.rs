// Stops Rust Analyzer complaining about missing configs
// See https://solana.stackexchange.com/questions/17777
#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod ed25519;
pub mod error;
pub mod handlers;
pub mod state;

pub use error::ErrorCode;
pub use state::{Election, Voter};

use handlers::*;

declare_id!("A93rBVAiSBw5S46hrMomTtPeoURQHCiyiAoe7Q3zkDKd");

/// Commit-reveal election program.
///
/// One transaction pattern underpins every privileged operation: a native
/// Ed25519 verification instruction proves a principal signed a canonical
/// message, and the program instruction in the same transaction consumes
/// that proof before mutating state.
#[program]
pub mod voting_program {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        name: String,
        voting_authority: Pubkey,
        election_id: String,
        voting_duration: u64,
        reveal_duration: u64,
    ) -> Result<()> {
        handlers::initialize::initialize(
            ctx,
            name,
            voting_authority,
            election_id,
            voting_duration,
            reveal_duration,
        )
    }

    pub fn start_election(ctx: Context<StartElection>) -> Result<()> {
        handlers::start_election::start_election(ctx)
    }

    pub fn end_voting(ctx: Context<EndVoting>) -> Result<()> {
        handlers::end_voting::end_voting(ctx)
    }

    pub fn get_election_id(ctx: Context<GetElectionId>) -> Result<String> {
        handlers::get_election_id::get_election_id(ctx)
    }

    pub fn register_voter(
        ctx: Context<RegisterVoter>,
        voter_public_key: Pubkey,
        voter_stake: u64,
    ) -> Result<()> {
        handlers::register_voter::register_voter(ctx, voter_public_key, voter_stake)
    }

    pub fn commit_vote(
        ctx: Context<CommitVote>,
        commitment: Vec<u8>,
        certificate: Vec<u8>,
    ) -> Result<()> {
        handlers::commit_vote::commit_vote(ctx, commitment, certificate)
    }

    pub fn reveal_vote(
        ctx: Context<RevealVote>,
        vote_payload: Vec<u8>,
        nonce: Vec<u8>,
    ) -> Result<()> {
        handlers::reveal_vote::reveal_vote(ctx, vote_payload, nonce)
    }

    pub fn submit_final_result(
        ctx: Context<SubmitFinalResult>,
        yes_votes: u64,
        no_votes: u64,
    ) -> Result<()> {
        handlers::submit_final_result::submit_final_result(ctx, yes_votes, no_votes)
    }

    pub fn get_winner(ctx: Context<GetWinner>) -> Result<u8> {
        handlers::get_winner::get_winner(ctx)
    }
}
