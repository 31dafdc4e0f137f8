use anchor_lang::prelude::*;

use crate::constants::{ELECTION_SEED, VOTER_SEED};
use crate::error::ErrorCode;
use crate::state::{Election, VoteRevealed, Voter};

#[derive(Accounts)]
pub struct RevealVote<'info> {
    #[account(
        mut,
        seeds = [ELECTION_SEED, election.admin.as_ref()],
        bump = election.bump,
    )]
    pub election: Account<'info, Election>,

    #[account(
        mut,
        seeds = [VOTER_SEED, election.key().as_ref(), voter.voter_address.as_ref()],
        bump = voter.bump,
    )]
    pub voter: Account<'info, Voter>,

    pub user: Signer<'info>,
}

/// Discloses the preimage of a vote commitment once voting has ended.
///
/// `sha256(vote_payload || nonce)` must equal the stored commitment
/// byte-for-byte; any mismatch rejects the reveal and leaves the voter
/// unchanged. Plaintext yes/no ballots are tallied immediately, weighted by
/// the voter's certified stake.
pub fn reveal_vote(ctx: Context<RevealVote>, vote_payload: Vec<u8>, nonce: Vec<u8>) -> Result<()> {
    let election = &mut ctx.accounts.election;
    let voter = &mut ctx.accounts.voter;

    require_keys_eq!(
        voter.voter_address,
        ctx.accounts.user.key(),
        ErrorCode::Unauthorized
    );

    let now = Clock::get()?.unix_timestamp;
    election.assert_reveal_open(now)?;

    let choice = voter.record_reveal(vote_payload, &nonce)?;
    match choice {
        Some(true) => {
            election.yes_votes = election
                .yes_votes
                .checked_add(voter.voter_stake)
                .ok_or(ErrorCode::Overflow)?;
        }
        Some(false) => {
            election.no_votes = election
                .no_votes
                .checked_add(voter.voter_stake)
                .ok_or(ErrorCode::Overflow)?;
        }
        // Ciphertext ballot; tallied by the voting authority off chain.
        None => {}
    }
    election.votes_revealed = true;

    msg!("Vote revealed by {}", voter.voter_address);

    emit!(VoteRevealed {
        voter: voter.voter_address,
        timestamp: now,
    });

    Ok(())
}
