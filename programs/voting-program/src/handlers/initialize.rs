use anchor_lang::prelude::*;

use crate::constants::ELECTION_SEED;
use crate::error::ErrorCode;
use crate::state::{Election, ElectionInitialized};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + Election::INIT_SPACE,
        seeds = [ELECTION_SEED, admin.key().as_ref()],
        bump,
    )]
    pub election: Account<'info, Election>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Creates a new election administered by the calling signer.
///
/// The election account lives at a PDA derived from the admin's key, so a
/// given admin can hold at most one election; a second initialization fails
/// because the account already exists. The voting and reveal windows are not
/// opened here, only their durations are fixed.
///
/// # Arguments
/// * `name` - Display name for the election
/// * `voting_authority` - Principal whose certificates authorize registrations
/// * `election_id` - Opaque identifier embedded in every certificate message
/// * `voting_duration` - Length of the voting window in seconds
/// * `reveal_duration` - Length of the reveal window in seconds
pub fn initialize(
    ctx: Context<Initialize>,
    name: String,
    voting_authority: Pubkey,
    election_id: String,
    voting_duration: u64,
    reveal_duration: u64,
) -> Result<()> {
    require!(voting_duration > 0, ErrorCode::InvalidVotingDuration);
    require!(reveal_duration > 0, ErrorCode::InvalidRevealDuration);

    let election = &mut ctx.accounts.election;
    election.bump = ctx.bumps.election;
    election.election_id = election_id;
    election.name = name;
    election.admin = ctx.accounts.admin.key();
    election.voting_authority = voting_authority;
    election.is_active = false;
    election.votes_committed = false;
    election.votes_revealed = false;
    election.voting_duration = voting_duration;
    election.reveal_duration = reveal_duration;
    election.voting_started_at = None;
    election.voting_ends_at = None;
    election.reveal_ends_at = None;
    election.yes_votes = 0;
    election.no_votes = 0;

    emit!(ElectionInitialized {
        election: election.key(),
        election_id: election.election_id.clone(),
        admin: election.admin,
    });

    Ok(())
}
