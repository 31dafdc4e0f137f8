use anchor_lang::prelude::*;

use crate::constants::ELECTION_SEED;
use crate::state::{Election, ElectionStarted};

#[derive(Accounts)]
pub struct StartElection<'info> {
    #[account(
        mut,
        seeds = [ELECTION_SEED, election.admin.as_ref()],
        bump = election.bump,
    )]
    pub election: Account<'info, Election>,

    pub admin: Signer<'info>,
}

/// Opens the voting window. Admin only, and only once per election: the
/// commit and reveal deadlines are derived from the activation timestamp.
pub fn start_election(ctx: Context<StartElection>) -> Result<()> {
    let election = &mut ctx.accounts.election;
    election.assert_admin(&ctx.accounts.admin.key())?;

    let now = Clock::get()?.unix_timestamp;
    election.start(now)?;

    msg!("Election {} started", election.election_id);

    emit!(ElectionStarted {
        timestamp: now,
        // set by start() just above
        voting_ends_at: election.voting_ends_at.unwrap_or(now),
    });

    Ok(())
}
