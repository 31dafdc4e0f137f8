use anchor_lang::prelude::*;

use crate::constants::ELECTION_SEED;
use crate::state::{Election, VotingEnded};

#[derive(Accounts)]
pub struct EndVoting<'info> {
    #[account(
        mut,
        seeds = [ELECTION_SEED, election.admin.as_ref()],
        bump = election.bump,
    )]
    pub election: Account<'info, Election>,

    pub admin: Signer<'info>,
}

/// Closes the voting window and opens the reveal phase. Admin only.
pub fn end_voting(ctx: Context<EndVoting>) -> Result<()> {
    let election = &mut ctx.accounts.election;
    election.assert_admin(&ctx.accounts.admin.key())?;
    election.end()?;

    let now = Clock::get()?.unix_timestamp;
    msg!("Election {} voting ended", election.election_id);

    emit!(VotingEnded { timestamp: now });

    Ok(())
}
