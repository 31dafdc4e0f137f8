use anchor_lang::prelude::*;

use crate::constants::ELECTION_SEED;
use crate::state::Election;

#[derive(Accounts)]
pub struct GetElectionId<'info> {
    #[account(
        seeds = [ELECTION_SEED, election.admin.as_ref()],
        bump = election.bump,
    )]
    pub election: Account<'info, Election>,
}

pub fn get_election_id(ctx: Context<GetElectionId>) -> Result<String> {
    Ok(ctx.accounts.election.election_id.clone())
}
