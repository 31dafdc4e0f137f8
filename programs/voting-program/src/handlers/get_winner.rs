use anchor_lang::prelude::*;

use crate::constants::ELECTION_SEED;
use crate::state::Election;

#[derive(Accounts)]
pub struct GetWinner<'info> {
    #[account(
        seeds = [ELECTION_SEED, election.admin.as_ref()],
        bump = election.bump,
    )]
    pub election: Account<'info, Election>,
}

/// Returns the winning option once voting has ended: 1 = yes, 2 = no, 0 = tie.
pub fn get_winner(ctx: Context<GetWinner>) -> Result<u8> {
    let election = &ctx.accounts.election;
    election.assert_voting_over()?;
    Ok(election.winner())
}
