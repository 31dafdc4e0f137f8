use anchor_lang::prelude::*;

use crate::constants::ELECTION_SEED;
use crate::ed25519::{final_result_message, load_certificate};
use crate::error::ErrorCode;
use crate::state::{Election, FinalResultSubmitted};

#[derive(Accounts)]
pub struct SubmitFinalResult<'info> {
    #[account(
        mut,
        seeds = [ELECTION_SEED, election.admin.as_ref()],
        bump = election.bump,
    )]
    pub election: Account<'info, Election>,

    pub voting_authority: Signer<'info>,

    /// CHECK: instructions sysvar, pinned by the address constraint; required
    /// to locate the Ed25519 verification instruction.
    #[account(address = anchor_lang::solana_program::sysvar::instructions::ID)]
    pub instructions_sysvar: AccountInfo<'info>,
}

/// Writes the certified final tallies after voting has ended.
///
/// Ballots revealed as ciphertext cannot be counted by the program itself;
/// the voting authority decrypts them off chain and submits the totals,
/// signed over `election_id || yes_votes || no_votes` so the figures cannot
/// be altered in flight.
pub fn submit_final_result(
    ctx: Context<SubmitFinalResult>,
    yes_votes: u64,
    no_votes: u64,
) -> Result<()> {
    let election = &mut ctx.accounts.election;
    election.assert_voting_over()?;

    require_keys_eq!(
        election.voting_authority,
        ctx.accounts.voting_authority.key(),
        ErrorCode::Unauthorized
    );

    let expected_message = final_result_message(&election.election_id, yes_votes, no_votes);
    load_certificate(
        &ctx.accounts.instructions_sysvar,
        &election.voting_authority,
        &expected_message,
    )?;

    election.yes_votes = yes_votes;
    election.no_votes = no_votes;

    msg!(
        "Final result for {}: {} yes / {} no",
        election.election_id,
        yes_votes,
        no_votes
    );

    emit!(FinalResultSubmitted { yes_votes, no_votes });

    Ok(())
}
