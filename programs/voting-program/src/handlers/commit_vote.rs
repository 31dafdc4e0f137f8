use anchor_lang::prelude::*;

use crate::constants::{ELECTION_SEED, VOTER_SEED};
use crate::ed25519::{certificate_message, load_certificate};
use crate::error::ErrorCode;
use crate::state::{Election, VoteCommitted, Voter};

#[derive(Accounts)]
pub struct CommitVote<'info> {
    #[account(
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

    /// CHECK: instructions sysvar, pinned by the address constraint; required
    /// to locate the Ed25519 verification instruction.
    #[account(address = anchor_lang::solana_program::sysvar::instructions::ID)]
    pub instructions_sysvar: AccountInfo<'info>,
}

/// Records a vote commitment during the open voting window.
///
/// Strictly self-service: the caller must be the registered voter. The
/// transaction re-asserts the voter's eligibility with the same voting
/// authority certificate used at registration, and the `certificate`
/// argument must carry the exact signature bytes the Ed25519 instruction
/// verified, binding this commitment to that specific certificate.
pub fn commit_vote(ctx: Context<CommitVote>, commitment: Vec<u8>, certificate: Vec<u8>) -> Result<()> {
    let election = &ctx.accounts.election;
    let voter = &mut ctx.accounts.voter;

    require_keys_eq!(
        voter.voter_address,
        ctx.accounts.user.key(),
        ErrorCode::Unauthorized
    );

    let now = Clock::get()?.unix_timestamp;
    election.assert_commit_open(now)?;

    let expected_message =
        certificate_message(&voter.voter_address, voter.voter_stake, &election.election_id);
    let verified = load_certificate(
        &ctx.accounts.instructions_sysvar,
        &election.voting_authority,
        &expected_message,
    )?;
    require!(
        certificate.as_slice() == verified.signature.as_slice(),
        ErrorCode::CertificateMismatch
    );

    voter.record_commitment(commitment)?;

    msg!("Vote committed by {}", voter.voter_address);

    emit!(VoteCommitted {
        voter: voter.voter_address,
        timestamp: now,
    });

    Ok(())
}
