use anchor_lang::prelude::*;

use crate::constants::{ELECTION_SEED, VOTER_SEED};
use crate::ed25519::{certificate_message, load_certificate};
use crate::error::ErrorCode;
use crate::state::{Election, Voter, VoterRegistered};

#[derive(Accounts)]
#[instruction(voter_public_key: Pubkey)]
pub struct RegisterVoter<'info> {
    #[account(
        seeds = [ELECTION_SEED, election.admin.as_ref()],
        bump = election.bump,
    )]
    pub election: Account<'info, Election>,

    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + Voter::INIT_SPACE,
        seeds = [VOTER_SEED, election.key().as_ref(), voter_public_key.as_ref()],
        bump,
    )]
    pub voter: Account<'info, Voter>,

    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: instructions sysvar, pinned by the address constraint; required
    /// to locate the Ed25519 verification instruction.
    #[account(address = anchor_lang::solana_program::sysvar::instructions::ID)]
    pub instructions_sysvar: AccountInfo<'info>,

    pub system_program: Program<'info, System>,
}

/// Registers a voter with the stake certified by the voting authority.
///
/// Authority is carried by the certificate, not by the submitting signer:
/// the transaction must include an Ed25519 verification instruction proving
/// the voting authority signed `voter || stake || election_id`, and any
/// funded payer may then submit the registration. Registration is only open
/// while no voting window is active.
pub fn register_voter(
    ctx: Context<RegisterVoter>,
    voter_public_key: Pubkey,
    voter_stake: u64,
) -> Result<()> {
    let election = &ctx.accounts.election;
    election.assert_registration_open()?;

    // A freshly created PDA is zeroed; an existing record carries its voter key.
    require!(
        ctx.accounts.voter.voter_address == Pubkey::default(),
        ErrorCode::VoterAlreadyRegistered
    );

    let expected_message =
        certificate_message(&voter_public_key, voter_stake, &election.election_id);
    load_certificate(
        &ctx.accounts.instructions_sysvar,
        &election.voting_authority,
        &expected_message,
    )?;

    let voter = &mut ctx.accounts.voter;
    voter.bump = ctx.bumps.voter;
    voter.voter_address = voter_public_key;
    voter.voter_stake = voter_stake;
    voter.has_committed = false;
    voter.has_revealed = false;
    voter.commitment = Vec::new();
    voter.revealed_vote = None;
    voter.vote = None;

    msg!("Registered voter {} with stake {}", voter_public_key, voter_stake);

    emit!(VoterRegistered {
        voter: voter_public_key,
        stake: voter_stake,
    });

    Ok(())
}
