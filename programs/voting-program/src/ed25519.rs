//! Signature verification adapter.
//!
//! Certificates issued by the voting authority are detached Ed25519
//! signatures. The cryptographic check itself is performed by the native
//! Ed25519 program in a sibling instruction of the same transaction; this
//! module only locates that instruction through the instructions sysvar,
//! decodes its offset table, and confirms the verified (public key, message)
//! pair is the one the consuming handler expects.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions::load_instruction_at_checked;

use crate::constants::ED25519_PROGRAM_ID;
use crate::error::ErrorCode;

/// Byte length of the Ed25519 instruction header: signature count + padding.
const HEADER_LEN: usize = 2;
/// Byte length of one signature-offsets table (seven little-endian u16s).
const OFFSETS_LEN: usize = 14;

/// A (signer, message) pair vouched for by the native Ed25519 verifier.
#[derive(Debug)]
pub struct VerifiedCertificate {
    pub signer: Pubkey,
    pub message: Vec<u8>,
    pub signature: [u8; 64],
}

/// Canonical certificate message binding a voter to their stake within one
/// election: `voter (32 raw bytes) || stake (u64 LE) || election_id (UTF-8)`.
/// Signer and verifier must reproduce this layout byte-for-byte.
pub fn certificate_message(voter: &Pubkey, stake: u64, election_id: &str) -> Vec<u8> {
    let mut message = Vec::with_capacity(32 + 8 + election_id.len());
    message.extend_from_slice(voter.as_ref());
    message.extend_from_slice(&stake.to_le_bytes());
    message.extend_from_slice(election_id.as_bytes());
    message
}

/// Canonical message for the voting authority's certified final result:
/// `election_id || yes_votes (u64 LE) || no_votes (u64 LE)`.
pub fn final_result_message(election_id: &str, yes_votes: u64, no_votes: u64) -> Vec<u8> {
    let mut message = Vec::with_capacity(election_id.len() + 16);
    message.extend_from_slice(election_id.as_bytes());
    message.extend_from_slice(&yes_votes.to_le_bytes());
    message.extend_from_slice(&no_votes.to_le_bytes());
    message
}

/// Finds the Ed25519 verification instruction in the current transaction and
/// checks that it vouches for `expected_signer` signing `expected_message`.
///
/// The runtime has already rejected the transaction if the signature itself
/// was invalid, so reaching the consuming instruction means the pair returned
/// here is cryptographically verified.
pub fn load_certificate(
    instructions_sysvar: &AccountInfo,
    expected_signer: &Pubkey,
    expected_message: &[u8],
) -> Result<VerifiedCertificate> {
    let mut index = 0;
    let data = loop {
        match load_instruction_at_checked(index, instructions_sysvar) {
            Ok(ix) if ix.program_id == ED25519_PROGRAM_ID => break ix.data,
            Ok(_) => index += 1,
            Err(_) => return err!(ErrorCode::MissingVerificationInstruction),
        }
    };

    let certificate = parse_ed25519_instruction(&data)?;
    require_keys_eq!(
        certificate.signer,
        *expected_signer,
        ErrorCode::PublicKeyMismatch
    );
    require!(
        certificate.message == expected_message,
        ErrorCode::MessageMismatch
    );
    Ok(certificate)
}

/// Decodes the native Ed25519 program's instruction data: a two-byte header
/// (signature count, padding) followed by an offset table, with signature,
/// public key, and message stored elsewhere in the same buffer.
///
/// Exactly one signature is accepted, and all three instruction indexes must
/// be `u16::MAX` (self-referencing); offset tables pointing into other
/// instructions would let the certificate bytes diverge from what the
/// verifier actually checked.
fn parse_ed25519_instruction(data: &[u8]) -> Result<VerifiedCertificate> {
    require!(
        data.len() >= HEADER_LEN + OFFSETS_LEN,
        ErrorCode::MalformedVerificationInstruction
    );
    require!(data[0] == 1, ErrorCode::MalformedVerificationInstruction);

    let u16_at = |pos: usize| u16::from_le_bytes([data[pos], data[pos + 1]]);
    let signature_offset = u16_at(2) as usize;
    let signature_ix_index = u16_at(4);
    let public_key_offset = u16_at(6) as usize;
    let public_key_ix_index = u16_at(8);
    let message_offset = u16_at(10) as usize;
    let message_len = u16_at(12) as usize;
    let message_ix_index = u16_at(14);

    require!(
        signature_ix_index == u16::MAX
            && public_key_ix_index == u16::MAX
            && message_ix_index == u16::MAX,
        ErrorCode::MalformedVerificationInstruction
    );

    let signature = data
        .get(signature_offset..signature_offset.saturating_add(64))
        .ok_or(ErrorCode::MalformedVerificationInstruction)?;
    let public_key = data
        .get(public_key_offset..public_key_offset.saturating_add(32))
        .ok_or(ErrorCode::MalformedVerificationInstruction)?;
    let message = data
        .get(message_offset..message_offset.saturating_add(message_len))
        .ok_or(ErrorCode::MalformedVerificationInstruction)?;

    Ok(VerifiedCertificate {
        signer: Pubkey::try_from(public_key)
            .map_err(|_| ErrorCode::MalformedVerificationInstruction)?,
        message: message.to_vec(),
        signature: signature
            .try_into()
            .map_err(|_| ErrorCode::MalformedVerificationInstruction)?,
    })
}
