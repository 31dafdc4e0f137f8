use anchor_lang::prelude::*;

use crate::constants::{MAX_ELECTION_ID_LEN, MAX_ELECTION_NAME_LEN};
use crate::error::ErrorCode;

/// A single election, stored at the PDA `[b"election", admin]`.
///
/// The record is never closed; it remains on chain as a permanent audit
/// record of the election's configuration and final tallies.
#[account]
#[derive(InitSpace)]
pub struct Election {
    /// PDA bump seed
    pub bump: u8,
    /// Opaque identifier chosen at creation, compared byte-for-byte
    #[max_len(MAX_ELECTION_ID_LEN)]
    pub election_id: String,
    /// Display name
    #[max_len(MAX_ELECTION_NAME_LEN)]
    pub name: String,
    /// Only the admin may start and end the voting window
    pub admin: Pubkey,
    /// Principal whose certificates authorize voter registration
    pub voting_authority: Pubkey,
    /// True only inside the open voting window
    pub is_active: bool,
    /// Set once voting has ended; never reset
    pub votes_committed: bool,
    /// Set on the first successful reveal; never reset
    pub votes_revealed: bool,
    /// Length of the voting window in seconds, fixed at creation
    pub voting_duration: u64,
    /// Length of the reveal window in seconds, fixed at creation
    pub reveal_duration: u64,
    /// Unix timestamp of activation; None until the election is started
    pub voting_started_at: Option<i64>,
    pub voting_ends_at: Option<i64>,
    pub reveal_ends_at: Option<i64>,
    /// Stake-weighted tallies, accumulated at reveal or overwritten by the
    /// voting authority's certified final result
    pub yes_votes: u64,
    pub no_votes: u64,
}

impl Election {
    pub fn assert_admin(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.admin, *caller, ErrorCode::Unauthorized);
        Ok(())
    }

    /// Opens the voting window. An election has a single window: once it has
    /// been started (even if since ended) it cannot be started again.
    pub fn start(&mut self, now: i64) -> Result<()> {
        require!(!self.is_active, ErrorCode::ElectionAlreadyActive);
        require!(
            self.voting_started_at.is_none(),
            ErrorCode::VotingAlreadyStarted
        );

        let voting_ends_at = now
            .checked_add(self.voting_duration as i64)
            .ok_or(ErrorCode::Overflow)?;
        let reveal_ends_at = voting_ends_at
            .checked_add(self.reveal_duration as i64)
            .ok_or(ErrorCode::Overflow)?;

        self.voting_started_at = Some(now);
        self.voting_ends_at = Some(voting_ends_at);
        self.reveal_ends_at = Some(reveal_ends_at);
        self.is_active = true;
        Ok(())
    }

    pub fn end(&mut self) -> Result<()> {
        require!(self.is_active, ErrorCode::VotingNotActive);
        self.is_active = false;
        self.votes_committed = true;
        Ok(())
    }

    /// Registration and voting are temporally disjoint: voters may only be
    /// registered while no voting window is open.
    pub fn assert_registration_open(&self) -> Result<()> {
        require!(!self.is_active, ErrorCode::VotingAlreadyStarted);
        Ok(())
    }

    pub fn assert_commit_open(&self, now: i64) -> Result<()> {
        require!(self.is_active, ErrorCode::VotingNotActive);
        match self.voting_ends_at {
            Some(deadline) if now <= deadline => Ok(()),
            Some(_) => err!(ErrorCode::CommitPhaseEnded),
            None => err!(ErrorCode::VotingNotActive),
        }
    }

    pub fn assert_reveal_open(&self, now: i64) -> Result<()> {
        require!(!self.is_active, ErrorCode::VotingStillActive);
        match self.reveal_ends_at {
            Some(deadline) if now <= deadline => Ok(()),
            Some(_) => err!(ErrorCode::RevealPhaseEnded),
            None => err!(ErrorCode::VotingNotActive),
        }
    }

    pub fn assert_voting_over(&self) -> Result<()> {
        require!(!self.is_active, ErrorCode::VotingStillActive);
        Ok(())
    }

    /// Winner once voting has ended: 1 = yes, 2 = no, 0 = tie.
    pub fn winner(&self) -> u8 {
        if self.yes_votes > self.no_votes {
            1
        } else if self.no_votes > self.yes_votes {
            2
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn election() -> Election {
        Election {
            bump: 255,
            election_id: "test-election".to_string(),
            name: "Test".to_string(),
            admin: Pubkey::new_unique(),
            voting_authority: Pubkey::new_unique(),
            is_active: false,
            votes_committed: false,
            votes_revealed: false,
            voting_duration: 600,
            reveal_duration: 300,
            voting_started_at: None,
            voting_ends_at: None,
            reveal_ends_at: None,
            yes_votes: 0,
            no_votes: 0,
        }
    }

    #[test]
    fn start_derives_window_deadlines() {
        let mut e = election();
        e.start(1_000).unwrap();
        assert!(e.is_active);
        assert_eq!(e.voting_started_at, Some(1_000));
        assert_eq!(e.voting_ends_at, Some(1_600));
        assert_eq!(e.reveal_ends_at, Some(1_900));
    }

    #[test]
    fn start_rejected_while_active() {
        let mut e = election();
        e.start(1_000).unwrap();
        assert_eq!(
            e.start(1_001).unwrap_err(),
            ErrorCode::ElectionAlreadyActive.into()
        );
    }

    #[test]
    fn single_voting_window_per_election() {
        let mut e = election();
        e.start(1_000).unwrap();
        e.end().unwrap();
        assert_eq!(
            e.start(2_000).unwrap_err(),
            ErrorCode::VotingAlreadyStarted.into()
        );
    }

    #[test]
    fn end_requires_active_window() {
        let mut e = election();
        assert_eq!(e.end().unwrap_err(), ErrorCode::VotingNotActive.into());
        e.start(1_000).unwrap();
        e.end().unwrap();
        assert!(e.votes_committed);
        assert_eq!(e.end().unwrap_err(), ErrorCode::VotingNotActive.into());
    }

    #[test]
    fn admin_gate() {
        let e = election();
        e.assert_admin(&e.admin).unwrap();
        assert_eq!(
            e.assert_admin(&Pubkey::new_unique()).unwrap_err(),
            ErrorCode::Unauthorized.into()
        );
    }

    #[test]
    fn registration_closed_while_active() {
        let mut e = election();
        e.assert_registration_open().unwrap();
        e.start(1_000).unwrap();
        assert_eq!(
            e.assert_registration_open().unwrap_err(),
            ErrorCode::VotingAlreadyStarted.into()
        );
    }

    #[test]
    fn commit_window_bounds() {
        let mut e = election();
        assert_eq!(
            e.assert_commit_open(1_000).unwrap_err(),
            ErrorCode::VotingNotActive.into()
        );
        e.start(1_000).unwrap();
        e.assert_commit_open(1_600).unwrap();
        assert_eq!(
            e.assert_commit_open(1_601).unwrap_err(),
            ErrorCode::CommitPhaseEnded.into()
        );
    }

    #[test]
    fn reveal_window_bounds() {
        let mut e = election();
        e.start(1_000).unwrap();
        assert_eq!(
            e.assert_reveal_open(1_100).unwrap_err(),
            ErrorCode::VotingStillActive.into()
        );
        e.end().unwrap();
        e.assert_reveal_open(1_900).unwrap();
        assert_eq!(
            e.assert_reveal_open(1_901).unwrap_err(),
            ErrorCode::RevealPhaseEnded.into()
        );
    }

    #[test]
    fn winner_ordering() {
        let mut e = election();
        assert_eq!(e.winner(), 0);
        e.yes_votes = 10;
        e.no_votes = 3;
        assert_eq!(e.winner(), 1);
        e.no_votes = 12;
        assert_eq!(e.winner(), 2);
    }
}
