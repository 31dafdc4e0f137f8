pub mod initialize;
pub use initialize::*;

pub mod start_election;
pub use start_election::*;

pub mod end_voting;
pub use end_voting::*;

pub mod get_election_id;
pub use get_election_id::*;

pub mod register_voter;
pub use register_voter::*;

pub mod commit_vote;
pub use commit_vote::*;

pub mod reveal_vote;
pub use reveal_vote::*;

pub mod submit_final_result;
pub use submit_final_result::*;

pub mod get_winner;
pub use get_winner::*;
