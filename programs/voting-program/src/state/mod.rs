pub mod election;
pub use election::*;

pub mod voter;
pub use voter::*;

pub mod events;
pub use events::*;
