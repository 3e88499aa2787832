//! Email/password login against the MusicList authentication endpoint

mod error;
mod events;
mod flow;

pub use error::*;
pub use events::*;
pub use flow::*;
