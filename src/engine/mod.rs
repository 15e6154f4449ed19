//! Game engine
//!
//! Turn legality and termination for one game session. The driving loop
//! lives in `commands::play`; this module only answers "is this move legal"
//! and "is anyone stuck".

mod game;

pub use game::{CityGame, MoveError};
