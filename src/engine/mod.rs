//! Game-state engines
//!
//! A generic multi-board session machine plus the three playable
//! instantiations: solo (with the speed-run sharing its machine), dueto and
//! quarteto.

mod buffer;
mod duet;
mod quartet;
mod session;
mod solo;

pub use buffer::GuessBuffer;
pub use duet::{DUET_MAX_ATTEMPTS, DuetSession};
pub use quartet::{QUARTET_MAX_ATTEMPTS, QuartetSession};
pub use session::{
    BoardStatus, DrawError, GuessReport, MULTI_WORD_LENGTH, Session, SubmitError,
};
pub use solo::{SOLO_MAX_ATTEMPTS, SoloSession};
