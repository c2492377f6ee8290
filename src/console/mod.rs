//! Console front end: reads moves from a human or lets the computer pick
//! one, renders the board as text and offers another game once one ends.

mod args;
mod participant;
mod session;

pub use args::SessionArgs;
pub use participant::{Participant, ParticipantKind, UnknownParticipantKind};
pub use session::{parse_coordinates, Session};
