//! This module contains the Magic 8-Ball demo: the answer table with its
//! category selectors, and the on-disk session log.

pub mod ball;
pub mod session;

pub use ball::{AnswerType, Magic8Ball, ANSWERS};
pub use session::{SessionEntry, SessionLog};
