//! History-excluding random value generation, plus the Magic 8-Ball demo
//! and coin-flip helper built on top of it.

pub mod cli;
pub mod coin;
pub mod magic8ball;
pub mod rand_prev;
