//! This module contains the history-excluding random generator: the
//! `RandomPrev` state machine and the pluggable uniform sources it draws from.

pub mod generator;
pub mod source;

pub use generator::{RandomPrev, RandomPrevError, DEF_MAX, DEF_MIN};
pub use source::{CryptoSource, StandardSource, UniformSource};
