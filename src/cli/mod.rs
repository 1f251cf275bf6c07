//! This module contains the CLI surface. If eightball is used as lib, a
//! config file or a config struct can be used instead of the CLI args.

pub mod args;
pub mod config;
