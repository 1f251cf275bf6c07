use serde::{Deserialize, Serialize};
use std::fs;

use super::args::Opt;
use crate::magic8ball::AnswerType;

/// Config struct to use instead of command line
#[derive(Deserialize, Serialize, Clone, Default)]
pub struct Config {
    pub question: String,
    pub answer_type: AnswerType,
    pub count: u32,
    pub flip: bool,
    pub draws: Option<u32>,
    pub min: i32,
    pub max: i32,
    pub history: usize,
    pub crypto: bool,
    pub seed: Option<u64>,
    pub workspace: String,
    pub logs: bool,
}

impl Config {
    /// Create a Config using the provided config file
    pub fn load_config(config_file: &String) -> Self {
        let config_string = fs::read_to_string(config_file).expect("Unable to read config file");
        serde_json::from_str(&config_string).expect("Could not parse json config file")
    }

    /// Create a Config from the parsed command-line options
    pub fn from_opt(opt: &Opt) -> Self {
        Config {
            question: opt.question.clone(),
            answer_type: opt.answer_type,
            count: opt.count,
            flip: opt.flip,
            draws: opt.draws,
            min: opt.min,
            max: opt.max,
            history: opt.history,
            crypto: opt.crypto,
            seed: opt.seed,
            workspace: opt.workspace.clone(),
            logs: opt.logs,
        }
    }
}
