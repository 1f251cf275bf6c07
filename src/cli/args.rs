use clap::{self, Parser};

use crate::magic8ball::AnswerType;

#[derive(Debug, Parser)]
pub struct Opt {
    #[arg(
        long,
        help = "Question to ask the Magic 8-Ball",
        name = "QUESTION",
        default_value = ""
    )]
    pub question: String,

    #[arg(
        long,
        value_enum,
        help = "Answer category to draw from",
        name = "ANSWER_TYPE",
        default_value = "random"
    )]
    pub answer_type: AnswerType,

    #[arg(
        long,
        help = "Number of times to ask the question",
        name = "COUNT",
        default_value = "1"
    )]
    pub count: u32,

    #[arg(
        long,
        help = "Flip a coin instead of asking the ball",
        name = "FLIP",
        default_value = "false"
    )]
    pub flip: bool,

    #[arg(
        long,
        help = "Print raw generator draws instead of answers",
        name = "DRAWS"
    )]
    pub draws: Option<u32>,

    #[arg(
        long,
        help = "Inclusive lower bound for raw draws",
        name = "MIN",
        default_value = "1"
    )]
    pub min: i32,

    #[arg(
        long,
        help = "Inclusive upper bound for raw draws",
        name = "MAX",
        default_value = "10"
    )]
    pub max: i32,

    #[arg(
        long,
        help = "Number of recent draws that are never repeated",
        name = "HISTORY",
        default_value = "0"
    )]
    pub history: usize,

    #[arg(
        long,
        help = "Use the cryptographically secure source for raw draws",
        name = "CRYPTO",
        default_value = "false"
    )]
    pub crypto: bool,

    #[arg(long, help = "Set a custom seed for the standard source", name = "SEED")]
    pub seed: Option<u64>,

    #[arg(
        long,
        help = "Workspace for session logs",
        name = "WORKSPACE",
        default_value = "eightball_workspace"
    )]
    pub workspace: String,

    #[arg(
        long,
        help = "Store the session log on disk",
        name = "LOGS",
        default_value = "false"
    )]
    pub logs: bool,

    #[arg(long, help = "Load config file", name = "CONFIG")]
    pub config: Option<String>,
}
