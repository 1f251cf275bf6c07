use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::rand_prev::{RandomPrev, StandardSource};

/// Answer list from: https://en.wikipedia.org/wiki/Magic_8-Ball
pub const ANSWERS: [&str; 20] = [
    "It is certain",
    "It is decidedly so",
    "Without a doubt",
    "Yes, definitely",
    "You may rely on it",
    "As I see it, yes",
    "Most likely",
    "Outlook good",
    "Yes",
    "Signs point to yes",
    "Reply hazy try again",
    "Ask again later",
    "Better not tell you now",
    "Cannot predict now",
    "Concentrate and ask again",
    "Don't count on it",
    "My reply is no",
    "My sources say no",
    "Outlook not so good",
    "Very doubtful",
];

const INDEX_START_ANSWERS_RANDOM: i32 = 0;
const INDEX_START_ANSWERS_POSITIVE: i32 = 0;
const INDEX_START_ANSWERS_NEUTRAL: i32 = 10;
const INDEX_START_ANSWERS_NEGATIVE: i32 = 15;

const NUM_ANSWERS_RANDOM: i32 = 20;
const NUM_ANSWERS_POSITIVE: i32 = 10;
const NUM_ANSWERS_NEUTRAL: i32 = 5;
const NUM_ANSWERS_NEGATIVE: i32 = 5;

/// How many recent answer draws are never repeated
const PREVIOUS_LIST_SIZE: usize = 3;

/// Answer category the ball draws from
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AnswerType {
    #[default]
    Random,
    Positive,
    Neutral,
    Negative,
}

/// The Magic 8-Ball: 20 canonical answers indexed through a
/// history-excluding generator so consecutive shakes never read the same.
pub struct Magic8Ball {
    random_prev: RandomPrev<StandardSource>,
    answer_index: usize,
}

impl Magic8Ball {
    /// Create a ball with an entropy-seeded source
    pub fn new() -> Self {
        Self::with_source(StandardSource::new())
    }

    /// Create a ball drawing from the given source
    pub fn with_source(source: StandardSource) -> Self {
        let random_prev = RandomPrev::new(
            source,
            INDEX_START_ANSWERS_RANDOM,
            NUM_ANSWERS_RANDOM - 1,
            PREVIOUS_LIST_SIZE,
        )
        .expect("answer table is wider than the no-repeat window");

        let mut ball = Magic8Ball {
            random_prev,
            answer_index: 0,
        };

        // A fresh ball starts on a 'positive' answer
        ball.select_positive_answer();

        ball
    }

    /// The currently selected answer
    pub fn answer(&self) -> &'static str {
        ANSWERS[self.answer_index]
    }

    /// Shake the ball: draw a new answer of the requested category.
    ///
    /// The question that the Magic 8-Ball is asked does not matter, of course :)
    pub fn answer_to_question(&mut self, _question: &str, answer_type: AnswerType) -> &'static str {
        match answer_type {
            AnswerType::Positive => self.select_positive_answer(),
            AnswerType::Neutral => self.select_neutral_answer(),
            AnswerType::Negative => self.select_negative_answer(),
            AnswerType::Random => self.select_answer(),
        }

        self.answer()
    }

    fn select_answer(&mut self) {
        self.answer_index = (INDEX_START_ANSWERS_RANDOM
            + self.draw_index(NUM_ANSWERS_RANDOM)) as usize;
    }

    fn select_positive_answer(&mut self) {
        self.answer_index = (INDEX_START_ANSWERS_POSITIVE
            + self.draw_index(NUM_ANSWERS_POSITIVE)) as usize;
    }

    fn select_neutral_answer(&mut self) {
        self.answer_index = (INDEX_START_ANSWERS_NEUTRAL
            + self.draw_index(NUM_ANSWERS_NEUTRAL)) as usize;
    }

    fn select_negative_answer(&mut self) {
        self.answer_index = (INDEX_START_ANSWERS_NEGATIVE
            + self.draw_index(NUM_ANSWERS_NEGATIVE)) as usize;
    }

    fn draw_index(&mut self, bound: i32) -> i32 {
        // Every category bound strictly exceeds the no-repeat window
        self.random_prev
            .next_but_not_prev_index(bound)
            .expect("category bound strictly exceeds the no-repeat window")
    }
}

impl Default for Magic8Ball {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_ball() -> Magic8Ball {
        Magic8Ball::with_source(StandardSource::seeded(1000))
    }

    #[test]
    fn test_new_ball_starts_positive() {
        let ball = seeded_ball();
        let answer = ball.answer();
        if !ANSWERS[..10].contains(&answer) {
            panic!("a fresh ball should show a positive answer, got {}", answer);
        }
    }

    #[test]
    fn test_positive_answers_stay_positive() {
        let mut ball = seeded_ball();
        for _ in 0..50 {
            let answer = ball.answer_to_question("Will it build?", AnswerType::Positive);
            assert!(ANSWERS[..10].contains(&answer));
        }
    }

    #[test]
    fn test_neutral_answers_stay_neutral() {
        let mut ball = seeded_ball();
        for _ in 0..50 {
            let answer = ball.answer_to_question("Are you sure?", AnswerType::Neutral);
            assert!(ANSWERS[10..15].contains(&answer));
        }
    }

    #[test]
    fn test_negative_answers_stay_negative() {
        let mut ball = seeded_ball();
        for _ in 0..50 {
            let answer = ball.answer_to_question("Should I deploy on Friday?", AnswerType::Negative);
            assert!(ANSWERS[15..].contains(&answer));
        }
    }

    #[test]
    fn test_random_answers_never_repeat_within_three() {
        let mut ball = seeded_ball();
        let mut recent: Vec<&str> = Vec::new();
        for _ in 0..50 {
            let answer = ball.answer_to_question("", AnswerType::Random);
            assert!(ANSWERS.contains(&answer));
            if recent.contains(&answer) {
                panic!("answer '{}' repeated within 3 shakes", answer);
            }
            recent.push(answer);
            if recent.len() > 3 {
                recent.remove(0);
            }
        }
    }
}
