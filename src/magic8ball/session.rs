use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fs, fs::create_dir, fs::write, time::SystemTime};

use super::ball::AnswerType;

/// One asked question and the answer the ball gave
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionEntry {
    pub question: String,
    pub answer_type: AnswerType,
    pub answer: String,
}

/// On-disk log of one demo session
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct SessionLog {
    pub workspace: String,
    pub path: String,
    pub entries: Vec<SessionEntry>,
}

impl SessionLog {
    pub fn new(workspace: &str) -> Self {
        let d = SystemTime::now();
        // Create DateTime from SystemTime
        let datetime = DateTime::<Utc>::from(d);
        // Formats the combined date and time with the specified format string.
        let timestamp_str = datetime.format("%Y-%m-%d--%H:%M:%S").to_string();
        SessionLog {
            workspace: workspace.to_string(),
            path: format!("session_{}.json", timestamp_str),
            entries: Vec::new(),
        }
    }

    /// Function to load a previous session log
    pub fn load_from_file(filename: &String) -> Self {
        let contents =
            fs::read_to_string(filename).expect("Should have been able to read the file");
        serde_json::from_str(&contents).expect("JSON was not well-formatted")
    }

    /// Record one question/answer pair
    pub fn record(&mut self, question: &str, answer_type: AnswerType, answer: &str) {
        self.entries.push(SessionEntry {
            question: question.to_string(),
            answer_type,
            answer: answer.to_string(),
        });
    }

    /// Function to dump the session log
    pub fn dump_json(&self) {
        let _ = create_dir(&self.workspace);
        let _ = create_dir(format!("{}/sessions", &self.workspace));
        let buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");

        let mut session_ser = serde_json::Serializer::with_formatter(buf, formatter);
        self.serialize(&mut session_ser)
            .expect("Failed to serialize");
        let dump_file = format!("{}/sessions/{}", self.workspace, self.path);
        write(
            &dump_file,
            String::from_utf8(session_ser.into_inner()).expect("Failed to dump string as utf8"),
        )
        .expect("Failed to save session to disk");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_order() {
        let mut log = SessionLog::new("eightball_workspace");
        log.record("Will it rain?", AnswerType::Random, "Outlook good");
        log.record("Really?", AnswerType::Neutral, "Ask again later");
        assert_eq!(log.entries.len(), 2);
        assert_eq!(log.entries[0].answer, "Outlook good");
        assert_eq!(log.entries[1].question, "Really?");
    }

    #[test]
    fn test_session_round_trips_through_json() {
        let mut log = SessionLog::new("eightball_workspace");
        log.record("Will it build?", AnswerType::Positive, "Yes");

        let serialized = serde_json::to_string(&log).expect("Failed to serialize");
        let loaded: SessionLog =
            serde_json::from_str(&serialized).expect("JSON was not well-formatted");
        assert_eq!(loaded.path, log.path);
        assert_eq!(loaded.entries.len(), 1);
        assert_eq!(loaded.entries[0].answer_type, AnswerType::Positive);
    }

    #[test]
    fn test_dump_json_writes_session_file() {
        let workspace = std::env::temp_dir().join("eightball_session_test");
        let workspace = workspace.to_str().expect("temp path should be utf8");

        let mut log = SessionLog::new(workspace);
        log.record("", AnswerType::Random, "Signs point to yes");
        log.dump_json();

        let dump_file = format!("{}/sessions/{}", workspace, log.path);
        let loaded = SessionLog::load_from_file(&dump_file);
        assert_eq!(loaded.entries.len(), 1);
        let _ = fs::remove_dir_all(workspace);
    }
}
