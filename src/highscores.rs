//! High score leaderboard system
//!
//! Persisted as a flat text file, one `name - score` line per entry. The
//! file is append-only; malformed lines are skipped when loading.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighScoreEntry {
    pub name: String,
    pub score: u32,
}

/// High score leaderboard, in file order
#[derive(Debug, Clone, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    /// Create an empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Load scores from disk. A missing file is a fresh leaderboard; any
    /// other read error is logged and treated the same way.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(text) => {
                let scores = Self::parse(&text);
                log::info!(
                    "Loaded {} high scores from {}",
                    scores.entries.len(),
                    path.as_ref().display()
                );
                scores
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Self::new(),
            Err(err) => {
                log::warn!(
                    "Could not read {}: {} - starting fresh",
                    path.as_ref().display(),
                    err
                );
                Self::new()
            }
        }
    }

    /// Parse the flat text format, skipping lines that do not scan.
    pub fn parse(text: &str) -> Self {
        let entries = text.lines().filter_map(parse_line).collect();
        Self { entries }
    }

    /// Append one entry to the score file and to the in-memory table.
    pub fn append<P: AsRef<Path>>(&mut self, path: P, name: &str, score: u32) -> io::Result<()> {
        let name = name.trim();
        let name = if name.is_empty() { "anonymous" } else { name };

        let mut file = fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)?;
        writeln!(file, "{} - {}", name, score)?;

        self.entries.push(HighScoreEntry {
            name: name.to_owned(),
            score,
        });
        Ok(())
    }

    /// The best `n` entries, highest score first.
    pub fn top(&self, n: usize) -> Vec<&HighScoreEntry> {
        let mut sorted: Vec<&HighScoreEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.score.cmp(&a.score));
        sorted.truncate(n);
        sorted
    }

    /// The best score on record, if any.
    pub fn top_score(&self) -> Option<u32> {
        self.entries.iter().map(|e| e.score).max()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One `name - score` line. The name may itself contain ` - `, so the
/// score is taken from the right.
fn parse_line(line: &str) -> Option<HighScoreEntry> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (name, score) = line.rsplit_once(" - ")?;
    let score = score.trim().parse().ok()?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(HighScoreEntry {
        name: name.to_owned(),
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_malformed_lines() {
        let text = "ada - 1200\n\ngarbage line\nbob - not-a-number\n - 50\ncarol - 900\n";
        let scores = HighScores::parse(text);
        assert_eq!(scores.entries.len(), 2);
        assert_eq!(scores.entries[0].name, "ada");
        assert_eq!(scores.entries[0].score, 1200);
        assert_eq!(scores.entries[1].name, "carol");
    }

    #[test]
    fn names_may_contain_the_separator() {
        let scores = HighScores::parse("a - b - 300\n");
        assert_eq!(scores.entries.len(), 1);
        assert_eq!(scores.entries[0].name, "a - b");
        assert_eq!(scores.entries[0].score, 300);
    }

    #[test]
    fn top_sorts_descending() {
        let scores = HighScores::parse("ada - 100\nbob - 900\ncarol - 500\n");
        let top = scores.top(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].score, 900);
        assert_eq!(top[1].score, 500);
        assert_eq!(scores.top_score(), Some(900));
    }

    #[test]
    fn append_then_reload_round_trips() {
        let path = std::env::temp_dir().join(format!(
            "astro_blast_scores_{}_{}.txt",
            std::process::id(),
            line!()
        ));
        let _ = fs::remove_file(&path);

        let mut scores = HighScores::new();
        scores.append(&path, "ada", 1500).unwrap();
        scores.append(&path, "  ", 10).unwrap();

        let reloaded = HighScores::load(&path);
        assert_eq!(reloaded.entries.len(), 2);
        assert_eq!(reloaded.entries[0].name, "ada");
        assert_eq!(reloaded.entries[1].name, "anonymous");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_a_fresh_table() {
        let scores = HighScores::load("definitely/not/here/scores.txt");
        assert!(scores.is_empty());
        assert_eq!(scores.top_score(), None);
    }
}
