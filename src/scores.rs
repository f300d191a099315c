//! High score persistence.
//!
//! Scores live in a JSON file under the platform data directory, one
//! record per finished winning game: player name, score, date.

use chrono::{DateTime, Local};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

/// One finished game on the score list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub player: String,
    pub score: f64,
    pub date: DateTime<Local>,
}

/// Reads and appends score records.
pub struct ScoreBoard {
    path: PathBuf,
}

impl ScoreBoard {
    /// Open the score board at the platform location, creating the
    /// directory if needed.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "minefield").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "could not determine data directory")
        })?;

        let data_dir = project_dirs.data_dir();
        fs::create_dir_all(data_dir)?;

        Ok(Self {
            path: data_dir.join("scores.json"),
        })
    }

    /// Open a score board backed by an explicit file.
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// All recorded scores, in file order. A missing file is an empty list.
    pub fn load(&self) -> io::Result<Vec<ScoreEntry>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        serde_json::from_str(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Append one entry and rewrite the file.
    ///
    /// The new list goes to a sibling temp file first and is renamed over
    /// the score file, so an interrupted write never loses the history.
    pub fn record(&self, entry: ScoreEntry) -> io::Result<()> {
        let mut entries = self.load()?;
        entries.push(entry);

        let data = serde_json::to_string_pretty(&entries)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &self.path)
    }

    /// The best `n` scores, highest first.
    pub fn top(&self, n: usize) -> io::Result<Vec<ScoreEntry>> {
        let mut entries = self.load()?;
        entries.sort_by(|a, b| b.score.total_cmp(&a.score));
        entries.truncate(n);
        Ok(entries)
    }
}
