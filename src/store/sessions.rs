//! Session store: a flat JSON array file, oldest session first.
//!
//! The same file format is read and written by the companion tools, so the
//! array layout and field names are fixed. The whole file is rewritten on
//! every change; histories stay small enough that this is never a problem.

use crate::errors::{AppError, AppResult};
use crate::models::WalkSession;
use crate::utils::path::ensure_parent_dir;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn open(path: &str) -> Self {
        Self {
            path: PathBuf::from(path),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the whole history. A missing or empty file is an empty history;
    /// a file that does not parse as a session array is an error.
    pub fn load(&self) -> AppResult<Vec<WalkSession>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content)
            .map_err(|e| AppError::Store(format!("{}: {}", self.path.display(), e)))
    }

    /// Write the whole history back, pretty-printed.
    pub fn save(&self, sessions: &[WalkSession]) -> AppResult<()> {
        ensure_parent_dir(&self.path)?;
        let json = serde_json::to_string_pretty(sessions)?;
        fs::write(&self.path, json + "\n")?;
        Ok(())
    }

    /// Insert a session keeping the array ordered by date. A session with
    /// the same timestamp as an existing one lands after it.
    ///
    /// Returns the position the session was inserted at.
    pub fn insert(&self, session: WalkSession) -> AppResult<usize> {
        let mut sessions = self.load()?;
        let pos = sessions.partition_point(|s| s.date <= session.date);
        sessions.insert(pos, session);
        self.save(&sessions)?;
        Ok(pos)
    }

    /// Sessions whose local calendar date matches `date`, with their
    /// positions in the full history.
    pub fn sessions_on(&self, date: NaiveDate) -> AppResult<Vec<(usize, WalkSession)>> {
        let sessions = self.load()?;
        Ok(sessions
            .into_iter()
            .enumerate()
            .filter(|(_, s)| s.local_date() == date)
            .collect())
    }

    /// Remove the session at `pos` in the full history.
    pub fn remove_at(&self, pos: usize) -> AppResult<WalkSession> {
        let mut sessions = self.load()?;
        if pos >= sessions.len() {
            return Err(AppError::InvalidIndex(pos));
        }
        let removed = sessions.remove(pos);
        self.save(&sessions)?;
        Ok(removed)
    }
}
