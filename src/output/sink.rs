use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TeamError};

pub const DEFAULT_OUTPUT_PATH: &str = "file.txt";

/// One qualifying team, written as a single JSON line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub battle_team: Vec<String>,
    pub num_advantages: usize,
}

/// Destination for qualifying teams. Appends are synchronous and in discovery order.
pub trait RecordSink {
    fn append(&mut self, record: &TeamRecord) -> Result<()>;
}

impl RecordSink for Vec<TeamRecord> {
    fn append(&mut self, record: &TeamRecord) -> Result<()> {
        self.push(record.clone());
        Ok(())
    }
}

/// Append-only line-delimited JSON file. Existing lines are never touched.
#[derive(Debug)]
pub struct JsonlSink {
    path: PathBuf,
    file: File,
    written: usize,
}

impl JsonlSink {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| TeamError::io(path.display().to_string(), e))?;
        Ok(Self {
            path,
            file,
            written: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records appended through this handle.
    pub fn written(&self) -> usize {
        self.written
    }
}

impl RecordSink for JsonlSink {
    fn append(&mut self, record: &TeamRecord) -> Result<()> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');
        self.file
            .write_all(line.as_bytes())
            .and_then(|()| self.file.flush())
            .map_err(|e| TeamError::io(self.path.display().to_string(), e))?;
        self.written += 1;
        Ok(())
    }
}
