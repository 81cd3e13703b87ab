//! This module persists the board and the expanded-day map to local files
//!
//! Both records live as independent JSON files in a data folder. Any failure
//! (unusable folder, write error, corrupt data) degrades the store to a
//! process-lifetime in-memory copy; nothing here panics and no error escapes
//! this boundary.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::accordion::ExpandedState;
use crate::board::TaskBoard;
use crate::config;

const TASKS_FILE: &str = "tasks_v1.json";
const EXPANDED_FILE: &str = "expanded_v1.json";
const PROBE_FILE: &str = ".probe";

/// Where a `save_*` call ended up
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Written to the backing file
    Persisted,
    /// Kept in the in-memory fallback only
    MemoryOnly,
}

/// Persistence for the two per-day records, with an in-memory fallback
#[derive(Debug)]
pub struct Store {
    folder: PathBuf,
    available: bool,
    memory_tasks: TaskBoard,
    memory_expanded: ExpandedState,
}

impl Store {
    /// The default data folder: `$XDG_CONFIG_HOME` (or `~/.config`) plus
    /// [`config::DATA_DIR_NAME`]
    pub fn default_folder() -> PathBuf {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
            .unwrap_or_else(|| PathBuf::from("."));
        base.join(config::DATA_DIR_NAME.lock().unwrap().as_str())
    }

    /// Open a store over the given folder.
    ///
    /// The folder is created and probed for writability; when that fails the
    /// store starts in memory-only mode.
    pub fn open(folder: &Path) -> Self {
        let available = probe(folder);
        if !available {
            log::warn!("Data folder {:?} is not usable, keeping data in memory only", folder);
        }
        Self {
            folder: PathBuf::from(folder),
            available,
            memory_tasks: TaskBoard::default(),
            memory_expanded: ExpandedState::default(),
        }
    }

    /// Whether saves currently reach the backing files
    pub fn is_file_backed(&self) -> bool {
        self.available
    }

    /// Load the task board.
    ///
    /// A missing file yields an empty board. A corrupt file yields an empty
    /// board and switches to memory-only, so the damaged file is never
    /// overwritten by later saves.
    pub fn load_tasks(&mut self) -> TaskBoard {
        if !self.available {
            return self.memory_tasks.clone();
        }
        match read_json(&self.folder.join(TASKS_FILE)) {
            Ok(Some(board)) => board,
            Ok(None) => TaskBoard::default(),
            Err(err) => {
                log::warn!("Unable to load the task file: {}", err);
                self.available = false;
                self.memory_tasks.clone()
            }
        }
    }

    /// Save the task board
    pub fn save_tasks(&mut self, tasks: &TaskBoard) -> SaveOutcome {
        if self.available {
            match write_json(&self.folder.join(TASKS_FILE), tasks) {
                Ok(()) => return SaveOutcome::Persisted,
                Err(err) => {
                    log::warn!("Unable to save the task file: {}", err);
                    self.available = false;
                }
            }
        }
        self.memory_tasks = tasks.clone();
        SaveOutcome::MemoryOnly
    }

    /// Load the expanded-day map.
    ///
    /// Missing or corrupt data yields an empty map; this record is derived
    /// state and safe to overwrite later.
    pub fn load_expanded(&mut self) -> ExpandedState {
        if !self.available {
            return self.memory_expanded.clone();
        }
        match read_json(&self.folder.join(EXPANDED_FILE)) {
            Ok(Some(state)) => state,
            Ok(None) => ExpandedState::default(),
            Err(err) => {
                log::warn!("Unable to load the expanded-day file: {}", err);
                ExpandedState::default()
            }
        }
    }

    /// Save the expanded-day map
    pub fn save_expanded(&mut self, state: &ExpandedState) -> SaveOutcome {
        if self.available {
            match write_json(&self.folder.join(EXPANDED_FILE), state) {
                Ok(()) => return SaveOutcome::Persisted,
                Err(err) => {
                    log::warn!("Unable to save the expanded-day file: {}", err);
                    self.available = false;
                }
            }
        }
        self.memory_expanded = state.clone();
        SaveOutcome::MemoryOnly
    }
}

/// Check that the folder exists (creating it if needed) and accepts writes
fn probe(folder: &Path) -> bool {
    if let Err(err) = fs::create_dir_all(folder) {
        log::warn!("Unable to create {:?}: {}", folder, err);
        return false;
    }
    let probe_path = folder.join(PROBE_FILE);
    match fs::write(&probe_path, b"probe") {
        Ok(()) => {
            let _ = fs::remove_file(&probe_path);
            true
        }
        Err(err) => {
            log::warn!("Unable to write into {:?}: {}", folder, err);
            false
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>, Box<dyn Error>> {
    let file = match fs::File::open(path) {
        Err(err) => {
            if err.kind() == std::io::ErrorKind::NotFound {
                return Ok(None);
            }
            return Err(format!("unable to open file {:?}: {}", path, err).into());
        }
        Ok(file) => file,
    };
    let value = serde_json::from_reader(file)?;
    Ok(Some(value))
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), Box<dyn Error>> {
    let file = fs::File::create(path)?;
    serde_json::to_writer(file, value)?;
    Ok(())
}
