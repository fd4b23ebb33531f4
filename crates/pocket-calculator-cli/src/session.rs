//! Calculator session: an engine driver plus optional persistence
//!
//! A [`Session`] restores the engine from a [`StateStore`] on open, feeds it
//! key sequences, appends every result published on `=` to the results
//! file, and saves the engine back on demand.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use pocket_calculator::prelude::*;
use tracing::debug;

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};

/// JSON snapshot file holding the engine between invocations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Creates a store backed by `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the stored snapshot, `None` when no file exists yet
    pub fn load_snapshot(&self) -> CliResult<Option<Snapshot>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Snapshot::from_json(&json)
            .map(Some)
            .map_err(|e| CliError::state(&self.path, e))
    }

    /// Restores the stored engine, `None` when no file exists yet
    pub fn load(&self) -> CliResult<Option<Calculator>> {
        let Some(snapshot) = self.load_snapshot()? else {
            return Ok(None);
        };
        let calculator =
            Calculator::restore(&snapshot).map_err(|e| CliError::state(&self.path, e))?;
        debug!(path = %self.path.display(), "engine restored");
        Ok(Some(calculator))
    }

    /// Writes the engine snapshot, creating parent directories
    pub fn save(&self, calculator: &Calculator) -> CliResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut json = calculator.snapshot().to_json_pretty()?;
        json.push('\n');
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), "engine saved");
        Ok(())
    }

    /// Deletes the file. Returns false when there was nothing to delete.
    pub fn clear(&self) -> CliResult<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

/// A running calculator session
#[derive(Debug)]
pub struct Session {
    driver: EngineDriver,
    store: Option<StateStore>,
    results_path: Option<PathBuf>,
}

impl Session {
    /// Creates a session without persistence
    #[must_use]
    pub fn new(width: Option<usize>) -> Self {
        Self {
            driver: EngineDriver::new().with_width(width),
            store: None,
            results_path: None,
        }
    }

    /// Opens a session from configuration, restoring saved state if any
    pub fn open(config: &CliConfig) -> CliResult<Self> {
        let mut session = Self::new(config.display_width());
        session.results_path.clone_from(&config.results_path);
        if let Some(path) = &config.state_path {
            let store = StateStore::new(path);
            if let Some(calculator) = store.load()? {
                session.driver = session.driver.with_calculator(calculator);
            }
            session.store = Some(store);
        }
        Ok(session)
    }

    /// Returns the engine
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        self.driver.calculator()
    }

    /// Returns the display text cut to the configured width
    #[must_use]
    pub fn visible_display(&self) -> &str {
        self.driver.visible_display()
    }

    /// Feeds a key sequence, then appends any published results.
    ///
    /// Nothing is pressed if a key fails to parse.
    pub fn feed(&mut self, keys: &str) -> CliResult<()> {
        self.driver.press_keys(keys)?;
        self.flush_results()
    }

    /// Takes the results published since the last flush and appends them
    /// to the results file
    pub fn flush_results(&mut self) -> CliResult<()> {
        let lines = self.driver.sink_mut().take();
        let Some(path) = &self.results_path else {
            return Ok(());
        };
        if lines.is_empty() {
            return Ok(());
        }
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        for line in &lines {
            writeln!(file, "{line}")?;
        }
        debug!(count = lines.len(), path = %path.display(), "results appended");
        Ok(())
    }

    /// Saves the engine to the state file, if one is configured
    pub fn save(&self) -> CliResult<()> {
        match &self.store {
            Some(store) => store.save(self.driver.calculator()),
            None => Ok(()),
        }
    }
}

impl CalculatorDriver for Session {
    fn press(&mut self, action: KeyAction) {
        self.driver.press(action);
    }

    fn display(&self) -> String {
        self.driver.display()
    }

    fn is_error(&self) -> bool {
        self.driver.is_error()
    }
}
