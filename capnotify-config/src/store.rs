// Durable storage for settings groups

use crate::{ConfigError, ConfigLoader, Result};
use serde_json::{Map, Value};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A key-group store: settings are written as named groups and made durable
/// with an explicit flush.
pub trait SettingsStore: Send {
    /// Current value of a group, if present
    fn group(&self, name: &str) -> Option<Value>;

    /// Replace a group in memory
    fn set_group(&mut self, name: &str, value: Value) -> Result<()>;

    /// Write all groups to the durable medium
    fn flush(&mut self) -> Result<()>;
}

/// In-process store. `flush` snapshots the groups so tests can tell
/// written-but-unflushed state from persisted state.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    groups: Map<String, Value>,
    persisted: Map<String, Value>,
    flushes: usize,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already persisted document
    pub fn with_document(document: Map<String, Value>) -> Self {
        Self {
            groups: document.clone(),
            persisted: document,
            flushes: 0,
        }
    }

    /// Group as of the last flush
    pub fn persisted_group(&self, name: &str) -> Option<&Value> {
        self.persisted.get(name)
    }

    /// Number of flushes so far
    pub fn flush_count(&self) -> usize {
        self.flushes
    }
}

impl SettingsStore for MemorySettingsStore {
    fn group(&self, name: &str) -> Option<Value> {
        self.groups.get(name).cloned()
    }

    fn set_group(&mut self, name: &str, value: Value) -> Result<()> {
        self.groups.insert(name.to_string(), value);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.persisted = self.groups.clone();
        self.flushes += 1;
        Ok(())
    }
}

/// Settings file on disk. The format follows the file extension
/// (`.json`, `.toml`, `.yaml`/`.yml`).
#[derive(Debug)]
pub struct FileSettingsStore {
    path: PathBuf,
    loader: ConfigLoader,
    document: Map<String, Value>,
}

impl FileSettingsStore {
    /// Open a settings file. A missing file starts out empty and is created on
    /// the first flush.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let loader = ConfigLoader::auto(&path)?;

        let document = if path.exists() {
            match loader.load_file(&path)? {
                Value::Object(map) => map,
                Value::Null => Map::new(),
                _ => {
                    return Err(ConfigError::ParseError(format!(
                        "{} does not contain a table at the top level",
                        path.display()
                    )));
                }
            }
        } else {
            debug!("settings file {} not found, starting empty", path.display());
            Map::new()
        };

        Ok(Self {
            path,
            loader,
            document,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn group(&self, name: &str) -> Option<Value> {
        self.document.get(name).cloned()
    }

    fn set_group(&mut self, name: &str, value: Value) -> Result<()> {
        self.document.insert(name.to_string(), value);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        let rendered = self.loader.render(&Value::Object(self.document.clone()))?;
        write_atomically(&self.path, rendered.as_bytes())?;
        debug!("settings written to {}", self.path.display());
        Ok(())
    }
}

/// Write through a sibling temp file, fsync it, then rename over the target.
fn write_atomically(path: &Path, contents: &[u8]) -> Result<()> {
    let file_name = path.file_name().ok_or_else(|| {
        ConfigError::LoadError(format!("{} is not a file path", path.display()))
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut tmp_name = file_name.to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);

    {
        let mut file = File::create(&tmp_path)?;
        file.write_all(contents)?;
        file.sync_all()?;
    }
    fs::rename(&tmp_path, path)?;

    Ok(())
}
