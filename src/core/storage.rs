use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::config::commands_dir;
use super::utils::{ensure_dir, validate_name};
use crate::error::{GcmdError, Result};

/// One stage of a pipeline: a program and its verbatim argument string.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Step {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub args: String,
}

impl Step {
    pub fn new(name: impl Into<String>, args: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: args.into(),
        }
    }
}

/// A saved command, persisted as `<name>.json`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Recipe {
    #[serde(rename = "cmds", default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub stdin: bool,
}

impl Recipe {
    fn is_well_formed(&self) -> bool {
        !self.steps.is_empty() && self.steps.iter().all(|s| !s.name.is_empty())
    }
}

/// Handle on the directory of saved commands.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Opens the store for the current user (see [`commands_dir`]).
    pub fn open() -> Result<Self> {
        Ok(Self::at(commands_dir()?))
    }

    /// Opens a store rooted at an explicit directory.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Constructs the full path for a command file from its name.
    pub fn recipe_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", name))
    }

    /// Names of all saved commands, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(GcmdError::io("Failed to read command directory", &self.dir, e)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let ent = entry.map_err(|e| GcmdError::io("Failed to read command directory", &self.dir, e))?;
            if let Some(file_name) = ent.file_name().to_str() {
                if let Some(stem) = file_name.strip_suffix(".json") {
                    if !stem.is_empty() {
                        names.push(stem.to_string());
                    }
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Reads and decodes a saved command.
    pub fn load(&self, name: &str) -> Result<Recipe> {
        validate_name(name)?;
        let path = self.recipe_path(name);
        let file = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(GcmdError::NotFound(name.to_string()))
            }
            Err(e) => return Err(GcmdError::io("Failed to read command file", path, e)),
        };

        let recipe: Recipe = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            GcmdError::Parse {
                path: path.clone(),
                source: Some(e),
            }
        })?;
        if !recipe.is_well_formed() {
            return Err(GcmdError::Parse { path, source: None });
        }
        tracing::debug!(name, steps = recipe.steps.len(), stdin = recipe.stdin, "loaded command");
        Ok(recipe)
    }

    /// Writes a new command file. Never overwrites an existing one.
    pub fn save(&self, name: &str, recipe: &Recipe) -> Result<PathBuf> {
        validate_name(name)?;
        ensure_dir(&self.dir)?;
        let path = self.recipe_path(name);

        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let file = match options.open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(GcmdError::AlreadyExists(name.to_string()))
            }
            Err(e) => return Err(GcmdError::io("Failed to create command file", path, e)),
        };

        write_recipe(file, recipe)
            .map_err(|e| GcmdError::io("Failed to write command file", &path, e))?;
        tracing::debug!(path = %path.display(), "saved command");
        Ok(path)
    }

    /// Deletes a saved command.
    pub fn remove(&self, name: &str) -> Result<()> {
        validate_name(name)?;
        let path = self.recipe_path(name);
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "removed command");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(GcmdError::NotFound(name.to_string())),
            Err(e) => Err(GcmdError::io("Failed to remove command file", path, e)),
        }
    }
}

fn write_recipe(file: File, recipe: &Recipe) -> io::Result<()> {
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, recipe)?;
    writer.write_all(b"\n")?;
    writer.flush()
}
