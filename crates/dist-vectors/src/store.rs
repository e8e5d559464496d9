//! Named vector storage
//!
//! Vector identity is the file name (`q_poisson.csv`): the same name in two
//! stores means the same function evaluated on the same grid.

use crate::format::{self, PersistencePolicy};
use dist_core::{Error, NumericVector, Result};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::trace;

/// Somewhere vectors can be saved and loaded by name
pub trait VectorStore {
    /// Load the vector stored under `name`
    fn load(&self, name: &str) -> Result<NumericVector>;

    /// Store `vector` under `name`, replacing any previous one
    fn save(&mut self, name: &str, vector: &NumericVector) -> Result<()>;

    /// Every stored name, sorted
    fn names(&self) -> Result<Vec<String>>;

    fn contains(&self, name: &str) -> bool {
        self.load(name).is_ok()
    }
}

/// One text file per vector inside a directory
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
    policy: PersistencePolicy,
}

impl DirectoryStore {
    /// Open an existing directory
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::not_found("directory", &root.display().to_string()));
        }
        Ok(Self {
            root,
            policy: PersistencePolicy::default(),
        })
    }

    /// Open `root`, creating it and any parents first
    pub fn create(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Self::open(root)
    }

    pub fn with_policy(mut self, policy: PersistencePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn policy(&self) -> &PersistencePolicy {
        &self.policy
    }

    /// Path a vector named `name` lives at
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}

impl VectorStore for DirectoryStore {
    fn load(&self, name: &str) -> Result<NumericVector> {
        let path = self.path(name);
        if !path.is_file() {
            return Err(Error::not_found("vector", name));
        }
        trace!("Loading {}", path.display());
        format::read(BufReader::new(File::open(path)?))
    }

    fn save(&mut self, name: &str, vector: &NumericVector) -> Result<()> {
        let path = self.path(name);
        trace!("Writing {} values to {}", vector.len(), path.display());
        self.policy.write(BufWriter::new(File::create(path)?), vector)
    }

    fn names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                if let Some(name) = entry.file_name().to_str() {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    fn contains(&self, name: &str) -> bool {
        self.path(name).is_file()
    }
}

/// In-memory store that keeps vectors exactly as given, grid included
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    vectors: BTreeMap<String, NumericVector>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

impl VectorStore for MemoryStore {
    fn load(&self, name: &str) -> Result<NumericVector> {
        self.vectors
            .get(name)
            .cloned()
            .ok_or_else(|| Error::not_found("vector", name))
    }

    fn save(&mut self, name: &str, vector: &NumericVector) -> Result<()> {
        self.vectors.insert(name.to_string(), vector.clone());
        Ok(())
    }

    fn names(&self) -> Result<Vec<String>> {
        Ok(self.vectors.keys().cloned().collect())
    }

    fn contains(&self, name: &str) -> bool {
        self.vectors.contains_key(name)
    }
}
