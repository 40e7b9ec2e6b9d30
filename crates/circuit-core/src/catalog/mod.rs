//! Step catalogs: the fixed, ordered flows a session is started from.
//!
//! A catalog is authored before any session starts and is only ever read by
//! the controller, which snapshots it into each new session. The built-in
//! flow follows the usual BS 7671 sequence for a new circuit; a different
//! flow can be loaded from a JSON array of steps.

use std::{collections::HashSet, fs, path::Path};

use crate::{
    error::{BenchError, Result},
    models::TestStep,
};

mod builtin;

/// Validated, ordered sequence of test steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    steps: Vec<TestStep>,
}

impl Catalog {
    /// Creates a catalog from authored steps.
    ///
    /// # Errors
    ///
    /// Returns `BenchError::EmptyCatalog` when `steps` is empty and
    /// `BenchError::InvalidInput` for blank or duplicate step ids.
    pub fn new(steps: Vec<TestStep>) -> Result<Self> {
        if steps.is_empty() {
            return Err(BenchError::EmptyCatalog);
        }

        let mut seen = HashSet::new();
        for step in &steps {
            if step.id.trim().is_empty() {
                return Err(BenchError::invalid_input("id")
                    .with_reason(format!("Step '{}' has a blank id", step.title)));
            }
            if !seen.insert(step.id.as_str()) {
                return Err(BenchError::invalid_input("id")
                    .with_reason(format!("Duplicate step id '{}'", step.id)));
            }
        }

        Ok(Self { steps })
    }

    /// The default flow shipped with the crate.
    pub fn builtin() -> Self {
        Self {
            steps: builtin::steps(),
        }
    }

    /// Parses a catalog from a JSON array of steps.
    ///
    /// # Errors
    ///
    /// Returns `BenchError::Serialization` if the JSON is not an array of
    /// steps, plus any error of [`Catalog::new`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let steps: Vec<TestStep> = serde_json::from_str(json)?;
        Self::new(steps)
    }

    /// Reads a catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `BenchError::FileSystem` if the file cannot be read, plus any
    /// error of [`Catalog::from_json_str`].
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| BenchError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&json)
    }

    /// Steps in flow order.
    pub fn steps(&self) -> &[TestStep] {
        &self.steps
    }

    /// Looks up a step by id.
    pub fn get(&self, step_id: &str) -> Option<&TestStep> {
        self.steps.iter().find(|step| step.id == step_id)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TestStep> {
        self.steps.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AsRef<[TestStep]> for Catalog {
    fn as_ref(&self) -> &[TestStep] {
        &self.steps
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a TestStep;
    type IntoIter = std::slice::Iter<'a, TestStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
