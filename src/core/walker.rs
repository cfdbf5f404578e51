//! Install directory walking
//!
//! The layout of an install directory is known in advance: packages sit
//! directly under it, or one level down inside an `@scope` folder. The walk
//! is therefore two fixed passes rather than a general recursion.

use crate::core::parallel::parallel_process;
use crate::models::package::{is_hidden_name, is_scope_name, Candidate, NestingLevel};
use crate::output::logger::Logger;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Enumerates candidate package directories of an install directory
pub struct DirectoryWalker {
    logger: Arc<Logger>,
}

impl DirectoryWalker {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    /// List every candidate under `root`, sorted by parent then name.
    ///
    /// An unreadable root yields no candidates; whether a missing install
    /// directory is fatal is for the caller to decide.
    pub fn candidates(&self, root: &Path) -> Vec<Candidate> {
        let mut candidates = Vec::new();
        let mut scopes: Vec<PathBuf> = Vec::new();

        for name in self.list(root) {
            if is_hidden_name(&name) {
                continue;
            }
            if is_scope_name(&name) {
                scopes.push(root.join(name));
            } else {
                candidates.push(Candidate::new(root, name, NestingLevel::TOP));
            }
        }

        let scoped = parallel_process(scopes, |scope| {
            self.list(&scope)
                .into_iter()
                .filter(|name| !is_hidden_name(name))
                .map(|name| Candidate::new(scope.clone(), name, NestingLevel::TOP.deeper()))
                .collect::<Vec<_>>()
        });
        candidates.extend(scoped.into_iter().flatten());

        candidates.sort();
        candidates
    }

    fn list(&self, dir: &Path) -> Vec<String> {
        match fs::read_dir(dir) {
            Ok(entries) => entries
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.file_name().to_string_lossy().into_owned())
                .collect(),
            Err(err) => {
                self.logger
                    .trace(format!("unable to list `{}`: {}", dir.display(), err));
                Vec::new()
            }
        }
    }
}
