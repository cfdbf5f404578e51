//! Alias directory generation
//!
//! Walks the install directory, resolves every package concurrently, then
//! rebuilds the output directory from scratch with one alias per package.
//! Failures stay local to the package they concern.

use crate::codegen::Reexporter;
use crate::core::materializer::EntryPointMaterializer;
use crate::core::parallel::parallel_process;
use crate::core::walker::DirectoryWalker;
use crate::error::{NpmLuauError, Resolution, Result, SkipReason};
use crate::models::package::{BuildReport, Candidate, ResolvedAlias};
use crate::output::logger::Logger;
use crate::parsers::package_json::MetadataResolver;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Where and how alias files are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    pub output: PathBuf,
    pub extension: String,
}

/// Orchestrates walking, resolution and alias writing
pub struct AliasBuilder {
    walker: DirectoryWalker,
    resolver: MetadataResolver,
    materializer: EntryPointMaterializer,
    logger: Arc<Logger>,
}

impl AliasBuilder {
    pub fn new(reexporter: Arc<dyn Reexporter>, logger: Arc<Logger>) -> Self {
        Self {
            walker: DirectoryWalker::new(logger.clone()),
            resolver: MetadataResolver::new(logger.clone()),
            materializer: EntryPointMaterializer::new(reexporter, logger.clone()),
            logger,
        }
    }

    /// Resolve one candidate into an alias
    pub fn resolve_candidate(&self, candidate: &Candidate) -> Resolution<ResolvedAlias> {
        let descriptor = self.resolver.resolve(candidate)?;
        self.materializer
            .materialize(&descriptor, &candidate.path(), candidate.level)
    }

    /// Resolve every package of `install_dir`.
    ///
    /// Aliases are keyed by package name; when two directories declare the
    /// same name, the first one in walk order wins.
    pub fn resolve_all(&self, install_dir: &Path) -> (Vec<ResolvedAlias>, Vec<(PathBuf, SkipReason)>) {
        let candidates = self.walker.candidates(install_dir);

        let outcomes = parallel_process(candidates, |candidate| {
            let result = self.resolve_candidate(&candidate);
            (candidate.path(), result)
        });

        let mut aliases: BTreeMap<String, ResolvedAlias> = BTreeMap::new();
        let mut skipped = Vec::new();

        for (path, outcome) in outcomes {
            match outcome {
                Ok(alias) => {
                    if aliases.contains_key(&alias.name) {
                        self.logger.debug(format!(
                            "ignoring `{}`: package `{}` is already aliased",
                            path.display(),
                            alias.name
                        ));
                        continue;
                    }
                    aliases.insert(alias.name.clone(), alias);
                }
                Err(reason) => {
                    self.logger
                        .debug(format!("skipping `{}`: {}", path.display(), reason));
                    skipped.push((path, reason));
                }
            }
        }

        (aliases.into_values().collect(), skipped)
    }

    /// Regenerate the output directory so it matches the installed packages
    pub fn build(&self, install_dir: &Path, options: &BuildOptions) -> BuildReport {
        let (aliases, skipped) = self.resolve_all(install_dir);

        self.logger
            .info(format!("found {} package(s) to alias", aliases.len()));

        // Absence is the common case and a concurrent run may recreate it first
        let _ = fs::remove_dir_all(&options.output);
        let _ = fs::create_dir_all(&options.output);

        let resolved = aliases.iter().map(|alias| alias.name.clone()).collect();

        let write_results = parallel_process(aliases, |alias| {
            let path = alias.file_path(&options.output, &options.extension);
            let result = write_alias(&alias, &path);
            (alias.name, path, result)
        });

        let mut failed_writes = Vec::new();
        for (name, path, result) in write_results {
            if let Err(err) = result {
                self.logger.warn(format!(
                    "unable to write require redirection file at `{}` for `{}`: {}",
                    path.display(),
                    name,
                    err
                ));
                failed_writes.push(name);
            }
        }

        BuildReport {
            resolved,
            skipped,
            failed_writes,
        }
    }
}

/// Write one alias file, creating the folders a scoped name implies
fn write_alias(alias: &ResolvedAlias, path: &Path) -> Result<()> {
    let escapes_output = Path::new(&alias.name)
        .components()
        .any(|component| !matches!(component, Component::Normal(_)));
    if escapes_output {
        return Err(NpmLuauError::Write {
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "package name is not a relative path",
            ),
        });
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| NpmLuauError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, &alias.redirect_source).map_err(|source| NpmLuauError::Write {
        path: path.to_path_buf(),
        source,
    })
}
