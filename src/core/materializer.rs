//! Redirect source generation for resolved packages

use crate::codegen::Reexporter;
use crate::error::{Resolution, SkipReason};
use crate::models::package::{NestingLevel, PackageDescriptor, ResolvedAlias};
use crate::output::logger::Logger;
use crate::utils::path_resolver::{entry_path, module_identifier, relative_reference};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Entry file extensions rewritten through the [`Reexporter`]
pub const REEXPORT_EXTENSIONS: [&str; 2] = ["lua", "luau"];

/// Entry file extensions forwarded with a plain `require`
pub const FORWARD_EXTENSIONS: [&str; 6] = ["json", "json5", "toml", "yml", "yaml", "txt"];

/// How an alias forwards to its entry file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectStrategy {
    /// Regenerate the module so its exported types survive
    Reexport,
    /// `return require(...)`
    Forward,
}

impl RedirectStrategy {
    /// Strategy for an entry file, `None` when its extension is unsupported.
    ///
    /// Only the suffix counts, so a file named `.json` is a JSON file.
    pub fn for_path(path: &Path) -> Option<Self> {
        let path = path.to_str()?;
        let has_suffix = |extensions: &[&str]| {
            extensions.iter().any(|extension| {
                path.strip_suffix(extension)
                    .is_some_and(|stem| stem.ends_with('.'))
            })
        };

        if has_suffix(&REEXPORT_EXTENSIONS[..]) {
            Some(RedirectStrategy::Reexport)
        } else if has_suffix(&FORWARD_EXTENSIONS[..]) {
            Some(RedirectStrategy::Forward)
        } else {
            None
        }
    }
}

/// Source of a plain forwarding module
pub fn forward_source(reference: &str) -> String {
    format!("return require(\"{}\")", reference)
}

/// Turns package descriptors into alias sources
pub struct EntryPointMaterializer {
    reexporter: Arc<dyn Reexporter>,
    logger: Arc<Logger>,
}

impl EntryPointMaterializer {
    pub fn new(reexporter: Arc<dyn Reexporter>, logger: Arc<Logger>) -> Self {
        Self { reexporter, logger }
    }

    /// Produce the alias of a package living in `package_dir`.
    ///
    /// The require path is rebuilt from the declared package name, not from
    /// the directory the package was found in.
    pub fn materialize(
        &self,
        descriptor: &PackageDescriptor,
        package_dir: &Path,
        level: NestingLevel,
    ) -> Resolution<ResolvedAlias> {
        let entry_path = entry_path(package_dir, &descriptor.main_path);

        let strategy = RedirectStrategy::for_path(Path::new(&descriptor.main_path)).ok_or_else(|| {
            SkipReason::UnsupportedExtension {
                path: entry_path.clone(),
            }
        })?;

        let content = fs::read_to_string(&entry_path).map_err(|err| {
            self.logger.trace(format!(
                "unable to read entry point of `{}` at `{}`: {}",
                descriptor.name,
                entry_path.display(),
                err
            ));
            SkipReason::EntryUnreadable {
                path: entry_path.clone(),
                message: err.to_string(),
            }
        })?;

        let reference = relative_reference(&descriptor.name, &descriptor.main_path, level);
        self.logger.trace(format!(
            "redirecting `{}` to `{}`",
            module_identifier(&descriptor.name, &descriptor.main_path),
            reference
        ));

        let redirect_source = match strategy {
            RedirectStrategy::Reexport => self
                .reexporter
                .reexport(&reference, &content)
                .map_err(|err| {
                    self.logger.warn(format!(
                        "  unable to re-export types for `{}` from `{}`: {}",
                        descriptor.name,
                        entry_path.display(),
                        err
                    ));
                    SkipReason::ReexportFailed {
                        path: entry_path.clone(),
                        message: err.to_string(),
                    }
                })?,
            RedirectStrategy::Forward => forward_source(&reference),
        };

        Ok(ResolvedAlias {
            name: descriptor.name.clone(),
            redirect_source,
        })
    }
}
