//! Preparing the process for a report render.

/// Directory layout of a report project
pub mod dirs;
/// Dotfile (`.env`) loading
pub mod dotenv;
/// Process-wide logging initialization
pub mod logging;
/// Deterministic render seeds
pub mod seed;

pub use dirs::{ensure_processed_dir, DirectoryError};
pub use dotenv::DotenvFile;

use crate::core::env::{EnvStore, ProcessEnv};
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Bootstrap of the report environment.
///
/// Runs once, before any report content is generated: initializes logging,
/// ensures the processed-data directory exists, and loads `<root>/.env` into
/// the environment if present. Recoverable failures (the directory cannot be
/// created, the dotfile cannot be read) are logged as warnings and do not
/// abort the render.
///
/// ```no_run
/// use report_setup::Bootstrap;
///
/// fn main() -> anyhow::Result<()> {
///     Bootstrap::new()
///         .project_root("/home/user/reports/quarterly")
///         .run()?;
///     Ok(())
/// }
/// ```
pub struct Bootstrap<E: EnvStore = ProcessEnv> {
    project_root: Option<PathBuf>,
    dotenv: Option<bool>,
    env: E,
}

impl Bootstrap<ProcessEnv> {
    pub fn new() -> Self {
        Self {
            project_root: None,
            dotenv: None,
            env: ProcessEnv,
        }
    }
}

impl Default for Bootstrap<ProcessEnv> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EnvStore> Bootstrap<E> {
    /// Use an explicit project root instead of the current working directory.
    pub fn project_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.project_root = Some(root.into());
        self
    }

    /// Force the dotenv option.
    ///
    /// `false` skips the dotfile even when it exists. The default (`None`)
    /// loads it when present.
    pub fn dotenv<I: Into<Option<bool>>>(mut self, dotenv: I) -> Self {
        self.dotenv = dotenv.into();
        self
    }

    /// Write variables into `env` instead of the process environment.
    pub fn env_store<T: EnvStore>(self, env: T) -> Bootstrap<T> {
        Bootstrap {
            project_root: self.project_root,
            dotenv: self.dotenv,
            env,
        }
    }

    /// Run the bootstrap, returning the environment store.
    ///
    /// Only unexpected conditions (the current working directory cannot be
    /// determined) surface as errors.
    pub fn run(mut self) -> anyhow::Result<E> {
        logging::init();

        let root = match self.project_root.take() {
            Some(root) => root,
            None => std::env::current_dir().context("determining the project root")?,
        };

        // The render can proceed without the directory, later stages that
        // write into it will fail on their own terms.
        if let Err(err) = ensure_processed_dir(&root) {
            log::warn!("{err}");
        }

        let path = root.join(".env");
        if self.dotenv.unwrap_or(true) && path.is_file() {
            match DotenvFile::read(&path) {
                Ok(file) => {
                    let loaded = file.apply(&mut self.env);
                    log::info!("Loaded {} variable(s) from {}", loaded, path.display());
                }
                Err(err) => {
                    log::warn!("Unable to read dotfile {}: {}", path.display(), err);
                }
            }
        }

        Ok(self.env)
    }
}

/// Configure the process for a report render rooted at `project_root`.
///
/// Uses the current working directory when `project_root` is `None`. This is
/// the plain-function form of [`Bootstrap`] for callers without further
/// options.
pub fn configure_environment(project_root: Option<&Path>) -> anyhow::Result<()> {
    let mut bootstrap = Bootstrap::new();
    if let Some(root) = project_root {
        bootstrap = bootstrap.project_root(root);
    }
    bootstrap.run()?;
    Ok(())
}
