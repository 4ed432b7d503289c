//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use storefront_commerce::catalog::MockCatalog;
use storefront_commerce::SessionId;
use storefront_observability::{LogLevel, StructuredLogger};

use crate::config::{StorefrontConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    pub config: StorefrontConfig,
    /// File the config was loaded from, if any.
    pub config_path: Option<PathBuf>,
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context, reading the config from `config_path` or the nearest
    /// config file above the working directory.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = resolve(&cwd, path);
            (StorefrontConfig::load(&path)?, Some(path))
        } else {
            match find_config(&cwd) {
                Some(path) => (StorefrontConfig::load(&path)?, Some(path)),
                None => (StorefrontConfig::default(), None),
            }
        };

        if let Some(path) = &config_path {
            output.debug(&format!("Using config: {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Build the product provider named by the config.
    pub fn catalog(&self) -> Result<MockCatalog> {
        let Some(path) = &self.config.catalog.path else {
            self.output.debug("Using built-in demo catalog");
            return Ok(MockCatalog::demo());
        };

        let path = resolve(self.config_dir(), path);
        self.output
            .debug(&format!("Loading catalog: {}", path.display()));
        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
        MockCatalog::from_json(&json)
            .with_context(|| format!("Invalid catalog: {}", path.display()))
    }

    /// Logger for one page view, configured from `[logging]`.
    ///
    /// `--verbose` lowers the level to debug.
    pub fn logger(&self, page: &str) -> StructuredLogger {
        let level = if self.output.is_verbose() {
            self.config.logging.level.min(LogLevel::Debug)
        } else {
            self.config.logging.level
        };

        StructuredLogger::new(SessionId::generate())
            .with_page(page)
            .with_min_level(level)
            .with_format(self.config.logging.format)
    }

    /// Destination for a rendered page: `--out`, then `[output] dir`, else
    /// stdout (`None`).
    pub fn output_path(&self, out: Option<&str>, file_name: &str) -> Option<PathBuf> {
        if let Some(out) = out {
            return Some(resolve(&self.cwd, out));
        }
        self.config
            .output
            .dir
            .as_deref()
            .map(|dir| resolve(self.config_dir(), dir).join(file_name))
    }

    /// Directory relative config paths resolve against.
    fn config_dir(&self) -> &Path {
        self.config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(&self.cwd)
    }
}

/// Find the nearest config file, walking up from `start`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_FILE_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

fn resolve(base: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
