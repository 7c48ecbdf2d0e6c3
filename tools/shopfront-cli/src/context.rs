//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shopfront_cache::{Cache, Slot};
use shopfront_commerce::cart::{cart_slot, CartState, CartStore};
use shopfront_commerce::catalog::Catalog;

use crate::config::{CliConfig, StorageBackend, CONFIG_NAMES};
use crate::output::Output;

/// The cart store as the CLI opens it.
pub type Cart = CartStore<Slot<CartState>>;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Self::load_from(&cwd, config_path, output)
    }

    fn load_from(cwd: &Path, config_path: Option<&str>, output: Output) -> Result<Self> {
        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve(cwd, path);
                (CliConfig::load(&path)?, Some(path))
            }
            None => match find_config(cwd) {
                Some(path) => (CliConfig::load(&path)?, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd: cwd.to_path_buf(),
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }

    /// Read and decode the configured product feed.
    pub fn open_catalog(&self) -> Result<Catalog> {
        let path = self.resolve_path(&self.config.catalog.path);
        let payload = std::fs::read_to_string(&path).with_context(|| {
            format!(
                "Failed to read catalog: {} (set [catalog] path in shopfront.toml)",
                path.display()
            )
        })?;
        let catalog = Catalog::from_json(&payload)
            .with_context(|| format!("Failed to parse catalog: {}", path.display()))?;
        tracing::debug!(path = %path.display(), products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Open the configured cart; notifications go to the terminal.
    pub fn open_cart(&self) -> Result<Cart> {
        let cache = match self.config.storage.backend {
            StorageBackend::File => {
                let dir = self.resolve_path(&self.config.storage.dir);
                Cache::open_dir(&dir)
                    .with_context(|| format!("Failed to open cart storage: {}", dir.display()))?
            }
            StorageBackend::Memory => Cache::memory(),
        };
        let slot = cart_slot(cache, &self.config.storage.key);
        self.output.debug(&format!("cart slot: {}", slot.key()));
        Ok(CartStore::open(slot, self.output.clone()))
    }
}

/// Find config file in directory tree.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    })
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}
