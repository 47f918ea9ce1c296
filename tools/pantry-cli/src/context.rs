//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use pantry_cache::FileStore;
use pantry_commerce::cart::CartStore;
use pantry_commerce::catalog::Catalog;
use pantry_commerce::theme::ThemeStore;

use crate::config::{PantryConfig, CONFIG_NAMES};
use crate::output::Output;

/// Catalog used when the config does not name one.
const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: PantryConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    data_override: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, data: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            let path = PathBuf::from(path);
            (PantryConfig::load(&path)?, Some(path))
        } else {
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (PantryConfig::default(), None),
            }
        };

        if let Some(ref path) = config_path {
            output.debug(&format!("Using config {}", path.display()));
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
            data_override: data.map(PathBuf::from),
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(PantryConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    match PantryConfig::load(&config_path) {
                        Ok(config) => return Some((config, config_path)),
                        Err(e) => {
                            tracing::warn!(path = %config_path.display(), error = %e, "skipping unreadable config");
                        }
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Storage file, with `--data` taking precedence over the config.
    pub fn data_file(&self) -> PathBuf {
        let path = self
            .data_override
            .clone()
            .unwrap_or_else(|| self.config.storage.data_file.clone());
        self.resolve_path(&path)
    }

    /// Open the shared storage file.
    pub fn open_store(&self) -> Result<FileStore> {
        let path = self.data_file();
        self.output.debug(&format!("Using storage {}", path.display()));
        FileStore::open(&path).with_context(|| format!("Failed to open storage: {}", path.display()))
    }

    /// Open the cart over the shared storage file.
    pub fn cart(&self) -> Result<CartStore<FileStore>> {
        Ok(CartStore::open(self.open_store()?, self.config.cart.clone()))
    }

    /// Open the theme preference over the shared storage file.
    pub fn theme(&self) -> Result<ThemeStore<FileStore>> {
        Ok(ThemeStore::open(self.open_store()?, self.config.theme.clone()))
    }

    /// Load the configured catalog, or the bundled one.
    pub fn catalog(&self) -> Result<Catalog> {
        match self.config.storage.catalog {
            Some(ref path) => {
                let path = self.resolve_path(path);
                let json = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read catalog: {}", path.display()))?;
                Catalog::from_json(&json)
                    .with_context(|| format!("Failed to parse catalog: {}", path.display()))
            }
            None => Catalog::from_json(BUNDLED_CATALOG).context("Bundled catalog is invalid"),
        }
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = Catalog::from_json(BUNDLED_CATALOG).unwrap();
        assert!(!catalog.is_empty());
        assert!(catalog.products.iter().any(|p| p.has_variants()));
        assert!(catalog.products.iter().any(|p| p.single_item().is_some()));
    }

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("pantry.toml"),
            "[checkout]\nconfirm_within_minutes = 20\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, path) = Context::find_config(&nested).unwrap();
        assert_eq!(config.checkout.confirm_within_minutes, 20);
        assert_eq!(path, dir.path().join("pantry.toml"));
    }
}
