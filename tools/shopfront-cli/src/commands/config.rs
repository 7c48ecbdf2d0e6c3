//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use shopfront_commerce::catalog::Catalog;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, StorageBackend};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force, catalog } => init_config(force, &catalog, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(none, using defaults)"),
    }

    ctx.output.info("[catalog]");
    ctx.output.kv("path", &ctx.config.catalog.path);

    ctx.output.info("[storage]");
    ctx.output.kv("backend", &ctx.config.storage.backend.to_string());
    ctx.output.kv("dir", &ctx.config.storage.dir);
    ctx.output.kv("key", &ctx.config.storage.key);

    ctx.output.info("[logging]");
    ctx.output.kv("level", &ctx.config.logging.level.to_string());
    ctx.output.kv("format", &format!("{:?}", ctx.config.logging.format).to_lowercase());

    Ok(())
}

fn init_config(force: bool, catalog: &str, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("shopfront.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config(catalog))?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, mut warnings) = check_config(&ctx.config);

    let catalog_path = ctx.resolve_path(&ctx.config.catalog.path);
    match fs::read_to_string(&catalog_path) {
        Ok(payload) => {
            if let Err(e) = Catalog::from_json(&payload) {
                warnings.push(format!("catalog.path does not hold a product list: {e}"));
            }
        }
        Err(_) => warnings.push(format!(
            "catalog.path '{}' does not exist yet",
            catalog_path.display()
        )),
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// Static checks: returns errors and warnings.
fn check_config(config: &CliConfig) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if config.catalog.path.trim().is_empty() {
        errors.push("catalog.path is required".to_string());
    }

    if config.storage.key.trim().is_empty() {
        errors.push("storage.key is required".to_string());
    }

    match config.storage.backend {
        StorageBackend::File if config.storage.dir.trim().is_empty() => {
            errors.push("storage.dir is required for the file backend".to_string());
        }
        StorageBackend::Memory => {
            warnings.push("storage.backend 'memory' forgets the cart after every command".to_string());
        }
        StorageBackend::File => {}
    }

    (errors, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes_checks() {
        let (errors, warnings) = check_config(&CliConfig::default());
        assert!(errors.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_empty_key_is_an_error() {
        let mut config = CliConfig::default();
        config.storage.key = " ".to_string();
        let (errors, _) = check_config(&config);
        assert_eq!(errors, vec!["storage.key is required".to_string()]);
    }

    #[test]
    fn test_memory_backend_warns() {
        let mut config = CliConfig::default();
        config.storage.backend = StorageBackend::Memory;
        config.storage.dir = String::new();
        let (errors, warnings) = check_config(&config);
        assert!(errors.is_empty());
        assert_eq!(warnings.len(), 1);
    }
}
