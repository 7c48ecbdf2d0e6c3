//! CLI command implementations.

pub mod browse;
pub mod cart;
pub mod categories;
pub mod config;

use clap::{Args, Subcommand};
use shopfront_commerce::search::SortOrder;
use shopfront_commerce::ProductId;

/// Arguments for the browse command.
#[derive(Args)]
pub struct BrowseArgs {
    /// Case-insensitive text matched against title and description.
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Category to show ("all" for every category).
    #[arg(short, long, default_value = "all")]
    pub category: String,

    /// Sort order: default, price-asc, price-desc, name-asc, name-desc.
    #[arg(long, default_value = "default")]
    pub sort: SortOrder,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart (the default).
    Show,
    /// Add one unit of a catalog product.
    Add {
        /// Product ID.
        id: ProductId,
    },
    /// Remove a product's line.
    Remove {
        /// Product ID.
        id: ProductId,
    },
    /// Set a line's quantity; zero or less removes it.
    Set {
        /// Product ID.
        id: ProductId,
        /// New quantity.
        #[arg(allow_hyphen_values = true)]
        quantity: i64,
    },
    /// Empty the cart.
    Clear {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
    /// Apply a raw action object, e.g. '{"type":"CLEAR_CART"}'.
    Dispatch {
        /// Action JSON.
        action: String,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,

        /// Catalog file to point at.
        #[arg(long, default_value = "products.json")]
        catalog: String,
    },
    /// Validate the config file.
    Validate,
}
