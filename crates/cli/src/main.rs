//! Shopfront CLI - browse the catalog and manage the cart and wishlist.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! shop catalog --category Clothing --page 1
//!
//! # Search by name, description, or tag
//! shop search decor
//!
//! # Cart and wishlist
//! shop cart add product-1
//! shop cart show
//! shop wishlist toggle product-3
//!
//! # Profile: wishlist and order history
//! shop profile
//! ```
//!
//! State is kept as JSON files under `SHOPFRONT_DATA_DIR` (default
//! `.shopfront`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use shopfront_storefront::AppError;
use shopfront_storefront::catalog::ALL_CATEGORIES;
use shopfront_storefront::config::ShopConfig;
use shopfront_storefront::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "shop")]
#[command(author, version, about = "Shopfront command-line storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog products
    Catalog {
        /// Category to show (`All` for every category)
        #[arg(short, long, default_value = ALL_CATEGORIES)]
        category: String,

        /// Page number, starting at 1
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },
    /// Search products by name, description, or tag
    Search {
        /// Search text (blank lists everything)
        #[arg(default_value = "")]
        query: String,
    },
    /// Show one product's details
    Show {
        /// Product ID (e.g. product-1)
        id: String,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
    /// Show the wishlist and order history
    Profile,
    /// Proceed to checkout
    Checkout,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart lines and totals
    Show {
        /// Quantity overrides as `id=quantity`, e.g. `product-1=2`
        #[arg(short, long = "qty", value_parser = commands::cart::parse_quantity)]
        quantities: Vec<(String, i32)>,
    },
    /// Add a product to the cart
    Add {
        /// Product ID
        id: String,
    },
    /// Remove a product from the cart
    Remove {
        /// Product ID
        id: String,
    },
    /// Remove every product from the cart
    Clear,
}

#[derive(Subcommand)]
enum WishlistAction {
    /// Show wishlist entries
    Show,
    /// Add or remove a product
    Toggle {
        /// Product ID
        id: String,
    },
    /// Remove a product
    Remove {
        /// Product ID
        id: String,
    },
    /// Remove every product
    Clear,
}

fn main() {
    // Initialize tracing with EnvFilter
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopfront_storefront=info,shopfront_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "Command failed");
        commands::output::error(&e.user_message());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = ShopConfig::from_env()?;
    let state = AppState::with_file_storage(config);

    match cli.command {
        Commands::Catalog { category, page } => commands::catalog::list(&state, &category, page)?,
        Commands::Search { query } => commands::catalog::search(&state, &query),
        Commands::Show { id } => commands::catalog::show(&state, &id)?,
        Commands::Cart { action } => match action {
            CartAction::Show { quantities } => commands::cart::show(&state, &quantities),
            CartAction::Add { id } => commands::cart::add(&state, &id)?,
            CartAction::Remove { id } => commands::cart::remove(&state, &id)?,
            CartAction::Clear => commands::cart::clear(&state)?,
        },
        Commands::Wishlist { action } => match action {
            WishlistAction::Show => commands::profile::wishlist(&state),
            WishlistAction::Toggle { id } => commands::profile::toggle(&state, &id)?,
            WishlistAction::Remove { id } => commands::profile::remove(&state, &id)?,
            WishlistAction::Clear => commands::profile::clear(&state)?,
        },
        Commands::Profile => commands::profile::show(&state),
        Commands::Checkout => commands::cart::checkout(&state)?,
    }
    Ok(())
}
