//! Viriot CLI - Cart and menu tools.
//!
//! # Usage
//!
//! ```bash
//! # List the menu, cheapest first
//! viriot --catalog menu.json menu --sort price-asc
//!
//! # Add a dish to the cart and show it
//! viriot --catalog menu.json cart add clx1
//! viriot cart show
//!
//! # Change a quantity (zero or less removes the line)
//! viriot cart set clx1 3
//!
//! # Check a review before submitting it
//! viriot review check clx1 5 "Best pad thai in town"
//!
//! # Check a new dish against the catalog before creating it
//! viriot --catalog menu.json product check "Larb" "Minced pork salad" 9.75
//! ```
//!
//! # Commands
//!
//! - `cart` - Show and edit the persisted cart
//! - `menu` - Search and sort the catalog
//! - `review check` - Validate a review against the submission rules
//! - `product check` - Validate a new product against the creation rules

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use viriot_storefront::StorefrontConfig;
use viriot_storefront::catalog::{MenuQuery, MenuSort, NewProduct, NewReview};

mod commands;

#[derive(Parser)]
#[command(name = "viriot")]
#[command(author, version, about = "Viriot storefront CLI")]
struct Cli {
    /// Directory holding the cart snapshot (overrides `STOREFRONT_CART_DIR`)
    #[arg(long, global = true)]
    cart_dir: Option<PathBuf>,

    /// Catalog JSON file (overrides `STOREFRONT_CATALOG`)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show and edit the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// List the menu
    Menu {
        /// Only show dishes whose name or description contains this text
        #[arg(short, long, default_value = "")]
        search: String,

        /// Ordering (`price-asc`, `price-desc`, `rating`)
        #[arg(long, default_value_t = MenuSort::Rating)]
        sort: MenuSort,

        /// Print each dish's image URL
        #[arg(long)]
        links: bool,
    },
    /// Work with reviews
    Review {
        #[command(subcommand)]
        action: ReviewAction,
    },
    /// Work with products
    Product {
        #[command(subcommand)]
        action: ProductAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Print the cart contents and subtotal
    Show {
        /// Print the cart view as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add one unit of a catalog product
    Add {
        /// Product ID
        product_id: String,
    },
    /// Remove a product's line
    Remove {
        /// Product ID
        product_id: String,
    },
    /// Set a product's quantity (zero or less removes the line)
    Set {
        /// Product ID
        product_id: String,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Print the number of units in the cart
    Count,
}

#[derive(Subcommand)]
enum ReviewAction {
    /// Validate a review without submitting it
    Check {
        /// Product ID
        product_id: String,

        /// Star rating
        #[arg(allow_negative_numbers = true)]
        rating: i64,

        /// Review text
        comment: String,
    },
}

#[derive(Subcommand)]
enum ProductAction {
    /// Validate a new product without creating it
    Check {
        /// Dish name
        name: String,

        /// Menu description
        description: String,

        /// Price, e.g. 12.50
        #[arg(allow_negative_numbers = true)]
        price: String,
    },
}

fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "viriot_storefront=info,viriot=info".into());

    let cli = Cli::parse();

    let json_layer = cli.log_json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(io::stderr)
    });
    let text_layer =
        (!cli.log_json).then(|| tracing_subscriber::fmt::layer().with_writer(io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = StorefrontConfig::from_env()?;
    if let Some(dir) = cli.cart_dir {
        config.cart.dir = dir;
    }
    if let Some(path) = cli.catalog {
        config.catalog_path = Some(path);
    }

    let mut out = io::stdout().lock();

    match cli.command {
        Commands::Cart { action } => {
            let mut cart = commands::cart::open(&config);
            match action {
                CartAction::Show { json } => commands::cart::show(&cart, json, &mut out)?,
                CartAction::Add { product_id } => {
                    let products = commands::load_catalog(&config)?;
                    commands::cart::add(&mut cart, &products, &product_id.into(), &mut out)?;
                }
                CartAction::Remove { product_id } => {
                    commands::cart::remove(&mut cart, &product_id.into(), &mut out)?;
                }
                CartAction::Set {
                    product_id,
                    quantity,
                } => commands::cart::set(&mut cart, &product_id.into(), quantity, &mut out)?,
                CartAction::Count => commands::cart::count(&cart, &mut out)?,
            }
        }
        Commands::Menu {
            search,
            sort,
            links,
        } => {
            let products = commands::load_catalog(&config)?;
            let query = MenuQuery::search(search).sorted_by(sort);
            let links = links.then_some(&config);
            commands::menu::list(&products, &query, links, &mut out)?;
        }
        Commands::Review { action } => match action {
            ReviewAction::Check {
                product_id,
                rating,
                comment,
            } => {
                let review = NewReview {
                    product_id: product_id.into(),
                    rating,
                    comment,
                };
                commands::review::check(review, &mut out)?;
            }
        },
        Commands::Product { action } => match action {
            ProductAction::Check {
                name,
                description,
                price,
            } => {
                let products = commands::load_catalog(&config)?;
                let product = NewProduct {
                    name,
                    description,
                    price,
                };
                commands::product::check(product, &products, &mut out)?;
            }
        },
    }

    out.flush()?;
    Ok(())
}
