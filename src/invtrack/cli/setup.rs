use clap::{Parser, Subcommand};
use invtrack::model::{parse_price, parse_quantity};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "invtrack", bin_name = "invtrack", version)]
#[command(about = "Track products, stock levels and prices from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Inventory file (defaults to $INVTRACK_FILE, the config, or ./inventory.json)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive menu (the default)
    Shell,

    /// Add a product
    #[command(alias = "a")]
    Add {
        /// Product ID
        id: String,

        /// Product name
        name: String,

        /// Units in stock
        #[arg(short, long, value_parser = parse_quantity)]
        quantity: u64,

        /// Unit price
        #[arg(short, long, value_parser = parse_price)]
        price: f64,

        /// Category (defaults to "General")
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Update some fields of a product
    #[command(alias = "u")]
    Update {
        /// Product ID
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New quantity
        #[arg(short, long, value_parser = parse_quantity)]
        quantity: Option<u64>,

        /// New unit price
        #[arg(short, long, value_parser = parse_price)]
        price: Option<f64>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Remove a product
    #[command(alias = "rm")]
    Remove {
        /// Product ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show one product
    #[command(alias = "v")]
    View {
        /// Product ID
        id: String,
    },

    /// Search by ID, name or category
    #[command(alias = "s")]
    Search {
        /// Case-insensitive substring; empty matches everything
        #[arg(default_value = "")]
        term: String,
    },

    /// List all products
    #[command(alias = "ls")]
    List {
        /// Sort order: id, name, price, quantity, category
        #[arg(short, long, default_value = "id")]
        sort: String,
    },

    /// Show inventory totals
    Summary,
}
