//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tagsmith")]
#[command(about = "Search-tag enrichment for product catalogs", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new catalog
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Enrich the product catalog with generated search tags
    Enrich {
        /// Catalog file to read (default: from config)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// File to write the enriched catalog to (default: from config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Synonym dictionary file (default: from config)
        #[arg(short, long)]
        synonyms: Option<PathBuf>,

        /// Generate and report without writing the output file
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the tags a name and description would generate
    Preview {
        /// Product name
        name: String,

        /// Product description (may contain markup)
        #[arg(short, long, default_value = "")]
        description: String,
    },
}
