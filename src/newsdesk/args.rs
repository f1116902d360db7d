use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use newsdesk::sort::SortAlgorithm;
use newsdesk::store::StoreKind;

#[derive(Parser, Debug)]
#[command(name = "newsdesk")]
#[command(about = "Load, sort, and search news-article archives", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load sources, sort by year, and show samples before/after
    #[command(alias = "r")]
    Run {
        /// Delimited sources; the first line of each is a discarded header
        #[arg(required = true, num_args = 1..)]
        sources: Vec<PathBuf>,

        /// Sorting strategy for the array store
        #[arg(short, long, value_enum, default_value_t = Algorithm::Merge)]
        algorithm: Algorithm,

        /// Which structural view samples and searches read from
        #[arg(long, value_enum, default_value_t = Store::Array)]
        store: Store,

        /// Category substring to search for after sorting
        #[arg(short, long, requires = "year")]
        category: Option<String>,

        /// Publication year to search for after sorting
        #[arg(short, long, requires = "category")]
        year: Option<i32>,

        /// Number of sample articles shown before and after sorting
        #[arg(long)]
        sample: Option<usize>,
    },

    /// Load sources and search them, printing matches only
    #[command(alias = "s")]
    Search {
        /// Category substring (case-insensitive; empty matches everything)
        category: String,

        /// Publication year (exact match)
        year: i32,

        /// Delimited sources to load
        #[arg(long = "from", required = true, num_args = 1..)]
        sources: Vec<PathBuf>,

        /// Which structural view to scan
        #[arg(long, value_enum, default_value_t = Store::Array)]
        store: Store,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Quick,
    Merge,
}

impl From<Algorithm> for SortAlgorithm {
    fn from(value: Algorithm) -> Self {
        match value {
            Algorithm::Quick => SortAlgorithm::Quick,
            Algorithm::Merge => SortAlgorithm::Merge,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Store {
    Array,
    Linked,
}

impl From<Store> for StoreKind {
    fn from(value: Store) -> Self {
        match value {
            Store::Array => StoreKind::Array,
            Store::Linked => StoreKind::Linked,
        }
    }
}
