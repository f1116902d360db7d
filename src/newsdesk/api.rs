//! # API Facade
//!
//! [`NewsdeskApi`] is the single entry point for the load → sort → search
//! pipeline. It owns both stores and dispatches to the command layer; it does
//! no terminal I/O and returns structured `Result<CmdResult>` values, so any
//! front end (the bundled CLI, tests, something else) drives it the same way.

use std::path::PathBuf;

use crate::commands;
use crate::config::NewsdeskConfig;
use crate::error::Result;
use crate::sort::SortAlgorithm;
use crate::store::array::ArrayStore;
use crate::store::linked::LinkedStore;
use crate::store::{ArticleStore, StoreKind};

/// Owns the two parallel stores and runs operations against them.
pub struct NewsdeskApi {
    array: ArrayStore,
    linked: LinkedStore,
}

impl NewsdeskApi {
    pub fn new(config: &NewsdeskConfig) -> Self {
        Self {
            array: ArrayStore::with_capacity_limit(config.capacity),
            linked: LinkedStore::new(),
        }
    }

    /// Load every source into both stores.
    pub fn load(&mut self, sources: &[PathBuf]) -> Result<commands::CmdResult> {
        commands::load::run(&mut self.array, &mut self.linked, sources)
    }

    /// Sort both stores by publication year.
    pub fn sort(&mut self, algorithm: SortAlgorithm) -> Result<commands::CmdResult> {
        commands::sort::run(&mut self.array, &mut self.linked, algorithm)
    }

    /// Search one structural view by category substring and exact year.
    pub fn search(&self, kind: StoreKind, category: &str, year: i32) -> Result<commands::CmdResult> {
        match kind {
            StoreKind::Array => commands::search::run(&self.array, category, year),
            StoreKind::Linked => commands::search::run(&self.linked, category, year),
        }
    }

    /// Sample the first `limit` articles of one structural view.
    pub fn peek(&self, kind: StoreKind, limit: usize) -> Result<commands::CmdResult> {
        match kind {
            StoreKind::Array => commands::peek::run(&self.array, limit),
            StoreKind::Linked => commands::peek::run(&self.linked, limit),
        }
    }

    /// Article counts as (array, linked). The loader keeps these equal.
    pub fn counts(&self) -> (usize, usize) {
        (self.array.len(), self.linked.len())
    }
}

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
