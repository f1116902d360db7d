//! # Newsdesk Architecture
//!
//! Newsdesk is a library for loading news-article archives into two parallel
//! in-memory structures, sorting them by publication year, and searching
//! them — with a CLI client on top, not the other way around.
//!
//! ## Layers
//!
//! ```text
//! CLI (main.rs, args.rs, print.rs)
//!   parses arguments, prints colored output; the only place that touches
//!   stdout/stderr or exit codes
//!         │
//! API (api.rs)
//!   NewsdeskApi owns both stores, dispatches to commands, returns
//!   structured Result<CmdResult>
//!         │
//! Commands (commands/*.rs)
//!   load, sort, search, peek — pure logic, leveled messages, no I/O
//!   assumptions
//!         │
//! Core (model, year, text, loader, store/, sort/)
//!   the article model, year extraction, text normalization, source
//!   ingestion, the two stores, and the sorting algorithms
//! ```
//!
//! ## The two stores
//!
//! Every loaded article lands in both an [`store::array::ArrayStore`]
//! (contiguous, capacity-capped) and a [`store::linked::LinkedStore`] (singly
//! linked chain). They are structural views of one dataset: same articles,
//! same order. The array sorts in place by quicksort or merge sort; the
//! chain sorts by relinking its nodes with merge sort. Search and sampling
//! are generic over the [`store::ArticleStore`] trait and run identically
//! against either view.
//!
//! ## Degradation over failure
//!
//! Nothing in the pipeline aborts the process: unopenable sources are
//! skipped, malformed dates sort first under the sentinel year 0, and
//! records past the array's capacity are dropped from both stores with a
//! warning. The result set shrinks; the run completes.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod sort;
pub mod store;
pub mod text;
pub mod year;
