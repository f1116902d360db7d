use clap::Parser;
use colored::Colorize;
use newsdesk::api::NewsdeskApi;
use newsdesk::config::NewsdeskConfig;
use newsdesk::error::Result;
use newsdesk::sort::SortAlgorithm;
use newsdesk::store::StoreKind;
use std::path::PathBuf;

mod args;
mod print;

use args::{Cli, Commands};
use print::{print_articles, print_elapsed, print_messages, print_search_results};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = NewsdeskConfig::load(&cwd).unwrap_or_default();

    match cli.command {
        Commands::Run {
            sources,
            algorithm,
            store,
            category,
            year,
            sample,
        } => handle_run(
            &config,
            &sources,
            algorithm.into(),
            store.into(),
            category,
            year,
            sample.unwrap_or(config.sample_size),
        ),
        Commands::Search {
            category,
            year,
            sources,
            store,
        } => handle_search(&config, &sources, store.into(), &category, year),
    }
}

fn handle_run(
    config: &NewsdeskConfig,
    sources: &[PathBuf],
    algorithm: SortAlgorithm,
    store: StoreKind,
    category: Option<String>,
    year: Option<i32>,
    sample: usize,
) -> Result<()> {
    let mut api = NewsdeskApi::new(config);

    let result = api.load(sources)?;
    print_messages(&result.messages);

    println!("\nBefore sorting (first {sample} articles, {} store):", store.name());
    print_articles(&api.peek(store, sample)?.articles);

    let result = api.sort(algorithm)?;
    print_messages(&result.messages);
    if let Some(elapsed) = result.elapsed {
        print_elapsed("Sorting", elapsed);
    }

    println!("\nAfter sorting (first {sample} articles, {} store):", store.name());
    print_articles(&api.peek(store, sample)?.articles);

    if let (Some(category), Some(year)) = (category, year) {
        println!("\nArticles in category \"{category}\" for {year}:");
        let result = api.search(store, &category, year)?;
        print_messages(&result.messages);
        print_search_results(&result.articles);
        if let Some(elapsed) = result.elapsed {
            print_elapsed("Search", elapsed);
        }
    }

    Ok(())
}

fn handle_search(
    config: &NewsdeskConfig,
    sources: &[PathBuf],
    store: StoreKind,
    category: &str,
    year: i32,
) -> Result<()> {
    let mut api = NewsdeskApi::new(config);

    let result = api.load(sources)?;
    print_messages(&result.messages);

    println!("\nArticles in category \"{category}\" for {year}:");
    let result = api.search(store, category, year)?;
    print_messages(&result.messages);
    print_search_results(&result.articles);
    if let Some(elapsed) = result.elapsed {
        print_elapsed("Search", elapsed);
    }

    Ok(())
}
