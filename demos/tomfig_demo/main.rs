//! # tomfig demo application
//!
//! A sample CLI tool that showcases how to integrate
//! [tomfig](https://docs.rs/tomfig) into a real application. This is **not**
//! a real app; it exists purely to demonstrate and manually verify tomfig's
//! features.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example tomfig_demo -- connectors
//! cargo run --example tomfig_demo -- connector NIO --enable maxThreads --set port=9090
//! cargo run --example tomfig_demo -- valves
//! cargo run --example tomfig_demo -- valve "Access Log Valve" --enable directory --lang xml
//! ```
//!
//! A trimmed catalog ships next to this file; pass `--catalog` to point at a
//! full scraped one.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use tomfig::{handle, Catalog, SnippetArgs};

/// tomfig demo: render Tomcat connector/valve snippets from a catalog.
#[derive(Parser, Debug)]
#[command(name = "tomfig-demo")]
struct Cli {
    /// Path to the attribute catalog JSON.
    #[arg(long, global = true, default_value = "demos/tomfig_demo/catalog.json")]
    catalog: PathBuf,

    /// Tolerate unknown keys in the catalog.
    #[arg(long, global = true)]
    lenient: bool,

    #[command(flatten)]
    snippets: SnippetArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let catalog = if cli.lenient {
        Catalog::from_path_lenient(&cli.catalog)
    } else {
        Catalog::from_path(&cli.catalog)
    };
    let catalog = match catalog {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(version) = &catalog.tomcat_version {
        eprintln!("catalog: Tomcat v{version}");
    }

    match handle(&catalog, &cli.snippets.into_action()) {
        Ok(outcome) => {
            println!("{outcome}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
