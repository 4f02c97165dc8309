//! kata CLI
//!
//! Builds CSS selectors from fragment tokens and works with rectangles in
//! JSON form.

mod chain;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kata_common::warning::warn_once;
use kata_json::{RECTANGLE, Rectangle, Shape, from_json_with, to_json, to_json_pretty};
use kata_selector::{Render, Specificity};
use owo_colors::OwoColorize;
use serde::Serialize;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "kata", version, about)]
struct Cli {
    /// Print results as JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build a selector from `kind=value` tokens and combinator symbols.
    ///
    /// Kinds: element, id, class, attr, pseudo-class, pseudo-element.
    /// Example: kata selector element=div id=main + element=table
    Selector {
        /// Fragment tokens and combinators, in order.
        #[arg(required = true, allow_hyphen_values = true)]
        tokens: Vec<String>,
    },
    /// Build a rectangle and print its JSON form and area.
    Rect {
        /// Horizontal extent.
        #[arg(long)]
        width: f64,
        /// Vertical extent.
        #[arg(long)]
        height: f64,
    },
    /// Read a rectangle from JSON text and print its area.
    Area {
        /// JSON object with `width` and `height`.
        #[arg(value_name = "JSON")]
        text: String,
    },
}

#[derive(Serialize)]
struct SelectorReport {
    selector: String,
    specificity: Specificity,
}

#[derive(Serialize)]
struct AreaReport<'a> {
    rectangle: &'a serde_json::Value,
    area: &'a serde_json::Value,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Selector { tokens } => {
            let built = chain::build(&tokens)?;
            if cli.json {
                let report = SelectorReport {
                    selector: built.render(),
                    specificity: built.specificity(),
                };
                println!("{}", to_json_pretty(&report)?);
            } else {
                println!("{built}");
                println!("{} {}", "specificity".dimmed(), built.specificity());
            }
        }
        Command::Rect { width, height } => {
            if width < 0.0 || height < 0.0 {
                warn_once("CLI", "negative rectangle dimension");
            }
            let rect = Rectangle::new(width, height);
            if cli.json {
                println!("{}", to_json_pretty(&rect)?);
            } else {
                println!("{}", to_json(&rect)?);
                println!("{} {}", "area".dimmed(), rect.area());
            }
        }
        Command::Area { text } => {
            let rect = from_json_with(&text, &RECTANGLE).context("cannot read rectangle")?;
            let area = rect.call("area")?;
            if cli.json {
                let report = AreaReport {
                    rectangle: rect.data(),
                    area: &area,
                };
                println!("{}", to_json_pretty(&report)?);
            } else {
                println!("{} {area}", "area".dimmed());
            }
        }
    }

    Ok(())
}
