use std::fmt::Display;
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use graph_adt::prelude::*;
use log::{info, LevelFilter};

mod demo;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(level(args.verbose))
        .parse_default_env()
        .init();

    match args.command {
        Command::Show {
            path,
            representation,
            vertex,
        } => match representation {
            Representation::EdgeList => show::<EdgeListGraph<String>>(&path, vertex)?,
            Representation::Adjacency => show::<AdjacencyGraph<String>>(&path, vertex)?,
        },
        Command::Demo { representation } => match representation {
            Some(Representation::EdgeList) => demo::run::<EdgeListGraph<_>>(demo::EDGE_LIST)?,
            Some(Representation::Adjacency) => demo::run::<AdjacencyGraph<_>>(demo::ADJACENCY)?,
            None => {
                demo::run::<AdjacencyGraph<_>>(demo::ADJACENCY)?;
                println!();
                demo::run::<EdgeListGraph<_>>(demo::EDGE_LIST)?;
            }
        },
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(author, version, about, propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Increase log output, can be given multiple times. `RUST_LOG` takes
    /// precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load a weighted edge list and print the graph.
    Show {
        /// Path to a file with one `source target weight` entry per line.
        path: PathBuf,

        #[arg(short, long, value_enum, default_value_t = Representation::Adjacency)]
        representation: Representation,

        /// Only print the sources and targets of this vertex.
        #[arg(long)]
        vertex: Option<String>,
    },
    /// Replay add, set, update, delete and remove on an empty graph.
    Demo {
        /// Defaults to both representations.
        #[arg(short, long, value_enum)]
        representation: Option<Representation>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Representation {
    EdgeList,
    Adjacency,
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn show<G>(path: &Path, vertex: Option<String>) -> Result<(), Error>
where
    G: Graph<String> + Default + Display,
{
    info!("Reading graph from: {path:?}");

    let graph: G = GraphBuilder::new()
        .file_format(EdgeListInput::default())
        .path(path)
        .build()?;

    match vertex {
        Some(vertex) if graph.contains(&vertex) => {
            println!("Sources of {vertex}:");
            for (source, weight) in sorted(graph.sources(&vertex)) {
                println!("  {source} → {vertex} ({weight})");
            }
            println!("Targets of {vertex}:");
            for (target, weight) in sorted(graph.targets(&vertex)) {
                println!("  {vertex} → {target} ({weight})");
            }
        }
        Some(vertex) => println!("{vertex} is not part of the graph"),
        None => println!("{graph}"),
    }

    Ok(())
}

fn sorted(weights: impl IntoIterator<Item = (String, Weight)>) -> Vec<(String, Weight)> {
    let mut weights = weights.into_iter().collect::<Vec<_>>();
    weights.sort_unstable();
    weights
}
