//! unblackedges - remove black regions touching the edge of a PBM image

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, IsTerminal};
use std::path::PathBuf;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use pixgrid_core::BitGrid2D;
use pixgrid_io::{PnmFormat, read_bitgrid, write_bitgrid};
use pixgrid_region::{
    BorderClearOptions, ConnectivityType, TraversalOrder, clear_border_components,
};

#[derive(Parser)]
#[command(name = "unblackedges")]
#[command(author, version, about = "Clear black regions connected to the image border", long_about = None)]
struct Cli {
    /// Input PBM file (standard input if omitted)
    input: Option<PathBuf>,

    /// Neighbor count joining black pixels: 4 or 8
    #[arg(short, long, default_value = "4", value_parser = parse_connectivity)]
    connectivity: ConnectivityType,

    /// Flood-fill traversal order
    #[arg(long, value_enum, default_value_t = Order::Bfs)]
    order: Order,

    /// Write raw (P4) instead of plain (P1) output
    #[arg(long)]
    raw: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Order {
    Bfs,
    Dfs,
}

impl From<Order> for TraversalOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Bfs => TraversalOrder::BreadthFirst,
            Order::Dfs => TraversalOrder::DepthFirst,
        }
    }
}

fn parse_connectivity(s: &str) -> std::result::Result<ConnectivityType, String> {
    let n: u32 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    ConnectivityType::from_neighbors(n)
        .ok_or_else(|| format!("connectivity must be 4 or 8, got {n}"))
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .finish();
    // Only fails if a subscriber is already installed
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn read_input(input: Option<&PathBuf>) -> Result<BitGrid2D> {
    match input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            read_bitgrid(BufReader::new(file))
                .with_context(|| format!("Failed to read PBM image from {}", path.display()))
        }
        None => {
            let stdin = io::stdin();
            read_bitgrid(stdin.lock()).context("Failed to read PBM image from standard input")
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let mut image = read_input(cli.input.as_ref())?;
    debug!(width = image.width(), height = image.height(), "read input image");

    let options = BorderClearOptions::new(cli.connectivity).with_order(cli.order.into());
    let stats = clear_border_components(&mut image, &options)
        .context("Failed to clear border components")?;
    info!(
        "Cleared {} pixels from {} border regions",
        stats.cleared, stats.seeds
    );

    let format = if cli.raw {
        PnmFormat::RawPbm
    } else {
        PnmFormat::PlainPbm
    };
    let stdout = io::stdout();
    write_bitgrid(&image, BufWriter::new(stdout.lock()), format)
        .context("Failed to write output image")?;

    Ok(())
}
