use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use svgtag::{Options, normalize, parse_element, serialize};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "svgtag")]
#[command(about = "Rewrite SVG attribute values into canonical form", long_about = None)]
struct Cli {
    /// Input file (use - for stdin)
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Output file (use - for stdout)
    #[arg(short, long, default_value = "-")]
    output: PathBuf,

    /// Write an XML declaration
    #[arg(long)]
    xml_declaration: bool,

    /// Indent nested elements by this many spaces
    #[arg(long)]
    indent: Option<usize>,

    /// Write childless elements as <x/>
    #[arg(long)]
    self_close: bool,

    /// Keep attribute values as written (just parse and re-serialize)
    #[arg(long)]
    no_normalize: bool,

    /// Print size comparison
    #[arg(short, long)]
    stats: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    // Read input
    let input = if cli.input.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(&cli.input)?
    };

    let input_len = input.len();

    let options = Options {
        xml_declaration: cli.xml_declaration,
        indent: cli.indent,
        self_close_empty: cli.self_close,
    };

    let mut root = parse_element(&input)?;
    if !cli.no_normalize {
        normalize(&mut root);
    }
    let output = serialize(&root, &options)?;
    let output_len = output.len();
    info!(input_len, output_len, "done");

    // Write output
    if cli.output.as_os_str() == "-" {
        io::stdout().write_all(output.as_bytes())?;
    } else {
        fs::write(&cli.output, &output)?;
    }

    if cli.stats {
        eprintln!("{} -> {} bytes", input_len, output_len);
    }

    Ok(())
}
