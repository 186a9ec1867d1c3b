use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use mdnotion::{Config, PayloadWriter};

#[derive(Parser)]
#[command(name = "mdnotion")]
#[command(about = "Convert a Markdown file into Notion block payloads")]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Destination page ID
    #[arg(long)]
    page_id: String,

    /// Configuration file
    #[arg(short, long, default_value = "mdnotion.toml")]
    config: PathBuf,

    /// Write payloads to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Background color for level 1 headings
    #[arg(long)]
    heading1_color: Option<String>,

    /// Background color for level 2 headings
    #[arg(long)]
    heading2_color: Option<String>,

    /// Background color for level 3 headings
    #[arg(long)]
    heading3_color: Option<String>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(color) = cli.heading1_color {
        config.heading1_color = color;
    }
    if let Some(color) = cli.heading2_color {
        config.heading2_color = color;
    }
    if let Some(color) = cli.heading3_color {
        config.heading3_color = color;
    }

    let blocks = match mdnotion::convert_file(&cli.input, &config) {
        Ok(blocks) => blocks,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let out: Box<dyn Write> = match &cli.output {
        Some(path) => match File::create(path) {
            Ok(file) => Box::new(BufWriter::new(file)),
            Err(e) => {
                eprintln!("Error writing {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Box::new(io::stdout().lock()),
    };

    let mut writer = PayloadWriter::new(out);
    let summary = match mdnotion::replace_children(&mut writer, &cli.page_id, &blocks) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = writer.into_inner().flush() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    eprintln!(
        "Prepared {} blocks in {} requests for {}",
        summary.blocks, summary.batches, cli.page_id
    );
}
