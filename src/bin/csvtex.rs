//! csvtex CLI - Convert delimited text tables into LaTeX

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use csvtex::{
    assemble_document, render_reader, render_table, save_tables, FloatFormat, RenderOptions,
    TableResult, WriteMode,
};
#[cfg(feature = "cli")]
use log::debug;
#[cfg(feature = "cli")]
use std::io;
#[cfg(feature = "cli")]
use std::process::ExitCode;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "csvtex")]
#[command(version)]
#[command(about = "csvtex - Convert delimited text tables into LaTeX booktabs markup", long_about = None)]
struct Cli {
    /// Input files (reads one table from stdin if none are given)
    inputs: Vec<String>,

    /// Field delimiter
    #[arg(short, long = "sep", default_value_t = ',')]
    sep: char,

    /// Table caption
    #[arg(short, long, default_value = "")]
    caption: String,

    /// Table label for \ref
    #[arg(short, long, default_value = "")]
    label: String,

    /// Column alignment: one of l/c/r for all columns, or one per column
    #[arg(short, long, default_value = "c")]
    align: String,

    /// Units, one per column, comma separated ("-", "/" and "0" hide a unit)
    #[arg(short, long, value_delimiter = ',')]
    units: Option<Vec<String>>,

    /// Do not escape LaTeX reserved characters
    #[arg(long)]
    no_escape: bool,

    /// Only output the table rows, without the table environment
    #[arg(long)]
    fragment: bool,

    /// The first row is data, not column names
    #[arg(long)]
    no_header: bool,

    /// Format for float cells, e.g. ".2f" or ".3e"
    #[arg(long)]
    float_format: Option<FloatFormat>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Truncate the output file instead of appending to it
    #[arg(long)]
    replace: bool,

    /// Wrap all tables in a standalone document
    #[arg(short, long)]
    document: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[cfg(feature = "cli")]
impl Cli {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            delimiter: self.sep,
            caption: self.caption.clone(),
            label: self.label.clone(),
            align: self.align.clone(),
            units: self.units.clone(),
            escape: !self.no_escape,
            fragment: self.fragment,
            header: !self.no_header,
            float_format: self.float_format,
        }
    }
}

#[cfg(feature = "cli")]
fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "cli")]
fn run(cli: &Cli) -> TableResult<()> {
    let options = cli.render_options();

    // Render every input before writing anything
    let tables = if cli.inputs.is_empty() {
        vec![render_reader(io::stdin().lock(), &options)?]
    } else {
        cli.inputs
            .iter()
            .map(|path| {
                debug!("rendering {}", path);
                render_table(path, &options)
            })
            .collect::<TableResult<Vec<_>>>()?
    };

    let outputs = if cli.document {
        vec![assemble_document(&tables)]
    } else {
        tables
    };

    match cli.output {
        Some(ref path) => {
            let reports = save_tables(&outputs, path, WriteMode::from_replace(cli.replace))?;
            for report in reports {
                eprintln!("✓ {}", report);
            }
        }
        None => {
            println!("{}", outputs.join("\n\n"));
        }
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install csvtex --features cli");
    eprintln!("  csvtex [OPTIONS] [INPUTS]...");
}
