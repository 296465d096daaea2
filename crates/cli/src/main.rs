//! CLI tool for turning generated text into slide decks and documents.

use anyhow::{Context, Result};
use clap::Parser;
use deck_core::{
    DocumentBuilder, Encoder, JsonEncoder, LayoutConfig, OutputFormat, SlideDeckBuilder,
};
use deck_docx::DocxWriter;
use deck_pptx::PptxWriter;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Convert markdown-flavoured generated text into a presentation or document.
#[derive(Parser, Debug)]
#[command(name = "deckgen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input text file (reads stdin when absent or "-")
    input: Option<PathBuf>,

    /// Output file (default: input name with the format's extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Title for the cover slide
    #[arg(short, long)]
    title: Option<String>,

    /// Output format: pptx, docx or json (default: from output extension, else pptx)
    #[arg(short, long)]
    format: Option<String>,

    /// PNG image placed as the logo on every slide
    #[arg(long)]
    logo: Option<PathBuf>,

    /// JSON file with layout overrides
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum characters per wrapped line
    #[arg(long)]
    wrap_width: Option<usize>,

    /// Number of wrapped lines per slide
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Lay out chunk lines as-is instead of wrapping them a second time
    #[arg(long)]
    single_wrap: bool,

    /// With --format json, dump the document model instead of the slide deck
    #[arg(long)]
    document: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let format = resolve_format(args.format.as_deref(), args.output.as_deref())?;
    let content = read_input(args.input.as_deref())?;
    let config = load_config(&args)?;

    let bytes = render(&args, &config, format, &content)?;

    let to_stdout = format == OutputFormat::Json && args.output.is_none();
    if to_stdout {
        io::stdout()
            .write_all(&bytes)
            .context("Failed to write to stdout")?;
        println!();
        return Ok(());
    }

    let output_path = get_output_path(args.input.as_deref(), args.output.as_deref(), format);
    write_output(&output_path, &bytes)?;
    if args.verbose {
        eprintln!("Written to: {}", output_path.display());
    }

    Ok(())
}

/// Build the model for `format` and encode it.
fn render(
    args: &Args,
    config: &LayoutConfig,
    format: OutputFormat,
    content: &str,
) -> Result<Vec<u8>> {
    let bytes = match format {
        OutputFormat::Docx => {
            let document = DocumentBuilder::new().build(content);
            log::debug!("Document has {} elements", document.len());
            DocxWriter::new().encode(&document)?
        }
        OutputFormat::Json if args.document => {
            JsonEncoder.encode(&DocumentBuilder::new().build(content))?
        }
        OutputFormat::Json => {
            let deck = SlideDeckBuilder::new()
                .with_config(config.clone())
                .build(content, args.title.as_deref());
            JsonEncoder.encode(&deck)?
        }
        OutputFormat::Pptx => {
            let deck = SlideDeckBuilder::new()
                .with_config(config.clone())
                .build(content, args.title.as_deref());
            if args.verbose {
                eprintln!("  Built {} slides", deck.len());
            }

            let mut writer = PptxWriter::new();
            if let Some(logo) = &args.logo {
                let png = std::fs::read(logo)
                    .with_context(|| format!("Failed to read logo {}", logo.display()))?;
                writer = writer.with_logo(png);
            }
            writer.encode(&deck)?
        }
    };
    Ok(bytes)
}

/// Pick the output format from `--format`, then the output extension, then PPTX.
fn resolve_format(format: Option<&str>, output: Option<&Path>) -> Result<OutputFormat> {
    if let Some(name) = format {
        return Ok(name.parse::<OutputFormat>()?);
    }

    Ok(output
        .and_then(|p| p.extension())
        .and_then(|e| e.to_str())
        .and_then(OutputFormat::from_extension)
        .unwrap_or(OutputFormat::Pptx))
}

/// Read the whole input file, or stdin for `None` and `-`.
fn read_input(input: Option<&Path>) -> Result<String> {
    let mut content = String::new();
    match input {
        Some(path) if path != Path::new("-") => {
            let mut file =
                File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
            file.read_to_string(&mut content)
                .with_context(|| format!("Failed to read {}", path.display()))?;
        }
        _ => {
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
        }
    }
    Ok(content)
}

/// Layout from `--config`, with the individual flags applied on top.
fn load_config(args: &Args) -> Result<LayoutConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            LayoutConfig::from_json(&json)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => LayoutConfig::new(),
    };

    if let Some(width) = args.wrap_width {
        config = config.with_wrap_width(width);
    }
    if let Some(size) = args.chunk_size {
        config = config.with_chunk_size(size);
    }
    if args.single_wrap {
        config = config.with_rewrap_chunks(false);
    }
    Ok(config)
}

/// Determine the output path for the generated file.
fn get_output_path(input: Option<&Path>, output: Option<&Path>, format: OutputFormat) -> PathBuf {
    if let Some(path) = output {
        return path.to_path_buf();
    }

    match input.filter(|p| *p != Path::new("-")) {
        Some(path) => path.with_extension(format.extension()),
        None => PathBuf::from(format!("output.{}", format.extension())),
    }
}

/// Write output to a file.
fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    file.write_all(bytes)
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}
