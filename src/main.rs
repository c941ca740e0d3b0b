use anyhow::{Context, Result};
use bomtext_config::Config;
use bomtext_fs::{Encoding, FileText, PageRequest, TracingLogger};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// BOM-aware text file reader, pager and writer
#[derive(Parser, Debug)]
#[command(name = "bomtext", version, about)]
struct Cli {
    /// Configuration file (TOML); searched in the usual places when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Encoding assumed for files without a byte-order mark
    #[arg(long, global = true)]
    default_encoding: Option<Encoding>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the encoding of a file and whether it carries a byte-order mark
    Detect { file: PathBuf },

    /// Print the decoded content of a file
    Cat { file: PathBuf },

    /// Print a file line by line
    Lines {
        file: PathBuf,

        /// Prefix each line with its number
        #[arg(short, long)]
        number: bool,
    },

    /// Count lines, optionally only those containing a string
    Count {
        file: PathBuf,

        #[arg(long)]
        grep: Option<String>,
    },

    /// Print a window of lines
    Page {
        file: PathBuf,

        /// Matching lines to skip
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,

        /// Lines to print
        #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
        size: i64,

        #[arg(long)]
        grep: Option<String>,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the last lines of a file
    Tail {
        file: PathBuf,

        #[arg(short = 'n', long = "lines", default_value_t = 10)]
        lines: usize,

        #[arg(long)]
        grep: Option<String>,
    },

    /// Write each TEXT argument as one line
    Write {
        file: PathBuf,

        /// Append instead of overwriting
        #[arg(long)]
        append: bool,

        /// Encoding to write; the existing signature or the default otherwise
        #[arg(long)]
        encoding: Option<Encoding>,

        #[arg(required = true)]
        text: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("load configuration '{}'", path.display()))?,
        None => Config::load().context("load configuration")?,
    };
    if let Some(encoding) = cli.default_encoding {
        config.text.default_encoding = encoding;
    }
    init_tracing(&config.log.level);
    debug!(?config, "configuration ready");

    let open = |path: &Path| {
        FileText::with_config(path, config.text_config()).with_logger(Arc::new(TracingLogger))
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Detect { file } => {
            let resolution = open(&file).probe_encoding()?;
            let origin = if resolution.has_bom() {
                "byte-order mark"
            } else {
                "default, no byte-order mark"
            };
            writeln!(out, "{}: {} ({})", file.display(), resolution.encoding, origin)?;
        }
        Commands::Cat { file } => {
            let content = open(&file).read_all()?;
            out.write_all(content.as_bytes())?;
        }
        Commands::Lines { file, number } => {
            let mut text = open(&file);
            text.open_read()?;
            let mut line_no = 0u64;
            while let Some(line) = text.read_line()? {
                line_no += 1;
                if number {
                    writeln!(out, "{line_no:>6}  {line}")?;
                } else {
                    writeln!(out, "{line}")?;
                }
            }
            text.close();
        }
        Commands::Count { file, grep } => {
            let count = open(&file).count_lines(grep.as_deref())?;
            writeln!(out, "{count}")?;
        }
        Commands::Page { file, offset, size, grep, json } => {
            let request = PageRequest::try_new(offset, size)?;
            let page = open(&file).page(request.offset, request.size, grep.as_deref())?;
            if json {
                let rendered =
                    serde_json::to_string_pretty(&page.to_json()).context("render page")?;
                writeln!(out, "{rendered}")?;
            } else {
                for line in page.lines() {
                    writeln!(out, "{line}")?;
                }
                if page.has_more() {
                    info!(next_offset = request.offset + page.returned(), "more lines follow");
                }
            }
        }
        Commands::Tail { file, lines, grep } => {
            let tail = open(&file).tail(lines, grep.as_deref())?;
            for line in tail.lines() {
                writeln!(out, "{line}")?;
            }
        }
        Commands::Write { file, append, encoding, text } => {
            let mut session = open(&file);
            session
                .open_write(append, encoding)
                .with_context(|| format!("open '{}' for writing", file.display()))?;
            session.write_lines(&text)?;
            info!(
                path = %file.display(),
                encoding = %session.encoding().unwrap_or(config.text.default_encoding),
                lines = text.len(),
                "written"
            );
            session.close();
        }
    }

    out.flush()?;
    Ok(())
}

fn init_tracing(default_level: &str) {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // RUST_LOG wins over the configured level
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
