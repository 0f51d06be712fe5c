use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use datauri::data_url::file_to_data_url;
use datauri::logger::setup_logger;

#[derive(Parser)]
#[command(
    version,
    about = "Convert a local file into a base64-encoded data: URI."
)]
struct Opts {
    /// MIME type to encode into the data URI
    #[arg(short, long, value_name = "TYPE")]
    mime: Option<String>,

    /// Write the data URI using this charset label
    #[arg(long, value_name = "CHARSET")]
    charset: Option<String>,

    /// Place the output into this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Display informational messages on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Input files; only the first is converted
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    let opts = match Opts::try_parse() {
        Ok(opts) => opts,
        Err(e) => {
            // Help and version land on stdout with status 0; real argument
            // errors print usage to stderr and exit 1.
            e.print()?;
            return Ok(if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            });
        }
    };
    setup_logger(opts.verbose);

    let input = &opts.files[0];
    let data_url = file_to_data_url(input, opts.mime.as_deref(), opts.charset.as_deref())?;

    // The URI is built fully before the sink is opened; the sink is written
    // exactly once.
    match &opts.output {
        Some(path) => {
            log::info!("Output file is '{}'.", path.display());
            let mut out = File::create(path)?;
            out.write_all(data_url.as_bytes())?;
        }
        None => {
            let mut out = io::stdout().lock();
            out.write_all(data_url.as_bytes())?;
            out.flush()?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
