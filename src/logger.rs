use std::io;

use fern::Dispatch;
use log::LevelFilter;

/// Routes diagnostics to stderr. Verbose mode surfaces the `[INFO]` lines
/// emitted by the resolution code; otherwise only warnings and errors pass.
pub fn setup_logger(verbose: bool) {
    let level_filter = if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };

    if let Err(e) = Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message));
        })
        .level(level_filter)
        .chain(io::stderr())
        .apply()
    {
        eprintln!("Logger initialization failed: {e}");
    }
}
