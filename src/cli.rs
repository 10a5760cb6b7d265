use clap::Parser;

/// Command line interface for the application
#[derive(Parser)]
pub struct Cli {
    /// Port to bind the HTTP server on, overriding the PORT environment variable
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Sets the logging verbosity level for the application
    /// Possible values: "error", "warn", "info", "debug", "trace"
    /// Default: "info"
    #[arg(long, default_value_t = String::from("info"))]
    pub logging_level: String,

    /// Also write logs to a daily rotating file in the "logs" directory
    #[arg(long)]
    pub log_to_file: bool,
}
