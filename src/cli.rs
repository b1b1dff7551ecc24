use crate::logging::LogFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "rednose",
    version,
    about = "Check reactor level reports for safety and generate test inputs"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        env = "REDNOSE_INPUTS_DIR",
        help = "Directory that input files are read from and written to"
    )]
    pub inputs_dir: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        help = "Log level filter (trace, debug, info, warn, error); RUST_LOG wins"
    )]
    pub log_level: Option<String>,
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count the safe reports in an input file.
    Check {
        /// File name inside the inputs directory.
        file: Option<String>,
        #[arg(long, help = "Print a verdict for every report")]
        details: bool,
        #[arg(long, help = "Skip lines with non-integer levels instead of failing")]
        lenient: bool,
    },
    /// Write randomly generated reports into the inputs directory.
    Generate {
        /// Number of reports to generate.
        #[arg(allow_hyphen_values = true)]
        count: Option<String>,
        /// Output file name, or the safe probability when it parses as a number in [0, 1].
        #[arg(allow_hyphen_values = true)]
        target: Option<String>,
        /// Probability that each report is built to be safe.
        #[arg(allow_hyphen_values = true)]
        probability: Option<String>,
        #[arg(long, help = "Seed for reproducible output")]
        seed: Option<u64>,
        #[arg(long, help = "Regenerate reports until each matches its intended verdict")]
        verify: bool,
    },
    /// List the files available in the inputs directory.
    Files,
}
