use clap::{Parser, Subcommand, ValueEnum};
use edgar_spider::config::DEFAULT_CIK;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Sets the level of tracing.
    ///
    /// Without it, progress is drawn as a progress bar instead of logged.
    #[arg(short, long, global = true)]
    pub trace: Option<TraceLevel>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve every 10-Q filing of a company to its financial statements spreadsheet.
    Resolve {
        /// Central Index Key of the filer.
        #[arg(short, long, default_value = DEFAULT_CIK)]
        cik: String,

        /// Print the results as a JSON array.
        #[arg(short, long)]
        json: bool,
    },

    /// List the interactive data pages of a company's 10-Q filings, without following them.
    Listing {
        /// Central Index Key of the filer.
        #[arg(short, long, default_value = DEFAULT_CIK)]
        cik: String,

        /// Print the results as a JSON array.
        #[arg(short, long)]
        json: bool,
    },
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
#[clap(rename_all = "UPPERCASE")]
pub enum TraceLevel {
    DEBUG,
    ERROR,
    INFO,
    TRACE,
    WARN,
}
