mod cli;
mod spider;

// remote imports
use clap::Parser;
use cli::{Cli, Commands, TraceLevel};
use tracing::{subscriber, trace, Level};
use tracing_subscriber::FmtSubscriber;

////////////////////////////////////////////////////////////////////////////

// open the .env file, and set the trace level if one was asked for
fn preprocess(trace_level: Option<Level>) -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    if let Some(trace_level) = trace_level {
        let my_subscriber = FmtSubscriber::builder()
            .with_max_level(trace_level)
            .finish();
        subscriber::set_global_default(my_subscriber)?;
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    preprocess(cli.trace.map(|trace_level| match trace_level {
        TraceLevel::DEBUG => Level::DEBUG,
        TraceLevel::ERROR => Level::ERROR,
        TraceLevel::INFO => Level::INFO,
        TraceLevel::TRACE => Level::TRACE,
        TraceLevel::WARN => Level::WARN,
    }))?;
    trace!("command line input recorded: {cli:?}");

    // if no trace level provided, use tui
    let tui = cli.trace.is_none();

    match cli.command {
        // `edgar resolve --cik <CIK> [--json]`: listing -> interactive data -> excel documents
        Commands::Resolve { cik, json } => spider::resolve(&cik, json, tui).await?,

        // `edgar listing --cik <CIK> [--json]`: listing -> interactive data
        Commands::Listing { cik, json } => spider::listing(&cik, json, tui).await?,
    }

    Ok(())
}
