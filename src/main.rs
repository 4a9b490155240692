use clap::Parser;
use narrative::cli::{AppContext, Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // NRT_LOG=debug nrt ... for per-file detail; warnings and errors
    // always surface. Installed after parsing so --no-color governs
    // error output too.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env("NRT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .with_ansi(!cli.no_color)
        .init();

    // Build a context once, pass everywhere
    let ctx = AppContext {
        quiet: cli.quiet,
        no_color: cli.no_color,
    };

    let result = match cli.command {
        Commands::Assemble(args) => narrative::core::assemble_run(args, &ctx),
        Commands::Init(args) => narrative::infra::config::init(args, &ctx),
        Commands::Completions(args) => narrative::completion::run(args),
    };

    // The core only ever returns errors; deciding to terminate happens
    // here and nowhere deeper
    if let Err(err) = result {
        tracing::error!("{:#}", err);
        std::process::exit(1);
    }
}
