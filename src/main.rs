use clap::Parser;
use echoreport::cli::{self, AppContext, Commands};
use echoreport::errors::EchoError;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match (cli.quiet, cli.verbose) {
        (true, 0) => "warn",
        (_, 0) => "info",
        (_, 1) => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        git = option_env!("GIT_HASH").unwrap_or("dev"),
        built = env!("BUILD_TIMESTAMP"),
        "echoreport starting"
    );

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: cli::Cli) -> Result<(), EchoError> {
    // Form commands need neither config nor database.
    match &cli.command {
        Commands::Template(args) => return cli::form::handle_template(args.clone()),
        Commands::Options(args) => return cli::form::handle_options(args.clone()),
        Commands::Validate(args) => return cli::form::handle_validate(args.clone()),
        _ => {}
    }

    let ctx = AppContext::from_cli(&cli)?;
    match cli.command {
        Commands::Init => cli::init::handle_init(&ctx),
        Commands::Submit(args) => cli::submit::handle_submit(&ctx, args),
        Commands::Show(args) => cli::query::handle_show(&ctx, args),
        Commands::List(args) => cli::query::handle_list(&ctx, args),
        Commands::Count(args) => cli::query::handle_count(&ctx, args),
        Commands::Remaining(args) => cli::reports::handle_remaining(&ctx, args),
        Commands::Summary(args) => cli::reports::handle_summary(&ctx, args),
        Commands::Trends(args) => cli::reports::handle_trends(&ctx, args),
        Commands::Dashboard(args) => cli::reports::handle_dashboard(&ctx, args),
        Commands::Template(_) | Commands::Options(_) | Commands::Validate(_) => Ok(()),
    }
}
