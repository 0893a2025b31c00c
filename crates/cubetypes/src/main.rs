use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    // .env is optional; flags and the config file take precedence anyway.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = cubetypes::commands::Cli::parse();
    std::process::exit(cubetypes::commands::run(cli));
}
