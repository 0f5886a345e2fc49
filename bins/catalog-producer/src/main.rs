mod cmd;

use clap::Parser;
use cmd::config::CatalogArgs;

#[derive(Parser)]
#[command(
    name = "catalog-producer",
    about = "Publishes simulated grocery purchases to a Kinesis stream"
)]
struct Cli {
    #[command(flatten)]
    args: CatalogArgs,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = cmd::generate::run(&cli.args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
