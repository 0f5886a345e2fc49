mod cmd;

use clap::Parser;
use pipeline::ProducerArgs;

#[derive(Parser)]
#[command(
    name = "interval-producer",
    about = "Publishes a fixed heartbeat record to a Kinesis stream every few seconds"
)]
struct Cli {
    #[command(flatten)]
    args: ProducerArgs,
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
