use clap::Parser;

use live_mock::cli::Cli;
use live_mock::logger::init_logger;
use live_mock::server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = cli.load_settings()?;

    if cli.dry_run() {
        println!("Configuration is valid");
        println!("  application: {} v{}", settings.application.name, settings.application.version);
        println!("  bind address: {}", settings.server.address());
        match settings.mock.seed {
            Some(seed) => println!("  mock seed: {seed}"),
            None => println!("  mock seed: none (OS entropy)"),
        }
        return Ok(());
    }

    init_logger(&settings.logger.to_logger_config()?)?;

    Server::new(settings).run().await
}
