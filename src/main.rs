use dotenv_flow::dotenv_flow;
use eyre::Result;
use jwk_keystore::{run, Config};
use tracing::info;
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load dotenv-flow variables
    dotenv_flow().ok();

    // Enable logging
    config_tracing();

    let config = Config::from_env(std::env::args().nth(1))?;
    info!(curve = %config.curve, store = ?config.store_path, "signing configured message");

    let outcome = run(&config)?;

    println!("{}", serde_json::to_string(&outcome.public_key)?);
    println!("{}", hex::encode(&outcome.signature));

    Ok(())
}

fn config_tracing() {
    let tracing_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let filter = filter::Targets::new()
        .with_target("keystore", tracing::Level::DEBUG)
        .with_default(tracing::Level::INFO);

    tracing_subscriber::registry()
        .with(tracing_layer)
        .with(filter)
        .init();
}
