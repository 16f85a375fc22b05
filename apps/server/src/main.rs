use anyhow::Context;
use pantry::kernel::config::load_config;
use pantry_logger::Logger;
use pantry_server::Server;

#[pantry_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let _log = Logger::builder(env!("CARGO_PKG_NAME")).init()?;

    let config_path = std::env::args().nth(1);
    let cfg = load_config(config_path).context("Critical: Configuration is malformed")?;

    Server::builder().config(cfg).build()?.run().await
}
