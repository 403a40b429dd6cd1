use agk::kernel::config::load_config;
use agk_logger::Logger;
use agk_server::Server;
use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    let cfg = load_config(Some("server")).context("Critical: Configuration is malformed")?;

    Server::builder().config(cfg).build()?.run().await
}
