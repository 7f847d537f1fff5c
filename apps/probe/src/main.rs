use anyhow::Context;
use menkyo::domain::config::Config;
use menkyo::kernel::config::load_config_or_default;
use menkyo_logger::Logger;
use menkyo_probe::Probe;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configuration never fails: unknown or missing settings degrade to defaults.
    let cfg: Config = load_config_or_default(Some("menkyo"));

    let _log = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .level_str(&cfg.app.log_level)
        .output_str(&cfg.app.log_output)
        .format_str(&cfg.app.log_format)
        .init()
        .context("Critical: logging bootstrap failed")?;

    Probe::builder().config(cfg).build().await?.run().await
}
