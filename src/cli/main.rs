mod commands;
mod config;
mod logger;

use self::config::Config;
use anyhow::Context;

#[derive(argh::FromArgs)]
#[argh(description = "A CLI to search derpibooru")]
pub struct Options {
    #[argh(subcommand)]
    subcommand: SubCommand,
}

#[derive(argh::FromArgs)]
#[argh(subcommand)]
enum SubCommand {
    Search(self::commands::search::Options),
    Login(self::commands::login::Options),
}

fn main() -> anyhow::Result<()> {
    let options: Options = argh::from_env();
    self::logger::setup().context("failed to setup logger")?;

    let tokio_rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start tokio runtime")?;
    tokio_rt.block_on(async_main(options))?;

    Ok(())
}

async fn async_main(options: Options) -> anyhow::Result<()> {
    let config = Config::load_async()
        .await
        .context("failed to load config")?;

    match options.subcommand {
        SubCommand::Search(options) => self::commands::search::exec(&config, options).await?,
        SubCommand::Login(options) => self::commands::login::exec(config, options).await?,
    }

    Ok(())
}
