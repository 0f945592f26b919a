use crate::config::Config;
use anyhow::Context;

#[derive(argh::FromArgs)]
#[argh(
    subcommand,
    name = "login",
    description = "save an api key for later searches"
)]
pub struct Options {
    #[argh(option, short = 'k', description = "the api key")]
    key: String,
}

pub async fn exec(mut config: Config, options: Options) -> anyhow::Result<()> {
    config.api_key = Some(options.key);
    config.save_async().await.context("failed to save config")?;

    eprintln!("Updated config.");

    Ok(())
}
