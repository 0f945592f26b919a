use crate::config::Config;
use anyhow::Context;
use derpibooru::Url;

#[derive(argh::FromArgs)]
#[argh(subcommand, name = "search", description = "search for images by tag")]
pub struct Options {
    #[argh(positional, description = "the tags to search for")]
    tags: Vec<String>,

    #[argh(
        option,
        short = 'k',
        description = "the api key. overrides the saved key"
    )]
    key: Option<String>,

    #[argh(option, description = "the search endpoint to use")]
    search_url: Option<String>,

    #[argh(switch, description = "print the results as json")]
    json: bool,
}

pub async fn exec(config: &Config, options: Options) -> anyhow::Result<()> {
    let client = match options.search_url.as_deref() {
        Some(search_url) => {
            let search_url = Url::parse(search_url).context("invalid search url")?;
            derpibooru::Client::with_search_url(search_url)
        }
        None => derpibooru::Client::new(),
    };

    let key = options.key.as_deref().or_else(|| config.api_key()).unwrap_or("");
    let tags = options.tags.join(" ");
    let results = client
        .search(&tags, key)
        .await
        .with_context(|| format!("failed to search for \"{tags}\""))?;

    if options.json {
        let json =
            serde_json::to_string_pretty(&results).context("failed to serialize results")?;
        println!("{json}");
        return Ok(());
    }

    println!("Total: {}", results.total);
    println!();

    if results.entries.is_empty() {
        println!("No Results");
    }

    for (i, image) in results.entries.iter().enumerate() {
        println!("{})", i + 1);
        println!("ID: {}", image.id);
        println!("Url: {}", image.post_url());
        if let Some(image_url) = image.image_url() {
            println!("Image: {image_url}");
        }
        println!("Score: {}", image.score);
        println!("Tags: {}", image.tags);
        println!();
    }

    Ok(())
}
