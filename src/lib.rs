mod client;
mod error;
mod types;
mod util;

pub use crate::{
    client::{
        Client,
        SearchQueryBuilder,
    },
    error::Error,
    types::{
        Image,
        Representations,
        SearchResults,
    },
};
pub use url::Url;

// URL constants
const URL_BASE: &str = "https://derpibooru.org/";
const URL_SEARCH: &str = "https://derpibooru.org/search.json";

/// Turn an image id into the url of its page on the site.
fn image_id_to_post_url(id: u64) -> Url {
    // It shouldn't be possible to make this function fail for any id.
    Url::parse(URL_BASE)
        .and_then(|base| base.join(itoa::Buffer::new().format(id)))
        .unwrap()
}

/// Resolve a url sent by the api.
///
/// The api sends protocol-relative urls, like `//derpicdn.net/img/...`.
fn resolve_url(url: &str) -> Option<Url> {
    if url.is_empty() {
        return None;
    }

    Url::parse(URL_BASE).ok()?.join(url).ok()
}
