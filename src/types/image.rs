use std::collections::HashMap;
use time::OffsetDateTime;
use url::Url;

/// An image
///
/// Fields that are missing or null in the api response are left as their default value.
#[derive(Debug, Default, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Image {
    /// The image id
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub id: u64,

    /// When the image was uploaded.
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,

    /// When the image was last changed.
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,

    /// When the image was first seen.
    ///
    /// This is usually the same as `created_at`.
    #[serde(with = "time::serde::rfc3339::option")]
    pub first_seen_at: Option<OffsetDateTime>,

    /// The score.
    ///
    /// This is upvotes minus downvotes, and may be negative.
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub score: i64,

    /// The # of comments
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub comment_count: u64,

    /// The width of the original file
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub width: u64,

    /// The height of the original file
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub height: u64,

    /// The name of the file when it was uploaded
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub file_name: String,

    /// The description.
    pub description: Option<String>,

    /// The uploader name.
    ///
    /// Anonymous uploads get a generated name.
    pub uploader: Option<String>,

    /// The uploader id.
    ///
    /// This is `None` for anonymous uploads.
    pub uploader_id: Option<u64>,

    /// The full image url.
    ///
    /// This is protocol-relative, see [`Image::image_url`].
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub image: String,

    /// # of upvotes
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub upvotes: u64,

    /// # of downvotes
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub downvotes: u64,

    /// # of favorites
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub faves: u64,

    /// The tags, seperated by ", ".
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub tags: String,

    /// The tag ids, in the same order as `tags`.
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub tag_ids: Vec<u64>,

    /// Width / height
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub aspect_ratio: f64,

    /// The format of the uploaded file, like "png"
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub original_format: String,

    /// The mime type
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub mime_type: String,

    /// The sha512 hash of the processed file
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub sha512_hash: String,

    /// The sha512 hash of the uploaded file
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub orig_sha512_hash: String,

    /// The original source.
    ///
    /// May or may not be a url, it is filled manually by users.
    pub source_url: Option<String>,

    /// Urls for resized versions of this image
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub representations: Representations,

    /// Whether thumbnails have been generated
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub is_rendered: bool,

    /// Whether the file has been optimized
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub is_optimized: bool,

    /// Unknown K/Vs
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

impl Image {
    /// Iterate over the individual tags.
    pub fn tag_list(&self) -> impl Iterator<Item = &str> {
        self.tags
            .split(',')
            .map(|tag| tag.trim())
            .filter(|tag| !tag.is_empty())
    }

    /// Get the page url for this image.
    ///
    /// This allocates, so cache the result.
    pub fn post_url(&self) -> Url {
        crate::image_id_to_post_url(self.id)
    }

    /// Get the full image url as an absolute url.
    ///
    /// Returns `None` if the api did not send a valid url.
    pub fn image_url(&self) -> Option<Url> {
        crate::resolve_url(&self.image)
    }
}

/// Urls for resized versions of an image.
///
/// All urls are protocol-relative.
/// Variants the api did not send are empty.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Representations {
    /// 50x50
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub thumb_tiny: String,

    /// 150x150
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub thumb_small: String,

    /// 250x250
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub thumb: String,

    /// 320x240
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub small: String,

    /// 800x600
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub medium: String,

    /// 1280x1024
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub large: String,

    /// 1024 wide, for tall images
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub tall: String,

    /// The full image
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub full: String,
}

impl Representations {
    /// Iterate over the variants that are present, as `(name, url)` pairs, smallest first.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("thumb_tiny", self.thumb_tiny.as_str()),
            ("thumb_small", self.thumb_small.as_str()),
            ("thumb", self.thumb.as_str()),
            ("small", self.small.as_str()),
            ("medium", self.medium.as_str()),
            ("large", self.large.as_str()),
            ("tall", self.tall.as_str()),
            ("full", self.full.as_str()),
        ]
        .into_iter()
        .filter(|(_, url)| !url.is_empty())
    }
}
