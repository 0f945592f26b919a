use crate::Image;
use std::collections::HashMap;

/// The results of a search
#[derive(Debug, Default, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct SearchResults {
    /// The images that matched, in the order the api sent them.
    #[serde(rename = "search", deserialize_with = "crate::util::null_as_default")]
    pub entries: Vec<Image>,

    /// The total # of matches.
    ///
    /// This is the total for the query, not the # in this list.
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub total: u64,

    /// Favorite and vote info for the current user.
    ///
    /// The shape of these is not documented.
    #[serde(deserialize_with = "crate::util::null_as_default")]
    pub interactions: Vec<serde_json::Value>,

    /// Unknown K/Vs
    #[serde(flatten)]
    pub unknown: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Representations;
    use time::macros::datetime;

    const SEARCH: &str = include_str!("../../test_data/search.json");
    const MISSING_FIELDS: &str = include_str!("../../test_data/missing_fields.json");
    const NULL_FIELDS: &str = include_str!("../../test_data/null_fields.json");
    const EMPTY: &str = include_str!("../../test_data/empty.json");

    fn parse(json: &str) -> SearchResults {
        let deserializer = &mut serde_json::Deserializer::from_str(json);
        serde_path_to_error::deserialize(deserializer)
            .unwrap_or_else(|error| panic!("failed to parse: {error}"))
    }

    #[test]
    fn parse_search() {
        let results = parse(SEARCH);

        assert_eq!(results.total, 2);
        assert_eq!(results.entries.len(), 2);
        assert!(results.interactions.is_empty());
        assert!(results.unknown.is_empty(), "{:#?}", results.unknown);

        for entry in results.entries.iter() {
            assert!(entry.unknown.is_empty(), "unknown data: {:#?}", entry.unknown);
        }

        let first = &results.entries[0];
        assert_eq!(first.id, 1_234_567);
        assert_eq!(first.created_at, Some(datetime!(2019-03-24 17:49:11.211 UTC)));
        assert_eq!(first.updated_at, Some(datetime!(2019-04-02 08:12:05.617 UTC)));
        assert_eq!(first.first_seen_at, Some(datetime!(2019-03-24 17:49:11.211 UTC)));
        assert_eq!(first.score, 412);
        assert_eq!(first.comment_count, 17);
        assert_eq!(first.width, 1920);
        assert_eq!(first.height, 1080);
        assert_eq!(first.file_name, "twilight_reading.png");
        assert_eq!(first.description.as_deref(), Some("Commission for a friend."));
        assert_eq!(first.uploader.as_deref(), Some("Sky Brush"));
        assert_eq!(first.uploader_id, Some(212_345));
        assert_eq!(
            first.image,
            "//derpicdn.net/img/view/2019/3/24/1234567__safe_twilight+sparkle.png"
        );
        assert_eq!(first.upvotes, 430);
        assert_eq!(first.downvotes, 18);
        assert_eq!(first.faves, 201);
        assert_eq!(first.tags, "safe, solo, twilight sparkle, book, reading");
        assert_eq!(first.tag_ids, [40482, 48937, 24249, 26373, 39002]);
        assert_eq!(first.aspect_ratio, 16.0 / 9.0);
        assert_eq!(first.original_format, "png");
        assert_eq!(first.mime_type, "image/png");
        assert_eq!(first.sha512_hash, "9c5a1f2e");
        assert_eq!(first.orig_sha512_hash, "d41b07aa");
        assert_eq!(
            first.source_url.as_deref(),
            Some("https://www.deviantart.com/skybrush/art/Twilight-Reading-123")
        );
        assert_eq!(
            first.representations.thumb_tiny,
            "//derpicdn.net/img/2019/3/24/1234567/thumb_tiny.png"
        );
        assert_eq!(
            first.representations.full,
            "//derpicdn.net/img/view/2019/3/24/1234567.png"
        );
        assert!(first.is_rendered);
        assert!(first.is_optimized);

        let second = &results.entries[1];
        assert_eq!(second.id, 1_234_568);
        assert_eq!(second.score, -3);
        assert_eq!(second.uploader_id, None);
        assert_eq!(second.uploader.as_deref(), Some("Background Pony #4F2A"));
        assert_eq!(second.description.as_deref(), Some(""));
        assert_eq!(second.source_url, None);
        assert_eq!(second.mime_type, "image/gif");
        assert!(!second.is_optimized);
    }

    #[test]
    fn parse_missing_fields() {
        let results = parse(MISSING_FIELDS);

        assert_eq!(results.total, 1);
        assert_eq!(results.entries.len(), 1);
        assert!(results.interactions.is_empty());

        let entry = &results.entries[0];
        assert_eq!(entry.id, 42);
        assert_eq!(entry.tags, "safe");
        assert_eq!(entry.representations, Representations::default());
        assert_eq!(entry.created_at, None);
        assert_eq!(entry.file_name, "");
        assert_eq!(entry.width, 0);
        assert!(entry.tag_ids.is_empty());
        assert!(!entry.is_rendered);
    }

    #[test]
    fn parse_null_fields() {
        let results = parse(NULL_FIELDS);

        assert_eq!(results.total, 2);
        assert_eq!(results.entries.len(), 2);
        assert!(results.interactions.is_empty());

        let first = &results.entries[0];
        assert_eq!(first.id, 7);
        assert_eq!(first.created_at, None);
        assert_eq!(first.score, 0);
        assert_eq!(first.width, 0);
        assert_eq!(first.file_name, "");
        assert_eq!(first.description, None);
        assert_eq!(first.uploader, None);
        assert_eq!(first.tags, "");
        assert!(first.tag_ids.is_empty());
        assert_eq!(first.aspect_ratio, 0.0);
        assert_eq!(first.mime_type, "");
        assert_eq!(first.representations, Representations::default());
        assert!(!first.is_rendered);
        assert!(!first.is_optimized);
        assert!(first.unknown.is_empty(), "unknown data: {:#?}", first.unknown);

        let second = &results.entries[1];
        assert_eq!(
            second.representations.thumb,
            "//derpicdn.net/img/2019/3/24/8/thumb.png"
        );
        assert_eq!(second.representations.full, "");
    }

    #[test]
    fn parse_empty() {
        let results = parse(EMPTY);
        assert_eq!(results.total, 0);
        assert!(results.entries.is_empty());
        assert_eq!(results.interactions.len(), 1);
    }

    #[test]
    fn wrong_shape_fails() {
        let error = serde_json::from_str::<SearchResults>(r#"{"search": "nope"}"#)
            .expect_err("a string is not a list of images");
        assert!(error.is_data());
    }
}
