//! UI Builder module for fixed replies and inline photo results

use crate::config::DispatcherConfig;
use crate::result_id::new_result_id;
use crate::search::{Frame, SearchClient};
use crate::telegram::PhotoResult;

pub const START_MESSAGE: &str = "Use this bot inline to search a Simpson screenshot on frinkiac.com.\n\
For example: @FrinkiacSearchBot d'oh";

pub const HELP_MESSAGE: &str = "This is an inline bot. This means that you can use it on any chat, private or group, \
without inviting it. Just type \"@FrinkiacSearchBot <your search>\" and wait. The bot will show you some \
screenshots matching your query, and you can select one of them. Try it here! Just make sure to add \
\"@FrinkiacSearchBot\" at the beginning of your message.\n\n\
You can generate \"meme\" images by adding your own subtitle to the image. To do this, write your search \
query, and the text you want separated by a slash (/). For instance, \"@FrinkiacSearchBot drugs lisa / give \
me the drugs, lisa\" and then pick one of the thumbnails. The image will be generated with your text.";

/// Build one photo result per frame, in search order
///
/// `caption` is the already wrapped overlay text; when present every result
/// points at the meme rendering of its frame instead of the plain image.
pub fn build_photo_results(
    search: &dyn SearchClient,
    frames: &[Frame],
    caption: Option<&str>,
    config: &DispatcherConfig,
) -> Vec<PhotoResult> {
    frames
        .iter()
        .take(config.max_results)
        .map(|frame| {
            let photo_url = match caption {
                Some(caption) => search.meme_url_for(frame, caption),
                None => search.url_for(frame),
            };

            PhotoResult {
                id: new_result_id(),
                photo_url,
                thumbnail_url: search.thumbnail_url_for(frame),
                photo_width: config.photo_width,
                photo_height: config.photo_height,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::FrinkiacClient;

    fn frames(count: u64) -> Vec<Frame> {
        (0..count)
            .map(|i| Frame {
                id: i,
                episode: "S05E10".to_string(),
                timestamp: 1000 * i,
            })
            .collect()
    }

    #[test]
    fn test_plain_results_use_image_urls() {
        let client = FrinkiacClient::new("https://frinkiac.com");
        let results = build_photo_results(&client, &frames(2), None, &DispatcherConfig::default());

        assert_eq!(results.len(), 2);
        assert_eq!(results[1].photo_url, "https://frinkiac.com/img/S05E10/1000.jpg");
        assert_eq!(results[1].thumbnail_url, "https://frinkiac.com/img/S05E10/1000/medium.jpg");
        assert_eq!((results[0].photo_width, results[0].photo_height), (640, 480));
        assert_ne!(results[0].id, results[1].id);
    }

    #[test]
    fn test_captioned_results_use_meme_urls() {
        let client = FrinkiacClient::new("https://frinkiac.com");
        let results = build_photo_results(&client, &frames(1), Some("d'oh"), &DispatcherConfig::default());

        assert!(results[0].photo_url.starts_with("https://frinkiac.com/meme/S05E10/0.jpg?b64lines="));
        assert_eq!(results[0].thumbnail_url, "https://frinkiac.com/img/S05E10/0/medium.jpg");
    }

    #[test]
    fn test_results_are_capped() {
        let client = FrinkiacClient::new("https://frinkiac.com");
        let config = DispatcherConfig {
            max_results: 3,
            ..Default::default()
        };

        let results = build_photo_results(&client, &frames(10), None, &config);
        assert_eq!(results.len(), 3);
        assert_eq!(results[2].photo_url, "https://frinkiac.com/img/S05E10/2000.jpg");
    }
}
