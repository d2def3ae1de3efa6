//! Social share links for a canvas page.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

/// Text attached to share intents.
pub const SHARE_TEXT: &str = "I colored today's abstract canvas on color today";
/// Title used by native share sheets.
pub const SHARE_TITLE: &str = "color today";
/// Body used by native share sheets when sharing the exported image.
pub const SHARE_IMAGE_TEXT: &str = "Here is my color today canvas";

// Characters JavaScript's encodeURIComponent leaves as-is.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLinks {
    pub twitter: String,
    pub facebook: String,
    pub linkedin: String,
}

/// Builds share URLs pointing at `page_url`.
pub fn share_links(page_url: &str) -> ShareLinks {
    let text = encode_uri_component(SHARE_TEXT);
    let url = encode_uri_component(page_url);
    ShareLinks {
        twitter: format!("https://twitter.com/intent/tweet?text={text}&url={url}"),
        facebook: format!("https://www.facebook.com/sharer/sharer.php?u={url}"),
        linkedin: format!("https://www.linkedin.com/sharing/share-offsite/?url={url}"),
    }
}

pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::{encode_uri_component, share_links};

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(
            encode_uri_component("https://example.com/a?b=c&d"),
            "https%3A%2F%2Fexample.com%2Fa%3Fb%3Dc%26d"
        );
        assert_eq!(encode_uri_component("it's (fine)!*~"), "it's%20(fine)!*~");
        assert_eq!(encode_uri_component("é"), "%C3%A9");
    }

    #[test]
    fn links_embed_encoded_page_url() {
        let links = share_links("https://color.today/");
        assert_eq!(
            links.twitter,
            "https://twitter.com/intent/tweet?text=I%20colored%20today's%20abstract%20canvas%20on%20color%20today&url=https%3A%2F%2Fcolor.today%2F"
        );
        assert_eq!(
            links.facebook,
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fcolor.today%2F"
        );
        assert_eq!(
            links.linkedin,
            "https://www.linkedin.com/sharing/share-offsite/?url=https%3A%2F%2Fcolor.today%2F"
        );
    }
}
