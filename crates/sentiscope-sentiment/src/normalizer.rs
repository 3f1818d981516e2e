//! Raw post text cleanup ahead of scoring.

use regex::Regex;

use crate::stopwords::StopwordSet;

/// Strips URLs, mentions, hashtag markers, and punctuation, lowercases, and
/// removes stopwords.
///
/// Regexes are compiled once at construction; the value is immutable
/// afterwards and can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    stopwords: StopwordSet,
    url_re: Regex,
    mention_re: Regex,
    punct_re: Regex,
}

impl TextNormalizer {
    #[must_use]
    pub fn new(stopwords: StopwordSet) -> Self {
        Self {
            stopwords,
            url_re: Regex::new(r"http\S+|www\S+|https\S+").expect("valid url regex"),
            mention_re: Regex::new(r"@\w+|#").expect("valid mention regex"),
            punct_re: Regex::new(r"[^\w\s]").expect("valid punctuation regex"),
        }
    }

    /// Normalize one post's text. Missing text normalizes to `""`.
    ///
    /// URLs go first so their punctuation cannot leave fragments behind,
    /// and mentions go before punctuation so the `@` still anchors the
    /// handle. The URL pattern runs once more on the lowercased,
    /// punctuation-free text: `Www.Example.Com` or `h-ttp…` only look like
    /// URLs after those steps, and leaving them would make a second
    /// normalization pass change the result.
    #[must_use]
    pub fn normalize(&self, raw: Option<&str>) -> String {
        let Some(text) = raw else {
            return String::new();
        };

        let text = self.url_re.replace_all(text, "");
        let text = self.mention_re.replace_all(&text, "");
        let text = self.punct_re.replace_all(&text, "");
        let text = text.to_lowercase();
        let text = self.url_re.replace_all(&text, "");

        text.split_whitespace()
            .filter(|token| !self.stopwords.contains(token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(StopwordSet::english())
    }
}
