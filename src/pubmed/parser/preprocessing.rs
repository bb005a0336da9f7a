//! XML preprocessing for the PubMed parser

use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

/// Strip inline formatting tags (`<i>`, `<sup>`, `<sub>`, `<b>`, ...) from PubMed XML
///
/// PubMed titles and abstracts use these for typography only. Mixed content would
/// otherwise break string fields in the serde deserializer.
///
/// ```ignore
/// let cleaned = strip_inline_html_tags("<AbstractText>CO<sup>2</sup> levels</AbstractText>");
/// assert_eq!(cleaned, "<AbstractText>CO2 levels</AbstractText>");
/// ```
pub(crate) fn strip_inline_html_tags(xml: &str) -> String {
    static INLINE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = INLINE_TAG_REGEX.get_or_init(|| {
        Regex::new(r"</?(?:i|b|u|sup|sub|em|strong|italic|bold)>")
            .expect("inline tag pattern is a valid regex")
    });

    let cleaned = re.replace_all(xml, "");

    if cleaned.len() != xml.len() {
        debug!(
            original_size = xml.len(),
            cleaned_size = cleaned.len(),
            "Stripped inline HTML tags"
        );
    }

    cleaned.into_owned()
}
