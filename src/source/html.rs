use once_cell::sync::Lazy;
use regex::Regex;

static IMG_SRC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)<img\b[^>]*?\ssrc\s*=\s*["']([^"']*)["']"#).expect("valid img regex")
});
static PARAGRAPH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<p\b[^>]*>(.*?)</p\s*>").expect("valid paragraph regex"));
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid tag regex"));

/// Absolute (`http...`) `src` attributes of `<img>` tags, in document order, at most `limit`.
pub fn extract_image_urls(html: &str, limit: usize) -> Vec<String> {
    IMG_SRC
        .captures_iter(html)
        .map(|caps| html_escape::decode_html_entities(&caps[1]).into_owned())
        .filter(|src| src.starts_with("http"))
        .take(limit)
        .collect()
}

/// Plain text of every `<p>` element, in document order, with markup and entities resolved.
///
/// Empty paragraphs are skipped; no length filter is applied here.
pub fn extract_paragraphs(html: &str) -> Vec<String> {
    PARAGRAPH
        .captures_iter(html)
        .map(|caps| {
            let stripped = TAG.replace_all(&caps[1], "");
            html_escape::decode_html_entities(&stripped)
                .trim()
                .to_string()
        })
        .filter(|text| !text.is_empty())
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/source/html.rs"]
mod tests;
