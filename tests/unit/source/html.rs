use super::*;

const SEARCH_PAGE: &str = r#"
<html><body>
  <img src="/images/branding/logo.png" alt="logo">
  <IMG class="thumb" SRC="https://encrypted-tbn0.gstatic.com/images?q=tbn:A&amp;s=1">
  <img data-x="1" src='http://example.com/b.jpg'/>
  <img alt="no source">
  <img src="https://example.com/c.png">
</body></html>
"#;

#[test]
fn image_urls_keep_absolute_sources_in_order() {
    let urls = extract_image_urls(SEARCH_PAGE, 10);
    assert_eq!(
        urls,
        vec![
            "https://encrypted-tbn0.gstatic.com/images?q=tbn:A&s=1".to_string(),
            "http://example.com/b.jpg".to_string(),
            "https://example.com/c.png".to_string(),
        ]
    );
}

#[test]
fn image_urls_respect_limit() {
    assert_eq!(
        extract_image_urls(SEARCH_PAGE, 1),
        vec!["https://encrypted-tbn0.gstatic.com/images?q=tbn:A&s=1".to_string()]
    );
    assert!(extract_image_urls(SEARCH_PAGE, 0).is_empty());
}

#[test]
fn paragraphs_strip_markup_and_decode_entities() {
    let html = r#"
      <div><p class="lead">Mars is the <b>fourth</b> planet from the <a href="/wiki/Sun">Sun</a>&#91;1&#93;.</p>
      <p>   </p>
      <pre>not a paragraph</pre>
      <p>Fish &amp; chips &lt;3 &#x263A;</p></div>
    "#;
    let paras = extract_paragraphs(html);
    assert_eq!(
        paras,
        vec![
            "Mars is the fourth planet from the Sun[1].".to_string(),
            "Fish & chips <3 \u{263A}".to_string(),
        ]
    );
}

#[test]
fn paragraphs_decode_named_entities() {
    let html = "<p>Mars &ndash; the red planet&hellip; caf&eacute; &copy; Olympus&nbsp;Mons</p>";
    assert_eq!(
        extract_paragraphs(html),
        vec!["Mars \u{2013} the red planet\u{2026} caf\u{e9} \u{a9} Olympus\u{a0}Mons".to_string()]
    );
}

#[test]
fn paragraphs_span_lines() {
    let html = "<p>first line\nsecond line</p>";
    assert_eq!(
        extract_paragraphs(html),
        vec!["first line\nsecond line".to_string()]
    );
}
