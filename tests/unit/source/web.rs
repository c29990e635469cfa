use super::*;

#[test]
fn search_url_encodes_topic() {
    let src = GoogleImageSource::new(&HttpSettings::default()).unwrap();
    let url = src.query_url("Olympus Mons & more").unwrap();
    assert_eq!(url.host_str(), Some("www.google.com"));
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("q".to_string(), "Olympus Mons & more".to_string()),
            ("client".to_string(), "img".to_string()),
            ("udm".to_string(), "2".to_string()),
        ]
    );
}

#[test]
fn article_url_uses_underscores() {
    let src = WikipediaTextSource::new(&HttpSettings::default())
        .unwrap()
        .with_base_url("https://wiki.example.org/wiki/");
    let url = src.article_url("Solar System").unwrap();
    assert_eq!(url.as_str(), "https://wiki.example.org/wiki/Solar_System");
}

#[test]
fn zero_count_skips_the_network() {
    let mut src = GoogleImageSource::new(&HttpSettings::default())
        .unwrap()
        .with_search_url("http://127.0.0.1:9/unreachable");
    let dir = tempfile::tempdir().unwrap();
    assert!(src.acquire("Mars", 0, dir.path()).unwrap().is_empty());
}

#[test]
fn unreachable_search_is_an_acquisition_error() {
    let settings = HttpSettings {
        timeout: Duration::from_millis(500),
        ..HttpSettings::default()
    };
    let mut src = GoogleImageSource::new(&settings)
        .unwrap()
        .with_search_url("http://127.0.0.1:9/search");
    let dir = tempfile::tempdir().unwrap();
    let err = src.acquire("Mars", 3, dir.path()).unwrap_err();
    assert!(matches!(err, DeckError::Acquisition(_)));
}

#[test]
fn default_settings_match_browser_agent() {
    let s = HttpSettings::default();
    assert_eq!(s.user_agent, "Mozilla/5.0");
    assert_eq!(s.timeout, Duration::from_secs(20));
}
