use super::*;

#[test]
fn topic_request_trims_and_validates() {
    let req = TopicRequest::new("  Mars ", 3, 2, Background::Dark).unwrap();
    assert_eq!(req.topic(), "Mars");
    assert_eq!(req.slide_budget(), 3);
    assert_eq!(req.image_budget(), 2);
    assert_eq!(req.background(), Background::Dark);

    assert!(matches!(
        TopicRequest::new("   ", 3, 2, Background::Light),
        Err(DeckError::Validation(_))
    ));
    assert!(matches!(
        TopicRequest::new("Mars", 0, 2, Background::Light),
        Err(DeckError::Validation(_))
    ));
}

#[test]
fn zero_image_budget_is_allowed() {
    TopicRequest::new("Mars", 1, 0, Background::Light).unwrap();
}

#[test]
fn text_roles_carry_size_and_weight() {
    assert_eq!(TextRole::Title.size_pt(), 48);
    assert!(TextRole::Title.bold());
    assert_eq!(TextRole::Subtitle.size_pt(), 24);
    assert!(!TextRole::Subtitle.bold());
    assert_eq!(TextRole::Heading.size_pt(), 36);
    assert!(TextRole::Heading.bold());
    assert_eq!(TextRole::Body.size_pt(), 20);
    assert!(!TextRole::Body.bold());
}
