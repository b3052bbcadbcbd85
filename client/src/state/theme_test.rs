use super::*;

#[test]
fn stored_dark_selects_dark() {
    assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
}

#[test]
fn missing_or_unknown_value_falls_back_to_light() {
    assert_eq!(Theme::from_stored(None), Theme::Light);
    assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("sepia")), Theme::Light);
    assert_eq!(Theme::from_stored(Some("")), Theme::Light);
}

#[test]
fn toggled_round_trips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn attribute_values() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
}

#[test]
fn icon_offers_the_other_theme() {
    assert_eq!(Theme::Light.icon_class(), "bx bx-moon");
    assert_eq!(Theme::Dark.icon_class(), "bx bx-sun");
}
