use super::*;

#[test]
fn modal_starts_hidden() {
    let modal = Modal::default();
    assert!(!modal.is_open());
    assert_eq!(modal.display(), "none");
}

#[test]
fn open_shows_as_flex() {
    let mut modal = Modal::default();
    modal.open();
    assert_eq!(modal.display(), "flex");
}

#[test]
fn close_is_idempotent() {
    let mut modal = Modal::default();
    modal.open();
    modal.close();
    modal.close();
    assert_eq!(modal.display(), "none");
}
