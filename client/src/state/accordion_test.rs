use super::*;

#[test]
fn all_items_start_collapsed() {
    let faq = Accordion::new(4);
    assert_eq!(faq.open(), None);
    assert_eq!(faq.icon_transform(0), "rotate(0deg)");
}

#[test]
fn toggle_opens_and_rotates_icon() {
    let mut faq = Accordion::new(4);
    faq.toggle(2);
    assert!(faq.is_open(2));
    assert_eq!(faq.icon_transform(2), "rotate(180deg)");
    assert_eq!(faq.icon_transform(1), "rotate(0deg)");
}

#[test]
fn opening_another_item_collapses_the_first() {
    let mut faq = Accordion::new(4);
    faq.toggle(0);
    faq.toggle(3);
    assert!(!faq.is_open(0));
    assert!(faq.is_open(3));
}

#[test]
fn toggling_open_item_collapses_it() {
    let mut faq = Accordion::with_open(2, Some(1));
    faq.toggle(1);
    assert_eq!(faq.open(), None);
}

#[test]
fn out_of_range_toggle_is_ignored() {
    let mut faq = Accordion::new(1);
    faq.toggle(3);
    assert_eq!(faq.open(), None);
}

#[test]
fn icon_plan_reads_clicked_chevron_from_question() {
    let mut faq = Accordion::new(3);
    faq.toggle(1);
    assert_eq!(
        faq.icon_plan(1),
        vec![
            (0, IconHost::Item, "rotate(0deg)"),
            (1, IconHost::Question, "rotate(180deg)"),
            (2, IconHost::Item, "rotate(0deg)"),
        ]
    );
}

#[test]
fn icon_plan_after_collapse_still_targets_question() {
    let mut faq = Accordion::with_open(2, Some(0));
    faq.toggle(0);
    assert_eq!(faq.icon_plan(0)[0], (0, IconHost::Question, "rotate(0deg)"));
}
