use super::*;

#[test]
fn catalog_href_without_category_is_bare_path() {
    assert_eq!(catalog_href(None), "/catalog");
}

#[test]
fn catalog_href_encodes_slug() {
    assert_eq!(catalog_href(Some("board-games")), "/catalog?category=board-games");
    assert_eq!(catalog_href(Some("films & tv")), "/catalog?category=films+%26+tv");
}

#[test]
fn results_summary_describes_current_slice() {
    assert_eq!(results_summary(1, 12, 30), "Showing 1-12 of 30 designs");
    assert_eq!(results_summary(3, 12, 30), "Showing 25-30 of 30 designs");
    assert_eq!(results_summary(1, 12, 5), "Showing 1-5 of 5 designs");
}

#[test]
fn results_summary_for_empty_filter() {
    assert_eq!(results_summary(1, 12, 0), "No designs found");
}
