use super::*;

fn category(id: i64, slug: &str, name: &str) -> Category {
    Category {
        id,
        name: name.to_owned(),
        slug: slug.to_owned(),
        description: String::new(),
        image_url: None,
        is_active: true,
    }
}

fn design(id: i64, category_id: i64, name: &str, created_at: &str, votes: Option<u32>) -> Design {
    Design {
        id,
        name: name.to_owned(),
        description: String::new(),
        category_id,
        image_url: String::new(),
        model_url: None,
        created_at: created_at.to_owned(),
        is_active: true,
        votes_count: votes,
    }
}

fn sample() -> CatalogState {
    let mut state = CatalogState::default();
    state.load(
        vec![category(1, "animals", "Animals"), category(2, "holidays", "Holidays"), category(3, "empty", "Empty")],
        vec![
            design(10, 1, "cat", "2025-01-03T00:00:00", Some(5)),
            design(11, 1, "Bear", "2025-01-01T00:00:00", None),
            design(12, 2, "Tree", "2025-01-02T00:00:00", Some(9)),
            design(13, 2, "angel", "2025-01-04T00:00:00", Some(1)),
        ],
        &[design(12, 2, "Tree", "2025-01-02T00:00:00", Some(9))],
    );
    state
}

fn many(count: i64) -> CatalogState {
    let mut state = CatalogState::default();
    let designs = (0..count)
        .map(|i| design(i, 1, &format!("d{i:03}"), "2025-01-01T00:00:00", Some(0)))
        .collect();
    state.load(vec![category(1, "animals", "Animals")], designs, &[]);
    state
}

fn ids(items: &[&CatalogDesign]) -> Vec<i64> {
    items.iter().map(|entry| entry.design.id).collect()
}

// =============================================================
// Loading
// =============================================================

#[test]
fn load_counts_designs_per_category() {
    let state = sample();
    let counts: Vec<usize> = state.categories.iter().map(|c| c.count).collect();
    assert_eq!(counts, vec![2, 2, 0]);
    assert_eq!(state.total_designs(), 4);
}

#[test]
fn load_marks_voted_designs() {
    let state = sample();
    let voted: Vec<i64> = state.designs.iter().filter(|d| d.has_voted).map(|d| d.design.id).collect();
    assert_eq!(voted, vec![12]);
}

#[test]
fn load_resets_page() {
    let mut state = many(30);
    state.go_to(3);
    state.load(Vec::new(), Vec::new(), &[]);
    assert_eq!(state.page, 1);
}

// =============================================================
// Filtering and sorting
// =============================================================

#[test]
fn popular_sort_treats_missing_votes_as_zero() {
    let state = sample();
    assert_eq!(ids(&state.filtered()), vec![12, 10, 13, 11]);
}

#[test]
fn newest_and_oldest_sort_by_creation_time() {
    let mut state = sample();
    state.set_sort(SortOrder::Newest);
    assert_eq!(ids(&state.filtered()), vec![13, 10, 12, 11]);
    state.set_sort(SortOrder::Oldest);
    assert_eq!(ids(&state.filtered()), vec![11, 12, 10, 13]);
}

#[test]
fn alphabetical_sort_ignores_case() {
    let mut state = sample();
    state.set_sort(SortOrder::Alphabetical);
    assert_eq!(ids(&state.filtered()), vec![13, 11, 10, 12]);
}

#[test]
fn category_filter_uses_slug() {
    let mut state = sample();
    state.select_category(Some("animals".to_owned()));
    assert_eq!(ids(&state.filtered()), vec![10, 11]);
    assert_eq!(state.selected_category_name().as_deref(), Some("Animals"));
}

#[test]
fn all_and_blank_category_clear_filter() {
    let mut state = sample();
    state.select_category(Some("animals".to_owned()));
    state.select_category(Some(ALL_CATEGORIES.to_owned()));
    assert_eq!(state.selected_category, None);
    assert_eq!(state.filtered_count(), 4);
    state.select_category(Some("  ".to_owned()));
    assert_eq!(state.selected_category, None);
}

#[test]
fn unknown_category_matches_nothing() {
    let mut state = sample();
    state.select_category(Some("dinosaurs".to_owned()));
    assert_eq!(state.filtered_count(), 0);
    assert_eq!(state.total_pages(), 0);
    assert!(state.page_window().is_empty());
}

#[test]
fn filter_and_sort_changes_reset_page() {
    let mut state = many(40);
    state.go_to(3);
    assert_eq!(state.page, 3);
    state.set_sort(SortOrder::Newest);
    assert_eq!(state.page, 1);
    state.go_to(2);
    state.select_category(Some("animals".to_owned()));
    assert_eq!(state.page, 1);
}

#[test]
fn sort_order_parse_falls_back_to_popular() {
    assert_eq!(SortOrder::parse("oldest"), SortOrder::Oldest);
    assert_eq!(SortOrder::parse("random"), SortOrder::Popular);
}

#[test]
fn toggle_view_alternates() {
    let mut state = sample();
    assert_eq!(state.view, ViewMode::Grid);
    state.toggle_view();
    assert_eq!(state.view, ViewMode::List);
    state.toggle_view();
    assert_eq!(state.view, ViewMode::Grid);
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn total_pages_rounds_up() {
    assert_eq!(many(0).total_pages(), 0);
    assert_eq!(many(12).total_pages(), 1);
    assert_eq!(many(13).total_pages(), 2);
}

#[test]
fn page_items_slice_the_current_page() {
    let mut state = many(30);
    assert_eq!(state.page_items().len(), 12);
    state.go_to(3);
    let items = state.page_items();
    assert_eq!(items.len(), 6);
    assert_eq!(items[0].design.name, "d024");
}

#[test]
fn go_to_clamps_into_range() {
    let mut state = many(30);
    state.go_to(0);
    assert_eq!(state.page, 1);
    state.go_to(99);
    assert_eq!(state.page, 3);
    state.next_page();
    assert_eq!(state.page, 3);
    state.prev_page();
    state.prev_page();
    state.prev_page();
    assert_eq!(state.page, 1);
}

#[test]
fn go_to_on_empty_catalog_stays_on_first_page() {
    let mut state = many(0);
    state.go_to(4);
    assert_eq!(state.page, 1);
    assert!(state.page_items().is_empty());
}

#[test]
fn page_window_is_centred_and_bounded() {
    let mut state = many(12 * 10);
    assert_eq!(state.page_window(), vec![1, 2, 3, 4, 5]);
    state.go_to(6);
    assert_eq!(state.page_window(), vec![4, 5, 6, 7, 8]);
    state.go_to(10);
    assert_eq!(state.page_window(), vec![6, 7, 8, 9, 10]);
    state.go_to(9);
    assert_eq!(state.page_window(), vec![6, 7, 8, 9, 10]);
}

#[test]
fn page_window_shrinks_with_few_pages() {
    let mut state = many(12 * 3);
    state.go_to(3);
    assert_eq!(state.page_window(), vec![1, 2, 3]);
}

// =============================================================
// Voting
// =============================================================

#[test]
fn open_unknown_design_is_ignored() {
    let mut state = sample();
    state.open(999);
    assert!(state.selected.is_none());
}

#[test]
fn vote_requires_sign_in() {
    let mut state = sample();
    state.open(10);
    assert_eq!(state.begin_vote(false), Err("You must sign in to vote".to_owned()));
    assert_eq!(state.vote, VoteStatus::Failed("You must sign in to vote".to_owned()));
}

#[test]
fn vote_refused_when_already_voted() {
    let mut state = sample();
    state.open(12);
    assert_eq!(state.can_vote(true), Err("You have already voted for this design".to_owned()));
}

#[test]
fn vote_refused_while_in_flight() {
    let mut state = sample();
    state.open(10);
    assert_eq!(state.begin_vote(true), Ok(10));
    assert_eq!(state.vote, VoteStatus::Voting);
    assert!(state.begin_vote(true).is_err());
}

#[test]
fn vote_success_increments_once_and_marks_voted() {
    let mut state = sample();
    state.open(11);
    let id = state.begin_vote(true).unwrap();
    state.apply_vote_success(id);
    state.apply_vote_success(id);
    let entry = state.selected_design().unwrap();
    assert!(entry.has_voted);
    assert_eq!(entry.design.votes_count, Some(1));
    assert_eq!(state.vote, VoteStatus::Voted);
    assert!(state.can_vote(true).is_err());
}

#[test]
fn vote_success_reorders_popular_listing() {
    let mut state = sample();
    state.set_sort(SortOrder::Popular);
    state.open(11);
    let id = state.begin_vote(true).unwrap();
    state.apply_vote_success(id);
    state.close();
    state.open(13);
    let id = state.begin_vote(true).unwrap();
    state.apply_vote_success(id);
    assert_eq!(ids(&state.filtered()), vec![12, 10, 13, 11]);
    assert_eq!(state.selected_design().unwrap().design.votes(), 2);
}

#[test]
fn vote_failure_records_message() {
    let mut state = sample();
    state.open(10);
    state.begin_vote(true).unwrap();
    state.apply_vote_failure("Monthly vote limit reached".to_owned());
    assert_eq!(state.vote, VoteStatus::Failed("Monthly vote limit reached".to_owned()));
    assert!(!state.selected_design().unwrap().has_voted);
}

#[test]
fn reopening_resets_vote_status() {
    let mut state = sample();
    state.open(10);
    state.apply_vote_failure("nope".to_owned());
    state.close();
    assert!(state.selected.is_none());
    state.open(10);
    assert_eq!(state.vote, VoteStatus::Idle);
}

#[test]
fn category_name_lookup_defaults_to_empty() {
    let state = sample();
    assert_eq!(state.category_name(2), "Holidays");
    assert_eq!(state.category_name(42), "");
}

#[test]
fn parse_category_param_trims_and_drops_all() {
    assert_eq!(parse_category_param(None), None);
    assert_eq!(parse_category_param(Some("all".to_owned())), None);
    assert_eq!(parse_category_param(Some(" animals ".to_owned())), Some("animals".to_owned()));
}
