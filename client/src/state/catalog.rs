//! Catalog browsing state: filter, sort, paginate, vote.
//!
//! SYSTEM CONTEXT
//! ==============
//! The catalog page loads categories, designs and the user's votes once, then
//! every control (category, sort, view, page, vote) is a transition on this
//! struct. Rendering reads derived views (`page_items`, `page_window`, ...).
//!
//! DESIGN
//! ======
//! The open design is stored by id and looked up in `designs`, so a vote
//! updates the list card and the detail dialog through one write.
//!
//! Invariants:
//! - `page` is 1-based and resets to 1 whenever the filter or sort changes.
//! - A design's `has_voted` only goes from `false` to `true`, and each
//!   successful vote adds exactly one to its count.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::cmp::Ordering;

use crate::config::{DESIGNS_PER_PAGE, MAX_PAGES_SHOWN};
use crate::net::types::{Category, Design};

/// Query-string value meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Most votes first.
    #[default]
    Popular,
    Newest,
    Oldest,
    Alphabetical,
}

impl SortOrder {
    pub const ALL: [Self; 4] = [Self::Popular, Self::Newest, Self::Oldest, Self::Alphabetical];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Alphabetical => "alphabetical",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Popular => "Most popular",
            Self::Newest => "Newest",
            Self::Oldest => "Oldest",
            Self::Alphabetical => "Alphabetical",
        }
    }

    /// Unknown values fall back to the default order.
    pub fn parse(raw: &str) -> Self {
        Self::ALL.into_iter().find(|s| s.as_str() == raw).unwrap_or_default()
    }

    fn compare(self, a: &Design, b: &Design) -> Ordering {
        match self {
            Self::Popular => b.votes().cmp(&a.votes()),
            Self::Newest => b.created_at.cmp(&a.created_at),
            Self::Oldest => a.created_at.cmp(&b.created_at),
            Self::Alphabetical => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Grid => Self::List,
            Self::List => Self::Grid,
        }
    }
}

/// A category plus the number of loaded designs in it.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryEntry {
    pub category: Category,
    pub count: usize,
}

/// A design plus whether the current user already voted for it.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogDesign {
    pub design: Design,
    pub has_voted: bool,
}

/// Progress of a vote on the open design.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum VoteStatus {
    #[default]
    Idle,
    Voting,
    Voted,
    Failed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct CatalogState {
    pub categories: Vec<CategoryEntry>,
    pub designs: Vec<CatalogDesign>,
    /// Selected category slug; `None` shows every category.
    pub selected_category: Option<String>,
    pub sort: SortOrder,
    pub view: ViewMode,
    pub page: usize,
    /// Id of the design whose detail dialog is open.
    pub selected: Option<i64>,
    pub vote: VoteStatus,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            designs: Vec::new(),
            selected_category: None,
            sort: SortOrder::default(),
            view: ViewMode::default(),
            page: 1,
            selected: None,
            vote: VoteStatus::Idle,
        }
    }
}

/// Read the `?category=` value; blank or `all` means no filter.
pub fn parse_category_param(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty() && s != ALL_CATEGORIES)
}

impl CatalogState {
    /// Install freshly fetched data. `voted` is the user's vote list.
    pub fn load(&mut self, categories: Vec<Category>, designs: Vec<Design>, voted: &[Design]) {
        self.categories = categories
            .into_iter()
            .map(|category| {
                let count = designs.iter().filter(|d| d.category_id == category.id).count();
                CategoryEntry { category, count }
            })
            .collect();
        self.designs = designs
            .into_iter()
            .map(|design| {
                let has_voted = voted.iter().any(|v| v.id == design.id);
                CatalogDesign { design, has_voted }
            })
            .collect();
        self.page = 1;
    }

    pub fn select_category(&mut self, slug: Option<String>) {
        self.selected_category = parse_category_param(slug);
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn toggle_view(&mut self) {
        self.view = self.view.toggled();
    }

    fn category_id_for(&self, slug: &str) -> Option<i64> {
        self.categories
            .iter()
            .find(|entry| entry.category.slug == slug)
            .map(|entry| entry.category.id)
    }

    /// Designs passing the category filter, in the chosen order.
    pub fn filtered(&self) -> Vec<&CatalogDesign> {
        let wanted = match &self.selected_category {
            None => None,
            // An unknown slug matches nothing, not everything.
            Some(slug) => Some(self.category_id_for(slug)),
        };
        let mut items: Vec<&CatalogDesign> = self
            .designs
            .iter()
            .filter(|entry| match wanted {
                None => true,
                Some(id) => id == Some(entry.design.category_id),
            })
            .collect();
        items.sort_by(|a, b| self.sort.compare(&a.design, &b.design));
        items
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered_count().div_ceil(DESIGNS_PER_PAGE)
    }

    /// The designs on the current page.
    pub fn page_items(&self) -> Vec<CatalogDesign> {
        let start = (self.page.saturating_sub(1)) * DESIGNS_PER_PAGE;
        self.filtered()
            .into_iter()
            .skip(start)
            .take(DESIGNS_PER_PAGE)
            .cloned()
            .collect()
    }

    /// Jump to `page`, clamped to the available range.
    pub fn go_to(&mut self, page: usize) {
        self.page = page.clamp(1, self.total_pages().max(1));
    }

    pub fn prev_page(&mut self) {
        self.go_to(self.page.saturating_sub(1));
    }

    pub fn next_page(&mut self) {
        self.go_to(self.page + 1);
    }

    /// Up to `MAX_PAGES_SHOWN` consecutive page numbers around the current
    /// page, shifted left near the end so the window stays full.
    pub fn page_window(&self) -> Vec<usize> {
        let total = self.total_pages();
        if total == 0 {
            return Vec::new();
        }
        let current = self.page.clamp(1, total);
        let half = MAX_PAGES_SHOWN / 2;
        let mut start = current.saturating_sub(half).max(1);
        let end = (start + MAX_PAGES_SHOWN - 1).min(total);
        if end - start + 1 < MAX_PAGES_SHOWN {
            start = (end + 1).saturating_sub(MAX_PAGES_SHOWN).max(1);
        }
        (start..=end).collect()
    }

    pub fn category_name(&self, category_id: i64) -> String {
        self.categories
            .iter()
            .find(|entry| entry.category.id == category_id)
            .map(|entry| entry.category.name.clone())
            .unwrap_or_default()
    }

    /// Display name of the active filter, if any.
    pub fn selected_category_name(&self) -> Option<String> {
        let slug = self.selected_category.as_deref()?;
        self.categories
            .iter()
            .find(|entry| entry.category.slug == slug)
            .map(|entry| entry.category.name.clone())
    }

    pub fn selected_design(&self) -> Option<&CatalogDesign> {
        let id = self.selected?;
        self.designs.iter().find(|entry| entry.design.id == id)
    }

    /// Open the detail dialog for a design; resets any previous vote outcome.
    pub fn open(&mut self, design_id: i64) {
        if self.designs.iter().any(|entry| entry.design.id == design_id) {
            self.selected = Some(design_id);
            self.vote = VoteStatus::Idle;
        }
    }

    pub fn close(&mut self) {
        self.selected = None;
        self.vote = VoteStatus::Idle;
    }

    /// Check whether the open design may be voted for.
    ///
    /// # Errors
    ///
    /// Returns the reason shown in the dialog when voting is refused.
    pub fn can_vote(&self, authenticated: bool) -> Result<i64, String> {
        if !authenticated {
            return Err("You must sign in to vote".to_owned());
        }
        let entry = self.selected_design().ok_or_else(|| "No design selected".to_owned())?;
        if entry.has_voted {
            return Err("You have already voted for this design".to_owned());
        }
        if self.vote == VoteStatus::Voting {
            return Err("A vote is already in progress".to_owned());
        }
        Ok(entry.design.id)
    }

    /// Move to `Voting` if allowed, returning the design id to submit.
    ///
    /// # Errors
    ///
    /// Returns the refusal reason, which is also recorded as `Failed`.
    pub fn begin_vote(&mut self, authenticated: bool) -> Result<i64, String> {
        match self.can_vote(authenticated) {
            Ok(id) => {
                self.vote = VoteStatus::Voting;
                Ok(id)
            }
            Err(message) => {
                self.vote = VoteStatus::Failed(message.clone());
                Err(message)
            }
        }
    }

    /// Record an accepted vote: one more vote, marked as voted.
    pub fn apply_vote_success(&mut self, design_id: i64) {
        if let Some(entry) = self.designs.iter_mut().find(|entry| entry.design.id == design_id) {
            if !entry.has_voted {
                entry.design.votes_count = Some(entry.design.votes() + 1);
                entry.has_voted = true;
            }
        }
        if self.selected == Some(design_id) {
            self.vote = VoteStatus::Voted;
        }
    }

    pub fn apply_vote_failure(&mut self, message: String) {
        self.vote = VoteStatus::Failed(message);
    }

    /// Total designs loaded, shown next to the "all categories" entry.
    pub fn total_designs(&self) -> usize {
        self.designs.len()
    }
}
