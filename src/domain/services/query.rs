use crate::domain::models::filters::Filters;
use crate::domain::models::user::{UserRecord, UserStatus};
use crate::domain::services::format::parse_day;

pub const PAGE_SIZE_OPTIONS: [usize; 5] = [10, 15, 25, 50, 100];
pub const DEFAULT_PAGE_SIZE: usize = 15;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PopoverPos {
    pub top: f64,
    pub left: f64,
}

/// Everything the users table needs beyond the collection itself: the filter
/// panel draft, the applied query, pagination, and which row menu is open.
/// The collection is never mutated here; all reads go through the pure
/// functions below.
#[derive(Debug, Clone)]
pub struct UsersView {
    pub draft: Filters,
    pub applied: Filters,
    pub filters_open: bool,
    pub popover_pos: PopoverPos,
    pub page_size: usize,
    pub page: usize,
    pub open_menu_id: Option<String>,
}

impl Default for UsersView {
    fn default() -> Self {
        Self {
            draft: Filters::default(),
            applied: Filters::default(),
            filters_open: false,
            popover_pos: PopoverPos::default(),
            page_size: DEFAULT_PAGE_SIZE,
            page: 1,
            open_menu_id: None,
        }
    }
}

impl UsersView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits the draft. Changing the active query always lands back on the
    /// first page.
    pub fn apply_filters(&mut self) {
        self.applied = self.draft.clone();
        self.filters_open = false;
        self.page = 1;
    }

    pub fn reset_filters(&mut self) {
        self.draft = Filters::default();
        self.applied = Filters::default();
        self.filters_open = false;
        self.page = 1;
    }

    pub fn toggle_filters(&mut self) {
        self.filters_open = !self.filters_open;
    }

    pub fn set_popover_position(&mut self, top: f64, left: f64) {
        self.popover_pos = PopoverPos { top, left };
    }

    /// Same row toggles its menu closed; a different row takes it over.
    pub fn toggle_row_menu(&mut self, id: &str) {
        if self.open_menu_id.as_deref() == Some(id) {
            self.open_menu_id = None;
        } else {
            self.open_menu_id = Some(id.to_string());
        }
    }

    pub fn close_row_menu(&mut self) {
        self.open_menu_id = None;
    }

    pub fn go_to_page(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    // Does not reset the page; paginate() clamps away any overflow.
    pub fn set_page_size(&mut self, size: usize) {
        if size >= 1 {
            self.page_size = size;
        }
    }
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack
        .to_lowercase()
        .contains(&needle.trim().to_lowercase())
}

// Calendar-day equality, not timestamp equality. A dateJoined value we cannot
// parse passes the filter (fail-open); a filter date we cannot parse matches
// nothing, since the date input only produces well-formed values.
fn same_calendar_day(date_joined: &str, filter_date: &str) -> bool {
    if filter_date.is_empty() {
        return true;
    }
    let Some(joined) = parse_day(date_joined) else {
        return true;
    };
    match parse_day(filter_date) {
        Some(wanted) => joined == wanted,
        None => false,
    }
}

/// Applies the committed filters to an immutable snapshot. Every non-empty
/// field must match (conjunctive): case-insensitive substring for the text
/// fields, exact equality for status, same calendar day for the date.
pub fn filtered_view<'a>(collection: &'a [UserRecord], applied: &Filters) -> Vec<&'a UserRecord> {
    collection
        .iter()
        .filter(|u| {
            if !applied.organization.is_empty() && !contains_ci(&u.organization, &applied.organization) {
                return false;
            }
            if !applied.username.is_empty() && !contains_ci(&u.username, &applied.username) {
                return false;
            }
            if !applied.email.is_empty() && !contains_ci(&u.email, &applied.email) {
                return false;
            }
            if !applied.phone.is_empty() && !contains_ci(&u.phone, &applied.phone) {
                return false;
            }
            if let Some(status) = applied.status {
                if u.status != status {
                    return false;
                }
            }
            same_calendar_day(&u.date_joined, &applied.date)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
    /// Zero-based slice bounds, for the "showing X-Y out of Z" strip.
    pub start_index: usize,
    pub end_index: usize,
}

/// Slices one page out of the filtered view. Out-of-range requests clamp
/// silently into `[1, total_pages]`; there is always at least one (possibly
/// empty) page.
pub fn paginate<T: Clone>(rows: &[T], page_size: usize, requested: usize) -> Page<T> {
    let size = page_size.max(1);
    let total = rows.len();
    let total_pages = (total.div_ceil(size)).max(1);
    let page = requested.clamp(1, total_pages);
    let start = (page - 1) * size;
    let end = (start + size).min(total);

    Page {
        rows: rows.get(start..end).unwrap_or(&[]).to_vec(),
        page,
        total_pages,
        total,
        start_index: start.min(total),
        end_index: end,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Num(usize),
    Ellipsis,
}

/// Bounded page strip: all pages up to seven; beyond that the first page, the
/// last page, and a clamped window around the current page, with ellipsis
/// markers in any gaps.
pub fn page_range(current: usize, total_pages: usize) -> Vec<PageItem> {
    if total_pages <= 7 {
        return (1..=total_pages).map(PageItem::Num).collect();
    }

    let left = current.saturating_sub(1).max(2);
    let right = (current + 1).min(total_pages - 1);

    let mut pages = vec![PageItem::Num(1)];
    if left > 2 {
        pages.push(PageItem::Ellipsis);
    }
    pages.extend((left..=right).map(PageItem::Num));
    if right < total_pages - 1 {
        pages.push(PageItem::Ellipsis);
    }
    pages.push(PageItem::Num(total_pages));
    pages
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    pub active: usize,
    pub with_savings: usize,
    pub with_loans: usize,
}

// Strips currency formatting back to a number. Fragile and locale-specific,
// but the loan figures are demo data; see DESIGN.md.
fn parse_money(value: &str) -> f64 {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

/// Counters for the summary cards, computed over the full (unfiltered)
/// collection.
pub fn summary_counters(collection: &[UserRecord]) -> Summary {
    Summary {
        total: collection.len(),
        active: collection
            .iter()
            .filter(|u| u.status == UserStatus::Active)
            .count(),
        with_savings: collection.iter().filter(|u| u.account_balance > 0.0).count(),
        with_loans: collection
            .iter()
            .filter(|u| parse_money(&u.details.employment.loan_repayment) > 0.0)
            .count(),
    }
}
