use types::UserRecord;

/// Columns participating in sort and the global filter. The avatar and
/// action columns carry no text and are excluded from both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Username,
    Email,
    Role,
    Mobile,
}

impl Column {
    pub const ALL: [Column; 4] = [Column::Username, Column::Email, Column::Role, Column::Mobile];

    pub fn label(self) -> &'static str {
        match self {
            Column::Username => "Username",
            Column::Email => "Email",
            Column::Role => "Role",
            Column::Mobile => "Mobile",
        }
    }

    fn cell(self, row: &UserRecord) -> &str {
        match self {
            Column::Username => &row.username,
            Column::Email => &row.email,
            Column::Role => row.role.as_str(),
            Column::Mobile => &row.mobile_no,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    Limited(usize),
    /// One page holding the entire filtered collection.
    All,
}

impl PageSize {
    pub const CHOICES: [usize; 5] = [5, 10, 20, 30, 50];

    fn rows_per_page(self, total: usize) -> usize {
        match self {
            PageSize::Limited(n) => n.max(1),
            PageSize::All => total.max(1),
        }
    }
}

/// Client-side mechanics for the user directory table: global filter,
/// single-column sort, pagination. The fetched collection is never mutated;
/// every view of it is recomputed on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    rows: Vec<UserRecord>,
    filter: String,
    sort: Option<(Column, SortDir)>,
    page_size: PageSize,
    page: usize,
}

impl TableState {
    pub fn new(rows: Vec<UserRecord>) -> Self {
        Self {
            rows,
            filter: String::new(),
            sort: None,
            page_size: PageSize::Limited(10),
            page: 0,
        }
    }

    /// Replace the backing collection after a re-fetch, keeping the page
    /// index in bounds.
    pub fn set_rows(&mut self, rows: Vec<UserRecord>) {
        self.rows = rows;
        self.page = self.page.min(self.page_count() - 1);
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Recomputed on every keystroke; resets to the first page.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.page = 0;
    }

    pub fn sort(&self) -> Option<(Column, SortDir)> {
        self.sort
    }

    /// unsorted -> ascending -> descending -> unsorted. Switching to a
    /// different column starts a fresh ascending sort.
    pub fn toggle_sort(&mut self, column: Column) {
        self.sort = match self.sort {
            Some((current, SortDir::Asc)) if current == column => Some((column, SortDir::Desc)),
            Some((current, SortDir::Desc)) if current == column => None,
            _ => Some((column, SortDir::Asc)),
        };
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Value for the page-size select control.
    pub fn page_size_value(&self) -> String {
        match self.page_size {
            PageSize::Limited(n) => n.to_string(),
            PageSize::All => "all".into(),
        }
    }

    pub fn set_page_size(&mut self, size: PageSize) {
        self.page_size = size;
        self.page = 0;
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn filtered_len(&self) -> usize {
        self.visible().len()
    }

    pub fn page_count(&self) -> usize {
        let total = self.filtered_len();
        if total == 0 {
            1
        } else {
            total.div_ceil(self.page_size.rows_per_page(total))
        }
    }

    pub fn can_prev(&self) -> bool {
        self.page > 0
    }

    pub fn can_next(&self) -> bool {
        self.page + 1 < self.page_count()
    }

    pub fn prev_page(&mut self) {
        if self.can_prev() {
            self.page -= 1;
        }
    }

    pub fn next_page(&mut self) {
        if self.can_next() {
            self.page += 1;
        }
    }

    /// The rows of the current page, filtered and sorted.
    pub fn current_rows(&self) -> Vec<UserRecord> {
        let visible = self.visible();
        let per_page = self.page_size.rows_per_page(visible.len());
        visible
            .into_iter()
            .skip(self.page * per_page)
            .take(per_page)
            .cloned()
            .collect()
    }

    /// "1–10 of 47" summary for the pagination bar.
    pub fn range_summary(&self) -> String {
        let total = self.filtered_len();
        if total == 0 {
            return "0 of 0".to_string();
        }
        let per_page = self.page_size.rows_per_page(total);
        let from = self.page * per_page + 1;
        let to = ((self.page + 1) * per_page).min(total);
        format!("{from}–{to} of {total}")
    }

    fn visible(&self) -> Vec<&UserRecord> {
        let needle = self.filter.to_lowercase();
        let mut rows: Vec<&UserRecord> = self
            .rows
            .iter()
            .filter(|row| Self::matches(row, &needle))
            .collect();
        if let Some((column, direction)) = self.sort {
            rows.sort_by(|a, b| {
                let ordering = column.cell(a).to_lowercase().cmp(&column.cell(b).to_lowercase());
                match direction {
                    SortDir::Asc => ordering,
                    SortDir::Desc => ordering.reverse(),
                }
            });
        }
        rows
    }

    fn matches(row: &UserRecord, needle: &str) -> bool {
        needle.is_empty()
            || Column::ALL
                .iter()
                .any(|column| column.cell(row).to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::Timestamp;
    use types::Role;

    fn user(username: &str, role: Role) -> UserRecord {
        UserRecord {
            id: format!("id-{username}"),
            username: username.to_string(),
            email: format!("{username}@example.com"),
            role,
            mobile_no: format!("0123456789-{username}"),
            desc: None,
            profile_picture: None,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
            saved_courses: vec![],
            saved_posts: vec![],
        }
    }

    fn named(names: &[&str]) -> TableState {
        TableState::new(names.iter().map(|n| user(n, Role::Student)).collect())
    }

    fn numbered(count: usize) -> TableState {
        let roles = [Role::Admin, Role::Student, Role::Staff];
        TableState::new(
            (0..count)
                .map(|n| user(&format!("user{n:02}"), roles[n % roles.len()]))
                .collect(),
        )
    }

    fn usernames(state: &TableState) -> Vec<String> {
        state
            .current_rows()
            .into_iter()
            .map(|u| u.username)
            .collect()
    }

    #[test]
    fn full_sort_cycle_restores_original_order() {
        let mut state = named(&["mallory", "alice", "zed", "bob"]);
        state.set_page_size(PageSize::All);
        let original = usernames(&state);

        state.toggle_sort(Column::Username);
        assert_eq!(usernames(&state), ["alice", "bob", "mallory", "zed"]);

        state.toggle_sort(Column::Username);
        assert_eq!(usernames(&state), ["zed", "mallory", "bob", "alice"]);

        state.toggle_sort(Column::Username);
        assert_eq!(state.sort(), None);
        assert_eq!(usernames(&state), original);
    }

    #[test]
    fn switching_column_starts_ascending() {
        let mut state = numbered(5);
        state.toggle_sort(Column::Username);
        state.toggle_sort(Column::Username);
        assert_eq!(state.sort(), Some((Column::Username, SortDir::Desc)));

        state.toggle_sort(Column::Email);
        assert_eq!(state.sort(), Some((Column::Email, SortDir::Asc)));
    }

    #[test]
    fn sort_is_case_insensitive() {
        let mut state = named(&["Zed", "alice", "Bob"]);
        state.toggle_sort(Column::Username);
        assert_eq!(usernames(&state), ["alice", "Bob", "Zed"]);
    }

    #[test]
    fn filter_retains_only_matching_rows() {
        let mut state = numbered(30);
        let total = state.filtered_len();
        state.set_filter("ADMIN");
        state.set_page_size(PageSize::All);

        assert!(state.filtered_len() <= total);
        assert_eq!(state.filtered_len(), 10);
        for row in state.current_rows() {
            assert!(
                Column::ALL
                    .iter()
                    .any(|c| c.cell(&row).to_lowercase().contains("admin"))
            );
        }
    }

    #[test]
    fn filter_matches_across_visible_columns() {
        let mut state = named(&["alice", "bob"]);
        state.set_filter("bob@example");
        assert_eq!(state.filtered_len(), 1);
        state.set_filter("no such thing");
        assert_eq!(state.filtered_len(), 0);
    }

    #[test]
    fn page_count_is_ceiling_of_rows_over_size() {
        let state = numbered(47);
        assert_eq!(state.page_count(), 5);
        assert_eq!(numbered(50).page_count(), 5);
        assert_eq!(numbered(51).page_count(), 6);
    }

    #[test]
    fn last_page_holds_the_remainder() {
        let mut state = numbered(47);
        for _ in 0..4 {
            state.next_page();
        }
        assert_eq!(state.page(), 4);
        assert_eq!(state.current_rows().len(), 7);
        assert!(!state.can_next());
        assert!(state.can_prev());

        // next is a no-op at the last page
        state.next_page();
        assert_eq!(state.page(), 4);
    }

    #[test]
    fn first_page_cannot_go_back() {
        let mut state = numbered(47);
        assert!(!state.can_prev());
        state.prev_page();
        assert_eq!(state.page(), 0);
    }

    #[test]
    fn all_yields_exactly_one_page_with_every_row() {
        let mut state = numbered(47);
        state.set_page_size(PageSize::All);
        assert_eq!(state.page_count(), 1);
        assert_eq!(state.current_rows().len(), 47);
        assert!(!state.can_next());
    }

    #[test]
    fn filter_and_page_size_reset_the_page_index() {
        let mut state = numbered(47);
        state.next_page();
        assert_eq!(state.page(), 1);
        state.set_filter("user");
        assert_eq!(state.page(), 0);

        state.next_page();
        state.set_page_size(PageSize::Limited(20));
        assert_eq!(state.page(), 0);
    }

    #[test]
    fn refetch_clamps_the_page_index() {
        let mut state = numbered(47);
        for _ in 0..4 {
            state.next_page();
        }
        state.set_rows((0..5).map(|n| user(&format!("u{n}"), Role::Student)).collect());
        assert_eq!(state.page(), 0);
    }

    #[test]
    fn range_summary_tracks_the_current_page() {
        let mut state = numbered(47);
        assert_eq!(state.range_summary(), "1–10 of 47");
        for _ in 0..4 {
            state.next_page();
        }
        assert_eq!(state.range_summary(), "41–47 of 47");

        state.set_filter("no match");
        assert_eq!(state.range_summary(), "0 of 0");
    }

    #[test]
    fn empty_collection_is_a_single_empty_page() {
        let state = TableState::new(Vec::new());
        assert_eq!(state.page_count(), 1);
        assert!(state.current_rows().is_empty());
        assert!(!state.can_next());
        assert!(!state.can_prev());
    }
}
