//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin, along with the explicit derivation of the filtered contact list and
//! the current page window, form submission, and UI view model generation. It
//! is the single source of truth for all transient UI state.
//!
//! # Architecture
//!
//! `AppState` separates core data (the append-only contact collection) from
//! derived state (filtered contacts, current page window). Every mutating
//! operation re-derives the filtered list through [`AppState::apply_filter`],
//! so there is no implicit reactive graph: the displayed subset is always a
//! pure function of the collection, the query, and the pagination parameters.
//!
//! # Invariants
//!
//! - `filtered_contacts` always equals the contacts whose name or phone
//!   contains the query case-insensitively, in collection order.
//! - `current_page` resets to 1 whenever the filtered list or the
//!   items-per-page setting changes, so the page window never points past the
//!   end of the filtered list.
//!
//! # Example
//!
//! ```rust
//! use zontacts::app::AppState;
//! use zontacts::ui::Theme;
//!
//! let mut state = AppState::new(vec![], 5, Theme::default());
//! state.query.push_str("jo");
//! state.apply_filter();
//! assert!(state.display_contacts().is_empty());
//! ```

use crate::domain::Contact;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ContactCard, EmptyState, FooterInfo, FormPanelInfo, HeaderInfo, PaginationInfo, ResultsInfo,
    SearchBarInfo, UiViewModel,
};

use super::form::ContactForm;
use super::modes::{FormField, InputMode, SearchFocus};

/// Items-per-page presets, cycled in order.
///
/// These mirror the three page sizes the directory offers; the initial value
/// comes from the plugin configuration.
pub const ITEMS_PER_PAGE_PRESETS: [usize; 3] = [1, 5, 10];

/// Central application state container.
///
/// Holds the contact collection, the search query, pagination parameters, the
/// add-contact form, and fetch status. Mutated by the event handler in
/// response to user input and fetch results. View models are computed
/// on-demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The full contact collection, in insertion order.
    ///
    /// Seeded from the bundled fixture, replaced when the startup fetch
    /// resolves, and appended to by form submissions. Never reordered.
    pub contacts: Vec<Contact>,

    /// Contacts matching the current search query, in collection order.
    ///
    /// Recomputed by [`AppState::apply_filter`] after every mutating
    /// operation. The page window is a contiguous slice of this list.
    pub filtered_contacts: Vec<Contact>,

    /// Current search query.
    ///
    /// Accumulated by `Char` events, reduced by `Backspace` events, cleared
    /// when leaving search mode. An empty query yields the full collection.
    pub query: String,

    /// Current page, 1-based.
    ///
    /// Clamped so the page window never points past the end of the filtered
    /// list; resets to 1 whenever the filtered list or items-per-page change.
    pub current_page: usize,

    /// Number of contacts shown per page.
    pub items_per_page: usize,

    /// Current input handling mode.
    ///
    /// Determines keybinding interpretation and which panels are rendered.
    pub input_mode: InputMode,

    /// In-progress add-contact form state.
    pub form: ContactForm,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Whether the startup contact fetch is still in flight.
    pub loading: bool,

    /// Error message from a failed contact fetch, if any.
    ///
    /// Shown next to the results count until a later fetch result clears it.
    pub fetch_error: Option<String>,

    /// Contacts submitted through the form during this session.
    ///
    /// Kept separately so a late-arriving fetch result can replace the seeded
    /// collection without discarding what the user added in the interim.
    user_added: Vec<Contact>,
}

impl AppState {
    /// Creates a new application state from seed contacts.
    ///
    /// The filtered list is derived immediately so the state is renderable
    /// without further calls.
    ///
    /// # Parameters
    ///
    /// * `contacts` - Initial contact collection (typically the bundled fixture)
    /// * `items_per_page` - Initial page size
    /// * `theme` - Color scheme for UI rendering
    #[must_use]
    pub fn new(contacts: Vec<Contact>, items_per_page: usize, theme: Theme) -> Self {
        let mut state = Self {
            contacts,
            filtered_contacts: vec![],
            query: String::new(),
            current_page: 1,
            items_per_page: items_per_page.max(1),
            input_mode: InputMode::Normal,
            form: ContactForm::default(),
            theme,
            loading: false,
            fetch_error: None,
            user_added: vec![],
        };
        state.apply_filter();
        state
    }

    /// Re-derives the filtered contact list from the collection and query.
    ///
    /// Filtering keeps contacts whose name or phone contains the query as a
    /// case-insensitive substring, preserving collection order. If the result
    /// differs from the previous filtered list, the current page resets to 1
    /// so the page window cannot point past the end.
    pub fn apply_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_filter",
            total_contacts = self.contacts.len(),
            query_len = self.query.len()
        )
        .entered();

        let query_lower = self.query.to_lowercase();
        let filtered: Vec<Contact> = if query_lower.is_empty() {
            self.contacts.clone()
        } else {
            self.contacts
                .iter()
                .filter(|contact| contact.matches_query(&query_lower))
                .cloned()
                .collect()
        };

        if filtered != self.filtered_contacts {
            self.filtered_contacts = filtered;
            self.current_page = 1;
        }

        tracing::debug!(
            filtered_count = self.filtered_contacts.len(),
            "search filter applied"
        );
    }

    /// Returns the contacts of the current page window.
    ///
    /// The window is the contiguous slice of the filtered list of at most
    /// `items_per_page` contacts starting at
    /// `(current_page - 1) * items_per_page`. An empty slice is returned when
    /// the start index lies past the end of the filtered list.
    #[must_use]
    pub fn display_contacts(&self) -> &[Contact] {
        let start = (self.current_page - 1) * self.items_per_page;
        if start >= self.filtered_contacts.len() {
            return &[];
        }
        let end = (start + self.items_per_page).min(self.filtered_contacts.len());
        &self.filtered_contacts[start..end]
    }

    /// Returns the number of pages for the current filtered list, at least 1.
    #[must_use]
    pub fn page_count(&self) -> usize {
        let len = self.filtered_contacts.len();
        ((len + self.items_per_page - 1) / self.items_per_page).max(1)
    }

    /// Advances to the next page.
    ///
    /// A no-op once `current_page * items_per_page` reaches the filtered list
    /// length, so the last page cannot be stepped past.
    pub fn next_page(&mut self) {
        if self.current_page * self.items_per_page >= self.filtered_contacts.len() {
            return;
        }
        self.current_page += 1;
    }

    /// Steps back to the previous page, never going below page 1.
    pub fn prev_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    /// Jumps to a specific page, clamped to the valid page range.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.page_count());
    }

    /// Sets the page size and resets to the first page.
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.items_per_page = items_per_page.max(1);
        self.current_page = 1;
    }

    /// Cycles the page size through the presets, resetting to the first page.
    ///
    /// A configured page size outside the presets cycles to the first preset.
    pub fn cycle_items_per_page(&mut self) {
        let next = ITEMS_PER_PAGE_PRESETS
            .iter()
            .position(|&preset| preset == self.items_per_page)
            .map_or(ITEMS_PER_PAGE_PRESETS[0], |idx| {
                ITEMS_PER_PAGE_PRESETS[(idx + 1) % ITEMS_PER_PAGE_PRESETS.len()]
            });

        tracing::debug!(items_per_page = next, "page size changed");
        self.set_items_per_page(next);
    }

    /// Attempts to submit the add-contact form.
    ///
    /// Validates the form buffers; on any failure the per-field errors are
    /// stored for inline display and the collection is left untouched. On
    /// success, a contact with a fresh unique id is appended, the form is
    /// cleared, the avatar selection resets to the default, and the filtered
    /// list is re-derived.
    ///
    /// # Returns
    ///
    /// `true` if a contact was appended, `false` if validation failed.
    pub fn submit_contact(&mut self) -> bool {
        let errors = self.form.validate();
        if !errors.is_empty() {
            tracing::debug!(
                name_error = ?errors.name,
                phone_error = ?errors.phone,
                email_error = ?errors.email,
                "form submission rejected"
            );
            self.form.errors = errors;
            return false;
        }

        let contact = Contact {
            id: self.allocate_id(),
            name: self.form.name.trim().to_string(),
            phone: self.form.phone.trim().to_string(),
            email: self.form.email.trim().to_string(),
            avatar: self.form.avatar,
        };

        tracing::debug!(
            contact_id = contact.id,
            contact_name = %contact.name,
            "contact submitted"
        );

        self.contacts.push(contact.clone());
        self.user_added.push(contact);
        self.form.clear();
        self.apply_filter();
        true
    }

    /// Allocates a fresh contact id from the current timestamp.
    ///
    /// Ids are millisecond timestamps bumped past the current maximum, so two
    /// submissions within the same millisecond still get distinct ids.
    fn allocate_id(&self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        self.contacts
            .iter()
            .map(|contact| contact.id)
            .max()
            .map_or(now, |max_id| now.max(max_id + 1))
    }

    /// Marks the startup fetch as in flight.
    pub fn fetch_started(&mut self) {
        self.loading = true;
        self.fetch_error = None;
    }

    /// Applies a resolved fetch result to the collection.
    ///
    /// The fetched contacts replace the seeded collection. Contacts the user
    /// submitted before the result arrived are re-appended (skipping id
    /// collisions with the fetched records), so a late-arriving fetch does not
    /// discard user input.
    pub fn apply_fetched(&mut self, fetched: Vec<Contact>) {
        let _span = tracing::debug_span!(
            "apply_fetched",
            fetched_count = fetched.len(),
            user_added_count = self.user_added.len()
        )
        .entered();

        let mut contacts = fetched;
        for added in &self.user_added {
            if !contacts.iter().any(|contact| contact.id == added.id) {
                contacts.push(added.clone());
            }
        }

        self.contacts = contacts;
        self.loading = false;
        self.fetch_error = None;
        self.apply_filter();

        tracing::debug!(total_contacts = self.contacts.len(), "fetch result applied");
    }

    /// Records a failed fetch for display next to the results count.
    pub fn fetch_failed(&mut self, error: String) {
        tracing::debug!(error = %error, "contact fetch failed");
        self.loading = false;
        self.fetch_error = Some(error);
    }

    /// Computes a renderable UI view model from the current state.
    ///
    /// Transforms application state into a structured representation for the
    /// component renderers: contact cards for the current page window (with
    /// query match highlights), pagination info, the search bar and form panel
    /// when their modes are active, and an empty state message when the page
    /// window has nothing to show.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UiViewModel {
        let cards: Vec<ContactCard> = self
            .display_contacts()
            .iter()
            .map(|contact| self.compute_card(contact))
            .collect();

        let empty_state = if cards.is_empty() && !matches!(self.input_mode, InputMode::Form(_)) {
            Some(self.compute_empty_state())
        } else {
            None
        };

        UiViewModel {
            header: self.compute_header(),
            results: self.compute_results(),
            cards,
            pagination: self.compute_pagination(),
            search_bar: self.compute_search_bar(),
            form_panel: self.compute_form_panel(),
            empty_state,
            footer: self.compute_footer(),
        }
    }

    /// Computes the card for one contact, adding query match highlights.
    ///
    /// The card itself is the pure contact-to-card mapping; the highlight
    /// ranges depend on the active query and are only attached while the
    /// search query is non-empty.
    fn compute_card(&self, contact: &Contact) -> ContactCard {
        let mut card = ContactCard::from_contact(contact);
        if matches!(self.input_mode, InputMode::Search(_)) && !self.query.is_empty() {
            card.name_highlights = match_ranges(&contact.name, &self.query);
            card.phone_highlights = match_ranges(&contact.phone, &self.query);
        }
        card
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(" Contacts ({}) ", self.filtered_contacts.len()),
        }
    }

    /// Computes the results line shown under the header.
    ///
    /// Mirrors the directory's results counter: the number of contacts on the
    /// current page, with loading and fetch-error suffixes when applicable.
    fn compute_results(&self) -> ResultsInfo {
        let shown = self.display_contacts().len();
        let noun = if shown == 1 { "result" } else { "results" };
        let mut line = format!("Showing {shown} {noun}");
        if self.loading {
            line.push_str(" (loading...)");
        }
        if let Some(error) = &self.fetch_error {
            line.push_str(&format!(" (error: {error})"));
        }
        ResultsInfo {
            line,
            is_error: self.fetch_error.is_some(),
        }
    }

    fn compute_pagination(&self) -> PaginationInfo {
        PaginationInfo {
            current_page: self.current_page,
            page_count: self.page_count(),
            items_per_page: self.items_per_page,
            has_prev: self.current_page > 1,
            has_next: self.current_page * self.items_per_page < self.filtered_contacts.len(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        if matches!(self.input_mode, InputMode::Search(_)) {
            Some(SearchBarInfo {
                query: self.query.clone(),
            })
        } else {
            None
        }
    }

    fn compute_form_panel(&self) -> Option<FormPanelInfo> {
        let InputMode::Form(focused) = self.input_mode else {
            return None;
        };

        Some(FormPanelInfo {
            name: self.form.name.clone(),
            phone: self.form.phone.clone(),
            email: self.form.email.clone(),
            avatar_glyph: self.form.avatar.glyph().to_string(),
            avatar_label: self.form.avatar.label().to_string(),
            focused,
            name_error: self.form.errors.name.map(|e| e.to_string()),
            phone_error: self.form.errors.phone.map(|e| e.to_string()),
            email_error: self.form.errors.email.map(|e| e.to_string()),
        })
    }

    fn compute_empty_state(&self) -> EmptyState {
        if self.contacts.is_empty() {
            EmptyState {
                message: "No contacts yet".to_string(),
                subtitle: "Press 'a' to add the first contact".to_string(),
            }
        } else {
            EmptyState {
                message: "No matching contacts".to_string(),
                subtitle: "Press ESC to clear the search".to_string(),
            }
        }
    }

    /// Computes footer keybinding hints for the current input mode.
    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                "ESC: exit search  Enter: browse results  Type to filter".to_string()
            }
            InputMode::Search(SearchFocus::Navigating) => {
                "ESC: exit search  /: edit query  n/p: page".to_string()
            }
            InputMode::Form(_) => {
                "Tab/Shift+Tab: field  Space: cycle avatar  Enter: submit  ESC: back".to_string()
            }
            InputMode::Normal => {
                "n/p: page  i: items per page  /: search  a: add contact  q: quit".to_string()
            }
        };

        FooterInfo { keybindings }
    }
}

/// Finds non-overlapping case-insensitive occurrences of `query` in `text`.
///
/// Returns `(start, end)` ranges in character indices (exclusive end), the
/// unit the highlight renderer works in. Matching compares characters
/// lowercase-to-lowercase, so it agrees with the substring filter.
fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    if query.is_empty() {
        return vec![];
    }

    let text_chars: Vec<char> = text.chars().collect();
    let query_chars: Vec<char> = query.chars().collect();
    let mut ranges = Vec::new();

    let mut idx = 0;
    while idx + query_chars.len() <= text_chars.len() {
        let window = &text_chars[idx..idx + query_chars.len()];
        let matched = window
            .iter()
            .zip(&query_chars)
            .all(|(a, b)| a.to_lowercase().eq(b.to_lowercase()));

        if matched {
            ranges.push((idx, idx + query_chars.len()));
            idx += query_chars.len();
        } else {
            idx += 1;
        }
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AvatarCode;

    fn contact(id: i64, name: &str, phone: &str) -> Contact {
        Contact {
            id,
            name: name.to_string(),
            phone: phone.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            avatar: AvatarCode::Default,
        }
    }

    fn seed() -> Vec<Contact> {
        vec![
            contact(1, "Ada Lovelace", "555-0001"),
            contact(2, "Grace Hopper", "555-0002"),
            contact(3, "Alan Turing", "555-0003"),
            contact(4, "Edsger Dijkstra", "555-0004"),
            contact(5, "Barbara Liskov", "555-0005"),
            contact(6, "Donald Knuth", "555-0006"),
            contact(7, "Ada Yonath", "555-0007"),
        ]
    }

    fn state_with(items_per_page: usize) -> AppState {
        AppState::new(seed(), items_per_page, Theme::default())
    }

    fn fill_valid_form(state: &mut AppState) {
        state.form.name = "Jo Smith".to_string();
        state.form.phone = "555-1234".to_string();
        state.form.email = "jo@x.com".to_string();
    }

    #[test]
    fn empty_query_yields_full_collection() {
        let state = state_with(5);
        assert_eq!(state.filtered_contacts, state.contacts);
    }

    #[test]
    fn filter_matches_name_or_phone_case_insensitively() {
        let mut state = state_with(5);

        state.query = "ADA".to_string();
        state.apply_filter();
        let names: Vec<&str> = state
            .filtered_contacts
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Ada Lovelace", "Ada Yonath"]);

        state.query = "555-0003".to_string();
        state.apply_filter();
        assert_eq!(state.filtered_contacts.len(), 1);
        assert_eq!(state.filtered_contacts[0].name, "Alan Turing");
    }

    #[test]
    fn filter_preserves_collection_order() {
        let mut state = state_with(5);
        state.query = "555".to_string();
        state.apply_filter();
        let ids: Vec<i64> = state.filtered_contacts.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn display_window_length_is_clamped() {
        let mut state = state_with(5);
        assert_eq!(state.display_contacts().len(), 5);

        state.next_page();
        // 7 contacts, page 2 of size 5 holds the remaining 2.
        assert_eq!(state.display_contacts().len(), 2);
        assert_eq!(state.display_contacts()[0].id, 6);
    }

    #[test]
    fn display_window_is_empty_past_the_end() {
        let mut state = state_with(5);
        state.current_page = 4;
        assert!(state.display_contacts().is_empty());
    }

    #[test]
    fn next_page_at_last_page_is_a_noop() {
        let mut state = state_with(5);
        state.next_page();
        assert_eq!(state.current_page, 2);
        state.next_page();
        assert_eq!(state.current_page, 2);
    }

    #[test]
    fn prev_page_at_first_page_is_a_noop() {
        let mut state = state_with(5);
        state.prev_page();
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn changing_items_per_page_resets_to_first_page() {
        let mut state = state_with(1);
        state.next_page();
        state.next_page();
        assert_eq!(state.current_page, 3);

        state.set_items_per_page(10);
        assert_eq!(state.current_page, 1);
        assert_eq!(state.display_contacts().len(), 7);
    }

    #[test]
    fn cycling_items_per_page_walks_the_presets() {
        let mut state = state_with(1);
        state.cycle_items_per_page();
        assert_eq!(state.items_per_page, 5);
        state.cycle_items_per_page();
        assert_eq!(state.items_per_page, 10);
        state.cycle_items_per_page();
        assert_eq!(state.items_per_page, 1);
    }

    #[test]
    fn changing_query_resets_to_first_page() {
        let mut state = state_with(1);
        state.next_page();
        assert_eq!(state.current_page, 2);

        state.query = "ada".to_string();
        state.apply_filter();
        assert_eq!(state.current_page, 1);
    }

    #[test]
    fn too_short_name_blocks_submission() {
        let mut state = state_with(5);
        let before = state.contacts.clone();

        fill_valid_form(&mut state);
        state.form.name = "A".to_string();

        assert!(!state.submit_contact());
        assert_eq!(state.contacts, before);
        assert!(state.form.errors.name.is_some());
        // Rejected submission keeps the entered values for correction.
        assert_eq!(state.form.phone, "555-1234");
    }

    #[test]
    fn valid_submission_appends_one_contact_and_clears_form() {
        let mut state = state_with(5);
        let before_len = state.contacts.len();

        fill_valid_form(&mut state);
        state.form.avatar = AvatarCode::Female;

        assert!(state.submit_contact());
        assert_eq!(state.contacts.len(), before_len + 1);

        let added = state.contacts.last().unwrap();
        assert_eq!(added.name, "Jo Smith");
        assert_eq!(added.avatar, AvatarCode::Female);
        assert!(state.contacts[..before_len].iter().all(|c| c.id != added.id));

        assert!(state.form.name.is_empty());
        assert!(state.form.errors.is_empty());
        assert_eq!(state.form.avatar, AvatarCode::Default);
    }

    #[test]
    fn back_to_back_submissions_get_distinct_ids() {
        let mut state = state_with(5);

        fill_valid_form(&mut state);
        state.submit_contact();
        fill_valid_form(&mut state);
        state.submit_contact();

        let len = state.contacts.len();
        let first = state.contacts[len - 2].id;
        let second = state.contacts[len - 1].id;
        assert_ne!(first, second);
    }

    #[test]
    fn fetch_result_replaces_seed_but_keeps_user_additions() {
        let mut state = state_with(5);

        fill_valid_form(&mut state);
        state.fetch_started();
        assert!(state.loading);
        state.submit_contact();
        let added_id = state.contacts.last().unwrap().id;

        let fetched = vec![contact(100, "Remote One", "555-9001")];
        state.apply_fetched(fetched);

        assert!(!state.loading);
        assert_eq!(state.contacts.len(), 2);
        assert_eq!(state.contacts[0].id, 100);
        assert_eq!(state.contacts[1].id, added_id);
        assert_eq!(state.filtered_contacts, state.contacts);
    }

    #[test]
    fn fetch_failure_sets_visible_error() {
        let mut state = state_with(5);
        state.fetch_started();
        state.fetch_failed("status 500".to_string());

        assert!(!state.loading);
        let results = state.compute_viewmodel().results;
        assert!(results.is_error);
        assert!(results.line.contains("error: status 500"));
    }

    #[test]
    fn viewmodel_cards_follow_the_page_window() {
        let mut state = state_with(5);
        state.next_page();

        let vm = state.compute_viewmodel();
        assert_eq!(vm.cards.len(), 2);
        assert_eq!(vm.cards[0].name, "Donald Knuth");
        assert_eq!(vm.pagination.current_page, 2);
        assert!(vm.pagination.has_prev);
        assert!(!vm.pagination.has_next);
    }

    #[test]
    fn viewmodel_reports_empty_state_for_unmatched_query() {
        let mut state = state_with(5);
        state.input_mode = InputMode::Search(SearchFocus::Typing);
        state.query = "zzz".to_string();
        state.apply_filter();

        let vm = state.compute_viewmodel();
        assert!(vm.cards.is_empty());
        let empty = vm.empty_state.expect("empty state expected");
        assert_eq!(empty.message, "No matching contacts");
        assert!(vm.search_bar.is_some());
    }

    #[test]
    fn match_ranges_finds_case_insensitive_occurrences() {
        assert_eq!(match_ranges("Ada Lovelace", "ada"), vec![(0, 3)]);
        assert_eq!(match_ranges("ababab", "ab"), vec![(0, 2), (2, 4), (4, 6)]);
        assert!(match_ranges("Ada", "xyz").is_empty());
        assert!(match_ranges("Ada", "").is_empty());
    }
}
