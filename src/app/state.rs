//! Application state for the interactive demo.

use crate::search::fuzzy::rank_items;
use crate::widget::SearchBar;

/// Top-level mutable application state.
#[derive(Debug)]
pub struct AppState {
    pub search_bar: SearchBar,
    pub should_quit: bool,
    items: Vec<String>,
    results: Vec<usize>,
    selected: usize,
    query: String,
}

impl AppState {
    pub fn new(search_bar: SearchBar, items: Vec<String>) -> Self {
        let mut state = Self {
            search_bar,
            should_quit: false,
            items,
            results: Vec::new(),
            selected: 0,
            query: String::new(),
        };
        state.recompute_results();
        state
    }

    /// Applies a query reported by the search bar listener.
    pub fn set_query(&mut self, query: String) {
        if self.query == query {
            return;
        }
        self.query = query;
        self.recompute_results();
        self.selected = 0;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Items matching the current query, best match first.
    pub fn result_items(&self) -> impl Iterator<Item = &str> {
        self.results
            .iter()
            .filter_map(|index| self.items.get(*index))
            .map(String::as_str)
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.results.len() {
            self.selected += 1;
        }
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn recompute_results(&mut self) {
        self.results = rank_items(&self.query, &self.items)
            .into_iter()
            .map(|result| result.index)
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::AppState;
    use crate::config::SearchBarConfig;
    use crate::widget::SearchBar;

    fn state() -> AppState {
        AppState::new(
            SearchBar::from_config(&SearchBarConfig::default()),
            vec!["cat".to_owned(), "dog".to_owned(), "catalog".to_owned()],
        )
    }

    #[test]
    fn empty_query_lists_every_item() {
        let state = state();
        assert_eq!(state.result_count(), 3);
    }

    #[test]
    fn query_narrows_results_and_resets_selection() {
        let mut state = state();
        state.move_down();
        state.set_query("cat".to_owned());

        assert_eq!(state.selected(), 0);
        assert!(state.result_items().all(|item| item.contains("cat")));
        assert_eq!(state.result_count(), 2);
    }

    #[test]
    fn selection_stays_within_results() {
        let mut state = state();
        state.set_query("dog".to_owned());
        state.move_down();
        state.move_down();
        assert_eq!(state.selected(), 0);

        state.move_up();
        assert_eq!(state.selected(), 0);
    }
}
