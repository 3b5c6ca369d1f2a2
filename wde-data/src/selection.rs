use std::collections::BTreeSet;

use crate::year_index::CountryEntry;

/// The single authoritative selection: which country codes are highlighted
/// across all views, and which year position is active. Mutated only
/// through the transition methods below; renderers read a snapshot per
/// render pass and never write back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: BTreeSet<String>,
    year_pos: usize,
}

impl SelectionState {
    /// Start at year position 0 with a default code set.
    pub fn new<I, S>(default_codes: I) -> SelectionState
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut state = SelectionState::default();
        state.set_selection(default_codes);
        state
    }

    pub fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }

    pub fn is_selected(&self, code: &str) -> bool {
        self.selected.contains(code)
    }

    /// Replace the selected set wholesale. Unknown codes are kept
    /// deliberately (they simply never match a renderer); blank codes are
    /// dropped.
    pub fn set_selection<I, S>(&mut self, codes: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.selected = codes
            .into_iter()
            .map(|c| c.as_ref().trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
    }

    /// Symmetric difference with a singleton: remove the code if selected,
    /// add it otherwise. Blank codes are ignored.
    pub fn toggle(&mut self, code: &str) {
        let code = code.trim();
        if code.is_empty() {
            return;
        }
        if !self.selected.remove(code) {
            self.selected.insert(code.to_string());
        }
    }

    pub fn clear_all(&mut self) {
        self.selected.clear();
    }

    /// Select every country in the directory except world-level aggregates.
    pub fn select_all<'a, I>(&mut self, directory: I)
    where
        I: IntoIterator<Item = &'a CountryEntry>,
    {
        self.selected = directory
            .into_iter()
            .filter(|entry| !entry.entity.to_lowercase().contains("world"))
            .map(|entry| entry.code.clone())
            .collect();
    }

    pub fn year_pos(&self) -> usize {
        self.year_pos
    }

    /// Set the active year position, clamped into `[0, year_count - 1]`.
    pub fn set_year_position(&mut self, pos: usize, year_count: usize) {
        self.year_pos = if year_count == 0 {
            0
        } else {
            pos.min(year_count - 1)
        };
    }

    /// One playback tick: advance the year position, wrapping to the first
    /// year after the last.
    pub fn advance_year_position(&mut self, year_count: usize) {
        if year_count == 0 {
            return;
        }
        self.year_pos = (self.year_pos + 1) % year_count;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn entry(code: &str, entity: &str) -> CountryEntry {
        CountryEntry {
            code: code.to_string(),
            entity: entity.to_string(),
        }
    }

    #[test]
    fn test_double_toggle_is_identity() {
        let mut state = SelectionState::new(["USA", "CHN"]);
        let before = state.selected().clone();
        state.toggle("IND");
        state.toggle("IND");
        assert_eq!(state.selected(), &before);

        state.toggle("USA");
        state.toggle("USA");
        assert_eq!(state.selected(), &before);
    }

    #[test]
    fn test_toggle_ignores_blank_codes() {
        let mut state = SelectionState::default();
        state.toggle("  ");
        state.toggle("");
        assert!(state.selected().is_empty());
        state.toggle(" BRA ");
        assert!(state.is_selected("BRA"));
    }

    #[test]
    fn test_set_selection_is_permissive() {
        let mut state = SelectionState::default();
        // A code no dataset has seen yet is allowed; it just never matches.
        state.set_selection(["ZZZ", "", "USA"]);
        assert_eq!(state.selected().len(), 2);
        assert!(state.is_selected("ZZZ"));
    }

    #[test]
    fn test_year_position_clamps() {
        let mut state = SelectionState::default();
        state.set_year_position(42, 5);
        assert_eq!(state.year_pos(), 4);
        state.set_year_position(2, 5);
        assert_eq!(state.year_pos(), 2);
        state.set_year_position(3, 0);
        assert_eq!(state.year_pos(), 0);
    }

    #[test]
    fn test_advance_wraps_around() {
        let mut state = SelectionState::default();
        state.set_year_position(2, 3);
        state.advance_year_position(3);
        assert_eq!(state.year_pos(), 0);
        state.advance_year_position(3);
        assert_eq!(state.year_pos(), 1);
        state.advance_year_position(0);
        assert_eq!(state.year_pos(), 1);
    }

    #[test]
    fn test_select_all_excludes_world_aggregates() {
        let directory = vec![
            entry("CHN", "China"),
            entry("OWID_WRL", "World"),
            entry("USA", "United States"),
            entry("OWID_WXO", "World excluding China"),
        ];
        let mut state = SelectionState::default();
        state.select_all(directory.iter());
        assert_eq!(state.selected().len(), 2);
        assert!(state.is_selected("CHN"));
        assert!(state.is_selected("USA"));
    }

    #[test]
    fn test_clear_all() {
        let mut state = SelectionState::new(["USA", "CHN", "IND"]);
        state.clear_all();
        assert!(state.selected().is_empty());
    }
}
