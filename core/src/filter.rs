//! Search text and tag filter narrowing the visible link set.

/// Current filter inputs. An empty string means "no filter" for either field.
///
/// Setters report whether the value actually changed; only a change should
/// invalidate the fetched view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    search: String,
    selected_type: String,
}

impl FilterState {
    pub fn new(search: impl Into<String>, selected_type: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            selected_type: selected_type.into(),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn selected_type(&self) -> &str {
        &self.selected_type
    }

    pub fn set_search(&mut self, search: impl Into<String>) -> bool {
        replace(&mut self.search, search.into())
    }

    /// Selecting the type that is already selected keeps it selected.
    /// Use `clear_type` to drop the tag filter.
    pub fn select_type(&mut self, selected_type: impl Into<String>) -> bool {
        replace(&mut self.selected_type, selected_type.into())
    }

    pub fn clear_type(&mut self) -> bool {
        replace(&mut self.selected_type, String::new())
    }

    /// Non-empty fields as `(name, value)` query pairs, `type` first.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::with_capacity(2);
        if !self.selected_type.is_empty() {
            pairs.push(("type", self.selected_type.as_str()));
        }
        if !self.search.is_empty() {
            pairs.push(("search", self.search.as_str()));
        }
        pairs
    }
}

fn replace(slot: &mut String, value: String) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
