//! Search-as-you-type suggestions: wire format, panel layout and response
//! sequencing.

use serde::{Deserialize, Serialize};

/// Quiet period after the last keystroke before a request goes out.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Path of the suggestions endpoint, relative to the API base.
pub const SUGGESTIONS_PATH: &str = "/search-suggestions/";

/// Text of the disabled entry shown when every group is empty.
pub const NO_RESULTS_LABEL: &str = "No results found";

/// One matching article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSuggestion {
    /// Article title.
    pub title: String,
    /// Absolute path of the article page.
    pub url: String,
}

/// One matching writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriterSuggestion {
    /// Writer's username.
    pub username: String,
    /// Profile page path.
    pub url: String,
}

/// One matching category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySuggestion {
    /// Category display name.
    pub name: String,
    /// Category listing path.
    pub url: String,
}

/// Response of `GET /search-suggestions/?q=`. Any group may be empty or
/// missing from the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionResult {
    /// Matching articles.
    #[serde(default)]
    pub articles: Vec<ArticleSuggestion>,
    /// Matching writers.
    #[serde(default)]
    pub writers: Vec<WriterSuggestion>,
    /// Matching categories.
    #[serde(default)]
    pub categories: Vec<CategorySuggestion>,
}

/// The three result groups, in the order the panel renders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SuggestionGroup {
    /// Articles, labelled by title.
    Articles,
    /// Writers, labelled by username.
    Writers,
    /// Categories, labelled by name.
    Categories,
}

impl SuggestionGroup {
    /// Rendering order.
    pub const ALL: [SuggestionGroup; 3] = [Self::Articles, Self::Writers, Self::Categories];

    /// Header text of the group.
    pub fn label(self) -> &'static str {
        match self {
            Self::Articles => "Articles",
            Self::Writers => "Writers",
            Self::Categories => "Categories",
        }
    }
}

/// One row of the suggestions panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionEntry {
    /// Non-clickable group header.
    Header(SuggestionGroup),
    /// Clickable result.
    Link {
        /// Display text (title, username or name depending on the group).
        label: String,
        /// Target of the link.
        url: String,
    },
    /// Disabled placeholder shown when nothing matched.
    NoResults,
}

impl SuggestionResult {
    /// Whether every group is empty.
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty() && self.writers.is_empty() && self.categories.is_empty()
    }

    /// `(label, url)` pairs of one group.
    pub fn links(&self, group: SuggestionGroup) -> Vec<(&str, &str)> {
        match group {
            SuggestionGroup::Articles => self
                .articles
                .iter()
                .map(|a| (a.title.as_str(), a.url.as_str()))
                .collect(),
            SuggestionGroup::Writers => self
                .writers
                .iter()
                .map(|w| (w.username.as_str(), w.url.as_str()))
                .collect(),
            SuggestionGroup::Categories => self
                .categories
                .iter()
                .map(|c| (c.name.as_str(), c.url.as_str()))
                .collect(),
        }
    }

    /// Rows of the panel: a single [`SuggestionEntry::NoResults`] when empty,
    /// otherwise a header followed by its links for each non-empty group,
    /// articles first, then writers, then categories.
    pub fn entries(&self) -> Vec<SuggestionEntry> {
        if self.is_empty() {
            return vec![SuggestionEntry::NoResults];
        }

        let mut entries = Vec::new();
        for group in SuggestionGroup::ALL {
            let links = self.links(group);
            if links.is_empty() {
                continue;
            }
            entries.push(SuggestionEntry::Header(group));
            entries.extend(links.into_iter().map(|(label, url)| SuggestionEntry::Link {
                label: label.to_string(),
                url: url.to_string(),
            }));
        }
        entries
    }
}

/// Trim raw input; `None` means "hide the panel, send nothing".
pub fn normalize_query(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// What an input event on the search field leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Hide the panel now; no request goes out.
    Hide,
    /// Arm the debounce timer for this trimmed query.
    Schedule(String),
}

/// Decide what an input event does. The caller has already cancelled any
/// pending debounce timer.
///
/// Blank input also invalidates `sequencer`, so a response still in flight
/// cannot reopen the panel. No ticket is issued here: that happens when the
/// timer fires.
pub fn on_input(raw: &str, sequencer: &mut RequestSequencer) -> InputAction {
    match normalize_query(raw) {
        Some(query) => InputAction::Schedule(query),
        None => {
            sequencer.invalidate();
            InputAction::Hide
        },
    }
}

/// Full URL of the suggestions request for an already-normalized query.
pub fn suggestions_url(api_base: &str, query: &str) -> String {
    format!(
        "{}{}?q={}",
        api_base.trim_end_matches('/'),
        SUGGESTIONS_PATH,
        urlencoding::encode(query)
    )
}

/// Sequence number handed to one outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

/// Orders overlapping suggestion requests.
///
/// Every request takes a ticket from [`issue`](Self::issue). A response is
/// rendered only if [`accept`](Self::accept) says so: its ticket must be newer
/// than the last accepted one and newer than the last
/// [`invalidate`](Self::invalidate). A slow response for an earlier query can
/// therefore never overwrite a later one, and nothing reopens the panel after
/// the input was cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSequencer {
    issued: u64,
    floor: u64,
}

impl RequestSequencer {
    /// Fresh sequencer; the first ticket is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticket for a new request.
    pub fn issue(&mut self) -> RequestTicket {
        self.issued += 1;
        RequestTicket(self.issued)
    }

    /// Make every ticket issued so far stale.
    pub fn invalidate(&mut self) {
        self.floor = self.issued;
    }

    /// Decide whether the response for `ticket` may be rendered, and record
    /// it as the newest rendered one if so.
    pub fn accept(&mut self, ticket: RequestTicket) -> bool {
        if ticket.0 > self.floor {
            self.floor = ticket.0;
            true
        } else {
            tracing::debug!(ticket = ticket.0, floor = self.floor, "discarding stale suggestions");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_rejects_blank() {
        assert_eq!(normalize_query("  rust  "), Some("rust".to_string()));
        assert_eq!(normalize_query("   "), None);
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("\t\n"), None);
    }

    #[test]
    fn url_encodes_query() {
        assert_eq!(suggestions_url("", "a&b c"), "/search-suggestions/?q=a%26b%20c");
        assert_eq!(
            suggestions_url("https://inkwave.example/", "rust"),
            "https://inkwave.example/search-suggestions/?q=rust"
        );
    }

    #[test]
    fn missing_groups_default_to_empty() {
        let parsed: SuggestionResult =
            serde_json::from_str(r#"{"writers":[{"username":"ada","url":"/account/profile/ada/"}]}"#)
                .expect("parse");
        assert!(parsed.articles.is_empty());
        assert!(parsed.categories.is_empty());
        assert_eq!(parsed.writers.len(), 1);
    }

    #[test]
    fn empty_result_renders_placeholder_only() {
        assert_eq!(SuggestionResult::default().entries(), vec![SuggestionEntry::NoResults]);
    }

    #[test]
    fn groups_render_in_fixed_order() {
        let result = SuggestionResult {
            articles: vec![],
            writers: vec![WriterSuggestion {
                username: "ada".into(),
                url: "/account/profile/ada/".into(),
            }],
            categories: vec![CategorySuggestion {
                name: "Rust".into(),
                url: "/category/rust/".into(),
            }],
        };

        let entries = result.entries();

        assert_eq!(entries, vec![
            SuggestionEntry::Header(SuggestionGroup::Writers),
            SuggestionEntry::Link {
                label: "ada".into(),
                url: "/account/profile/ada/".into()
            },
            SuggestionEntry::Header(SuggestionGroup::Categories),
            SuggestionEntry::Link {
                label: "Rust".into(),
                url: "/category/rust/".into()
            },
        ]);
    }

    #[test]
    fn sequencer_drops_out_of_order_responses() {
        let mut seq = RequestSequencer::new();
        let first = seq.issue();
        let second = seq.issue();

        assert!(seq.accept(second));
        assert!(!seq.accept(first));
    }

    #[test]
    fn sequencer_drops_everything_after_invalidate() {
        let mut seq = RequestSequencer::new();
        let pending = seq.issue();
        seq.invalidate();
        assert!(!seq.accept(pending));

        let fresh = seq.issue();
        assert!(seq.accept(fresh));
    }

    #[test]
    fn input_with_text_schedules_trimmed_query() {
        let mut seq = RequestSequencer::new();
        let untouched = seq.clone();

        assert_eq!(on_input("  ink wave ", &mut seq), InputAction::Schedule("ink wave".into()));
        assert_eq!(seq, untouched);
    }

    #[test]
    fn blank_input_hides_a_shown_panel_without_issuing() {
        let mut seq = RequestSequencer::new();
        let rendered = seq.issue();
        assert!(seq.accept(rendered));
        let mut control = seq.clone();

        assert_eq!(on_input(" \t ", &mut seq), InputAction::Hide);

        assert_eq!(seq.issue(), control.issue());
    }

    #[test]
    fn blank_input_drops_the_pending_request() {
        let mut seq = RequestSequencer::new();
        let pending = seq.issue();
        let mut control = seq.clone();

        assert_eq!(on_input("", &mut seq), InputAction::Hide);

        assert!(!seq.accept(pending));
        assert_eq!(seq.issue(), control.issue());
    }
}
