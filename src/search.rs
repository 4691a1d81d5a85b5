// SPDX-License-Identifier: MPL-2.0
//! In-page search over the rendered section text.
//!
//! Queries are lowercased and trimmed; anything shorter than
//! [`MIN_QUERY_CHARS`] closes the result list. Otherwise every searchable
//! section whose text (in the active language) contains the query is listed
//! under its localized title.

use crate::catalog::SectionId;
use crate::i18n::{Language, TextKey};

pub const MIN_QUERY_CHARS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit {
    pub section: SectionId,
    pub title: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchResults {
    #[default]
    Closed,
    Hits(Vec<SearchHit>),
    /// The query matched nothing; carries the localized notice.
    NoResults(&'static str),
}

impl SearchResults {
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, SearchResults::Closed)
    }
}

/// Lowercases and trims a raw query.
#[must_use]
pub fn normalize(query: &str) -> String {
    query.to_lowercase().trim().to_string()
}

/// Full text of `section` as rendered in `language`, lowercased.
fn section_text(section: SectionId, language: Language) -> String {
    section
        .text_keys()
        .into_iter()
        .map(|key| language.text(key))
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}

/// Runs `query` against the searchable sections.
#[must_use]
pub fn search(query: &str, language: Language) -> SearchResults {
    let query = normalize(query);
    if query.chars().count() < MIN_QUERY_CHARS {
        return SearchResults::Closed;
    }

    let hits: Vec<SearchHit> = SectionId::SEARCHABLE
        .into_iter()
        .filter(|section| section_text(*section, language).contains(&query))
        .map(|section| SearchHit {
            section,
            title: language.text(section.search_title_key()),
        })
        .collect();

    if hits.is_empty() {
        SearchResults::NoResults(language.text(TextKey::SearchNoResults))
    } else {
        SearchResults::Hits(hits)
    }
}

/// Which input the query was typed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Header,
    /// The search box inside the collapsed mobile menu.
    Mobile,
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(Field, String),
    /// The magnifier icon next to the header input.
    TriggerPressed,
    ResultSelected(SectionId),
    /// A click landed outside the input and its results.
    Dismissed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    ScrollTo(SectionId),
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    query: String,
    field: Field,
    expanded: bool,
    results: SearchResults,
}

impl SearchState {
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Input the current results belong to.
    #[must_use]
    pub fn field(&self) -> Field {
        self.field
    }

    /// Whether the header input has been revealed by the trigger.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    #[must_use]
    pub fn results(&self) -> &SearchResults {
        &self.results
    }

    /// Results to show under `field`, if they are open there.
    #[must_use]
    pub fn results_for(&self, field: Field) -> Option<&SearchResults> {
        (self.field == field && self.results.is_open()).then_some(&self.results)
    }

    pub fn handle(&mut self, message: Message, language: Language) -> Effect {
        match message {
            Message::QueryChanged(field, query) => {
                self.results = search(&query, language);
                self.field = field;
                self.query = query;
                Effect::None
            }
            Message::TriggerPressed => {
                self.expanded = true;
                Effect::None
            }
            Message::ResultSelected(section) => {
                self.close();
                Effect::ScrollTo(section)
            }
            Message::Dismissed => {
                if self.field == Field::Header {
                    self.results = SearchResults::Closed;
                }
                Effect::None
            }
        }
    }

    /// Closes every result list.
    pub fn close(&mut self) {
        self.results = SearchResults::Closed;
    }

    /// Re-runs an open query so titles follow the active language.
    pub fn relabel(&mut self, language: Language) {
        if self.results.is_open() {
            self.results = search(&self.query, language);
        }
    }
}
