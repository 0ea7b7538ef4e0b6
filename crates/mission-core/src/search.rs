//! Cross-entity search: a linear, case-insensitive substring scan over the
//! whole document. At this document's scale an index would be overhead.

use crate::document::Document;
use crate::link::Link;
use crate::note::Note;
use crate::task::Task;
use serde::Serialize;

/// Per-entity-type hits for one query
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub tasks: Vec<Task>,
    pub notes: Vec<Note>,
    pub links: Vec<Link>,
}

/// Match tasks on title/description/tags, notes on title/content/tags, and
/// links on title/description/url/tags. An empty (or whitespace-only) query
/// returns empty result sets rather than matching everything.
pub fn search(document: &Document, query: &str) -> SearchResults {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return SearchResults::default();
    }

    SearchResults {
        tasks: document
            .tasks
            .iter()
            .filter(|t| task_matches(t, &needle))
            .cloned()
            .collect(),
        notes: document
            .notes
            .iter()
            .filter(|n| note_matches(n, &needle))
            .cloned()
            .collect(),
        links: document
            .links
            .iter()
            .filter(|l| link_matches(l, &needle))
            .cloned()
            .collect(),
    }
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn any_tag_matches(tags: &[String], needle: &str) -> bool {
    tags.iter().any(|tag| contains(tag, needle))
}

fn task_matches(task: &Task, needle: &str) -> bool {
    contains(&task.title, needle)
        || contains(&task.description, needle)
        || any_tag_matches(&task.tags, needle)
}

fn note_matches(note: &Note, needle: &str) -> bool {
    contains(&note.title, needle)
        || contains(&note.content, needle)
        || any_tag_matches(&note.tags, needle)
}

fn link_matches(link: &Link, needle: &str) -> bool {
    contains(&link.title, needle)
        || contains(&link.description, needle)
        || contains(&link.url, needle)
        || any_tag_matches(&link.tags, needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn fixture() -> Document {
        let now = Utc::now();
        let mut doc = Document::default();

        let mut task = Task::new(1, "Fix the login flow".to_string(), now);
        task.tags = vec!["urgent".to_string()];
        doc.tasks.push(task);

        let mut note = Note::new(1, "Reading list".to_string(), now);
        note.content = "The Rust book, chapter on ownership".to_string();
        doc.notes.push(note);

        doc.links.push(Link::new(
            1,
            "https://docs.rs/axum".to_string(),
            "axum docs".to_string(),
            now,
        ));

        doc
    }

    #[test]
    fn matches_a_task_by_tag_only() {
        let doc = fixture();
        let results = search(&doc, "urgent");
        assert_eq!(results.tasks.len(), 1);
        assert!(results.notes.is_empty());
        assert!(results.links.is_empty());
    }

    #[test]
    fn search_is_case_insensitive() {
        let doc = fixture();
        let lower = search(&doc, "urgent");
        let upper = search(&doc, "URGENT");
        assert_eq!(lower.tasks.len(), upper.tasks.len());
        assert_eq!(upper.tasks[0].id, 1);
    }

    #[test]
    fn empty_query_returns_empty_sets() {
        let doc = fixture();
        let results = search(&doc, "");
        assert!(results.tasks.is_empty() && results.notes.is_empty() && results.links.is_empty());
        let results = search(&doc, "   ");
        assert!(results.tasks.is_empty() && results.notes.is_empty() && results.links.is_empty());
    }

    #[test]
    fn links_match_on_url() {
        let doc = fixture();
        let results = search(&doc, "docs.rs");
        assert_eq!(results.links.len(), 1);
    }

    #[test]
    fn note_content_substring_matches() {
        let doc = fixture();
        let results = search(&doc, "ownership");
        assert_eq!(results.notes.len(), 1);
        assert!(results.tasks.is_empty());
    }
}
