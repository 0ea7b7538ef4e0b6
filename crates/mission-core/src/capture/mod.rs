//! Quick capture: one line of free text in, a structured entity draft out.
//!
//! `parse` is pure and total: it never fails, and unparseable input
//! degrades to defaults. The reference date is injected by the caller so
//! parsing stays deterministic under test.

mod date;

use crate::error::CoreError;
use crate::task::Priority;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use std::str::FromStr;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#(\w+)").unwrap());
static PRIORITY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)!(high|medium|low)").unwrap());
static ASSIGNEE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"@(\w+)").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static ICON_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bicon\b").unwrap());
static CAPSTONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bcapstone\b").unwrap());

/// Which kind of entity a capture should produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureType {
    Task,
    Note,
    Link,
}

impl FromStr for CaptureType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "task" => Ok(CaptureType::Task),
            "note" => Ok(CaptureType::Note),
            "link" => Ok(CaptureType::Link),
            other => Err(CoreError::InvalidCaptureType(other.to_string())),
        }
    }
}

/// The two historical capture entry points, which disagree on assignee
/// handling and must keep doing so (see DESIGN.md):
/// the server endpoint never reads `@name` tokens and defaults to "Adam";
/// the client-side preview reads one and defaults to "Atticus".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOrigin {
    Server,
    Client,
}

impl CaptureOrigin {
    fn default_assignee(self) -> &'static str {
        match self {
            CaptureOrigin::Server => "Adam",
            CaptureOrigin::Client => "Atticus",
        }
    }
}

/// Parsed fields for a task capture. The store supplies the remaining
/// defaults (column, empty description, timestamps) on create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub priority: Priority,
    pub tags: Vec<String>,
    pub due_date: Option<NaiveDate>,
    pub category: String,
    pub assignee: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

/// A link capture carries only the normalized URL; title resolution is the
/// web layer's remote fetch, never the parser's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDraft {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureDraft {
    Task(TaskDraft),
    Note(NoteDraft),
    Link(LinkDraft),
}

/// Turn one line of free text into an entity draft. Never fails; anything
/// that cannot be extracted falls back to its default.
pub fn parse(raw: &str, kind: CaptureType, origin: CaptureOrigin, today: NaiveDate) -> CaptureDraft {
    match kind {
        CaptureType::Task => CaptureDraft::Task(parse_task(raw, origin, today)),
        CaptureType::Note => CaptureDraft::Note(parse_note(raw)),
        CaptureType::Link => CaptureDraft::Link(LinkDraft {
            url: normalize_url(raw),
        }),
    }
}

fn parse_task(raw: &str, origin: CaptureOrigin, today: NaiveDate) -> TaskDraft {
    let tags: Vec<String> = TAG_RE
        .captures_iter(raw)
        .map(|c| c[1].to_lowercase())
        .collect();
    let mut working = TAG_RE.replace_all(raw, "").into_owned();

    let priority = PRIORITY_RE
        .captures(&working)
        .map(|c| Priority::from_str(&c[1]).unwrap_or_default())
        .unwrap_or_default();
    working = PRIORITY_RE.replace_all(&working, "").into_owned();

    let mut assignee = origin.default_assignee().to_string();
    if origin == CaptureOrigin::Client {
        if let Some(caps) = ASSIGNEE_RE.captures(&working) {
            assignee = caps[1].to_string();
        }
        working = ASSIGNEE_RE.replace_all(&working, "").into_owned();
    }

    let (due_date, working) = date::extract_due_date(&working, today);

    // Keyword checks run against the raw input so a phrase consumed by an
    // earlier extraction still counts toward the category.
    let category = infer_category(raw, &tags);

    let title = WHITESPACE_RE.replace_all(&working, " ").trim().to_string();

    TaskDraft {
        title,
        priority,
        tags,
        due_date,
        category,
        assignee,
    }
}

fn infer_category(raw: &str, tags: &[String]) -> String {
    let has_tag = |name: &str| tags.iter().any(|t| t == name);

    if has_tag("icon") || ICON_RE.is_match(raw) {
        "ICON".to_string()
    } else if has_tag("capstone") || CAPSTONE_RE.is_match(raw) {
        "Capstone".to_string()
    } else if has_tag("setup") || has_tag("config") {
        "Atticus Setup".to_string()
    } else {
        "Personal".to_string()
    }
}

fn parse_note(raw: &str) -> NoteDraft {
    let title = raw
        .lines()
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .unwrap_or("Quick Note")
        .to_string();

    NoteDraft {
        title,
        content: raw.to_string(),
    }
}

/// Normalize a captured URL: anything not already starting with "http" gets
/// one leading "www." stripped and an "https://" prefix.
pub fn normalize_url(raw: &str) -> String {
    let url = raw.trim();
    if url.starts_with("http") {
        url.to_string()
    } else {
        format!("https://{}", url.strip_prefix("www.").unwrap_or(url))
    }
}
