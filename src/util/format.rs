//! Display helpers for scores, dates, names and question lists.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

use crate::net::types::{Question, User};

/// Filter value meaning "no filter" in the difficulty and category selects.
pub const ALL_FILTER: &str = "all";

/// Number of tag chips shown before collapsing into "+N more".
pub const VISIBLE_TAGS: usize = 2;

pub fn score_label(score: u32) -> &'static str {
    match score {
        8.. => "Excellent",
        6..=7 => "Good",
        4..=5 => "Fair",
        _ => "Poor",
    }
}

/// Overall score chip text, e.g. `7/10 - Good`.
pub fn score_summary(score: u32) -> String {
    format!("{score}/10 - {}", score_label(score))
}

/// Width of a 0-10 score as a progress percentage.
pub fn score_percent(score: u32) -> u32 {
    score.saturating_mul(10).min(100)
}

/// One decimal place, `0.0` when the backend has no average yet.
pub fn format_average(average: Option<f64>) -> String {
    format!("{:.1}", average.unwrap_or(0.0))
}

/// `Jun 1, 2025` for the timestamp shapes the backend emits; unparseable
/// input is shown as-is.
pub fn format_submitted_date(raw: &str) -> String {
    parse_date(raw).map_or_else(|| raw.to_owned(), |date| date.format("%b %-d, %Y").to_string())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Local part of the user's email, or `there`.
pub fn greeting_name(user: Option<&User>) -> String {
    user.and_then(|u| u.email.split('@').next())
        .filter(|name| !name.is_empty())
        .unwrap_or("there")
        .to_owned()
}

/// First character of the email, uppercased; `U` when unknown.
pub fn avatar_initial(email: Option<&str>) -> String {
    email
        .and_then(|e| e.chars().next())
        .map_or_else(|| "U".to_owned(), |c| c.to_uppercase().collect())
}

/// `ceil(total / limit)`; zero when `limit` is zero.
pub fn total_pages(total: u64, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    u32::try_from(total.div_ceil(u64::from(limit))).unwrap_or(u32::MAX)
}

/// The first `VISIBLE_TAGS` tags plus a `+N more` label for the rest.
pub fn tag_chips(tags: &[String]) -> (&[String], Option<String>) {
    if tags.len() <= VISIBLE_TAGS {
        return (tags, None);
    }
    (&tags[..VISIBLE_TAGS], Some(format!("+{} more", tags.len() - VISIBLE_TAGS)))
}

/// Client-side filters on the Questions page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionFilter {
    pub search: String,
    pub difficulty: String,
    pub category: String,
}

impl Default for QuestionFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            difficulty: ALL_FILTER.to_owned(),
            category: ALL_FILTER.to_owned(),
        }
    }
}

impl QuestionFilter {
    pub fn matches(&self, question: &Question) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = question.title.to_lowercase().contains(&needle)
            || question.content.to_lowercase().contains(&needle);
        let matches_difficulty = self.difficulty == ALL_FILTER || question.difficulty == self.difficulty;
        let matches_category = self.category == ALL_FILTER || question.category == self.category;
        matches_search && matches_difficulty && matches_category
    }

    pub fn apply(&self, questions: &[Question]) -> Vec<Question> {
        questions.iter().filter(|q| self.matches(q)).cloned().collect()
    }
}

/// Distinct non-empty categories in first-seen order.
pub fn categories(questions: &[Question]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for q in questions {
        if !q.category.is_empty() && !seen.contains(&q.category) {
            seen.push(q.category.clone());
        }
    }
    seen
}
