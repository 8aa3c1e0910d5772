use super::*;

fn question(id: &str, title: &str, difficulty: &str, category: &str) -> Question {
    Question {
        id: id.to_owned(),
        title: title.to_owned(),
        content: title.to_owned(),
        category: category.to_owned(),
        difficulty: difficulty.to_owned(),
        tags: Vec::new(),
        question_set_id: None,
    }
}

// =============================================================
// Scores
// =============================================================

#[test]
fn score_label_thresholds() {
    assert_eq!(score_label(10), "Excellent");
    assert_eq!(score_label(8), "Excellent");
    assert_eq!(score_label(7), "Good");
    assert_eq!(score_label(6), "Good");
    assert_eq!(score_label(5), "Fair");
    assert_eq!(score_label(4), "Fair");
    assert_eq!(score_label(3), "Poor");
    assert_eq!(score_label(0), "Poor");
}

#[test]
fn score_summary_formats_chip() {
    assert_eq!(score_summary(7), "7/10 - Good");
}

#[test]
fn score_percent_is_capped() {
    assert_eq!(score_percent(4), 40);
    assert_eq!(score_percent(12), 100);
}

#[test]
fn format_average_one_decimal() {
    assert_eq!(format_average(Some(6.34)), "6.3");
    assert_eq!(format_average(Some(7.0)), "7.0");
    assert_eq!(format_average(None), "0.0");
}

// =============================================================
// Dates and names
// =============================================================

#[test]
fn format_submitted_date_handles_backend_shapes() {
    assert_eq!(format_submitted_date("2025-06-01T10:15:30"), "Jun 1, 2025");
    assert_eq!(format_submitted_date("2025-06-01T10:15:30.123456"), "Jun 1, 2025");
    assert_eq!(format_submitted_date("2024-12-24T08:00:00Z"), "Dec 24, 2024");
    assert_eq!(format_submitted_date("2024-02-09"), "Feb 9, 2024");
}

#[test]
fn format_submitted_date_passes_through_garbage() {
    assert_eq!(format_submitted_date("yesterday"), "yesterday");
}

#[test]
fn greeting_uses_email_local_part() {
    let user = User {
        email: "grace.hopper@example.com".to_owned(),
    };
    assert_eq!(greeting_name(Some(&user)), "grace.hopper");
    assert_eq!(greeting_name(None), "there");
}

#[test]
fn avatar_initial_uppercases_or_falls_back() {
    assert_eq!(avatar_initial(Some("ada@example.com")), "A");
    assert_eq!(avatar_initial(Some("")), "U");
    assert_eq!(avatar_initial(None), "U");
}

#[test]
fn current_year_is_plausible() {
    assert!(current_year() >= 2024);
}

// =============================================================
// Lists
// =============================================================

#[test]
fn total_pages_rounds_up() {
    assert_eq!(total_pages(0, 10), 0);
    assert_eq!(total_pages(10, 10), 1);
    assert_eq!(total_pages(11, 10), 2);
    assert_eq!(total_pages(5, 0), 0);
}

#[test]
fn tag_chips_collapse_after_two() {
    let tags: Vec<String> = ["a", "b", "c", "d"].iter().map(|t| (*t).to_owned()).collect();
    let (shown, more) = tag_chips(&tags);
    assert_eq!(shown, &tags[..2]);
    assert_eq!(more.as_deref(), Some("+2 more"));

    let (shown, more) = tag_chips(&tags[..2]);
    assert_eq!(shown.len(), 2);
    assert_eq!(more, None);
}

#[test]
fn filter_matches_search_case_insensitively() {
    let questions = vec![
        question("1", "Explain Borrowing", "Easy", "Rust"),
        question("2", "Closures in JS", "Hard", "JavaScript"),
    ];
    let filter = QuestionFilter {
        search: "borrow".to_owned(),
        ..QuestionFilter::default()
    };
    let ids: Vec<String> = filter.apply(&questions).into_iter().map(|q| q.id).collect();
    assert_eq!(ids, vec!["1"]);
}

#[test]
fn filter_combines_difficulty_and_category() {
    let questions = vec![
        question("1", "a", "Easy", "Rust"),
        question("2", "b", "Hard", "Rust"),
        question("3", "c", "Hard", "Go"),
    ];
    let filter = QuestionFilter {
        search: String::new(),
        difficulty: "Hard".to_owned(),
        category: "Rust".to_owned(),
    };
    let ids: Vec<String> = filter.apply(&questions).into_iter().map(|q| q.id).collect();
    assert_eq!(ids, vec!["2"]);
    assert_eq!(QuestionFilter::default().apply(&questions).len(), 3);
}

#[test]
fn categories_are_distinct_in_order() {
    let questions = vec![
        question("1", "a", "Easy", "Rust"),
        question("2", "b", "Hard", "Go"),
        question("3", "c", "Hard", "Rust"),
        question("4", "d", "Hard", ""),
    ];
    assert_eq!(categories(&questions), vec!["Rust", "Go"]);
}
