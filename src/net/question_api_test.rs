use super::*;

fn response(status: u16, body: serde_json::Value) -> RawResponse {
    RawResponse {
        status,
        body: body.to_string(),
    }
}

fn preview(id: i64, text: &str) -> serde_json::Value {
    serde_json::json!({ "id": id, "text": text, "type": "Java", "difficulty": "EASY", "tags": "oop jvm" })
}

// =============================================================
// Query building
// =============================================================

#[test]
fn questions_query_is_zero_based() {
    assert_eq!(
        questions_query(1, 10, None),
        vec![("page", "0".to_owned()), ("size", "10".to_owned())]
    );
    assert_eq!(questions_query(3, 25, None)[0], ("page", "2".to_owned()));
}

#[test]
fn questions_query_uppercases_difficulty() {
    let pairs = questions_query(1, 10, Some("Medium"));
    assert_eq!(pairs.last(), Some(&("difficulty", "MEDIUM".to_owned())));
}

#[test]
fn questions_query_skips_all_filter() {
    assert_eq!(questions_query(1, 10, Some("all")).len(), 2);
    assert_eq!(questions_query(1, 10, Some("")).len(), 2);
}

#[test]
fn questions_query_page_zero_does_not_underflow() {
    assert_eq!(questions_query(0, 10, None)[0], ("page", "0".to_owned()));
}

// =============================================================
// Response parsing
// =============================================================

#[test]
fn parse_question_page_maps_content_and_total() {
    let resp = response(
        200,
        serde_json::json!({ "data": { "content": [preview(1, "a"), preview(2, "b")], "totalElements": 42 } }),
    );
    let page = parse_question_page(&resp).unwrap();
    assert_eq!(page.total, 42);
    assert_eq!(page.questions.len(), 2);
    assert_eq!(page.questions[1].id, "2");
    assert_eq!(page.questions[0].tags, vec!["oop", "jvm"]);
}

#[test]
fn parse_set_questions_tags_set_id() {
    let resp = response(200, serde_json::json!({ "data": [preview(8, "q")] }));
    let questions = parse_set_questions(&resp, 5).unwrap();
    assert_eq!(questions[0].question_set_id.as_deref(), Some("5"));
}

#[test]
fn parse_set_questions_null_data_is_empty() {
    let resp = response(200, serde_json::json!({ "data": null }));
    assert!(parse_set_questions(&resp, 5).unwrap().is_empty());
}

#[test]
fn parse_question_lookup_finds_matching_id() {
    let resp = response(
        200,
        serde_json::json!({ "data": { "content": [preview(1, "a"), preview(9, "target")], "totalElements": 2 } }),
    );
    let question = parse_question_lookup(&resp, 9).unwrap();
    assert_eq!(question.title, "target");
}

#[test]
fn parse_question_lookup_defaults_difficulty_to_medium() {
    let resp = response(
        200,
        serde_json::json!({ "data": { "content": [{ "id": 4, "text": "x" }], "totalElements": 1 } }),
    );
    assert_eq!(parse_question_lookup(&resp, 4).unwrap().difficulty, "Medium");
}

#[test]
fn parse_question_lookup_reports_missing_id() {
    let resp = response(200, serde_json::json!({ "data": { "content": [preview(1, "a")], "totalElements": 1 } }));
    assert_eq!(
        parse_question_lookup(&resp, 77).unwrap_err(),
        ApiError::NotFound("Question with ID 77 not found".to_owned())
    );
}

#[test]
fn parse_question_lookup_reports_missing_data() {
    let resp = response(200, serde_json::json!({ "data": null }));
    assert_eq!(
        parse_question_lookup(&resp, 1).unwrap_err().to_string(),
        "Questions not found"
    );
}

#[test]
fn parse_question_lookup_reports_status() {
    let resp = response(503, serde_json::json!({ "message": "down" }));
    assert_eq!(
        parse_question_lookup(&resp, 1).unwrap_err().to_string(),
        "Failed to fetch questions: 503"
    );
}
