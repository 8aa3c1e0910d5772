use super::*;

// =============================================================
// Question previews
// =============================================================

#[test]
fn preview_maps_text_type_and_tags() {
    let preview: QuestionPreview = serde_json::from_value(serde_json::json!({
        "id": 42,
        "text": "Explain ownership.",
        "type": "Rust Basics",
        "difficulty": "EASY",
        "tags": "memory  borrowing lifetimes"
    }))
    .unwrap();

    let question = preview.into_question(None);
    assert_eq!(question.id, "42");
    assert_eq!(question.title, "Explain ownership.");
    assert_eq!(question.content, "Explain ownership.");
    assert_eq!(question.category, "Rust Basics");
    assert_eq!(question.difficulty, "EASY");
    assert_eq!(question.tags, vec!["memory", "borrowing", "lifetimes"]);
    assert!(question.question_set_id.is_none());
}

#[test]
fn preview_with_missing_fields_maps_to_empty_strings() {
    let preview: QuestionPreview = serde_json::from_value(serde_json::json!({ "tags": null })).unwrap();
    let question = preview.into_question(Some(7));
    assert_eq!(question.id, "");
    assert_eq!(question.title, "");
    assert!(question.tags.is_empty());
    assert_eq!(question.question_set_id.as_deref(), Some("7"));
}

#[test]
fn split_tags_handles_none() {
    assert!(split_tags(None).is_empty());
}

// =============================================================
// Envelopes and pages
// =============================================================

#[test]
fn envelope_tolerates_null_data() {
    let env: Envelope<AnswerResponse> = serde_json::from_value(serde_json::json!({
        "statusCode": 200,
        "message": "No answer found for this question",
        "data": null,
        "errors": []
    }))
    .unwrap();
    assert!(env.data.is_none());
    assert_eq!(env.message.as_deref(), Some("No answer found for this question"));
}

#[test]
fn page_body_reads_total_elements() {
    let page: PageBody<QuestionPreview> = serde_json::from_value(serde_json::json!({
        "content": [{ "id": 1, "text": "a" }, { "id": 2, "text": "b" }],
        "totalElements": 37,
        "number": 0
    }))
    .unwrap();
    assert_eq!(page.content.len(), 2);
    assert_eq!(page.total_elements, 37);
}

// =============================================================
// Question sets, answers, dashboard
// =============================================================

#[test]
fn question_set_status_parses_uppercase() {
    let set: QuestionSet = serde_json::from_value(serde_json::json!({
        "id": 3,
        "name": "Java Basics",
        "type": "Java",
        "difficulty": "Easy",
        "tags": "enums generics",
        "status": "PUBLISHED",
        "questions": ["q1"]
    }))
    .unwrap();
    assert_eq!(set.status, QuestionSetStatus::Published);
    assert_eq!(set.kind, "Java");
    assert_eq!(set.status.label(), "PUBLISHED");
}

#[test]
fn answer_response_tolerates_null_scores() {
    let answer: AnswerResponse = serde_json::from_value(serde_json::json!({
        "id": 9,
        "text": "My answer",
        "fileUrl": null,
        "answerType": "TEXT",
        "submittedAt": "2025-03-01T10:00:00Z",
        "questionId": 4,
        "questionText": "What is a trait?",
        "userId": 1,
        "feedback": null,
        "score": null,
        "correctness": 7,
        "completeness": 6,
        "clarity": 8
    }))
    .unwrap();
    assert_eq!(answer.score, 0);
    assert_eq!(answer.feedback, "");
    assert_eq!(answer.clarity, 8);
}

#[test]
fn dashboard_stats_preserve_low_score_order() {
    let stats: DashboardStats = serde_json::from_value(serde_json::json!({
        "averageScore": 6.25,
        "questionsAnsweredCount": 4,
        "lowScoreQuestions": [
            { "questionId": 5, "questionText": "b", "score": 3, "submittedAt": "2025-01-02T00:00:00" },
            { "questionId": 2, "questionText": "a", "score": 4, "submittedAt": "2025-01-01T00:00:00" }
        ]
    }))
    .unwrap();
    let ids: Vec<i64> = stats.low_score_questions.iter().map(|q| q.question_id).collect();
    assert_eq!(ids, vec![5, 2]);
}

#[test]
fn submit_answer_request_trims_and_serializes_camel_case() {
    let req = SubmitAnswerRequest::text(11, "  borrowed text \n");
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "questionId": 11, "answerType": "TEXT", "answerText": "borrowed text" })
    );
}

#[test]
fn generate_request_serializes_type_key() {
    let req = GenerateQuestionSetRequest {
        name: "Java Basics".to_owned(),
        kind: "Java".to_owned(),
        difficulty: "Easy".to_owned(),
        tags: "enums".to_owned(),
        quantity: 5,
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["type"], "Java");
    assert_eq!(value["quantity"], 5);
}
