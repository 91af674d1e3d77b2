//! Integration tests for readiness

use readiness::{
    Action, AnswerKind, AssessmentError, Category, ChoiceScoring, Question, QuestionBank,
    Recommendation, ScaleDescriptor, ScoringConfig, ScriptedBackend, ScriptedBackendError,
    Section, Session, WiscarScores, WiscarScoring, bank, run,
};

fn scale_only_bank() -> QuestionBank {
    let q = |id: &str, category| {
        Question::new(
            id,
            id,
            AnswerKind::Scale(ScaleDescriptor::agreement()),
            category,
            "test",
        )
    };
    QuestionBank::new(vec![
        q("psych_01", Category::Psychometric),
        q("psych_02", Category::Psychometric),
        q("tech_01", Category::Technical),
        q("tech_02", Category::Technical),
        q("wiscar_will_01", Category::Wiscar),
    ])
}

#[test]
fn test_scripted_run_reaches_results() {
    let mut session = Session::new(bank::stakeholder_coaching());
    let mut backend = ScriptedBackend::new().with_fallback_option(0);

    let result = run(&mut session, &mut backend).unwrap();

    assert!(session.is_finished());
    assert_eq!(session.responses().len(), 15);
    assert_eq!(backend.asked().len(), 15);
    assert_eq!(backend.presented(), Some(&result));
    assert_eq!(session.result(), Some(&result));
}

#[test]
fn test_questions_are_asked_in_section_order() {
    let mut session = Session::new(bank::stakeholder_coaching());
    let mut backend = ScriptedBackend::new().with_fallback_option(0);
    run(&mut session, &mut backend).unwrap();

    let asked: Vec<_> = backend.asked().iter().map(|id| id.as_str()).collect();
    assert_eq!(asked.first(), Some(&"psych_01"));
    assert_eq!(asked[5], "tech_01");
    assert_eq!(asked[9], "wiscar_will_01");
    assert_eq!(asked.last(), Some(&"wiscar_real_01"));
}

#[test]
fn test_all_fives_score_full_marks() {
    let mut session = Session::new(scale_only_bank());
    let mut backend = ScriptedBackend::new().with_fallback_option(4);

    let result = run(&mut session, &mut backend).unwrap();

    assert_eq!(result.psychometric_score, 100.0);
    assert_eq!(result.technical_score, 100.0);
    let expected = (200.0 + WiscarScores::BASELINE.mean()) / 3.0;
    assert!((result.overall_score - expected).abs() < 1e-9);
    assert_eq!(result.recommendation, Recommendation::Yes);
    assert_eq!(result.confidence_score, 95.0);
}

#[test]
fn test_choice_answers_drag_standard_bank_down() {
    // psych: three scale answers of 5 plus two choices -> 15 / 5 * 20 = 60
    let mut session = Session::new(bank::stakeholder_coaching());
    let mut backend = ScriptedBackend::new().with_fallback_option(4);
    let result = run(&mut session, &mut backend).unwrap();
    assert_eq!(result.psychometric_score, 60.0);
    // tech is all choices
    assert_eq!(result.technical_score, 0.0);
    assert_eq!(result.recommendation, Recommendation::No);

    let config = ScoringConfig::default().with_choice_scoring(ChoiceScoring::Exclude);
    let mut session = Session::with_config(bank::stakeholder_coaching(), config);
    let mut backend = ScriptedBackend::new().with_fallback_option(4);
    let result = run(&mut session, &mut backend).unwrap();
    assert_eq!(result.psychometric_score, 100.0);
    assert_eq!(result.technical_score, 0.0);
}

#[test]
fn test_derived_wiscar_follows_answers() {
    let config = ScoringConfig::default().with_wiscar(WiscarScoring::Derived);
    let mut session = Session::with_config(bank::stakeholder_coaching(), config);
    let mut backend = ScriptedBackend::new()
        .with_answer("wiscar_will_01", 1)
        .with_answer("wiscar_skill_01", 3)
        .with_fallback_option(4);

    let result = run(&mut session, &mut backend).unwrap();

    assert_eq!(result.wiscar_scores.will, 20.0);
    assert_eq!(result.wiscar_scores.skill, 60.0);
    assert_eq!(result.wiscar_scores.interest, 100.0);
    // scenario and choice answers count as zero under the default policy
    assert_eq!(result.wiscar_scores.cognitive, 0.0);
}

#[test]
fn test_previous_goes_back_within_section() {
    let mut session = Session::new(bank::stakeholder_coaching());
    let mut backend = ScriptedBackend::new()
        .with_action("psych_03", Action::Previous)
        .with_action("tech_01", Action::Previous)
        .with_answer("psych_02", 2)
        .with_fallback_option(0);

    run(&mut session, &mut backend).unwrap();

    let asked: Vec<_> = backend.asked().iter().map(|id| id.as_str()).collect();
    assert_eq!(
        &asked[..6],
        &["psych_01", "psych_02", "psych_03", "psych_02", "psych_03", "psych_04"]
    );
    // going back at the first question of a section stays put
    let tech_start = asked.iter().position(|id| *id == "tech_01").unwrap();
    assert_eq!(asked[tech_start + 1], "tech_01");
    assert_eq!(session.responses().len(), 15);
}

#[test]
fn test_invalid_answer_is_rejected() {
    let mut session = Session::new(bank::stakeholder_coaching());
    let mut backend = ScriptedBackend::new()
        .with_answer("psych_01", 7)
        .with_fallback_option(0);

    let err = run(&mut session, &mut backend).unwrap_err();

    let AssessmentError::Backend(err) = err else {
        panic!("expected backend error");
    };
    assert!(matches!(
        err.downcast_ref::<ScriptedBackendError>(),
        Some(ScriptedBackendError::Rejected { .. })
    ));
    assert!(session.responses().is_empty());
    assert_eq!(backend.asked().len(), 2);
}

#[test]
fn test_quit_cancels() {
    let mut session = Session::new(bank::stakeholder_coaching());
    let mut backend = ScriptedBackend::new()
        .with_action("tech_02", Action::Quit)
        .with_fallback_option(1);

    let err = run(&mut session, &mut backend).unwrap_err();

    assert!(err.is_cancelled());
    assert_eq!(session.section(), Section::Technical);
    assert_eq!(session.responses().len(), 6);
    assert!(backend.presented().is_none());
}

#[test]
fn test_missing_answer_is_backend_error() {
    let mut session = Session::new(bank::stakeholder_coaching());
    let mut backend = ScriptedBackend::new().with_answer("psych_01", 3);

    let err = run(&mut session, &mut backend).unwrap_err();
    assert!(!err.is_cancelled());
    assert!(err.to_string().contains("psych_02"));
}

#[test]
fn test_empty_sections_are_skipped() {
    let bank = QuestionBank::new(vec![Question::new(
        "tech_01",
        "Only question",
        AnswerKind::Scale(ScaleDescriptor::agreement()),
        Category::Technical,
        "knowledge",
    )]);
    let mut session = Session::new(bank);
    let mut backend = ScriptedBackend::new().with_answer("tech_01", 5);

    let result = run(&mut session, &mut backend).unwrap();

    assert_eq!(result.technical_score, 100.0);
    assert_eq!(result.psychometric_score, 0.0);
    assert!(result.overall_score.is_finite());
}

#[test]
fn test_rerun_after_reset() {
    let mut session = Session::new(scale_only_bank());
    let mut backend = ScriptedBackend::new().with_fallback_option(0);
    let first = run(&mut session, &mut backend).unwrap();

    session.reset();
    assert_eq!(session.section(), Section::Intro);
    assert!(session.responses().is_empty());

    let mut backend = ScriptedBackend::new().with_fallback_option(4);
    let second = run(&mut session, &mut backend).unwrap();
    assert!(second.overall_score > first.overall_score);
}

#[test]
fn test_result_serializes_to_camel_case_json() {
    let mut session = Session::new(scale_only_bank());
    let mut backend = ScriptedBackend::new().with_fallback_option(2);
    let result = run(&mut session, &mut backend).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["psychometricScore"], 60.0);
    assert_eq!(json["recommendation"], "maybe");
    assert_eq!(json["wiscarScores"]["realWorld"], 72.0);
    assert_eq!(json["alternativePaths"].as_array().map(Vec::len), Some(3));
}
