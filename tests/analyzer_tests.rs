// end-to-end tests for the analysis facade
//
// covers:
//   - the reject scenario (corpus hit at distance 0)
//   - the accept scenario (strong password far from the corpus)
//   - feedback ordering and wire serialization
//   - input validation

use std::sync::Arc;

use pasvortgardo::analyzer::{AnalyzeError, Analyzer, Status};
use pasvortgardo::config::AnalyzerConfig;
use pasvortgardo::index::CorpusIndex;
use pasvortgardo::scorer::{score, StrengthClass};

fn analyzer(corpus: &[&str]) -> Analyzer {
    let index = CorpusIndex::build(corpus.iter().map(|s| s.to_string()).collect());
    Analyzer::new(Arc::new(index), AnalyzerConfig::default())
}

#[test]
fn compromised_password_scenario() {
    let a = analyzer(&["password123", "qwerty", "letmein"]);
    let r = a.analyze("password123").unwrap();

    assert_eq!(r.levenshtein_distance, Some(0));
    assert_eq!(r.most_similar_password.as_deref(), Some("password123"));
    assert_eq!(r.status, Status::Reject);
}

#[test]
fn strong_password_scenario() {
    let a = analyzer(&["password123", "qwerty", "letmein"]);
    let r = a.analyze("Xk9#mQ2!vLp7").unwrap();

    assert_eq!(r.strength, StrengthClass::VeryStrong);
    assert_eq!(r.status, Status::Accept);
    assert!(r.levenshtein_distance.unwrap() >= 8);
    assert_eq!(
        r.feedback,
        vec!["Your password is strong and safe to use. No changes required!"]
    );
    assert!(r.suggestions.is_empty());
}

#[test]
fn near_miss_on_a_strong_looking_password_warns() {
    // strong composition but one edit away from a corpus entry
    let a = analyzer(&["Xk9#mQ2!vLp7"]);
    let r = a.analyze("Xk9#mQ2!vLp8").unwrap();
    assert!(r.strength >= StrengthClass::Strong);
    assert_eq!(r.levenshtein_distance, Some(1));
    assert_eq!(r.status, Status::Warn);
}

#[test]
fn weak_but_distant_password_warns() {
    let a = analyzer(&["zzzzzzzzzzzzzzzz"]);
    let r = a.analyze("kitten").unwrap();
    assert!(r.strength < StrengthClass::Strong);
    assert_eq!(r.status, Status::Warn);
    assert!(!r.suggestions.is_empty() || !r.feedback.is_empty());
}

#[test]
fn feedback_order_is_deterministic() {
    let a = analyzer(&["password123"]);
    let first = a.analyze("pass").unwrap().feedback;
    let second = a.analyze("pass").unwrap().feedback;
    assert_eq!(first, second);
    // length issue leads, similarity (if any) trails
    assert!(first[0].contains("too short"));
}

#[test]
fn suggestions_pass_the_safety_gate() {
    let a = analyzer(&["password123", "qwerty", "letmein"]);
    let r = a.analyze("qwerty").unwrap();
    assert_eq!(r.status, Status::Reject);
    for s in &r.suggestions {
        assert!(score(s) >= StrengthClass::Strong, "weak suggestion {s:?}");
    }
}

#[test]
fn oversized_password_is_rejected_before_analysis() {
    let a = analyzer(&["qwerty"]);
    let long = "a".repeat(4096);
    match a.analyze(&long) {
        Err(AnalyzeError::InvalidInput(msg)) => {
            assert!(msg.contains("maximum"));
        }
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

#[test]
fn repeated_analysis_is_deterministic_apart_from_suggestions() {
    let a = analyzer(&["password123", "qwerty"]);
    let r1 = a.analyze("letmein99").unwrap();
    let r2 = a.analyze("letmein99").unwrap();
    assert_eq!(r1.strength, r2.strength);
    assert_eq!(r1.status, r2.status);
    assert_eq!(r1.levenshtein_distance, r2.levenshtein_distance);
    assert_eq!(r1.most_similar_password, r2.most_similar_password);
    assert_eq!(r1.feedback, r2.feedback);
}

#[test]
fn wire_serialization_shape() {
    let a = analyzer(&["password123"]);
    let r = a.analyze("password124").unwrap();
    let v = serde_json::to_value(&r).unwrap();

    assert!(v["strength"].is_string());
    assert!(v["suggestions"].is_array());
    assert!(v["feedback"].is_array());
    assert_eq!(v["levenshtein_distance"], 1);
    assert_eq!(v["most_similar_password"], "password123");
    assert_eq!(v["status"], "Reject");
}

#[test]
fn unicode_password_round_trips() {
    let a = analyzer(&["password123"]);
    let r = a.analyze("p\u{e4}ssw\u{f6}rt-Sich3r!").unwrap();
    assert!(r.levenshtein_distance.is_some());
}
