// human-readable feedback statements

use crate::scorer::StrengthReport;
use crate::similarity::SimilarityResult;

/// minimum length below which the length statement fires
const MIN_RECOMMENDED_LENGTH: usize = 8;

/// build the ordered feedback list for one analysis.
///
/// order is fixed and part of the contract: length issues first, then
/// character-class issues, then pattern issues, then similarity. when
/// nothing fired and the password is clear of the corpus, a single
/// all-clear statement is returned. the wire format is always an ordered
/// sequence of strings, never a joined single string.
pub fn feedback(report: &StrengthReport, similarity: &SimilarityResult) -> Vec<String> {
    let mut statements = Vec::new();

    if report.length < MIN_RECOMMENDED_LENGTH {
        statements.push(format!(
            "Your password is too short. Use at least {MIN_RECOMMENDED_LENGTH} characters."
        ));
    }

    if !report.has_uppercase {
        statements.push("Add at least one uppercase letter.".to_string());
    }
    if !report.has_lowercase {
        statements.push("Add at least one lowercase letter.".to_string());
    }
    if !report.has_digit {
        statements.push("Include at least one number.".to_string());
    }
    if !report.has_symbol {
        statements.push("Add at least one special character (e.g., !, @, #, $).".to_string());
    }

    if report.common_fragment {
        statements.push(
            "Avoid common words or patterns like 'password', 'qwerty', or 'admin'.".to_string(),
        );
    }
    if report.repeated_run {
        statements.push("Avoid repetitive characters like 'aaa' or '111'.".to_string());
    }
    if report.sequential_run {
        statements.push("Avoid sequential characters like 'abc' or '123'.".to_string());
    }
    if report.weak_structure && !report.common_fragment {
        statements.push(
            "Avoid predictable structures such as all digits or a word followed by numbers."
                .to_string(),
        );
    }

    if similarity.within_threshold {
        match similarity.distance {
            Some(0) => statements
                .push("This password appears verbatim in a known breach corpus.".to_string()),
            _ => statements.push(
                "Too similar to a known compromised password; a small edit would not save it."
                    .to_string(),
            ),
        }
    }

    if statements.is_empty() {
        statements
            .push("Your password is strong and safe to use. No changes required!".to_string());
    }

    statements
}
