// analysis facade: validation, orchestration, status resolution

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;

use crate::config::AnalyzerConfig;
use crate::feedback;
use crate::index::CorpusIndex;
use crate::scorer::{self, StrengthClass};
use crate::similarity;
use crate::suggest;

/// final verdict on a submitted password
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Accept,
    Warn,
    Reject,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Accept => "Accept",
            Status::Warn => "Warn",
            Status::Reject => "Reject",
        }
    }
}

/// the status table. fixed contract the UI renders against:
///
/// | strength  | within threshold | status |
/// |-----------|------------------|--------|
/// | >= Strong | no               | Accept |
/// | >= Strong | yes              | Warn   |
/// | <  Strong | no               | Warn   |
/// | <  Strong | yes              | Reject |
pub fn resolve_status(strength: StrengthClass, within_threshold: bool) -> Status {
    let strong = strength >= StrengthClass::Strong;
    match (strong, within_threshold) {
        (true, false) => Status::Accept,
        (true, true) => Status::Warn,
        (false, false) => Status::Warn,
        (false, true) => Status::Reject,
    }
}

/// per-request failures, all caught at this boundary. corpus problems are
/// not represented here: an unusable corpus stops startup (CorpusError)
/// and request handling never sees one.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("internal analysis failure")]
    Internal,
}

/// the response aggregate. field names are the wire contract.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub strength: StrengthClass,
    pub suggestions: Vec<String>,
    pub feedback: Vec<String>,
    pub levenshtein_distance: Option<usize>,
    pub most_similar_password: Option<String>,
    pub status: Status,
}

/// the single entry point the transport layer calls. stateless across
/// requests apart from the shared read-only corpus index, so one instance
/// serves any number of concurrent callers without locking.
pub struct Analyzer {
    index: Arc<CorpusIndex>,
    config: AnalyzerConfig,
}

impl Analyzer {
    pub fn new(index: Arc<CorpusIndex>, config: AnalyzerConfig) -> Analyzer {
        Analyzer { index, config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// analyze one candidate password and assemble the full result.
    ///
    /// input is validated first: anything longer than the configured cap is
    /// rejected before any dp table is allocated. component panics are
    /// caught here and surfaced as a generic internal failure so a partial
    /// result can never escape.
    pub fn analyze(&self, password: &str) -> Result<AnalysisResult, AnalyzeError> {
        let length = password.chars().count();
        if length > self.config.max_password_length {
            return Err(AnalyzeError::InvalidInput(format!(
                "password length {} exceeds the maximum of {}",
                length, self.config.max_password_length
            )));
        }

        std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| self.run(password)))
            .map_err(|_| AnalyzeError::Internal)
    }

    fn run(&self, password: &str) -> AnalysisResult {
        let report = scorer::score_detail(password);
        let sim =
            similarity::find_nearest(password, &self.index, self.config.similarity_threshold);
        let status = resolve_status(report.class, sim.within_threshold);
        let feedback = feedback::feedback(&report, &sim);

        // accepted passwords get no alternatives; everything else gets up to
        // suggestion_count candidates that pass the strength+distance gate
        let suggestions = if status == Status::Accept {
            Vec::new()
        } else {
            suggest::suggest(
                password,
                self.config.suggestion_count,
                &self.index,
                &self.config,
                &mut rand::thread_rng(),
            )
        };

        AnalysisResult {
            strength: report.class,
            suggestions,
            feedback,
            levenshtein_distance: sim.distance,
            most_similar_password: sim.nearest,
            status,
        }
    }

    /// the suggestion-only boundary operation: no input password, all
    /// candidates drawn from the internal generator.
    pub fn suggest_pool(&self, count: usize) -> Vec<String> {
        suggest::suggest_pool(count, &self.index, &self.config, &mut rand::thread_rng())
    }
}
