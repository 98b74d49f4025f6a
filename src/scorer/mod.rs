// password strength heuristic

pub mod patterns;

use serde::{Serialize, Serializer};

/// full length credit stops here; longer passwords earn a reduced rate
const LENGTH_FULL_CREDIT: usize = 12;
/// no further length credit past this point
const LENGTH_CAP: usize = 20;

const POINTS_PER_CHAR: i32 = 4;
const POINTS_PER_CHAR_TAIL: i32 = 2;
const POINTS_PER_CLASS: i32 = 8;

/// below this length a flat penalty applies on top of the reduced credit
const SHORT_LENGTH: usize = 8;
const PENALTY_SHORT: i32 = 20;

const PENALTY_REPEATED_RUN: i32 = 10;
const PENALTY_SEQUENTIAL_RUN: i32 = 10;
const PENALTY_WEAK_STRUCTURE: i32 = 10;
const PENALTY_COMMON_FRAGMENT: i32 = 20;

/// ordered strength classification. the total order matters: the status
/// table and the suggestion acceptance gate both compare against `Strong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthClass {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthClass::VeryWeak => "Very Weak",
            StrengthClass::Weak => "Weak",
            StrengthClass::Moderate => "Moderate",
            StrengthClass::Strong => "Strong",
            StrengthClass::VeryStrong => "Very Strong",
        }
    }

    fn from_points(points: i32) -> StrengthClass {
        // thresholds are internal; the class is the public contract
        match points {
            i32::MIN..=19 => StrengthClass::VeryWeak,
            20..=39 => StrengthClass::Weak,
            40..=59 => StrengthClass::Moderate,
            60..=79 => StrengthClass::Strong,
            _ => StrengthClass::VeryStrong,
        }
    }
}

impl Serialize for StrengthClass {
    /// classes travel on the wire as their display labels ("Very Strong")
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// everything the heuristic observed about one password: the final class
/// plus which checks fired. the feedback generator maps these flags 1:1
/// to user-facing statements.
#[derive(Debug, Clone)]
pub struct StrengthReport {
    pub class: StrengthClass,
    pub length: usize,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
    pub repeated_run: bool,
    pub sequential_run: bool,
    pub common_fragment: bool,
    pub weak_structure: bool,
}

/// classify a password. pure and total: every string, including the empty
/// one, maps to exactly one class.
pub fn score(password: &str) -> StrengthClass {
    score_detail(password).class
}

/// classify a password and report which heuristic checks fired.
///
/// the numeric score is internal only; the public contract is the class.
/// length dominates (diminishing returns past LENGTH_FULL_CREDIT),
/// character-class diversity adds, detected low-entropy patterns subtract.
pub fn score_detail(password: &str) -> StrengthReport {
    let length = password.chars().count();

    let has_lowercase = password.chars().any(|c| c.is_lowercase());
    let has_uppercase = password.chars().any(|c| c.is_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password
        .chars()
        .any(|c| !c.is_alphanumeric() && !c.is_whitespace());

    let repeated_run = patterns::has_repeated_run(password);
    let sequential_run = patterns::has_sequential_run(password);
    let common_fragment = patterns::has_common_fragment(password);
    let weak_structure = patterns::has_weak_structure(password);

    let mut points = 0i32;

    let full = length.min(LENGTH_FULL_CREDIT) as i32;
    let tail = length.clamp(LENGTH_FULL_CREDIT, LENGTH_CAP) as i32 - LENGTH_FULL_CREDIT as i32;
    points += full * POINTS_PER_CHAR + tail * POINTS_PER_CHAR_TAIL;

    let class_count = has_lowercase as i32 + has_uppercase as i32 + has_digit as i32 + has_symbol as i32;
    points += class_count * POINTS_PER_CLASS;

    if length < SHORT_LENGTH {
        points -= PENALTY_SHORT;
    }
    if repeated_run {
        points -= PENALTY_REPEATED_RUN;
    }
    if sequential_run {
        points -= PENALTY_SEQUENTIAL_RUN;
    }
    if common_fragment {
        points -= PENALTY_COMMON_FRAGMENT;
    }
    if weak_structure {
        points -= PENALTY_WEAK_STRUCTURE;
    }

    // the empty password never classifies above the floor
    let class = if length == 0 {
        StrengthClass::VeryWeak
    } else {
        StrengthClass::from_points(points)
    };

    StrengthReport {
        class,
        length,
        has_lowercase,
        has_uppercase,
        has_digit,
        has_symbol,
        repeated_run,
        sequential_run,
        common_fragment,
        weak_structure,
    }
}
