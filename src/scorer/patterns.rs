// low-entropy pattern detection for the strength heuristic

use std::sync::OnceLock;

use aho_corasick::AhoCorasick;
use regex::Regex;

/// dictionary fragments that show up constantly in leaked passwords.
/// matched case-insensitively anywhere in the candidate.
const COMMON_FRAGMENTS: &[&str] = &[
    "password", "passwort", "passw0rd", "qwerty", "azerty", "letmein",
    "welcome", "admin", "login", "iloveyou", "sunshine", "princess",
    "dragon", "monkey", "football", "baseball", "master", "shadow",
    "trustno1", "abc123",
];

/// keyboard rows scanned for sequential runs (in either direction)
const KEYBOARD_ROWS: &[&str] = &["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// minimum length for a repeat or sequence to count as a penalty
const RUN_LENGTH: usize = 3;

fn fragment_automaton() -> &'static AhoCorasick {
    static AUTOMATON: OnceLock<AhoCorasick> = OnceLock::new();
    AUTOMATON.get_or_init(|| {
        AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(COMMON_FRAGMENTS)
            .expect("common fragment patterns are valid")
    })
}

fn structural_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // the classic weak shapes: all digits, all lowercase, or a lowercase
    // word with a short numeric tail ("hunter2", "summer2024")
    RE.get_or_init(|| Regex::new(r"^(?:[0-9]+|[a-z]+|[a-z]+[0-9]{1,4})$").unwrap())
}

/// true if the password contains a known dictionary fragment
pub fn has_common_fragment(password: &str) -> bool {
    fragment_automaton().is_match(password)
}

/// true if the password as a whole has a common weak structure
pub fn has_weak_structure(password: &str) -> bool {
    !password.is_empty() && structural_regex().is_match(password)
}

/// true if the password contains a run of one repeated character
/// of length >= RUN_LENGTH ("aaa", "111")
pub fn has_repeated_run(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    let mut run = 1;
    for w in chars.windows(2) {
        if w[0] == w[1] {
            run += 1;
            if run >= RUN_LENGTH {
                return true;
            }
        } else {
            run = 1;
        }
    }
    false
}

/// true if the password contains an ascending or descending sequence of
/// consecutive code points ("abc", "321") or a keyboard-row run ("asd"),
/// of length >= RUN_LENGTH
pub fn has_sequential_run(password: &str) -> bool {
    let lower = password.to_lowercase();
    let chars: Vec<char> = lower.chars().collect();
    if chars.len() >= RUN_LENGTH {
        let mut asc = 1;
        let mut desc = 1;
        for w in chars.windows(2) {
            let (a, b) = (w[0] as u32, w[1] as u32);
            asc = if b == a + 1 { asc + 1 } else { 1 };
            desc = if a == b + 1 { desc + 1 } else { 1 };
            if asc >= RUN_LENGTH || desc >= RUN_LENGTH {
                return true;
            }
        }
    }

    // keyboard rows: any window of RUN_LENGTH from a row, forward or reversed
    for row in KEYBOARD_ROWS {
        let row_chars: Vec<char> = row.chars().collect();
        for win in row_chars.windows(RUN_LENGTH) {
            let forward: String = win.iter().collect();
            let backward: String = win.iter().rev().collect();
            if lower.contains(&forward) || lower.contains(&backward) {
                return true;
            }
        }
    }

    false
}
