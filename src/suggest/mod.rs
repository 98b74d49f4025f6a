// stronger-password suggestion generator

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::AnalyzerConfig;
use crate::index::CorpusIndex;
use crate::scorer::{score, StrengthClass};

const SPECIALS: &[u8] = b"!@#$%^&*";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";

/// chance to replace a character with a special
const REPLACE_CHANCE: f64 = 0.1;
/// chance to flip a character's case (when not replaced)
const CASE_FLIP_CHANCE: f64 = 0.3;

fn pick<R: Rng>(set: &[u8], rng: &mut R) -> char {
    *set.choose(rng).expect("charset is non-empty") as char
}

/// structurally transform the input into a stronger variant: sprinkle
/// specials and case flips over the original, wrap it in specials, append
/// a two-digit tail, and pad up to `min_len`. the shape of the original
/// stays recognizable so the user can actually remember the result.
pub fn enhance<R: Rng>(password: &str, min_len: usize, rng: &mut R) -> String {
    let mut out = String::with_capacity(password.len() + 4);

    out.push(pick(SPECIALS, rng));
    for c in password.chars() {
        if rng.gen_bool(REPLACE_CHANCE) {
            out.push(pick(SPECIALS, rng));
        } else if rng.gen_bool(CASE_FLIP_CHANCE) {
            if c.is_ascii_uppercase() {
                out.push(c.to_ascii_lowercase());
            } else {
                out.push(c.to_ascii_uppercase());
            }
        } else {
            out.push(c);
        }
    }
    out.push(pick(SPECIALS, rng));
    let tail: u32 = rng.gen_range(10..100);
    out.push_str(&tail.to_string());

    while out.chars().count() < min_len {
        out.push(pick(UPPERCASE, rng));
    }

    out
}

/// generate a password from scratch with at least one character from each
/// class, the rest drawn from the combined pool, then shuffled. used for
/// the suggestion-only path where there is no input password to transform.
pub fn random_strong<R: Rng>(len: usize, rng: &mut R) -> String {
    let len = len.max(4);
    let mut chars: Vec<char> = vec![
        pick(LOWERCASE, rng),
        pick(UPPERCASE, rng),
        pick(DIGITS, rng),
        pick(SPECIALS, rng),
    ];

    let pool: Vec<u8> = [LOWERCASE, UPPERCASE, DIGITS, SPECIALS].concat();
    while chars.len() < len {
        chars.push(pick(&pool, rng));
    }
    chars.shuffle(rng);
    chars.into_iter().collect()
}

/// the safety gate every suggestion must pass: scores at least Strong and
/// lies strictly beyond the similarity threshold from every corpus entry.
fn is_safe(candidate: &str, index: &CorpusIndex, threshold: usize) -> bool {
    score(candidate) >= StrengthClass::Strong
        && index.query_within(candidate, threshold).is_none()
}

/// produce up to `count` distinct suggestions derived from the input.
/// each slot gets a bounded number of regeneration attempts; an exhausted
/// slot is dropped rather than filled with an unsafe candidate.
pub fn suggest<R: Rng>(
    password: &str,
    count: usize,
    index: &CorpusIndex,
    config: &AnalyzerConfig,
    rng: &mut R,
) -> Vec<String> {
    generate(count, index, config, rng, |rng| {
        enhance(password, config.min_suggestion_length, rng)
    })
}

/// produce up to `count` distinct suggestions with no input password,
/// drawn entirely from the internal generator.
pub fn suggest_pool<R: Rng>(
    count: usize,
    index: &CorpusIndex,
    config: &AnalyzerConfig,
    rng: &mut R,
) -> Vec<String> {
    generate(count, index, config, rng, |rng| {
        // vary the length a little so the pool does not look stamped out
        let len = config.min_suggestion_length + rng.gen_range(0..4);
        random_strong(len, rng)
    })
}

fn generate<R: Rng, F: FnMut(&mut R) -> String>(
    count: usize,
    index: &CorpusIndex,
    config: &AnalyzerConfig,
    rng: &mut R,
    mut candidate: F,
) -> Vec<String> {
    let mut accepted: Vec<String> = Vec::with_capacity(count);

    for _ in 0..count {
        for _ in 0..config.suggestion_retries {
            let c = candidate(rng);
            if is_safe(&c, index, config.similarity_threshold) && !accepted.contains(&c) {
                accepted.push(c);
                break;
            }
            // rejected candidate: plain retry, never a relaxed acceptance
        }
    }

    accepted
}
