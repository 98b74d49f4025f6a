// brute-force cross-checks for the corpus index
//
// the bk-tree must return the true global minimum (with deterministic
// lexicographic tie-breaks) for every query, so every result here is
// verified against a naive scan over the same corpus.

use pasvortgardo::distance::levenshtein;
use pasvortgardo::index::{BkTree, CorpusIndex};

/// naive reference: min by (distance, entry)
fn brute_nearest<'a>(corpus: &'a [String], query: &str) -> Option<(&'a str, usize)> {
    corpus
        .iter()
        .map(|e| (e.as_str(), levenshtein(query, e)))
        .min_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(b.0)))
}

/// dense synthetic corpus: every string over {a,b,c} up to length 3,
/// plus a handful of realistic entries. lots of ties by construction.
fn synthetic_corpus() -> Vec<String> {
    let alphabet = ['a', 'b', 'c'];
    let mut corpus = Vec::new();
    for x in alphabet {
        corpus.push(x.to_string());
        for y in alphabet {
            corpus.push(format!("{x}{y}"));
            for z in alphabet {
                corpus.push(format!("{x}{y}{z}"));
            }
        }
    }
    for extra in ["password", "password1", "qwerty", "letmein", "drowssap"] {
        corpus.push(extra.to_string());
    }
    corpus
}

fn queries() -> Vec<String> {
    vec![
        "".to_string(),
        "a".to_string(),
        "ab".to_string(),
        "abc".to_string(),
        "abcd".to_string(),
        "cab".to_string(),
        "zzz".to_string(),
        "password".to_string(),
        "passw0rd".to_string(),
        "qwertz".to_string(),
        "Xk9#mQ2!vLp7".to_string(),
    ]
}

#[test]
fn tree_nearest_matches_brute_force() {
    let corpus = synthetic_corpus();
    let tree = BkTree::build(corpus.clone());

    for q in queries() {
        let expected = brute_nearest(&corpus, &q).unwrap();
        let got = tree.nearest(&q).unwrap();
        assert_eq!(
            (got.entry.as_str(), got.distance),
            expected,
            "query {q:?}"
        );
    }
}

#[test]
fn tree_bounded_query_matches_brute_force() {
    let corpus = synthetic_corpus();
    let tree = BkTree::build(corpus.clone());

    for q in queries() {
        let expected = brute_nearest(&corpus, &q).unwrap();
        for max in 0..5 {
            match tree.query_within(&q, max) {
                Some(m) => {
                    assert!(m.distance <= max);
                    assert_eq!((m.entry.as_str(), m.distance), expected, "query {q:?} max {max}");
                }
                None => {
                    assert!(expected.1 > max, "query {q:?} max {max}: missed {expected:?}");
                }
            }
        }
    }
}

#[test]
fn forest_matches_brute_force() {
    let corpus = synthetic_corpus();
    let forest = CorpusIndex::build(corpus.clone());
    assert_eq!(forest.len(), corpus.len());

    for q in queries() {
        let expected = brute_nearest(&corpus, &q).unwrap();
        let got = forest.nearest(&q).unwrap();
        assert_eq!((got.entry.as_str(), got.distance), expected, "query {q:?}");
    }
}

#[test]
fn distance_symmetry_over_corpus() {
    let corpus = synthetic_corpus();
    for a in corpus.iter().take(20) {
        for b in corpus.iter().take(20) {
            assert_eq!(levenshtein(a, b), levenshtein(b, a));
        }
        assert_eq!(levenshtein(a, a), 0);
    }
}

#[test]
fn large_corpus_queries_stay_correct() {
    // numbered entries give a known-structure corpus big enough to
    // exercise sharding and pruning together
    let corpus: Vec<String> = (0..5000).map(|i| format!("password{i}")).collect();
    let forest = CorpusIndex::build(corpus.clone());
    assert_eq!(forest.len(), corpus.len());

    for q in ["password42", "password424242", "p4ssword9", "unrelated"] {
        let expected = brute_nearest(&corpus, q).unwrap();
        let got = forest.nearest(q).unwrap();
        assert_eq!((got.entry.as_str(), got.distance), expected, "query {q:?}");
    }
}
