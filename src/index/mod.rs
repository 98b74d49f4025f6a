// bk-tree corpus index with triangle-inequality pruning

use rayon::prelude::*;

use crate::distance::{levenshtein, levenshtein_within};

/// a query hit: the corpus entry and its exact edit distance to the query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub entry: String,
    pub distance: usize,
}

impl Match {
    /// ordering used everywhere a winner is picked: smaller distance first,
    /// then lexicographically smaller entry. keeps tie-breaks deterministic.
    fn beats(&self, other: &Match) -> bool {
        self.distance < other.distance
            || (self.distance == other.distance && self.entry < other.entry)
    }
}

struct Node {
    entry: String,
    /// children keyed by exact levenshtein distance to this node's entry
    children: Vec<(usize, Node)>,
}

/// a single bk-tree over corpus entries.
///
/// insertion descends edges labeled by the exact distance to each node,
/// creating a new child edge when no edge carries that label. queries
/// exploit the triangle inequality: a subtree hanging off an edge labeled
/// `d_edge` can only contain entries within `radius` of the query if
/// `|d_edge - d(query, node)| <= radius`.
pub struct BkTree {
    root: Option<Node>,
    len: usize,
}

impl BkTree {
    pub fn build<I: IntoIterator<Item = String>>(entries: I) -> Self {
        let mut tree = BkTree { root: None, len: 0 };
        for entry in entries {
            tree.insert(entry);
        }
        tree
    }

    fn insert(&mut self, entry: String) {
        self.len += 1;
        let mut node = match self.root {
            Some(ref mut root) => root,
            None => {
                self.root = Some(Node {
                    entry,
                    children: Vec::new(),
                });
                return;
            }
        };

        loop {
            let d = levenshtein(&entry, &node.entry);
            if d == 0 {
                // corpus is deduped upstream; an exact duplicate adds nothing
                self.len -= 1;
                return;
            }
            match node.children.iter().position(|(label, _)| *label == d) {
                Some(i) => node = &mut node.children[i].1,
                None => {
                    node.children.push((
                        d,
                        Node {
                            entry,
                            children: Vec::new(),
                        },
                    ));
                    return;
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// nearest entry within `max` edits, or None if nothing qualifies.
    /// ties at equal distance resolve to the lexicographically smaller entry.
    pub fn query_within(&self, query: &str, max: usize) -> Option<Match> {
        self.search(query, Some(max))
    }

    /// globally nearest entry regardless of distance. descent starts with an
    /// unbounded radius that shrinks as better candidates are found.
    pub fn nearest(&self, query: &str) -> Option<Match> {
        self.search(query, None)
    }

    fn search(&self, query: &str, max: Option<usize>) -> Option<Match> {
        let root = self.root.as_ref()?;
        let mut best: Option<Match> = None;
        let mut stack = vec![root];

        while let Some(node) = stack.pop() {
            // radius at visit time: the caller's bound tightened by the best
            // hit so far. the node only matters if d <= radius; a child with
            // edge label l only matters if |l - d| <= radius, so everything
            // past radius + max_label is unreachable and the dp can abandon
            // the node there instead of finishing the full table.
            let mut radius = max.unwrap_or(usize::MAX);
            if let Some(b) = &best {
                radius = radius.min(b.distance);
            }
            let max_label = node.children.iter().map(|(label, _)| *label).max();
            let d = match radius.checked_add(max_label.unwrap_or(0)) {
                Some(cutoff) => match levenshtein_within(query, &node.entry, cutoff) {
                    Some(d) => d,
                    // beyond the cutoff neither the node nor any subtree
                    // hanging off it can still qualify
                    None => continue,
                },
                // unbounded first descent (nearest with no best yet)
                None => levenshtein(query, &node.entry),
            };

            let qualifies = max.map_or(true, |m| d <= m);
            let improves = best.as_ref().map_or(true, |b| {
                d < b.distance || (d == b.distance && node.entry < b.entry)
            });
            if qualifies && improves {
                best = Some(Match {
                    entry: node.entry.clone(),
                    distance: d,
                });
                // the new best may tighten the radius for child selection
                radius = radius.min(d);
            }

            // kept inclusive of the best distance so that equal-distance
            // ties are still visited and broken lexicographically.
            for (label, child) in &node.children {
                if label.abs_diff(d) <= radius {
                    stack.push(child);
                }
            }
        }

        best
    }
}

/// the process-wide corpus index: a forest of bk-trees, one shard per
/// rayon worker, built in parallel. queries fan out over the shards and
/// merge by (distance, entry), so the observable contract is identical to
/// a single tree over the whole corpus.
pub struct CorpusIndex {
    shards: Vec<BkTree>,
    len: usize,
}

impl CorpusIndex {
    pub fn build(entries: Vec<String>) -> Self {
        if entries.is_empty() {
            return CorpusIndex {
                shards: Vec::new(),
                len: 0,
            };
        }

        let shard_count = rayon::current_num_threads().max(1);
        let chunk_size = entries.len().div_ceil(shard_count);
        let shards: Vec<BkTree> = entries
            .par_chunks(chunk_size)
            .map(|chunk| BkTree::build(chunk.iter().cloned()))
            .collect();

        let len = shards.iter().map(BkTree::len).sum();
        CorpusIndex { shards, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn query_within(&self, query: &str, max: usize) -> Option<Match> {
        self.shards
            .par_iter()
            .filter_map(|s| s.query_within(query, max))
            .reduce_with(merge)
    }

    pub fn nearest(&self, query: &str) -> Option<Match> {
        self.shards
            .par_iter()
            .filter_map(|s| s.nearest(query))
            .reduce_with(merge)
    }
}

/// winner of two shard hits. (distance, entry) is a total order, so the
/// reduction is associative and the merged result does not depend on
/// rayon's join order.
fn merge(a: Match, b: Match) -> Match {
    if b.beats(&a) {
        b
    } else {
        a
    }
}
