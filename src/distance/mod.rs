// levenshtein edit distance (two-row dp over unicode code points)

/// compute the levenshtein distance between two strings.
/// operates on unicode code points, not bytes, so multi-byte characters
/// count as a single edit. working memory is O(min(|a|,|b|)).
pub fn levenshtein(a: &str, b: &str) -> usize {
    // keep the shorter string on the row axis to minimize allocation
    let (short, long) = if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };

    let short_chars: Vec<char> = short.chars().collect();
    if short_chars.is_empty() {
        return long.chars().count();
    }

    // row[j] = distance from the current prefix of `long` to short[..j]
    let mut row: Vec<usize> = (0..=short_chars.len()).collect();

    for (i, lc) in long.chars().enumerate() {
        let mut prev = row[0];
        row[0] = i + 1;

        for (j, &sc) in short_chars.iter().enumerate() {
            let temp = row[j + 1];
            let cost = if lc == sc { 0 } else { 1 };
            row[j + 1] = (row[j + 1] + 1).min(row[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    row[short_chars.len()]
}

/// bounded levenshtein: returns Some(distance) if the distance is <= max,
/// None otherwise. two early-exit paths keep the hot path cheap:
///   1. |len(a) - len(b)| is a lower bound on the distance
///   2. if the minimum of a dp row exceeds max, no completion can recover
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> Option<usize> {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if a_len.abs_diff(b_len) > max {
        return None;
    }

    let b_chars: Vec<char> = b.chars().collect();
    if a_len == 0 {
        return Some(b_len);
    }
    if b_len == 0 {
        return Some(a_len);
    }

    let mut row: Vec<usize> = (0..=b_len).collect();

    for (i, ac) in a.chars().enumerate() {
        let mut prev = row[0];
        row[0] = i + 1;
        let mut min_row = row[0];

        for (j, &bc) in b_chars.iter().enumerate() {
            let temp = row[j + 1];
            let cost = if ac == bc { 0 } else { 1 };
            row[j + 1] = (row[j + 1] + 1).min(row[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(row[j + 1]);
        }

        if min_row > max {
            return None;
        }
    }

    let d = row[b_len];
    if d <= max {
        Some(d)
    } else {
        None
    }
}
