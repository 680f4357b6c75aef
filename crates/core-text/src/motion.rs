//! Word motions within a single line.
//!
//! Pure functions over a line's code points and a column. They never wrap to
//! neighbouring lines; `word_forward` is bounded by the caller's mode-dependent
//! rightmost column.

/// `b`: step left once, skip whitespace leftwards, then walk back to the first
/// character of the non-whitespace run.
pub fn word_backward(line: &[char], col: usize) -> usize {
    if line.is_empty() {
        return 0;
    }
    let mut c = col.min(line.len()).saturating_sub(1);
    while c > 0 && line[c].is_whitespace() {
        c -= 1;
    }
    while c > 0 && !line[c - 1].is_whitespace() {
        c -= 1;
    }
    c
}

/// `e`: step right once, skip whitespace rightwards, then walk forward while the next
/// character is non-whitespace. Never moves past `max_col`.
pub fn word_forward(line: &[char], col: usize, max_col: usize) -> usize {
    if line.is_empty() {
        return col.min(max_col);
    }
    let step = |c: usize| if c < max_col { c + 1 } else { c };
    let mut c = step(col);
    while c < line.len() && line[c].is_whitespace() {
        let next = step(c);
        if next == c {
            break;
        }
        c = next;
    }
    while c + 1 < line.len() && !line[c + 1].is_whitespace() {
        let next = step(c);
        if next == c {
            break;
        }
        c = next;
    }
    c
}
