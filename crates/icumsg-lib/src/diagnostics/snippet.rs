//! One-line source excerpts with a caret marker.

use unicode_width::UnicodeWidthChar;

/// Widest excerpt, in terminal columns, including ellipses.
pub const MAX_COLUMNS: usize = 80;

const ELLIPSIS: &str = "...";

/// Render the line containing `offset` with a `^` under it.
///
/// Columns are display widths, so wide characters take two cells. Lines
/// wider than [`MAX_COLUMNS`] are cut to a window around the caret, with
/// `...` marking each truncated side.
pub fn render_snippet(source: &str, offset: usize) -> String {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }

    let line_start = source[..offset].rfind('\n').map_or(0, |i| i + 1);
    let line_end = source[offset..]
        .find('\n')
        .map_or(source.len(), |i| offset + i);
    let line = source[line_start..line_end].trim_end_matches('\r');

    let chars: Vec<(char, usize)> = line
        .chars()
        .map(|c| (c, c.width().unwrap_or(0)))
        .collect();
    let caret_index = source[line_start..offset].chars().count().min(chars.len());
    let total: usize = chars.iter().map(|&(_, w)| w).sum();
    let column: usize = chars[..caret_index].iter().map(|&(_, w)| w).sum();

    if total <= MAX_COLUMNS {
        return format!("{line}\n{}^", " ".repeat(column));
    }

    let budget = MAX_COLUMNS - 2 * ELLIPSIS.len();
    let first_column = column.saturating_sub(budget / 2).min(total - budget);

    // Window starts at the first character boundary at or after `first_column`.
    let mut start = 0;
    let mut start_column = 0;
    while start < chars.len() && start_column < first_column {
        start_column += chars[start].1;
        start += 1;
    }
    let mut end = start;
    let mut width = 0;
    while end < chars.len() && width + chars[end].1 <= budget {
        width += chars[end].1;
        end += 1;
    }

    let mut excerpt = String::with_capacity(MAX_COLUMNS);
    let mut caret = column - start_column;
    if start > 0 {
        excerpt.push_str(ELLIPSIS);
        caret += ELLIPSIS.len();
    }
    excerpt.extend(chars[start..end].iter().map(|&(c, _)| c));
    if end < chars.len() {
        excerpt.push_str(ELLIPSIS);
    }

    format!("{excerpt}\n{}^", " ".repeat(caret))
}
