/// 1-based `(line, column)` of a byte offset. Columns count chars from the
/// start of the line, which is what editors display.
///
/// Offsets past the end clamp to `source.len()`; offsets inside a multi-byte
/// char round down to its start.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let prefix = &source[..floor_char_boundary(source, offset)];
    let line = prefix.matches('\n').count() + 1;
    let last_line_start = prefix.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = prefix[last_line_start..].chars().count() + 1;
    (line, column)
}

fn floor_char_boundary(source: &str, offset: usize) -> usize {
    let mut pos = offset.min(source.len());
    while !source.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}

/// Resolves a run of offsets to `(line, column)` in one pass over the source.
/// Same results as [`line_col`]; offsets should be non-decreasing, a smaller
/// one restarts the scan from the beginning.
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    source: &'a str,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn seek(&mut self, offset: usize) -> (usize, usize) {
        let target = floor_char_boundary(self.source, offset);
        if target < self.offset {
            *self = Self::new(self.source);
        }
        for ch in self.source[self.offset..target].chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset = target;
        (self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_first_line() {
        assert_eq!(line_col("def foo():", 0), (1, 1));
        assert_eq!(line_col("def foo():", 4), (1, 5));
    }

    #[test]
    fn test_line_col_after_newline() {
        let source = "x = 1\ny = 2\n";
        assert_eq!(line_col(source, 6), (2, 1));
        assert_eq!(line_col(source, 10), (2, 5));
        assert_eq!(line_col(source, source.len()), (3, 1));
    }

    #[test]
    fn test_line_col_counts_chars_not_bytes() {
        let source = "s = \"héllo\" + x";
        let x = source.find('x').unwrap();
        assert_eq!(line_col(source, x), (1, 15));
    }

    #[test]
    fn test_line_col_clamps() {
        assert_eq!(line_col("ab", 99), (1, 3));
        assert_eq!(line_col("é", 1), (1, 1));
    }

    #[test]
    fn test_cursor_matches_line_col() {
        let source = "fun main() {\n    val s = \"héllo\"\n\n    println(s)\n}\n";
        let mut cursor = LineCursor::new(source);
        for offset in 0..=source.len() + 2 {
            assert_eq!(cursor.seek(offset), line_col(source, offset), "offset {offset}");
        }
    }

    #[test]
    fn test_cursor_rewinds() {
        let source = "a\nb\nc";
        let mut cursor = LineCursor::new(source);
        assert_eq!(cursor.seek(4), (3, 1));
        assert_eq!(cursor.seek(2), (2, 1));
        assert_eq!(cursor.seek(2), (2, 1));
    }
}
