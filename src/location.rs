/// Module for converting byte offsets to line:column positions

#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Source code
    source: String,
    /// Byte offset of each line start
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];

        for (i, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(i + 1);
            }
        }

        Self {
            source: source.to_string(),
            line_starts,
        }
    }

    /// Convert a byte offset to a 1-based line and 0-based column.
    ///
    /// The column counts characters from the line start; report
    /// formatters add 1 for display.
    pub fn get_location(&self, offset: usize) -> (usize, usize) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        };

        let line_start = self.line_starts[line];
        let column = self.source[line_start..offset].chars().count();

        (line + 1, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_to_location() {
        let index = LineIndex::new("class A:\n    def _m(self):\n        pass\n");
        // Start of file
        assert_eq!(index.get_location(0), (1, 0));
        // The `def` on line 2, after 4 spaces of indent
        assert_eq!(index.get_location(13), (2, 4));
    }

    #[test]
    fn test_offset_mid_line() {
        let index = LineIndex::new("abc\ndef\n");
        assert_eq!(index.get_location(5), (2, 1));
    }
}
