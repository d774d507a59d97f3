//! Byte offset to line conversion

/// Start offsets of every line in a document
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Index the line starts of `text`
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|(_, byte)| *byte == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { line_starts }
    }

    /// Zero-based line containing the byte at `offset`.
    ///
    /// Offsets past the end of the text map to the last line.
    pub fn line_of(&self, offset: usize) -> u32 {
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        line as u32
    }

    /// Number of lines
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}
