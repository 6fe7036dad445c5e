//! Line buffer
//!
//! The document is held as an ordered sequence of lines, split and rejoined
//! on `\n`. Parser-reported line numbers are 1-indexed; buffer indices are
//! 0-indexed. Insertion indices are clamped to the buffer length and
//! out-of-range replacements are ignored, mirroring array splice semantics.

/// Line-array representation of a CQL document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    /// Split a document into lines
    pub fn split(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    /// Rejoin the lines into a document
    pub fn join(&self) -> String {
        self.lines.join("\n")
    }

    /// Number of lines held
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when no lines are held
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Insert a line at the given 0-indexed position, clamped to the end
    pub fn insert(&mut self, index: usize, line: impl Into<String>) {
        let index = index.min(self.lines.len());
        self.lines.insert(index, line.into());
    }

    /// Overwrite the line at the given 0-indexed position
    pub fn replace(&mut self, index: usize, line: impl Into<String>) {
        if let Some(slot) = self.lines.get_mut(index) {
            *slot = line.into();
        }
    }

    /// Get a line by 0-indexed position
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }
}
