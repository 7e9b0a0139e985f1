/// Half-open `[start, end)` interval of character offsets in one buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
}

impl TextSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of characters covered (0 for inverted spans)
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One literal occurrence of the query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Index of the span the occurrence was found in
    pub span_index: usize,
    /// Absolute character offset of the first matched character
    pub start: usize,
    /// Absolute character offset one past the last matched character
    pub end: usize,
}

impl Match {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A match that received a label and can be jumped to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub matched: Match,
    pub label: char,
}

impl Target {
    pub fn start(&self) -> usize {
        self.matched.start
    }

    pub fn end(&self) -> usize {
        self.matched.end
    }
}
