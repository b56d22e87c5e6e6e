use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineStats {
    pub total: usize,
    pub code: usize,
    /// Always 0: comment detection is not implemented.
    pub comment: usize,
}

impl LineStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            code: 0,
            comment: 0,
        }
    }

    /// Number of exactly-empty segments.
    #[must_use]
    pub const fn blank(&self) -> usize {
        self.total.saturating_sub(self.code)
    }
}

/// Classify `content` by splitting on `\n`.
///
/// Every segment counts toward `total`, including the empty segment after a
/// trailing newline, so empty content yields `total == 1`. Only zero-length
/// segments are blank; whitespace-only and `\r`-only segments count as code.
#[must_use]
pub fn count_lines(content: &str) -> LineStats {
    let mut stats = LineStats::new();

    for segment in content.split('\n') {
        stats.total += 1;
        if !segment.is_empty() {
            stats.code += 1;
        }
    }

    stats
}

#[cfg(test)]
#[path = "lines_tests.rs"]
mod tests;
