// Mon Feb 9 2026 - Alex

use crate::error::ExtractError;

/// Resume point returned by [`PathBuilder::push`]; handing it back to
/// [`PathBuilder::pop`] restores the arena to its pre-push state.
#[derive(Debug, Clone, Copy)]
pub struct PathMarker {
    len: usize,
    depth: usize,
}

/// The single qualified-path arena of a run.
///
/// The buffer grows as needed, but the configured `max_length` is still
/// enforced as a hard limit so that overlong names abort before any
/// malformed record can be written.
#[derive(Debug)]
pub struct PathBuilder {
    buf: String,
    starts: Vec<usize>,
    separator: String,
    capitalize: bool,
    max_length: usize,
}

impl PathBuilder {
    pub fn new(separator: impl Into<String>, capitalize: bool, max_length: usize) -> Self {
        Self {
            buf: String::with_capacity(max_length),
            starts: Vec::new(),
            separator: separator.into(),
            capitalize,
            max_length,
        }
    }

    /// Appends the separator (when the arena is non-empty) and `segment`,
    /// returning the marker for the position before this push.
    pub fn push(&mut self, segment: &str) -> Result<PathMarker, ExtractError> {
        let marker = PathMarker {
            len: self.buf.len(),
            depth: self.starts.len(),
        };

        if !self.buf.is_empty() {
            append_transformed(&mut self.buf, &self.separator, self.capitalize);
        }
        self.starts.push(self.buf.len());
        append_transformed(&mut self.buf, segment, self.capitalize);

        if self.buf.len() > self.max_length {
            return Err(ExtractError::PathOverflow {
                contents: self.buf.clone(),
                limit: self.max_length,
                suggested: self.max_length * 2,
            });
        }
        Ok(marker)
    }

    /// Truncates the arena back to a marker returned by an earlier `push`.
    pub fn pop(&mut self, marker: PathMarker) {
        debug_assert!(marker.len <= self.buf.len());
        self.buf.truncate(marker.len);
        self.starts.truncate(marker.depth);
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Number of segments currently in the arena.
    pub fn depth(&self) -> usize {
        self.starts.len()
    }
}

fn append_transformed(buf: &mut String, text: &str, capitalize: bool) {
    if capitalize {
        buf.extend(text.chars().map(|c| c.to_ascii_uppercase()));
    } else {
        buf.push_str(text);
    }
}
