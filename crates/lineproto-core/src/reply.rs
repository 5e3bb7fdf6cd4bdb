//! Handler output

/// Lines a handler wants written to the output stream, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reply {
    lines: Vec<String>,
}

impl Reply {
    /// No output
    pub fn none() -> Self {
        Self::default()
    }

    /// Exactly one line
    pub fn line(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Reply {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for Reply {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}
