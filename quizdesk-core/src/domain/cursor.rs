/// Current-question pointer for a quiz run.
///
/// A plain value: moving produces a new cursor, or `None` at either end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationCursor {
    index: usize,
    len: usize,
}

impl NavigationCursor {
    /// Cursor at the first of `len` questions (`None` for an empty quiz)
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of questions in the run
    pub fn total(&self) -> usize {
        self.len
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.len
    }

    pub fn next(self) -> Option<Self> {
        (!self.is_last()).then(|| Self {
            index: self.index + 1,
            ..self
        })
    }

    pub fn previous(self) -> Option<Self> {
        (!self.is_first()).then(|| Self {
            index: self.index - 1,
            ..self
        })
    }
}
