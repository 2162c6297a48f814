/// Writing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

/// Per-position class while classification is still running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextType {
    /// Inside a validated tag span. Set once from the tag spans and never
    /// reclassified.
    Tag,
    /// Not resolved yet.
    Default,
    LeftToRight,
    RightToLeft,
}

impl ContextType {
    /// A position that counts as a neighbour when resolving punctuation.
    pub fn is_resolved_direction(self) -> bool {
        matches!(self, ContextType::LeftToRight | ContextType::RightToLeft)
    }
}

impl From<Direction> for ContextType {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::LeftToRight => ContextType::LeftToRight,
            Direction::RightToLeft => ContextType::RightToLeft,
        }
    }
}

/// Per-position class once classification is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolvedType {
    Tag,
    LeftToRight,
    RightToLeft,
}

impl ResolvedType {
    /// Direction of the position, `None` for tags.
    pub fn direction(self) -> Option<Direction> {
        match self {
            ResolvedType::Tag => None,
            ResolvedType::LeftToRight => Some(Direction::LeftToRight),
            ResolvedType::RightToLeft => Some(Direction::RightToLeft),
        }
    }
}

impl From<Direction> for ResolvedType {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::LeftToRight => ResolvedType::LeftToRight,
            Direction::RightToLeft => ResolvedType::RightToLeft,
        }
    }
}

/// Output of the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// One entry per buffer position.
    pub types: Vec<ResolvedType>,
    /// `RightToLeft` when the string holds any right-to-left character.
    pub dominant: Direction,
}

impl Classification {
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
