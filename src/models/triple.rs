// file: src/models/triple.rs
// description: head/relation/dependent triples produced from a dependency graph

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TaggedWord {
    pub word: String,
    pub tag: String,
}

impl TaggedWord {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }
}

impl fmt::Display for TaggedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.word, self.tag)
    }
}

/// `((head word, head tag), relation, (dependent word, dependent tag))`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DependencyTriple {
    pub head: TaggedWord,
    pub relation: String,
    pub dependent: TaggedWord,
}

impl fmt::Display for DependencyTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {:?}, {})", self.head, self.relation, self.dependent)
    }
}
