//! Entity ID Generator
//!
//! Produces string identifiers of the form `<kind>-<suffix>`, where the suffix
//! is 16 random alphanumeric characters (e.g. `thread-h7Xk2pQm9ZrT4vBn`).

use rand::{distr::Alphanumeric, Rng};

/// Length of the random part of every generated id.
pub const ID_SUFFIX_LENGTH: usize = 16;

/// Entity kinds that receive generated ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    User,
    Thread,
    Comment,
    Reply,
    Like,
}

impl IdKind {
    /// Prefix placed before the random suffix.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Thread => "thread",
            Self::Comment => "comment",
            Self::Reply => "reply",
            Self::Like => "like",
        }
    }
}

/// Random id generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdGenerator;

impl IdGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a new id for the given entity kind.
    pub fn generate(&self, kind: IdKind) -> String {
        let suffix: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(ID_SUFFIX_LENGTH)
            .map(char::from)
            .collect();

        format!("{}-{}", kind.prefix(), suffix)
    }
}
