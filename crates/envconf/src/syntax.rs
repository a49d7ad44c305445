//! Lexical settings shared by the parser and the serializer.

/// Marker that starts a comment in the backing file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CommentDelimiter {
    /// `#`
    #[default]
    Hash,
    /// `//`
    DoubleSlash,
}

impl CommentDelimiter {
    pub const fn as_str(self) -> &'static str {
        match self {
            CommentDelimiter::Hash => "#",
            CommentDelimiter::DoubleSlash => "//",
        }
    }
}

/// File syntax options.
///
/// Quoted values have no escape sequences: a double quote always ends the
/// quoted part of a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Syntax {
    pub comment: CommentDelimiter,
}

impl Syntax {
    pub const fn new(comment: CommentDelimiter) -> Self {
        Self { comment }
    }

    /// Drop everything from the first comment marker onward.
    pub(crate) fn strip_comment<'a>(&self, line: &'a str) -> &'a str {
        match line.find(self.comment.as_str()) {
            Some(index) => &line[..index],
            None => line,
        }
    }
}
