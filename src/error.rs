//! All errors related to parsing commit messages.

use std::fmt;

/// The error returned when parsing a commit, header or footer fails.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Error {
    kind: ErrorKind,

    fragment: Option<String>,
}

impl Error {
    /// Create a new error from a `ErrorKind`.
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            fragment: None,
        }
    }

    /// Attach the line (or component) that failed to parse.
    pub(crate) fn with_fragment(mut self, fragment: &str) -> Self {
        self.fragment = Some(fragment.to_owned());
        self
    }

    /// The kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The input line that was rejected, when known.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.fragment {
            Some(fragment) => write!(f, "{}: {fragment:?}", self.kind),
            None => fmt::Display::fmt(&self.kind, f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

/// All possible error kinds returned when parsing a conventional commit.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The header line does not start with an alphabetic type.
    EmptyType,

    /// An opening `(` is not closed by a `)`, or the scope is empty.
    InvalidScope,

    /// The header or footer lacks its `": "` (or, for footers, `" #"`)
    /// separator.
    MissingSeparator,

    /// The header description is empty.
    ///
    /// Only reported in strict mode, see
    /// [`ParseOptions::allow_empty_description`][crate::ParseOptions::allow_empty_description].
    EmptyDescription,

    /// The footer line does not start with a token.
    EmptyToken,

    /// A standalone header, footer or component parse left input behind.
    TrailingInput,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ErrorKind::{
            EmptyDescription, EmptyToken, EmptyType, InvalidScope, MissingSeparator,
            TrailingInput,
        };

        match self {
            EmptyType => f.write_str("missing type definition"),
            InvalidScope => f.write_str("invalid scope format"),
            MissingSeparator => f.write_str("missing separator"),
            EmptyDescription => f.write_str("missing commit description"),
            EmptyToken => f.write_str("missing footer token"),
            TrailingInput => f.write_str("unexpected trailing input"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_includes_fragment() {
        let err = Error::new(ErrorKind::MissingSeparator).with_fragment("fix bar: baz");
        assert_eq!(err.to_string(), r#"missing separator: "fix bar: baz""#);
        assert_eq!(err.fragment(), Some("fix bar: baz"));
    }

    #[test]
    fn display_without_fragment() {
        let err = Error::from(ErrorKind::EmptyType);
        assert_eq!(err.to_string(), "missing type definition");
        assert_eq!(err.kind(), ErrorKind::EmptyType);
    }
}
