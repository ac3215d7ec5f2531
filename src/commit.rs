//! The conventional commit type and its components.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use winnow::error::{ContextError, ErrMode};
use winnow::Parser;

use crate::lines::is_blank;
use crate::parser::{self, BREAKING_ARROW, BREAKING_PHRASE};
use crate::{Error, ErrorKind, ParseOptions};

/// A conventional commit.
///
/// Built in one go by [`Commit::parse`]; the header, body and footers all
/// borrow from the parsed message.
///
/// Equality compares the header, body and footers. The raw
/// [`Commit::footer_block`] is not compared.
#[derive(Clone, Debug, Eq)]
pub struct Commit<'a> {
    header: Header<'a>,
    body: Option<&'a str>,
    footers: Vec<Footer<'a>>,
    footer_block: Option<&'a str>,
}

impl<'a> Commit<'a> {
    /// Create a new Conventional Commit based on the provided commit message
    /// string.
    ///
    /// # Errors
    ///
    /// This function returns an error if the header line does not conform to
    /// the Conventional Commit specification. The body and footers never
    /// fail the parse: footer parsing stops at the first malformed line.
    pub fn parse(string: &'a str) -> Result<Self, Error> {
        Self::parse_with(string, &ParseOptions::default())
    }

    /// Like [`Commit::parse`], with explicit [`ParseOptions`].
    ///
    /// # Errors
    ///
    /// See [`Commit::parse`].
    pub fn parse_with(string: &'a str, options: &ParseOptions) -> Result<Self, Error> {
        let (header, remainder) = Header::parse_partial(string, options)?;
        let (body, footer_block) = parser::split_body(remainder);
        let footers = footer_block
            .map(parser::footers)
            .unwrap_or_default()
            .into_iter()
            .map(Footer::from_parts)
            .collect();

        Ok(Self {
            header,
            body,
            footers,
            footer_block,
        })
    }

    /// The header line of the commit.
    pub fn header(&self) -> &Header<'a> {
        &self.header
    }

    /// The type of the commit.
    pub fn type_(&self) -> Type<'a> {
        self.header.type_()
    }

    /// The optional scope of the commit.
    pub fn scope(&self) -> Option<Scope<'a>> {
        self.header.scope()
    }

    /// The commit description.
    pub fn description(&self) -> &'a str {
        self.header.description()
    }

    /// The commit body, containing a more detailed explanation of the commit
    /// changes.
    pub fn body(&self) -> Option<&'a str> {
        self.body
    }

    /// A flag to signal that the commit contains breaking changes.
    ///
    /// This flag is set either when the commit has an exclamation mark after
    /// the message type and scope, e.g.:
    /// ```text
    /// feat(scope)!: this is a breaking change
    /// ```
    ///
    /// Or when a `BREAKING CHANGE: ` (or `BREAKING-CHANGE: `) footer is
    /// defined:
    /// ```text
    /// feat: my commit description
    ///
    /// BREAKING CHANGE: this is a breaking change
    /// ```
    pub fn breaking(&self) -> bool {
        self.header.breaking() || self.footers.iter().any(Footer::breaking)
    }

    /// Explanation for the breaking change.
    ///
    /// Note: if no `BREAKING CHANGE` footer is provided, the `description` is expected to describe
    /// the breaking change.
    pub fn breaking_description(&self) -> Option<&'a str> {
        self.footers
            .iter()
            .find(|footer| footer.breaking())
            .map(Footer::value)
            .or_else(|| self.header.breaking().then(|| self.description()))
    }

    /// Any footer.
    ///
    /// A footer is similar to a Git trailer, with the exception of not
    /// requiring whitespace before newlines.
    ///
    /// See: <https://git-scm.com/docs/git-interpret-trailers>
    pub fn footers(&self) -> &[Footer<'a>] {
        &self.footers
    }

    /// The raw text starting at the first footer-like line.
    ///
    /// Footer parsing stops at the first line that is not a footer, so
    /// `footers()` may cover only part of this block.
    pub fn footer_block(&self) -> Option<&'a str> {
        self.footer_block
    }
}

impl PartialEq for Commit<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.header == other.header && self.body == other.body && self.footers == other.footers
    }
}

impl fmt::Display for Commit<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.header, f)?;

        if let Some(body) = self.body() {
            write!(f, "\n\n{body}")?;
        }

        for (i, footer) in self.footers().iter().enumerate() {
            let lead = if i == 0 { "\n\n" } else { "\n" };
            write!(f, "{lead}{footer}")?;
        }

        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Commit<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Commit", 6)?;
        state.serialize_field("type", &self.type_())?;
        state.serialize_field("scope", &self.scope())?;
        state.serialize_field("breaking", &self.breaking())?;
        state.serialize_field("description", self.description())?;
        state.serialize_field("body", &self.body())?;
        state.serialize_field("footers", self.footers())?;
        state.end()
    }
}

/// The first line of a commit: `type(scope)!: description`.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Header<'a> {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    ty: Type<'a>,
    scope: Option<Scope<'a>>,
    breaking: bool,
    description: &'a str,
}

impl<'a> Header<'a> {
    /// Parse a single header line.
    ///
    /// A trailing line terminator is accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the line is not a valid header, or if non-blank
    /// lines follow it.
    pub fn parse(line: &'a str) -> Result<Self, Error> {
        Self::parse_with(line, &ParseOptions::default())
    }

    /// Like [`Header::parse`], with explicit [`ParseOptions`].
    ///
    /// # Errors
    ///
    /// See [`Header::parse`].
    pub fn parse_with(line: &'a str, options: &ParseOptions) -> Result<Self, Error> {
        let (header, remainder) = Self::parse_partial(line, options)?;
        if !is_blank(remainder) {
            return Err(Error::new(ErrorKind::TrailingInput).with_fragment(remainder));
        }
        Ok(header)
    }

    /// Parse the first line of `string`, returning the header and everything
    /// after the line's terminator.
    pub(crate) fn parse_partial(
        string: &'a str,
        options: &ParseOptions,
    ) -> Result<(Self, &'a str), Error> {
        let (line, remainder) = parser::split_header(string);
        let summary = parser::summary(line, options.allows_empty_description())
            .map_err(|kind| Error::new(kind).with_fragment(line))?;

        let header = Self {
            ty: Type::new_unchecked(summary.type_),
            scope: summary.scope.map(Scope::new_unchecked),
            breaking: summary.breaking,
            description: summary.description,
        };
        Ok((header, remainder))
    }

    /// The type of the commit.
    pub fn type_(&self) -> Type<'a> {
        self.ty
    }

    /// The optional scope of the commit.
    pub fn scope(&self) -> Option<Scope<'a>> {
        self.scope
    }

    /// Whether the header carries the `!` marker.
    pub fn breaking(&self) -> bool {
        self.breaking
    }

    /// The commit description.
    pub fn description(&self) -> &'a str {
        self.description
    }
}

impl fmt::Display for Header<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ty.as_str())?;

        if let Some(scope) = &self.scope {
            write!(f, "({scope})")?;
        }

        if self.breaking {
            f.write_str("!")?;
        }

        write!(f, ": {}", self.description)
    }
}

/// A single footer.
///
/// A footer is similar to a Git trailer, with the exception of not requiring
/// whitespace before newlines.
///
/// See: <https://git-scm.com/docs/git-interpret-trailers>
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Footer<'a> {
    token: FooterToken<'a>,
    #[cfg_attr(feature = "serde", serde(rename = "separator"))]
    sep: FooterSeparator,
    value: &'a str,
}

impl<'a> Footer<'a> {
    /// Piece together a footer.
    pub const fn new(token: FooterToken<'a>, sep: FooterSeparator, value: &'a str) -> Self {
        Self { token, sep, value }
    }

    /// Parse a single footer line, e.g. `Reviewed-by: Z` or `Refs #133`.
    ///
    /// # Errors
    ///
    /// Returns an error if the line has no token or separator, or if
    /// non-blank lines follow it.
    pub fn parse(line: &'a str) -> Result<Self, Error> {
        let mut i = line;
        let parts = parser::footer(&mut i).map_err(|kind| Error::new(kind).with_fragment(line))?;
        if !is_blank(i) {
            return Err(Error::new(ErrorKind::TrailingInput).with_fragment(i.trim_start()));
        }
        Ok(Self::from_parts(parts))
    }

    fn from_parts((token, sep, value): parser::FooterParts<'a>) -> Self {
        let sep = match sep {
            " #" => FooterSeparator::Ref,
            _ => FooterSeparator::Value,
        };
        Self::new(FooterToken::new_unchecked(token), sep, value)
    }

    /// The token of the footer.
    pub const fn token(&self) -> FooterToken<'a> {
        self.token
    }

    /// The separator between the footer token and its value.
    pub const fn separator(&self) -> FooterSeparator {
        self.sep
    }

    /// The value of the footer.
    pub const fn value(&self) -> &'a str {
        self.value
    }

    /// A flag to signal that the footer describes a breaking change.
    pub fn breaking(&self) -> bool {
        self.token.breaking()
    }
}

impl fmt::Display for Footer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.token, self.sep, self.value)
    }
}

/// The type of separator between the footer token and value.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum FooterSeparator {
    /// ": "
    Value,

    /// " #"
    Ref,
}

impl FooterSeparator {
    /// Access `str` representation of FooterSeparator
    pub fn as_str(self) -> &'static str {
        match self {
            FooterSeparator::Value => ": ",
            FooterSeparator::Ref => " #",
        }
    }
}

impl Deref for FooterSeparator {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl PartialEq<&'_ str> for FooterSeparator {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for FooterSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl FromStr for FooterSeparator {
    type Err = Error;

    fn from_str(sep: &str) -> Result<Self, Self::Err> {
        match sep {
            ": " => Ok(FooterSeparator::Value),
            " #" => Ok(FooterSeparator::Ref),
            _ => Err(Error::new(ErrorKind::MissingSeparator).with_fragment(sep)),
        }
    }
}

macro_rules! unicase_components {
    ($($ty:ident),+) => (
        $(
            /// A component of the conventional commit.
            ///
            /// Compares case-insensitively.
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
            pub struct $ty<'a>(unicase::UniCase<&'a str>);

            impl<'a> $ty<'a> {
                /// See `parse` for ensuring the data is valid.
                pub const fn new_unchecked(value: &'a str) -> Self {
                    $ty(unicase::UniCase::unicode(value))
                }

                /// Access `str` representation
                pub fn as_str(&self) -> &'a str {
                    self.0.into_inner()
                }
            }

            impl Deref for $ty<'_> {
                type Target = str;

                fn deref(&self) -> &Self::Target {
                    self.as_str()
                }
            }

            impl PartialEq<&'_ str> for $ty<'_> {
                fn eq(&self, other: &&str) -> bool {
                    *self == $ty::new_unchecked(*other)
                }
            }

            impl fmt::Display for $ty<'_> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(&self.0, f)
                }
            }

            #[cfg(feature = "serde")]
            impl serde::Serialize for $ty<'_> {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serializer.serialize_str(self)
                }
            }
        )+
    )
}

unicase_components![Type, Scope, FooterToken];

/// Run a component grammar over the whole of `string`.
fn parse_component<'a>(
    string: &'a str,
    mut grammar: impl Parser<&'a str, &'a str, ErrMode<ContextError>>,
    kind: ErrorKind,
) -> Result<&'a str, Error> {
    let mut i = string;
    let parsed = grammar
        .parse_next(&mut i)
        .map_err(|_| Error::new(kind).with_fragment(string))?;
    if !i.is_empty() {
        return Err(Error::new(ErrorKind::TrailingInput).with_fragment(i));
    }
    Ok(parsed)
}

impl<'a> Type<'a> {
    /// Parse a `str` into a `Type`.
    pub fn parse(string: &'a str) -> Result<Self, Error> {
        parse_component(string, parser::type_, ErrorKind::EmptyType).map(Type::new_unchecked)
    }
}

/// Common commit types
impl Type<'static> {
    /// Commit type when introducing new features (correlates with `minor` in semver)
    pub const FEAT: Type<'static> = Type::new_unchecked("feat");
    /// Commit type when patching a bug (correlates with `patch` in semver)
    pub const FIX: Type<'static> = Type::new_unchecked("fix");
    /// Possible commit type when reverting changes.
    pub const REVERT: Type<'static> = Type::new_unchecked("revert");
    /// Possible commit type for changing documentation.
    pub const DOCS: Type<'static> = Type::new_unchecked("docs");
    /// Possible commit type for changing code style.
    pub const STYLE: Type<'static> = Type::new_unchecked("style");
    /// Possible commit type for refactoring code structure.
    pub const REFACTOR: Type<'static> = Type::new_unchecked("refactor");
    /// Possible commit type for performance optimizations.
    pub const PERF: Type<'static> = Type::new_unchecked("perf");
    /// Possible commit type for addressing tests.
    pub const TEST: Type<'static> = Type::new_unchecked("test");
    /// Possible commit type for other things.
    pub const CHORE: Type<'static> = Type::new_unchecked("chore");
}

impl<'a> Scope<'a> {
    /// Parse a `str` into a `Scope`.
    pub fn parse(string: &'a str) -> Result<Self, Error> {
        parse_component(string, parser::scope, ErrorKind::InvalidScope).map(Scope::new_unchecked)
    }
}

impl<'a> FooterToken<'a> {
    /// Parse a `str` into a `FooterToken`.
    ///
    /// Only the plain token grammar applies here; `BREAKING CHANGE` is a token
    /// only in front of a separator.
    pub fn parse(string: &'a str) -> Result<Self, Error> {
        parse_component(string, parser::token, ErrorKind::EmptyToken)
            .map(FooterToken::new_unchecked)
    }

    /// A flag to signal that the footer describes a breaking change.
    ///
    /// Unlike equality, this is case-sensitive: `breaking change` is an
    /// ordinary token.
    pub fn breaking(&self) -> bool {
        let token = self.as_str();
        token == BREAKING_PHRASE || token == BREAKING_ARROW
    }
}
