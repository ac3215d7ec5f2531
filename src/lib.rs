//! A grammar engine for [Conventional Commit] messages.
//!
//! [conventional commit]: https://www.conventionalcommits.org
//!
//! A message is a header line (`type(scope)!: description`), an optional
//! free-form body and an optional block of trailer-style footers. Nothing
//! delimits the body from the footers: the first line that *looks* like a
//! footer (`Token: value`, `Token #value` or `BREAKING CHANGE`) starts the
//! footer block.
//!
//! # Example
//!
//! ```rust
//! use indoc::indoc;
//!
//! let message = indoc!("
//!     docs(example)!: add tested usage example
//!
//!     This example is tested using Rust's doctest capabilities. Having this
//!     example helps people understand how to use the parser.
//!
//!     BREAKING CHANGE: Going from nothing to something
//!     Co-Authored-By: Lisa Simpson <lisa@simpsons.fam>
//!     Closes #12
//! ");
//!
//! let commit = conventional_grammar::Commit::parse(message).unwrap();
//!
//! // You can access all components of the header.
//! assert_eq!(commit.type_(), conventional_grammar::DOCS);
//! assert_eq!(commit.scope().unwrap(), "example");
//! assert_eq!(commit.description(), "add tested usage example");
//!
//! // And the free-form commit body.
//! assert!(commit.body().unwrap().contains("helps people understand"));
//!
//! // If a commit is marked with a bang (`!`) OR has a footer with the token
//! // "BREAKING CHANGE", it is considered a "breaking" commit.
//! assert!(commit.breaking());
//!
//! // Footers keep their input order and provide access to their token and value.
//! assert_eq!(commit.footers()[0].value(), "Going from nothing to something");
//! assert_eq!(commit.footers()[1].token(), "Co-Authored-By");
//! assert_eq!(commit.footers()[1].value(), "Lisa Simpson <lisa@simpsons.fam>");
//!
//! // Two types of separators are supported, regular ": ", and " #":
//! assert_eq!(commit.footers()[2].separator(), " #");
//! assert_eq!(commit.footers()[2].value(), "12");
//! ```
//!
//! Headers and footers can also be checked on their own, e.g. by a commit
//! linter:
//!
//! ```rust
//! use conventional_grammar::{ErrorKind, Footer, Header, ParseOptions};
//!
//! let header = Header::parse("fix(ci)!: Fix iOS and tvOS versions").unwrap();
//! assert!(header.breaking());
//!
//! let err = Header::parse("fix(ci)!:").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::EmptyDescription);
//!
//! let lenient = ParseOptions::new().allow_empty_description(true);
//! assert_eq!(Header::parse_with("fix(ci)!:", &lenient).unwrap().description(), "");
//!
//! let footer = Footer::parse("Refs #133").unwrap();
//! assert_eq!(footer.token(), "Refs");
//! ```

#![warn(missing_docs)]

mod commit;
mod error;
mod lines;
mod options;
mod parser;

pub use commit::{Commit, Footer, FooterSeparator, FooterToken, Header, Scope, Type};
pub use error::{Error, ErrorKind};
pub use options::ParseOptions;

/// Commit type when introducing new features (correlates with `minor` in semver)
pub const FEAT: Type<'static> = Type::FEAT;
/// Commit type when patching a bug (correlates with `patch` in semver)
pub const FIX: Type<'static> = Type::FIX;
/// Possible commit type when reverting changes.
pub const REVERT: Type<'static> = Type::REVERT;
/// Possible commit type for changing documentation.
pub const DOCS: Type<'static> = Type::DOCS;
/// Possible commit type for changing code style.
pub const STYLE: Type<'static> = Type::STYLE;
/// Possible commit type for refactoring code structure.
pub const REFACTOR: Type<'static> = Type::REFACTOR;
/// Possible commit type for performance optimizations.
pub const PERF: Type<'static> = Type::PERF;
/// Possible commit type for addressing tests.
pub const TEST: Type<'static> = Type::TEST;
/// Possible commit type for other things.
pub const CHORE: Type<'static> = Type::CHORE;

#[doc = include_str!("../README.md")]
#[cfg(doctest)]
pub struct ReadmeDoctests;
