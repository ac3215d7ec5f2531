//! Parser configuration.

/// Knobs for how strictly a commit header is validated.
///
/// The default is strict: a header without a description is rejected with
/// [`ErrorKind::EmptyDescription`][crate::ErrorKind::EmptyDescription].
///
/// With the `serde` feature enabled this can be read from a linter's config
/// file:
///
/// ```toml
/// allow-empty-description = true
/// ```
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ParseOptions {
    allow_empty_description: bool,
}

impl ParseOptions {
    /// Strict options, same as [`ParseOptions::default`].
    pub const fn new() -> Self {
        Self {
            allow_empty_description: false,
        }
    }

    /// Accept headers such as `fix!:` whose description is empty.
    pub const fn allow_empty_description(mut self, yes: bool) -> Self {
        self.allow_empty_description = yes;
        self
    }

    /// Whether empty descriptions are accepted.
    pub const fn allows_empty_description(&self) -> bool {
        self.allow_empty_description
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_is_strict() {
        assert!(!ParseOptions::default().allows_empty_description());
        assert_eq!(ParseOptions::new(), ParseOptions::default());
    }

    #[test]
    fn builder() {
        let options = ParseOptions::new().allow_empty_description(true);
        assert!(options.allows_empty_description());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_kebab_case() {
        use serde_test::Token;

        serde_test::assert_de_tokens(
            &ParseOptions::new().allow_empty_description(true),
            &[
                Token::Struct {
                    name: "ParseOptions",
                    len: 1,
                },
                Token::Str("allow-empty-description"),
                Token::Bool(true),
                Token::StructEnd,
            ],
        );
        serde_test::assert_de_tokens(
            &ParseOptions::default(),
            &[
                Token::Struct {
                    name: "ParseOptions",
                    len: 0,
                },
                Token::StructEnd,
            ],
        );
    }
}
