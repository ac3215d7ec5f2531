use conventional_grammar::{Commit, ErrorKind, Header, ParseOptions};
use proptest::prelude::*;

fn type_() -> impl Strategy<Value = String> {
    "[a-zA-Z]{1,10}"
}

fn scope() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9/_. -]{1,12}"
}

fn description() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9][a-zA-Z0-9 .,#()!:'-]{0,30}"
}

// Lines starting with a digit never look like a footer.
fn body() -> impl Strategy<Value = String> {
    prop::collection::vec("[0-9]([a-z0-9 .]{0,20}[a-z0-9.])?", 1..4)
        .prop_map(|paragraphs| paragraphs.join("\n\n"))
}

fn footer_token() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z-]{0,10}"
}

fn footer_value() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9]([a-zA-Z0-9 <>@.]{0,20}[a-zA-Z0-9>.])?"
}

fn footer() -> impl Strategy<Value = (String, &'static str, String)> {
    (
        footer_token(),
        prop_oneof![Just(": "), Just(" #")],
        footer_value(),
    )
}

fn render(
    ty: &str,
    scope: Option<&str>,
    bang: bool,
    desc: &str,
    body: Option<&str>,
    footers: &[(String, &str, String)],
) -> String {
    let mut message = ty.to_owned();
    if let Some(scope) = scope {
        message.push_str(&format!("({scope})"));
    }
    if bang {
        message.push('!');
    }
    message.push_str(&format!(": {desc}"));
    if let Some(body) = body {
        message.push_str(&format!("\n\n{body}"));
    }
    for (i, (token, sep, value)) in footers.iter().enumerate() {
        let lead = if i == 0 { "\n\n" } else { "\n" };
        message.push_str(&format!("{lead}{token}{sep}{value}"));
    }
    message
}

proptest! {
    #[test]
    fn header_without_scope(ty in type_(), desc in description()) {
        let line = format!("{ty}: {desc}");
        let header = Header::parse(&line).unwrap();
        prop_assert_eq!(header.type_().as_str(), ty.as_str());
        prop_assert_eq!(header.scope(), None);
        prop_assert!(!header.breaking());
        prop_assert_eq!(header.description(), desc.as_str());
    }

    #[test]
    fn header_with_scope(ty in type_(), scope in scope(), desc in description()) {
        let line = format!("{ty}({scope}): {desc}");
        let header = Header::parse(&line).unwrap();
        prop_assert_eq!(header.scope().unwrap().as_str(), scope.as_str());
        prop_assert!(!header.breaking());
        prop_assert_eq!(header.description(), desc.as_str());
    }

    #[test]
    fn header_bang_is_breaking(
        ty in type_(),
        scope in proptest::option::of(scope()),
        desc in description(),
    ) {
        let line = match &scope {
            Some(scope) => format!("{ty}({scope})!: {desc}"),
            None => format!("{ty}!: {desc}"),
        };
        let header = Header::parse(&line).unwrap();
        prop_assert!(header.breaking());
        prop_assert_eq!(header.scope().map(|s| s.as_str()), scope.as_deref());
    }

    #[test]
    fn header_without_type_fails(desc in description()) {
        let err = Header::parse(&format!(": {desc}")).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::EmptyType);
    }

    #[test]
    fn header_empty_description(ty in type_()) {
        let line = format!("{ty}!:");
        let err = Header::parse(&line).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::EmptyDescription);

        let options = ParseOptions::new().allow_empty_description(true);
        let header = Header::parse_with(&line, &options).unwrap();
        prop_assert_eq!(header.description(), "");
        prop_assert!(header.breaking());
    }

    #[test]
    fn rendered_commit_reparses_identically(
        ty in type_(),
        scope in proptest::option::of(scope()),
        bang in any::<bool>(),
        desc in description(),
        body in proptest::option::of(body()),
        footers in prop::collection::vec(footer(), 0..4),
    ) {
        let message = render(&ty, scope.as_deref(), bang, &desc, body.as_deref(), &footers);
        let commit = Commit::parse(&message).unwrap();

        prop_assert_eq!(commit.type_().as_str(), ty.as_str());
        prop_assert_eq!(commit.scope().map(|s| s.as_str()), scope.as_deref());
        prop_assert_eq!(commit.description(), desc.as_str());
        prop_assert_eq!(commit.body(), body.as_deref());
        prop_assert_eq!(commit.footers().len(), footers.len());
        for (parsed, (token, sep, value)) in commit.footers().iter().zip(&footers) {
            prop_assert_eq!(parsed.token().as_str(), token.as_str());
            prop_assert_eq!(parsed.separator().as_str(), *sep);
            prop_assert_eq!(parsed.value(), value.as_str());
        }

        let rendered = commit.to_string();
        prop_assert_eq!(&rendered, &message);
        prop_assert_eq!(Commit::parse(&rendered).unwrap(), commit);
    }

    #[test]
    fn breaking_propagation(
        bang in any::<bool>(),
        tokens in prop::collection::vec(
            prop_oneof![
                Just("BREAKING CHANGE"),
                Just("BREAKING-CHANGE"),
                Just("breaking-change"),
                Just("Breaking-Change"),
                Just("Refs"),
                Just("Reviewed-by"),
            ],
            0..4,
        ),
    ) {
        let footers: Vec<_> = tokens
            .iter()
            .map(|token| ((*token).to_owned(), ": ", "x".to_owned()))
            .collect();
        let message = render("feat", None, bang, "desc", None, &footers);
        let commit = Commit::parse(&message).unwrap();

        let expected = bang
            || tokens
                .iter()
                .any(|token| *token == "BREAKING CHANGE" || *token == "BREAKING-CHANGE");
        prop_assert_eq!(commit.breaking(), expected);
    }

    #[test]
    fn footer_order_stops_at_malformed_line(
        footers in prop::collection::vec(footer(), 1..6),
        cut in any::<prop::sample::Index>(),
    ) {
        // At least one footer has to come first to mark the boundary.
        let cut = 1 + cut.index(footers.len());
        let mut lines: Vec<String> = footers
            .iter()
            .map(|(token, sep, value)| format!("{token}{sep}{value}"))
            .collect();
        lines.insert(cut, "0 is not a footer".to_owned());
        let message = format!("fix: desc\n\n{}", lines.join("\n"));
        let commit = Commit::parse(&message).unwrap();

        prop_assert_eq!(commit.footers().len(), cut);
        for (parsed, (token, _, value)) in commit.footers().iter().zip(&footers) {
            prop_assert_eq!(parsed.token().as_str(), token.as_str());
            prop_assert_eq!(parsed.value(), value.as_str());
        }
    }
}
