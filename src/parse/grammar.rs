use winnow::ascii::till_line_ending;
use winnow::combinator::{alt, cut_err, opt, preceded, repeat, separated};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{rest, take_while};

use crate::RuleMap;

// -- Whitespace & comments --------------------------------------------------

fn ws(input: &mut &str) -> ModalResult<()> {
    let _: () = repeat(
        0..,
        alt((
            take_while(1.., |c: char| c.is_ascii_whitespace()).void(),
            ('#', till_line_ending).void(),
        )),
    )
    .parse_next(input)?;
    Ok(())
}

fn inline_ws(input: &mut &str) -> ModalResult<()> {
    take_while(0.., |c: char| c == ' ' || c == '\t')
        .void()
        .parse_next(input)
}

// -- Field paths & rule tokens ----------------------------------------------

fn field_path<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| {
        c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '*' | '-')
    })
    .parse_next(input)
}

fn token<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| !c.is_whitespace() && c != '|' && c != '#').parse_next(input)
}

fn token_list(input: &mut &str) -> ModalResult<Vec<String>> {
    separated(1.., token.map(str::to_owned), (ws, '|', ws)).parse_next(input)
}

/// Split a single rule token into its name and optional `:`-parameter.
///
/// `"min:3"` yields `("min", Some("3"))`, `"required"` yields `("required", None)`.
pub(crate) fn rule_token<'i>(input: &mut &'i str) -> ModalResult<(&'i str, Option<&'i str>)> {
    (
        take_while(1.., |c: char| c.is_ascii_alphabetic() || c == '_'),
        opt(preceded(':', rest)),
    )
        .parse_next(input)
}

// -- Entries ----------------------------------------------------------------

fn entry(input: &mut &str) -> ModalResult<(String, Vec<String>)> {
    ws.parse_next(input)?;
    let path = field_path.parse_next(input)?;
    inline_ws.parse_next(input)?;
    cut_err(':')
        .context(StrContext::Expected(StrContextValue::CharLiteral(':')))
        .parse_next(input)?;
    ws.parse_next(input)?;

    let tokens = cut_err(token_list)
        .context(StrContext::Expected(StrContextValue::Description(
            "rule list",
        )))
        .parse_next(input)?;

    Ok((path.to_owned(), tokens))
}

// -- Top-level parser -------------------------------------------------------

pub fn parse_rule_map(input: &mut &str) -> ModalResult<RuleMap> {
    let entries: Vec<(String, Vec<String>)> = repeat(0.., entry).parse_next(input)?;
    ws.parse_next(input)?;
    Ok(entries.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use crate::parse::parse;

    use super::*;

    fn entries(input: &str) -> Vec<(String, Vec<String>)> {
        parse(input)
            .unwrap()
            .iter()
            .map(|(k, v)| (k.to_owned(), v.to_vec()))
            .collect()
    }

    #[test]
    fn parse_single_entry() {
        let result = entries("name: required | string");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].0, "name");
        assert_eq!(result[0].1, ["required", "string"]);
    }

    #[test]
    fn parse_parametrized_tokens() {
        let result = entries("tags.*: string | in:foo,bar | max:3");
        assert_eq!(result[0].0, "tags.*");
        assert_eq!(result[0].1, ["string", "in:foo,bar", "max:3"]);
    }

    #[test]
    fn parse_multiple_entries_with_comments() {
        let result = entries(
            "# users\nuser.name: required | string # trailing\n\nuser.age: number\n",
        );
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].0, "user.name");
        assert_eq!(result[0].1, ["required", "string"]);
        assert_eq!(result[1].0, "user.age");
        assert_eq!(result[1].1, ["number"]);
    }

    #[test]
    fn parse_rule_list_continued_on_next_line() {
        let result = entries("name: required |\n    string |\n    min:3");
        assert_eq!(result[0].1, ["required", "string", "min:3"]);
    }

    #[test]
    fn parse_empty_input() {
        assert!(entries("").is_empty());
        assert!(entries("   # only a comment\n").is_empty());
    }

    #[test]
    fn missing_colon_is_an_error() {
        assert!(parse("name required").is_err());
    }

    #[test]
    fn missing_rules_is_an_error() {
        assert!(parse("name:").is_err());
        assert!(parse("name: required |").is_err());
    }

    #[test]
    fn rule_token_splits_parameter() {
        assert_eq!(rule_token.parse("required").unwrap(), ("required", None));
        assert_eq!(rule_token.parse("min:3").unwrap(), ("min", Some("3")));
        assert_eq!(
            rule_token.parse("in:a,b c").unwrap(),
            ("in", Some("a,b c"))
        );
        assert_eq!(rule_token.parse("in:").unwrap(), ("in", Some("")));
    }

    #[test]
    fn rule_token_rejects_garbage() {
        assert!(rule_token.parse("").is_err());
        assert!(rule_token.parse("min3").is_err());
        assert!(rule_token.parse(":3").is_err());
    }
}
