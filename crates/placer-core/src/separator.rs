//! Detection of the `{+key=value:count}` mistake.
//!
//! Writing a map entry without quotes and without a space after `:` makes the
//! whole entry one bare word, so the count is glued to the token. The compiler
//! reports that case with a dedicated error instead of a generic syntax one.

/// Returns `true` when brace-delimited text contains an unquoted
/// `±key=value:<digits>` entry.
///
/// Only called after JSON parsing of object-shaped text has failed. Text that is
/// not closed by `}` never matches.
pub(crate) fn looks_like_wrong_separator(text: &str) -> bool {
    let Some(body) = text
        .trim()
        .strip_prefix('{')
        .and_then(|t| t.strip_suffix('}'))
    else {
        return false;
    };

    split_top_level(body)
        .into_iter()
        .any(|entry| is_token_with_glued_count(entry.trim()))
}

fn is_token_with_glued_count(entry: &str) -> bool {
    if !(entry.starts_with('+') || entry.starts_with('-')) {
        return false;
    }
    let Some((token, count)) = entry.rsplit_once(':') else {
        return false;
    };
    token.contains('=') && !count.is_empty() && count.bytes().all(|b| b.is_ascii_digit())
}

/// Splits on commas that are not inside a double-quoted string.
fn split_top_level(body: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_string = false;
    let mut escaped = false;

    for (i, ch) in body.char_indices() {
        match ch {
            _ if escaped => escaped = false,
            '\\' if in_string => escaped = true,
            '"' => in_string = !in_string,
            ',' if !in_string => {
                parts.push(&body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&body[start..]);
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_glued_count() {
        assert!(looks_like_wrong_separator("{+region=us-east-2:2}"));
        assert!(looks_like_wrong_separator("{ -zone=bj:10 }"));
        assert!(looks_like_wrong_separator(r#"{"+zone=sh": 1, +zone=bj:2}"#));
    }

    #[test]
    fn unterminated_text_is_not_a_separator_mistake() {
        assert!(!looks_like_wrong_separator(
            r#"{+ne=sh,-zone=bj:1, "+zone=sh": 4"#
        ));
    }

    #[test]
    fn ignores_other_malformations() {
        let cases = [
            r#"{"+zone=sh": 1,}"#,
            "{+zone=sh}",
            "{+zone=sh: 2}",
            "{zone=sh:2}",
            "{+zone:2}",
            "{+zone=sh:}",
            "{+zone=sh:two}",
            r#"{"+zone=sh:2"}"#,
        ];

        for text in cases {
            assert!(!looks_like_wrong_separator(text), "false positive for {text:?}");
        }
    }

    #[test]
    fn commas_inside_strings_do_not_split() {
        assert_eq!(
            split_top_level(r#""+a=b,-c=d": 1, "+e=\"f,g\"": 2"#),
            vec![r#""+a=b,-c=d": 1"#, r#" "+e=\"f,g\"": 2"#]
        );
    }
}
