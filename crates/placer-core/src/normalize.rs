use std::borrow::Cow;

/// Rewrites single quotes to double quotes.
///
/// Lets specs be written in a relaxed `{'+zone=sh': 1}` style before they reach
/// the JSON parser. No other rewriting happens here.
pub fn normalize_quotes(text: &str) -> Cow<'_, str> {
    if text.contains('\'') {
        Cow::Owned(text.replace('\'', "\""))
    } else {
        Cow::Borrowed(text)
    }
}
