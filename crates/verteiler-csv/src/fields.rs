//! Field tokenization within one logical line.

use crate::dialect::Dialect;

/// Splits one logical line into ordered field values.
///
/// A field that begins with the quote character runs verbatim up to the
/// next quote, so it may contain the separator and record breaks. The
/// closing quote and one following separator are skipped. Any other
/// field runs to the next separator or the end of the line.
///
/// Exactly one separator is consumed after each field, which is what
/// keeps a trailing separator from silently dropping its empty field:
/// the field count always equals the number of top-level separators
/// plus one. An embedded quote character cannot be represented; the
/// dialect has no escape for it.
///
/// Tokenization never fails. The caller validates the field count
/// against the header afterwards.
#[must_use]
pub fn split_fields(line: &str, separator: char) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut rest = line;
    loop {
        let (value, remainder) = next_field(rest, separator);
        fields.push(value);
        match remainder {
            Some(after_separator) => rest = after_separator,
            None => break,
        }
    }
    fields
}

/// Consumes one field, returning its value and the text following the
/// next separator, or `None` when the line is exhausted.
fn next_field(rest: &str, separator: char) -> (&str, Option<&str>) {
    if let Some(body) = rest.strip_prefix(Dialect::QUOTE) {
        match body.find(Dialect::QUOTE) {
            Some(end) => {
                let after_quote = &body[end + Dialect::QUOTE.len_utf8()..];
                (&body[..end], after_quote.strip_prefix(separator))
            }
            // Unterminated quote: the rest of the line is the value.
            None => (body, None),
        }
    } else {
        match rest.find(separator) {
            Some(end) => (&rest[..end], Some(&rest[end + separator.len_utf8()..])),
            None => (rest, None),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields() {
        assert_eq!(split_fields("a,b,c", ','), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_single_field() {
        assert_eq!(split_fields("abc", ','), vec!["abc"]);
    }

    #[test]
    fn test_empty_line_is_one_empty_field() {
        assert_eq!(split_fields("", ','), vec![""]);
    }

    #[test]
    fn test_trailing_separator_yields_trailing_empty_field() {
        assert_eq!(split_fields("a,", ','), vec!["a", ""]);
    }

    #[test]
    fn test_consecutive_separators() {
        assert_eq!(split_fields("a,,c", ','), vec!["a", "", "c"]);
    }

    #[test]
    fn test_quoted_field_keeps_separator() {
        assert_eq!(split_fields("\"a,b\",c", ','), vec!["a,b", "c"]);
    }

    #[test]
    fn test_quoted_field_keeps_trailing_separator() {
        assert_eq!(
            split_fields("Petra,\"Notiz mit Komma,\",phuber@test.de", ','),
            vec!["Petra", "Notiz mit Komma,", "phuber@test.de"]
        );
    }

    #[test]
    fn test_quoted_field_keeps_record_break() {
        assert_eq!(split_fields("\"a\nb\",c", ','), vec!["a\nb", "c"]);
    }

    #[test]
    fn test_quoted_empty_field() {
        assert_eq!(split_fields("\"\",b", ','), vec!["", "b"]);
    }

    #[test]
    fn test_quoted_field_at_end_of_line() {
        assert_eq!(split_fields("a,\"b\"", ','), vec!["a", "b"]);
    }

    #[test]
    fn test_quoted_field_followed_by_trailing_separator() {
        assert_eq!(split_fields("\"a\",", ','), vec!["a", ""]);
    }

    #[test]
    fn test_unterminated_quote_takes_the_rest() {
        assert_eq!(split_fields("a,\"b,c", ','), vec!["a", "b,c"]);
    }

    #[test]
    fn test_semicolon_separator() {
        assert_eq!(split_fields("a;b,c;d", ';'), vec!["a", "b,c", "d"]);
    }

    #[test]
    fn test_field_count_is_separator_count_plus_one() {
        for line in ["", "a", "a,b", "a,b,", ",,,", "\"x,y\",z"] {
            let separators = {
                let mut count = 0;
                let mut in_quotes = false;
                for ch in line.chars() {
                    match ch {
                        '"' => in_quotes = !in_quotes,
                        ',' if !in_quotes => count += 1,
                        _ => {}
                    }
                }
                count
            };
            assert_eq!(split_fields(line, ',').len(), separators + 1, "line: {line:?}");
        }
    }
}
