//! Escaping of Java character and string literals.

/// Escape a single character for use inside a character literal.
///
/// Single quotes are escaped, double quotes are not; other ISO control
/// characters without a dedicated escape sequence become `\uXXXX`.
pub fn escape_char(c: char) -> String {
    match c {
        '\u{8}' => "\\b".to_string(),
        '\t' => "\\t".to_string(),
        '\n' => "\\n".to_string(),
        '\u{c}' => "\\f".to_string(),
        '\r' => "\\r".to_string(),
        '\'' => "\\'".to_string(),
        '\\' => "\\\\".to_string(),
        c if c.is_control() => format!("\\u{:04x}", c as u32),
        c => c.to_string(),
    }
}

/// Render `value` as a string literal, including the surrounding quotes.
pub fn quote(value: &str) -> String {
    let mut result = String::with_capacity(value.len() + 2);
    result.push('"');
    for c in value.chars() {
        match c {
            '\'' => result.push('\''),
            '"' => result.push_str("\\\""),
            c => result.push_str(&escape_char(c)),
        }
    }
    result.push('"');
    result
}

/// Render `c` as a character literal, including the surrounding quotes.
pub fn quote_char(c: char) -> String {
    format!("'{}'", escape_char(c))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_escape_char() {
        assert_eq!(escape_char('a'), "a");
        assert_eq!(escape_char('\n'), "\\n");
        assert_eq!(escape_char('\''), "\\'");
        assert_eq!(escape_char('"'), "\"");
        assert_eq!(escape_char('\\'), "\\\\");
        assert_eq!(escape_char('\u{0}'), "\\u0000");
        assert_eq!(escape_char('\u{1b}'), "\\u001b");
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("The Story about \"Ping\""), "\"The Story about \\\"Ping\\\"\"");
        assert_eq!(quote("it's"), "\"it's\"");
        assert_eq!(quote("a\tb"), "\"a\\tb\"");
        assert_eq!(quote(""), "\"\"");
    }

    #[test]
    fn test_quote_char() {
        assert_eq!(quote_char('x'), "'x'");
        assert_eq!(quote_char('\''), "'\\''");
    }
}
