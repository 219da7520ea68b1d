//! Tolerant scanner for the `.tabnine` object.
//!
//! The file is JSON-like, but a strict JSON reader would reject a whole file
//! over one stray comma. This scanner never fails: it walks the first
//! top-level object, skips anything it does not understand, and reports each
//! known field as either extracted or absent.

use super::model::{DISABLE_TEAM_LEARNING_KEY, TEAM_LEARNING_IGNORE_KEY};
use std::iter::Peekable;
use std::str::Chars;
use tracing::debug;

/// Fields recovered from a config file. `None` means "use the default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ParsedFields {
    pub disable_team_learning: Option<bool>,
    pub team_learning_ignore: Option<Vec<String>>,
}

/// Scan `text` for the known keys of the top-level object.
///
/// Keys are only recognized as direct members of the first `{ ... }` in the
/// text. A later occurrence of a key overrides an earlier one, but only if its
/// value is usable.
pub(crate) fn parse_fields(text: &str) -> ParsedFields {
    let mut fields = ParsedFields::default();
    let mut tokens = Lexer::new(text).peekable();

    if !tokens.by_ref().any(|t| t == Token::LBrace) {
        return fields;
    }

    for (key, value) in parse_object(&mut tokens, 1) {
        match key.as_str() {
            DISABLE_TEAM_LEARNING_KEY => match value {
                Value::Bool(b) => fields.disable_team_learning = Some(b),
                _ => debug!(field = DISABLE_TEAM_LEARNING_KEY, "value is not a boolean"),
            },
            TEAM_LEARNING_IGNORE_KEY => match string_items(value) {
                Some(items) => fields.team_learning_ignore = Some(items),
                None => debug!(
                    field = TEAM_LEARNING_IGNORE_KEY,
                    "value is not a closed array of strings"
                ),
            },
            _ => {}
        }
    }

    fields
}

fn string_items(value: Value) -> Option<Vec<String>> {
    let Value::Array(items) = value else {
        return None;
    };
    items
        .into_iter()
        .map(|item| match item {
            Value::Str(s) => Some(s),
            _ => None,
        })
        .collect()
}

// ============================================================================
// Lexer
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Colon,
    Comma,
    /// String literal with escapes decoded.
    Str(String),
    /// String literal that never closed.
    BadStr,
    /// Bare literal: `true`, `false`, `null`, numbers, or junk.
    Word(String),
    /// Any other character.
    Other,
}

struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            chars: text.chars().peekable(),
        }
    }

    fn string(&mut self) -> Token {
        let mut out = String::new();
        while let Some(c) = self.chars.next() {
            match c {
                '"' => return Token::Str(out),
                '\\' => self.escape(&mut out),
                c => out.push(c),
            }
        }
        Token::BadStr
    }

    /// Decode one escape sequence. Unknown escapes are kept verbatim.
    fn escape(&mut self, out: &mut String) {
        match self.chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('/') => out.push('/'),
            Some('u') => self.unicode_escape(out),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    /// Decode `\uXXXX`, joining a UTF-16 surrogate pair into one char.
    /// Anything that does not decode is kept verbatim.
    fn unicode_escape(&mut self, out: &mut String) {
        let hex = self.hex_digits();
        let Some(unit) = parse_hex4(&hex) else {
            out.push_str("\\u");
            out.push_str(&hex);
            return;
        };

        if (0xD800..0xDC00).contains(&unit) {
            if let Some(low) = self.low_surrogate() {
                let code = 0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00);
                if let Some(c) = char::from_u32(code) {
                    out.push(c);
                    return;
                }
            }
        }

        match char::from_u32(unit) {
            Some(c) => out.push(c),
            None => {
                out.push_str("\\u");
                out.push_str(&hex);
            }
        }
    }

    /// Take up to four hex digits.
    fn hex_digits(&mut self) -> String {
        (0..4)
            .map_while(|_| self.chars.next_if(char::is_ascii_hexdigit))
            .collect()
    }

    /// Consume a following `\uDC00`..`\uDFFF` escape, if there is one.
    fn low_surrogate(&mut self) -> Option<u32> {
        let mut ahead = self.chars.clone();
        if ahead.next() != Some('\\') || ahead.next() != Some('u') {
            return None;
        }
        let hex: String = (0..4)
            .map_while(|_| ahead.next_if(char::is_ascii_hexdigit))
            .collect();
        let unit = parse_hex4(&hex)?;
        if !(0xDC00..0xE000).contains(&unit) {
            return None;
        }
        self.chars = ahead;
        Some(unit)
    }

    fn word(&mut self, first: char) -> Token {
        let mut word = String::from(first);
        while let Some(&c) = self.chars.peek() {
            if !is_word_char(c) {
                break;
            }
            word.push(c);
            self.chars.next();
        }
        Token::Word(word)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let c = self.chars.next()?;
            let token = match c {
                c if c.is_whitespace() => continue,
                '{' => Token::LBrace,
                '}' => Token::RBrace,
                '[' => Token::LBracket,
                ']' => Token::RBracket,
                ':' => Token::Colon,
                ',' => Token::Comma,
                '"' => self.string(),
                c if is_word_char(c) => self.word(c),
                _ => Token::Other,
            };
            return Some(token);
        }
    }
}

fn parse_hex4(hex: &str) -> Option<u32> {
    if hex.len() != 4 {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '+' | '.' | '_')
}

// ============================================================================
// Values
// ============================================================================

type Tokens<'a> = Peekable<Lexer<'a>>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Value {
    Bool(bool),
    Str(String),
    Array(Vec<Value>),
    /// Nested object (contents are never needed), null, numbers, junk,
    /// unterminated arrays, or a missing value.
    Other,
}

/// Containers nested deeper than this are skipped without being parsed.
const MAX_DEPTH: usize = 64;

/// Parse members until the matching `}` or end of input.
///
/// The opening `{` has already been consumed; `depth` counts it.
fn parse_object(tokens: &mut Tokens<'_>, depth: usize) -> Vec<(String, Value)> {
    let mut members = Vec::new();

    while let Some(token) = tokens.next() {
        match token {
            Token::RBrace => break,
            Token::Str(key) if tokens.peek() == Some(&Token::Colon) => {
                tokens.next();
                let value = parse_value(tokens, depth);
                members.push((key, value));
            }
            Token::LBrace | Token::LBracket => {
                skip_or_parse(tokens, token, depth);
            }
            _ => {}
        }
    }

    members
}

/// Parse elements until the matching `]`.
///
/// The opening `[` has already been consumed; `depth` counts it. An array cut
/// short by `}` or end of input is malformed.
fn parse_array(tokens: &mut Tokens<'_>, depth: usize) -> Value {
    let mut items = Vec::new();

    loop {
        match tokens.peek() {
            None | Some(Token::RBrace) => return Value::Other,
            Some(Token::RBracket) => {
                tokens.next();
                return Value::Array(items);
            }
            Some(Token::Comma) => {
                tokens.next();
            }
            Some(Token::Colon) => {
                tokens.next();
                items.push(Value::Other);
            }
            Some(_) => items.push(parse_value(tokens, depth)),
        }
    }
}

/// Parse a single value inside a container at `depth`. Closing delimiters and
/// separators are left in place so the enclosing container still sees them.
fn parse_value(tokens: &mut Tokens<'_>, depth: usize) -> Value {
    match tokens.peek() {
        None
        | Some(Token::RBrace)
        | Some(Token::RBracket)
        | Some(Token::Comma)
        | Some(Token::Colon) => return Value::Other,
        Some(_) => {}
    }

    match tokens.next() {
        Some(open @ (Token::LBrace | Token::LBracket)) => skip_or_parse(tokens, open, depth),
        Some(Token::Str(s)) => Value::Str(s),
        Some(Token::Word(w)) => match w.as_str() {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => Value::Other,
        },
        _ => Value::Other,
    }
}

/// Descend into a container whose opening token was just consumed, or skip it
/// entirely once `MAX_DEPTH` is reached.
fn skip_or_parse(tokens: &mut Tokens<'_>, open: Token, depth: usize) -> Value {
    if depth >= MAX_DEPTH {
        skip_container(tokens);
        return Value::Other;
    }
    if open == Token::LBrace {
        parse_object(tokens, depth + 1);
        Value::Other
    } else {
        parse_array(tokens, depth + 1)
    }
}

/// Consume tokens until the container just opened is balanced or input ends.
fn skip_container(tokens: &mut Tokens<'_>) {
    let mut open = 1usize;
    for token in tokens.by_ref() {
        match token {
            Token::LBrace | Token::LBracket => open += 1,
            Token::RBrace | Token::RBracket => {
                open -= 1;
                if open == 0 {
                    return;
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ignore_list(items: &[&str]) -> Option<Vec<String>> {
        Some(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_parse_both_fields() {
        let text = r#"{
    "disableTeamLearning": true,
    "teamLearningIgnore": ["*.log", "src/tests/*", "config.json"]
}"#;
        let fields = parse_fields(text);

        assert_eq!(fields.disable_team_learning, Some(true));
        assert_eq!(
            fields.team_learning_ignore,
            ignore_list(&["*.log", "src/tests/*", "config.json"])
        );
    }

    #[test]
    fn test_parse_empty_text() {
        assert_eq!(parse_fields(""), ParsedFields::default());
        assert_eq!(parse_fields("   \n\t"), ParsedFields::default());
    }

    #[test]
    fn test_parse_without_object() {
        let fields = parse_fields(r#""disableTeamLearning": true"#);
        assert_eq!(fields, ParsedFields::default());
    }

    #[test]
    fn test_field_order_is_irrelevant() {
        let text = r#"{"teamLearningIgnore": ["a"], "disableTeamLearning": false}"#;
        let fields = parse_fields(text);

        assert_eq!(fields.disable_team_learning, Some(false));
        assert_eq!(fields.team_learning_ignore, ignore_list(&["a"]));
    }

    #[test]
    fn test_unknown_keys_are_skipped() {
        let text = r#"{
    "version": 3,
    "nested": {"disableTeamLearning": true, "list": [1, 2, {"x": []}]},
    "teamLearningIgnore": ["dist"],
    "future": null
}"#;
        let fields = parse_fields(text);

        // The nested key belongs to another object and must not leak out.
        assert_eq!(fields.disable_team_learning, None);
        assert_eq!(fields.team_learning_ignore, ignore_list(&["dist"]));
    }

    #[test]
    fn test_non_boolean_value_is_ignored() {
        for text in [
            r#"{"disableTeamLearning": "true"}"#,
            r#"{"disableTeamLearning": 1}"#,
            r#"{"disableTeamLearning": TRUE}"#,
            r#"{"disableTeamLearning": }"#,
            r#"{"disableTeamLearning": null}"#,
        ] {
            assert_eq!(parse_fields(text).disable_team_learning, None, "{}", text);
        }
    }

    #[test]
    fn test_array_with_non_string_element_is_ignored() {
        let text = r#"{"teamLearningIgnore": ["*.log", 42, "build"]}"#;
        assert_eq!(parse_fields(text).team_learning_ignore, None);
    }

    #[test]
    fn test_unterminated_array_is_ignored() {
        let text = r#"{"disableTeamLearning": true, "teamLearningIgnore": ["*.log", "build" }"#;
        let fields = parse_fields(text);

        assert_eq!(fields.disable_team_learning, Some(true));
        assert_eq!(fields.team_learning_ignore, None);
    }

    #[test]
    fn test_ignore_value_not_an_array() {
        let text = r#"{"teamLearningIgnore": "*.log"}"#;
        assert_eq!(parse_fields(text).team_learning_ignore, None);
    }

    #[test]
    fn test_missing_closing_brace_keeps_seen_keys() {
        let text = r#"{"disableTeamLearning": true, "teamLearningIgnore": ["a", "b"]"#;
        let fields = parse_fields(text);

        assert_eq!(fields.disable_team_learning, Some(true));
        assert_eq!(fields.team_learning_ignore, ignore_list(&["a", "b"]));
    }

    #[test]
    fn test_trailing_commas_are_tolerated() {
        let text = r#"{"teamLearningIgnore": ["a", "b",], "disableTeamLearning": true,}"#;
        let fields = parse_fields(text);

        assert_eq!(fields.disable_team_learning, Some(true));
        assert_eq!(fields.team_learning_ignore, ignore_list(&["a", "b"]));
    }

    #[test]
    fn test_unterminated_string_does_not_panic() {
        let text = r#"{"disableTeamLearning": true, "teamLearningIgnore": ["oops"#;
        let fields = parse_fields(text);

        assert_eq!(fields.disable_team_learning, Some(true));
        assert_eq!(fields.team_learning_ignore, None);
    }

    #[test]
    fn test_last_usable_duplicate_wins() {
        let text = r#"{
    "disableTeamLearning": true,
    "disableTeamLearning": "nope",
    "teamLearningIgnore": ["first"],
    "teamLearningIgnore": ["second"]
}"#;
        let fields = parse_fields(text);

        assert_eq!(fields.disable_team_learning, Some(true));
        assert_eq!(fields.team_learning_ignore, ignore_list(&["second"]));
    }

    #[test]
    fn test_escapes_are_decoded() {
        let text = r#"{"teamLearningIgnore": ["\t\n", "a\"b", "dir\/x", "\u0041", "\q"]}"#;
        let fields = parse_fields(text);

        assert_eq!(
            fields.team_learning_ignore,
            ignore_list(&["\t\n", "a\"b", "dir/x", "A", "\\q"])
        );
    }

    #[test]
    fn test_bad_unicode_escape_is_kept_literally() {
        let text = r#"{"teamLearningIgnore": ["\u12", "\ud800"]}"#;
        let fields = parse_fields(text);

        assert_eq!(
            fields.team_learning_ignore,
            ignore_list(&["\\u12", "\\ud800"])
        );
    }

    #[test]
    fn test_surrogate_pair_is_joined() {
        let text = r#"{"teamLearningIgnore": ["\ud83d\ude00.txt", "\ud83dx", "\ude00"]}"#;
        let fields = parse_fields(text);

        assert_eq!(
            fields.team_learning_ignore,
            ignore_list(&["\u{1F600}.txt", "\\ud83dx", "\\ude00"])
        );
    }

    #[test]
    fn test_deep_nesting_keeps_earlier_keys() {
        let text = format!(
            "{{\"disableTeamLearning\": true, \"junk\": {}",
            "[".repeat(200_000)
        );
        let fields = parse_fields(&text);

        assert_eq!(fields.disable_team_learning, Some(true));
        assert_eq!(fields.team_learning_ignore, None);
    }

    #[test]
    fn test_keys_after_deeply_nested_value_are_read() {
        let junk = format!("{}{}", "[{\"a\": ".repeat(500), "}]".repeat(500));
        let text = format!(
            "{{\"junk\": {}, \"teamLearningIgnore\": [\"*.log\"], \"disableTeamLearning\": false}}",
            junk
        );
        let fields = parse_fields(&text);

        assert_eq!(fields.disable_team_learning, Some(false));
        assert_eq!(fields.team_learning_ignore, ignore_list(&["*.log"]));
    }

    #[test]
    fn test_garbage_text_yields_defaults() {
        let text = "this is not json at all { : , ] [ } ::: \"";
        assert_eq!(parse_fields(text), ParsedFields::default());
    }

    #[test]
    fn test_leading_noise_before_object() {
        let text = "// project settings\n{\"disableTeamLearning\": true}";
        assert_eq!(parse_fields(text).disable_team_learning, Some(true));
    }
}
