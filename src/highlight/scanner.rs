//! Single-line lexical scanner.

use super::syntax::Syntax;
use super::token::Highlight;

/// Check whether `c` ends a word for keyword and number detection.
#[must_use]
pub const fn is_separator(c: char) -> bool {
    matches!(
        c,
        ' ' | ',' | '.' | ';' | '(' | ')' | '[' | ']' | '+' | '-' | '/' | '*' | '=' | '%'
    )
}

/// Classify every character of one displayed line.
///
/// Returns exactly one tag per `char` of `text`. The scan is a single left
/// to right pass; in priority order a character is a string (inside quotes),
/// the start of a trailing comment, an opening quote, part of a number, or
/// the start of a keyword that is preceded and followed by a separator.
///
/// A string opened by either quote closes only at an unescaped `"`.
#[must_use]
pub fn highlight_line(text: &str, syntax: &Syntax) -> Vec<Highlight> {
    let chars: Vec<char> = text.chars().collect();
    let mut tags = vec![Highlight::Normal; chars.len()];
    let comment: Vec<char> = syntax.single_line_comment.chars().collect();

    let mut in_string = false;
    let mut escaped = false;
    let mut after_separator = true;

    for i in 0..chars.len() {
        let c = chars[i];
        let prev = if i > 0 { tags[i - 1] } else { Highlight::Normal };

        if in_string {
            tags[i] = Highlight::String;
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        if !comment.is_empty() && chars[i..].starts_with(&comment) {
            tags[i..].fill(Highlight::Comment);
            break;
        }

        if c == '"' || c == '\'' {
            tags[i] = Highlight::String;
            in_string = true;
            continue;
        }

        if (c.is_ascii_digit() && (after_separator || prev == Highlight::Number))
            || (c == '.' && prev == Highlight::Number)
        {
            tags[i] = Highlight::Number;
            continue;
        }

        if after_separator {
            if let Some(len) = keyword_at(&chars, i, syntax) {
                tags[i..i + len].fill(Highlight::Keyword);
            }
        }

        after_separator = is_separator(c);
    }

    tags
}

/// Length of the longest keyword starting at `start` and followed by a
/// separator or the end of the line.
fn keyword_at(chars: &[char], start: usize, syntax: &Syntax) -> Option<usize> {
    let rest = &chars[start..];
    syntax
        .keywords
        .iter()
        .filter_map(|keyword| {
            let len = keyword.chars().count();
            let matches = rest.len() >= len && keyword.chars().zip(rest).all(|(k, &c)| k == c);
            let bounded = rest.get(len).is_none_or(|&tail| is_separator(tail));
            (matches && bounded).then_some(len)
        })
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::languages::{C, GO};

    const N: Highlight = Highlight::Normal;
    const K: Highlight = Highlight::Keyword;
    const D: Highlight = Highlight::Number;
    const S: Highlight = Highlight::String;
    const M: Highlight = Highlight::Comment;

    #[test]
    fn mixed_line() {
        let tags = highlight_line("123 abc \"str\" // rest", &C);
        let expected = [
            D, D, D, N, N, N, N, N, S, S, S, S, S, N, M, M, M, M, M, M, M,
        ];
        assert_eq!(tags, expected);
    }

    #[test]
    fn keyword_needs_trailing_separator() {
        assert!(highlight_line("intx", &C).iter().all(|&t| t == N));
        assert_eq!(highlight_line("int x", &C), [K, K, K, N, N]);
    }

    #[test]
    fn keyword_needs_leading_separator() {
        assert!(highlight_line("xint", &C).iter().all(|&t| t == N));
        assert_eq!(highlight_line("(int)", &C), [N, K, K, K, N]);
    }

    #[test]
    fn keyword_at_end_of_line() {
        assert_eq!(highlight_line("return", &C), [K; 6]);
    }

    #[test]
    fn longest_keyword_wins() {
        let tags = highlight_line("int32 x", &GO);
        assert_eq!(&tags[..5], &[K; 5]);
    }

    #[test]
    fn numbers() {
        assert_eq!(highlight_line("3.14", &C), [D, D, D, D]);
        assert_eq!(highlight_line("x1", &C), [N, N]);
        assert_eq!(highlight_line("a=42;", &C), [N, N, D, D, N]);
    }

    #[test]
    fn single_quote_opens_string_until_double_quote() {
        assert_eq!(highlight_line("'a\" b", &C), [S, S, S, N, N]);
    }

    #[test]
    fn escaped_quote_stays_in_string() {
        let tags = highlight_line(r#""a\"b" x"#, &C);
        assert_eq!(tags, [S, S, S, S, S, S, N, N]);
    }

    #[test]
    fn comment_inside_string_is_string() {
        let tags = highlight_line("\"//\"", &C);
        assert_eq!(tags, [S, S, S, S]);
    }

    #[test]
    fn block_comment_is_not_applied() {
        let tags = highlight_line("/* int */", &C);
        assert!(!tags.contains(&M));
        assert_eq!(&tags[3..6], &[K, K, K]);
    }

    #[test]
    fn multibyte_text_keeps_one_tag_per_char() {
        let text = "é \"ü\" // ñ";
        assert_eq!(highlight_line(text, &C).len(), text.chars().count());
    }

    #[test]
    fn empty_line() {
        assert!(highlight_line("", &C).is_empty());
    }

    #[test]
    fn separators() {
        for c in " ,.;()[]+-/*=%".chars() {
            assert!(is_separator(c), "{c:?} should separate");
        }
        for c in ['a', '_', '{', '"', '\t'] {
            assert!(!is_separator(c), "{c:?} should not separate");
        }
    }
}
