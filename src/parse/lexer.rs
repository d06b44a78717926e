use winnow::combinator::{alt, preceded};
use winnow::error::ModalResult;
use winnow::prelude::*;
use winnow::stream::LocatingSlice;
use winnow::token::take_while;

type Input<'i> = LocatingSlice<&'i str>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Role,
    And,
    Or,
    Not,
    LParen,
    RParen,
}

/// A token together with its source text and byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'i> {
    pub(crate) kind: TokenKind,
    pub(crate) text: &'i str,
    pub(crate) offset: usize,
}

// -- Whitespace -------------------------------------------------------------

fn ws(input: &mut Input<'_>) -> ModalResult<()> {
    take_while(0.., char::is_whitespace)
        .void()
        .parse_next(input)
}

// -- Words and parentheses --------------------------------------------------

fn is_word_char(c: char) -> bool {
    !c.is_whitespace() && c != '(' && c != ')'
}

fn classify(word: &str) -> TokenKind {
    if word.eq_ignore_ascii_case("and") {
        TokenKind::And
    } else if word.eq_ignore_ascii_case("or") {
        TokenKind::Or
    } else if word.eq_ignore_ascii_case("not") {
        TokenKind::Not
    } else {
        TokenKind::Role
    }
}

fn token(input: &mut Input<'_>) -> ModalResult<TokenKind> {
    alt((
        '('.value(TokenKind::LParen),
        ')'.value(TokenKind::RParen),
        take_while(1.., is_word_char).map(classify),
    ))
    .parse_next(input)
}

// -- Entry point ------------------------------------------------------------

/// Split `source` into tokens. Any run of characters that is neither
/// whitespace nor a parenthesis is a word; words matching `AND`, `OR` or
/// `NOT` in any ASCII case are operators, everything else is a role name.
///
/// Every non-whitespace character starts a token, so tokenizing cannot fail.
/// The loop stops once only whitespace remains.
pub(crate) fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut input = LocatingSlice::new(source);
    let mut tokens = Vec::new();
    while let Ok((kind, span)) = preceded(ws, token.with_span()).parse_next(&mut input) {
        tokens.push(Token {
            kind,
            text: &source[span.clone()],
            offset: span.start,
        });
    }
    tracing::trace!(tokens = tokens.len(), "tokenized role expression");
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \t\n").is_empty());
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(
            kinds("a and b Or c NOT d"),
            vec![
                TokenKind::Role,
                TokenKind::And,
                TokenKind::Role,
                TokenKind::Or,
                TokenKind::Role,
                TokenKind::Not,
                TokenKind::Role,
            ]
        );
    }

    #[test]
    fn parentheses_split_words() {
        let tokens = tokenize("NOT(bob)");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["NOT", "(", "bob", ")"]);
        assert_eq!(tokens[2].offset, 4);
    }

    #[test]
    fn keyword_prefixes_are_roles() {
        assert_eq!(
            kinds("ANDROID notary oracle"),
            vec![TokenKind::Role, TokenKind::Role, TokenKind::Role]
        );
    }

    #[test]
    fn unusual_characters_form_roles() {
        let tokens = tokenize("Group:Admins  ü-ber\u{3000}x.y");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["Group:Admins", "ü-ber", "x.y"]);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Role));
    }

    #[test]
    fn trailing_whitespace_is_consumed() {
        let tokens = tokenize("a OR b \t\n");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].text, "b");
    }

    #[test]
    fn every_character_lands_in_a_token() {
        let source = "a)(b !@# NOT\u{00a0}c) ((";
        let covered: usize = tokenize(source).iter().map(|t| t.text.len()).sum();
        let visible: usize = source
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(char::len_utf8)
            .sum();
        assert_eq!(covered, visible);
    }

    #[test]
    fn offsets_are_byte_positions() {
        let tokens = tokenize("  a   OR b");
        let offsets: Vec<usize> = tokens.iter().map(|t| t.offset).collect();
        assert_eq!(offsets, vec![2, 6, 9]);
    }
}
