//! JavaScript/TypeScript tokenizer built on logos.
//!
//! The parser has already validated the file, so the lexer only needs to
//! recover token boundaries. It never fails: anything it cannot classify
//! becomes an `Unknown` token. JSX text is not JavaScript, so callers that
//! have an AST hand its spans in and the lexer steps over them.

use logos::Logos;
use oxc_span::Span;

use crate::constants::{is_keyword, REGEX_PRECEDING_KEYWORDS};
use crate::token::{Token, TokenKind};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\x0B\x0C]+")]
enum RawToken {
    #[regex(r"//[^\n\r]*")]
    LineComment,

    #[token("/*", lex_block_comment)]
    BlockComment,

    #[regex(r"#![^\n\r]*")]
    Hashbang,

    #[regex(r"[a-zA-Z_$\x{80}-\x{10FFFF}][a-zA-Z0-9_$\x{80}-\x{10FFFF}]*")]
    Word,

    #[regex(r"#[a-zA-Z_$][a-zA-Z0-9_$]*")]
    PrivateName,

    #[regex(r"0[xX][0-9a-fA-F_]+n?")]
    #[regex(r"0[oO][0-7_]+n?")]
    #[regex(r"0[bB][01_]+n?")]
    #[regex(r"[0-9][0-9_]*n?")]
    #[regex(r"[0-9][0-9_]*\.[0-9_]*([eE][+-]?[0-9_]+)?")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9_]+)?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9_]+")]
    Number,

    #[regex(r#""([^"\\\n\r]|\\[^\n\r]|\\\r?\n)*""#)]
    #[regex(r#"'([^'\\\n\r]|\\[^\n\r]|\\\r?\n)*'"#)]
    Str,

    #[token("`")]
    Backtick,

    #[token("{")]
    LeftBrace,

    #[token("}")]
    RightBrace,

    #[token("/")]
    #[token("/=")]
    Slash,

    #[token("(")]
    #[token(")")]
    #[token("[")]
    #[token("]")]
    #[token(";")]
    #[token(",")]
    #[token("<")]
    #[token(">")]
    #[token("<=")]
    #[token(">=")]
    #[token("==")]
    #[token("!=")]
    #[token("===")]
    #[token("!==")]
    #[token("+")]
    #[token("-")]
    #[token("*")]
    #[token("%")]
    #[token("**")]
    #[token("++")]
    #[token("--")]
    #[token("<<")]
    #[token(">>")]
    #[token(">>>")]
    #[token("&")]
    #[token("|")]
    #[token("^")]
    #[token("!")]
    #[token("~")]
    #[token("&&")]
    #[token("||")]
    #[token("??")]
    #[token("?")]
    #[token("?.")]
    #[token(":")]
    #[token("=")]
    #[token("+=")]
    #[token("-=")]
    #[token("*=")]
    #[token("%=")]
    #[token("**=")]
    #[token("<<=")]
    #[token(">>=")]
    #[token(">>>=")]
    #[token("&=")]
    #[token("|=")]
    #[token("^=")]
    #[token("&&=")]
    #[token("||=")]
    #[token("??=")]
    #[token("=>")]
    #[token(".")]
    #[token("...")]
    #[token("@")]
    Punctuator,
}

fn lex_block_comment(lex: &mut logos::Lexer<RawToken>) -> bool {
    let remainder = lex.remainder();
    match remainder.find("*/") {
        Some(end) => lex.bump(end + 2),
        None => lex.bump(remainder.len()),
    }
    true
}

/// Tokens and comments of one file, each sorted by offset
#[derive(Debug, Default)]
pub struct Lexed<'a> {
    pub tokens: Vec<Token<'a>>,
    pub comments: Vec<Token<'a>>,
}

/// Split `text` into code tokens and comments
pub fn tokenize(text: &str) -> Lexed<'_> {
    tokenize_around(text, &[])
}

/// Split `text` into code tokens and comments, taking `known` as given.
///
/// `known` holds tokens whose extent the parser has already settled (comments,
/// JSX text, JSX attribute strings), sorted by start. Their text is never
/// scanned, so a `//` or a backtick inside JSX text stays text.
pub fn tokenize_around<'a>(text: &'a str, known: &[Token<'a>]) -> Lexed<'a> {
    let base = if text.starts_with('\u{feff}') { '\u{feff}'.len_utf8() } else { 0 };
    let mut tokenizer = Tokenizer { text, lexed: Lexed::default(), braces: Vec::new() };

    let mut from = base;
    for token in known {
        let start = token.span.start as usize;
        if start < from {
            continue;
        }
        tokenizer.scan(from, start);
        tokenizer.push(*token);
        from = token.span.end as usize;
    }
    tokenizer.scan(from, text.len());

    tokenizer.lexed
}

struct Tokenizer<'a> {
    text: &'a str,
    lexed: Lexed<'a>,
    // `true` marks a brace that opened a template substitution
    braces: Vec<bool>,
}

impl<'a> Tokenizer<'a> {
    fn push(&mut self, token: Token<'a>) {
        if token.is_comment() {
            self.lexed.comments.push(token);
        } else {
            self.lexed.tokens.push(token);
        }
    }

    /// Lex `text[start..end]`
    fn scan(&mut self, start: usize, end: usize) {
        let text = self.text;
        let body = &text[start..end];
        let mut lexer = RawToken::lexer(body);

        while let Some(result) = lexer.next() {
            let range = lexer.span();
            let kind = match result {
                Ok(RawToken::LineComment) => TokenKind::LineComment,
                Ok(RawToken::BlockComment) => TokenKind::BlockComment,
                Ok(RawToken::Hashbang) => TokenKind::Hashbang,
                Ok(RawToken::Word) => classify_word(lexer.slice()),
                Ok(RawToken::PrivateName) => TokenKind::PrivateIdentifier,
                Ok(RawToken::Number) => TokenKind::Numeric,
                Ok(RawToken::Str) => TokenKind::String,
                Ok(RawToken::Punctuator) => TokenKind::Punctuator,
                Ok(RawToken::LeftBrace) => {
                    self.braces.push(false);
                    TokenKind::Punctuator
                }
                Ok(RawToken::RightBrace) => {
                    if self.braces.pop() == Some(true) {
                        let (chunk_end, opens) = scan_template(body, range.end);
                        if opens {
                            self.braces.push(true);
                        }
                        lexer.bump(chunk_end - range.end);
                        TokenKind::Template
                    } else {
                        TokenKind::Punctuator
                    }
                }
                Ok(RawToken::Backtick) => {
                    let (chunk_end, opens) = scan_template(body, range.end);
                    if opens {
                        self.braces.push(true);
                    }
                    lexer.bump(chunk_end - range.end);
                    TokenKind::Template
                }
                Ok(RawToken::Slash) => {
                    let regex_end = if regex_allowed(self.lexed.tokens.last()) {
                        scan_regex(body, range.start)
                    } else {
                        None
                    };
                    match regex_end {
                        Some(regex_end) => {
                            lexer.bump(regex_end - range.end);
                            TokenKind::RegularExpression
                        }
                        None => TokenKind::Punctuator,
                    }
                }
                Err(()) => TokenKind::Unknown,
            };

            let range = lexer.span();
            let span = Span::new((start + range.start) as u32, (start + range.end) as u32);
            self.push(Token::new(kind, &body[range], span));
        }
    }
}

fn classify_word(word: &str) -> TokenKind {
    match word {
        "true" | "false" => TokenKind::Boolean,
        "null" => TokenKind::Null,
        _ if is_keyword(word) => TokenKind::Keyword,
        _ => TokenKind::Identifier,
    }
}

/// Decide whether a `/` following `previous` starts a regular expression
fn regex_allowed(previous: Option<&Token>) -> bool {
    let Some(previous) = previous else {
        return true;
    };

    match previous.kind {
        TokenKind::Punctuator => !matches!(previous.value, ")" | "]" | "}" | "++" | "--" | "<"),
        TokenKind::Keyword => REGEX_PRECEDING_KEYWORDS.contains(previous.value),
        TokenKind::Template => previous.value.ends_with("${"),
        _ => false,
    }
}

/// Scan a template chunk whose content starts at `from`.
///
/// Returns the offset just past the chunk and whether it ends by opening a
/// `${` substitution.
fn scan_template(body: &str, from: usize) -> (usize, bool) {
    let mut chars = body[from..].char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '`' => return (from + idx + 1, false),
            '$' if matches!(chars.peek(), Some((_, '{'))) => return (from + idx + 2, true),
            _ => {}
        }
    }

    (body.len(), false)
}

/// Scan a regular expression literal starting at the `/` at `start`.
///
/// Returns the offset past its flags, or `None` if the line ends first.
fn scan_regex(body: &str, start: usize) -> Option<usize> {
    let mut in_class = false;
    let mut chars = body[start + 1..].char_indices();

    while let Some((idx, c)) = chars.next() {
        match c {
            '\n' | '\r' | '\u{2028}' | '\u{2029}' => return None,
            '\\' => {
                chars.next();
            }
            '[' => in_class = true,
            ']' => in_class = false,
            '/' if !in_class => {
                let flags_start = start + 1 + idx + 1;
                let flags = body[flags_start..]
                    .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '$'))
                    .unwrap_or(body.len() - flags_start);
                return Some(flags_start + flags);
            }
            _ => {}
        }
    }

    None
}
