use tracing::debug;

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// Streaming tokenizer.
///
/// `ch` is the character at `pos`, or `None` once the input is exhausted.
/// After every read `read_pos == pos + 1`.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: Vec<char>,
    pos: usize,
    read_pos: usize,
    ch: Option<char>,
    /// Set once the iterator has handed out its EOF token.
    finished: bool,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        let mut lexer = Lexer {
            source: source.chars().collect(),
            pos: 0,
            read_pos: 0,
            ch: None,
            finished: false,
        };

        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        self.ch = self.source.get(self.read_pos).copied();
        // Cursors stay put once the end of input is reached.
        self.pos = self.read_pos.min(self.source.len());
        self.read_pos = self.pos + 1;
    }

    fn peek_char(&self) -> Option<char> {
        self.source.get(self.read_pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, Some(' ' | '\t' | '\n' | '\r')) {
            self.read_char();
        }
    }

    /// Consumes characters while `predicate` holds and returns the matched text.
    fn read_while(&mut self, predicate: fn(char) -> bool) -> (String, usize) {
        let start = self.pos;
        while self.ch.is_some_and(predicate) {
            self.read_char();
        }

        (self.source[start..self.pos].iter().collect(), start)
    }

    /// Token for the current character alone.
    fn single(&self, kind: TokenKind) -> Token {
        let literal = self.ch.map(String::from).unwrap_or_default();
        let end = if self.ch.is_some() { self.pos + 1 } else { self.pos };
        MK_TOKEN!(kind, literal, self.pos, end)
    }

    /// Token for the current character followed by `second`, consuming the first of the two.
    fn double(&mut self, kind: TokenKind, second: char) -> Token {
        let start = self.pos;
        let mut literal = String::new();
        literal.extend(self.ch);
        literal.push(second);
        self.read_char();
        MK_TOKEN!(kind, literal, start, start + 2)
    }

    /// Returns the next token. Past the end of input this keeps returning EOF.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let ch = self.ch;
        let token = match ch {
            Some('=') if self.peek_char() == Some('=') => self.double(TokenKind::Eq, '='),
            Some('=') => self.single(TokenKind::Assign),
            Some('!') if self.peek_char() == Some('=') => self.double(TokenKind::NotEq, '='),
            Some('!') => self.single(TokenKind::Bang),
            Some(';') => self.single(TokenKind::Semicolon),
            Some(',') => self.single(TokenKind::Comma),
            Some('(') => self.single(TokenKind::LParen),
            Some(')') => self.single(TokenKind::RParen),
            Some('{') => self.single(TokenKind::LBrace),
            Some('}') => self.single(TokenKind::RBrace),
            Some('+') => self.single(TokenKind::Plus),
            Some('-') => self.single(TokenKind::Minus),
            Some('*') => self.single(TokenKind::Asterisk),
            Some('/') => self.single(TokenKind::Slash),
            Some('<') => self.single(TokenKind::Lt),
            Some('>') => self.single(TokenKind::Gt),
            None => self.single(TokenKind::Eof),
            Some(c) if is_letter(c) => {
                let (word, start) = self.read_while(is_letter);
                let kind = TokenKind::lookup_ident(&word);
                let end = self.pos;
                return MK_TOKEN!(kind, word, start, end);
            }
            Some(c) if c.is_ascii_digit() => {
                let (digits, start) = self.read_while(|c| c.is_ascii_digit());
                let end = self.pos;
                return MK_TOKEN!(TokenKind::Int, digits, start, end);
            }
            Some(c) => {
                debug!(character = %c, offset = self.pos, "illegal character");
                self.single(TokenKind::Illegal)
            }
        };

        self.read_char();
        token
    }
}

impl Iterator for Lexer {
    type Item = Token;

    /// Yields every token up to and including the first EOF.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.is(TokenKind::Eof) {
            self.finished = true;
        }

        Some(token)
    }
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Tokenizes `source` in full. The last token is always EOF.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}
