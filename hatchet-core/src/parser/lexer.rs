// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Tokenizer over the raw input text.

use crate::error::Error;
use crate::util::is_structural;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    /// A bare or quoted scalar, quotes and escapes already resolved.
    Text(String),
    Eof,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
}

impl Token {
    pub fn describe(&self) -> String {
        match &self.kind {
            TokenKind::OpenBrace => "`{`".to_string(),
            TokenKind::CloseBrace => "`}`".to_string(),
            TokenKind::OpenBracket => "`[`".to_string(),
            TokenKind::CloseBracket => "`]`".to_string(),
            TokenKind::Text(s) => format!("`{s}`"),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}

/// Cursor over the input with 1-based line and column tracking.
pub struct Lexer<'a> {
    src: &'a str,
    cursor: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Lexer<'a> {
        Lexer {
            src,
            cursor: 0,
            line: 1,
            column: 1,
        }
    }

    #[inline(always)]
    fn rest(&self) -> &'a str {
        &self.src[self.cursor..]
    }

    #[inline(always)]
    fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.cursor += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn skip_trivia(&mut self) -> Result<(), Error> {
        loop {
            match self.peek_char() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('/') if self.rest().starts_with("//") => {
                    while let Some(c) = self.bump() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                Some('/') if self.rest().starts_with("/*") => {
                    let (line, column) = (self.line, self.column);
                    self.bump();
                    self.bump();
                    loop {
                        if self.rest().starts_with("*/") {
                            self.bump();
                            self.bump();
                            break;
                        }
                        if self.bump().is_none() {
                            return Err(Error::syntax("Unterminated comment", line, column));
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    pub fn next_token(&mut self) -> Result<Token, Error> {
        self.skip_trivia()?;
        let (line, column) = (self.line, self.column);
        let kind = match self.peek_char() {
            None => TokenKind::Eof,
            Some('{') => {
                self.bump();
                TokenKind::OpenBrace
            }
            Some('}') => {
                self.bump();
                TokenKind::CloseBrace
            }
            Some('[') => {
                self.bump();
                TokenKind::OpenBracket
            }
            Some(']') => {
                self.bump();
                TokenKind::CloseBracket
            }
            Some('"') => {
                self.bump();
                TokenKind::Text(self.read_quoted(line, column)?)
            }
            Some(_) => TokenKind::Text(self.read_bare()),
        };
        Ok(Token { kind, line, column })
    }

    fn read_quoted(&mut self, line: usize, column: usize) -> Result<String, Error> {
        let mut text = String::new();
        loop {
            let (esc_line, esc_column) = (self.line, self.column);
            match self.bump() {
                None => return Err(Error::syntax("Unterminated string", line, column)),
                Some('"') => return Ok(text),
                Some('\\') => match self.bump() {
                    Some('"') => text.push('"'),
                    Some('\\') => text.push('\\'),
                    Some('n') => text.push('\n'),
                    Some('r') => text.push('\r'),
                    Some('t') => text.push('\t'),
                    Some(other) => {
                        return Err(Error::syntax(
                            format!("Invalid escape sequence `\\{other}`"),
                            esc_line,
                            esc_column,
                        ))
                    }
                    None => return Err(Error::syntax("Unterminated string", line, column)),
                },
                Some(c) => text.push(c),
            }
        }
    }

    fn read_bare(&mut self) -> String {
        let start = self.cursor;
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() || is_structural(c) {
                break;
            }
            self.bump();
        }
        self.src[start..self.cursor].to_string()
    }
}
