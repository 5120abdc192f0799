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

//! Text to [`Value`] parser.
//!
//! ```text
//! value   := scalar | '[' value* ']' | '{' (key value)* '}'
//! key     := scalar
//! scalar  := bare-token | '"' quoted-text '"'
//! ```

mod lexer;

pub use lexer::{Lexer, Token, TokenKind};

use crate::error::Error;
use crate::value::{Mapping, Value};

/// Recursive-descent parser producing a single top-level [`Value`].
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    max_depth: u32,
    depth: u32,
}

impl<'a> Parser<'a> {
    pub fn new(text: &'a str, max_depth: u32) -> Parser<'a> {
        Parser {
            lexer: Lexer::new(text),
            max_depth,
            depth: 0,
        }
    }

    /// Parses a complete document; trailing content after the top-level
    /// value is an error.
    pub fn parse(&mut self) -> Result<Value, Error> {
        let first = self.lexer.next_token()?;
        if first.kind == TokenKind::Eof {
            return Err(Error::syntax("Empty input", first.line, first.column));
        }
        let value = self.parse_value(first)?;
        let trailing = self.lexer.next_token()?;
        if trailing.kind != TokenKind::Eof {
            return Err(Error::syntax(
                format!("Unexpected trailing content {}", trailing.describe()),
                trailing.line,
                trailing.column,
            ));
        }
        tracing::trace!(kind = value.kind_name(), "parsed document");
        Ok(value)
    }

    fn parse_value(&mut self, token: Token) -> Result<Value, Error> {
        match token.kind {
            TokenKind::Text(text) => Ok(Value::Scalar(text)),
            TokenKind::OpenBracket => {
                self.enter(&token)?;
                let items = self.parse_sequence(&token)?;
                self.depth -= 1;
                Ok(Value::Sequence(items))
            }
            TokenKind::OpenBrace => {
                self.enter(&token)?;
                let map = self.parse_mapping(&token)?;
                self.depth -= 1;
                Ok(Value::Mapping(map))
            }
            TokenKind::Eof => Err(Error::syntax(
                "Unexpected end of input",
                token.line,
                token.column,
            )),
            TokenKind::CloseBrace | TokenKind::CloseBracket => Err(Error::syntax(
                format!("Unexpected {}", token.describe()),
                token.line,
                token.column,
            )),
        }
    }

    fn enter(&mut self, token: &Token) -> Result<(), Error> {
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(Error::depth_exceed(format!(
                "Maximum nesting depth {} exceeded at line {}, column {}",
                self.max_depth, token.line, token.column
            )));
        }
        Ok(())
    }

    fn parse_sequence(&mut self, open: &Token) -> Result<Vec<Value>, Error> {
        let mut items = Vec::new();
        loop {
            let token = self.lexer.next_token()?;
            match token.kind {
                TokenKind::CloseBracket => return Ok(items),
                TokenKind::Eof => {
                    return Err(Error::syntax(
                        "Unterminated sequence, expected `]`",
                        open.line,
                        open.column,
                    ))
                }
                _ => items.push(self.parse_value(token)?),
            }
        }
    }

    fn parse_mapping(&mut self, open: &Token) -> Result<Mapping, Error> {
        let mut map = Mapping::new();
        loop {
            let key_token = self.lexer.next_token()?;
            let key = match key_token.kind {
                TokenKind::CloseBrace => return Ok(map),
                TokenKind::Text(ref key) => key.clone(),
                TokenKind::Eof => {
                    return Err(Error::syntax(
                        "Unterminated mapping, expected `}`",
                        open.line,
                        open.column,
                    ))
                }
                _ => {
                    return Err(Error::syntax(
                        format!("Expected key, found {}", key_token.describe()),
                        key_token.line,
                        key_token.column,
                    ))
                }
            };
            let value_token = self.lexer.next_token()?;
            if matches!(value_token.kind, TokenKind::CloseBrace | TokenKind::Eof) {
                return Err(Error::syntax(
                    format!("Missing value for key `{key}`"),
                    value_token.line,
                    value_token.column,
                ));
            }
            if map.contains_key(&key) {
                return Err(Error::syntax(
                    format!("Duplicate key `{key}`"),
                    key_token.line,
                    key_token.column,
                ));
            }
            let value = self.parse_value(value_token)?;
            map.insert(key, value);
        }
    }
}
