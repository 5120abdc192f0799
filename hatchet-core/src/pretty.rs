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

use crate::util::{push_quoted, push_token};

const LINE_ENDING: &str = "\n";

/// Indentation-aware text accumulator used by the serialization engine.
///
/// Block contents sit one level deeper than the line that opened the block:
///
/// ```text
/// {
///   Name "Rex"
///   Owner {
///     Name "Ann"
///   }
/// }
/// ```
pub struct PrettyPrinter {
    pub(crate) out: String,
    indent_level: usize,
    indent_width: usize,
}

impl Default for PrettyPrinter {
    fn default() -> Self {
        PrettyPrinter::new(2)
    }
}

impl PrettyPrinter {
    pub fn new(indent_width: usize) -> PrettyPrinter {
        PrettyPrinter {
            out: String::with_capacity(256),
            indent_level: 0,
            indent_width,
        }
    }

    pub fn len(&self) -> usize {
        self.out.len()
    }

    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    #[inline(always)]
    pub fn append(&mut self, text: &str) {
        self.out.push_str(text);
    }

    #[inline(always)]
    pub fn append_char(&mut self, c: char) {
        self.out.push(c);
    }

    /// Appends whitespace for the current indent level.
    pub fn append_indent(&mut self) {
        let width = self.indent_level * self.indent_width;
        self.out.extend(std::iter::repeat(' ').take(width));
    }

    pub fn append_line_ending(&mut self) {
        self.out.push_str(LINE_ENDING);
    }

    /// Writes `{` and a line ending, and moves one level in.
    pub fn open_block(&mut self) {
        self.out.push('{');
        self.append_line_ending();
        self.indent();
    }

    /// Moves one level out and writes the closing `}` at that level.
    pub fn close_block(&mut self) {
        self.deindent();
        self.append_indent();
        self.out.push('}');
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn deindent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// Appends a quoted, escaped string literal.
    pub fn append_string(&mut self, text: &str) {
        push_quoted(&mut self.out, text);
    }

    /// Appends a scalar bare when it reads back unchanged, quoted otherwise.
    pub fn append_token(&mut self, text: &str) {
        push_token(&mut self.out, text);
    }

    /// Starts a `key value` line inside a block: indent, key, separator.
    pub fn begin_member_line(&mut self, key: &str) {
        self.append_indent();
        self.append_token(key);
        self.out.push(' ');
    }

    pub fn end_member_line(&mut self) {
        self.append_line_ending();
    }

    pub fn finish(self) -> String {
        self.out
    }

    pub fn dump(&self) -> &str {
        &self.out
    }
}
