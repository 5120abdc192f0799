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

//! Token-level helpers shared by the parser, the printer and `Value`'s
//! `Display` impl.

/// Characters that terminate a bare token.
pub const STRUCTURAL: [char; 5] = ['{', '}', '[', ']', '"'];

#[inline(always)]
pub fn is_structural(c: char) -> bool {
    STRUCTURAL.contains(&c)
}

/// Returns true when `s` can be written as a bare token and read back as the
/// same scalar.
pub fn is_bare_token(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with("//")
        && !s.starts_with("/*")
        && !s.chars().any(|c| c.is_whitespace() || is_structural(c))
}

/// Appends `s` as a quoted literal, escaping quotes, backslashes and the
/// control characters the lexer understands.
pub fn push_quoted(out: &mut String, s: &str) {
    out.reserve(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
}

/// Appends `s` bare when possible, quoted otherwise.
pub fn push_token(out: &mut String, s: &str) {
    if is_bare_token(s) {
        out.push_str(s);
    } else {
        push_quoted(out, s);
    }
}

/// Returns true when a mapping key cannot be written at all.
#[inline]
pub fn is_invalid_key(key: &str) -> bool {
    key.is_empty() || key.chars().any(char::is_whitespace)
}
