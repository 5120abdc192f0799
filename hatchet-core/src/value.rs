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

//! The untyped tree produced by the parser.

use std::fmt;

use indexmap::IndexMap;

use crate::util::push_token;

/// Reserved mapping key carrying a subtype discriminator.
pub const CLASS_KEY: &str = "Class";

/// Ordered mapping with unique keys.
pub type Mapping = IndexMap<String, Value>;

/// A parsed Hatchet value.
///
/// Scalars keep their raw token text; interpretation is deferred to the
/// coercion step, which knows the target type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Scalar(String),
    Sequence(Vec<Value>),
    Mapping(Mapping),
}

impl Value {
    /// Builds a scalar from anything string-like.
    pub fn scalar<S: Into<String>>(s: S) -> Value {
        Value::Scalar(s.into())
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// A scalar spelled `null` in any letter case.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Scalar(s) if s.eq_ignore_ascii_case("null"))
    }

    /// The `Class` discriminator of a mapping, if present and scalar.
    pub fn class_name(&self) -> Option<&str> {
        self.as_mapping()
            .and_then(|m| m.get(CLASS_KEY))
            .and_then(Value::as_scalar)
    }

    /// Short shape name used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Scalar(_) => "scalar",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
        }
    }

    fn write_compact(&self, out: &mut String) {
        match self {
            Value::Scalar(s) => push_token(out, s),
            Value::Sequence(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    item.write_compact(out);
                }
                out.push(']');
            }
            Value::Mapping(map) if map.is_empty() => out.push_str("{}"),
            Value::Mapping(map) => {
                out.push('{');
                for (key, value) in map {
                    out.push(' ');
                    push_token(out, key);
                    out.push(' ');
                    value.write_compact(out);
                }
                out.push_str(" }");
            }
        }
    }
}

/// Renders the value back to single-line Hatchet text.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_compact(&mut out);
        f.write_str(&out)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Value::Mapping(map)
    }
}
