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

/// Configuration for Hatchet parsing and serialization.
///
/// Shared by the [`Hatchet`](crate::hatchet::Hatchet) instance and the
/// `ReadContext`/`WriteContext` it creates for each call.
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether members holding their type's zero value are still written.
    pub include_default_values: bool,
    /// Maximum nesting depth for parsing, reading and writing.
    pub max_depth: u32,
    /// Number of spaces per indentation level in emitted text.
    pub indent_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            include_default_values: false,
            max_depth: 128,
            indent_width: 2,
        }
    }
}

impl Config {
    /// Creates a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if default values are written.
    #[inline(always)]
    pub fn is_include_default_values(&self) -> bool {
        self.include_default_values
    }

    /// Get maximum nesting depth.
    #[inline(always)]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Get indent width.
    #[inline(always)]
    pub fn indent_width(&self) -> usize {
        self.indent_width
    }
}
