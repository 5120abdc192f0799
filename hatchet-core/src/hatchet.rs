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

use crate::config::Config;
use crate::error::Error;
use crate::parser::Parser;
use crate::resolver::context::{ReadContext, WriteContext};
use crate::resolver::type_registry::{RegisteredType, TypeRegistry};
use crate::serializer::Serializer;
use crate::value::Value;

/// Entry point for converting between Hatchet text and Rust values.
///
/// A `Hatchet` instance owns its configuration and its type registry.
/// Register every concrete type that may appear behind a `Class` key before
/// reading polymorphic input; after that the instance is only read and may
/// be shared across threads.
///
/// # Examples
///
/// ```rust
/// use hatchet_core::hatchet::Hatchet;
/// use std::collections::BTreeMap;
///
/// let hatchet = Hatchet::default();
/// let scores: BTreeMap<String, u32> = hatchet.deserialize("{ ann 3 bob 0 }").unwrap();
/// assert_eq!(scores["ann"], 3);
///
/// // zero values are omitted by default
/// assert_eq!(hatchet.serialize(&scores).unwrap(), "{\n  ann 3\n}");
///
/// let verbose = Hatchet::default().include_default_values(true);
/// assert_eq!(verbose.serialize(&scores).unwrap(), "{\n  ann 3\n  bob 0\n}");
/// ```
#[derive(Default)]
pub struct Hatchet {
    config: Config,
    registry: TypeRegistry,
}

impl Hatchet {
    pub fn with_config(config: Config) -> Self {
        Hatchet {
            config,
            registry: TypeRegistry::new(),
        }
    }

    /// Writes members and map entries even when they hold their type's zero
    /// value.
    ///
    /// Default is `false`.
    pub fn include_default_values(mut self, include_default_values: bool) -> Self {
        self.config.include_default_values = include_default_values;
        self
    }

    /// Sets the maximum nesting depth for parsing, reading and writing.
    ///
    /// Default is `128`. Exceeding it fails with [`Error::DepthExceed`].
    pub fn max_depth(mut self, max_depth: u32) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Sets the number of spaces per indentation level. Default is `2`.
    pub fn indent_width(mut self, indent_width: usize) -> Self {
        self.config.indent_width = indent_width;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Registers `T` as the concrete type named by `Class name`.
    pub fn register<T: Serializer>(&mut self, name: &str) -> Result<(), Error> {
        self.registry.register::<T>(name)
    }

    /// Registers `T` under the last segment of its Rust type name.
    pub fn register_default_name<T: Serializer>(&mut self) -> Result<(), Error> {
        self.registry.register_default_name::<T>()
    }

    pub fn resolve(&self, name: &str) -> Option<&RegisteredType> {
        self.registry.resolve(name)
    }

    /// Parses text into an untyped [`Value`] tree.
    pub fn parse(&self, text: &str) -> Result<Value, Error> {
        Parser::new(text, self.config.max_depth()).parse()
    }

    /// Coerces an untyped value into `T`.
    pub fn coerce<T: Serializer>(&self, value: Value) -> Result<T, Error> {
        let mut context = ReadContext::new(&self.config, &self.registry);
        context
            .coerce::<T>(value)
            .map_err(Error::enhance_conversion_error::<T>)
    }

    /// Parses `text` and coerces it into `T`.
    pub fn deserialize<T: Serializer>(&self, text: &str) -> Result<T, Error> {
        let value = self.parse(text)?;
        self.coerce(value)
    }

    /// Writes `value` as Hatchet text.
    pub fn serialize<T: Serializer>(&self, value: &T) -> Result<String, Error> {
        self.serialize_with_context(value, false)
    }

    /// Writes `value` with a `Class` line on the top-level record, so it can be
    /// read back through a polymorphic target.
    pub fn serialize_with_class<T: Serializer>(&self, value: &T) -> Result<String, Error> {
        self.serialize_with_context(value, true)
    }

    fn serialize_with_context(&self, value: &dyn Serializer, force_class: bool) -> Result<String, Error> {
        let mut context = WriteContext::new(&self.config, &self.registry);
        context.write_value(value, force_class)?;
        Ok(context.finish())
    }
}

/// Deserializes `text` with a default [`Hatchet`] instance.
///
/// Polymorphic input needs a registry; use [`Hatchet::deserialize`] for it.
pub fn from_str<T: Serializer>(text: &str) -> Result<T, Error> {
    Hatchet::default().deserialize(text)
}

/// Serializes `value` with a default [`Hatchet`] instance.
pub fn to_string<T: Serializer>(value: &T) -> Result<String, Error> {
    Hatchet::default().serialize(value)
}
