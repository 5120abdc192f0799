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

use std::any::TypeId;

use crate::config::Config;
use crate::error::Error;
use crate::pretty::PrettyPrinter;
use crate::resolver::cycle_guard::CycleGuard;
use crate::resolver::type_registry::TypeRegistry;
use crate::serializer::Serializer;
use crate::util::{is_invalid_key, ENABLE_HATCHET_DEBUG_OUTPUT};
use crate::value::{Value, CLASS_KEY};

/// State of one top-level serialization call.
pub struct WriteContext<'se> {
    pub printer: PrettyPrinter,
    config: &'se Config,
    registry: &'se TypeRegistry,
    pub cycle_guard: CycleGuard,
    current_depth: u32,
}

impl<'se> WriteContext<'se> {
    pub fn new(config: &'se Config, registry: &'se TypeRegistry) -> WriteContext<'se> {
        WriteContext {
            printer: PrettyPrinter::new(config.indent_width()),
            config,
            registry,
            cycle_guard: CycleGuard::new(),
            current_depth: 0,
        }
    }

    #[inline(always)]
    pub fn config(&self) -> &'se Config {
        self.config
    }

    #[inline(always)]
    pub fn registry(&self) -> &'se TypeRegistry {
        self.registry
    }

    pub fn inc_depth(&mut self) -> Result<(), Error> {
        self.current_depth += 1;
        if self.current_depth > self.config.max_depth() {
            return Err(Error::depth_exceed(format!(
                "Maximum nesting depth ({}) exceeded while writing",
                self.config.max_depth()
            )));
        }
        Ok(())
    }

    pub fn dec_depth(&mut self) {
        self.current_depth = self.current_depth.saturating_sub(1);
    }

    /// Writes one value in place, counting it against the depth limit.
    pub fn write_value(&mut self, value: &dyn Serializer, force_class: bool) -> Result<(), Error> {
        self.inc_depth()?;
        let result = value.hatchet_write(self, force_class);
        self.dec_depth();
        result
    }

    /// Writes a `key value` line inside the current block.
    ///
    /// Absent values are skipped, then the key is validated, then zero
    /// values of value-typed shapes are skipped unless
    /// `include_default_values` is set.
    pub fn write_key_value(
        &mut self,
        key: &str,
        value: &dyn Serializer,
        force_class: bool,
    ) -> Result<(), Error> {
        if value.hatchet_is_none() {
            return Ok(());
        }
        if is_invalid_key(key) {
            return Err(Error::invalid_key(key.to_string()));
        }
        if !self.config.is_include_default_values() && value.hatchet_is_default() {
            return Ok(());
        }
        self.printer.begin_member_line(key);
        self.write_value(value, force_class)?;
        self.printer.end_member_line();
        Ok(())
    }

    /// Writes the `Class` line of a record, preferring its registered name.
    pub fn write_class_line(&mut self, type_id: TypeId, fallback: &str) {
        let registry = self.registry;
        let name = registry.name_of(type_id).unwrap_or(fallback);
        self.printer.begin_member_line(CLASS_KEY);
        self.printer.append_token(name);
        self.printer.end_member_line();
    }

    pub fn finish(self) -> String {
        self.printer.finish()
    }
}

/// State of one top-level deserialization call.
pub struct ReadContext<'de> {
    config: &'de Config,
    registry: &'de TypeRegistry,
    current_depth: u32,
}

impl<'de> ReadContext<'de> {
    pub fn new(config: &'de Config, registry: &'de TypeRegistry) -> ReadContext<'de> {
        ReadContext {
            config,
            registry,
            current_depth: 0,
        }
    }

    #[inline(always)]
    pub fn config(&self) -> &'de Config {
        self.config
    }

    #[inline(always)]
    pub fn registry(&self) -> &'de TypeRegistry {
        self.registry
    }

    pub fn inc_depth(&mut self) -> Result<(), Error> {
        self.current_depth += 1;
        if self.current_depth > self.config.max_depth() {
            return Err(Error::depth_exceed(format!(
                "Maximum nesting depth ({}) exceeded while reading",
                self.config.max_depth()
            )));
        }
        Ok(())
    }

    pub fn dec_depth(&mut self) {
        self.current_depth = self.current_depth.saturating_sub(1);
    }

    /// Coerces `value` into `T`, counting it against the depth limit.
    pub fn coerce<T: Serializer>(&mut self, value: Value) -> Result<T, Error> {
        self.inc_depth()?;
        if ENABLE_HATCHET_DEBUG_OUTPUT {
            tracing::trace!(
                target_type = std::any::type_name::<T>(),
                kind = value.kind_name(),
                depth = self.current_depth,
                "coerce"
            );
        }
        let result = T::hatchet_read(value, self);
        self.dec_depth();
        result
    }
}
