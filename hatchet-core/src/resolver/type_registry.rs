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
use std::collections::HashMap;

use crate::error::Error;
use crate::types::short_type_name;

/// A concrete type reachable through a `Class` discriminator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisteredType {
    pub name: String,
    pub type_id: TypeId,
    /// Full Rust type name, for diagnostics.
    pub rust_name: &'static str,
}

impl RegisteredType {
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }
}

/// Discriminator name to concrete type lookup.
///
/// Populated by the host before any polymorphic input is read and only read
/// afterwards.
#[derive(Default)]
pub struct TypeRegistry {
    by_name: HashMap<String, RegisteredType>,
    name_by_id: HashMap<TypeId, String>,
}

impl TypeRegistry {
    pub fn new() -> TypeRegistry {
        TypeRegistry::default()
    }

    /// Registers `T` under `name`.
    ///
    /// Registering the same pair twice is a no-op. Reusing a name for a
    /// different type, or giving a type a second name, is rejected.
    pub fn register<T: 'static>(&mut self, name: &str) -> Result<(), Error> {
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(Error::not_allowed(format!(
                "Type name `{name}` must be non-empty and contain no whitespace"
            )));
        }
        let type_id = TypeId::of::<T>();
        let rust_name = std::any::type_name::<T>();
        if let Some(existing) = self.by_name.get(name) {
            if existing.type_id == type_id {
                return Ok(());
            }
            return Err(Error::not_allowed(format!(
                "Type name `{name}` is already registered for {}",
                existing.rust_name
            )));
        }
        if let Some(existing) = self.name_by_id.get(&type_id) {
            return Err(Error::not_allowed(format!(
                "{rust_name} is already registered as `{existing}`"
            )));
        }
        tracing::debug!(name, rust_name, "registered type");
        self.by_name.insert(
            name.to_string(),
            RegisteredType {
                name: name.to_string(),
                type_id,
                rust_name,
            },
        );
        self.name_by_id.insert(type_id, name.to_string());
        Ok(())
    }

    /// Registers `T` under the last segment of its Rust type name.
    pub fn register_default_name<T: 'static>(&mut self) -> Result<(), Error> {
        self.register::<T>(short_type_name(std::any::type_name::<T>()))
    }

    pub fn resolve(&self, name: &str) -> Option<&RegisteredType> {
        self.by_name.get(name)
    }

    /// Like [`resolve`](Self::resolve), failing with an unknown-type error.
    pub fn resolve_required(&self, name: &str) -> Result<&RegisteredType, Error> {
        self.resolve(name)
            .ok_or_else(|| Error::unknown_type(name.to_string()))
    }

    /// Registered name of a concrete type, used when writing `Class` lines.
    pub fn name_of(&self, type_id: TypeId) -> Option<&str> {
        self.name_by_id.get(&type_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
