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

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use indexmap::IndexMap;

use crate::error::Error;
use crate::resolver::context::{ReadContext, WriteContext};
use crate::serializer::Serializer;
use crate::types::TypeKind;
use crate::value::Value;

/// Writes `{}` for an empty map, otherwise a block of `key value` lines.
///
/// Keys use their scalar text form; keys without one are unsupported.
pub fn write_map<'a, K, V, I>(
    iter: I,
    len: usize,
    context: &mut WriteContext,
) -> Result<(), Error>
where
    K: Serializer + 'a,
    V: Serializer + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    if len == 0 {
        context.printer.append("{}");
        return Ok(());
    }
    context.printer.open_block();
    for (key, value) in iter {
        let key_text = key.hatchet_scalar_text().ok_or_else(|| {
            Error::unsupported_type(format!(
                "Map key type {} has no scalar form",
                std::any::type_name::<K>()
            ))
        })?;
        context.write_key_value(&key_text, value, V::hatchet_is_polymorphic())?;
    }
    context.printer.close_block();
    Ok(())
}

/// Coerces each key from its scalar text and each value from its entry.
pub fn read_map<M, K, V>(value: Value, context: &mut ReadContext) -> Result<M, Error>
where
    M: FromIterator<(K, V)> + 'static,
    K: Serializer,
    V: Serializer,
{
    match value {
        Value::Mapping(entries) => entries
            .into_iter()
            .map(|(key, value)| {
                let key = context.coerce::<K>(Value::Scalar(key))?;
                let value = context.coerce::<V>(value)?;
                Ok((key, value))
            })
            .collect(),
        other => Err(Error::cannot_convert::<M>(&other)),
    }
}

impl<K: Serializer + Eq + Hash, V: Serializer> Serializer for HashMap<K, V> {
    fn hatchet_write(&self, context: &mut WriteContext, _: bool) -> Result<(), Error> {
        write_map(self.iter(), self.len(), context)
    }

    fn hatchet_read(value: Value, context: &mut ReadContext) -> Result<Self, Error> {
        read_map(value, context)
    }

    #[inline(always)]
    fn hatchet_kind() -> TypeKind {
        TypeKind::Map
    }

    #[inline(always)]
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl<K: Serializer + Ord, V: Serializer> Serializer for BTreeMap<K, V> {
    fn hatchet_write(&self, context: &mut WriteContext, _: bool) -> Result<(), Error> {
        write_map(self.iter(), self.len(), context)
    }

    fn hatchet_read(value: Value, context: &mut ReadContext) -> Result<Self, Error> {
        read_map(value, context)
    }

    #[inline(always)]
    fn hatchet_kind() -> TypeKind {
        TypeKind::Map
    }

    #[inline(always)]
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl<K: Serializer + Eq + Hash, V: Serializer> Serializer for IndexMap<K, V> {
    fn hatchet_write(&self, context: &mut WriteContext, _: bool) -> Result<(), Error> {
        write_map(self.iter(), self.len(), context)
    }

    fn hatchet_read(value: Value, context: &mut ReadContext) -> Result<Self, Error> {
        read_map(value, context)
    }

    #[inline(always)]
    fn hatchet_kind() -> TypeKind {
        TypeKind::Map
    }

    #[inline(always)]
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
