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

//! Read and write paths shared by every derived record type.

use std::any::TypeId;

use crate::error::Error;
use crate::resolver::context::{ReadContext, WriteContext};
use crate::resolver::descriptor::descriptor_of;
use crate::serializer::StructSerializer;
use crate::value::{Value, CLASS_KEY};

/// Writes a record.
///
/// A record with a value-surrogate member is written as that member's value
/// alone. Otherwise it is a block with an optional `Class` line followed by
/// each non-ignored member in declaration order.
pub fn write<T: StructSerializer>(
    this: &T,
    context: &mut WriteContext,
    force_class: bool,
) -> Result<(), Error> {
    let descriptor = descriptor_of::<T>();
    if let Some((index, _)) = descriptor.surrogate_member() {
        if let Some(member) = this.hatchet_member(index) {
            return context.write_value(member, false);
        }
    }
    context.printer.open_block();
    if force_class {
        context.write_class_line(TypeId::of::<T>(), descriptor.type_name);
    }
    for (index, info) in descriptor.writable_members() {
        if let Some(member) = this.hatchet_member(index) {
            context.write_key_value(info.name, member, info.polymorphic)?;
        }
    }
    context.printer.close_block();
    Ok(())
}

/// Reads a record.
///
/// * scalar: factory or string constructor, else the value-surrogate member;
/// * mapping: the `Class` key, if any, must resolve to `T`; the record is
///   default-constructed and every member named by a key is coerced and set;
/// * sequence: only through a value-surrogate member, else a conversion error.
pub fn read<T: StructSerializer>(value: Value, context: &mut ReadContext) -> Result<T, Error> {
    let descriptor = descriptor_of::<T>();
    let entries = match value {
        Value::Mapping(entries) => entries,
        Value::Scalar(text) => {
            if let Some(result) = T::hatchet_from_scalar(&text) {
                return result;
            }
            return read_surrogate(Value::Scalar(text), context);
        }
        sequence @ Value::Sequence(_) => return read_surrogate(sequence, context),
    };

    if descriptor.member_index(CLASS_KEY).is_none() {
        if let Some(class) = entries.get(CLASS_KEY) {
            check_class::<T>(class, context)?;
        }
    }

    let mut this = T::default();
    for (key, value) in entries {
        match descriptor.member_index(&key) {
            Some(index) => this
                .hatchet_set_member(index, value, context)
                .map_err(|e| e.in_member(&key, descriptor.type_name))?,
            None if key == CLASS_KEY => {}
            None => {
                tracing::trace!(key = %key, type_name = descriptor.type_name, "ignoring unmatched key");
            }
        }
    }
    Ok(this)
}

fn read_surrogate<T: StructSerializer>(value: Value, context: &mut ReadContext) -> Result<T, Error> {
    let descriptor = descriptor_of::<T>();
    let Some((index, member)) = descriptor.surrogate_member() else {
        return Err(Error::conversion(format!(
            "Cannot convert `{}` to {}: no factory, string constructor or value member",
            value, descriptor.rust_name
        )));
    };
    let mut this = T::default();
    this.hatchet_set_member(index, value, context)
        .map_err(|e| e.in_member(member.name, descriptor.type_name))?;
    Ok(this)
}

fn check_class<T: StructSerializer>(class: &Value, context: &ReadContext) -> Result<(), Error> {
    let name = class.as_scalar().ok_or_else(|| {
        Error::conversion(format!("`{CLASS_KEY}` must be a scalar, got `{class}`"))
    })?;
    let registered = context.registry().resolve_required(name)?;
    if !registered.is::<T>() {
        return Err(Error::conversion(format!(
            "`{CLASS_KEY} {name}` resolves to {}, which cannot be read as {}",
            registered.rust_name,
            std::any::type_name::<T>()
        )));
    }
    Ok(())
}
