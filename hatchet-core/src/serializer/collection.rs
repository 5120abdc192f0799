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

use std::collections::{BTreeSet, HashSet, LinkedList, VecDeque};
use std::hash::Hash;

use crate::error::Error;
use crate::resolver::context::{ReadContext, WriteContext};
use crate::serializer::Serializer;
use crate::types::TypeKind;
use crate::value::Value;

/// Writes `[a b c]`, forcing `Class` lines when the element type is
/// polymorphic.
pub fn write_collection<'a, T: Serializer + 'a, I: IntoIterator<Item = &'a T>>(
    iter: I,
    context: &mut WriteContext,
    force_class: bool,
) -> Result<(), Error> {
    let force_class = force_class || T::hatchet_is_polymorphic();
    context.printer.append_char('[');
    for (i, item) in iter.into_iter().enumerate() {
        if i > 0 {
            context.printer.append_char(' ');
        }
        context.write_value(item, force_class)?;
    }
    context.printer.append_char(']');
    Ok(())
}

/// Unwraps a sequence, failing with a conversion error naming `C`.
pub fn expect_sequence<C: ?Sized + 'static>(value: Value) -> Result<Vec<Value>, Error> {
    match value {
        Value::Sequence(items) => Ok(items),
        other => Err(Error::cannot_convert::<C>(&other)),
    }
}

/// Coerces every element of a sequence in order.
pub fn read_collection<C, T>(value: Value, context: &mut ReadContext) -> Result<C, Error>
where
    C: FromIterator<T> + 'static,
    T: Serializer,
{
    expect_sequence::<C>(value)?
        .into_iter()
        .map(|item| context.coerce::<T>(item))
        .collect()
}

macro_rules! impl_list_serializer {
    ($($list:ident),+ $(,)?) => {
        $(
            impl<T: Serializer> Serializer for $list<T> {
                fn hatchet_write(&self, context: &mut WriteContext, force_class: bool) -> Result<(), Error> {
                    write_collection(self, context, force_class)
                }

                fn hatchet_read(value: Value, context: &mut ReadContext) -> Result<Self, Error> {
                    read_collection(value, context)
                }

                #[inline(always)]
                fn hatchet_kind() -> TypeKind {
                    TypeKind::List
                }

                #[inline(always)]
                fn as_any(&self) -> &dyn std::any::Any {
                    self
                }
            }
        )+
    };
}

impl_list_serializer!(Vec, VecDeque, LinkedList);

impl<T: Serializer + Eq + Hash> Serializer for HashSet<T> {
    fn hatchet_write(&self, context: &mut WriteContext, force_class: bool) -> Result<(), Error> {
        write_collection(self, context, force_class)
    }

    fn hatchet_read(value: Value, context: &mut ReadContext) -> Result<Self, Error> {
        read_collection(value, context)
    }

    #[inline(always)]
    fn hatchet_kind() -> TypeKind {
        TypeKind::Set
    }

    #[inline(always)]
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl<T: Serializer + Ord> Serializer for BTreeSet<T> {
    fn hatchet_write(&self, context: &mut WriteContext, force_class: bool) -> Result<(), Error> {
        write_collection(self, context, force_class)
    }

    fn hatchet_read(value: Value, context: &mut ReadContext) -> Result<Self, Error> {
        read_collection(value, context)
    }

    #[inline(always)]
    fn hatchet_kind() -> TypeKind {
        TypeKind::Set
    }

    #[inline(always)]
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
