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

use std::any::Any;
use std::borrow::Cow;

use crate::error::Error;
use crate::resolver::context::{ReadContext, WriteContext};
use crate::resolver::descriptor::MemberInfo;
use crate::types::TypeKind;
use crate::value::Value;

/// Two-way codec between a Rust type and Hatchet values.
///
/// The trait is object safe: the serialization engine walks record members
/// as `&dyn Serializer`. Reading always needs the concrete type.
pub trait Serializer: 'static {
    /// Writes `self` at the printer's current position.
    ///
    /// `force_class` asks records to emit their `Class` line first.
    fn hatchet_write(&self, context: &mut WriteContext, force_class: bool) -> Result<(), Error>;

    /// Coerces an untyped value into `Self`.
    fn hatchet_read(value: Value, context: &mut ReadContext) -> Result<Self, Error>
    where
        Self: Sized;

    fn hatchet_kind() -> TypeKind
    where
        Self: Sized;

    /// True when `self` is its type's zero value and may be omitted as a
    /// member.
    #[inline(always)]
    fn hatchet_is_default(&self) -> bool {
        false
    }

    #[inline(always)]
    fn hatchet_is_none(&self) -> bool {
        false
    }

    /// True for trait objects, whose concrete type must be written.
    #[inline(always)]
    fn hatchet_is_polymorphic() -> bool
    where
        Self: Sized,
    {
        false
    }

    /// Text form of a scalar-like value, used for mapping keys.
    #[inline(always)]
    fn hatchet_scalar_text(&self) -> Option<Cow<'_, str>> {
        None
    }

    fn as_any(&self) -> &dyn Any;
}

/// Record types, usually implemented by `#[derive(HatchetObject)]`.
///
/// Members are addressed by their index in [`hatchet_members`](Self::hatchet_members).
pub trait StructSerializer: Serializer + Default + Sized {
    /// Short name written on `Class` lines when the type is not registered.
    fn hatchet_type_name() -> &'static str;

    fn hatchet_members() -> Vec<MemberInfo>;

    /// Borrows a member for writing; `None` for ignored members.
    fn hatchet_member(&self, index: usize) -> Option<&dyn Serializer>;

    /// Coerces `value` into the member's declared type and assigns it.
    fn hatchet_set_member(
        &mut self,
        index: usize,
        value: Value,
        context: &mut ReadContext,
    ) -> Result<(), Error>;

    /// Builds the record from a scalar through a factory or a string
    /// constructor. `None` when the record has neither.
    #[allow(unused_variables)]
    fn hatchet_from_scalar(text: &str) -> Option<Result<Self, Error>> {
        None
    }
}

/// Field-less enums, usually implemented by `#[derive(HatchetObject)]`.
pub trait EnumSerializer: Serializer + Sized {
    /// Wire names and discriminants, in declaration order.
    fn hatchet_variants() -> &'static [(&'static str, u64)];

    fn hatchet_bits(&self) -> u64;

    fn hatchet_from_bits(bits: u64) -> Option<Self>;

    fn hatchet_name(&self) -> &'static str {
        let bits = self.hatchet_bits();
        Self::hatchet_variants()
            .iter()
            .find(|(_, v)| *v == bits)
            .map(|(name, _)| *name)
            .unwrap_or("")
    }
}
