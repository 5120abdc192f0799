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

use std::borrow::Cow;

use crate::error::Error;
use crate::resolver::context::{ReadContext, WriteContext};
use crate::serializer::{expect_scalar, Serializer};
use crate::types::TypeKind;
use crate::value::Value;

macro_rules! impl_num_serializer {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Serializer for $ty {
                #[inline(always)]
                fn hatchet_write(&self, context: &mut WriteContext, _: bool) -> Result<(), Error> {
                    context.printer.append(&self.to_string());
                    Ok(())
                }

                fn hatchet_read(value: Value, _: &mut ReadContext) -> Result<Self, Error> {
                    let text = expect_scalar::<Self>(value)?;
                    text.trim()
                        .parse::<$ty>()
                        .map_err(|_| Error::cannot_convert::<$ty>(&text))
                }

                #[inline(always)]
                fn hatchet_kind() -> TypeKind {
                    TypeKind::Primitive
                }

                #[inline(always)]
                fn hatchet_is_default(&self) -> bool {
                    *self == <$ty>::default()
                }

                #[inline(always)]
                fn hatchet_scalar_text(&self) -> Option<Cow<'_, str>> {
                    Some(Cow::Owned(self.to_string()))
                }

                #[inline(always)]
                fn as_any(&self) -> &dyn std::any::Any {
                    self
                }
            }
        )+
    };
}

impl_num_serializer!(i8, i16, i32, i64, i128, isize);
impl_num_serializer!(u8, u16, u32, u64, u128, usize);
impl_num_serializer!(f32, f64);

// Scale is kept through `Display`, so `12.50` is written back as `12.50`.
impl_num_serializer!(rust_decimal::Decimal);

impl Serializer for char {
    fn hatchet_write(&self, context: &mut WriteContext, _: bool) -> Result<(), Error> {
        let mut buf = [0u8; 4];
        context.printer.append_token(self.encode_utf8(&mut buf));
        Ok(())
    }

    fn hatchet_read(value: Value, _: &mut ReadContext) -> Result<Self, Error> {
        let text = expect_scalar::<Self>(value)?;
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(Error::cannot_convert::<char>(&text)),
        }
    }

    fn hatchet_kind() -> TypeKind {
        TypeKind::Primitive
    }

    fn hatchet_is_default(&self) -> bool {
        *self == '\0'
    }

    fn hatchet_scalar_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.to_string()))
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
