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

impl Serializer for String {
    #[inline(always)]
    fn hatchet_write(&self, context: &mut WriteContext, _: bool) -> Result<(), Error> {
        context.printer.append_string(self);
        Ok(())
    }

    #[inline(always)]
    fn hatchet_read(value: Value, _: &mut ReadContext) -> Result<Self, Error> {
        expect_scalar::<Self>(value)
    }

    #[inline(always)]
    fn hatchet_kind() -> TypeKind {
        TypeKind::String
    }

    #[inline(always)]
    fn hatchet_scalar_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }

    #[inline(always)]
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
