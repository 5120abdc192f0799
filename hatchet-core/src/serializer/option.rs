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
use crate::serializer::Serializer;
use crate::types::TypeKind;
use crate::value::Value;

/// `null`, in any letter case, reads as `None`. `None` members are skipped
/// by the record writer and written as `null` anywhere else.
impl<T: Serializer> Serializer for Option<T> {
    fn hatchet_write(&self, context: &mut WriteContext, force_class: bool) -> Result<(), Error> {
        match self {
            Some(v) => v.hatchet_write(context, force_class),
            None => {
                context.printer.append("null");
                Ok(())
            }
        }
    }

    fn hatchet_read(value: Value, context: &mut ReadContext) -> Result<Self, Error> {
        if value.is_null() {
            return Ok(None);
        }
        T::hatchet_read(value, context).map(Some)
    }

    #[inline(always)]
    fn hatchet_kind() -> TypeKind {
        TypeKind::Nullable
    }

    /// `Some` of a zero value counts as a zero value.
    #[inline(always)]
    fn hatchet_is_default(&self) -> bool {
        self.as_ref().is_some_and(|v| v.hatchet_is_default())
    }

    #[inline(always)]
    fn hatchet_is_none(&self) -> bool {
        self.is_none()
    }

    #[inline(always)]
    fn hatchet_is_polymorphic() -> bool {
        T::hatchet_is_polymorphic()
    }

    fn hatchet_scalar_text(&self) -> Option<Cow<'_, str>> {
        self.as_ref().and_then(|v| v.hatchet_scalar_text())
    }

    #[inline(always)]
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
