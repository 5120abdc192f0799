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
use crate::serializer::collection::write_collection;
use crate::serializer::Serializer;
use crate::types::TypeKind;
use crate::value::Value;

/// Untyped passthrough: reading keeps the tree as parsed, writing emits it
/// in block form.
impl Serializer for Value {
    fn hatchet_write(&self, context: &mut WriteContext, force_class: bool) -> Result<(), Error> {
        match self {
            Value::Scalar(text) => {
                context.printer.append_token(text);
                Ok(())
            }
            Value::Sequence(items) => write_collection(items, context, force_class),
            Value::Mapping(map) if map.is_empty() => {
                context.printer.append("{}");
                Ok(())
            }
            Value::Mapping(map) => {
                context.printer.open_block();
                for (key, value) in map {
                    context.write_key_value(key, value, false)?;
                }
                context.printer.close_block();
                Ok(())
            }
        }
    }

    #[inline(always)]
    fn hatchet_read(value: Value, _: &mut ReadContext) -> Result<Self, Error> {
        Ok(value)
    }

    #[inline(always)]
    fn hatchet_kind() -> TypeKind {
        TypeKind::Dynamic
    }

    fn hatchet_scalar_text(&self) -> Option<Cow<'_, str>> {
        self.as_scalar().map(Cow::Borrowed)
    }

    #[inline(always)]
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
