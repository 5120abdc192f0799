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

use crate::error::Error;
use crate::resolver::context::{ReadContext, WriteContext};
use crate::serializer::collection::{expect_sequence, write_collection};
use crate::serializer::Serializer;
use crate::types::TypeKind;
use crate::value::Value;

/// Validates that the input length matches the expected array size N.
#[inline(always)]
fn validate_array_length<A: ?Sized + 'static>(actual: usize, expected: usize) -> Result<(), Error> {
    if actual != expected {
        return Err(Error::conversion(format!(
            "Array length mismatch for {}: expected {}, got {}",
            std::any::type_name::<A>(),
            expected,
            actual
        )));
    }
    Ok(())
}

fn read_elements<A: ?Sized + 'static, T: Serializer>(
    value: Value,
    context: &mut ReadContext,
    expected_len: Option<usize>,
) -> Result<Vec<T>, Error> {
    let items = expect_sequence::<A>(value)?;
    if let Some(expected) = expected_len {
        validate_array_length::<A>(items.len(), expected)?;
    }
    items
        .into_iter()
        .map(|item| context.coerce::<T>(item))
        .collect()
}

impl<T: Serializer, const N: usize> Serializer for [T; N] {
    fn hatchet_write(&self, context: &mut WriteContext, force_class: bool) -> Result<(), Error> {
        write_collection(self.iter(), context, force_class)
    }

    fn hatchet_read(value: Value, context: &mut ReadContext) -> Result<Self, Error> {
        let elements = read_elements::<Self, T>(value, context, Some(N))?;
        elements
            .try_into()
            .map_err(|v: Vec<T>| Error::conversion(format!("Expected {} elements, got {}", N, v.len())))
    }

    #[inline(always)]
    fn hatchet_kind() -> TypeKind {
        TypeKind::Array
    }

    #[inline(always)]
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl<T: Serializer> Serializer for Box<[T]> {
    fn hatchet_write(&self, context: &mut WriteContext, force_class: bool) -> Result<(), Error> {
        write_collection(self.iter(), context, force_class)
    }

    fn hatchet_read(value: Value, context: &mut ReadContext) -> Result<Self, Error> {
        Ok(read_elements::<Self, T>(value, context, None)?.into_boxed_slice())
    }

    #[inline(always)]
    fn hatchet_kind() -> TypeKind {
        TypeKind::Array
    }

    #[inline(always)]
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
