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

//! Field-less Rust enums, matched by variant name ignoring case.
//!
//! A sequence or a comma-separated scalar ORs the named discriminants
//! together; the result must itself be a declared discriminant.

use crate::error::Error;
use crate::resolver::context::WriteContext;
use crate::serializer::EnumSerializer;
use crate::value::Value;

#[inline(always)]
pub fn write<T: EnumSerializer>(this: &T, context: &mut WriteContext) -> Result<(), Error> {
    let name = this.hatchet_name();
    if name.is_empty() {
        context.printer.append(&this.hatchet_bits().to_string());
    } else {
        context.printer.append_token(name);
    }
    Ok(())
}

/// Discriminant of a single variant name, or of a numeric literal.
fn bits_of<T: EnumSerializer>(text: &str) -> Option<u64> {
    let text = text.trim();
    T::hatchet_variants()
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(text))
        .map(|(_, bits)| *bits)
        .or_else(|| text.parse::<i64>().ok().map(|n| n as u64))
}

fn bits_of_scalar<T: EnumSerializer>(text: &str) -> Option<u64> {
    if text.contains(',') {
        text.split(',')
            .try_fold(0u64, |acc, part| bits_of::<T>(part).map(|bits| acc | bits))
    } else {
        bits_of::<T>(text)
    }
}

pub fn read<T: EnumSerializer>(value: Value) -> Result<T, Error> {
    let bits = match &value {
        Value::Scalar(text) => bits_of_scalar::<T>(text),
        Value::Sequence(items) => items.iter().try_fold(0u64, |acc, item| {
            item.as_scalar()
                .and_then(bits_of_scalar::<T>)
                .map(|bits| acc | bits)
        }),
        Value::Mapping(_) => None,
    };
    bits.and_then(T::hatchet_from_bits)
        .ok_or_else(|| Error::cannot_convert::<T>(&value))
}

#[inline(always)]
pub fn is_default<T: EnumSerializer>(this: &T) -> bool {
    this.hatchet_bits() == 0
}
