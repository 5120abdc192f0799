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

//! Bit-flag sets declared with the `bitflags` crate.
//!
//! Always written in bracket form: `[]` for the empty set, `[Alpha]` for a
//! single flag, `[Alpha Bravo]` for a union. Bits without a declared name
//! are written last as one hex token (`[Alpha 0x40]`) and read back the
//! same way.

use bitflags::parser::{ParseHex, WriteHex};
use bitflags::{Bits, Flags};

use crate::error::Error;
use crate::resolver::context::WriteContext;
use crate::value::Value;

pub fn write<T: Flags>(this: &T, context: &mut WriteContext) -> Result<(), Error>
where
    T::Bits: WriteHex,
{
    context.printer.append_char('[');
    let mut first = true;
    for (name, _) in this.iter_names() {
        if !first {
            context.printer.append_char(' ');
        }
        first = false;
        context.printer.append_token(name);
    }
    let unnamed = this.bits() & !T::all().bits();
    if unnamed != <T::Bits as Bits>::EMPTY {
        let mut hex = String::from("0x");
        unnamed
            .write_hex(&mut hex)
            .map_err(|e| Error::conversion(e.to_string()))?;
        if !first {
            context.printer.append_char(' ');
        }
        context.printer.append_token(&hex);
    }
    context.printer.append_char(']');
    Ok(())
}

fn flag_named<T: Flags>(text: &str) -> Option<T>
where
    T::Bits: ParseHex,
{
    let text = text.trim();
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        return <T::Bits as ParseHex>::parse_hex(hex)
            .ok()
            .map(T::from_bits_retain);
    }
    T::FLAGS
        .iter()
        .find(|flag| !flag.name().is_empty() && flag.name().eq_ignore_ascii_case(text))
        .map(|flag| T::from_bits_retain(flag.value().bits()))
}

fn flags_of_scalar<T: Flags>(text: &str) -> Option<T>
where
    T::Bits: ParseHex,
{
    text.split(',')
        .filter(|part| !part.trim().is_empty())
        .try_fold(T::empty(), |acc, part| flag_named::<T>(part).map(|f| acc.union(f)))
}

pub fn read<T: Flags + 'static>(value: Value) -> Result<T, Error>
where
    T::Bits: ParseHex,
{
    let flags = match &value {
        Value::Scalar(text) => flags_of_scalar::<T>(text),
        Value::Sequence(items) => items.iter().try_fold(T::empty(), |acc, item| {
            item.as_scalar()
                .and_then(flags_of_scalar::<T>)
                .map(|f| acc.union(f))
        }),
        Value::Mapping(_) => None,
    };
    flags.ok_or_else(|| Error::cannot_convert::<T>(&value))
}

#[inline(always)]
pub fn is_default<T: Flags>(this: &T) -> bool {
    this.is_empty()
}
