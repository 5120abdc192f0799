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

//! # Hatchet Derive Macros
//!
//! Procedural macros generating `hatchet_core` codecs.
//!
//! ## `#[derive(HatchetObject)]`
//!
//! On a struct (named or tuple fields), implements `Serializer` and
//! `StructSerializer`. The struct must also implement `Default`: records are
//! default-constructed and then filled from the keys present in the input.
//!
//! On a field-less enum, implements `Serializer` and `EnumSerializer`.
//! Variants are matched by name ignoring case.
//!
//! ```rust,ignore
//! use hatchet_derive::HatchetObject;
//!
//! #[derive(HatchetObject, Default)]
//! #[hatchet(rename_all = "PascalCase")]
//! struct Person {
//!     name: String,
//!     age: u32,
//!     #[hatchet(ignore)]
//!     cache: Vec<u8>,
//! }
//!
//! #[derive(HatchetObject, Default)]
//! enum Mood {
//!     #[default]
//!     Calm,
//!     Loud,
//! }
//! ```
//!
//! Container attributes:
//! - `#[hatchet(name = "...")]` - name written on `Class` lines
//! - `#[hatchet(rename_all = "PascalCase" | "camelCase" | "snake_case")]`
//! - `#[hatchet(factory = "path::to::fn")]` - build from a scalar through
//!   `fn(&str) -> Result<Self, E>` with `E: Display`
//! - `#[hatchet(from_str)]` - build from a scalar through `FromStr`
//! - `#[hatchet(from_string)]` - build from a scalar through `From<String>`
//!
//! Field attributes:
//! - `#[hatchet(ignore)]` (or `skip`) - never read or written
//! - `#[hatchet(value)]` - the whole record is written as this field's value
//! - `#[hatchet(rename = "...")]`
//!
//! ## `#[derive(HatchetFlags)]`
//!
//! For types declared with `bitflags!`; the derive goes inside the macro:
//!
//! ```rust,ignore
//! bitflags::bitflags! {
//!     #[derive(Debug, Clone, Copy, PartialEq, Eq, HatchetFlags)]
//!     struct Access: u8 {
//!         const READ = 1;
//!         const WRITE = 2;
//!     }
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod object;
mod util;

#[proc_macro_derive(HatchetObject, attributes(hatchet))]
pub fn proc_macro_derive_hatchet_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    object::derive_serializer(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[proc_macro_derive(HatchetFlags)]
pub fn proc_macro_derive_hatchet_flags(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    object::derive_flags(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
