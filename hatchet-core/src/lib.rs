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

//! # Hatchet Core
//!
//! Parser, value model and type-directed codec for the Hatchet text
//! notation: braces delimit object blocks, brackets delimit arrays, and
//! scalars are bare or double-quoted tokens.
//!
//! ```text
//! {
//!   Name "Rex"
//!   Tags [good loud]
//!   Owner {
//!     Class Person
//!     Name "Ann"
//!   }
//! }
//! ```
//!
//! Text is first parsed into an untyped [`Value`](value::Value) tree, then
//! coerced into the requested Rust type by walking the type's
//! [`Serializer`](serializer::Serializer) implementation. Writing walks the
//! same implementations in the opposite direction and renders the result
//! through the [`PrettyPrinter`](pretty::PrettyPrinter).
//!
//! ## Modules
//!
//! - [`parser`] - text to `Value`
//! - [`value`] - the untyped tree
//! - [`serializer`] - the `Serializer` trait and its implementations
//! - [`resolver`] - read/write contexts, type registry, descriptor cache
//! - [`pretty`] - indentation-aware output
//! - [`hatchet`] - the [`Hatchet`](hatchet::Hatchet) entry point
//! - [`error`] - the [`Error`](error::Error) type
//!
//! Derived record and enum types come from the `hatchet-derive` crate; most
//! users depend on the `hatchet` facade crate, which re-exports both.

pub mod config;
pub mod error;
pub mod hatchet;
pub mod parser;
pub mod pretty;
pub mod resolver;
pub mod serializer;
pub mod types;
pub mod util;
pub mod value;

pub use crate::config::Config;
pub use crate::error::Error;
pub use crate::hatchet::{from_str, to_string, Hatchet};
pub use crate::resolver::context::{ReadContext, WriteContext};
pub use crate::resolver::descriptor::{MemberInfo, MemberKind, TypeDescriptor};
pub use crate::resolver::type_registry::{RegisteredType, TypeRegistry};
pub use crate::serializer::{EnumSerializer, Serializer, StructSerializer};
pub use crate::types::TypeKind;
pub use crate::value::{Mapping, Value};
