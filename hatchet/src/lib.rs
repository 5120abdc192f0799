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

//! # Hatchet
//!
//! A compact, human-authored text notation with typed Rust round-tripping.
//! Braces delimit object blocks, brackets delimit arrays, and scalars are
//! bare or double-quoted tokens:
//!
//! ```text
//! {
//!   Name "Rex"
//!   Tags [good loud]
//!   Owner {
//!     Name "Ann"
//!   }
//! }
//! ```
//!
//! ## Records, enums and collections
//!
//! ```rust
//! use hatchet::{Error, Hatchet, HatchetObject};
//!
//! #[derive(HatchetObject, Debug, Default, PartialEq)]
//! #[hatchet(rename_all = "PascalCase")]
//! struct Dog {
//!     name: String,
//!     age: u32,
//!     tags: Vec<String>,
//!     owner: Option<Person>,
//!     mood: Mood,
//! }
//!
//! #[derive(HatchetObject, Debug, Default, PartialEq)]
//! #[hatchet(rename_all = "PascalCase")]
//! struct Person {
//!     name: String,
//! }
//!
//! #[derive(HatchetObject, Debug, Default, PartialEq)]
//! enum Mood {
//!     #[default]
//!     Calm,
//!     Loud,
//! }
//!
//! # fn main() -> Result<(), Error> {
//! let hatchet = Hatchet::default();
//! let dog: Dog = hatchet.deserialize(
//!     r#"{ Name "Rex" Age 3 Tags [good loud] Owner { Name "Ann" } Mood loud }"#,
//! )?;
//! assert_eq!(dog.owner.as_ref().map(|p| p.name.as_str()), Some("Ann"));
//! assert_eq!(dog.mood, Mood::Loud);
//!
//! let text = hatchet.serialize(&dog)?;
//! assert_eq!(
//!     text,
//!     "{\n  Name \"Rex\"\n  Age 3\n  Tags [\"good\" \"loud\"]\n  Owner {\n    Name \"Ann\"\n  }\n  Mood Loud\n}"
//! );
//! assert_eq!(hatchet.deserialize::<Dog>(&text)?, dog);
//! # Ok(())
//! # }
//! ```
//!
//! ## Polymorphism
//!
//! A `Class` key names the concrete type behind a `Box<dyn Trait>`. The
//! trait lists its implementations with [`register_trait_type!`] and every
//! implementation is registered by name on the [`Hatchet`] instance:
//!
//! ```rust
//! use hatchet::{register_trait_type, Error, Hatchet, HatchetObject, Serializer};
//!
//! trait Animal: Serializer {
//!     fn name(&self) -> &str;
//! }
//!
//! #[derive(HatchetObject, Default)]
//! #[hatchet(rename_all = "PascalCase")]
//! struct Dog {
//!     name: String,
//! }
//!
//! impl Animal for Dog {
//!     fn name(&self) -> &str {
//!         &self.name
//!     }
//! }
//!
//! register_trait_type!(Animal, Dog);
//!
//! # fn main() -> Result<(), Error> {
//! let mut hatchet = Hatchet::default();
//! hatchet.register::<Dog>("Dog")?;
//! let animal: Box<dyn Animal> = hatchet.deserialize(r#"{ Class Dog Name "Rex" }"#)?;
//! assert_eq!(animal.name(), "Rex");
//! assert_eq!(hatchet.serialize(&animal)?, "{\n  Class Dog\n  Name \"Rex\"\n}");
//! # Ok(())
//! # }
//! ```
//!
//! Derived types expand to paths under `hatchet_core`, so depend on
//! `hatchet-core` alongside this crate.

pub use hatchet_core::{
    error::Error, from_str, hatchet::Hatchet, register_trait_type, serializer::Serializer,
    to_string, value::Value, Config, TypeKind,
};
pub use hatchet_derive::{HatchetFlags, HatchetObject};
