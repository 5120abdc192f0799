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

//! Polymorphic values behind `Box<dyn Trait>`.
//!
//! The concrete type travels as the `Class` key of a mapping and is looked
//! up in the type registry on the way back in.

use crate::error::Error;
use crate::resolver::context::ReadContext;
use crate::resolver::type_registry::RegisteredType;
use crate::value::{Value, CLASS_KEY};

/// Resolves the `Class` key of a polymorphic input through the registry.
pub fn resolve_class<'de>(
    value: &Value,
    context: &ReadContext<'de>,
    trait_name: &str,
) -> Result<&'de RegisteredType, Error> {
    let class = match value {
        Value::Mapping(map) => map.get(CLASS_KEY),
        other => {
            return Err(Error::conversion(format!(
                "Cannot convert `{other}` to Box<dyn {trait_name}>: expected a mapping with a `{CLASS_KEY}` key"
            )))
        }
    };
    let name = match class {
        Some(Value::Scalar(name)) => name,
        Some(other) => {
            return Err(Error::conversion(format!(
                "`{CLASS_KEY}` must be a scalar, got `{other}`"
            )))
        }
        None => {
            return Err(Error::conversion(format!(
                "Cannot convert `{value}` to Box<dyn {trait_name}>: missing `{CLASS_KEY}` key"
            )))
        }
    };
    context.registry().resolve_required(name)
}

/// Downcasts to each listed type in turn and writes the first match with
/// its `Class` line.
#[macro_export]
macro_rules! downcast_and_serialize {
    ($any_ref:expr, $context:expr, $trait_name:ident, $($impl_type:ty),+) => {{
        $(
            if let Some(concrete) = $any_ref.downcast_ref::<$impl_type>() {
                return <$impl_type as $crate::serializer::Serializer>::hatchet_write(concrete, $context, true);
            }
        )+
        Err($crate::error::Error::unsupported_type(format!(
            "Concrete type of Box<dyn {}> is not listed in register_trait_type!",
            stringify!($trait_name)
        )))
    }};
}

/// Reads the listed type that the resolved registry entry names.
#[macro_export]
macro_rules! resolve_and_deserialize {
    ($registered:expr, $value:expr, $context:expr, $trait_name:ident, $($impl_type:ty),+) => {{
        $(
            if $registered.is::<$impl_type>() {
                let concrete = <$impl_type as $crate::serializer::Serializer>::hatchet_read($value, $context)?;
                return Ok(Box::new(concrete));
            }
        )+
        Err($crate::error::Error::conversion(format!(
            "`Class {}` resolves to {}, which is not listed for Box<dyn {}>",
            $registered.name,
            $registered.rust_name,
            stringify!($trait_name)
        )))
    }};
}

/// Generates the codec for `Box<dyn Trait>` over a closed list of
/// implementations.
///
/// The trait must extend [`Serializer`](crate::serializer::Serializer), and
/// every implementation must be registered with the `Hatchet` instance that
/// reads it. `Default` for the box builds the first listed type.
///
/// # Example
///
/// ```rust,ignore
/// use hatchet_core::register_trait_type;
/// use hatchet_core::serializer::Serializer;
/// use hatchet_derive::HatchetObject;
///
/// trait Animal: Serializer {
///     fn name(&self) -> &str;
/// }
///
/// #[derive(HatchetObject, Default)]
/// struct Dog { name: String }
///
/// #[derive(HatchetObject, Default)]
/// struct Cat { name: String }
///
/// impl Animal for Dog {
///     fn name(&self) -> &str { &self.name }
/// }
///
/// impl Animal for Cat {
///     fn name(&self) -> &str { &self.name }
/// }
///
/// register_trait_type!(Animal, Dog, Cat);
/// ```
#[macro_export]
macro_rules! register_trait_type {
    (@first_type $first_type:ty $(, $rest:ty)*) => {
        $first_type
    };
    ($trait_name:ident, $($impl_type:ty),+ $(,)?) => {
        impl std::default::Default for Box<dyn $trait_name> {
            fn default() -> Self {
                Box::new(<$crate::register_trait_type!(@first_type $($impl_type),+) as std::default::Default>::default())
            }
        }

        impl $crate::serializer::Serializer for Box<dyn $trait_name> {
            fn hatchet_write(
                &self,
                context: &mut $crate::resolver::context::WriteContext,
                _force_class: bool,
            ) -> Result<(), $crate::error::Error> {
                let any_ref = <dyn $trait_name as $crate::serializer::Serializer>::as_any(&**self);
                $crate::downcast_and_serialize!(any_ref, context, $trait_name, $($impl_type),+)
            }

            fn hatchet_read(
                value: $crate::value::Value,
                context: &mut $crate::resolver::context::ReadContext,
            ) -> Result<Self, $crate::error::Error> {
                let registered = $crate::serializer::trait_object::resolve_class(
                    &value,
                    context,
                    stringify!($trait_name),
                )?;
                $crate::resolve_and_deserialize!(registered, value, context, $trait_name, $($impl_type),+)
            }

            fn hatchet_kind() -> $crate::types::TypeKind {
                $crate::types::TypeKind::Polymorphic
            }

            fn hatchet_is_polymorphic() -> bool {
                true
            }

            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }
    };
}
