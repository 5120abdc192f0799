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

use std::fmt;

/// Shape of a target type as seen by the coercion engines.
///
/// Descriptive only: each `Serializer` impl picks its own read and write
/// path, and the kind is recorded on member descriptors for inspection and
/// zero-value omission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TypeKind {
    Nullable,
    Set,
    List,
    Map,
    Array,
    Enum,
    Flags,
    Identifier,
    DateTime,
    Bool,
    Primitive,
    String,
    Record,
    Polymorphic,
    /// `Box`, `Rc`, `Arc` or `RefCell` around another shape.
    Pointer,
    /// An untyped [`Value`](crate::value::Value) passed through as-is.
    Dynamic,
}

impl TypeKind {
    /// Shapes whose zero value is omitted from output unless
    /// `include_default_values` is set.
    pub fn is_value_type(self) -> bool {
        matches!(
            self,
            TypeKind::Enum
                | TypeKind::Flags
                | TypeKind::Identifier
                | TypeKind::DateTime
                | TypeKind::Bool
                | TypeKind::Primitive
        )
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TypeKind::Nullable => "nullable",
            TypeKind::Set => "set",
            TypeKind::List => "list",
            TypeKind::Map => "map",
            TypeKind::Array => "array",
            TypeKind::Enum => "enum",
            TypeKind::Flags => "flags",
            TypeKind::Identifier => "identifier",
            TypeKind::DateTime => "datetime",
            TypeKind::Bool => "bool",
            TypeKind::Primitive => "primitive",
            TypeKind::String => "string",
            TypeKind::Record => "record",
            TypeKind::Polymorphic => "polymorphic",
            TypeKind::Pointer => "pointer",
            TypeKind::Dynamic => "dynamic",
        };
        f.write_str(name)
    }
}

/// Last path segment of a Rust type name, without generic arguments.
///
/// `my_app::model::Dog` becomes `Dog`, `alloc::vec::Vec<i32>` becomes `Vec`.
pub fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
