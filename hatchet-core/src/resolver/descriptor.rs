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

//! Per-type member descriptors, memoized for the life of the process.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;

use crate::serializer::StructSerializer;
use crate::types::TypeKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemberKind {
    /// A named struct field.
    Named,
    /// A tuple-struct field, keyed by its index.
    Positional,
}

/// One writable member of a record type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberInfo {
    /// Key used on the wire.
    pub name: &'static str,
    pub kind: MemberKind,
    /// Declared Rust type, as written in the source.
    pub type_name: &'static str,
    /// Declared shape; `None` for ignored members, whose type need not be
    /// serializable.
    pub type_kind: Option<TypeKind>,
    pub ignored: bool,
    pub value_surrogate: bool,
    /// The declared type is a trait object, so its `Class` is always written.
    pub polymorphic: bool,
}

impl MemberInfo {
    pub fn named(name: &'static str, type_name: &'static str, type_kind: TypeKind) -> Self {
        MemberInfo {
            name,
            kind: MemberKind::Named,
            type_name,
            type_kind: Some(type_kind),
            ignored: false,
            value_surrogate: false,
            polymorphic: false,
        }
    }
}

/// Ordered member list of a record type.
#[derive(Clone, Debug)]
pub struct TypeDescriptor {
    /// Short name used for `Class` lines when the type is not registered.
    pub type_name: &'static str,
    pub rust_name: &'static str,
    pub members: Vec<MemberInfo>,
    /// Index of the value-surrogate member.
    pub surrogate: Option<usize>,
}

impl TypeDescriptor {
    pub fn new(
        type_name: &'static str,
        rust_name: &'static str,
        members: Vec<MemberInfo>,
    ) -> TypeDescriptor {
        let surrogate = members
            .iter()
            .position(|m| m.value_surrogate && !m.ignored);
        TypeDescriptor {
            type_name,
            rust_name,
            members,
            surrogate,
        }
    }

    /// Index of the non-ignored member keyed `name`.
    pub fn member_index(&self, name: &str) -> Option<usize> {
        self.members
            .iter()
            .position(|m| !m.ignored && m.name == name)
    }

    /// Non-ignored members in declaration order, with their indices.
    pub fn writable_members(&self) -> impl Iterator<Item = (usize, &MemberInfo)> {
        self.members.iter().enumerate().filter(|(_, m)| !m.ignored)
    }

    pub fn surrogate_member(&self) -> Option<(usize, &MemberInfo)> {
        self.surrogate.map(|i| (i, &self.members[i]))
    }
}

type DescriptorCache = RwLock<HashMap<TypeId, Arc<TypeDescriptor>>>;

static DESCRIPTORS: LazyLock<DescriptorCache> = LazyLock::new(|| RwLock::new(HashMap::new()));

/// Returns the cached descriptor of `T`, building it on first use.
///
/// Two threads racing on the first build both compute the descriptor; the
/// first insert wins and both get the same `Arc`.
pub fn descriptor_of<T: StructSerializer>() -> Arc<TypeDescriptor> {
    let type_id = TypeId::of::<T>();
    if let Some(descriptor) = DESCRIPTORS.read().get(&type_id) {
        return descriptor.clone();
    }
    let built = Arc::new(TypeDescriptor::new(
        T::hatchet_type_name(),
        std::any::type_name::<T>(),
        T::hatchet_members(),
    ));
    tracing::debug!(
        type_name = built.type_name,
        members = built.members.len(),
        "built type descriptor"
    );
    DESCRIPTORS.write().entry(type_id).or_insert(built).clone()
}

/// Number of cached descriptors.
pub fn cached_descriptor_count() -> usize {
    DESCRIPTORS.read().len()
}
