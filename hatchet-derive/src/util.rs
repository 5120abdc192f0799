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

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Field, Fields, Index};

use crate::object::field_meta::{parse_field_meta, FieldMeta};

/// Source field with its original index, wire name and attributes.
///
/// For tuple structs the Rust name is the field's index as a string.
pub struct SourceField<'a> {
    pub original_index: usize,
    pub field: &'a Field,
    pub wire_name: String,
    pub is_tuple_struct: bool,
    pub meta: FieldMeta,
}

impl SourceField<'_> {
    /// `self.name` or `self.0`.
    pub fn accessor(&self) -> TokenStream {
        match &self.field.ident {
            Some(ident) => quote! { self.#ident },
            None => {
                let index = Index::from(self.original_index);
                quote! { self.#index }
            }
        }
    }
}

/// Returns fields in declaration order with their attributes parsed and
/// the container's `rename_all` rule applied.
pub fn source_fields(fields: &Fields, rename_all: Option<RenameRule>) -> syn::Result<Vec<SourceField<'_>>> {
    let is_tuple_struct = matches!(fields, Fields::Unnamed(_));
    fields
        .iter()
        .enumerate()
        .map(|(original_index, field)| {
            let meta = parse_field_meta(field)?;
            let rust_name = match &field.ident {
                Some(ident) => ident.to_string(),
                None => original_index.to_string(),
            };
            let wire_name = match (&meta.rename, rename_all) {
                (Some(rename), _) => rename.clone(),
                (None, Some(rule)) if !is_tuple_struct => rule.apply(&rust_name),
                _ => rust_name,
            };
            Ok(SourceField {
                original_index,
                field,
                wire_name,
                is_tuple_struct,
                meta,
            })
        })
        .collect()
}

/// Case conversion for `#[hatchet(rename_all = "...")]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenameRule {
    PascalCase,
    CamelCase,
    SnakeCase,
}

impl RenameRule {
    pub fn parse(rule: &str) -> Option<RenameRule> {
        match rule {
            "PascalCase" => Some(RenameRule::PascalCase),
            "camelCase" => Some(RenameRule::CamelCase),
            "snake_case" => Some(RenameRule::SnakeCase),
            _ => None,
        }
    }

    pub fn apply(self, name: &str) -> String {
        match self {
            RenameRule::PascalCase => to_pascal_case(name),
            RenameRule::CamelCase => {
                let pascal = to_pascal_case(name);
                let mut chars = pascal.chars();
                match chars.next() {
                    Some(first) => first.to_lowercase().chain(chars).collect(),
                    None => pascal,
                }
            }
            RenameRule::SnakeCase => to_snake_case(name),
        }
    }
}

/// `first_name` and `FirstName` both become `FirstName`.
pub fn to_pascal_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = true;
    for c in name.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// `FirstName` and `firstName` both become `first_name`.
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
