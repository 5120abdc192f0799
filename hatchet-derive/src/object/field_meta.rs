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

//! Parsing of `#[hatchet(...)]` attributes.
//!
//! Container: `name = "..."`, `rename_all = "..."`, `factory = "path"`,
//! `from_str`, `from_string`.
//! Field: `ignore` (alias `skip`), `value`, `rename = "..."`.
//! Variant: `rename = "..."`.

use syn::{Attribute, Field, LitStr, Path, Variant};

use crate::util::RenameRule;

/// How a record is built from a single scalar.
#[derive(Clone, Debug)]
pub enum ScalarConstructor {
    /// `fn(&str) -> Result<Self, E>` with `E: Display`.
    Factory(Path),
    /// `Self: FromStr` with a displayable error.
    FromStr,
    /// `Self: From<String>`.
    FromString,
}

#[derive(Clone, Debug, Default)]
pub struct ContainerMeta {
    pub name: Option<String>,
    pub rename_all: Option<RenameRule>,
    pub scalar_constructor: Option<ScalarConstructor>,
}

#[derive(Clone, Debug, Default)]
pub struct FieldMeta {
    pub ignore: bool,
    pub value: bool,
    pub rename: Option<String>,
}

fn hatchet_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("hatchet"))
}

fn set_constructor(
    meta: &mut ContainerMeta,
    constructor: ScalarConstructor,
    nested: &syn::meta::ParseNestedMeta,
) -> syn::Result<()> {
    if meta.scalar_constructor.is_some() {
        return Err(nested.error(
            "only one of `factory`, `from_str` and `from_string` may be given",
        ));
    }
    meta.scalar_constructor = Some(constructor);
    Ok(())
}

pub fn parse_container_meta(attrs: &[Attribute]) -> syn::Result<ContainerMeta> {
    let mut meta = ContainerMeta::default();
    for attr in hatchet_attrs(attrs) {
        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("name") {
                let lit: LitStr = nested.value()?.parse()?;
                meta.name = Some(lit.value());
            } else if nested.path.is_ident("rename_all") {
                let lit: LitStr = nested.value()?.parse()?;
                let rule = RenameRule::parse(&lit.value()).ok_or_else(|| {
                    syn::Error::new(
                        lit.span(),
                        "expected one of `PascalCase`, `camelCase`, `snake_case`",
                    )
                })?;
                meta.rename_all = Some(rule);
            } else if nested.path.is_ident("factory") {
                let lit: LitStr = nested.value()?.parse()?;
                let path: Path = lit.parse()?;
                set_constructor(&mut meta, ScalarConstructor::Factory(path), &nested)?;
            } else if nested.path.is_ident("from_str") {
                set_constructor(&mut meta, ScalarConstructor::FromStr, &nested)?;
            } else if nested.path.is_ident("from_string") {
                set_constructor(&mut meta, ScalarConstructor::FromString, &nested)?;
            } else {
                return Err(nested.error("unknown hatchet container attribute"));
            }
            Ok(())
        })?;
    }
    Ok(meta)
}

pub fn parse_field_meta(field: &Field) -> syn::Result<FieldMeta> {
    let mut meta = FieldMeta::default();
    for attr in hatchet_attrs(&field.attrs) {
        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("ignore") || nested.path.is_ident("skip") {
                meta.ignore = true;
            } else if nested.path.is_ident("value") {
                meta.value = true;
            } else if nested.path.is_ident("rename") {
                let lit: LitStr = nested.value()?.parse()?;
                meta.rename = Some(lit.value());
            } else {
                return Err(nested.error("unknown hatchet field attribute"));
            }
            Ok(())
        })?;
    }
    if meta.ignore && meta.value {
        return Err(syn::Error::new_spanned(
            field,
            "a field cannot be both `ignore` and `value`",
        ));
    }
    Ok(meta)
}

/// Wire name of an enum variant.
pub fn variant_name(variant: &Variant, rename_all: Option<RenameRule>) -> syn::Result<String> {
    let mut rename = None;
    for attr in hatchet_attrs(&variant.attrs) {
        attr.parse_nested_meta(|nested| {
            if nested.path.is_ident("rename") {
                let lit: LitStr = nested.value()?.parse()?;
                rename = Some(lit.value());
                Ok(())
            } else {
                Err(nested.error("unknown hatchet variant attribute"))
            }
        })?;
    }
    let ident = variant.ident.to_string();
    Ok(rename.unwrap_or_else(|| match rename_all {
        Some(rule) => rule.apply(&ident),
        None => ident,
    }))
}
