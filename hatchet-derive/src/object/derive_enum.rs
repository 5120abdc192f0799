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
use syn::{DataEnum, DeriveInput, Fields};

use crate::object::field_meta::{variant_name, ContainerMeta};

pub fn derive_enum(
    ast: &DeriveInput,
    data_enum: &DataEnum,
    container: &ContainerMeta,
) -> syn::Result<TokenStream> {
    let name = &ast.ident;
    if !ast.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &ast.generics,
            "HatchetObject enums cannot be generic",
        ));
    }
    for variant in &data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "HatchetObject supports only field-less enum variants",
            ));
        }
    }

    let idents: Vec<_> = data_enum.variants.iter().map(|v| &v.ident).collect();
    let wire_names = data_enum
        .variants
        .iter()
        .map(|v| variant_name(v, container.rename_all))
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        impl hatchet_core::serializer::EnumSerializer for #name {
            fn hatchet_variants() -> &'static [(&'static str, u64)] {
                const VARIANTS: &[(&str, u64)] = &[
                    #((#wire_names, #name::#idents as i64 as u64)),*
                ];
                VARIANTS
            }

            fn hatchet_bits(&self) -> u64 {
                match *self {
                    #(#name::#idents => #name::#idents as i64 as u64,)*
                }
            }

            fn hatchet_from_bits(bits: u64) -> Option<Self> {
                #(
                    if bits == #name::#idents as i64 as u64 {
                        return Some(#name::#idents);
                    }
                )*
                None
            }
        }

        impl hatchet_core::serializer::Serializer for #name {
            #[inline(always)]
            fn hatchet_write(
                &self,
                context: &mut hatchet_core::resolver::context::WriteContext,
                _force_class: bool,
            ) -> Result<(), hatchet_core::error::Error> {
                hatchet_core::serializer::enum_::write(self, context)
            }

            #[inline(always)]
            fn hatchet_read(
                value: hatchet_core::value::Value,
                _context: &mut hatchet_core::resolver::context::ReadContext,
            ) -> Result<Self, hatchet_core::error::Error> {
                hatchet_core::serializer::enum_::read::<Self>(value)
            }

            #[inline(always)]
            fn hatchet_kind() -> hatchet_core::types::TypeKind {
                hatchet_core::types::TypeKind::Enum
            }

            #[inline(always)]
            fn hatchet_is_default(&self) -> bool {
                hatchet_core::serializer::enum_::is_default(self)
            }

            fn hatchet_scalar_text(&self) -> Option<std::borrow::Cow<'_, str>> {
                Some(std::borrow::Cow::Borrowed(
                    <Self as hatchet_core::serializer::EnumSerializer>::hatchet_name(self),
                ))
            }

            #[inline(always)]
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }
    })
}
