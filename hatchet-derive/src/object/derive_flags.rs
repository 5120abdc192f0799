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
use syn::DeriveInput;

/// Codec for a `bitflags!` type: bracketed flag names, matched ignoring case.
pub fn derive_flags(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics hatchet_core::serializer::Serializer for #name #ty_generics #where_clause {
            fn hatchet_write(
                &self,
                context: &mut hatchet_core::resolver::context::WriteContext,
                _force_class: bool,
            ) -> Result<(), hatchet_core::error::Error> {
                hatchet_core::serializer::flags::write(self, context)
            }

            fn hatchet_read(
                value: hatchet_core::value::Value,
                _context: &mut hatchet_core::resolver::context::ReadContext,
            ) -> Result<Self, hatchet_core::error::Error> {
                hatchet_core::serializer::flags::read::<Self>(value)
            }

            #[inline(always)]
            fn hatchet_kind() -> hatchet_core::types::TypeKind {
                hatchet_core::types::TypeKind::Flags
            }

            #[inline(always)]
            fn hatchet_is_default(&self) -> bool {
                hatchet_core::serializer::flags::is_default(self)
            }

            #[inline(always)]
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }
    })
}
