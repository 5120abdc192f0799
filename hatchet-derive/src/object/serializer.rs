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
use syn::{Data, DataStruct, DeriveInput};

use crate::object::field_meta::{parse_container_meta, ContainerMeta};
use crate::object::{derive_enum, misc, read, write};
use crate::util::source_fields;

pub fn derive_serializer(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let container = parse_container_meta(&ast.attrs)?;
    match &ast.data {
        Data::Struct(data_struct) => derive_struct(ast, data_struct, &container),
        Data::Enum(data_enum) => derive_enum::derive_enum(ast, data_enum, &container),
        Data::Union(_) => Err(syn::Error::new_spanned(
            &ast.ident,
            "HatchetObject does not support unions",
        )),
    }
}

fn derive_struct(
    ast: &DeriveInput,
    data_struct: &DataStruct,
    container: &ContainerMeta,
) -> syn::Result<TokenStream> {
    let name = &ast.ident;
    let (impl_generics, ty_generics, where_clause) = ast.generics.split_for_impl();
    let source_fields = source_fields(&data_struct.fields, container.rename_all)?;

    let surrogates: Vec<_> = source_fields.iter().filter(|sf| sf.meta.value).collect();
    if surrogates.len() > 1 {
        return Err(syn::Error::new_spanned(
            surrogates[1].field,
            "at most one field may be marked `#[hatchet(value)]`",
        ));
    }

    let type_name = container
        .name
        .clone()
        .unwrap_or_else(|| name.to_string());
    let members_ts = misc::gen_members(&source_fields);
    let member_ts = write::gen_member(&source_fields);
    let set_member_ts = read::gen_set_member(&source_fields);
    let from_scalar_ts = read::gen_from_scalar(container.scalar_constructor.as_ref());

    Ok(quote! {
        impl #impl_generics hatchet_core::serializer::StructSerializer for #name #ty_generics #where_clause {
            fn hatchet_type_name() -> &'static str {
                #type_name
            }

            fn hatchet_members() -> Vec<hatchet_core::resolver::descriptor::MemberInfo> {
                #members_ts
            }

            fn hatchet_member(&self, index: usize) -> Option<&dyn hatchet_core::serializer::Serializer> {
                #member_ts
            }

            #[allow(unused_variables)]
            fn hatchet_set_member(
                &mut self,
                index: usize,
                value: hatchet_core::value::Value,
                context: &mut hatchet_core::resolver::context::ReadContext,
            ) -> Result<(), hatchet_core::error::Error> {
                #set_member_ts
            }

            #from_scalar_ts
        }

        impl #impl_generics hatchet_core::serializer::Serializer for #name #ty_generics #where_clause {
            #[inline(always)]
            fn hatchet_write(
                &self,
                context: &mut hatchet_core::resolver::context::WriteContext,
                force_class: bool,
            ) -> Result<(), hatchet_core::error::Error> {
                hatchet_core::serializer::struct_::write(self, context, force_class)
            }

            #[inline(always)]
            fn hatchet_read(
                value: hatchet_core::value::Value,
                context: &mut hatchet_core::resolver::context::ReadContext,
            ) -> Result<Self, hatchet_core::error::Error> {
                hatchet_core::serializer::struct_::read::<Self>(value, context)
            }

            #[inline(always)]
            fn hatchet_kind() -> hatchet_core::types::TypeKind {
                hatchet_core::types::TypeKind::Record
            }

            #[inline(always)]
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }
        }
    })
}
