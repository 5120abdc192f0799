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

use crate::util::SourceField;

/// Body of `hatchet_members`: one `MemberInfo` per field, in declaration
/// order.
pub fn gen_members(source_fields: &[SourceField]) -> TokenStream {
    let members = source_fields.iter().map(|sf| {
        let ty = &sf.field.ty;
        let name = &sf.wire_name;
        let kind = if sf.is_tuple_struct {
            quote! { hatchet_core::resolver::descriptor::MemberKind::Positional }
        } else {
            quote! { hatchet_core::resolver::descriptor::MemberKind::Named }
        };
        let ignored = sf.meta.ignore;
        let value_surrogate = sf.meta.value;
        let (type_kind, polymorphic) = if ignored {
            (quote! { None }, quote! { false })
        } else {
            (
                quote! { Some(<#ty as hatchet_core::serializer::Serializer>::hatchet_kind()) },
                quote! { <#ty as hatchet_core::serializer::Serializer>::hatchet_is_polymorphic() },
            )
        };
        quote! {
            hatchet_core::resolver::descriptor::MemberInfo {
                name: #name,
                kind: #kind,
                type_name: std::any::type_name::<#ty>(),
                type_kind: #type_kind,
                ignored: #ignored,
                value_surrogate: #value_surrogate,
                polymorphic: #polymorphic,
            }
        }
    });
    quote! {
        vec![#(#members),*]
    }
}
