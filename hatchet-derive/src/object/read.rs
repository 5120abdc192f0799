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

use crate::object::field_meta::ScalarConstructor;
use crate::util::SourceField;

/// Body of `hatchet_set_member`: coerces into the field's declared type.
/// Ignored fields are never assigned.
pub fn gen_set_member(source_fields: &[SourceField]) -> TokenStream {
    let arms = source_fields
        .iter()
        .filter(|sf| !sf.meta.ignore)
        .map(|sf| {
            let index = sf.original_index;
            let accessor = sf.accessor();
            let ty = &sf.field.ty;
            quote! {
                #index => {
                    #accessor = context.coerce::<#ty>(value)?;
                    Ok(())
                }
            }
        });
    quote! {
        match index {
            #(#arms)*
            _ => Ok(()),
        }
    }
}

/// `hatchet_from_scalar`, present only when a scalar constructor is declared.
pub fn gen_from_scalar(constructor: Option<&ScalarConstructor>) -> TokenStream {
    let build = match constructor {
        None => return quote! {},
        Some(ScalarConstructor::Factory(path)) => quote! {
            #path(text).map_err(|e| {
                hatchet_core::error::Error::conversion(format!(
                    "Cannot convert `{}` to {}: {}",
                    text,
                    std::any::type_name::<Self>(),
                    e
                ))
            })
        },
        Some(ScalarConstructor::FromStr) => quote! {
            <Self as std::str::FromStr>::from_str(text).map_err(|e| {
                hatchet_core::error::Error::conversion(format!(
                    "Cannot convert `{}` to {}: {}",
                    text,
                    std::any::type_name::<Self>(),
                    e
                ))
            })
        },
        Some(ScalarConstructor::FromString) => quote! {
            Ok(<Self as std::convert::From<String>>::from(text.to_string()))
        },
    };
    quote! {
        fn hatchet_from_scalar(text: &str) -> Option<Result<Self, hatchet_core::error::Error>> {
            Some(#build)
        }
    }
}
