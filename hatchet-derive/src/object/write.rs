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

/// Body of `hatchet_member`: borrows each non-ignored field as a trait
/// object.
pub fn gen_member(source_fields: &[SourceField]) -> TokenStream {
    let arms = source_fields
        .iter()
        .filter(|sf| !sf.meta.ignore)
        .map(|sf| {
            let index = sf.original_index;
            let accessor = sf.accessor();
            quote! {
                #index => Some(&#accessor as &dyn hatchet_core::serializer::Serializer),
            }
        });
    quote! {
        match index {
            #(#arms)*
            _ => None,
        }
    }
}
