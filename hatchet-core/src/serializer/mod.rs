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

mod array;
mod bool;
pub mod collection;
mod core;
mod datetime;
pub mod enum_;
pub mod flags;
mod identifier;
pub mod map;
mod number;
mod option;
mod pointer;
mod string;
pub mod struct_;
pub mod trait_object;
mod value;

pub use self::core::{EnumSerializer, Serializer, StructSerializer};

use crate::error::Error;
use crate::value::Value;

/// Unwraps a scalar, failing with a conversion error naming `T`.
#[inline(always)]
pub fn expect_scalar<T: ?Sized + 'static>(value: Value) -> Result<String, Error> {
    match value {
        Value::Scalar(text) => Ok(text),
        other => Err(Error::cannot_convert::<T>(&other)),
    }
}
