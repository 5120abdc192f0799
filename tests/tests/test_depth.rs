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

use hatchet::{Error, Hatchet, HatchetObject, Value};
use hatchet_core::value::Mapping;

#[derive(HatchetObject, Debug, Default, PartialEq)]
#[hatchet(rename_all = "PascalCase")]
struct Chain {
    value: i32,
    next: Option<Box<Chain>>,
}

fn chain(len: i32) -> Chain {
    let mut head = Chain {
        value: len,
        next: None,
    };
    for value in (1..len).rev() {
        head = Chain {
            value,
            next: Some(Box::new(head)),
        };
    }
    head
}

fn chain_value(len: i32) -> Value {
    let mut value = Value::Mapping(Mapping::new());
    for _ in 0..len {
        let mut map = Mapping::new();
        map.insert("Value".to_string(), Value::from("1"));
        map.insert("Next".to_string(), value);
        value = Value::Mapping(map);
    }
    value
}

#[test]
fn test_write_depth() {
    if hatchet_core::error::should_panic_on_error() {
        return;
    }
    let hatchet = Hatchet::default().max_depth(10);
    let short = chain(5);
    let text = hatchet.serialize(&short).unwrap();
    assert_eq!(hatchet.deserialize::<Chain>(&text).unwrap(), short);

    let err = hatchet.serialize(&chain(50)).unwrap_err();
    assert!(matches!(err, Error::DepthExceed(_)));
    assert!(err.to_string().contains("Maximum nesting depth (10)"));
}

#[test]
fn test_parse_depth() {
    if hatchet_core::error::should_panic_on_error() {
        return;
    }
    let hatchet = Hatchet::default().max_depth(3);
    assert!(hatchet.parse("[[[1]]]").is_ok());
    assert!(matches!(
        hatchet.parse("[[[[1]]]]"),
        Err(Error::DepthExceed(_))
    ));
    let deep = "{ Next ".repeat(200) + &"}".repeat(200);
    assert!(matches!(
        Hatchet::default().deserialize::<Chain>(&deep),
        Err(Error::DepthExceed(_))
    ));
}

#[test]
fn test_coerce_depth() {
    if hatchet_core::error::should_panic_on_error() {
        return;
    }
    let hatchet = Hatchet::default().max_depth(10);
    assert!(hatchet.coerce::<Chain>(chain_value(4)).is_ok());
    assert!(matches!(
        hatchet.coerce::<Chain>(chain_value(40)),
        Err(Error::DepthExceed(_))
    ));
}
