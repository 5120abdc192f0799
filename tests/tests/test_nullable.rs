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

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use hatchet::{Hatchet, HatchetObject};

#[derive(HatchetObject, Debug, Default, PartialEq)]
#[hatchet(rename_all = "PascalCase")]
struct Reading {
    sensor: String,
    value: Option<f64>,
    note: Option<String>,
    history: Vec<Option<i32>>,
}

#[test]
fn test_null_in_any_case() {
    let hatchet = Hatchet::default();
    let reading: Reading = hatchet
        .deserialize("{ Sensor t1 Value NULL Note null History [1 null Null 4] }")
        .unwrap();
    assert_eq!(reading.value, None);
    assert_eq!(reading.note, None);
    assert_eq!(reading.history, vec![Some(1), None, None, Some(4)]);
}

#[test]
fn test_none_members_are_skipped() {
    let hatchet = Hatchet::default();
    let reading = Reading {
        sensor: "t1".to_string(),
        value: None,
        note: None,
        history: vec![None, Some(2)],
    };
    assert_eq!(
        hatchet.serialize(&reading).unwrap(),
        "{\n  Sensor \"t1\"\n  History [null 2]\n}"
    );
    // absent members are never written, even with defaults included
    assert_eq!(
        Hatchet::default()
            .include_default_values(true)
            .serialize(&reading)
            .unwrap(),
        "{\n  Sensor \"t1\"\n  History [null 2]\n}"
    );
}

#[test]
fn test_some_zero_is_written_only_with_defaults() {
    let reading = Reading {
        sensor: "t2".to_string(),
        value: Some(0.0),
        note: Some(String::new()),
        history: vec![],
    };
    assert_eq!(
        Hatchet::default().serialize(&reading).unwrap(),
        "{\n  Sensor \"t2\"\n  Note \"\"\n  History []\n}"
    );
    assert_eq!(
        Hatchet::default()
            .include_default_values(true)
            .serialize(&reading)
            .unwrap(),
        "{\n  Sensor \"t2\"\n  Value 0\n  Note \"\"\n  History []\n}"
    );
}

#[test]
fn test_quoted_null_is_still_null() {
    let note: Option<String> = Hatchet::default().deserialize(r#""null""#).unwrap();
    assert_eq!(note, None);
    let note: Option<String> = Hatchet::default().deserialize("nil").unwrap();
    assert_eq!(note.as_deref(), Some("nil"));
}

#[derive(HatchetObject, Debug, Default, PartialEq)]
struct Cells {
    boxed: Box<i32>,
    cell: RefCell<i32>,
    shared: Rc<bool>,
    atomic: Arc<u8>,
    label: Box<String>,
}

#[test]
fn test_wrapped_zero_counts_as_zero() {
    let cells = Cells::default();
    assert_eq!(Hatchet::default().serialize(&cells).unwrap(), "{\n  label \"\"\n}");
    assert_eq!(
        Hatchet::default()
            .include_default_values(true)
            .serialize(&cells)
            .unwrap(),
        "{\n  boxed 0\n  cell 0\n  shared false\n  atomic 0\n  label \"\"\n}"
    );

    let cells = Cells {
        boxed: Box::new(3),
        cell: RefCell::new(4),
        ..Cells::default()
    };
    let text = Hatchet::default().serialize(&cells).unwrap();
    assert_eq!(text, "{\n  boxed 3\n  cell 4\n  label \"\"\n}");
    assert_eq!(Hatchet::default().deserialize::<Cells>(&text).unwrap(), cells);
}
