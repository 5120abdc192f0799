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

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, LinkedList, VecDeque};

use hatchet::{Error, Hatchet};
use indexmap::IndexMap;
use rstest::rstest;

#[test]
fn test_list() {
    let hatchet = Hatchet::default();
    let numbers: Vec<i32> = hatchet.deserialize("[1 -2 3]").unwrap();
    assert_eq!(numbers, vec![1, -2, 3]);
    assert_eq!(hatchet.serialize(&numbers).unwrap(), "[1 -2 3]");

    let empty: Vec<i32> = hatchet.deserialize("[]").unwrap();
    assert!(empty.is_empty());
    assert_eq!(hatchet.serialize(&empty).unwrap(), "[]");

    let nested: Vec<Vec<String>> = hatchet.deserialize(r#"[[a b] [] ["c d"]]"#).unwrap();
    assert_eq!(nested, vec![vec!["a", "b"], vec![], vec!["c d"]]);
    assert_eq!(
        hatchet.serialize(&nested).unwrap(),
        r#"[["a" "b"] [] ["c d"]]"#
    );
}

#[test]
fn test_other_lists() {
    let hatchet = Hatchet::default();
    let deque: VecDeque<u8> = hatchet.deserialize("[4 5]").unwrap();
    assert_eq!(deque, VecDeque::from(vec![4, 5]));
    let list: LinkedList<bool> = hatchet.deserialize("[true FALSE]").unwrap();
    assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![true, false]);
}

#[test]
fn test_sets() {
    let hatchet = Hatchet::default();
    let set: HashSet<String> = hatchet.deserialize("[a b a]").unwrap();
    assert_eq!(set.len(), 2);
    assert!(set.contains("a") && set.contains("b"));

    let ordered: BTreeSet<u8> = hatchet.deserialize("[3 1 2 1]").unwrap();
    assert_eq!(hatchet.serialize(&ordered).unwrap(), "[1 2 3]");
}

#[test]
fn test_arrays() {
    let hatchet = Hatchet::default();
    let fixed: [u16; 3] = hatchet.deserialize("[7 8 9]").unwrap();
    assert_eq!(fixed, [7, 8, 9]);
    assert_eq!(hatchet.serialize(&fixed).unwrap(), "[7 8 9]");

    let err = hatchet.deserialize::<[u16; 3]>("[7 8]").unwrap_err();
    assert!(matches!(err, Error::Conversion(_)));
    assert!(err.to_string().contains("Array length mismatch"));

    let boxed: Box<[i64]> = hatchet.deserialize("[1 2]").unwrap();
    assert_eq!(&*boxed, &[1, 2]);
}

#[rstest]
#[case("1")]
#[case("{ a 1 }")]
#[case("[1 x]")]
fn test_list_rejects(#[case] text: &str) {
    assert!(matches!(
        Hatchet::default().deserialize::<Vec<i32>>(text),
        Err(Error::Conversion(_))
    ));
}

#[test]
fn test_maps() {
    let hatchet = Hatchet::default();
    let map: BTreeMap<String, Vec<u8>> = hatchet.deserialize("{ b [] a [1] }").unwrap();
    assert_eq!(map["a"], vec![1]);
    assert_eq!(
        hatchet.serialize(&map).unwrap(),
        "{\n  a [1]\n  b []\n}"
    );

    let numbered: HashMap<u32, String> = hatchet.deserialize("{ 1 one 2 \"two 2\" }").unwrap();
    assert_eq!(numbered[&2], "two 2");

    let empty: HashMap<String, i32> = HashMap::new();
    assert_eq!(hatchet.serialize(&empty).unwrap(), "{}");
    let empty: HashMap<String, i32> = hatchet.deserialize("{}").unwrap();
    assert!(empty.is_empty());

    assert!(matches!(
        hatchet.deserialize::<HashMap<u32, String>>("{ one 1 }"),
        Err(Error::Conversion(_))
    ));
    assert!(matches!(
        hatchet.deserialize::<HashMap<u32, String>>("[1 2]"),
        Err(Error::Conversion(_))
    ));
}

#[test]
fn test_map_keeps_order() {
    let hatchet = Hatchet::default();
    let map: IndexMap<String, i32> = hatchet.deserialize("{ z 1 a 2 m 3 }").unwrap();
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
    assert_eq!(
        hatchet.serialize(&map).unwrap(),
        "{\n  z 1\n  a 2\n  m 3\n}"
    );
}

#[test]
fn test_nested_map_values() {
    let hatchet = Hatchet::default();
    let text = "{\n  first {\n    x 1\n  }\n  second {}\n}";
    let map: IndexMap<String, IndexMap<String, i32>> = hatchet.deserialize(text).unwrap();
    assert_eq!(map["first"]["x"], 1);
    assert_eq!(hatchet.serialize(&map).unwrap(), text);
}
