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

use hatchet::{Error, Hatchet, HatchetObject};

#[derive(HatchetObject, Default)]
#[hatchet(rename_all = "PascalCase")]
struct Node {
    name: String,
    next: Option<Rc<RefCell<Node>>>,
}

fn node(name: &str) -> Rc<RefCell<Node>> {
    Rc::new(RefCell::new(Node {
        name: name.to_string(),
        next: None,
    }))
}

#[test]
fn test_cycle_is_rejected() {
    let a = node("a");
    let b = node("b");
    a.borrow_mut().next = Some(b.clone());
    b.borrow_mut().next = Some(a.clone());

    let result = Hatchet::default().serialize(&a);
    // break the cycle so both nodes are dropped
    b.borrow_mut().next = None;
    assert!(matches!(result, Err(Error::CircularReference(_))));
}

#[test]
fn test_self_reference_is_rejected() {
    let a = node("a");
    a.borrow_mut().next = Some(a.clone());
    let result = Hatchet::default().serialize(&a);
    a.borrow_mut().next = None;
    assert!(matches!(result, Err(Error::CircularReference(_))));
}

#[test]
fn test_chain_is_written() {
    let a = node("a");
    let b = node("b");
    a.borrow_mut().next = Some(b);
    assert_eq!(
        Hatchet::default().serialize(&a).unwrap(),
        "{\n  Name \"a\"\n  Next {\n    Name \"b\"\n  }\n}"
    );
}

#[derive(HatchetObject, Debug, Default, PartialEq)]
#[hatchet(rename_all = "PascalCase")]
struct Leaf {
    value: i32,
}

#[derive(HatchetObject, Debug, Default)]
#[hatchet(rename_all = "PascalCase")]
struct Shared {
    items: Vec<Arc<Leaf>>,
    first: Option<Rc<Leaf>>,
    second: Option<Rc<Leaf>>,
}

#[test]
fn test_shared_siblings_are_not_cycles() {
    let leaf = Arc::new(Leaf { value: 5 });
    let rc_leaf = Rc::new(Leaf { value: 6 });
    let shared = Shared {
        items: vec![leaf.clone(), leaf.clone()],
        first: Some(rc_leaf.clone()),
        second: Some(rc_leaf),
    };
    let hatchet = Hatchet::default();
    let text = hatchet.serialize(&shared).unwrap();
    let back: Shared = hatchet.deserialize(&text).unwrap();
    assert_eq!(back.items.len(), 2);
    assert_eq!(*back.items[1], Leaf { value: 5 });
    assert_eq!(back.first.as_deref(), Some(&Leaf { value: 6 }));
    assert_eq!(back.second.as_deref(), Some(&Leaf { value: 6 }));
}

#[test]
fn test_mutably_borrowed_cell() {
    let a = node("a");
    let _guard = a.borrow_mut();
    assert!(matches!(
        Hatchet::default().serialize(&a),
        Err(Error::NotAllowed(_))
    ));
}
