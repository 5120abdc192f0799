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

use hatchet::{register_trait_type, Error, Hatchet, HatchetObject, Serializer};

trait Animal: Serializer {
    fn speak(&self) -> String;
    fn name(&self) -> &str;
}

#[derive(HatchetObject, Debug, Default, PartialEq)]
#[hatchet(rename_all = "PascalCase")]
struct Dog {
    name: String,
    breed: String,
}

impl Animal for Dog {
    fn speak(&self) -> String {
        "Woof!".to_string()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(HatchetObject, Debug, Default, PartialEq)]
#[hatchet(rename_all = "PascalCase")]
struct Cat {
    name: String,
    lives: u8,
}

impl Animal for Cat {
    fn speak(&self) -> String {
        "Meow!".to_string()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// implements the trait but is not listed below
#[derive(HatchetObject, Debug, Default, PartialEq)]
struct Fish {
    name: String,
}

impl Animal for Fish {
    fn speak(&self) -> String {
        "...".to_string()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

register_trait_type!(Animal, Dog, Cat);

#[derive(HatchetObject, Default)]
#[hatchet(rename_all = "PascalCase")]
struct Zoo {
    keeper: String,
    star: Box<dyn Animal>,
    animals: Vec<Box<dyn Animal>>,
    visiting: Option<Box<dyn Animal>>,
}

fn zoo_hatchet() -> Hatchet {
    let mut hatchet = Hatchet::default();
    hatchet.register::<Dog>("Dog").unwrap();
    hatchet.register::<Cat>("Cat").unwrap();
    hatchet.register::<Fish>("Fish").unwrap();
    hatchet
}

const ZOO_TEXT: &str = r#"
{
  Keeper Sam
  Star { Class Dog Name Rex Breed Collie }
  Animals [
    { Class Cat Name Tom Lives 9 }
    { Class Dog Name Fido }
  ]
}
"#;

#[test]
fn test_polymorphic_members() {
    let hatchet = zoo_hatchet();
    let zoo: Zoo = hatchet.deserialize(ZOO_TEXT).unwrap();
    assert_eq!(zoo.keeper, "Sam");
    assert_eq!(zoo.star.name(), "Rex");
    assert_eq!(zoo.star.speak(), "Woof!");
    let speeches: Vec<String> = zoo.animals.iter().map(|a| a.speak()).collect();
    assert_eq!(speeches, vec!["Meow!", "Woof!"]);
    assert!(zoo.visiting.is_none());

    let text = hatchet.serialize(&zoo).unwrap();
    assert!(text.contains("Class Cat"), "{text}");
    let again: Zoo = hatchet.deserialize(&text).unwrap();
    assert_eq!(again.star.name(), "Rex");
    let names: Vec<&str> = again.animals.iter().map(|a| a.name()).collect();
    assert_eq!(names, vec!["Tom", "Fido"]);
}

#[test]
fn test_top_level_trait_object() {
    let hatchet = zoo_hatchet();
    let dog: Box<dyn Animal> = Box::new(Dog {
        name: "Rex".to_string(),
        breed: "Collie".to_string(),
    });
    let text = hatchet.serialize(&dog).unwrap();
    assert_eq!(text, "{\n  Class Dog\n  Name \"Rex\"\n  Breed \"Collie\"\n}");
    let back: Box<dyn Animal> = hatchet.deserialize(&text).unwrap();
    assert_eq!(back.speak(), "Woof!");
    assert_eq!(
        (*back).as_any().downcast_ref::<Dog>(),
        Some(&Dog {
            name: "Rex".to_string(),
            breed: "Collie".to_string(),
        })
    );
}

#[test]
fn test_optional_trait_object() {
    let hatchet = zoo_hatchet();
    let zoo: Zoo = hatchet
        .deserialize("{ Star { Class Cat Name Tom } Visiting { Class Cat Name Kit Lives 1 } }")
        .unwrap();
    let visiting = zoo.visiting.as_ref().unwrap();
    assert_eq!(visiting.name(), "Kit");
    let zoo: Zoo = hatchet
        .deserialize("{ Star { Class Cat Name Tom } Visiting null }")
        .unwrap();
    assert!(zoo.visiting.is_none());
}

#[test]
fn test_unknown_class() {
    let hatchet = zoo_hatchet();
    let err = hatchet
        .deserialize::<Box<dyn Animal>>("{ Class Cow Name Bess }")
        .err()
        .unwrap();
    assert!(matches!(err, Error::UnknownType(_)));
    assert_eq!(err.to_string(), "Type is not registered: Cow");
}

#[test]
fn test_missing_class() {
    let hatchet = zoo_hatchet();
    assert!(matches!(
        hatchet.deserialize::<Box<dyn Animal>>("{ Name Rex }"),
        Err(Error::Conversion(_))
    ));
    assert!(matches!(
        hatchet.deserialize::<Box<dyn Animal>>("Rex"),
        Err(Error::Conversion(_))
    ));
}

#[test]
fn test_registered_but_not_listed() {
    let hatchet = zoo_hatchet();
    let err = hatchet
        .deserialize::<Box<dyn Animal>>("{ Class Fish Name Nemo }")
        .err()
        .unwrap();
    assert!(matches!(err, Error::Conversion(_)));
    assert!(err.to_string().contains("not listed"));
}

#[test]
fn test_unlisted_concrete_type_cannot_be_written() {
    let fish: Box<dyn Animal> = Box::new(Fish {
        name: "Nemo".to_string(),
    });
    assert!(matches!(
        zoo_hatchet().serialize(&fish),
        Err(Error::UnsupportedType(_))
    ));
}

#[test]
fn test_default_trait_object() {
    let animal: Box<dyn Animal> = Box::default();
    assert_eq!(animal.speak(), "Woof!");
}
