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

use std::fmt;
use std::str::FromStr;

use hatchet::{Error, Hatchet, HatchetObject};

#[derive(HatchetObject, Debug, Default, PartialEq)]
#[hatchet(factory = "Money::parse")]
#[hatchet(rename_all = "PascalCase")]
struct Money {
    amount: i64,
    currency: String,
}

impl Money {
    fn parse(text: &str) -> Result<Money, String> {
        let (amount, currency) = text
            .trim()
            .split_once(' ')
            .ok_or_else(|| "expected `<amount> <currency>`".to_string())?;
        let amount = amount
            .parse()
            .map_err(|e| format!("bad amount `{amount}`: {e}"))?;
        Ok(Money {
            amount,
            currency: currency.to_string(),
        })
    }
}

#[derive(HatchetObject, Debug, Default, PartialEq)]
#[hatchet(from_str)]
struct Version {
    major: u32,
    minor: u32,
}

#[derive(Debug)]
struct VersionError(String);

impl fmt::Display for VersionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid version `{}`", self.0)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (major, minor) = s.split_once('.').ok_or_else(|| VersionError(s.to_string()))?;
        Ok(Version {
            major: major.parse().map_err(|_| VersionError(s.to_string()))?,
            minor: minor.parse().map_err(|_| VersionError(s.to_string()))?,
        })
    }
}

#[derive(HatchetObject, Debug, Default, PartialEq)]
#[hatchet(from_string)]
struct Tag {
    label: String,
}

impl From<String> for Tag {
    fn from(label: String) -> Self {
        Tag { label }
    }
}

#[derive(HatchetObject, Debug, Default, PartialEq)]
#[hatchet(rename_all = "PascalCase")]
struct Invoice {
    total: Money,
    schema: Version,
    tags: Vec<Tag>,
}

#[test]
fn test_factory_from_scalar() {
    let hatchet = Hatchet::default();
    let money: Money = hatchet.deserialize(r#""12 EUR""#).unwrap();
    assert_eq!(
        money,
        Money {
            amount: 12,
            currency: "EUR".to_string(),
        }
    );
    // the mapping form still works
    let money: Money = hatchet.deserialize("{ Amount 5 Currency USD }").unwrap();
    assert_eq!(money.amount, 5);
    assert_eq!(
        hatchet.serialize(&money).unwrap(),
        "{\n  Amount 5\n  Currency \"USD\"\n}"
    );
}

#[test]
fn test_factory_failure() {
    let err = Hatchet::default()
        .deserialize::<Money>("twelve")
        .unwrap_err();
    assert!(matches!(err, Error::Conversion(_)));
    let msg = err.to_string();
    assert!(msg.contains("Cannot convert `twelve`"), "{msg}");
    assert!(msg.contains("expected `<amount> <currency>`"), "{msg}");
}

#[test]
fn test_string_constructors() {
    let hatchet = Hatchet::default();
    let invoice: Invoice = hatchet
        .deserialize(r#"{ Total "3 GBP" Schema 1.2 Tags [urgent "needs review"] }"#)
        .unwrap();
    assert_eq!(invoice.total.currency, "GBP");
    assert_eq!(invoice.schema, Version { major: 1, minor: 2 });
    assert_eq!(
        invoice.tags,
        vec![
            Tag {
                label: "urgent".to_string()
            },
            Tag {
                label: "needs review".to_string()
            },
        ]
    );

    let err = hatchet
        .deserialize::<Invoice>("{ Schema one }")
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("invalid version `one`"), "{msg}");
    assert!(msg.contains("in member `Schema` of Invoice"), "{msg}");
}

#[derive(HatchetObject, Debug, Default, PartialEq)]
struct Plain {
    name: String,
}

#[test]
fn test_no_scalar_constructor() {
    let err = Hatchet::default().deserialize::<Plain>("Bob").unwrap_err();
    assert!(matches!(err, Error::Conversion(_)));
    assert!(err.to_string().contains("no factory, string constructor or value member"));
}
