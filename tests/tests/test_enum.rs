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

use hatchet::{Error, Hatchet, HatchetFlags, HatchetObject};
use rstest::rstest;

#[derive(HatchetObject, Debug, Default, PartialEq, Clone, Copy)]
enum Phase {
    #[default]
    Idle,
    Running,
    Done,
}

#[derive(HatchetObject, Debug, Default, PartialEq, Clone, Copy)]
enum Mode {
    #[default]
    Closed = 0,
    Read = 1,
    Write = 2,
    ReadWrite = 3,
}

#[derive(HatchetObject, Debug, Default, PartialEq, Clone, Copy)]
#[hatchet(rename_all = "snake_case")]
enum Shade {
    #[default]
    DarkRed,
    #[hatchet(rename = "sky")]
    LightBlue,
}

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, HatchetFlags)]
    struct Letters: u32 {
        const ALPHA = 1;
        const BRAVO = 2;
        const CHARLIE = 4;
        const DELTA = 8;
        const ECHO = 16;
    }
}

impl Default for Letters {
    fn default() -> Self {
        Letters::empty()
    }
}

#[derive(HatchetObject, Debug, Default, PartialEq)]
#[hatchet(rename_all = "PascalCase")]
struct Holder {
    property: Phase,
    field: Letters,
    history: Vec<Phase>,
}

#[rstest]
#[case("Running", Phase::Running)]
#[case("running", Phase::Running)]
#[case("DONE", Phase::Done)]
#[case("\"idle\"", Phase::Idle)]
#[case("0", Phase::Idle)]
#[case("2", Phase::Done)]
fn test_enum_from_text(#[case] text: &str, #[case] expected: Phase) {
    assert_eq!(Hatchet::default().deserialize::<Phase>(text).unwrap(), expected);
}

#[rstest]
#[case("Walking")]
#[case("7")]
#[case("[Idle Zulu]")]
#[case("{ Phase Idle }")]
fn test_enum_rejects(#[case] text: &str) {
    assert!(matches!(
        Hatchet::default().deserialize::<Phase>(text),
        Err(Error::Conversion(_))
    ));
}

#[test]
fn test_enum_write() {
    let hatchet = Hatchet::default();
    assert_eq!(hatchet.serialize(&Phase::Running).unwrap(), "Running");
    assert_eq!(hatchet.serialize(&Shade::DarkRed).unwrap(), "dark_red");
    assert_eq!(hatchet.serialize(&Shade::LightBlue).unwrap(), "sky");
    assert_eq!(hatchet.deserialize::<Shade>("SKY").unwrap(), Shade::LightBlue);
}

#[rstest]
#[case("Read,Write")]
#[case("[read write]")]
#[case("ReadWrite")]
#[case("3")]
fn test_enum_combined_names(#[case] text: &str) {
    assert_eq!(
        Hatchet::default().deserialize::<Mode>(text).unwrap(),
        Mode::ReadWrite
    );
}

#[test]
fn test_enum_list() {
    let hatchet = Hatchet::default();
    let phases: Vec<Phase> = hatchet.deserialize("[idle Running done]").unwrap();
    assert_eq!(phases, vec![Phase::Idle, Phase::Running, Phase::Done]);
    assert_eq!(hatchet.serialize(&phases).unwrap(), "[Idle Running Done]");
}

#[rstest]
#[case("[ALpha Bravo]", Letters::ALPHA | Letters::BRAVO)]
#[case("[]", Letters::empty())]
#[case("Charlie", Letters::CHARLIE)]
#[case("alpha,echo", Letters::ALPHA | Letters::ECHO)]
#[case("[delta \"Echo\"]", Letters::DELTA | Letters::ECHO)]
fn test_flags_from_text(#[case] text: &str, #[case] expected: Letters) {
    assert_eq!(
        Hatchet::default().deserialize::<Letters>(text).unwrap(),
        expected
    );
}

#[test]
fn test_flags_write() {
    let hatchet = Hatchet::default();
    assert_eq!(
        hatchet.serialize(&(Letters::ALPHA | Letters::BRAVO)).unwrap(),
        "[ALPHA BRAVO]"
    );
    assert_eq!(hatchet.serialize(&Letters::DELTA).unwrap(), "[DELTA]");
    assert_eq!(hatchet.serialize(&Letters::empty()).unwrap(), "[]");
    assert!(matches!(
        hatchet.deserialize::<Letters>("[Zulu]"),
        Err(Error::Conversion(_))
    ));
}

#[test]
fn test_flags_keep_unnamed_bits() {
    let hatchet = Hatchet::default();
    let mixed = Letters::from_bits_retain(1 | 64);
    let text = hatchet.serialize(&mixed).unwrap();
    assert_eq!(text, "[ALPHA 0x40]");
    assert_eq!(hatchet.deserialize::<Letters>(&text).unwrap(), mixed);

    let bare = Letters::from_bits_retain(0x100);
    assert_eq!(hatchet.serialize(&bare).unwrap(), "[0x100]");
    assert_eq!(hatchet.deserialize::<Letters>("[0x100]").unwrap(), bare);
    assert_eq!(
        hatchet.deserialize::<Letters>("0x3").unwrap(),
        Letters::ALPHA | Letters::BRAVO
    );
    assert!(matches!(
        hatchet.deserialize::<Letters>("[0xZZ]"),
        Err(Error::Conversion(_))
    ));
}

#[test]
fn test_enum_and_flags_members() {
    let hatchet = Hatchet::default();
    let holder: Holder = hatchet
        .deserialize("{ Property Running Field [alpha delta] History [done idle] }")
        .unwrap();
    assert_eq!(
        holder,
        Holder {
            property: Phase::Running,
            field: Letters::ALPHA | Letters::DELTA,
            history: vec![Phase::Done, Phase::Idle],
        }
    );
    assert_eq!(
        hatchet.serialize(&holder).unwrap(),
        "{\n  Property Running\n  Field [ALPHA DELTA]\n  History [Done Idle]\n}"
    );

    // zero-valued enums and empty flag sets are omitted as members
    let idle = Holder {
        history: vec![Phase::Idle],
        ..Holder::default()
    };
    assert_eq!(
        hatchet.serialize(&idle).unwrap(),
        "{\n  History [Idle]\n}"
    );
    assert_eq!(
        Hatchet::default()
            .include_default_values(true)
            .serialize(&idle)
            .unwrap(),
        "{\n  Property Idle\n  Field []\n  History [Idle]\n}"
    );
}
