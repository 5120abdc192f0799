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

use hatchet::{Error, Hatchet, Value};
use rstest::rstest;

fn syntax_position(text: &str) -> (usize, usize) {
    match Hatchet::default().parse(text) {
        Err(Error::Syntax { line, column, .. }) => (line, column),
        other => panic!("expected syntax error, got {other:?}"),
    }
}

#[test]
fn test_comments_and_whitespace() {
    let text = r#"
        // header comment
        {
          /* block
             comment */
          Name   "Rex" // trailing
          Tags [
            a
            b
          ]
        }
    "#;
    let value = Hatchet::default().parse(text).unwrap();
    assert_eq!(value.to_string(), "{ Name Rex Tags [a b] }");
}

#[test]
fn test_escapes() {
    let value = Hatchet::default()
        .parse(r#"{ Quote "say \"hi\"\n\tbye \\ end" }"#)
        .unwrap();
    assert_eq!(
        value.as_mapping().unwrap()["Quote"],
        Value::from("say \"hi\"\n\tbye \\ end")
    );
}

#[test]
fn test_string_round_trip_escapes() {
    let hatchet = Hatchet::default();
    let original = "line one\nline \"two\"\\".to_string();
    let text = hatchet.serialize(&original).unwrap();
    assert_eq!(text, r#""line one\nline \"two\"\\""#);
    assert_eq!(hatchet.deserialize::<String>(&text).unwrap(), original);
}

#[test]
fn test_bare_tokens_end_at_structural_chars() {
    let value = Hatchet::default().parse("{a[1 2]b{c d}}").unwrap();
    assert_eq!(value.to_string(), "{ a [1 2] b { c d } }");
}

#[rstest]
#[case("", (1, 1))]
#[case("   \n  ", (2, 3))]
#[case("{ a 1", (1, 1))]
#[case("[a\n b", (1, 1))]
#[case("{ a 1 }\n]", (2, 1))]
#[case("{ a }", (1, 5))]
#[case("{ a 1\n  a 2 }", (2, 3))]
#[case("{ [x] 1 }", (1, 3))]
#[case("\"open", (1, 1))]
#[case("{ a \"bad \\q\" }", (1, 10))]
fn test_syntax_error_positions(#[case] text: &str, #[case] expected: (usize, usize)) {
    assert_eq!(syntax_position(text), expected);
}

#[test]
fn test_syntax_error_message() {
    let err = Hatchet::default().parse("{ a 1\n  a 2 }").unwrap_err();
    assert_eq!(err.to_string(), "Duplicate key `a` at line 2, column 3");
}

#[test]
fn test_unterminated_comment() {
    assert!(matches!(
        Hatchet::default().parse("{ a 1 } /* never closed"),
        Err(Error::Syntax { .. })
    ));
}

#[test]
fn test_syntax_error_surfaces_from_deserialize() {
    assert!(matches!(
        Hatchet::default().deserialize::<Vec<i32>>("[1 2"),
        Err(Error::Syntax { .. })
    ));
}
