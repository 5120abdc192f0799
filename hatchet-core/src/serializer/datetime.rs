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

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use crate::error::Error;
use crate::resolver::context::{ReadContext, WriteContext};
use crate::serializer::{expect_scalar, Serializer};
use crate::types::TypeKind;
use crate::value::Value;

const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const DATE_FORMAT: &str = "%Y-%m-%d";
const ACCEPTED_DATE_TIME_FORMATS: [&str; 3] = [
    DATE_TIME_FORMAT,
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

fn parse_naive_date_time(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    ACCEPTED_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.naive_utc())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(text, DATE_FORMAT)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

impl Serializer for NaiveDateTime {
    fn hatchet_write(&self, context: &mut WriteContext, _: bool) -> Result<(), Error> {
        context
            .printer
            .append_string(&self.format(DATE_TIME_FORMAT).to_string());
        Ok(())
    }

    fn hatchet_read(value: Value, _: &mut ReadContext) -> Result<Self, Error> {
        let text = expect_scalar::<Self>(value)?;
        parse_naive_date_time(&text).ok_or_else(|| Error::cannot_convert::<Self>(&text))
    }

    fn hatchet_kind() -> TypeKind {
        TypeKind::DateTime
    }

    fn hatchet_is_default(&self) -> bool {
        *self == NaiveDateTime::default()
    }

    fn hatchet_scalar_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.format(DATE_TIME_FORMAT).to_string()))
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl Serializer for NaiveDate {
    fn hatchet_write(&self, context: &mut WriteContext, _: bool) -> Result<(), Error> {
        context
            .printer
            .append_string(&self.format(DATE_FORMAT).to_string());
        Ok(())
    }

    fn hatchet_read(value: Value, _: &mut ReadContext) -> Result<Self, Error> {
        let text = expect_scalar::<Self>(value)?;
        NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
            .ok()
            .or_else(|| parse_naive_date_time(&text).map(|dt| dt.date()))
            .ok_or_else(|| Error::cannot_convert::<Self>(&text))
    }

    fn hatchet_kind() -> TypeKind {
        TypeKind::DateTime
    }

    fn hatchet_is_default(&self) -> bool {
        *self == NaiveDate::default()
    }

    fn hatchet_scalar_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.format(DATE_FORMAT).to_string()))
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl Serializer for DateTime<Utc> {
    fn hatchet_write(&self, context: &mut WriteContext, _: bool) -> Result<(), Error> {
        context
            .printer
            .append_string(&self.to_rfc3339_opts(SecondsFormat::AutoSi, true));
        Ok(())
    }

    fn hatchet_read(value: Value, _: &mut ReadContext) -> Result<Self, Error> {
        let text = expect_scalar::<Self>(value)?;
        DateTime::parse_from_rfc3339(text.trim())
            .map(|dt| dt.with_timezone(&Utc))
            .ok()
            .or_else(|| parse_naive_date_time(&text).map(|dt| dt.and_utc()))
            .ok_or_else(|| Error::cannot_convert::<Self>(&text))
    }

    fn hatchet_kind() -> TypeKind {
        TypeKind::DateTime
    }

    fn hatchet_is_default(&self) -> bool {
        *self == DateTime::<Utc>::default()
    }

    fn hatchet_scalar_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(
            self.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        ))
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
