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

//! Transparent wrappers. Shared pointers are tracked by identity while they
//! are being written, so a graph that reaches itself fails instead of
//! recursing forever.

use std::borrow::Cow;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use crate::error::Error;
use crate::resolver::context::{ReadContext, WriteContext};
use crate::serializer::Serializer;
use crate::types::TypeKind;
use crate::value::Value;

impl<T: Serializer> Serializer for Box<T> {
    #[inline(always)]
    fn hatchet_write(&self, context: &mut WriteContext, force_class: bool) -> Result<(), Error> {
        T::hatchet_write(self.as_ref(), context, force_class)
    }

    fn hatchet_read(value: Value, context: &mut ReadContext) -> Result<Self, Error> {
        T::hatchet_read(value, context).map(Box::new)
    }

    #[inline(always)]
    fn hatchet_kind() -> TypeKind {
        TypeKind::Pointer
    }

    #[inline(always)]
    fn hatchet_is_default(&self) -> bool {
        T::hatchet_is_default(self.as_ref())
    }

    #[inline(always)]
    fn hatchet_is_none(&self) -> bool {
        T::hatchet_is_none(self.as_ref())
    }

    #[inline(always)]
    fn hatchet_is_polymorphic() -> bool {
        T::hatchet_is_polymorphic()
    }

    fn hatchet_scalar_text(&self) -> Option<Cow<'_, str>> {
        T::hatchet_scalar_text(self.as_ref())
    }

    #[inline(always)]
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl<T: Serializer> Serializer for Rc<T> {
    fn hatchet_write(&self, context: &mut WriteContext, force_class: bool) -> Result<(), Error> {
        context.cycle_guard.enter_rc(self)?;
        let result = T::hatchet_write(self.as_ref(), context, force_class);
        context.cycle_guard.exit_rc(self);
        result
    }

    fn hatchet_read(value: Value, context: &mut ReadContext) -> Result<Self, Error> {
        T::hatchet_read(value, context).map(Rc::new)
    }

    #[inline(always)]
    fn hatchet_kind() -> TypeKind {
        TypeKind::Pointer
    }

    #[inline(always)]
    fn hatchet_is_default(&self) -> bool {
        T::hatchet_is_default(self.as_ref())
    }

    #[inline(always)]
    fn hatchet_is_none(&self) -> bool {
        T::hatchet_is_none(self.as_ref())
    }

    #[inline(always)]
    fn hatchet_is_polymorphic() -> bool {
        T::hatchet_is_polymorphic()
    }

    fn hatchet_scalar_text(&self) -> Option<Cow<'_, str>> {
        T::hatchet_scalar_text(self.as_ref())
    }

    #[inline(always)]
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl<T: Serializer> Serializer for Arc<T> {
    fn hatchet_write(&self, context: &mut WriteContext, force_class: bool) -> Result<(), Error> {
        context.cycle_guard.enter_arc(self)?;
        let result = T::hatchet_write(self.as_ref(), context, force_class);
        context.cycle_guard.exit_arc(self);
        result
    }

    fn hatchet_read(value: Value, context: &mut ReadContext) -> Result<Self, Error> {
        T::hatchet_read(value, context).map(Arc::new)
    }

    #[inline(always)]
    fn hatchet_kind() -> TypeKind {
        TypeKind::Pointer
    }

    #[inline(always)]
    fn hatchet_is_default(&self) -> bool {
        T::hatchet_is_default(self.as_ref())
    }

    #[inline(always)]
    fn hatchet_is_none(&self) -> bool {
        T::hatchet_is_none(self.as_ref())
    }

    #[inline(always)]
    fn hatchet_is_polymorphic() -> bool {
        T::hatchet_is_polymorphic()
    }

    fn hatchet_scalar_text(&self) -> Option<Cow<'_, str>> {
        T::hatchet_scalar_text(self.as_ref())
    }

    #[inline(always)]
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}

impl<T: Serializer> Serializer for RefCell<T> {
    fn hatchet_write(&self, context: &mut WriteContext, force_class: bool) -> Result<(), Error> {
        let inner = self.try_borrow().map_err(|_| {
            Error::not_allowed(format!(
                "RefCell<{}> is mutably borrowed during serialization",
                std::any::type_name::<T>()
            ))
        })?;
        T::hatchet_write(&inner, context, force_class)
    }

    fn hatchet_read(value: Value, context: &mut ReadContext) -> Result<Self, Error> {
        T::hatchet_read(value, context).map(RefCell::new)
    }

    #[inline(always)]
    fn hatchet_kind() -> TypeKind {
        TypeKind::Pointer
    }

    fn hatchet_is_default(&self) -> bool {
        self.try_borrow().map(|v| v.hatchet_is_default()).unwrap_or(false)
    }

    fn hatchet_is_none(&self) -> bool {
        self.try_borrow().map(|v| v.hatchet_is_none()).unwrap_or(false)
    }

    #[inline(always)]
    fn hatchet_is_polymorphic() -> bool {
        T::hatchet_is_polymorphic()
    }

    #[inline(always)]
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
