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

use std::collections::HashSet;
use std::rc::Rc;
use std::sync::Arc;

use crate::error::Error;

/// Identity set of the shared pointers currently being written.
///
/// A pointer is entered before its target is written and left afterwards,
/// so the same `Rc` may appear any number of times side by side; only a
/// pointer reached again from inside its own target is a cycle.
///
/// ```rust
/// use hatchet_core::resolver::cycle_guard::CycleGuard;
/// use std::rc::Rc;
///
/// let mut guard = CycleGuard::new();
/// let rc = Rc::new(42);
/// guard.enter_rc(&rc).unwrap();
/// assert!(guard.enter_rc(&rc.clone()).is_err());
/// guard.exit_rc(&rc);
/// assert!(guard.enter_rc(&rc).is_ok());
/// ```
#[derive(Default)]
pub struct CycleGuard {
    active: HashSet<usize>,
}

impl CycleGuard {
    pub fn new() -> Self {
        Self::default()
    }

    fn enter(&mut self, ptr_addr: usize, type_name: &'static str) -> Result<(), Error> {
        if !self.active.insert(ptr_addr) {
            return Err(Error::circular_reference(format!(
                "Circular reference detected while writing {type_name}"
            )));
        }
        Ok(())
    }

    pub fn enter_rc<T: ?Sized>(&mut self, rc: &Rc<T>) -> Result<(), Error> {
        self.enter(
            Rc::as_ptr(rc) as *const () as usize,
            std::any::type_name::<T>(),
        )
    }

    pub fn exit_rc<T: ?Sized>(&mut self, rc: &Rc<T>) {
        self.active.remove(&(Rc::as_ptr(rc) as *const () as usize));
    }

    pub fn enter_arc<T: ?Sized>(&mut self, arc: &Arc<T>) -> Result<(), Error> {
        self.enter(
            Arc::as_ptr(arc) as *const () as usize,
            std::any::type_name::<T>(),
        )
    }

    pub fn exit_arc<T: ?Sized>(&mut self, arc: &Arc<T>) {
        self.active.remove(&(Arc::as_ptr(arc) as *const () as usize));
    }

    pub fn depth(&self) -> usize {
        self.active.len()
    }
}
