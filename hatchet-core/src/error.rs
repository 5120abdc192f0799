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

//! Error type shared by the parser and both coercion engines.
//!
//! Every failure is terminal for the top-level call that produced it: no
//! partial object graph and no partial text is ever handed back.

use std::borrow::Cow;

use thiserror::Error;

/// Set `HATCHET_PANIC_ON_ERROR` at compile time to panic where an error is created.
pub const PANIC_ON_ERROR: bool = option_env!("HATCHET_PANIC_ON_ERROR").is_some();

/// Check if `HATCHET_PANIC_ON_ERROR` was set at compile time.
#[inline(always)]
pub const fn should_panic_on_error() -> bool {
    PANIC_ON_ERROR
}

/// Error type for Hatchet parsing, serialization and deserialization.
///
/// Do not construct variants directly; use the static constructors
/// ([`Error::syntax`], [`Error::conversion`], ...). They accept anything
/// convertible into `Cow<'static, str>` and honour `HATCHET_PANIC_ON_ERROR`:
///
/// ```bash
/// RUST_BACKTRACE=1 HATCHET_PANIC_ON_ERROR=1 cargo test
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Malformed input text.
    ///
    /// Do not construct this variant directly; use [`Error::syntax`] instead.
    #[error("{message} at line {line}, column {column}")]
    Syntax {
        message: Cow<'static, str>,
        line: usize,
        column: usize,
    },

    /// A value could not be coerced into the requested type.
    ///
    /// Do not construct this variant directly; use [`Error::conversion`] instead.
    #[error("{0}")]
    Conversion(Cow<'static, str>),

    /// A `Class` discriminator names a type that is not registered.
    ///
    /// Do not construct this variant directly; use [`Error::unknown_type`] instead.
    #[error("Type is not registered: {0}")]
    UnknownType(Cow<'static, str>),

    /// A key contains whitespace and cannot be written.
    ///
    /// Do not construct this variant directly; use [`Error::invalid_key`] instead.
    #[error("Key `{0}` contains whitespace")]
    InvalidKey(Cow<'static, str>),

    /// An object was met again while it was still being written.
    ///
    /// Do not construct this variant directly; use [`Error::circular_reference`] instead.
    #[error("{0}")]
    CircularReference(Cow<'static, str>),

    /// No emission pattern exists for a runtime value.
    ///
    /// Do not construct this variant directly; use [`Error::unsupported_type`] instead.
    #[error("{0}")]
    UnsupportedType(Cow<'static, str>),

    /// Maximum nesting depth exceeded.
    ///
    /// Do not construct this variant directly; use [`Error::depth_exceed`] instead.
    #[error("{0}")]
    DepthExceed(Cow<'static, str>),

    /// Operation not allowed, such as a conflicting type registration.
    ///
    /// Do not construct this variant directly; use [`Error::not_allowed`] instead.
    #[error("{0}")]
    NotAllowed(Cow<'static, str>),
}

impl Error {
    /// Creates a new [`Error::Syntax`] at a 1-based line and column.
    ///
    /// ```
    /// use hatchet_core::error::Error;
    ///
    /// let err = Error::syntax("Unterminated string", 3, 7);
    /// assert_eq!(err.to_string(), "Unterminated string at line 3, column 7");
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn syntax<S: Into<Cow<'static, str>>>(s: S, line: usize, column: usize) -> Self {
        let err = Error::Syntax {
            message: s.into(),
            line,
            column,
        };
        if PANIC_ON_ERROR {
            panic!("HATCHET_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::Conversion`] from a string or static message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn conversion<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::Conversion(s.into());
        if PANIC_ON_ERROR {
            panic!("HATCHET_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::UnknownType`] for the given discriminator.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unknown_type<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::UnknownType(s.into());
        if PANIC_ON_ERROR {
            panic!("HATCHET_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::InvalidKey`] for the offending key.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn invalid_key<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::InvalidKey(s.into());
        if PANIC_ON_ERROR {
            panic!("HATCHET_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::CircularReference`] from a string or static message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn circular_reference<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::CircularReference(s.into());
        if PANIC_ON_ERROR {
            panic!("HATCHET_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::UnsupportedType`] from a string or static message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unsupported_type<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::UnsupportedType(s.into());
        if PANIC_ON_ERROR {
            panic!("HATCHET_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::DepthExceed`] from a string or static message.
    ///
    /// ```
    /// use hatchet_core::error::Error;
    ///
    /// let err = Error::depth_exceed("Maximum depth 128 exceeded");
    /// ```
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn depth_exceed<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::DepthExceed(s.into());
        if PANIC_ON_ERROR {
            panic!("HATCHET_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::NotAllowed`] from a string or static message.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn not_allowed<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::NotAllowed(s.into());
        if PANIC_ON_ERROR {
            panic!("HATCHET_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Appends the Rust type name to a conversion error.
    ///
    /// Other variants pass through unchanged.
    ///
    /// ```
    /// use hatchet_core::error::Error;
    ///
    /// let err = Error::conversion("Cannot convert `x`");
    /// let enhanced = Error::enhance_conversion_error::<i32>(err);
    /// assert_eq!(enhanced.to_string(), "Cannot convert `x` (type: i32)");
    /// ```
    #[inline(never)]
    pub fn enhance_conversion_error<T: ?Sized + 'static>(err: Error) -> Error {
        if let Error::Conversion(s) = err {
            let mut msg = s.to_string();
            msg.push_str(" (type: ");
            msg.push_str(std::any::type_name::<T>());
            msg.push(')');
            Error::Conversion(msg.into())
        } else {
            err
        }
    }

    /// Adds the member being read to a conversion error, so nested failures
    /// read as a path from the innermost value outwards.
    #[inline(never)]
    pub fn in_member(self, member: &str, owner: &str) -> Error {
        if let Error::Conversion(s) = self {
            Error::Conversion(format!("{s}, in member `{member}` of {owner}").into())
        } else {
            self
        }
    }

    /// Shorthand for the common "value cannot become type" conversion error.
    #[cold]
    #[track_caller]
    pub fn cannot_convert<T: ?Sized + 'static>(value: &impl std::fmt::Display) -> Self {
        Error::conversion(format!(
            "Cannot convert `{}` to {}",
            value,
            std::any::type_name::<T>()
        ))
    }
}

/// Ensures a condition is true; otherwise returns an [`enum@Error`].
///
/// # Examples
/// ```
/// use hatchet_core::ensure;
/// use hatchet_core::error::Error;
///
/// fn check_len(n: usize) -> Result<(), Error> {
///     ensure!(n > 0, "length must be positive");
///     ensure!(n < 10, "length {} too large", n);
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal) => {
        if !$cond {
            return Err($crate::error::Error::conversion($msg));
        }
    };
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::error::Error::conversion(format!($fmt, $($arg)*)));
        }
    };
}

/// Returns early with a conversion [`enum@Error`].
///
/// # Examples
/// ```
/// use hatchet_core::bail;
/// use hatchet_core::error::Error;
///
/// fn fail_fast(v: &str) -> Result<(), Error> {
///     bail!("cannot convert {}", v);
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($err:expr) => {
        return Err($crate::error::Error::conversion($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error::conversion(format!($fmt, $($arg)*)))
    };
}

/// Returns early with a [`Error::NotAllowed`].
#[macro_export]
macro_rules! not_allowed {
    ($err:expr) => {
        return Err($crate::error::Error::not_allowed($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error::not_allowed(format!($fmt, $($arg)*)))
    };
}
