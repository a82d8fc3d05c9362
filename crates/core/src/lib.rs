//! Reflection model for PHP structural elements.
//!
//! Elements are assembled by builders while a declaration is walked, then published into an
//! [`ElementIndex`] where they are shared read-only. Identity, node association and metadata
//! come from `reflector-api`.

pub mod config;
pub mod element;
pub mod error;
pub mod index;
pub mod logging;

pub use config::LogConfig;
pub use element::{
    Argument, Constant, ElementKind, Function, FunctionBuilder, Method, MethodBuilder,
    ReflectedElement, Visibility,
};
pub use error::{ReflectorError, Result};
pub use index::ElementIndex;
