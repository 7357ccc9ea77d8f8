//! # dup-core
//!
//! Structural deep-copy for JSON-like values.
//!
//! `dup-core` models JSON-like data as a closed [`Value`] union (scalars,
//! ordered sequences, and insertion-ordered string-keyed mappings) and
//! guarantees that cloning a value yields a fully independent tree: no
//! container is shared between a value and its copy at any depth, so
//! mutating either side never affects the other. Copies are materialized
//! in one call; there is no lazy or partial cloning.
//!
//! ## Quick start
//!
//! ```rust
//! use dup_core::{from_json, Value};
//!
//! let original = from_json(r#"{"name":"a","user":{"name":"b"},"data":[]}"#).unwrap();
//! let mut copy = original.clone();
//!
//! // Mutating the copy leaves the original untouched.
//! if let Some(items) = copy.get_mut("data").and_then(Value::as_sequence_mut) {
//!     items.push(Value::from("x"));
//! }
//! assert_eq!(original.get("data"), Some(&Value::Sequence(vec![])));
//! assert_eq!(copy.get("data"), Some(&Value::Sequence(vec![Value::from("x")])));
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the `Value` union and its accessors
//! - [`clone`] — recursive and explicit-stack structural cloning
//! - [`convert`] — `serde_json` interop (`from_json`, `to_json`)
//! - [`seq`] — non-mutating helpers over sequences of values
//! - [`error`] — error types for the JSON boundary

pub mod clone;
pub mod convert;
pub mod error;
pub mod seq;
pub mod value;

pub use convert::{from_json, to_json, to_json_pretty};
pub use error::DupError;
pub use value::Value;
