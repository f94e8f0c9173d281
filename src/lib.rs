//! # Overview
//!
//! This crate provides an implementation of the [Zhang-Shasha] algorithm for the edit distance
//! between ordered labeled trees, that is the lowest cost sequence of node removals, insertions
//! and relabelings that transforms one tree into the other while respecting the order of siblings.
//!
//! Besides the distance, the algorithm reconstructs an edit script that achieves it, as a sequence
//! of [Operation]s that refer back to the nodes of both trees.
//!
//! [Zhang-Shasha]: https://doi.org/10.1137/0218082
//!
//! # Example
//!
//! ```rust
//! use zhang_shasha::*;
//!
//! // f(d(a, c(b)), e)
//! let a = Labeled::new("f")
//!     .with_child(
//!         Labeled::new("d")
//!             .with_child(Labeled::new("a"))
//!             .with_child(Labeled::new("c").with_child(Labeled::new("b"))),
//!     )
//!     .with_child(Labeled::new("e"));
//!
//! // f(c(d(a, b)), e)
//! let b = Labeled::new("f")
//!     .with_child(
//!         Labeled::new("c").with_child(
//!             Labeled::new("d")
//!                 .with_child(Labeled::new("a"))
//!                 .with_child(Labeled::new("b")),
//!         ),
//!     )
//!     .with_child(Labeled::new("e"));
//!
//! let zs = ZhangShasha::new(&a, &b);
//! assert_eq!(zs.distance(), 2);
//!
//! let edits: Vec<_> = zs
//!     .edit_script()
//!     .iter()
//!     .filter(|op| op.kind() != OperationKind::Match)
//!     .map(ToString::to_string)
//!     .collect();
//!
//! assert_eq!(edits.len(), 2);
//! assert!(edits.contains(&"remove c".to_string()));
//! assert!(edits.contains(&"insert c".to_string()));
//! ```
//!
//! Any tree can be compared, so long as it implements [Node] and [Tree].
//!
//! ```rust
//! use zhang_shasha::*;
//! use std::mem::{discriminant, Discriminant};
//! use std::iter::empty;
//!
//! enum Json {
//!     Null,
//!     Bool(bool),
//!     Number(f64),
//!     String(String),
//!     Array(Vec<Json>),
//!     Map(Vec<(String, Json)>),
//! }
//!
//! impl<'n> Node<'n> for Json {
//!     type Kind = Discriminant<Json>;
//!     fn kind(&'n self) -> Self::Kind {
//!         discriminant(self)
//!     }
//!
//!     type Weight = u64;
//!     fn weight(&'n self) -> Self::Weight {
//!         1
//!     }
//! }
//!
//! impl<'t> Tree<'t> for Json {
//!     type Children = Box<dyn Iterator<Item = &'t Self> + 't>;
//!     fn children(&'t self) -> Self::Children {
//!         match self {
//!             Json::Array(a) => Box::new(a.iter()),
//!             Json::Map(m) => Box::new(m.iter().map(|(_, v)| v)),
//!             _ => Box::new(empty()),
//!         }
//!     }
//! }
//! #
//! # impl From<serde_json::Value> for Json {
//! #     fn from(obj: serde_json::Value) -> Self {
//! #         use serde_json::Value::*;
//! #         match obj {
//! #             Null => Json::Null,
//! #             Bool(b) => Json::Bool(b),
//! #             Number(n) => Json::Number(n.as_i64().unwrap() as f64),
//! #             String(s) => Json::String(s),
//! #             Array(a) => Json::Array(a.into_iter().map(Into::into).collect()),
//! #             Object(m) => Json::Map(
//! #                 m.into_iter()
//! #                     .map(|(k, v)| (k, v.into()))
//! #                     .collect(),
//! #             ),
//! #         }
//! #     }
//! # }
//!
//! macro_rules! json {
//!     ($( $tokens:tt )*) => {
//!         // ...
//! #         Json::from(::serde_json::json!({$($tokens)*}))
//!     };
//! }
//!
//! let john = json! {
//!     "name": "John Doe",
//!     "age": 43,
//!     "phones": [
//!         "+44 1234567",
//!         "+44 2345678"
//!     ]
//! };
//!
//! let jane = json! {
//!     "name": "Jane Doe",
//!     "maiden name": "Smith",
//!     "age": 40,
//!     "phones": [
//!         "+44 7654321",
//!     ]
//! };
//!
//! // Only the kind of each value is compared, so it takes inserting "maiden name" and removing
//! // one of the phones.
//! let (edits, cost) = diff(&john, &jane);
//!
//! assert_eq!(cost, 2);
//! assert_eq!(edits.iter().filter(|op| op.kind() == OperationKind::Insert).count(), 1);
//! assert_eq!(edits.iter().filter(|op| op.kind() == OperationKind::Remove).count(), 1);
//! ```

mod annotate;
mod cost;
mod diff;
mod labeled;
mod operation;
mod tree;

pub use annotate::*;
pub use cost::*;
pub use diff::*;
pub use labeled::*;
pub use operation::*;
pub use tree::*;
