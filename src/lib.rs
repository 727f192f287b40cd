//! Circular intrusive doubly-linked text queues.
//!
//! This crate provides two layers:
//!
//! - [`Ring`], a circular doubly-linked list anchored by a heap-allocated
//!   sentinel node. The ring owns its nodes, keeps both ends reachable in
//!   *O*(1), and implements the structural algorithms (in-place reversal,
//!   grouped reversal, pairwise swap, stable merge sort, duplicate-run
//!   removal, suffix-maximum filtering, and whole-ring splicing) by
//!   relinking nodes, never by moving values.
//! - [`TextQueue`], an ordered queue of owned text values built on
//!   `Ring<Box<str>>`. Insertion duplicates caller-supplied text into a
//!   newly owned buffer; removal transfers ownership of the value back to
//!   the caller.
//!
//! The engine is fully synchronous and performs no locking of its own;
//! `&mut self` receivers make exclusive access a compile-time property.
//! Fallible allocation is surfaced through the [`AllocError`] type on the
//! `try_` constructors and insertion methods.
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[macro_use]
pub(crate) mod util;

pub mod queue;
pub mod ring;

mod error;

pub use error::AllocError;

#[doc(inline)]
pub use queue::TextQueue;
#[doc(inline)]
pub use ring::Ring;
