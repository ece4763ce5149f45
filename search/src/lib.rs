//! Ordered search: bisection over ascending-sorted slices.
//!
//! # Key functions
//!
//! - [`search`] -- find an element equal to a target
//! - [`search_by`] -- bisection driven by a comparator
//! - [`search_by_key`] -- bisection over a slice sorted by an extracted key
//!
//! All three return `Option<usize>`: the index of a matching element, or
//! `None` when nothing matches. They only read the slice and are safe to
//! call concurrently on shared data.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ordered;

pub use ordered::{search, search_by, search_by_key};
