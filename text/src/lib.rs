//! Character code helpers.
//!
//! - [`codes::code_points`] -- lazily map a string to the numeric code of each character
//! - [`codes::ascii_codes`] -- the same, restricted to ASCII input

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod codes;

pub use codes::{ascii_codes, code_points, CodePoints, NonAsciiError};
