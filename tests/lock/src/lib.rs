//! Shared helpers for the workspace lock tests.

#![forbid(unsafe_code)]
