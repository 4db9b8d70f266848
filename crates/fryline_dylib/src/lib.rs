//! Forces dynamic linking of `fryline` when the `dynamic_linking` feature is enabled.
//!
//! This crate is not meant to be used directly.

#![allow(unused_imports, clippy::single_component_path_imports)]

use fryline_internal;
