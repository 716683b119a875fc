//! Code units and delimited fields
//!
//! This module provides the code-unit abstraction shared by every scanning
//! strategy, and the field iterator used as the reference split.

mod code_unit;
mod fields;

pub use code_unit::CodeUnit;
pub use fields::{find_subslice, find_unit, Fields};
