//! Document model types for classified content.
//!
//! This module defines the output representation that bridges layout
//! extraction and downstream storage. The model is plain data: elements and
//! statistics carry no behavior beyond small accessors and serialize
//! directly for the persistence boundary.

mod element;
mod statistics;

pub use element::{Element, ElementType, FontInfo, Rect};
pub use statistics::DocumentStatistics;
