//! Shared value types for the Mosaic core layer.

pub mod geometry;

pub use geometry::{Point, Rect, Size};
