// ntag21x/src/memory/mod.rs
//! Page-addressed memory model: tag geometry and page accounting.

pub mod geometry;
pub mod pages;

pub use geometry::{TagGeometry, geometry_for};
pub use pages::{chunk_pages, ensure_capacity, page_count};
