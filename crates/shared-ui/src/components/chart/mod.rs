mod component;
mod geometry;

pub use component::*;
pub use geometry::*;
