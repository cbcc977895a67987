/// Scene content module - built-in geometry, mesh storage, track data

pub mod geometry;
pub mod meshes;
pub mod track;

pub use geometry::*;
pub use meshes::*;
pub use track::*;
