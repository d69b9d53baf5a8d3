pub mod axis;
pub mod job;
pub mod plan;
pub mod point;
pub mod range;
pub mod resolution;
pub mod tile;
