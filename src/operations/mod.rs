pub mod creation;
pub mod intersect;
pub mod query;
