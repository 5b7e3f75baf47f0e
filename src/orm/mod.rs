//! SeaORM entities, one module per table.
//!
//! Entities declare no relations: references between tables are plain integer
//! columns without foreign-key constraints, so deleting a parent row leaves its
//! children in place.

pub mod answers;
pub mod questions;
pub mod responses;
pub mod surveys;
pub mod users;
