pub mod prelude;

pub mod baked_good;
pub mod bakery;

pub use sea_orm;
