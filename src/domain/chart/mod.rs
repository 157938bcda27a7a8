//! Chart aggregate: sparkline geometry, themes and value animation.

pub mod animation;
pub mod entities;
pub mod services;
pub mod value_objects;

pub use animation::*;
pub use entities::*;
pub use services::*;
pub use value_objects::*;
