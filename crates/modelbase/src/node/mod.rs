mod def;
mod entity;
mod primary_key;

pub use def::*;
pub use entity::*;
pub use primary_key::*;
