pub mod favorites;
pub mod ingredients;
pub mod recipes;

pub use favorites::*;
pub use ingredients::*;
pub use recipes::*;
