mod database {
    pub mod actions;
    pub mod error;
    pub mod form;
    pub mod schema;
    pub mod store;
}
mod api {
    pub mod filters;
    pub mod handlers;
    pub mod rejection;
}
pub mod config;
mod constants;

pub use api::*;
pub use constants::*;
pub use database::*;
