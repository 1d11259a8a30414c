pub mod auth;
pub mod lenient;
pub mod orders;
pub mod products;
pub mod variants;
