pub mod categories;
pub mod extract;
pub mod health;
pub mod problem;
pub mod products;

pub use problem::Problem;
