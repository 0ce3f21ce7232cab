pub mod application;
pub mod cli;
pub mod domain;
pub mod logging;

pub use application::BudgetService;
pub use domain::*;
