// Application layer - boundary validation and the service the presentation layer talks to.

pub mod error;
pub mod reporting;
pub mod service;
pub mod validation;

pub use error::*;
pub use reporting::*;
pub use service::*;
pub use validation::*;
