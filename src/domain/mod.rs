pub mod models;
pub mod parser;
pub mod counter;
pub mod errors;

pub use models::*;
pub use parser::*;
pub use counter::*;
pub use errors::*;
