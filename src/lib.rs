pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod value;

pub use error::EvalError;
pub use parser::evaluate;
pub use value::{NumericMode, Value};
