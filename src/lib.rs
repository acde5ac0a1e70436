pub mod case;
pub mod cli;
pub mod error;
pub mod num;

pub use case::{to_camel_case, to_dot_case, to_kebab_case, Style};
pub use error::RecaseError;

/// A single input/output pair produced by one of the converters.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub input: String,
    pub output: String,
}
