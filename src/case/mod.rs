pub mod camel;
pub mod dot;
pub mod kebab;
pub mod tokenizer;

pub use camel::to_camel_case;
pub use dot::to_dot_case;
pub use kebab::to_kebab_case;

use crate::error::RecaseError;
use std::fmt;
use std::str::FromStr;

/// The naming conventions the crate can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Kebab,
    Camel,
    Dot,
}

impl Style {
    pub fn convert(&self, input: &str) -> String {
        match self {
            Style::Kebab => to_kebab_case(input),
            Style::Camel => to_camel_case(input),
            Style::Dot => to_dot_case(input),
        }
    }

    /// Convert an input that may be absent.
    ///
    /// Absence is an error, never a silent empty string; see
    /// [`RecaseError::MissingInput`].
    pub fn convert_opt(&self, input: Option<&str>) -> Result<String, RecaseError> {
        match input {
            Some(text) => Ok(self.convert(text)),
            None => Err(RecaseError::MissingInput),
        }
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kebab" => Ok(Style::Kebab),
            "camel" => Ok(Style::Camel),
            "dot" => Ok(Style::Dot),
            _ => Err(format!("Unknown case style: {}", s)),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Kebab => write!(f, "kebab"),
            Style::Camel => write!(f, "camel"),
            Style::Dot => write!(f, "dot"),
        }
    }
}
