mod error;
mod options;
mod scheme;

pub use error::{Error, Result};
pub use options::Options;
pub use scheme::{JsonScheme, RawScheme, Scheme};
