mod compile;
mod input;

pub use compile::{OutputFormat, check, compile};
pub use input::SpecInput;
