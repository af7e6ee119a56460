mod args;
mod value;

pub use args::Args;
pub use value::Value;
