mod text;

pub use text::{ColorMode, TextFormatter};
