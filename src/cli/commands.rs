pub mod detect;
pub mod serve;

pub use detect::{detect, OutputFormat};
pub use serve::serve;
