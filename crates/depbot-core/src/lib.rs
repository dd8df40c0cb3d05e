pub mod error;
pub mod io;
pub mod manifest;
pub mod paths;
pub mod prompt;
pub mod scaffold;
pub mod templates;
pub mod types;

pub use error::{DepbotError, Result};
pub use types::{Interval, Mode, Selection};
