pub mod interval;
pub mod severity;
pub mod time;

pub use interval::*;
pub use severity::*;
pub use time::*;
