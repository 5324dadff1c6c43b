pub mod cancel;
pub mod execute;
pub mod initialize;

pub use cancel::*;
pub use execute::*;
pub use initialize::*;
