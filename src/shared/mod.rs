pub mod listing;
pub mod utils;

pub use listing::*;
pub use utils::*;
