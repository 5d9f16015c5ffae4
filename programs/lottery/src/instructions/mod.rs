pub use end_lottery::*;
pub use enter::*;
pub use entrance_fee::*;
pub use fulfill_randomness::*;
pub use initialize::*;
pub use start_lottery::*;

pub mod end_lottery;
pub mod enter;
pub mod entrance_fee;
pub mod fulfill_randomness;
pub mod initialize;
pub mod start_lottery;
