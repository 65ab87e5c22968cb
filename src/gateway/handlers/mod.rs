pub mod health;
pub mod order_line;

pub use health::*;
pub use order_line::*;
