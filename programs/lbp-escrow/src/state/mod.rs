pub mod config;
pub mod lbp;
pub mod position;

pub use config::*;
pub use lbp::*;
pub use position::*;
