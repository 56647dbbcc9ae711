mod board;
mod session;

pub use board::OrderBoard;
pub use session::{load_profile, Session};
