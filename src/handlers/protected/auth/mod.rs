pub mod session;

pub use session::{logout, me};
