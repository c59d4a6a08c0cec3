// Utils compartidos

pub mod constants;
pub mod storage;
pub mod toast;

pub use constants::*;
pub use storage::*;
