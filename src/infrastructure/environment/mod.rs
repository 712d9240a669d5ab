//! Host environment infrastructure module

mod system;

pub use system::SystemSignals;
