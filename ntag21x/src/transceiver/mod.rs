// ntag21x/src/transceiver/mod.rs

pub mod mock;
pub mod simulated;
pub mod traits;

pub use mock::MockTransceiver;
pub use simulated::SimulatedTag;
pub use traits::{Property, TargetInfo, Transceiver};
