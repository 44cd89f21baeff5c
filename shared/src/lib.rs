pub mod config;
pub mod constants;
pub mod error;
pub mod fingerprint;
pub mod prize;
pub mod session;
pub mod spin;
pub mod submission;

pub use config::DrawConfig;
pub use error::DrawError;
pub use fingerprint::Fingerprint;
pub use prize::{Prize, PrizeId};
pub use session::{DrawSession, Notice, Step};
pub use spin::{SpinPhase, TriggerOutcome, WheelControl, WheelPrize};
