pub mod config;
pub mod error;
pub mod latency;
pub mod navigation;
pub mod role;
pub mod session;

// Page datasets (literal mock values, one module per screen)
pub mod admin;
pub mod assessment;
pub mod athlete;
pub mod benchmark;
pub mod dashboard;
pub mod report;

pub use config::*;
pub use error::*;
pub use latency::*;
pub use navigation::*;
pub use role::*;
pub use session::*;

pub use admin::*;
pub use assessment::*;
pub use athlete::*;
pub use benchmark::*;
pub use dashboard::*;
pub use report::*;
