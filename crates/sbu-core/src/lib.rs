pub mod config;
pub mod logging;

pub mod app_id;
pub mod batch;
pub mod error;
pub mod http;
pub mod resolver;
pub mod splunkbase;

pub use app_id::AppId;
pub use batch::{BatchFormatter, BatchOptions, BatchOutcome};
pub use error::{BatchError, ResolveError};
pub use resolver::{AppInfo, AppInfoResolver};
