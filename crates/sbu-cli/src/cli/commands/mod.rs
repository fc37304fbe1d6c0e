//! CLI command handlers. Each command is in its own file.

mod completions;
mod info;
mod urls;

pub use completions::{run_completions, run_man};
pub use info::run_info;
pub use urls::run_urls;

use sbu_core::config::SbuConfig;
use sbu_core::http::CurlFetcher;
use sbu_core::AppInfoResolver;

fn resolver_from_config(cfg: &SbuConfig) -> AppInfoResolver<CurlFetcher> {
    let fetcher = CurlFetcher::new(cfg.timeout(), cfg.user_agent.clone());
    AppInfoResolver::new(fetcher, &cfg.api_base)
}
