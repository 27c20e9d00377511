pub mod config;
pub mod error;
pub mod paths;
pub mod prober;
pub mod result;
pub mod robots;
pub mod sitemap;

pub use config::ScanConfig;
pub use error::ScanError;
pub use prober::{Prober, ProgressCallback, ResultCallback};
pub use result::ProbeResult;
pub use robots::{PolicyOutcome, RobotsPolicy};
pub use sitemap::SitemapOutcome;
