//! Configuration module

mod site;

pub use site::CacheConfig;
pub use site::ContactConfig;
pub use site::SiteConfig;
