//! Server-rendered educational site on common Solidity smart-contract
//! vulnerabilities.

pub mod config;
pub mod content;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod render;
pub mod routing;

pub use config::SiteConfig;
pub use content::{Document, PageId};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::RouteTable;
