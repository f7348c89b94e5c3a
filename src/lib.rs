pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::{engine::FinderEngine, source::HttpVendorSource};
pub use crate::domain::model::Vendor;
pub use crate::domain::ports::{ConfigProvider, VendorSource};
pub use crate::utils::error::{FinderError, Result};
