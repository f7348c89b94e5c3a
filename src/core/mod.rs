pub mod engine;
pub mod paginator;
pub mod printer;
pub mod schedule;
pub mod source;

pub use crate::domain::model::Vendor;
pub use crate::domain::ports::{ConfigProvider, VendorSource};
pub use crate::utils::error::Result;
