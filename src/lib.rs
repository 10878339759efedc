pub mod configuration;
pub mod conversion;
pub mod error;
pub mod model;
pub mod projection;
pub mod sink;

pub use conversion::{convert_file, convert_str, Table};
pub use error::{ConversionError, TimestampError};
pub use projection::{OutputFormat, RowProjection, PLACEHOLDER};
