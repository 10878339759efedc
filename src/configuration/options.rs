use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::projection::OutputFormat;

pub const DEFAULT_CONFIG_FILE: &str = "ics2csv.toml";

/// Command line options
///
/// Options that also exist in the config file are serialized under the config key names so
/// they can be layered over it.
#[derive(Parser, Debug, Serialize, Deserialize)]
#[command(name = "ics2csv", author, version, about)]
pub struct Opt {
    /// The calendar (.ics) file to convert
    #[serde(skip)]
    pub ics_file: Option<PathBuf>,

    /// The table layout to write
    #[clap(short, long, value_enum)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,

    /// Write the table here instead of the default file in the output directory
    #[clap(short, long)]
    #[serde(skip)]
    pub output: Option<PathBuf>,

    /// The config file to read, if it exists
    #[clap(short, long, default_value = DEFAULT_CONFIG_FILE)]
    #[serde(skip)]
    pub config: PathBuf,

    /// Name of the time zone for local dates and times, e.g. Europe/Paris
    #[clap(short, long)]
    #[serde(
        rename = "display_timezone",
        skip_serializing_if = "Option::is_none"
    )]
    pub timezone: Option<String>,

    /// Log level, used when RUST_LOG is not set
    #[clap(long, default_value = "warn")]
    #[serde(skip)]
    pub log_level: String,

    /// Create the example config file and exit
    #[clap(long, default_value_t = false)]
    #[serde(skip)]
    pub create_default_config: bool,
}
