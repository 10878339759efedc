use color_eyre::eyre::{bail, Result, WrapErr};
use doku::Document;
use figment::providers::{Format, Serialized, Toml};
use figment::Figment;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::options::Opt;
use crate::model::timestamp::{TargetZone, DEFAULT_TIMEZONE};
use crate::projection::OutputFormat;

#[derive(Debug, Deserialize, Serialize, Document)]
pub struct Config {
    /// Name of the time zone in which local dates and times are written
    ///
    /// See available timezones here: <https://docs.rs/chrono-tz/latest/chrono_tz/enum.Tz.html>
    /// An unknown name falls back to a fixed UTC+1 offset, without daylight saving.
    #[doku(example = "Europe/Paris")]
    pub display_timezone: String,

    /// The directory where output tables are written
    ///
    /// The file name depends on the format: `evenements_ics.csv` or `evenements_pseudo.csv`
    #[doku(example = ".")]
    pub output_dir: PathBuf,

    /// The table layout: `ics` copies the ICS properties, `pseudo` derives a timetable
    #[doku(example = "ics")]
    pub format: OutputFormat,
}

/// Sane default values for the config struct.
impl Default for Config {
    fn default() -> Self {
        Self {
            display_timezone: DEFAULT_TIMEZONE.into(),
            output_dir: ".".into(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Layer the defaults, the config file (when present) and the command line
    pub fn new(args: &Opt) -> Result<Config> {
        debug!("reading configuration from {:?}...", args.config);
        let config: Config = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(&args.config))
            .admerge(Serialized::defaults(args))
            .extract()
            .wrap_err("could not read the configuration")?;

        debug!("config is: {:#?}", config);
        Ok(config)
    }

    pub fn target_zone(&self) -> TargetZone {
        TargetZone::resolve(&self.display_timezone)
    }

    /// Where the table goes: `output` when given, else the format's file in `output_dir`
    pub fn output_path(&self, output: Option<&Path>) -> PathBuf {
        output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.output_dir.join(self.format.default_file_name()))
    }

    /// Write a documented example config file, refusing to replace an existing one
    pub fn write_example(path: &Path) -> Result<()> {
        if path.exists() {
            bail!("config file {:?} already exists, not overwriting it", path);
        }
        fs::write(path, doku::to_toml::<Config>())
            .wrap_err_with(|| format!("could not write example config to {:?}", path))
    }
}
