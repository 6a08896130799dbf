use chrono_tz::Tz;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    /// Ireland / UK (Europe/Dublin)
    #[value(aliases = ["uki", "ie"])]
    Ireland,
    /// Pune, India (Asia/Kolkata)
    #[value(alias = "in")]
    Pune,
}

impl Location {
    pub const ALL: [Location; 2] = [Location::Ireland, Location::Pune];

    pub fn tz(&self) -> Tz {
        match self {
            Location::Ireland => chrono_tz::Europe::Dublin,
            Location::Pune => chrono_tz::Asia::Kolkata,
        }
    }

    /// Display label used on cards and overlap tables.
    pub fn label(&self) -> &'static str {
        match self {
            Location::Ireland => "UKI",
            Location::Pune => "Pune, India",
        }
    }

    /// Prefix of the settings key holding this location's schedule.
    pub fn code(&self) -> &'static str {
        match self {
            Location::Ireland => "ireland",
            Location::Pune => "pune",
        }
    }
}
