//! Consistency report for a stored settings file.

use crate::config::{Settings, merge_stored};
use crate::models::location::Location;
use serde_json::Value;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckReport {
    /// Dotted paths present in the defaults but absent from the stored object.
    pub missing_fields: Vec<String>,
    /// Stored fields with a value of the wrong shape; their defaults apply.
    pub invalid_fields: Vec<String>,
    /// Set when the stored data cannot be used at all.
    pub unreadable: bool,
    pub unordered_schedules: Vec<Location>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.missing_fields.is_empty()
            && self.invalid_fields.is_empty()
            && !self.unreadable
            && self.unordered_schedules.is_empty()
    }
}

fn collect_missing(defaults: &Value, stored: &Value, prefix: &str, out: &mut Vec<String>) {
    let Value::Object(def) = defaults else {
        return;
    };
    for (key, def_val) in def {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match stored.get(key) {
            None | Some(Value::Null) => out.push(path),
            Some(v) => collect_missing(def_val, v, &path, out),
        }
    }
}

pub fn check_stored(raw: Option<&str>) -> CheckReport {
    let mut report = CheckReport::default();

    let stored = match raw.map(serde_json::from_str::<Value>) {
        Some(Ok(Value::Object(map))) => map,
        Some(_) => {
            report.unreadable = true;
            return report;
        }
        // Nothing stored: defaults apply as a whole.
        None => return report,
    };

    collect_missing(
        &Settings::default().to_value(),
        &Value::Object(stored.clone()),
        "",
        &mut report.missing_fields,
    );

    let (merged, rejected) = merge_stored(stored);
    report.invalid_fields = rejected;
    let settings: Settings = serde_json::from_value(merged).unwrap_or_default();
    report.unordered_schedules = Location::ALL
        .into_iter()
        .filter(|l| !settings.schedule(*l).is_ordered())
        .collect();

    report
}
