use serde::{Deserialize, Serialize};

/// User settings persisted independently of the entries.
///
/// The rate is stored as given. Values below zero are not rejected here;
/// the input boundary is expected to clamp if it wants to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "hourlyRate")]
    pub hourly_rate: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self { hourly_rate: 0.0 }
    }
}
