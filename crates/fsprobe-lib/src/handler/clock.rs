use chrono::{DateTime, Local, SecondsFormat, TimeZone};

use super::ToolHandler;
use crate::error::ToolError;
use crate::model::{TimeFormat, TimeOutput};

/// Render `now` in the requested format.
pub fn render_time<Tz: TimeZone>(now: &DateTime<Tz>, format: TimeFormat) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match format {
        TimeFormat::Rfc3339 => now.to_rfc3339_opts(SecondsFormat::Secs, true),
        TimeFormat::Unix => now.timestamp().to_string(),
    }
}

impl ToolHandler {
    /// Current wall-clock time. `format` defaults to RFC3339.
    pub fn get_time(&self, format: Option<&str>) -> Result<TimeOutput, ToolError> {
        let format = match format {
            Some(raw) => raw.parse::<TimeFormat>().map_err(ToolError::InvalidInput)?,
            None => TimeFormat::default(),
        };

        Ok(TimeOutput {
            time: render_time(&Local::now(), format),
            format: format.as_str().to_string(),
        })
    }
}
