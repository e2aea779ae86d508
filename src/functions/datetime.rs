//! Time functions

use crate::function::{FunctionError, FunctionResult, JmesPathFunction, str_arg};
use crate::signature::{ArgumentSpec, FunctionSignature, ValueKind};
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta, Utc};
use serde_json::Value;
use std::fmt::Write;
use std::sync::LazyLock;

/// time_since() - elapsed time between two timestamps as a human-readable
/// duration string
///
/// An empty layout means RFC 3339; otherwise the layout is a chrono strftime
/// format string. An empty second timestamp defaults to the current wall
/// clock, read once per call.
pub struct TimeSinceFunction;

impl JmesPathFunction for TimeSinceFunction {
    fn name(&self) -> &str {
        "time_since"
    }
    fn signature(&self) -> &FunctionSignature {
        static SIG: LazyLock<FunctionSignature> = LazyLock::new(|| {
            FunctionSignature::new(
                "time_since",
                vec![
                    ArgumentSpec::of(ValueKind::String),
                    ArgumentSpec::of(ValueKind::String),
                    ArgumentSpec::of(ValueKind::String),
                ],
            )
        });
        &SIG
    }
    fn evaluate(&self, args: &[Value]) -> FunctionResult<Value> {
        let layout = str_arg(self.name(), args, 0)?;
        let ts1 = str_arg(self.name(), args, 1)?;
        let ts2 = str_arg(self.name(), args, 2)?;

        // Single wall-clock read so both timestamps share a base
        let now = Utc::now().fixed_offset();
        let t1 = parse_timestamp(self.name(), layout, ts1)?;
        let t2 = if ts2.is_empty() {
            now
        } else {
            parse_timestamp(self.name(), layout, ts2)?
        };

        Ok(Value::String(format_duration(t2 - t1)))
    }
}

fn parse_timestamp(
    function: &str,
    layout: &str,
    value: &str,
) -> FunctionResult<DateTime<FixedOffset>> {
    if layout.is_empty() {
        return DateTime::parse_from_rfc3339(value)
            .map_err(|e| FunctionError::evaluation(function, e.to_string()));
    }
    // Layouts without a zone are interpreted as UTC
    match DateTime::parse_from_str(value, layout) {
        Ok(t) => Ok(t),
        Err(_) => NaiveDateTime::parse_from_str(value, layout)
            .map(|naive| naive.and_utc().fixed_offset())
            .map_err(|e| FunctionError::evaluation(function, e.to_string())),
    }
}

/// Format a duration as a compound unit string (`"26h3m4s"`, `"1.5s"`,
/// `"500ms"`, `"0s"`), millisecond precision.
fn format_duration(delta: TimeDelta) -> String {
    let mut millis = delta.num_milliseconds();
    let mut out = String::new();
    if millis < 0 {
        out.push('-');
        millis = -millis;
    }

    let hours = millis / 3_600_000;
    let minutes = millis % 3_600_000 / 60_000;
    let seconds = millis % 60_000 / 1_000;
    let fraction = millis % 1_000;

    if hours > 0 {
        let _ = write!(out, "{hours}h{minutes}m");
        push_seconds(&mut out, seconds, fraction);
    } else if minutes > 0 {
        let _ = write!(out, "{minutes}m");
        push_seconds(&mut out, seconds, fraction);
    } else if seconds > 0 || fraction == 0 {
        push_seconds(&mut out, seconds, fraction);
    } else {
        let _ = write!(out, "{fraction}ms");
    }
    out
}

fn push_seconds(out: &mut String, seconds: i64, fraction: i64) {
    if fraction == 0 {
        let _ = write!(out, "{seconds}s");
    } else {
        let padded = format!("{fraction:03}");
        let _ = write!(out, "{seconds}.{}s", padded.trim_end_matches('0'));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_compound_durations() {
        assert_eq!(format_duration(TimeDelta::seconds(0)), "0s");
        assert_eq!(format_duration(TimeDelta::seconds(93784)), "26h3m4s");
        assert_eq!(format_duration(TimeDelta::seconds(3600)), "1h0m0s");
        assert_eq!(format_duration(TimeDelta::milliseconds(1500)), "1.5s");
        assert_eq!(format_duration(TimeDelta::milliseconds(500)), "500ms");
        assert_eq!(format_duration(TimeDelta::seconds(-330)), "-5m30s");
    }

    #[test]
    fn rfc3339_when_layout_is_empty() {
        let t = parse_timestamp("time_since", "", "2021-01-02T15:04:05Z").unwrap();
        assert_eq!(t.timestamp(), 1609599845);
    }

    #[test]
    fn strftime_layout() {
        let t = parse_timestamp("time_since", "%Y-%m-%d %H:%M:%S", "2021-01-02 15:04:05").unwrap();
        assert_eq!(t.timestamp(), 1609599845);
    }

    #[test]
    fn unparseable_timestamp_is_an_error() {
        let err = parse_timestamp("time_since", "", "not-a-time").unwrap_err();
        assert!(err.to_string().starts_with("JMESPath function 'time_since':"));
    }
}
