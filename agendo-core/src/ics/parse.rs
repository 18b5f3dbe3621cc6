//! ICS event parsing.
//!
//! Single-pass conversion of VEVENT blocks into `TaskRecord`s. The input is
//! the full decoded text of one calendar export; a source with zero VEVENT
//! blocks yields an empty result, and a malformed block is skipped without
//! aborting the rest of the parse.

use crate::task::{Priority, TaskRecord};
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Prefix added to the description of tasks imported from all-day events.
pub const ALL_DAY_MARKER: &str = "[Tutto il giorno] ";

/// Time-of-day assigned to all-day events (date-only DTSTART).
const ALL_DAY_START_HOUR: u32 = 9;

/// Fallback duration when the source has no usable DTEND.
const DEFAULT_DURATION_MIN: i64 = 60;

/// Output timestamp shape: local wall-clock, seconds always zeroed.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:00";

/// Result of one import pass.
#[derive(Debug, Clone, Default)]
pub struct ImportOutcome {
    /// Records in source order, one per valid VEVENT block.
    pub tasks: Vec<TaskRecord>,
    /// Blocks skipped for missing or unparsable required fields.
    pub skipped: usize,
}

/// Parse ICS content into task records.
///
/// Convenience wrapper over [`import`] for callers that do not care how many
/// blocks were skipped.
pub fn parse_tasks(content: &str) -> Vec<TaskRecord> {
    import(content).tasks
}

/// Parse ICS content, also reporting how many event blocks were skipped.
pub fn import(content: &str) -> ImportOutcome {
    let mut outcome = ImportOutcome::default();

    for block in event_blocks(content) {
        match task_from_block(&block) {
            Some(task) => outcome.tasks.push(task),
            None => outcome.skipped += 1,
        }
    }

    outcome
}

/// Split content into logical lines, rejoining folded lines (RFC 5545:
/// continuation lines start with a single space or tab; only that first
/// character is removed).
fn unfold(content: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for line in content.lines() {
        if line.starts_with(' ') || line.starts_with('\t') {
            if let Some(prev) = lines.last_mut() {
                prev.push_str(&line[1..]);
                continue;
            }
        }
        lines.push(line.to_string());
    }

    lines
}

/// Collect VEVENT blocks as groups of logical lines, non-overlapping, in
/// source order. Nested components (VALARM etc.) are opaque to this engine
/// and their lines are dropped.
fn event_blocks(content: &str) -> Vec<Vec<String>> {
    let mut blocks = Vec::new();
    let mut block: Vec<String> = Vec::new();
    let mut in_event = false;
    let mut depth = 0usize;

    for line in unfold(content) {
        if !in_event {
            if line == "BEGIN:VEVENT" {
                in_event = true;
                depth = 0;
                block.clear();
            }
            continue;
        }

        if depth == 0 && line == "END:VEVENT" {
            blocks.push(std::mem::take(&mut block));
            in_event = false;
        } else if line.starts_with("BEGIN:") {
            depth += 1;
        } else if line.starts_with("END:") {
            depth = depth.saturating_sub(1);
        } else if depth == 0 {
            block.push(line);
        }
    }

    // An unterminated trailing block is malformed and dropped.
    blocks
}

/// Raw property values extracted from one VEVENT block.
#[derive(Debug, Default)]
struct EventFields {
    summary: Option<String>,
    dtstart: Option<String>,
    dtend: Option<String>,
    description: Option<String>,
    location: Option<String>,
}

/// Extract the first occurrence of each recognized property.
fn extract_fields(block: &[String]) -> EventFields {
    let mut fields = EventFields::default();

    for line in block {
        let Some((key, value)) = split_property(line) else {
            continue;
        };

        let slot = match key {
            "SUMMARY" => &mut fields.summary,
            "DTSTART" => &mut fields.dtstart,
            "DTEND" => &mut fields.dtend,
            "DESCRIPTION" => &mut fields.description,
            "LOCATION" => &mut fields.location,
            _ => continue,
        };

        if slot.is_none() {
            *slot = Some(value.to_string());
        }
    }

    fields
}

/// Split a logical line into its base key and value. Property parameters
/// between the key and the colon (`DTSTART;VALUE=DATE:...`) are discarded.
fn split_property(line: &str) -> Option<(&str, &str)> {
    let colon = line.find(':')?;
    let key = line[..colon].split(';').next()?;
    Some((key, &line[colon + 1..]))
}

/// Reverse RFC 5545 text escaping: `\n` → newline, `\,` `\;` `\\` → literal.
fn unescape_text(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => result.push('\n'),
            Some(',') => result.push(','),
            Some(';') => result.push(';'),
            Some('\\') => result.push('\\'),
            // Unknown escape: keep both characters
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }

    result
}

/// A DTSTART/DTEND value with its interpretation mode preserved.
///
/// Resolution to a local rendering happens only at record assembly, so the
/// all-day special case still knows it came from a date-only value.
#[derive(Debug, Clone, Copy, PartialEq)]
enum DateValue {
    /// Date-only value (`YYYYMMDD`): an all-day event.
    Date(NaiveDate),
    /// `YYYYMMDDTHHMMSSZ`: an absolute UTC instant.
    Utc(DateTime<Utc>),
    /// `YYYYMMDDTHHMMSS` with no designator: local wall-clock (floating) time.
    Floating(NaiveDateTime),
}

/// Parse an ICS date or date-time value.
///
/// Two shapes are recognized: `YYYYMMDD` and `YYYYMMDDTHHMMSS` with an
/// optional trailing `Z`. Months are 1-based in both the source and chrono.
fn parse_date_value(value: &str) -> Option<DateValue> {
    let value = value.trim();

    if value.len() == 8 && value.bytes().all(|b| b.is_ascii_digit()) {
        let y = value.get(0..4)?.parse().ok()?;
        let m = value.get(4..6)?.parse().ok()?;
        let d = value.get(6..8)?.parse().ok()?;
        return Some(DateValue::Date(NaiveDate::from_ymd_opt(y, m, d)?));
    }

    if value.len() >= 15 && value.as_bytes().get(8) == Some(&b'T') {
        let y: i32 = value.get(0..4)?.parse().ok()?;
        let mo: u32 = value.get(4..6)?.parse().ok()?;
        let d: u32 = value.get(6..8)?.parse().ok()?;
        let h: u32 = value.get(9..11)?.parse().ok()?;
        let mi: u32 = value.get(11..13)?.parse().ok()?;
        let s: u32 = value.get(13..15)?.parse().ok()?;

        if value.ends_with('Z') {
            let dt = Utc.with_ymd_and_hms(y, mo, d, h, mi, s).single()?;
            return Some(DateValue::Utc(dt));
        }

        let date = NaiveDate::from_ymd_opt(y, mo, d)?;
        return Some(DateValue::Floating(date.and_hms_opt(h, mi, s)?));
    }

    None
}

/// Resolve a date value to the local wall-clock time used for duration math
/// and rendering. UTC instants are converted with the environment's local
/// offset; floating times pass through unchanged.
fn resolve_local(value: DateValue) -> Option<NaiveDateTime> {
    match value {
        DateValue::Date(d) => d.and_hms_opt(ALL_DAY_START_HOUR, 0, 0),
        DateValue::Utc(dt) => Some(dt.with_timezone(&Local).naive_local()),
        DateValue::Floating(dt) => Some(dt),
    }
}

/// Whole minutes between two instants, rounded to the nearest minute.
fn round_minutes(delta: Duration) -> i64 {
    let secs = delta.num_seconds();
    if secs >= 0 { (secs + 30) / 60 } else { (secs - 30) / 60 }
}

/// Build one task record from a VEVENT block, or `None` when the block lacks
/// a usable SUMMARY/DTSTART.
fn task_from_block(block: &[String]) -> Option<TaskRecord> {
    let fields = extract_fields(block);

    let Some(title) = fields.summary.filter(|t| !t.trim().is_empty()) else {
        log::debug!("Skipping event block without SUMMARY");
        return None;
    };
    let Some(start_raw) = fields.dtstart else {
        log::debug!("Skipping event '{}' without DTSTART", title);
        return None;
    };
    let Some(start) = parse_date_value(&start_raw) else {
        log::warn!("Skipping event '{}': unparsable DTSTART '{}'", title, start_raw);
        return None;
    };

    let all_day = matches!(start, DateValue::Date(_));

    // All-day events: the source DTEND is typically the *following* day and
    // would yield a spurious ~24h duration, so it is always discarded.
    let end = if all_day {
        None
    } else {
        fields.dtend.as_deref().and_then(parse_date_value)
    };

    let start_local = resolve_local(start)?;

    let (end_local, duration) = match end.and_then(resolve_local) {
        Some(end_local) => {
            let minutes = round_minutes(end_local - start_local);
            if minutes > 0 {
                (end_local, minutes)
            } else {
                // Inverted or zero-length range: the fallback wins over the
                // source end value.
                (
                    start_local + Duration::minutes(DEFAULT_DURATION_MIN),
                    DEFAULT_DURATION_MIN,
                )
            }
        }
        None => (
            start_local + Duration::minutes(DEFAULT_DURATION_MIN),
            DEFAULT_DURATION_MIN,
        ),
    };

    let mut description = fields
        .description
        .map(|d| unescape_text(&d))
        .unwrap_or_default();
    if all_day {
        description = format!("{}{}", ALL_DAY_MARKER, description);
    }

    let location = fields
        .location
        .map(|l| unescape_text(&l))
        .unwrap_or_default();

    Some(TaskRecord {
        priority: Priority::classify(&title),
        title,
        date: start_local.format(TIMESTAMP_FORMAT).to_string(),
        end_date: end_local.format(TIMESTAMP_FORMAT).to_string(),
        duration,
        location,
        description,
        completed: false,
    })
}
