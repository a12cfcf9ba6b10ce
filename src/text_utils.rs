use std::ops::Index;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref STAMP_REGEX: Regex = Regex::new(
        r"^([0-9]{4})([0-9]{2})([0-9]{2})([0-9]{2})([0-9]{2})"
    ).unwrap();

    static ref STAMP_PREFIX_REGEX: Regex = Regex::new(
        r"^[0-9]{12}[_-]?"
    ).unwrap();
}

fn to_int(num_str: &str) -> Option<u32> {
    num_str.parse::<u32>().ok()
}

/// Parses the leading `YYYYMMDDHHMM` stamp of a file name.
///
/// Returns `None` when the name does not start with 12 digits or when the digits
/// do not form a valid calendar date and time (e.g. month 13).
pub fn parse_stamp(file_name: &str) -> Option<NaiveDateTime> {
    let caps = STAMP_REGEX.captures(file_name)?;

    let y = to_int(caps.index(1))? as i32;
    let m = to_int(caps.index(2))?;
    let d = to_int(caps.index(3))?;
    let h = to_int(caps.index(4))?;
    let mn = to_int(caps.index(5))?;

    let date = NaiveDate::from_ymd_opt(y, m, d)?;
    let time = NaiveTime::from_hms_opt(h, mn, 0)?;

    Some(NaiveDateTime::new(date, time))
}

/// File name without its final extension
pub fn slug(file_name: &str) -> String {
    match Path::new(file_name).file_stem().and_then(|s| s.to_str()) {
        Some(stem) => stem.to_string(),
        None => file_name.to_string(),
    }
}

/// Slug with a leading 12 digit stamp (and one `_` or `-` separator) removed.
pub fn strip_date_prefix(slug: &str) -> &str {
    let stripped = match STAMP_PREFIX_REGEX.find(slug) {
        Some(m) => &slug[m.end()..],
        None => slug,
    };

    if stripped.is_empty() {
        slug
    } else {
        stripped
    }
}

pub fn permalink(base_url: &str, file_name: &str) -> String {
    let slug = slug(file_name);
    format!("{}{}", base_url, strip_date_prefix(&slug))
}

pub fn format_rfc2822(date_time: &NaiveDateTime) -> String {
    Utc.from_utc_datetime(date_time).to_rfc2822()
}
