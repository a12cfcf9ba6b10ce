use std::fs;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local, NaiveDateTime};
use spdlog::trace;

use crate::post::DateSource;
use crate::text_utils::parse_stamp;

/// Resolves the publication date of a post.
///
/// The order is fixed: a valid `YYYYMMDDHHMM` stamp at the start of the file name,
/// then the file modification time, then `build_time`.
pub fn resolve_date(file_name: &str, modified: Option<SystemTime>, build_time: NaiveDateTime) -> (NaiveDateTime, DateSource) {
    if let Some(date) = parse_stamp(file_name) {
        return (date, DateSource::Stamp);
    }

    if let Some(modified) = modified {
        let local: DateTime<Local> = modified.into();
        return (local.naive_local(), DateSource::Modified);
    }

    (build_time, DateSource::BuildTime)
}

/// Same as [`resolve_date`], reading the modification time from `path` if the file exists.
pub fn resolve_file_date(path: &Path, file_name: &str, build_time: NaiveDateTime) -> (NaiveDateTime, DateSource) {
    let modified = match parse_stamp(file_name) {
        Some(_) => None,
        None => fs::metadata(path).and_then(|m| m.modified()).ok(),
    };

    let (date, source) = resolve_date(file_name, modified, build_time);
    trace!("Date of {} is {} ({:?})", file_name, date, source);
    (date, source)
}
