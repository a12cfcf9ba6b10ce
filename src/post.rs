use fmt::Display;
use std::fmt;
use std::fmt::Formatter;

use chrono::NaiveDateTime;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "Untitled";

lazy_static! {
    static ref TITLE_REGEX: Regex = Regex::new(r"(?m)^# (?P<text>[^\r\n]+)").unwrap();
    static ref SUBTITLE_REGEX: Regex = Regex::new(r"(?m)^## (?P<text>[^\r\n]+)").unwrap();
    static ref SECTION_REGEX: Regex = Regex::new(r"(?m)^### (?P<text>[^\r\n]+)").unwrap();
    static ref IMAGE_REGEX: Regex = Regex::new(r"!\[.*?\]\((?P<url>.*?)\)").unwrap();
}

/// One post as it is published in the JSON files.
/// Field order is the key order of the serialized record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Post {
    pub filename: String,
    pub title: String,
    pub subtitle: String,
    pub thumbnail: String,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource {
    Stamp,
    Modified,
    BuildTime,
}

/// A post together with its resolved publication date
#[derive(Debug, Clone, PartialEq)]
pub struct PostItem {
    pub post: Post,
    pub date: NaiveDateTime,
    pub date_source: DateSource,
}

impl Display for Post {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "filename={}, title={}\nsubtitle={}\nthumbnail={}",
               self.filename,
               self.title,
               self.subtitle,
               self.thumbnail,
        )
    }
}

/// Example of post
/// # Hello World
/// ## A subtitle
///
/// ![](img.png)
impl Post {
    pub fn from_string(filename: &str, content: &str) -> Post {
        let title = first_capture(&TITLE_REGEX, content, "text")
            .unwrap_or(DEFAULT_TITLE);

        // No `##` heading: the first `###` one stands in
        let subtitle = first_capture(&SUBTITLE_REGEX, content, "text")
            .or_else(|| first_capture(&SECTION_REGEX, content, "text"))
            .unwrap_or("");

        let thumbnail = first_capture(&IMAGE_REGEX, content, "url")
            .unwrap_or("");

        Post {
            filename: filename.to_string(),
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            thumbnail: thumbnail.to_string(),
            content: content.to_string(),
        }
    }

    /// Subtitle, or the title when the post has no subtitle
    pub fn summary(&self) -> &str {
        if self.subtitle.is_empty() {
            self.title.as_str()
        } else {
            self.subtitle.as_str()
        }
    }
}

fn first_capture<'a>(regex: &Regex, content: &'a str, group: &str) -> Option<&'a str> {
    regex.captures(content)
        .and_then(|cap| cap.name(group))
        .map(|m| m.as_str())
}
