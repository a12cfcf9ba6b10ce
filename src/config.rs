use std::fs::File;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

use crate::partition::RECENT_POST_COUNT;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Paths {
    pub posts_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            posts_dir: PathBuf::from("./posts"),
            output_dir: PathBuf::from("."),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Posts {
    /// Extensions without the leading dot
    pub extensions: Vec<String>,
    pub recent_count: usize,
}

impl Default for Posts {
    fn default() -> Self {
        Posts {
            extensions: vec!["md".to_string()],
            recent_count: RECENT_POST_COUNT,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Outputs {
    pub recent_json: String,
    pub older_json: String,
    pub recent_js: String,
    pub older_js: String,
    pub rss: String,
    pub recent_callback: String,
    pub older_callback: String,
}

impl Default for Outputs {
    fn default() -> Self {
        Outputs {
            recent_json: "recentPosts.json".to_string(),
            older_json: "olderPosts.json".to_string(),
            recent_js: "recentPosts.js".to_string(),
            older_js: "olderPosts.js".to_string(),
            rss: "rss.xml".to_string(),
            recent_callback: "handleRecentPosts".to_string(),
            older_callback: "handleOlderPosts".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RssFeed {
    pub title: String,
    pub site_url: String,
    pub post_base_url: String,
    pub description: String,
    pub language: String,
}

impl Default for RssFeed {
    fn default() -> Self {
        RssFeed {
            title: "Vivian Green".to_string(),
            site_url: "https://vivian-green.github.io".to_string(),
            post_base_url: "https://vivian-green.github.io/#".to_string(),
            description: "Posts from Vivian Green".to_string(),
            language: "en-us".to_string(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Copy, Clone, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub paths: Paths,
    pub posts: Posts,
    pub outputs: Outputs,
    pub rss_feed: RssFeed,
    pub log: Option<Log>,
}

pub const SAMPLE_CONFIG: &str = r#"# For the file locations, If you want it to be relative to the executable directory
# use ${exe_dir}/location
[paths]
posts_dir = "./posts"
output_dir = "."

# The first `recent_count` posts go to the recent files, the rest to the older ones
[posts]
extensions = ["md"]
recent_count = 2

[outputs]
recent_json = "recentPosts.json"
older_json = "olderPosts.json"
recent_js = "recentPosts.js"
older_js = "olderPosts.js"
rss = "rss.xml"
recent_callback = "handleRecentPosts"
older_callback = "handleOlderPosts"

# Post links are post_base_url followed by the file name without date and extension
[rss_feed]
title = "Vivian Green"
site_url = "https://vivian-green.github.io"
post_base_url = "https://vivian-green.github.io/#"
description = "Posts from Vivian Green"
language = "en-us"

# Uncomment to log to a daily rotating file
# [log]
# level = "Info"
# log_to_console = true
# location = "${exe_dir}/log/postdata.log"
"#;

fn parse_path(path: PathBuf) -> io::Result<PathBuf> {
    if !path.starts_with("${exe_dir}") {
        return Ok(path);
    }

    let cur_exe = env::current_exe()?;
    let exe_dir = cur_exe.parent().ok_or_else(|| {
        io::Error::new(ErrorKind::NotFound, "Could not find the executable directory")
    })?;
    let rest = path.strip_prefix("${exe_dir}").map_err(|e| {
        io::Error::new(ErrorKind::InvalidInput, format!("Invalid path {}: {}", path.display(), e))
    })?;
    Ok(exe_dir.join(rest))
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    cfg.paths = Paths {
        posts_dir: parse_path(cfg.paths.posts_dir)?,
        output_dir: parse_path(cfg.paths.output_dir)?,
    };

    if let Some(mut log) = cfg.log.take() {
        log.location = log.location.map(parse_path).transpose()?;
        cfg.log = Some(log);
    }

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}

pub fn write_sample_config(file_path: &Path) -> io::Result<()> {
    let mut file = File::create(file_path)?;
    file.write_all(SAMPLE_CONFIG.as_bytes())?;
    Ok(())
}
