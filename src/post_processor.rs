use std::io::ErrorKind;
use std::path::PathBuf;
use std::{fs, io};

use chrono::{Local, NaiveDateTime};
use spdlog::info;

use crate::config::Config;
use crate::partition::{sort_posts, Partition};
use crate::post::PostItem;
use crate::post_date::resolve_file_date;
use crate::post_list::PostList;
use crate::view::json_renderer::render_json;
use crate::view::jsonp_renderer::render_jsonp;
use crate::view::rss_renderer::RssChannel;

/// One rendered file, not yet on disk
#[derive(Debug)]
pub struct Artifact {
    pub file_name: String,
    pub content: Vec<u8>,
}

#[derive(Debug)]
pub struct BuildSummary {
    pub recent_count: usize,
    pub older_count: usize,
    pub written: Vec<PathBuf>,
}

fn invalid_data<E: std::fmt::Display>(what: &str, e: E) -> io::Error {
    io::Error::new(ErrorKind::InvalidData, format!("Error rendering {}: {}", what, e))
}

/// Loads every post, resolves its date and returns them newest first.
pub fn load_sorted_posts(config: &Config, build_time: NaiveDateTime) -> io::Result<Vec<PostItem>> {
    info!("Reading posts from {}", config.paths.posts_dir.display());
    let post_list = PostList::new(&config.paths.posts_dir, &config.posts.extensions);

    let mut items: Vec<PostItem> = post_list.load_posts()?
        .into_iter()
        .map(|(path, post)| {
            let (date, date_source) = resolve_file_date(&path, &post.filename, build_time);
            PostItem { post, date, date_source }
        })
        .collect();

    sort_posts(&mut items);
    Ok(items)
}

/// Renders every output file in memory. Each renderer only sees its own slice.
pub fn render_artifacts(config: &Config, items: &[PostItem]) -> io::Result<Vec<Artifact>> {
    let outputs = &config.outputs;
    let partition = Partition::split(items, config.posts.recent_count);

    let recent_json = render_json(partition.recent).map_err(|e| invalid_data(&outputs.recent_json, e))?;
    let older_json = render_json(partition.older).map_err(|e| invalid_data(&outputs.older_json, e))?;
    let recent_js = render_jsonp(&outputs.recent_callback, partition.recent)
        .map_err(|e| invalid_data(&outputs.recent_js, e))?;
    let older_js = render_jsonp(&outputs.older_callback, partition.older)
        .map_err(|e| invalid_data(&outputs.older_js, e))?;

    let feed = &config.rss_feed;
    let rss = RssChannel {
        ch_title: &feed.title,
        ch_link: &feed.site_url,
        ch_desc: &feed.description,
        ch_language: &feed.language,
        post_base_url: &feed.post_base_url,
    };
    let rss = rss.render(items).map_err(|e| invalid_data(&outputs.rss, e))?;

    Ok(vec![
        Artifact { file_name: outputs.recent_json.clone(), content: recent_json.into_bytes() },
        Artifact { file_name: outputs.older_json.clone(), content: older_json.into_bytes() },
        Artifact { file_name: outputs.recent_js.clone(), content: recent_js.into_bytes() },
        Artifact { file_name: outputs.older_js.clone(), content: older_js.into_bytes() },
        Artifact { file_name: outputs.rss.clone(), content: rss },
    ])
}

pub fn write_artifacts(config: &Config, artifacts: &[Artifact]) -> io::Result<Vec<PathBuf>> {
    let mut written = vec![];
    for artifact in artifacts {
        let path = config.paths.output_dir.join(&artifact.file_name);
        fs::write(&path, &artifact.content).map_err(|e| {
            io::Error::new(e.kind(), format!("Error writing {}: {}", path.display(), e))
        })?;
        info!("Wrote {} ({} bytes)", path.display(), artifact.content.len());
        written.push(path);
    }
    Ok(written)
}

/// Full run: posts are read and every file rendered before the first write.
pub fn build(config: &Config) -> io::Result<BuildSummary> {
    build_at(config, Local::now().naive_local())
}

pub fn build_at(config: &Config, build_time: NaiveDateTime) -> io::Result<BuildSummary> {
    let items = load_sorted_posts(config, build_time)?;
    let artifacts = render_artifacts(config, &items)?;
    let written = write_artifacts(config, &artifacts)?;

    let partition = Partition::split(&items, config.posts.recent_count);
    Ok(BuildSummary {
        recent_count: partition.recent.len(),
        older_count: partition.older.len(),
        written,
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::TempDir;

    use crate::post::{DateSource, Post};
    use crate::test_data::{HELLO_POST, LONG_POST, NO_HEADINGS_POST};

    use super::*;

    fn setup() -> (TempDir, TempDir, Config) {
        let posts = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let mut config = Config::default();
        config.paths.posts_dir = posts.path().to_path_buf();
        config.paths.output_dir = out.path().to_path_buf();
        (posts, out, config)
    }

    fn build_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    #[test]
    fn test_build() -> io::Result<()> {
        let (posts, out, config) = setup();
        fs::write(posts.path().join("202401151030hello.md"), HELLO_POST)?;
        fs::write(posts.path().join("202312010900workshop.md"), LONG_POST)?;
        fs::write(posts.path().join("202402200800_note.md"), NO_HEADINGS_POST)?;
        fs::write(posts.path().join("202311111111old.md"), "# Old one")?;
        fs::write(posts.path().join("ignored.txt"), "# Not a post")?;

        let summary = build_at(&config, build_time())?;
        assert_eq!(summary.recent_count, 2);
        assert_eq!(summary.older_count, 2);
        assert_eq!(summary.written.len(), 5);

        let recent: Vec<Post> = serde_json::from_str(&fs::read_to_string(out.path().join("recentPosts.json"))?)?;
        let older: Vec<Post> = serde_json::from_str(&fs::read_to_string(out.path().join("olderPosts.json"))?)?;
        let recent: Vec<&str> = recent.iter().map(|p| p.filename.as_str()).collect();
        let older: Vec<&str> = older.iter().map(|p| p.filename.as_str()).collect();
        assert_eq!(recent, ["202402200800_note.md", "202401151030hello.md"]);
        assert_eq!(older, ["202312010900workshop.md", "202311111111old.md"]);

        let recent_js = fs::read_to_string(out.path().join("recentPosts.js"))?;
        assert!(recent_js.starts_with("handleRecentPosts(["));
        let older_js = fs::read_to_string(out.path().join("olderPosts.js"))?;
        assert!(older_js.starts_with("handleOlderPosts(["));

        let rss = fs::read_to_string(out.path().join("rss.xml"))?;
        assert_eq!(rss.matches("<item>").count(), 4);
        assert!(rss.contains("<link>https://vivian-green.github.io/#note</link>"));
        assert!(rss.find("#note").unwrap() < rss.find("#hello").unwrap());
        Ok(())
    }

    #[test]
    fn test_fallback_dates_sorting() -> io::Result<()> {
        let (posts, _out, config) = setup();
        fs::write(posts.path().join("202401151030hello.md"), HELLO_POST)?;
        fs::write(posts.path().join("legacy.md"), "# Legacy")?;

        let items = load_sorted_posts(&config, build_time())?;
        assert_eq!(items.len(), 2);

        // legacy.md is dated by its mtime, which is "now" and newer than the stamp
        assert_eq!(items[0].post.filename, "legacy.md");
        assert_eq!(items[0].date_source, DateSource::Modified);
        assert_eq!(items[1].date_source, DateSource::Stamp);
        Ok(())
    }

    #[test]
    fn test_empty_posts_dir() -> io::Result<()> {
        let (_posts, out, config) = setup();
        let summary = build_at(&config, build_time())?;
        assert_eq!(summary.recent_count, 0);
        assert_eq!(summary.older_count, 0);
        assert_eq!(fs::read_to_string(out.path().join("recentPosts.json"))?, "[]");
        assert_eq!(fs::read_to_string(out.path().join("olderPosts.js"))?, "handleOlderPosts([]);\n");
        Ok(())
    }

    #[test]
    fn test_missing_posts_dir_writes_nothing() {
        let (posts, out, mut config) = setup();
        config.paths.posts_dir = posts.path().join("missing");

        assert!(build_at(&config, build_time()).is_err());
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_unreadable_post_writes_nothing() {
        let (posts, out, config) = setup();
        fs::write(posts.path().join("202401151030hello.md"), HELLO_POST).unwrap();
        fs::write(posts.path().join("202401161030bad.md"), [0xffu8, 0xfe, 0xfd]).unwrap();

        let err = build_at(&config, build_time()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
        assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_rerun_overwrites() -> io::Result<()> {
        let (posts, out, config) = setup();
        fs::write(posts.path().join("202401151030hello.md"), HELLO_POST)?;
        build_at(&config, build_time())?;

        fs::write(posts.path().join("202401151030hello.md"), "# Changed")?;
        build_at(&config, build_time())?;

        let recent: Vec<Post> = serde_json::from_str(&fs::read_to_string(out.path().join("recentPosts.json"))?)?;
        assert_eq!(recent[0].title, "Changed");
        Ok(())
    }
}
