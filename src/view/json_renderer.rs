use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

use crate::post::{Post, PostItem};

const INDENT: &[u8] = b"    ";

/// Renders posts as a pretty printed JSON array (4 space indent, non-ASCII kept as is)
pub fn render_json(items: &[PostItem]) -> serde_json::Result<String> {
    let posts: Vec<&Post> = items.iter().map(|item| &item.post).collect();

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    posts.serialize(&mut ser)?;

    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
