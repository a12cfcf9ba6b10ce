use crate::post::PostItem;
use crate::view::json_renderer::render_json;

/// Wraps the JSON document in a call to `callback`, for pages that load it with a `<script>` tag.
pub fn render_jsonp(callback: &str, items: &[PostItem]) -> serde_json::Result<String> {
    let json = render_json(items)?;
    Ok(format!("{}({});\n", callback, json))
}
