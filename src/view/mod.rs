pub mod json_renderer;
pub mod jsonp_renderer;
pub mod rss_renderer;
