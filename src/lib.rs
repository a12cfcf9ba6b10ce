pub mod config;
pub mod logger;
pub mod partition;
pub mod post;
pub mod post_date;
pub mod post_list;
pub mod post_processor;
pub mod text_utils;
pub mod view;
mod test_data;
