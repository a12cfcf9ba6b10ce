use crate::post::PostItem;

/// Number of posts the page loads first
pub const RECENT_POST_COUNT: usize = 2;

/// Newest first. Equal dates fall back to the file name, also descending.
pub fn sort_posts(posts: &mut [PostItem]) {
    posts.sort_by(|a, b| {
        b.date.cmp(&a.date)
            .then_with(|| b.post.filename.cmp(&a.post.filename))
    });
}

pub struct Partition<'a, T> {
    pub recent: &'a [T],
    pub older: &'a [T],
}

impl<'a, T> Partition<'a, T> {
    /// First `recent_count` items go to `recent`, the rest to `older`.
    pub fn split(items: &'a [T], recent_count: usize) -> Self {
        let split = recent_count.min(items.len());
        let (recent, older) = items.split_at(split);
        Partition { recent, older }
    }

    pub fn len(&self) -> usize {
        self.recent.len() + self.older.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
