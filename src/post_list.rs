use std::{fs, io};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use spdlog::debug;

use crate::post::Post;

pub struct PostList {
    pub root_dir: PathBuf,
    pub extensions: Vec<String>,
}

impl PostList {
    pub fn new(root_dir: &Path, extensions: &[String]) -> Self {
        PostList {
            root_dir: root_dir.to_path_buf(),
            extensions: extensions.to_vec(),
        }
    }

    /// Files directly inside `root_dir` with one of the recognized extensions
    pub fn retrieve_files(&self) -> io::Result<Vec<(PathBuf, String)>> {
        let mut posts = vec![];
        let entries = fs::read_dir(self.root_dir.as_path()).map_err(|e| {
            io::Error::new(e.kind(), format!("Error reading posts directory {}: {}", self.root_dir.display(), e))
        })?;

        for entry in entries {
            let entry = entry?;
            let path = entry.path();
            // Follows symlinks
            if !path.is_file() || !self.has_extension(&path) {
                continue;
            }

            let file_name = match entry.file_name().into_string() {
                Ok(file_name) => file_name,
                Err(name) => return Err(io::Error::new(
                    ErrorKind::InvalidData,
                    format!("Post file name is not valid UTF-8: {}", name.to_string_lossy()))),
            };
            posts.push((path, file_name));
        }

        Ok(posts)
    }

    /// Reads every post. Any unreadable file aborts the whole list.
    pub fn load_posts(&self) -> io::Result<Vec<(PathBuf, Post)>> {
        let mut posts = vec![];
        for (path, file_name) in self.retrieve_files()? {
            let content = fs::read_to_string(&path).map_err(|e| {
                io::Error::new(e.kind(), format!("Error reading post {}: {}", path.display(), e))
            })?;
            debug!("Loaded post {}", file_name);
            posts.push((path, Post::from_string(&file_name, &content)));
        }
        Ok(posts)
    }

    fn has_extension(&self, path: &Path) -> bool {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => self.extensions.iter().any(|x| x == ext),
            None => false,
        }
    }
}
