//! Path Operations Module
//!
//! This module handles path operations for directories and files.

use std::path::PathBuf;

/// Join Paths
///
/// Takes a slice of strings and joins them into a single path string,
/// using PathBuf to handle platform-specific separators.
pub fn join(paths: &[&str]) -> String {
    let mut path: PathBuf = PathBuf::new();
    for p in paths {
        path.push(p);
    }
    path.into_os_string().into_string().unwrap()
}

pub mod dir {
    //! Directory Operations Submodule

    use std::fs;
    use std::path::Path;

    use super::{PhotovaultDir, PhotovaultPath};
    use crate::module::define;

    /// Creates a directory from a path list and returns the joined path,
    /// or `None` if the creation fails.
    pub fn create_dir_from_path_list(paths: &[&str]) -> Option<String> {
        let path = super::join(paths);
        match fs::create_dir_all(Path::new(&path)) {
            Ok(_) => Some(path),
            Err(_) => None,
        }
    }

    /// Creates a subdirectory in the first directory if it exists,
    /// otherwise in the second.
    pub fn create_subdir_in_either_dir(dir1: &str, dir2: &str, name: &str) -> Option<String> {
        let exist: bool = Path::new(dir1).is_dir();
        let parent: &str = match exist {
            true => dir1,
            false => dir2,
        };
        create_dir_from_path_list(&[parent, name])
    }

    /// Creates the application data directory, preferring the persistent
    /// parent and falling back to the ephemeral one.
    pub fn create_data_dir() -> String {
        let res = create_subdir_in_either_dir(
            define::path::PERSISTENT_DIR,
            define::path::EPHEMERAL_DIR,
            define::system::NAME,
        );
        match res {
            Some(path) => path,
            None => panic!("Can't Create Data Dir."),
        }
    }

    /// Creates the application directory tree and returns the resolved
    /// paths: the data directory plus its `log` and `jobs` subdirectories.
    pub fn create_app_sub_dir() -> PhotovaultPath {
        let data_dir = create_data_dir();
        let log_dir = create_dir_from_path_list(&[&data_dir, define::path::LOG_DIR]).unwrap();
        let job_dir = create_dir_from_path_list(&[&data_dir, define::path::JOB_DIR]).unwrap();
        PhotovaultPath {
            dir: PhotovaultDir {
                data: data_dir,
                log: log_dir,
                job: job_dir,
            },
        }
    }
}

/// Paths of Resources
#[derive(Debug, Clone)]
pub struct PhotovaultPath {
    /// Directories Paths
    pub dir: PhotovaultDir,
}

/// Paths of Directories
#[derive(Debug, Clone)]
pub struct PhotovaultDir {
    /// Data Directory Path
    pub data: String,
    /// Log Directory Path
    pub log: String,
    /// Job Spool Directory Path
    pub job: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_create_dir_from_path_list() {
        dir::create_dir_from_path_list(&[
            "/tmp",
            "photovaulttest",
            "test_create_dir_from_path_list",
        ]);

        assert!(Path::new("/tmp/photovaulttest/test_create_dir_from_path_list").is_dir());
    }

    #[test]
    fn test_create_subdir_in_either_dir() {
        // The first parent doesn't exist, so the second is used.
        let res = dir::create_subdir_in_either_dir(
            "/tmp/photovaulttest_missing",
            "/tmp",
            "test_create_subdir_in_either_dir",
        );

        assert_eq!(
            res,
            Some("/tmp/test_create_subdir_in_either_dir".to_string())
        );
        assert!(Path::new("/tmp/test_create_subdir_in_either_dir").is_dir());
    }

    #[test]
    fn test_create_data_dir() {
        let res = dir::create_data_dir();

        // Lands under either parent depending on the host.
        assert!(Path::new(&res).is_dir());
        assert!(res.ends_with("photovault"));
    }

    #[test]
    fn test_create_app_sub_dir() {
        let res = dir::create_app_sub_dir();

        assert!(Path::new(&res.dir.log).is_dir());
        assert!(Path::new(&res.dir.job).is_dir());
        assert!(res.dir.log.ends_with("log"));
        assert!(res.dir.job.ends_with("jobs"));
    }

    #[test]
    fn test_path_join() {
        assert_eq!(join(&["/test/", "test"]), "/test/test");
        assert_eq!(join(&["test", "test", "test"]), "test/test/test");
        assert_eq!(
            join(&["./test/", "test/", "test.txt"]),
            "./test/test/test.txt"
        );
    }
}
