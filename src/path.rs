//! String-based path utilities. Both `\` and `/` are accepted as separators.

use std::fs;
use std::io;
use std::path::Path;

fn is_sep(ch: char) -> bool {
    ch == '\\' || ch == '/'
}

/// Tells whether the file or directory exists.
pub fn exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}

/// Tells whether the path is an existing directory.
pub fn is_directory(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_dir()
}

/// Returns the part after the last separator, or the whole path if there is
/// none. Returns `None` if the path ends with a separator.
///
/// ```
/// use safewin::path;
///
/// assert_eq!(path::get_file_name("C:\\Temp\\foo.txt"), Some("foo.txt"));
/// assert_eq!(path::get_file_name("C:\\Temp\\"), None);
/// ```
pub fn get_file_name(path: &str) -> Option<&str> {
    let name = match path.rfind(is_sep) {
        Some(idx) => &path[idx + 1..],
        None => path,
    };
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Returns the part before the last separator, or `None` if there is no
/// separator.
pub fn get_path(path: &str) -> Option<&str> {
    path.rfind(is_sep).map(|idx| &path[..idx])
}

fn extension_of(path: &str) -> Option<&str> {
    let name = get_file_name(path)?;
    name.rfind('.').map(|idx| &name[idx + 1..])
}

/// Tells whether the file name has one of the given extensions, ignoring
/// ASCII case. Extensions may be given with or without the leading dot.
///
/// ```
/// use safewin::path;
///
/// assert!(path::has_extension("photo.JPG", &[".png", "jpg"]));
/// ```
pub fn has_extension(path: &str, extensions: &[&str]) -> bool {
    match extension_of(path) {
        Some(ext) => extensions
            .iter()
            .any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(ext)),
        None => false,
    }
}

/// Replaces the extension of the file name, or appends one if it has none.
/// The new extension may be given with or without the leading dot.
pub fn replace_extension(path: &str, new_extension: &str) -> String {
    let new_extension = new_extension.trim_start_matches('.');
    let dir_end = path.rfind(is_sep).map_or(0, |idx| idx + 1);
    let stem_end = match path[dir_end..].rfind('.') {
        Some(idx) => dir_end + idx,
        None => path.len(),
    };
    format!("{}.{}", &path[..stem_end], new_extension)
}

/// Removes trailing separators.
pub fn rtrim_backslash(path: &str) -> &str {
    path.trim_end_matches(is_sep)
}

/// Lists the entries of a directory, sorted. With a filter like `"*.txt"`,
/// only files with that extension are returned; `"*"` matches everything.
pub fn dir_list(dir: impl AsRef<Path>, filter: Option<&str>) -> io::Result<Vec<String>> {
    let ext = filter
        .and_then(|f| f.strip_prefix("*."))
        .filter(|e| !e.is_empty() && *e != "*");

    let mut out = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path().to_string_lossy().into_owned();
        if ext.map_or(true, |e| has_extension(&path, &[e])) {
            out.push(path);
        }
    }
    out.sort();
    Ok(out)
}

/// Lists all files below a directory, recursively, sorted. Directories
/// themselves are not listed.
pub fn dir_walk(dir: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let mut out = Vec::new();
    walk_into(dir.as_ref(), &mut out)?;
    out.sort();
    Ok(out)
}

fn walk_into(dir: &Path, out: &mut Vec<String>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            walk_into(&path, out)?;
        } else {
            out.push(path.to_string_lossy().into_owned());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_dir_split() {
        assert_eq!(get_file_name("a/b\\c.txt"), Some("c.txt"));
        assert_eq!(get_file_name("plain"), Some("plain"));
        assert_eq!(get_path("C:\\Temp\\foo.txt"), Some("C:\\Temp"));
        assert_eq!(get_path("foo.txt"), None);
    }

    #[test]
    fn test_extensions() {
        assert!(has_extension("C:\\x\\Song.MP3", &["wav", ".mp3"]));
        assert!(!has_extension("C:\\dir.d\\noext", &["d"]));
        assert_eq!(replace_extension("C:\\a.b\\file.txt", "md"), "C:\\a.b\\file.md");
        assert_eq!(replace_extension("C:\\a.b\\file", ".md"), "C:\\a.b\\file.md");
    }

    #[test]
    fn test_rtrim_backslash() {
        assert_eq!(rtrim_backslash("C:\\Temp\\\\"), "C:\\Temp");
        assert_eq!(rtrim_backslash("dir/"), "dir");
        assert_eq!(rtrim_backslash("file"), "file");
    }

    #[test]
    fn test_dir_list_and_walk() {
        let root = tempfile::tempdir().unwrap();
        let sub = root.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(root.path().join("a.txt"), "a").unwrap();
        fs::write(root.path().join("b.LOG"), "b").unwrap();
        fs::write(sub.join("c.txt"), "c").unwrap();

        assert!(is_directory(&sub));
        assert!(exists(root.path().join("a.txt")));
        assert!(!exists(root.path().join("zzz")));

        let all = dir_list(root.path(), None).unwrap();
        assert_eq!(all.len(), 3);
        let txt = dir_list(root.path(), Some("*.txt")).unwrap();
        assert_eq!(txt.len(), 1);
        assert!(txt[0].ends_with("a.txt"));
        assert_eq!(dir_list(root.path(), Some("*.log")).unwrap().len(), 1);

        let files = dir_walk(root.path()).unwrap();
        assert_eq!(files.len(), 3);
        assert!(files.iter().any(|f| f.ends_with("c.txt")));
        assert!(!files.iter().any(|f| f.ends_with("sub")));
    }
}
