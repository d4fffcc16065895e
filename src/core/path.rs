//! String-level path algebra.
//!
//! Every operation is a pure transformation over a configurable segment
//! separator. Nothing here looks at the filesystem, so `a/b` and `a/b/` are
//! only as different as their strings are.
//!
//! ```ignore
//! path::make([Fragment::from(["some", "dir"]), "file".into(), "xml".into()]);
//! // => "some/dir/file.xml"
//! path::join(["/test/one/two", "three/"]);
//! // => "/test/one/two/three/"
//! ```

use serde::Serialize;

use crate::defaults::PeachConfig;

pub const DEFAULT_SEPARATOR: char = '/';

/// Returned by [`directory`] when the path has no directory part.
pub const NO_DIRECTORY: &str = ".";

/// A path segment, or an arbitrarily nested list of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Segment(String),
    Nested(Vec<Fragment>),
}

impl Fragment {
    fn flatten_into(self, out: &mut Vec<String>) {
        match self {
            Fragment::Segment(segment) => out.push(segment),
            Fragment::Nested(children) => {
                for child in children {
                    child.flatten_into(out);
                }
            }
        }
    }
}

impl From<&str> for Fragment {
    fn from(value: &str) -> Self {
        Fragment::Segment(value.to_string())
    }
}

impl From<String> for Fragment {
    fn from(value: String) -> Self {
        Fragment::Segment(value)
    }
}

impl From<&String> for Fragment {
    fn from(value: &String) -> Self {
        Fragment::Segment(value.clone())
    }
}

impl<T: Into<Fragment>> From<Vec<T>> for Fragment {
    fn from(values: Vec<T>) -> Self {
        Fragment::Nested(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Fragment>, const N: usize> From<[T; N]> for Fragment {
    fn from(values: [T; N]) -> Self {
        Fragment::Nested(values.into_iter().map(Into::into).collect())
    }
}

/// Flatten nested fragments into one ordered list of segments.
pub fn flatten<I, F>(fragments: I) -> Vec<String>
where
    I: IntoIterator<Item = F>,
    F: Into<Fragment>,
{
    let mut out = Vec::new();
    for fragment in fragments {
        fragment.into().flatten_into(&mut out);
    }
    out
}

/// Result of a positional diff between two paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathDiff {
    /// Components equal at the same index in both paths.
    pub common: String,
    pub only_left: String,
    pub only_right: String,
}

impl PathDiff {
    pub fn into_tuple(self) -> (String, String, String) {
        (self.common, self.only_left, self.only_right)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathUtil {
    separator: char,
}

impl Default for PathUtil {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

impl PathUtil {
    pub fn new(separator: char) -> Self {
        Self { separator }
    }

    pub fn from_config(config: &PeachConfig) -> Self {
        Self::new(config.separator)
    }

    pub fn separator(&self) -> char {
        self.separator
    }

    /// Substring after the last `.` of the final segment, or `""`.
    pub fn extension(&self, path: &str) -> String {
        split_extension(&self.base_name(path))
            .1
            .unwrap_or_default()
    }

    /// Swap the extension of `path` for `new_ext` (leading dots ignored).
    ///
    /// An empty `new_ext` removes the extension.
    pub fn replace_extension(&self, path: &str, new_ext: &str) -> String {
        let stem = self.without_extension(path);
        let new_ext = new_ext.trim_start_matches('.');
        if new_ext.is_empty() {
            return stem;
        }
        format!("{}.{}", stem, new_ext)
    }

    /// Everything before the final segment.
    ///
    /// Returns [`NO_DIRECTORY`] for a bare file name, the separator itself for
    /// a root-level entry, and `""` for an empty path.
    pub fn directory(&self, path: &str) -> String {
        if path.is_empty() {
            return String::new();
        }

        let sep = self.separator;
        let trimmed = path.trim_end_matches(sep);
        if trimmed.is_empty() {
            return sep.to_string();
        }

        match trimmed.rfind(sep) {
            None => NO_DIRECTORY.to_string(),
            Some(idx) => {
                let parent = trimmed[..idx].trim_end_matches(sep);
                if parent.is_empty() {
                    sep.to_string()
                } else {
                    parent.to_string()
                }
            }
        }
    }

    /// Final segment including its extension.
    pub fn base_name(&self, path: &str) -> String {
        let sep = self.separator;
        let trimmed = path.trim_end_matches(sep);
        match trimmed.rfind(sep) {
            Some(idx) => trimmed[idx + sep.len_utf8()..].to_string(),
            None => trimmed.to_string(),
        }
    }

    /// Final segment without its extension.
    pub fn file_name(&self, path: &str) -> String {
        split_extension(&self.base_name(path)).0
    }

    pub fn without_extension(&self, path: &str) -> String {
        let dir = self.directory(path);
        let file = self.file_name(path);
        if dir.is_empty() || dir == NO_DIRECTORY {
            return file;
        }
        self.join_segments(vec![dir, file])
    }

    /// Join fragments, folding a trailing `file`, `ext` pair into `file.ext`.
    ///
    /// The last segment is taken as a complete `file.ext` when it contains a
    /// dot; otherwise the segment before it is the file name. A single
    /// segment is returned verbatim.
    pub fn make<I, F>(&self, fragments: I) -> String
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        let mut segments = flatten(fragments);
        if segments.len() < 2 {
            return segments.pop().unwrap_or_default();
        }

        if let Some(last) = segments.pop() {
            let file_and_ext = if last.contains('.') {
                last
            } else {
                match segments.pop() {
                    Some(file) => format!("{}.{}", file, last),
                    None => last,
                }
            };
            segments.push(file_and_ext);
        }

        self.join_segments(segments)
    }

    /// Join fragments with exactly one separator between segments.
    ///
    /// Separators at the inner edges are collapsed; a leading separator on
    /// the first segment and a trailing one on the last survive.
    pub fn join<I, F>(&self, fragments: I) -> String
    where
        I: IntoIterator<Item = F>,
        F: Into<Fragment>,
    {
        self.join_segments(flatten(fragments))
    }

    fn join_segments(&self, mut segments: Vec<String>) -> String {
        if segments.len() < 2 {
            return segments.pop().unwrap_or_default();
        }

        let sep = self.separator;
        let last = segments.len() - 1;
        let trimmed: Vec<&str> = segments
            .iter()
            .enumerate()
            .map(|(idx, segment)| {
                if idx == 0 {
                    segment.trim_end_matches(sep)
                } else if idx == last {
                    segment.trim_start_matches(sep)
                } else {
                    segment.trim_matches(sep)
                }
            })
            .collect();

        trimmed.join(sep.to_string().as_str())
    }

    /// Positional diff of two paths.
    ///
    /// Paths with an extension are reduced to their directory first. A
    /// component only counts as common when it sits at the same index in
    /// both paths.
    pub fn diff(&self, left: &str, right: &str) -> PathDiff {
        let left = self.reduce_to_directory(left);
        let right = self.reduce_to_directory(right);
        let left: Vec<&str> = left.split(self.separator).collect();
        let right: Vec<&str> = right.split(self.separator).collect();

        let common = left
            .iter()
            .enumerate()
            .filter(|(idx, part)| right.get(*idx) == Some(*part))
            .map(|(_, part)| *part)
            .collect::<Vec<_>>();

        PathDiff {
            common: self.implode(&common),
            only_left: self.implode(&positional_difference(&left, &right)),
            only_right: self.implode(&positional_difference(&right, &left)),
        }
    }

    /// Shared leading directory of every path, or `None` once nothing is shared.
    pub fn common_prefix<I, S>(&self, paths: I) -> Option<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut paths = paths.into_iter();
        let first = paths.next()?;
        let mut common = self.directory(first.as_ref());

        for path in paths {
            common = self.diff(&common, &self.directory(path.as_ref())).common;
            if common.is_empty() {
                return None;
            }
        }

        Some(common)
    }

    fn reduce_to_directory(&self, path: &str) -> String {
        if self.extension(path).is_empty() {
            path.to_string()
        } else {
            self.directory(path)
        }
    }

    fn implode(&self, parts: &[&str]) -> String {
        parts.join(self.separator.to_string().as_str())
    }
}

fn split_extension(base: &str) -> (String, Option<String>) {
    match base.rfind('.') {
        Some(idx) => (base[..idx].to_string(), Some(base[idx + 1..].to_string())),
        None => (base.to_string(), None),
    }
}

fn positional_difference<'a>(this: &[&'a str], other: &[&str]) -> Vec<&'a str> {
    this.iter()
        .enumerate()
        .filter(|(idx, part)| other.get(*idx) != Some(*part))
        .map(|(_, part)| *part)
        .collect()
}

// === Default-separator shortcuts ===

pub fn extension(path: &str) -> String {
    PathUtil::default().extension(path)
}

pub fn replace_extension(path: &str, new_ext: &str) -> String {
    PathUtil::default().replace_extension(path, new_ext)
}

pub fn directory(path: &str) -> String {
    PathUtil::default().directory(path)
}

pub fn base_name(path: &str) -> String {
    PathUtil::default().base_name(path)
}

pub fn file_name(path: &str) -> String {
    PathUtil::default().file_name(path)
}

pub fn without_extension(path: &str) -> String {
    PathUtil::default().without_extension(path)
}

pub fn make<I, F>(fragments: I) -> String
where
    I: IntoIterator<Item = F>,
    F: Into<Fragment>,
{
    PathUtil::default().make(fragments)
}

pub fn join<I, F>(fragments: I) -> String
where
    I: IntoIterator<Item = F>,
    F: Into<Fragment>,
{
    PathUtil::default().join(fragments)
}

pub fn diff(left: &str, right: &str) -> PathDiff {
    PathUtil::default().diff(left, right)
}

pub fn common_prefix<I, S>(paths: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    PathUtil::default().common_prefix(paths)
}
