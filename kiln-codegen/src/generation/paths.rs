//! Relative module paths between generated files.

use std::path::{Component, Path, PathBuf};

/// Extensions dropped from module specifiers.
const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "mts", "cts", "js", "jsx", "mjs", "cjs"];

/// Module specifier that imports `to_file` from `from_file`.
///
/// Both paths are taken as-is (see [`PathResolver`] to anchor them first).
/// The result is `/`-separated, has its source extension stripped, and
/// starts with `./` unless it climbs out of `from_file`'s directory.
///
/// ```
/// use kiln_codegen::generation::relative_module_path;
///
/// assert_eq!(relative_module_path("out/user.ts", "out/post.ts"), "./post");
/// assert_eq!(
///     relative_module_path("out/user/user.ts", "out/shared/post.ts"),
///     "../shared/post"
/// );
/// ```
pub fn relative_module_path(from_file: impl AsRef<Path>, to_file: impl AsRef<Path>) -> String {
    let from_dir = normalize(from_file.as_ref().parent().unwrap_or(Path::new("")));
    let to_file = normalize(to_file.as_ref());

    let from: Vec<_> = from_dir.components().collect();
    let to: Vec<_> = to_file.components().collect();
    let common = from.iter().zip(&to).take_while(|(a, b)| a == b).count();

    let mut parts: Vec<String> = Vec::new();
    parts.extend(std::iter::repeat_n("..".to_string(), from.len() - common));
    parts.extend(
        to[common..]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy().into_owned()),
    );

    if let Some(last) = parts.last_mut() {
        *last = strip_source_extension(last).to_string();
    }

    let joined = parts.join("/");
    if joined.starts_with("..") {
        joined
    } else {
        format!("./{joined}")
    }
}

fn strip_source_extension(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && SOURCE_EXTENSIONS.contains(&ext) => stem,
        _ => filename,
    }
}

/// Lexically resolve `.` and `..` components.
///
/// Leading `..` components of a relative path are kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other),
        }
    }
    out
}

/// Computes module paths between locations relative to a common root.
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
}

impl PathResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Join `path` onto the root unless it is absolute, then normalize.
    pub fn anchor(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            normalize(path)
        } else {
            normalize(&self.root.join(path))
        }
    }

    /// Module specifier that imports `to_file` from `from_file`.
    pub fn resolve(&self, from_file: impl AsRef<Path>, to_file: impl AsRef<Path>) -> String {
        relative_module_path(self.anchor(from_file), self.anchor(to_file))
    }
}
