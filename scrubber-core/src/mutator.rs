use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// 条目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::File => write!(f, "file"),
            EntryKind::Directory => write!(f, "directory"),
        }
    }
}

/// 单个删除或重命名操作的失败原因
#[derive(Debug, Error)]
pub enum FsError {
    #[error("not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("already exists: {}", .path.display())]
    AlreadyExists { path: PathBuf },

    #[error("directory not empty: {}", .path.display())]
    NotEmpty { path: PathBuf },

    #[error("permission denied: {}", .path.display())]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// 按 `io::ErrorKind` 归类
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path },
            io::ErrorKind::AlreadyExists => FsError::AlreadyExists { path },
            io::ErrorKind::DirectoryNotEmpty => FsError::NotEmpty { path },
            io::ErrorKind::PermissionDenied => FsError::PermissionDenied { path, source: err },
            _ => FsError::Io { path, source: err },
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            FsError::NotFound { path }
            | FsError::AlreadyExists { path }
            | FsError::NotEmpty { path }
            | FsError::PermissionDenied { path, .. }
            | FsError::Io { path, .. } => path,
        }
    }
}

/// 删除文件或空目录
///
/// 目录只在为空时删除，非空目录返回 [`FsError::NotEmpty`]。
pub fn delete_entry(path: &Path, kind: EntryKind) -> Result<(), FsError> {
    debug!("删除{}: {:?}", kind_label(kind), path);

    let result = match kind {
        EntryKind::File => fs::remove_file(path),
        EntryKind::Directory => fs::remove_dir(path),
    };

    result.map_err(|e| FsError::from_io(e, path))
}

/// 重命名文件或目录
///
/// 目标名称应先经过 [`ensure_unique_name`]。
pub fn rename_entry(from: &Path, to: &Path, kind: EntryKind) -> Result<(), FsError> {
    debug!("重命名{}: {:?} -> {:?}", kind_label(kind), from, to);

    if !entry_exists(from) {
        return Err(FsError::NotFound {
            path: from.to_path_buf(),
        });
    }

    // rename(2) 会静默覆盖已有文件，这里先拦下
    if entry_exists(to) {
        return Err(FsError::AlreadyExists {
            path: to.to_path_buf(),
        });
    }

    fs::rename(from, to).map_err(|e| FsError::from_io(e, from))
}

/// 生成不冲突的目标路径
///
/// 目标已存在时在扩展名前追加 `_1`、`_2`……直到找到空闲名称。
/// 目标本来就空闲时原样返回。
pub fn ensure_unique_name(parent: &Path, name: &str) -> PathBuf {
    let mut candidate = parent.join(name);
    if !entry_exists(&candidate) {
        return candidate;
    }

    let (stem, ext) = split_extension(name);
    let mut counter: u64 = 1;
    loop {
        candidate = parent.join(format!("{stem}_{counter}{ext}"));
        if !entry_exists(&candidate) {
            debug!("名称 {} 已被占用，改用 {:?}", name, candidate);
            return candidate;
        }
        counter += 1;
    }
}

/// 拆分主名和扩展名
///
/// 扩展名从最后一个点开始（包含点）；开头的点不算扩展名，
/// 所以 `.bashrc` 没有扩展名，`archive.tar.gz` 的扩展名是 `.gz`。
pub fn split_extension(name: &str) -> (&str, &str) {
    let leading_dots = name.len() - name.trim_start_matches('.').len();
    match name[leading_dots..].rfind('.') {
        Some(idx) => name.split_at(leading_dots + idx),
        None => (name, ""),
    }
}

/// 路径上是否已有条目（不跟随符号链接，悬空链接也算存在）
fn entry_exists(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

fn kind_label(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::File => "文件",
        EntryKind::Directory => "目录",
    }
}
