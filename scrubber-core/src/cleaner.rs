use anyhow::Result;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

use crate::CleanupResult;
use crate::config::CleanupConfig;
use crate::mutator::{self, EntryKind, FsError};
use crate::policy::{NameAction, NamePolicy};
use crate::walker::{DirListing, TreeWalker};

/// 单个操作的结果，交给进度回调
#[derive(Debug)]
pub enum CleanEvent {
    Deleted {
        kind: EntryKind,
        path: PathBuf,
    },
    DeleteFailed {
        kind: EntryKind,
        path: PathBuf,
        error: FsError,
    },
    Renamed {
        kind: EntryKind,
        from: PathBuf,
        to: PathBuf,
    },
    RenameFailed {
        kind: EntryKind,
        from: PathBuf,
        to: PathBuf,
        error: FsError,
    },
}

impl CleanEvent {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            CleanEvent::DeleteFailed { .. } | CleanEvent::RenameFailed { .. }
        )
    }
}

impl fmt::Display for CleanEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanEvent::Deleted { kind, path } => {
                write!(f, "Deleted {kind}: {}", path.display())
            }
            CleanEvent::DeleteFailed { kind, path, error } => match error {
                FsError::NotFound { .. } => {
                    write!(f, "Error: {kind} not found for deletion: {}", path.display())
                }
                FsError::NotEmpty { .. } => write!(
                    f,
                    "Error: {kind} cannot be deleted (not empty): {}",
                    path.display()
                ),
                _ => write!(f, "Error deleting {kind} {}: {error}", path.display()),
            },
            CleanEvent::Renamed { kind, from, to } => {
                write!(f, "Renamed {kind}: {} -> {}", from.display(), to.display())
            }
            CleanEvent::RenameFailed {
                kind,
                from,
                to,
                error,
            } => match error {
                FsError::NotFound { .. } => {
                    write!(f, "Error: {kind} not found for renaming: {}", from.display())
                }
                FsError::AlreadyExists { .. } => {
                    write!(f, "Error: a {kind} named {} already exists", to.display())
                }
                _ => write!(
                    f,
                    "Error renaming {kind} {} -> {}: {error}",
                    from.display(),
                    to.display()
                ),
            },
        }
    }
}

/// 按名称策略删除或重命名目录树中的条目
pub struct Cleaner {
    config: CleanupConfig,
    policy: NamePolicy,
}

impl Cleaner {
    /// 创建新的清理器
    pub fn new(config: CleanupConfig) -> Self {
        let policy = NamePolicy::from_config(&config);
        Self { config, policy }
    }

    pub fn config(&self) -> &CleanupConfig {
        &self.config
    }

    /// 处理配置的根目录
    pub fn run(&self) -> Result<CleanupResult> {
        self.run_with_progress(|_| {})
    }

    /// 处理配置的根目录（带进度回调）
    ///
    /// 单个条目的失败只记录，不中断；只有枚举目录失败才返回错误。
    pub fn run_with_progress<F>(&self, mut progress_callback: F) -> Result<CleanupResult>
    where
        F: FnMut(CleanEvent),
    {
        let start_time = Instant::now();
        let mut result = CleanupResult::new();

        let walker = TreeWalker::new(&self.config.root);
        walker.walk(|listing| self.process_listing(listing, &mut result, &mut progress_callback))?;

        result.finish(start_time.elapsed());

        info!(
            "处理完成: 重命名文件 {} 个，重命名目录 {} 个，删除 {} 个，失败 {} 个，耗时 {}秒",
            result.renamed_files,
            result.renamed_dirs,
            result.deleted,
            result.failed,
            result.format_elapsed()
        );

        Ok(result)
    }

    /// 先处理文件，再处理子目录
    fn process_listing<F>(&self, listing: &DirListing, result: &mut CleanupResult, callback: &mut F)
    where
        F: FnMut(CleanEvent),
    {
        for name in &listing.files {
            self.process_entry(&listing.path, name, EntryKind::File, result, callback);
        }

        for name in &listing.dirs {
            self.process_entry(&listing.path, name, EntryKind::Directory, result, callback);
        }
    }

    fn process_entry<F>(
        &self,
        parent: &Path,
        name: &str,
        kind: EntryKind,
        result: &mut CleanupResult,
        callback: &mut F,
    ) where
        F: FnMut(CleanEvent),
    {
        let event = match self.policy.decide(name) {
            NameAction::Keep => return,
            NameAction::Delete => {
                let path = parent.join(name);
                match mutator::delete_entry(&path, kind) {
                    Ok(()) => CleanEvent::Deleted { kind, path },
                    Err(error) => CleanEvent::DeleteFailed { kind, path, error },
                }
            }
            NameAction::Rename(new_name) => {
                let from = parent.join(name);
                let to = mutator::ensure_unique_name(parent, &new_name);
                match mutator::rename_entry(&from, &to, kind) {
                    Ok(()) => CleanEvent::Renamed { kind, from, to },
                    Err(error) => CleanEvent::RenameFailed {
                        kind,
                        from,
                        to,
                        error,
                    },
                }
            }
        };

        match &event {
            CleanEvent::Deleted { kind, path } => {
                info!("删除成功 ({kind}): {:?}", path);
                result.record_delete();
            }
            CleanEvent::Renamed { kind, from, to } => {
                info!("重命名成功 ({kind}): {:?} -> {:?}", from, to);
                result.record_rename(*kind);
            }
            CleanEvent::DeleteFailed { error, .. } | CleanEvent::RenameFailed { error, .. } => {
                warn!("操作失败: {}", error);
                result.record_failure();
            }
        }

        callback(event);
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new(CleanupConfig::default())
    }
}
