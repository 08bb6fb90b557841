use std::time::Duration;

pub mod cleaner;
pub mod config;
pub mod mutator;
pub mod policy;
pub mod walker;

pub use cleaner::{CleanEvent, Cleaner};
pub use config::CleanupConfig;
pub use mutator::{EntryKind, FsError};
pub use policy::{NameAction, NamePolicy};
pub use walker::{DirListing, TreeWalker};

/// 运行阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunPhase {
    #[default]
    Running,
    Done,
}

/// 一次运行的统计结果
#[derive(Debug, Clone, PartialEq)]
pub struct CleanupResult {
    pub renamed_files: usize,
    pub renamed_dirs: usize,
    /// 删除的文件和目录共用一个计数
    pub deleted: usize,
    pub failed: usize,
    pub elapsed: Duration,
    pub phase: RunPhase,
}

impl Default for CleanupResult {
    fn default() -> Self {
        Self::new()
    }
}

impl CleanupResult {
    pub fn new() -> Self {
        Self {
            renamed_files: 0,
            renamed_dirs: 0,
            deleted: 0,
            failed: 0,
            elapsed: Duration::ZERO,
            phase: RunPhase::Running,
        }
    }

    pub fn record_rename(&mut self, kind: EntryKind) {
        match kind {
            EntryKind::File => self.renamed_files += 1,
            EntryKind::Directory => self.renamed_dirs += 1,
        }
    }

    pub fn record_delete(&mut self) {
        self.deleted += 1;
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    /// 记录耗时并进入 Done 阶段
    pub fn finish(&mut self, elapsed: Duration) {
        self.elapsed = elapsed;
        self.phase = RunPhase::Done;
    }

    pub fn format_elapsed(&self) -> String {
        format_seconds(self.elapsed)
    }

    /// 最终输出的四行汇总
    pub fn summary_lines(&self) -> [String; 4] {
        [
            format!("Files renamed: {}", self.renamed_files),
            format!("Directories renamed: {}", self.renamed_dirs),
            format!("Files and directories deleted: {}", self.deleted),
            format!("Elapsed time: {} seconds", self.format_elapsed()),
        ]
    }
}

/// 格式化耗时为秒，保留两位小数
pub fn format_seconds(duration: Duration) -> String {
    format!("{:.2}", duration.as_secs_f64())
}
