use std::path::PathBuf;

/// 默认处理的根目录（当前工作目录）
pub const DEFAULT_ROOT: &str = ".";

/// 名称完全匹配时直接删除的条目
pub const DEFAULT_DENY_LIST: &[&str] = &["delete1", "delete2", "delete3"];

/// 按顺序从文件名和目录名中移除的子串
pub const DEFAULT_REMOVALS: &[&str] = &["example1", "example2", "example3"];

/// 平台元数据文件的前缀（如 macOS 的 `._foo`），总是删除
pub const HIDDEN_METADATA_PREFIX: &str = "._";

/// 清理配置
///
/// 所有字段在编译期确定，`Default` 读取上面的常量。
#[derive(Debug, Clone, PartialEq)]
pub struct CleanupConfig {
    pub root: PathBuf,
    /// 完全匹配即删除的名称
    pub deny_list: Vec<String>,
    /// 要移除的子串，按顺序应用
    pub removals: Vec<String>,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            deny_list: DEFAULT_DENY_LIST.iter().map(|s| s.to_string()).collect(),
            removals: DEFAULT_REMOVALS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
