use std::collections::HashSet;
use tracing::debug;

use crate::config::{CleanupConfig, HIDDEN_METADATA_PREFIX};

/// 对单个名称的处理决定
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameAction {
    /// 删除条目
    Delete,
    /// 重命名为新名称
    Rename(String),
    /// 保持不变
    Keep,
}

/// 名称策略：决定条目是删除、重命名还是保留
#[derive(Debug, Clone)]
pub struct NamePolicy {
    deny_list: HashSet<String>,
    removals: Vec<String>,
}

impl NamePolicy {
    /// 创建新的名称策略
    pub fn new<D, R>(deny_list: D, removals: R) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            deny_list: deny_list.into_iter().map(Into::into).collect(),
            removals: removals.into_iter().map(Into::into).collect(),
        }
    }

    /// 从清理配置创建
    pub fn from_config(config: &CleanupConfig) -> Self {
        Self::new(config.deny_list.iter().cloned(), config.removals.iter().cloned())
    }

    /// 名称完全匹配删除列表，或以 `._` 开头时返回 true
    pub fn should_delete(&self, name: &str) -> bool {
        self.deny_list.contains(name) || name.starts_with(HIDDEN_METADATA_PREFIX)
    }

    /// 依次移除每个子串的全部出现位置
    ///
    /// 每个子串只处理一遍：前面的移除拼接出的新出现位置，
    /// 只有在后面的子串恰好匹配时才会被移除。
    pub fn rewrite(&self, name: &str) -> String {
        self.removals
            .iter()
            .filter(|pattern| !pattern.is_empty())
            .fold(name.to_string(), |current, pattern| {
                current.replace(pattern.as_str(), "")
            })
    }

    /// 综合判断一个名称的处理方式
    pub fn decide(&self, name: &str) -> NameAction {
        if self.should_delete(name) {
            debug!("名称 {} 命中删除规则", name);
            return NameAction::Delete;
        }

        let new_name = self.rewrite(name);
        if new_name == name {
            NameAction::Keep
        } else {
            debug!("名称 {} 将改为 {}", name, new_name);
            NameAction::Rename(new_name)
        }
    }
}

impl Default for NamePolicy {
    fn default() -> Self {
        Self::from_config(&CleanupConfig::default())
    }
}
