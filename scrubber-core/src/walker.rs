use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 一个目录在枚举时刻的内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirListing {
    pub path: PathBuf,
    pub files: Vec<String>,
    pub dirs: Vec<String>,
    /// 名称不是 UTF-8 的子目录：自身不处理，但仍要遍历其内容
    pub opaque_dirs: Vec<PathBuf>,
}

impl DirListing {
    /// 读取目录的直接子项
    ///
    /// 符号链接不跟随，按文件处理；指向目录的链接被重命名时计入文件计数。
    /// 非 UTF-8 名称本身不处理，若是目录则记入 `opaque_dirs` 继续遍历。
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut files = Vec::new();
        let mut dirs = Vec::new();
        let mut opaque_dirs = Vec::new();

        let entries =
            fs::read_dir(path).with_context(|| format!("读取目录失败: {}", path.display()))?;

        for entry in entries {
            let entry = entry.with_context(|| format!("读取目录项失败: {}", path.display()))?;
            let file_type = entry
                .file_type()
                .with_context(|| format!("获取文件类型失败: {}", entry.path().display()))?;

            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    warn!("跳过非UTF-8名称: {:?} (位于 {})", raw, path.display());
                    if file_type.is_dir() {
                        opaque_dirs.push(entry.path());
                    }
                    continue;
                }
            };

            if file_type.is_dir() {
                dirs.push(name);
            } else {
                files.push(name);
            }
        }

        files.sort();
        dirs.sort();
        opaque_dirs.sort();

        Ok(Self {
            path: path.to_path_buf(),
            files,
            dirs,
            opaque_dirs,
        })
    }
}

/// 目录树后序遍历器
///
/// 先递归处理所有子目录，再把当前目录的列表交给回调，
/// 因此回调修改子项名称时，更深层的内容已经处理完毕。
pub struct TreeWalker {
    root: PathBuf,
}

impl TreeWalker {
    /// 创建新的遍历器
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// 后序遍历，每个目录调用一次 `visit`
    ///
    /// 根目录本身的名称不会被处理，只处理它的后代。
    pub fn walk<F>(&self, mut visit: F) -> Result<()>
    where
        F: FnMut(&DirListing),
    {
        info!("开始遍历路径: {:?}", self.root);

        if !self.root.exists() {
            anyhow::bail!("路径不存在: {:?}", self.root);
        }

        if !self.root.is_dir() {
            anyhow::bail!("路径不是目录: {:?}", self.root);
        }

        Self::walk_dir(&self.root, &mut visit)
    }

    /// 收集全部目录列表（按遍历顺序）
    pub fn collect(&self) -> Result<Vec<DirListing>> {
        let mut listings = Vec::new();
        self.walk(|listing| listings.push(listing.clone()))?;
        Ok(listings)
    }

    fn walk_dir<F>(path: &Path, visit: &mut F) -> Result<()>
    where
        F: FnMut(&DirListing),
    {
        // 先拍下本层列表，再下降到子目录
        let listing = DirListing::read(path)?;

        for dir in &listing.dirs {
            Self::walk_dir(&path.join(dir), visit)?;
        }

        for dir in &listing.opaque_dirs {
            Self::walk_dir(dir, visit)?;
        }

        debug!(
            "访问目录 {:?}: {} 个文件, {} 个子目录",
            listing.path,
            listing.files.len(),
            listing.dirs.len()
        );
        visit(&listing);

        Ok(())
    }
}
