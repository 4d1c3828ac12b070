//! # 文件收集器
//!
//! 根据输入目录和模式收集待处理文件列表。
//!
//! ## 功能
//! - 仅扫描目录顶层（不递归），符号链接指向的文件也会收集
//! - glob 模式匹配（逗号分隔的多模式）
//! - 按文件名排序，作为选择表达式的序号基准
//!
//! ## 依赖关系
//! - 被 `commands/count.rs`, `commands/list.rs` 调用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `glob` 匹配文件名

use crate::error::{Result, WordTallyError};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 输入目录
    input: PathBuf,
    /// 匹配模式列表
    patterns: Vec<String>,
}

impl FileCollector {
    /// 创建新的文件收集器，默认匹配 `*.txt`
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            patterns: vec!["*.txt".to_string()],
        }
    }

    /// 设置匹配模式（逗号分隔的多模式）
    pub fn with_pattern(mut self, pattern: &str) -> Self {
        let patterns: Vec<String> = pattern
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if !patterns.is_empty() {
            self.patterns = patterns;
        }
        self
    }

    pub fn patterns(&self) -> String {
        self.patterns.join(",")
    }

    /// 收集所有匹配的文件，按文件名排序
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.input.is_dir() {
            return Err(WordTallyError::DirectoryNotFound {
                path: self.input.display().to_string(),
            });
        }

        let globs = self
            .patterns
            .iter()
            .map(|p| {
                glob::Pattern::new(p).map_err(|e| {
                    WordTallyError::InvalidArgument(format!("Invalid pattern '{}': {}", p, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut files: Vec<PathBuf> = WalkDir::new(&self.input)
            .max_depth(1)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| Self::matches_any(&globs, e.path()))
            .map(|e| e.into_path())
            .collect();

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }

    /// 检查文件名是否匹配任一模式
    fn matches_any(globs: &[glob::Pattern], path: &Path) -> bool {
        match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => globs.iter().any(|g| g.matches(name)),
            None => false,
        }
    }
}
