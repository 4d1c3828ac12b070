//! # 结果汇总
//!
//! 将到达顺序不确定的结果集合转换为确定性的汇总：
//! 成功项按文件名排序，错误保持首次观察到的顺序，并计算总数。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 在所有工作结束后调用
//! - 被 `report/` 渲染

use super::outcome::{Outcome, ScanError, ScanResult};

/// 最终汇总
///
/// 不变式：`total_lines`/`total_words` 分别等于 `entries` 中各项之和，
/// `file_count == entries.len()`。超大总数的溢出不在处理范围内。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub entries: Vec<ScanResult>,
    pub errors: Vec<ScanError>,
    pub total_lines: u64,
    pub total_words: u64,
    pub file_count: usize,
}

impl Summary {
    pub fn from_outcomes<I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = Outcome>,
    {
        let mut entries = Vec::new();
        let mut errors = Vec::new();

        for outcome in outcomes {
            match outcome {
                Outcome::Scanned(result) => entries.push(result),
                Outcome::Failed(error) => errors.push(error),
            }
        }

        // 区分大小写的字节序比较
        entries.sort_by(|a, b| a.file_name.cmp(&b.file_name));

        let total_lines: u64 = entries.iter().map(|e| e.lines).sum();
        let total_words: u64 = entries.iter().map(|e| e.words).sum();
        let file_count = entries.len();

        Self {
            entries,
            errors,
            total_lines,
            total_words,
            file_count,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn cancelled_count(&self) -> usize {
        self.errors.iter().filter(|e| e.is_cancelled()).count()
    }
}
