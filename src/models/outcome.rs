//! # 单文件处理结果
//!
//! 每个文件的扫描产生且仅产生一个 `Outcome`：成功的 `ScanResult`
//! 或失败的 `ScanError`。工作线程通过 `OutcomeSink` 并发写入。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 写入
//! - 被 `models/summary.rs` 汇总
//! - 使用 `serde` 序列化 CSV 行

use crate::error::WordTallyError;
use crate::scanner::FileCounts;

use serde::Serialize;
use std::fmt;
use std::sync::Mutex;

/// 成功扫描的文件
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    pub file_name: String,
    pub lines: u64,
    pub words: u64,
}

impl ScanResult {
    pub fn new(file_name: impl Into<String>, counts: FileCounts) -> Self {
        Self {
            file_name: file_name.into(),
            lines: counts.lines,
            words: counts.words,
        }
    }
}

/// 失败类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanErrorKind {
    /// 读取或解码失败
    Io,
    /// 因取消而未完成
    Cancelled,
}

/// 扫描失败的文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanError {
    pub file_name: String,
    pub message: String,
    pub kind: ScanErrorKind,
}

impl ScanError {
    /// 由错误构造，保留原始错误信息
    pub fn from_error(file_name: impl Into<String>, err: &WordTallyError) -> Self {
        let kind = if err.is_cancelled() {
            ScanErrorKind::Cancelled
        } else {
            ScanErrorKind::Io
        };
        Self {
            file_name: file_name.into(),
            message: err.to_string(),
            kind,
        }
    }

    pub fn cancelled(file_name: impl Into<String>) -> Self {
        Self::from_error(file_name, &WordTallyError::Cancelled)
    }

    pub fn is_cancelled(&self) -> bool {
        self.kind == ScanErrorKind::Cancelled
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file_name, self.message)
    }
}

/// 单个文件的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Scanned(ScanResult),
    Failed(ScanError),
}

/// 线程安全的结果收集器
///
/// 写入方为各工作线程；所有工作结束后由汇总阶段一次性取出。
#[derive(Debug, Default)]
pub struct OutcomeSink {
    outcomes: Mutex<Vec<Outcome>>,
}

impl OutcomeSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, outcome: Outcome) {
        // 某个写入方 panic 不应让其余结果丢失
        let mut guard = self.outcomes.lock().unwrap_or_else(|e| e.into_inner());
        guard.push(outcome);
    }

    pub fn len(&self) -> usize {
        self.outcomes.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// 按首次写入顺序取出全部结果
    pub fn into_outcomes(self) -> Vec<Outcome> {
        self.outcomes.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_scan_error_from_error() {
        let io = WordTallyError::FileReadError {
            path: "a.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let err = ScanError::from_error("a.txt", &io);
        assert_eq!(err.kind, ScanErrorKind::Io);
        assert_eq!(err.message, "Failed to read file a.txt: denied");

        let cancelled = ScanError::cancelled("b.txt");
        assert!(cancelled.is_cancelled());
        assert_eq!(cancelled.to_string(), "b.txt: operação cancelada.");
    }

    #[test]
    fn test_sink_collects_from_many_threads() {
        let sink = Arc::new(OutcomeSink::new());

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let sink = Arc::clone(&sink);
                thread::spawn(move || {
                    for i in 0..50 {
                        let name = format!("t{}_{}.txt", t, i);
                        sink.push(Outcome::Scanned(ScanResult::new(
                            name,
                            FileCounts { lines: 1, words: 2 },
                        )));
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(sink.len(), 400);
        let sink = Arc::try_unwrap(sink).unwrap();
        assert_eq!(sink.into_outcomes().len(), 400);
    }
}
