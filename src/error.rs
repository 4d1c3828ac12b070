//! # 统一错误处理模块
//!
//! 定义 wordtally 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// wordtally 统一错误类型
#[derive(Error, Debug)]
pub enum WordTallyError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file {path}: {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file {path}: {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 处理流程
    // ─────────────────────────────────────────────────────────────
    #[error("No matching files found with pattern: {pattern}")]
    NoFilesFound { pattern: String },

    #[error("Nothing to process: the selection is empty")]
    NothingToProcess,

    /// 扫描在检查点观察到取消信号
    #[error("operação cancelada.")]
    Cancelled,

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl WordTallyError {
    /// 是否为取消信号（而非真正的 I/O 失败）
    pub fn is_cancelled(&self) -> bool {
        matches!(self, WordTallyError::Cancelled)
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, WordTallyError>;
