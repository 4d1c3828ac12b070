//! # 数据模型模块
//!
//! 定义扫描结果、扫描错误与汇总报告的数据结构。
//!
//! ## 依赖关系
//! - 被 `batch/`, `report/`, `commands/` 使用
//! - 子模块: outcome, summary

pub mod outcome;
pub mod summary;

pub use outcome::{Outcome, OutcomeSink, ScanError, ScanResult};
pub use summary::Summary;
