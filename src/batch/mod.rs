//! # 批量处理模块
//!
//! 提供统一的文件批量扫描能力。
//!
//! ## 功能
//! - 收集目录下匹配的文件列表
//! - 解析用户选择表达式
//! - 有界并行处理，支持协作式取消
//! - 结果收集与汇总
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod cancel;
pub mod collector;
pub mod runner;
pub mod selection;

pub use cancel::CancelToken;
pub use collector::FileCollector;
pub use runner::BatchRunner;
pub use selection::Selection;
