//! # 日志初始化
//!
//! 使用 `tracing-subscriber` 输出结构化日志到 stderr。
//! 默认级别 `warn`，`--verbose` 提升为 `debug`；`RUST_LOG` 优先。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用

use tracing::Level;
use tracing_subscriber::EnvFilter;

pub fn init(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let env_filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    // 重复初始化（如测试中）直接忽略
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
