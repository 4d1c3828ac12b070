//! # 取消令牌
//!
//! 全局、一次性、协作式的取消信号。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs`、`scanner/` 在检查点轮询
//! - 由 `commands/count.rs` 中的 Ctrl+C 处理器触发

use crate::error::{Result, WordTallyError};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// 可克隆的取消令牌，所有克隆共享同一个标志
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// 触发取消；仅第一次调用返回 `true`
    pub fn cancel(&self) -> bool {
        !self.flag.swap(true, Ordering::SeqCst)
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// 检查点：已取消时返回 `WordTallyError::Cancelled`
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(WordTallyError::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_is_single_shot_and_shared() {
        let token = CancelToken::new();
        let clone = token.clone();

        assert!(!clone.is_cancelled());
        assert!(clone.check().is_ok());

        assert!(token.cancel());
        assert!(!token.cancel());

        assert!(clone.is_cancelled());
        assert!(clone.check().unwrap_err().is_cancelled());
    }
}
