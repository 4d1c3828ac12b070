//! # 选择表达式解析
//!
//! 将用户输入的序号/区间表达式（如 `1,3-5`）解析为有序的文件子集。
//!
//! ## 规则
//! - 空输入或纯空白：选择全部文件
//! - 逗号分隔，每项去除首尾空白；空项忽略
//! - 含 `-` 的项视为区间 `a-b`（两端可颠倒），否则视为单个序号
//! - 无法解析的项、越界的序号被丢弃并记录诊断，解析继续
//! - 去重并升序排列；若最终没有有效序号，回退为全部文件
//!
//! ## 依赖关系
//! - 被 `commands/count.rs` 调用
//! - 无外部模块依赖

use std::collections::BTreeSet;
use std::fmt;

/// 解析过程中产生的非致命诊断
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionDiagnostic {
    /// 形如区间但无法解析
    InvalidRange(String),
    /// 无法解析为整数
    InvalidIndex(String),
    /// 超出 `[1, N]` 的序号（区间的越界部分合并为一条，显示为 `a..b`）
    OutOfRange { start: i64, end: i64 },
    /// 没有任何有效序号，回退为全部文件
    FallbackToAll,
}

impl fmt::Display for SelectionDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionDiagnostic::InvalidRange(token) => {
                write!(f, "Invalid range ignored: '{}'", token)
            }
            SelectionDiagnostic::InvalidIndex(token) => {
                write!(f, "Invalid index ignored: '{}'", token)
            }
            SelectionDiagnostic::OutOfRange { start, end } if start == end => {
                write!(f, "Out of range: {}", start)
            }
            SelectionDiagnostic::OutOfRange { start, end } => {
                write!(f, "Out of range: {}..{}", start, end)
            }
            SelectionDiagnostic::FallbackToAll => {
                write!(f, "No valid index provided. Processing all files.")
            }
        }
    }
}

/// 解析后的选择结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// 1-based 序号，升序且无重复
    indices: Vec<usize>,
    diagnostics: Vec<SelectionDiagnostic>,
}

impl Selection {
    /// 解析选择表达式，`count` 为已枚举的文件数
    pub fn parse(expr: &str, count: usize) -> Self {
        let all = || (1..=count).collect::<Vec<_>>();

        if expr.trim().is_empty() {
            return Self {
                indices: all(),
                diagnostics: Vec::new(),
            };
        }

        let upper = count as i64;
        let mut set = BTreeSet::new();
        let mut diagnostics = Vec::new();

        for token in expr.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if token.contains('-') {
                match parse_bounds(token) {
                    Some((a, b)) => {
                        let (a, b) = if a > b { (b, a) } else { (a, b) };
                        if a < 1 {
                            diagnostics.push(SelectionDiagnostic::OutOfRange {
                                start: a,
                                end: b.min(0),
                            });
                        }
                        let lo = a.max(1);
                        let hi = b.min(upper);
                        if lo <= hi {
                            set.extend((lo..=hi).map(|i| i as usize));
                        }
                        if b > upper {
                            diagnostics.push(SelectionDiagnostic::OutOfRange {
                                start: a.max(upper + 1),
                                end: b,
                            });
                        }
                    }
                    None => diagnostics.push(SelectionDiagnostic::InvalidRange(token.to_string())),
                }
            } else {
                match token.parse::<i64>() {
                    Ok(idx) if (1..=upper).contains(&idx) => {
                        set.insert(idx as usize);
                    }
                    Ok(idx) => diagnostics.push(SelectionDiagnostic::OutOfRange {
                        start: idx,
                        end: idx,
                    }),
                    Err(_) => diagnostics.push(SelectionDiagnostic::InvalidIndex(token.to_string())),
                }
            }
        }

        if set.is_empty() {
            diagnostics.push(SelectionDiagnostic::FallbackToAll);
            return Self {
                indices: all(),
                diagnostics,
            };
        }

        Self {
            indices: set.into_iter().collect(),
            diagnostics,
        }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn diagnostics(&self) -> &[SelectionDiagnostic] {
        &self.diagnostics
    }

    /// 将序号映射回文件列表
    pub fn apply<T: Clone>(&self, items: &[T]) -> Vec<T> {
        self.indices
            .iter()
            .filter_map(|&i| items.get(i - 1).cloned())
            .collect()
    }
}

/// 解析 `a-b`，两端各自去除空白
fn parse_bounds(token: &str) -> Option<(i64, i64)> {
    let (a, b) = token.split_once('-')?;
    Some((a.trim().parse().ok()?, b.trim().parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("f{}.txt", i)).collect()
    }

    #[test]
    fn test_index_and_range() {
        let sel = Selection::parse("1,3-5", 6);
        assert_eq!(sel.indices(), &[1, 3, 4, 5]);
        assert!(sel.diagnostics().is_empty());
        assert_eq!(
            sel.apply(&files(6)),
            vec!["f1.txt", "f3.txt", "f4.txt", "f5.txt"]
        );
    }

    #[test]
    fn test_empty_selects_all_in_order() {
        for expr in ["", "   ", "\t"] {
            let sel = Selection::parse(expr, 4);
            assert_eq!(sel.indices(), &[1, 2, 3, 4]);
            assert!(sel.diagnostics().is_empty());
            assert_eq!(sel.apply(&files(4)), files(4));
        }
    }

    #[test]
    fn test_out_of_range_falls_back() {
        let sel = Selection::parse("9", 3);
        assert_eq!(sel.indices(), &[1, 2, 3]);
        assert_eq!(
            sel.diagnostics(),
            &[
                SelectionDiagnostic::OutOfRange { start: 9, end: 9 },
                SelectionDiagnostic::FallbackToAll,
            ]
        );
    }

    #[test]
    fn test_reversed_range_and_duplicates() {
        let sel = Selection::parse("5-3, 4, 3 , 1", 6);
        assert_eq!(sel.indices(), &[1, 3, 4, 5]);
        assert!(sel.diagnostics().is_empty());
    }

    #[test]
    fn test_invalid_tokens_are_reported() {
        let sel = Selection::parse("2,abc,1-x,-3,4", 5);
        assert_eq!(sel.indices(), &[2, 4]);
        assert_eq!(
            sel.diagnostics(),
            &[
                SelectionDiagnostic::InvalidIndex("abc".to_string()),
                SelectionDiagnostic::InvalidRange("1-x".to_string()),
                SelectionDiagnostic::InvalidRange("-3".to_string()),
            ]
        );
    }

    #[test]
    fn test_range_partially_out_of_bounds() {
        let sel = Selection::parse("2-8", 4);
        assert_eq!(sel.indices(), &[2, 3, 4]);
        assert_eq!(
            sel.diagnostics(),
            &[SelectionDiagnostic::OutOfRange { start: 5, end: 8 }]
        );

        let sel = Selection::parse("0-2", 4);
        assert_eq!(sel.indices(), &[1, 2]);
        assert_eq!(
            sel.diagnostics(),
            &[SelectionDiagnostic::OutOfRange { start: 0, end: 0 }]
        );
    }

    #[test]
    fn test_spaces_inside_range() {
        let sel = Selection::parse(" 2 - 3 ", 3);
        assert_eq!(sel.indices(), &[2, 3]);
    }

    #[test]
    fn test_zero_is_out_of_range() {
        let sel = Selection::parse("0,2", 3);
        assert_eq!(sel.indices(), &[2]);
        assert_eq!(
            sel.diagnostics(),
            &[SelectionDiagnostic::OutOfRange { start: 0, end: 0 }]
        );
    }

    #[test]
    fn test_only_commas_falls_back() {
        let sel = Selection::parse(",,", 2);
        assert_eq!(sel.indices(), &[1, 2]);
        assert_eq!(sel.diagnostics(), &[SelectionDiagnostic::FallbackToAll]);
    }

    #[test]
    fn test_diagnostic_display() {
        assert_eq!(
            SelectionDiagnostic::OutOfRange { start: 9, end: 9 }.to_string(),
            "Out of range: 9"
        );
        assert_eq!(
            SelectionDiagnostic::OutOfRange { start: 5, end: 8 }.to_string(),
            "Out of range: 5..8"
        );
        assert_eq!(
            SelectionDiagnostic::OutOfRange { start: -5, end: 0 }.to_string(),
            "Out of range: -5..0"
        );
        assert_eq!(
            SelectionDiagnostic::InvalidRange("1-x".into()).to_string(),
            "Invalid range ignored: '1-x'"
        );
    }
}
