//! 错误类型定义

use thiserror::Error;

/// 规则层错误
///
/// 只覆盖外部输入（文本、配置、人类走法）的验证失败；
/// 核心规则内部的前置条件违反按编程错误处理（断言），不在此列。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RulesError {
    /// 无效的洞编号
    #[error("Invalid hole number: {hole} (expected 1-{max})")]
    InvalidHole { hole: u8, max: u8 },

    /// 无效的方向
    #[error("Invalid direction: {input} (expected \"cw\" or \"ccw\")")]
    InvalidDirection { input: String },

    /// 无效的局面文本
    #[error("Invalid board notation: {reason}")]
    InvalidNotation { reason: String },

    /// 无效的对局配置
    #[error("Invalid game config: {reason}")]
    InvalidConfig { reason: String },
}

/// 规则层操作结果类型
pub type Result<T> = std::result::Result<T, RulesError>;
