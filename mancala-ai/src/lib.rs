//! 播棋 AI 引擎
//!
//! 包含:
//! - 局面评估函数 (CaptureDiff, Material)
//! - Minimax + Alpha-Beta 剪枝搜索（显式节点栈，非递归）
//! - 引擎配置与入口 (AiConfig, AiEngine)

mod evaluate;
mod search;

pub use evaluate::{CaptureDiff, Heuristic, HeuristicKind, Material, CAPTURE_WEIGHT, WIN_BONUS};
pub use search::{choose_best_ply, AiConfig, AiEngine};
