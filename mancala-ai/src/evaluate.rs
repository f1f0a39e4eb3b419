//! 局面评估函数
//!
//! 评估视角（哪个玩家是极大方）在构造时固定，搜索期间不变。

use rules::{BoardState, Player};
use serde::{Deserialize, Serialize};

/// 终局奖励分值
pub const WIN_BONUS: i32 = 9999;

/// 物质评估中仓内石子相对场上石子的权重
pub const CAPTURE_WEIGHT: i32 = 130;

/// 局面评估能力
pub trait Heuristic {
    /// 评估局面（极大方视角，正值对极大方有利）
    fn evaluate(&self, state: &BoardState) -> i32;
}

/// 得分差评估：极大方仓内石子数减极小方仓内石子数
///
/// 终局时按胜负加减 [`WIN_BONUS`]；平局按负局计。
pub struct CaptureDiff {
    p1_is_maximizer: bool,
}

impl CaptureDiff {
    pub fn new(p1_is_maximizer: bool) -> Self {
        Self { p1_is_maximizer }
    }

    fn maximizer(&self) -> Player {
        if self.p1_is_maximizer {
            Player::One
        } else {
            Player::Two
        }
    }
}

impl Heuristic for CaptureDiff {
    fn evaluate(&self, state: &BoardState) -> i32 {
        let me = self.maximizer();
        let diff = state.captures(me) as i32 - state.captures(me.opponent()) as i32;
        if state.is_end_state() {
            if diff > 0 {
                diff + WIN_BONUS
            } else {
                diff - WIN_BONUS
            }
        } else {
            diff
        }
    }
}

/// 物质评估：仓内得分差按 [`CAPTURE_WEIGHT`] 加权，
/// 再加上双方洞排场上石子数之差
pub struct Material {
    capture_diff: CaptureDiff,
}

impl Material {
    pub fn new(p1_is_maximizer: bool) -> Self {
        Self {
            capture_diff: CaptureDiff::new(p1_is_maximizer),
        }
    }
}

impl Heuristic for Material {
    fn evaluate(&self, state: &BoardState) -> i32 {
        let me = self.capture_diff.maximizer();
        let on_board: i32 = state.holes(me).iter().map(|&v| v as i32).sum::<i32>()
            - state.holes(me.opponent()).iter().map(|&v| v as i32).sum::<i32>();
        CAPTURE_WEIGHT * self.capture_diff.evaluate(state) + on_board
    }
}

/// 评估函数选择器（可序列化，供配置文件使用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeuristicKind {
    /// 得分差评估
    CaptureDiff,
    /// 物质评估
    Material,
}

impl HeuristicKind {
    /// 按指定视角构造评估器
    pub fn build(&self, p1_is_maximizer: bool) -> Box<dyn Heuristic> {
        match self {
            HeuristicKind::CaptureDiff => Box::new(CaptureDiff::new(p1_is_maximizer)),
            HeuristicKind::Material => Box::new(Material::new(p1_is_maximizer)),
        }
    }
}
