//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// 玩家
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// 一号玩家（先手，上排）
    One,
    /// 二号玩家（后手，下排）
    Two,
}

impl Player {
    /// 获取对方玩家
    pub fn opponent(&self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// 完整的棋盘状态（双方洞排、双方得分仓、走子方）
///
/// 不变量（由测试检查）：两排洞与两个得分仓的石子总数
/// 恒等于 `2 * 洞数 * 每洞初始石子数`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// 一号玩家的洞排（下标 0 对应 1 号洞）
    pub p1_holes: Vec<u8>,
    /// 二号玩家的洞排（下标 0 对应 1 号洞）
    pub p2_holes: Vec<u8>,
    /// 一号玩家得分仓中的石子数
    pub p1_captures: u8,
    /// 二号玩家得分仓中的石子数
    pub p2_captures: u8,
    /// 当前走子方
    pub current_turn: Player,
}

impl BoardState {
    /// 创建初始局面：每个洞放满初始石子，得分仓为空，一号玩家先手
    pub fn initial(config: &GameConfig) -> Self {
        Self {
            p1_holes: vec![config.stones; config.holes as usize],
            p2_holes: vec![config.stones; config.holes as usize],
            p1_captures: 0,
            p2_captures: 0,
            current_turn: Player::One,
        }
    }

    /// 每方洞数 H
    pub fn holes_per_side(&self) -> u8 {
        self.p1_holes.len() as u8
    }

    /// 场上（未入仓）石子总数
    pub fn uncaptured(&self) -> u8 {
        let p1: u8 = self.p1_holes.iter().sum();
        let p2: u8 = self.p2_holes.iter().sum();
        p1 + p2
    }

    /// 获取指定玩家的洞排
    pub fn holes(&self, player: Player) -> &[u8] {
        match player {
            Player::One => &self.p1_holes,
            Player::Two => &self.p2_holes,
        }
    }

    /// 获取指定玩家的得分仓计数
    pub fn captures(&self, player: Player) -> u8 {
        match player {
            Player::One => self.p1_captures,
            Player::Two => self.p2_captures,
        }
    }

    /// 获取指定玩家得分仓计数的可变引用
    pub fn captures_mut(&mut self, player: Player) -> &mut u8 {
        match player {
            Player::One => &mut self.p1_captures,
            Player::Two => &mut self.p2_captures,
        }
    }

    /// 切换走子方
    pub fn switch_turn(&mut self) {
        self.current_turn = self.current_turn.opponent();
    }

    /// 判断是否终局：任意一排洞全部清空
    pub fn is_end_state(&self) -> bool {
        self.p1_holes.iter().all(|&v| v == 0) || self.p2_holes.iter().all(|&v| v == 0)
    }
}
