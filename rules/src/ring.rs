//! 环形遍历器
//!
//! 把上下两排洞和两端的得分仓抽象成一个长度为 `2H + 4` 的环。
//! 以 H = 4 为例，环位置编号如下（上排为一号玩家，下排为二号玩家，
//! 顶行是走法编号图例）：
//!
//! ```text
//! 走法 #      1  2  3  4
//! 环位置   0  1  2  3  4  5
//! 环位置  11 10  9  8  7  6
//! ```
//!
//! 一号玩家的得分仓在 0 和 5，二号玩家的在 11 和 6——实体棋盘的
//! 得分仓位于两排的两端，所以每个仓在环上出现两次。二号玩家的
//! 走法编号从它自己的视角数：1 对应 10，2 对应 9，依此类推。
//! 本模块把这套下标变换封装起来，外部的播种逻辑只按环前进，
//! 不必关心石子落在哪一排。

use crate::board::{BoardState, Player};
use crate::moves::{Direction, Move};

/// 环形遍历器：从走子方选定的洞出发，沿指定方向绕环前进
///
/// 不变量：遍历器永远不会停在对方的得分仓上（`advance` 负责跳过）。
pub struct RingWalker<'a> {
    state: &'a mut BoardState,
    /// 当前环位置
    current: u8,
    clockwise: bool,
    mover: Player,
    /// 环总长度 2H + 4
    ring_len: u8,
    own_pit_low: u8,
    own_pit_high: u8,
    opp_pit_low: u8,
    opp_pit_high: u8,
}

impl<'a> RingWalker<'a> {
    /// 从走子方的走法构造遍历器，起点为所选洞对应的环位置
    ///
    /// 洞编号越界属于调用方错误，直接断言失败。
    pub fn new(state: &'a mut BoardState, mv: Move) -> Self {
        let h = state.holes_per_side();
        assert!(
            mv.hole >= 1 && mv.hole <= h,
            "hole number {} out of range 1-{}",
            mv.hole,
            h
        );

        let ring_len = 2 * h + 4;
        let mover = state.current_turn;
        let (current, own_pit_low, own_pit_high, opp_pit_low, opp_pit_high) = match mover {
            Player::One => (mv.hole, 0, h + 1, h + 2, ring_len - 1),
            // 二号玩家的洞排在环上反向排列：走法 m 对应环位置 2H + 3 - m
            Player::Two => (ring_len - 1 - mv.hole, h + 2, ring_len - 1, 0, h + 1),
        };

        Self {
            state,
            current,
            clockwise: mv.direction == Direction::Clockwise,
            mover,
            ring_len,
            own_pit_low,
            own_pit_high,
            opp_pit_low,
            opp_pit_high,
        }
    }

    /// 沿环前进一格；若落点是对方的得分仓则再前进一格
    ///
    /// 先取模回绕、再比较仓位置：仓紧邻位置 0 两侧，回绕前比较会
    /// 漏掉跨界的跳仓。
    pub fn advance(&mut self) {
        let mut next = self.step(self.current);
        if next == self.opp_pit_low || next == self.opp_pit_high {
            next = self.step(next);
        }
        self.current = next;
    }

    fn step(&self, from: u8) -> u8 {
        if self.clockwise {
            (from + 1) % self.ring_len
        } else {
            (from + self.ring_len - 1) % self.ring_len
        }
    }

    /// 当前位置石子计数的可变引用：走子方的仓映射到其得分仓计数，
    /// 洞位置映射到对应排的数组元素
    pub fn current_mut(&mut self) -> &mut u8 {
        assert!(
            self.current != self.opp_pit_low && self.current != self.opp_pit_high,
            "ring walker positioned on the opponent's pit"
        );
        if self.is_own_pit() {
            return self.state.captures_mut(self.mover);
        }
        let h = self.ring_len / 2 - 2;
        if (1..=h).contains(&self.current) {
            &mut self.state.p1_holes[(self.current - 1) as usize]
        } else {
            // 下排在环上反向排列：环位置 p 对应 p2_holes[2H + 2 - p]
            &mut self.state.p2_holes[(self.ring_len - 2 - self.current) as usize]
        }
    }

    /// 当前位置是否为走子方自己的洞
    pub fn is_own_hole(&self) -> bool {
        let h = self.ring_len / 2 - 2;
        match self.mover {
            Player::One => (1..=h).contains(&self.current),
            Player::Two => (h + 3..=2 * h + 2).contains(&self.current),
        }
    }

    /// 当前位置是否为走子方自己的得分仓
    pub fn is_own_pit(&self) -> bool {
        self.current == self.own_pit_low || self.current == self.own_pit_high
    }

    /// 对面洞（对方排上同一编号的洞）石子计数的可变引用
    ///
    /// 仅在 `is_own_hole()` 成立时有意义。
    pub fn opposite_mut(&mut self) -> &mut u8 {
        assert!(
            self.is_own_hole(),
            "opposite hole is only defined on the mover's own holes"
        );
        match self.mover {
            Player::One => &mut self.state.p2_holes[(self.current - 1) as usize],
            Player::Two => &mut self.state.p1_holes[(self.ring_len - 2 - self.current) as usize],
        }
    }
}
