//! 回合枚举器
//!
//! 按固定顺序产出某个局面下的全部合法回合：洞编号从 1 到 H，
//! 同一个洞先逆时针后顺时针。候选走法若带来奖励回合，就递归
//! 枚举后续局面的所有续走，把候选步接在每个续走前面输出。
//! 搜索的平局破除依赖这一确定性顺序。

use crate::board::BoardState;
use crate::moves::{apply_move, Direction, Move, Ply};

/// 游标状态：枚举完毕，或停在某个候选走法上
enum Cursor {
    /// 已枚举完毕
    Exhausted,
    /// 停在候选走法上；若该走法保留走子权，则持有续走子枚举器
    At {
        mv: Move,
        bonus: Option<Box<PlyEnumerator>>,
    },
}

/// 有状态的回合枚举器
///
/// 自引用结构：子枚举器枚举完毕后才推进自己的游标。
/// 不变量：`bonus` 为 `Some` 时子枚举器一定有效。
pub struct PlyEnumerator {
    state: BoardState,
    cursor: Cursor,
}

impl PlyEnumerator {
    /// 为给定局面创建枚举器，游标停在第一个候选（1 号洞逆时针）上
    pub fn new(state: BoardState) -> Self {
        let first = Move::new(1, Direction::Counterclockwise);
        let bonus = probe_bonus(&state, first);
        Self {
            state,
            cursor: Cursor::At { mv: first, bonus },
        }
    }

    /// 是否还有未产出的回合
    pub fn is_valid(&self) -> bool {
        !matches!(self.cursor, Cursor::Exhausted)
    }

    /// 游标当前指向的回合
    pub fn current_ply(&self) -> Ply {
        match &self.cursor {
            Cursor::Exhausted => panic!("current_ply on an exhausted ply enumerator"),
            Cursor::At { mv, bonus } => {
                let mut moves = vec![*mv];
                if let Some(sub) = bonus {
                    moves.extend_from_slice(sub.current_ply().moves());
                }
                Ply::new(moves)
            }
        }
    }

    /// 推进游标：先推进续走子枚举器，子枚举器枚举完后才换下一个候选
    pub fn advance(&mut self) {
        let (hole, direction) = match &mut self.cursor {
            Cursor::Exhausted => panic!("advance on an exhausted ply enumerator"),
            Cursor::At { mv, bonus } => {
                if let Some(sub) = bonus {
                    sub.advance();
                    if sub.is_valid() {
                        return;
                    }
                }
                (mv.hole, mv.direction)
            }
        };

        let next = match direction {
            Direction::Counterclockwise => Some(Move::new(hole, Direction::Clockwise)),
            Direction::Clockwise if hole < self.state.holes_per_side() => {
                Some(Move::new(hole + 1, Direction::Counterclockwise))
            }
            Direction::Clockwise => None,
        };

        self.cursor = match next {
            Some(mv) => Cursor::At {
                mv,
                bonus: probe_bonus(&self.state, mv),
            },
            None => Cursor::Exhausted,
        };
    }
}

impl Iterator for PlyEnumerator {
    type Item = Ply;

    fn next(&mut self) -> Option<Ply> {
        if !self.is_valid() {
            return None;
        }
        let ply = self.current_ply();
        self.advance();
        Some(ply)
    }
}

/// 试走候选走法：走子权未转移时，为投影局面创建续走子枚举器
///
/// 奖励步严格增加仓内石子数，所以递归深度有界。
fn probe_bonus(state: &BoardState, mv: Move) -> Option<Box<PlyEnumerator>> {
    let mut projected = state.clone();
    apply_move(&mut projected, mv);
    if projected.current_turn == state.current_turn {
        Some(Box::new(PlyEnumerator::new(projected)))
    } else {
        None
    }
}

/// 按规范顺序收集某个局面下的全部合法回合
pub fn enumerate_plies(state: &BoardState) -> Vec<Ply> {
    PlyEnumerator::new(state.clone()).collect()
}
