//! 走法与回合

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::BoardState;
use crate::error::RulesError;
use crate::ring::RingWalker;

/// 播种方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// 顺时针
    Clockwise,
    /// 逆时针
    Counterclockwise,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Clockwise => write!(f, "cw"),
            Direction::Counterclockwise => write!(f, "ccw"),
        }
    }
}

impl FromStr for Direction {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cw" => Ok(Direction::Clockwise),
            "ccw" => Ok(Direction::Counterclockwise),
            other => Err(RulesError::InvalidDirection {
                input: other.to_string(),
            }),
        }
    }
}

/// 单步走法：选一个自己的洞和一个播种方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// 洞编号（1 到 H）
    pub hole: u8,
    /// 播种方向
    pub direction: Direction,
}

impl Move {
    /// 创建新走法
    pub fn new(hole: u8, direction: Direction) -> Self {
        Self { hole, direction }
    }

    /// 创建走法并检查洞编号范围（供外层输入验证使用）
    pub fn checked(hole: u8, direction: Direction, holes_per_side: u8) -> crate::Result<Self> {
        if hole >= 1 && hole <= holes_per_side {
            Ok(Self { hole, direction })
        } else {
            Err(RulesError::InvalidHole {
                hole,
                max: holes_per_side,
            })
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move{{{},{}}}", self.hole, self.direction)
    }
}

/// 一个完整回合：一步走法，外加落仓带来的全部连续奖励步
///
/// 序列非空；`Ply` 只能整体执行，不能拆开。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ply {
    moves: Vec<Move>,
}

impl Ply {
    /// 从走法序列创建回合；序列为空属于调用方错误
    pub fn new(moves: Vec<Move>) -> Self {
        assert!(!moves.is_empty(), "a ply must contain at least one move");
        Self { moves }
    }

    /// 创建单步回合
    pub fn single(mv: Move) -> Self {
        Self { moves: vec![mv] }
    }

    /// 回合内的走法序列
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// 回合的第一步
    pub fn first(&self) -> Move {
        self.moves[0]
    }
}

impl fmt::Display for Ply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.moves.iter().map(Move::to_string).collect();
        write!(f, "{}", parts.join(","))
    }
}

/// 执行一步走法
///
/// 1. 抓起所选洞的全部石子，沿环逐格播种；
/// 2. 最后一颗石子落进自己的空洞时，掠取对面洞的全部石子入仓；
/// 3. 最后一颗落在自己的仓里则保留走子权（奖励回合），否则换边；
/// 4. 任意一排清空后，对方把自己排上剩余的石子全部收入仓，对局结束。
///
/// 空洞也是合法选择：不播种、不掠取，直接换边。
pub fn apply_move(state: &mut BoardState, mv: Move) {
    let mover = state.current_turn;

    let mut walker = RingWalker::new(state, mv);
    let mut in_hand = std::mem::take(walker.current_mut());
    while in_hand > 0 {
        walker.advance();
        *walker.current_mut() += 1;
        in_hand -= 1;
    }

    let mut captured = 0;
    if walker.is_own_hole() && *walker.current_mut() == 1 {
        captured = std::mem::take(walker.opposite_mut());
    }
    let bonus_turn = walker.is_own_pit();
    drop(walker);

    *state.captures_mut(mover) += captured;

    if !bonus_turn {
        state.switch_turn();
    }

    if state.is_end_state() {
        sweep_remaining(state);
    }
}

/// 执行一个完整回合（按顺序执行全部走法）
pub fn apply_ply(state: &mut BoardState, ply: &Ply) {
    for &mv in ply.moves() {
        apply_move(state, mv);
    }
}

/// 终局扫收：洞排未清空的一方把自己排上的石子全部收入自己的仓
fn sweep_remaining(state: &mut BoardState) {
    let p1_done = state.p1_holes.iter().all(|&v| v == 0);
    let (holes, captures) = if p1_done {
        (&mut state.p2_holes, &mut state.p2_captures)
    } else {
        (&mut state.p1_holes, &mut state.p1_captures)
    };
    for v in holes.iter_mut() {
        *captures += std::mem::take(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;
    use crate::config::GameConfig;
    use crate::enumerate::enumerate_plies;
    use crate::notation::Notation;

    fn total(state: &BoardState) -> u8 {
        state.uncaptured() + state.p1_captures + state.p2_captures
    }

    #[test]
    fn test_move_display() {
        assert_eq!(
            Move::new(3, Direction::Clockwise).to_string(),
            "Move{3,cw}"
        );
        assert_eq!(
            Move::new(1, Direction::Counterclockwise).to_string(),
            "Move{1,ccw}"
        );
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!("cw".parse::<Direction>().unwrap(), Direction::Clockwise);
        assert_eq!(
            "ccw".parse::<Direction>().unwrap(),
            Direction::Counterclockwise
        );
        assert!("up".parse::<Direction>().is_err());
    }

    #[test]
    fn test_checked_move() {
        assert!(Move::checked(1, Direction::Clockwise, 4).is_ok());
        assert!(Move::checked(4, Direction::Clockwise, 4).is_ok());
        assert_eq!(
            Move::checked(0, Direction::Clockwise, 4),
            Err(RulesError::InvalidHole { hole: 0, max: 4 })
        );
        assert!(Move::checked(5, Direction::Clockwise, 4).is_err());
    }

    #[test]
    fn test_worked_example_counterclockwise() {
        // 二号玩家从 1 号洞逆时针播种，最后一颗落入自己的仓，
        // 获得奖励回合
        let mut state = Notation::parse("2/0,0,6,6/4,4,5,5/0*").unwrap();
        apply_move(&mut state, Move::new(1, Direction::Counterclockwise));
        assert_eq!(Notation::encode(&state), "2/0,0,6,6/0,5,6,6/1*");
        assert_eq!(state.current_turn, Player::Two);
    }

    #[test]
    fn test_worked_example_clockwise() {
        // 同一起点顺时针：先落自己的仓，跳过对方的仓，再进入对方洞排，
        // 走子权转给一号玩家
        let mut state = Notation::parse("2/0,0,6,6/4,4,5,5/0*").unwrap();
        apply_move(&mut state, Move::new(1, Direction::Clockwise));
        assert_eq!(Notation::encode(&state), "*2/1,1,7,6/0,4,5,5/1");
        assert_eq!(state.current_turn, Player::One);
    }

    #[test]
    fn test_sowing_exactness() {
        let config = GameConfig::new(4, 4).unwrap();
        let mut state = BoardState::initial(&config);
        let before = total(&state);

        apply_move(&mut state, Move::new(2, Direction::Counterclockwise));

        // 抓起的 4 颗石子全部播出，所选洞清空
        assert_eq!(state.p1_holes[1], 0);
        assert_eq!(total(&state), before);
        // 逆时针落点依次为 1 号洞、自己的仓、（跳过对方的仓）
        // 对方 1 号洞、对方 2 号洞
        assert_eq!(state.p1_holes[0], 5);
        assert_eq!(state.p1_captures, 1);
        assert_eq!(state.p2_holes[0], 5);
        assert_eq!(state.p2_holes[1], 5);
    }

    #[test]
    fn test_empty_hole_is_noop_and_passes_turn() {
        let mut state = Notation::parse("*2/0,0,6,6/4,4,5,5/0").unwrap();
        let before = state.clone();

        apply_move(&mut state, Move::new(1, Direction::Clockwise));

        assert_eq!(state.p1_holes, before.p1_holes);
        assert_eq!(state.p2_holes, before.p2_holes);
        assert_eq!(state.p1_captures, before.p1_captures);
        assert_eq!(state.current_turn, Player::Two);
    }

    #[test]
    fn test_capture_on_landing_in_empty_own_hole() {
        // 一号玩家 1 号洞 1 颗石子顺时针：落入空的 2 号洞，
        // 掠取对面（二号玩家 2 号洞）的 7 颗
        let mut state = Notation::parse("*0/1,0,4,4/4,7,4,4/0").unwrap();
        apply_move(&mut state, Move::new(1, Direction::Clockwise));

        assert_eq!(state.p1_holes, vec![0, 1, 4, 4]);
        assert_eq!(state.p2_holes, vec![4, 0, 4, 4]);
        assert_eq!(state.p1_captures, 7);
        assert_eq!(state.current_turn, Player::Two);
    }

    #[test]
    fn test_no_capture_when_hole_was_occupied() {
        let mut state = Notation::parse("*0/1,3,4,4/4,7,4,4/0").unwrap();
        apply_move(&mut state, Move::new(1, Direction::Clockwise));

        // 落点原有 3 颗，不触发掠取
        assert_eq!(state.p1_holes, vec![0, 4, 4, 4]);
        assert_eq!(state.p2_holes, vec![4, 7, 4, 4]);
        assert_eq!(state.p1_captures, 0);
    }

    #[test]
    fn test_bonus_turn_keeps_mover() {
        let config = GameConfig::new(4, 4).unwrap();
        let mut state = BoardState::initial(&config);

        // 1 号洞 4 颗顺时针：2、3、4 号洞各一颗，最后一颗入仓
        apply_move(&mut state, Move::new(1, Direction::Clockwise));
        assert_eq!(state.p1_captures, 1);
        assert_eq!(state.current_turn, Player::One);
    }

    #[test]
    fn test_end_sweep() {
        // 一号玩家仅剩 1 颗，逆时针入仓后自己排清空，
        // 二号玩家扫收自己排上的全部石子
        let mut state = Notation::parse("*10/1,0,0,0/3,2,4,4/8").unwrap();
        let before = total(&state);

        apply_move(&mut state, Move::new(1, Direction::Counterclockwise));

        assert!(state.is_end_state());
        assert_eq!(state.p1_holes, vec![0, 0, 0, 0]);
        assert_eq!(state.p2_holes, vec![0, 0, 0, 0]);
        assert_eq!(state.p1_captures, 11);
        assert_eq!(state.p2_captures, 21);
        assert_eq!(total(&state), before);
    }

    #[test]
    fn test_conservation_over_play() {
        // 从初始局面反复执行第一个可行回合，每步检查石子守恒
        let config = GameConfig::new(4, 4).unwrap();
        let mut state = BoardState::initial(&config);
        let expected = config.total_stones();

        for _ in 0..200 {
            if state.is_end_state() {
                break;
            }
            let ply = enumerate_plies(&state)
                .into_iter()
                .next()
                .expect("non-terminal state has at least one ply");
            apply_ply(&mut state, &ply);
            assert_eq!(total(&state), expected);
        }
    }
}
