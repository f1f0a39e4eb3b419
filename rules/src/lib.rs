//! 播棋（曼卡拉类）规则库
//!
//! 包含:
//! - 棋盘状态与对局配置 (BoardState, GameConfig)
//! - 环形播种遍历 (RingWalker)
//! - 走法执行: 播种、掠取、奖励回合、终局扫收
//! - 回合枚举 (PlyEnumerator): 按确定性顺序产出含奖励步链的完整回合
//! - 局面文本表示法 (Notation)

mod board;
mod config;
mod enumerate;
mod error;
mod moves;
mod notation;
mod ring;

pub use board::{BoardState, Player};
pub use config::{GameConfig, MAX_STONES, MIN_STONES};
pub use enumerate::{enumerate_plies, PlyEnumerator};
pub use error::{Result, RulesError};
pub use moves::{apply_move, apply_ply, Direction, Move, Ply};
pub use notation::Notation;
pub use ring::RingWalker;
