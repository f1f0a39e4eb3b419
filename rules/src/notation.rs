//! 局面文本表示法
//!
//! 格式：`<p1得分>/<p1洞排>/<p2洞排>/<p2得分>`，洞排内用逗号分隔。
//! 星号标在走子方得分仓数字的旁边：一号玩家走子时加在串首
//! （`*2/...`），二号玩家走子时加在串尾（`.../0*`）。
//!
//! 示例：`2/0,0,6,6/4,4,5,5/0*` 表示二号玩家走子。

use std::fmt;

use crate::board::{BoardState, Player};
use crate::error::{Result, RulesError};

/// 局面文本编码和解析
pub struct Notation;

impl Notation {
    /// 将局面编码为文本
    pub fn encode(state: &BoardState) -> String {
        let p1 = Self::encode_row(&state.p1_holes);
        let p2 = Self::encode_row(&state.p2_holes);
        match state.current_turn {
            Player::One => format!(
                "*{}/{}/{}/{}",
                state.p1_captures, p1, p2, state.p2_captures
            ),
            Player::Two => format!(
                "{}/{}/{}/{}*",
                state.p1_captures, p1, p2, state.p2_captures
            ),
        }
    }

    fn encode_row(holes: &[u8]) -> String {
        holes
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// 解析局面文本
    pub fn parse(text: &str) -> Result<BoardState> {
        let (body, current_turn) = if let Some(rest) = text.strip_prefix('*') {
            (rest, Player::One)
        } else if let Some(rest) = text.strip_suffix('*') {
            (rest, Player::Two)
        } else {
            return Err(RulesError::InvalidNotation {
                reason: "missing turn marker '*'".to_string(),
            });
        };
        if body.contains('*') {
            return Err(RulesError::InvalidNotation {
                reason: "more than one turn marker".to_string(),
            });
        }

        let parts: Vec<&str> = body.split('/').collect();
        if parts.len() != 4 {
            return Err(RulesError::InvalidNotation {
                reason: format!("expected 4 fields, got {}", parts.len()),
            });
        }

        let p1_captures = Self::parse_count(parts[0])?;
        let p1_holes = Self::parse_row(parts[1])?;
        let p2_holes = Self::parse_row(parts[2])?;
        let p2_captures = Self::parse_count(parts[3])?;

        if p1_holes.len() != p2_holes.len() {
            return Err(RulesError::InvalidNotation {
                reason: format!(
                    "rows differ in length: {} vs {}",
                    p1_holes.len(),
                    p2_holes.len()
                ),
            });
        }

        // 石子总数必须能装进 u8，后续的求和与扫收才不会溢出
        let total: u32 = u32::from(p1_captures)
            + u32::from(p2_captures)
            + p1_holes.iter().map(|&v| u32::from(v)).sum::<u32>()
            + p2_holes.iter().map(|&v| u32::from(v)).sum::<u32>();
        if total > u32::from(u8::MAX) {
            return Err(RulesError::InvalidNotation {
                reason: format!("stone total {} exceeds {}", total, u8::MAX),
            });
        }

        Ok(BoardState {
            p1_holes,
            p2_holes,
            p1_captures,
            p2_captures,
            current_turn,
        })
    }

    fn parse_row(text: &str) -> Result<Vec<u8>> {
        text.split(',').map(Self::parse_count).collect()
    }

    fn parse_count(text: &str) -> Result<u8> {
        text.parse().map_err(|_| RulesError::InvalidNotation {
            reason: format!("invalid stone count: {:?}", text),
        })
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Notation::encode(self))
    }
}
