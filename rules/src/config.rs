//! 对局配置

use serde::{Deserialize, Serialize};

use crate::error::{Result, RulesError};

/// 每洞初始石子数下限
pub const MIN_STONES: u8 = 2;

/// 每洞初始石子数上限
pub const MAX_STONES: u8 = 6;

/// 对局配置：每方洞数与每洞初始石子数
///
/// 洞数的合法范围依赖石子数：`[stones - 1, 2 * (stones - 1)]`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// 每方洞数 H
    pub holes: u8,
    /// 每洞初始石子数
    pub stones: u8,
}

impl GameConfig {
    /// 创建并验证对局配置
    pub fn new(holes: u8, stones: u8) -> Result<Self> {
        if !(MIN_STONES..=MAX_STONES).contains(&stones) {
            return Err(RulesError::InvalidConfig {
                reason: format!(
                    "stones must be in [{}, {}], got {}",
                    MIN_STONES, MAX_STONES, stones
                ),
            });
        }
        if holes < stones - 1 || holes > 2 * (stones - 1) {
            return Err(RulesError::InvalidConfig {
                reason: format!(
                    "holes must be in [{}, {}] for {} stones, got {}",
                    stones - 1,
                    2 * (stones - 1),
                    stones,
                    holes
                ),
            });
        }
        Ok(Self { holes, stones })
    }

    /// 对局石子总数
    pub fn total_stones(&self) -> u8 {
        self.holes * 2 * self.stones
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { holes: 6, stones: 4 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        let config = GameConfig::new(4, 4).unwrap();
        assert_eq!(config.holes, 4);
        assert_eq!(config.stones, 4);
        assert_eq!(config.total_stones(), 32);
    }

    #[test]
    fn test_stones_bounds() {
        assert!(GameConfig::new(1, 1).is_err());
        assert!(GameConfig::new(14, 7).is_err());
        assert!(GameConfig::new(2, 2).is_ok());
        assert!(GameConfig::new(10, 6).is_ok());
    }

    #[test]
    fn test_holes_bounds_depend_on_stones() {
        // stones = 4 时洞数范围为 [3, 6]
        assert!(GameConfig::new(2, 4).is_err());
        assert!(GameConfig::new(3, 4).is_ok());
        assert!(GameConfig::new(6, 4).is_ok());
        assert!(GameConfig::new(7, 4).is_err());
    }

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(GameConfig::new(config.holes, config.stones).is_ok());
    }
}
