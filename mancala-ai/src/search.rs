//! 搜索引擎
//!
//! 实现 Minimax + Alpha-Beta 剪枝。搜索树不用递归，而是用一个显式
//! 的节点栈（fringe）：父节点引用是栈内下标，节点只在它展开的全部
//! 子节点折叠完之后才出栈，所以下标始终有效。
//!
//! 回合（含奖励步链）是树的边，一条边走完走子权必然易手，树的
//! 层级就是双方轮流。

use rules::{apply_ply, BoardState, Player, Ply, PlyEnumerator};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::evaluate::{Heuristic, HeuristicKind};

/// Alpha-Beta 初始窗口半径
///
/// 必须严格大于任何评估函数可达的分值绝对值（物质评估在终局可达
/// 约 ±130 × 10119）；窗口偏小时全输局面折叠不出最佳回合，剪枝
/// 还会在根部截断未探索的兄弟节点。
const WINDOW: i32 = i32::MAX / 2;

/// AI 配置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiConfig {
    /// 搜索深度（回合数）
    pub search_depth: u8,
    /// 是否启用 Alpha-Beta 剪枝
    pub prune: bool,
    /// 一号玩家走子时使用的评估函数
    pub p1_heuristic: HeuristicKind,
    /// 二号玩家走子时使用的评估函数
    pub p2_heuristic: HeuristicKind,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            search_depth: 6,
            prune: true,
            p1_heuristic: HeuristicKind::Material,
            p2_heuristic: HeuristicKind::Material,
        }
    }
}

/// 搜索树节点
struct Node {
    state: BoardState,
    /// 父节点在栈内的下标；根节点为 None
    parent: Option<usize>,
    /// 从父局面走到本局面的回合；根节点为 None
    action: Option<Ply>,
    /// 剩余搜索深度
    depth: u8,
    alpha: i32,
    beta: i32,
    maximizer: bool,
    /// 尚未展开的子回合游标
    enumerator: PlyEnumerator,
    /// 目前已折叠子节点中的最优回合
    best_ply: Option<Ply>,
}

impl Node {
    fn root(state: BoardState, depth: u8) -> Self {
        Self {
            enumerator: PlyEnumerator::new(state.clone()),
            state,
            parent: None,
            action: None,
            depth,
            alpha: -WINDOW,
            beta: WINDOW,
            maximizer: true,
            best_ply: None,
        }
    }

    /// 是否还有待展开的子节点
    ///
    /// 剪枝开启时窗口闭合（beta <= alpha）即停止展开。
    fn has_next(&self, prune: bool) -> bool {
        self.depth > 0
            && !self.state.is_end_state()
            && self.enumerator.is_valid()
            && (!prune || self.beta > self.alpha)
    }

    /// 节点折叠时的返回值：叶子直接评估，内部节点取收紧后的窗口边界
    fn value(&self, heuristic: &dyn Heuristic) -> i32 {
        if self.depth == 0 || self.state.is_end_state() {
            heuristic.evaluate(&self.state)
        } else if self.maximizer {
            self.alpha
        } else {
            self.beta
        }
    }

    /// 用折叠完毕的子节点更新本节点
    ///
    /// 严格改善才收紧窗口并改选回合；打平时按固定规则破除：
    /// 空洞开局的回合不挤掉动石子的回合（反之则挤掉），
    /// 否则比较两个子局面的一步评估，真平局保留现任。
    fn update(&mut self, value: i32, child: &Node, heuristic: &dyn Heuristic) {
        let action = child
            .action
            .clone()
            .expect("a folded child always carries its action");

        let improved = if self.maximizer {
            value > self.alpha
        } else {
            value < self.beta
        };
        if improved {
            if self.maximizer {
                self.alpha = value;
            } else {
                self.beta = value;
            }
            self.best_ply = Some(action);
            return;
        }

        let tied = if self.maximizer {
            value == self.alpha
        } else {
            value == self.beta
        };
        if !tied {
            return;
        }
        match &self.best_ply {
            None => self.best_ply = Some(action),
            Some(incumbent) => {
                if self.prefer_challenger(incumbent, &action, &child.state, heuristic) {
                    self.best_ply = Some(action);
                }
            }
        }
    }

    fn prefer_challenger(
        &self,
        incumbent: &Ply,
        challenger: &Ply,
        challenger_state: &BoardState,
        heuristic: &dyn Heuristic,
    ) -> bool {
        let incumbent_noop = self.first_move_is_noop(incumbent);
        let challenger_noop = self.first_move_is_noop(challenger);
        if incumbent_noop != challenger_noop {
            return incumbent_noop;
        }

        let mut incumbent_state = self.state.clone();
        apply_ply(&mut incumbent_state, incumbent);
        let challenger_value = heuristic.evaluate(challenger_state);
        let incumbent_value = heuristic.evaluate(&incumbent_state);
        if self.maximizer {
            challenger_value > incumbent_value
        } else {
            challenger_value < incumbent_value
        }
    }

    /// 回合的第一步是否从空洞起手（无效果走法）
    fn first_move_is_noop(&self, ply: &Ply) -> bool {
        let hole = ply.first().hole;
        self.state.holes(self.state.current_turn)[(hole - 1) as usize] == 0
    }
}

/// 从给定局面搜索最佳回合
///
/// 返回最佳回合、根局面估值与展开的节点总数。根节点一个子节点都
/// 没折叠过（深度为 0 或终局）时最佳回合为 `None`。
fn search_fringe(
    state: &BoardState,
    depth: u8,
    prune: bool,
    heuristic: &dyn Heuristic,
) -> (Option<Ply>, i32, u64) {
    let mut fringe = vec![Node::root(state.clone(), depth)];
    let mut nodes_expanded: u64 = 1;

    loop {
        let top = fringe.len() - 1;
        if fringe[top].has_next(prune) {
            let node = &mut fringe[top];
            let ply = node.enumerator.current_ply();
            node.enumerator.advance();

            let mut child_state = node.state.clone();
            apply_ply(&mut child_state, &ply);

            let child = Node {
                enumerator: PlyEnumerator::new(child_state.clone()),
                state: child_state,
                parent: Some(top),
                action: Some(ply),
                depth: node.depth - 1,
                alpha: node.alpha,
                beta: node.beta,
                maximizer: !node.maximizer,
                best_ply: None,
            };
            fringe.push(child);
            nodes_expanded += 1;
        } else {
            let node = fringe.pop().expect("fringe holds the root until return");
            let value = node.value(heuristic);
            match node.parent {
                None => return (node.best_ply, value, nodes_expanded),
                Some(p) => fringe[p].update(value, &node, heuristic),
            }
        }
    }
}

/// 按规则搜索最佳回合；根节点未折叠过任何子节点属于调用方错误
pub fn choose_best_ply(
    state: &BoardState,
    depth: u8,
    prune: bool,
    heuristic: &dyn Heuristic,
) -> Ply {
    search_fringe(state, depth, prune, heuristic)
        .0
        .expect("search from a live position with positive depth yields a ply")
}

/// AI 引擎
pub struct AiEngine {
    config: AiConfig,
    nodes_expanded: u64,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new(config: AiConfig) -> Self {
        Self {
            config,
            nodes_expanded: 0,
        }
    }

    /// 搜索最佳回合
    ///
    /// 深度为 0 或对局已结束时返回 `None`。评估函数按走子方从配置
    /// 中选取，视角固定为走子方是极大方。
    pub fn search(&mut self, state: &BoardState) -> Option<Ply> {
        self.nodes_expanded = 0;
        if self.config.search_depth == 0 || state.is_end_state() {
            return None;
        }

        let mover = state.current_turn;
        let kind = match mover {
            Player::One => self.config.p1_heuristic,
            Player::Two => self.config.p2_heuristic,
        };
        let heuristic = kind.build(mover == Player::One);

        let (best, value, nodes) = search_fringe(
            state,
            self.config.search_depth,
            self.config.prune,
            heuristic.as_ref(),
        );
        self.nodes_expanded = nodes;
        debug!(
            "search complete: depth={}, nodes={}, value={}",
            self.config.search_depth, nodes, value
        );
        best
    }

    /// 上一次搜索展开的节点总数
    pub fn nodes_expanded(&self) -> u64 {
        self.nodes_expanded
    }
}
