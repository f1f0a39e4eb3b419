//! 终端棋盘渲染

use std::fmt::Write;

use rules::BoardState;

/// 渲染适合人类阅读的棋盘视图
///
/// 上排是一号玩家（从左往右 1 号洞起），下排是二号玩家，
/// 两端的 `*` 标记得分仓。
pub fn pretty(state: &BoardState) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "P1's mancala contains {} stones",
        state.p1_captures
    );
    let _ = writeln!(
        out,
        "P2's mancala contains {} stones",
        state.p2_captures
    );
    let _ = writeln!(out, "Uncaptured stones remaining: {}", state.uncaptured());

    // 列标号
    let _ = write!(out, "  # ");
    for i in 1..=state.holes_per_side() {
        let _ = write!(out, "{:>3} ", i);
    }
    let _ = writeln!(out);

    let _ = write!(out, " * |");
    for &h in &state.p1_holes {
        let _ = write!(out, "{:>3}|", h);
    }
    let _ = writeln!(out, " * ");

    let _ = write!(out, " * |");
    for &h in &state.p2_holes {
        let _ = write!(out, "{:>3}|", h);
    }
    let _ = writeln!(out, " * ");

    out
}
