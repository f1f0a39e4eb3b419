//! 人机对战命令行入口
//!
//! 人类执一号玩家（上排），AI 执二号玩家（下排）。

mod display;

use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use mancala_ai::{AiConfig, AiEngine, HeuristicKind};
use rules::{apply_move, apply_ply, BoardState, Direction, GameConfig, Move, Player};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mancala")]
#[command(author, version, about = "人机对战播棋", long_about = None)]
struct Cli {
    /// 每洞初始石子数（范围 2 - 6）
    stones: u8,

    /// 每方洞数（范围 stones-1 到 2*(stones-1)）
    holes: u8,

    /// AI 搜索深度（回合数）
    #[arg(long, default_value_t = 6)]
    depth: u8,

    /// 关闭 Alpha-Beta 剪枝
    #[arg(long)]
    no_prune: bool,

    /// 一号玩家走子时 AI 使用的评估函数
    #[arg(long, value_enum, default_value_t = HeuristicArg::Material)]
    p1_heuristic: HeuristicArg,

    /// 二号玩家走子时 AI 使用的评估函数
    #[arg(long, value_enum, default_value_t = HeuristicArg::Material)]
    p2_heuristic: HeuristicArg,

    /// 从 JSON 文件读取完整 AI 配置（覆盖以上 AI 选项）
    #[arg(long)]
    ai_config: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HeuristicArg {
    /// 得分差评估
    CaptureDiff,
    /// 物质评估
    Material,
}

impl From<HeuristicArg> for HeuristicKind {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::CaptureDiff => HeuristicKind::CaptureDiff,
            HeuristicArg::Material => HeuristicKind::Material,
        }
    }
}

impl Cli {
    fn ai_config(&self) -> Result<AiConfig> {
        if let Some(path) = &self.ai_config {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read AI config {}", path))?;
            return serde_json::from_str(&text)
                .with_context(|| format!("failed to parse AI config {}", path));
        }
        Ok(AiConfig {
            search_depth: self.depth,
            prune: !self.no_prune,
            p1_heuristic: self.p1_heuristic.into(),
            p2_heuristic: self.p2_heuristic.into(),
        })
    }
}

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mancala_cli=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = GameConfig::new(cli.holes, cli.stones)?;
    let ai_config = cli.ai_config()?;
    anyhow::ensure!(ai_config.search_depth > 0, "search depth must be positive");

    println!("Holes: {}", config.holes);
    println!("Stones: {}", config.stones);

    let mut engine = AiEngine::new(ai_config);
    let mut state = BoardState::initial(&config);
    println!("{}", state);

    let stdin = io::stdin();
    let mut input = stdin.lock();

    while !state.is_end_state() {
        println!();
        print!("{}", display::pretty(&state));

        match state.current_turn {
            Player::One => {
                println!("You are Player 1 (top)");
                let mv = read_human_move(&mut input, config.holes)?;
                apply_move(&mut state, mv);
            }
            Player::Two => {
                let ply = engine
                    .search(&state)
                    .expect("a live position always yields a ply");
                info!("AI searched {} nodes", engine.nodes_expanded());
                println!("AI plays: {}", ply);
                apply_ply(&mut state, &ply);
            }
        }
        println!("{}", state);
    }

    println!();
    print!("{}", display::pretty(&state));
    match state.p1_captures.cmp(&state.p2_captures) {
        std::cmp::Ordering::Greater => println!("Player 1 wins!"),
        std::cmp::Ordering::Less => println!("Player 2 wins!"),
        std::cmp::Ordering::Equal => println!("Draw!"),
    }

    Ok(())
}

/// 读取人类玩家的一步走法，输入不合法时重新提示
fn read_human_move(input: &mut impl BufRead, holes: u8) -> Result<Move> {
    loop {
        println!("Select one of your holes (range is 1 - {})", holes);
        let hole: u8 = match read_line(input)?.trim().parse() {
            Ok(n) => n,
            Err(_) => continue,
        };

        println!("Move clockwise (cw) or counterclockwise (ccw)?");
        let direction: Direction = match read_line(input)?.trim().parse() {
            Ok(d) => d,
            Err(_) => {
                println!("Invalid direction. Must be one of \"cw\" or \"ccw\"");
                continue;
            }
        };

        match Move::checked(hole, direction, holes) {
            Ok(mv) => return Ok(mv),
            Err(err) => println!("{}", err),
        }
    }
}

fn read_line(input: &mut impl BufRead) -> Result<String> {
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}
