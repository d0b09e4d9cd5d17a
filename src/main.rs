// ==========================================
// 包装产线SPC监控系统 - 控制台主入口
// ==========================================
// 职责: 交互式会话驱动 (外部协作者)
// 流程: 选择sigma与渲染模式 → 基线采集 → 逐小时推进 (ENTER继续/q退出)
// ==========================================

use anyhow::Result;
use packaging_spc::render::{JsonRenderer, Renderer, TextRenderer};
use packaging_spc::{LineRegistry, RenderMode, Simulation, SimulationConfig};
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    // 初始化日志系统
    packaging_spc::logging::init();

    tracing::info!("==================================================");
    tracing::info!("包装产线实时统计过程控制与报警系统");
    tracing::info!("系统版本: {}", packaging_spc::VERSION);
    tracing::info!("==================================================");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    // 1. sigma选择
    println!("1. Sigma值选择:");
    println!("  0.03 = 受控 (低方差)");
    println!("  0.10 = 中等方差");
    println!("  0.20 = 高方差");
    println!("  0.30 = 极高方差");
    let sigma = prompt_f64(&mut input, "Sigma值 (默认 0.03): ", 0.03)?;

    // 2. 渲染模式选择
    println!("\n2. 渲染模式选择:");
    println!("  1 = 文本输出");
    println!("  2 = JSON输出");
    let render_mode = match prompt_line(&mut input, "模式 (1/2, 默认 1): ")?.as_str() {
        "2" => RenderMode::Json,
        _ => RenderMode::Text,
    };

    let config = SimulationConfig {
        sigma,
        render_mode,
        ..SimulationConfig::default()
    };

    // 注册表加载与基线采集 (配置级错误在此致命)
    let registry = LineRegistry::standard()?;
    let mut simulation = Simulation::new(registry, config);
    println!("\n基线采集中 (50小时 @ sigma=0.03) ...");
    simulation.start()?;
    println!("控制限已冻结,进入监控阶段。\n");

    let renderer: Box<dyn Renderer> = match render_mode {
        RenderMode::Text => Box::new(TextRenderer::new()),
        RenderMode::Json => Box::new(JsonRenderer::new()),
    };

    // 监控循环: 每个ENTER推进一个小时
    loop {
        let records = simulation.step()?;
        renderer.render_hour(&records);

        let answer = prompt_line(&mut input, "▶ ENTER继续, 'q'退出: ")?;
        if answer.eq_ignore_ascii_case("q") {
            break;
        }
    }

    simulation.stop();
    println!("\n仿真已结束,共模拟 {} 小时。", simulation.hours_elapsed());
    Ok(())
}

/// 读取一行输入 (去除首尾空白)
fn prompt_line<R: BufRead>(input: &mut R, prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// 读取浮点输入,空输入或解析失败时回落默认值
fn prompt_f64<R: BufRead>(input: &mut R, prompt: &str, default: f64) -> Result<f64> {
    let line = prompt_line(input, prompt)?;
    if line.is_empty() {
        return Ok(default);
    }

    match line.parse::<f64>() {
        Ok(value) if value >= 0.0 => Ok(value),
        _ => {
            println!("输入非法,使用默认值 {}", default);
            Ok(default)
        }
    }
}
