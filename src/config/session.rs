// ==========================================
// 包装产线SPC监控系统 - 会话配置
// ==========================================
// 职责: 监控会话参数与基线策略
// 原则: 基线策略独立于监控期sigma,可替换而不触及规则评估器
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 默认监控sigma (受控低方差)
pub const DEFAULT_SIGMA: f64 = 0.03;

// ==========================================
// BaselinePolicy - 基线策略
// ==========================================
// 固定策略: 前50小时 @ sigma=0.03,与用户选择的监控sigma无关
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselinePolicy {
    pub window_hours: u64, // 基线窗口长度 (小时)
    pub sigma: f64,        // 基线期固定sigma
}

impl Default for BaselinePolicy {
    fn default() -> Self {
        Self {
            window_hours: 50,
            sigma: DEFAULT_SIGMA,
        }
    }
}

// ==========================================
// RenderMode - 渲染模式
// ==========================================
// 核心层只透传该选择,渲染本身由外部协作者完成
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RenderMode {
    Text, // 纯文本逐行输出
    Json, // 行分隔JSON记录 (机器可读)
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Text => write!(f, "TEXT"),
            RenderMode::Json => write!(f, "JSON"),
        }
    }
}

// ==========================================
// SimulationConfig - 监控会话配置
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub sigma: f64,               // 监控期产量方差参数 (>= 0)
    pub render_mode: RenderMode,  // 渲染模式选择
    pub baseline: BaselinePolicy, // 基线策略
    pub seed: Option<u64>,        // 随机种子 (None = 系统熵,Some = 可复现)
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sigma: DEFAULT_SIGMA,
            render_mode: RenderMode::Text,
            baseline: BaselinePolicy::default(),
            seed: None,
        }
    }
}
