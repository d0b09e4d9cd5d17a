// ==========================================
// 包装产线SPC监控系统 - 核心库
// ==========================================
// 系统定位: 近实时统计过程控制 (SPC p-chart) 监控与报警引擎
// 统计模型: Normal产量抽样 + Poisson缺陷抽样 + Nelson规则1-4
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 统计核心与会话编排
pub mod engine;

// 配置层 - 会话配置与基线策略
pub mod config;

// 渲染层 - 外部协作者 (文本/JSON)
pub mod render;

// 错误类型
pub mod error;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    ControlLimits, History, HourlyRecord, Line, LineRegistry, Observation, RuleId, RuleResult,
    RuleViolation,
};

// 引擎
pub use engine::{
    ControlLimitEstimator, HourlySampler, RuleEvaluator, SessionState, Simulation,
};

// 配置
pub use config::{BaselinePolicy, RenderMode, SimulationConfig};

// 错误
pub use error::SpcError;

/// 系统版本号
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
