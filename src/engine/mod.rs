// ==========================================
// 包装产线SPC监控系统 - 引擎层
// ==========================================
// 职责: 统计核心 (采样/控制限估计/规则评估) 与会话编排
// ==========================================

pub mod limits;
pub mod rules;
pub mod sampler;
pub mod simulation;

// 重导出核心引擎
pub use limits::ControlLimitEstimator;
pub use rules::{NelsonRule, RuleEvaluator};
pub use sampler::HourlySampler;
pub use simulation::{SessionState, Simulation};
