// ==========================================
// 包装产线SPC监控系统 - 配置层
// ==========================================
// 职责: 会话级配置管理 (sigma、渲染模式、基线策略)
// 存储: 内存配置对象,会话开始时一次性给定
// ==========================================

pub mod session;

// 重导出核心配置类型
pub use session::{BaselinePolicy, RenderMode, SimulationConfig};
