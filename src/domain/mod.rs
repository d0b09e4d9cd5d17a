// ==========================================
// 包装产线SPC监控系统 - 领域层
// ==========================================
// 职责: 领域实体与值对象定义,不含业务流程
// ==========================================

pub mod alarm;
pub mod limits;
pub mod line;
pub mod observation;

// 重导出核心实体
pub use alarm::{HourlyRecord, RuleId, RuleResult, RuleViolation};
pub use limits::ControlLimits;
pub use line::{Line, LineRegistry, HOURS_PER_MONTH};
pub use observation::{History, Observation};
