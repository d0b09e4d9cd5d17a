// ==========================================
// 包装产线SPC监控系统 - 渲染层
// ==========================================
// 职责: 消费核心层每小时记录批次的外部协作者
// 原则: 只读消费 HourlyRecord,不回写核心状态
// ==========================================

pub mod json;
pub mod text;

pub use json::JsonRenderer;
pub use text::TextRenderer;

use crate::domain::alarm::HourlyRecord;

// ==========================================
// Trait: Renderer
// ==========================================
pub trait Renderer {
    /// 渲染单个监控小时的记录批次
    fn render_hour(&self, records: &[HourlyRecord]);
}
