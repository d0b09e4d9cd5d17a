// ==========================================
// 包装产线SPC监控系统 - JSON渲染器
// ==========================================
// 职责: 行分隔JSON输出,便于下游采集
// ==========================================

use crate::domain::alarm::HourlyRecord;
use crate::render::Renderer;

pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Renderer for JsonRenderer {
    fn render_hour(&self, records: &[HourlyRecord]) {
        for record in records {
            match serde_json::to_string(record) {
                Ok(json) => println!("{}", json),
                Err(e) => tracing::error!(line = %record.line_name, "记录序列化失败: {}", e),
            }
        }
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}
