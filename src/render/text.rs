// ==========================================
// 包装产线SPC监控系统 - 文本渲染器
// ==========================================
// 职责: 每小时控制台文本报告 (逐产线产量/缺陷/规则结论)
// ==========================================

use crate::domain::alarm::HourlyRecord;
use crate::render::Renderer;

pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self {}
    }
}

impl Renderer for TextRenderer {
    fn render_hour(&self, records: &[HourlyRecord]) {
        let hour = records.first().map(|r| r.hour).unwrap_or(0);
        println!("{}", "=".repeat(72));
        println!("监控小时 {}", hour);
        println!("{}", "=".repeat(72));

        for record in records {
            println!("📍 {}", record.line_name);
            println!(
                "   产量: {} | 缺陷: {} | 缺陷率: {:.5}",
                record.observation.production_count,
                record.observation.defect_count,
                record.observation.defect_rate
            );

            if record.result.out_of_control {
                for violation in &record.result.fired {
                    println!("   ⚠️ {}: {}", violation.rule, violation.rule.description());
                }
            } else {
                println!("   ✓ 过程受控");
            }
            println!();
        }
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}
