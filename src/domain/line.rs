// ==========================================
// 包装产线SPC监控系统 - 产线领域模型
// ==========================================
// 职责: 产线目录与月度统计参数
// 输入: 编译期静态产线表 (无外部配置文件)
// 输出: 每小时统计模型参数 (均值产量/均值缺陷率)
// ==========================================

use crate::error::SpcError;
use serde::{Deserialize, Serialize};

/// 月均工作小时数 (365.25 * 24 / 12 ≈ 730)
pub const HOURS_PER_MONTH: f64 = 730.0;

// ==========================================
// Line - 产线
// ==========================================
// 注册后不可变,整个会话生命周期有效
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    pub name: String,            // 产线名称 (唯一标识)
    pub monthly_production: u64, // 月度产量
    pub monthly_defects: u64,    // 月度缺陷数
}

impl Line {
    /// 创建产线,校验月度参数
    ///
    /// # 错误
    /// - `InvalidLineConfig`: 月产量为0,或缺陷数超过产量
    pub fn new(name: &str, monthly_production: u64, monthly_defects: u64) -> Result<Self, SpcError> {
        if monthly_production == 0 || monthly_defects > monthly_production {
            return Err(SpcError::InvalidLineConfig {
                line: name.to_string(),
                monthly_production,
                monthly_defects,
            });
        }

        Ok(Self {
            name: name.to_string(),
            monthly_production,
            monthly_defects,
        })
    }

    /// 小时均值产量 = 月产量 / 730
    pub fn hourly_production_mean(&self) -> f64 {
        self.monthly_production as f64 / HOURS_PER_MONTH
    }

    /// 小时均值缺陷率 = 月缺陷数 / 月产量
    pub fn hourly_defect_rate_mean(&self) -> f64 {
        self.monthly_defects as f64 / self.monthly_production as f64
    }
}

// ==========================================
// LineRegistry - 产线注册表
// ==========================================
// 用途: 静态产线目录,启动时加载,顺序即输出顺序
#[derive(Debug, Clone)]
pub struct LineRegistry {
    lines: Vec<Line>,
}

impl LineRegistry {
    /// 标准8条包装产线目录
    ///
    /// 静态参数表为编译期常量,配置错误在此即为致命错误
    pub fn standard() -> Result<Self, SpcError> {
        Self::from_lines(vec![
            Line::new("First Exterior", 800_000, 11_000)?,
            Line::new("First Interior", 950_000, 10_000)?,
            Line::new("Second Exterior", 800_000, 11_000)?,
            Line::new("Second Interior", 1_045_000, 10_000)?,
            Line::new("Third Exterior", 825_000, 11_000)?,
            Line::new("Third Interior", 2_440_000, 10_000)?,
            Line::new("Fourth Exterior", 908_000, 10_000)?,
            Line::new("Fourth Interior", 798_000, 11_000)?,
        ])
    }

    /// 从产线列表构建注册表
    ///
    /// # 错误
    /// - `InvalidLineConfig`: 产线名称重复
    pub fn from_lines(lines: Vec<Line>) -> Result<Self, SpcError> {
        for (i, line) in lines.iter().enumerate() {
            if lines[..i].iter().any(|l| l.name == line.name) {
                return Err(SpcError::InvalidLineConfig {
                    line: format!("{} (名称重复)", line.name),
                    monthly_production: line.monthly_production,
                    monthly_defects: line.monthly_defects,
                });
            }
        }

        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
