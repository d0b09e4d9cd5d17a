// ==========================================
// 包装产线SPC监控系统 - 控制限估计引擎
// ==========================================
// 职责: 从基线观测窗口计算并冻结 p-chart 控制限
// 输入: 单产线基线观测序列
// 输出: ControlLimits (CL/UCL/LCL)
// ==========================================
// 算法: p̄ = Σ缺陷 / Σ产量, n̄ = 均值产量
//       UCL = p̄ + 3√(p̄(1−p̄)/n̄), LCL = max(0, p̄ − 3√(p̄(1−p̄)/n̄))
// ==========================================

use crate::domain::limits::ControlLimits;
use crate::domain::observation::Observation;
use crate::error::SpcError;

// ==========================================
// ControlLimitEstimator - 控制限估计引擎
// ==========================================
pub struct ControlLimitEstimator {
    // 无状态引擎,给定窗口输出确定
}

impl ControlLimitEstimator {
    pub fn new() -> Self {
        Self {}
    }

    /// 估计单产线控制限
    ///
    /// # 参数
    /// - `line_name`: 产线名称 (仅用于错误上下文)
    /// - `window`: 基线观测窗口 (有序)
    ///
    /// # 保证
    /// 确定性且幂等: 同一窗口重复估计输出完全一致
    ///
    /// # 错误
    /// - `InvalidBaseline`: 窗口为空或均值产量为0 (除零防护)
    pub fn estimate(
        &self,
        line_name: &str,
        window: &[Observation],
    ) -> Result<ControlLimits, SpcError> {
        let total_production: u64 = window.iter().map(|o| o.production_count).sum();

        if window.is_empty() || total_production == 0 {
            return Err(SpcError::InvalidBaseline {
                line: line_name.to_string(),
            });
        }

        let total_defects: u64 = window.iter().map(|o| o.defect_count).sum();

        // p̄: 基线期整体缺陷率 (加权,而非逐小时缺陷率的简单平均)
        let p_bar = total_defects as f64 / total_production as f64;
        // n̄: 基线期均值产量
        let n_bar = total_production as f64 / window.len() as f64;

        let std_dev = (p_bar * (1.0 - p_bar) / n_bar).sqrt();

        // 缺陷率定义域为 [0,1],控制限同样封顶/封底
        let ucl = (p_bar + 3.0 * std_dev).min(1.0);
        let lcl = (p_bar - 3.0 * std_dev).max(0.0);

        Ok(ControlLimits {
            cl: p_bar,
            ucl,
            lcl,
        })
    }
}

impl Default for ControlLimitEstimator {
    fn default() -> Self {
        Self::new()
    }
}
