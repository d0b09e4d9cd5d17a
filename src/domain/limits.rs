// ==========================================
// 包装产线SPC监控系统 - 控制限领域模型
// ==========================================
// 职责: p-chart 控制限三元组 (CL/UCL/LCL)
// 不变量: 0 <= LCL <= CL <= UCL <= 1, 基线冻结后不再重算
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// ControlLimits - 冻结控制限
// ==========================================
// 由控制限估计器在基线期结束时生成,此后只读
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlLimits {
    pub cl: f64,  // 中心线 (基线期均值缺陷率 p̄)
    pub ucl: f64, // 上控制限 (p̄ + 3σ, 封顶1.0)
    pub lcl: f64, // 下控制限 (p̄ - 3σ, 封底0.0)
}

impl ControlLimits {
    /// 上侧外区边界 (B/C区分界): CL + 2/3·(UCL−CL)
    ///
    /// Western Electric 约定: CL与UCL之间三等分,外侧1/3为A区
    pub fn upper_outer_boundary(&self) -> f64 {
        self.cl + (self.ucl - self.cl) * 2.0 / 3.0
    }

    /// 下侧外区边界: CL − 2/3·(CL−LCL)
    pub fn lower_outer_boundary(&self) -> f64 {
        self.cl - (self.cl - self.lcl) * 2.0 / 3.0
    }
}

// ==========================================
// 测试模块
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outer_zone_boundaries() {
        let limits = ControlLimits {
            cl: 0.010,
            ucl: 0.019,
            lcl: 0.001,
        };
        assert!((limits.upper_outer_boundary() - 0.016).abs() < 1e-12);
        assert!((limits.lower_outer_boundary() - 0.004).abs() < 1e-12);
    }

    #[test]
    fn test_boundaries_degenerate_when_limits_collapse() {
        // UCL = CL = LCL 时边界同样塌缩到CL
        let limits = ControlLimits {
            cl: 0.01,
            ucl: 0.01,
            lcl: 0.01,
        };
        assert_eq!(limits.upper_outer_boundary(), 0.01);
        assert_eq!(limits.lower_outer_boundary(), 0.01);
    }
}
