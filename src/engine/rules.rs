// ==========================================
// 包装产线SPC监控系统 - 规则评估引擎
// ==========================================
// 职责: 对产线缺陷率历史应用 Nelson/Western Electric 前4条规则
// 输入: 完整历史缺陷率序列 + 冻结控制限
// 输出: RuleResult (触发规则集合 + 失控标志)
// ==========================================
// 约定: 评估始终锚定最新点,仅检查各规则的末尾窗口;
//       历史不足某规则最小窗口时跳过该规则 (非错误);
//       各规则相互独立,可同时触发,结果按规则编号并集
// ==========================================

use crate::domain::alarm::{RuleId, RuleResult, RuleViolation};
use crate::domain::limits::ControlLimits;

// ==========================================
// Trait: NelsonRule
// ==========================================
// 用途: 规则为同一历史尾部上的独立谓词,便于后续扩展规则5-8
pub trait NelsonRule {
    /// 规则编号
    fn id(&self) -> RuleId;

    /// 规则最小窗口长度 (历史不足时跳过)
    fn min_points(&self) -> usize;

    /// 评估规则,触发时返回涉及的历史点下标 (升序)
    fn evaluate(&self, rates: &[f64], limits: &ControlLimits) -> Option<Vec<usize>>;
}

/// 末尾 window 个点的下标序列
fn tail_indices(len: usize, window: usize) -> Vec<usize> {
    (len - window..len).collect()
}

// ==========================================
// 规则1 - 单点越限
// ==========================================
// 最新点严格大于UCL或严格小于LCL
pub struct Rule1PointBeyondLimits;

impl NelsonRule for Rule1PointBeyondLimits {
    fn id(&self) -> RuleId {
        RuleId::Rule1
    }

    fn min_points(&self) -> usize {
        1
    }

    fn evaluate(&self, rates: &[f64], limits: &ControlLimits) -> Option<Vec<usize>> {
        let last = *rates.last()?;

        // 恰好落在控制限上不算越限 (严格不等)
        if last > limits.ucl || last < limits.lcl {
            Some(vec![rates.len() - 1])
        } else {
            None
        }
    }
}

// ==========================================
// 规则2 - 系统性偏移
// ==========================================
// 末7点全部严格高于CL,或全部严格低于CL
pub struct Rule2SystematicShift;

impl Rule2SystematicShift {
    const WINDOW: usize = 7;
}

impl NelsonRule for Rule2SystematicShift {
    fn id(&self) -> RuleId {
        RuleId::Rule2
    }

    fn min_points(&self) -> usize {
        Self::WINDOW
    }

    fn evaluate(&self, rates: &[f64], limits: &ControlLimits) -> Option<Vec<usize>> {
        let tail = &rates[rates.len() - Self::WINDOW..];

        let all_above = tail.iter().all(|&r| r > limits.cl);
        let all_below = tail.iter().all(|&r| r < limits.cl);

        // 恰好等于CL的点不属于任何一侧,会打断同侧连续
        if all_above || all_below {
            Some(tail_indices(rates.len(), Self::WINDOW))
        } else {
            None
        }
    }
}

// ==========================================
// 规则3 - 趋势
// ==========================================
// 末6点严格单调递增或严格单调递减
pub struct Rule3Trend;

impl Rule3Trend {
    const WINDOW: usize = 6;
}

impl NelsonRule for Rule3Trend {
    fn id(&self) -> RuleId {
        RuleId::Rule3
    }

    fn min_points(&self) -> usize {
        Self::WINDOW
    }

    fn evaluate(&self, rates: &[f64], limits: &ControlLimits) -> Option<Vec<usize>> {
        let _ = limits; // 趋势检测不依赖控制限
        let tail = &rates[rates.len() - Self::WINDOW..];

        let increasing = tail.windows(2).all(|w| w[0] < w[1]);
        let decreasing = tail.windows(2).all(|w| w[0] > w[1]);

        // 任一相等步长即打断严格单调
        if increasing || decreasing {
            Some(tail_indices(rates.len(), Self::WINDOW))
        } else {
            None
        }
    }
}

// ==========================================
// 规则4 - 外区聚集
// ==========================================
// 末4点全部位于同侧外1/3区 (A区,含边界),且均未越出UCL/LCL
// 与规则1区分: 越限由规则1单独报告,两者可同时触发
pub struct Rule4OuterZoneCluster;

impl Rule4OuterZoneCluster {
    const WINDOW: usize = 4;
}

impl NelsonRule for Rule4OuterZoneCluster {
    fn id(&self) -> RuleId {
        RuleId::Rule4
    }

    fn min_points(&self) -> usize {
        Self::WINDOW
    }

    fn evaluate(&self, rates: &[f64], limits: &ControlLimits) -> Option<Vec<usize>> {
        let tail = &rates[rates.len() - Self::WINDOW..];

        let upper_boundary = limits.upper_outer_boundary();
        let lower_boundary = limits.lower_outer_boundary();

        // 零宽外区无聚集可言: UCL=CL (或 CL=LCL) 时整侧塌缩到中心线,
        // 恒为0的受控序列不得在此侧报警
        let clustered_upper = limits.ucl > limits.cl
            && tail.iter().all(|&r| r >= upper_boundary && r <= limits.ucl);
        let clustered_lower = limits.cl > limits.lcl
            && tail.iter().all(|&r| r <= lower_boundary && r >= limits.lcl);

        if clustered_upper || clustered_lower {
            Some(tail_indices(rates.len(), Self::WINDOW))
        } else {
            None
        }
    }
}

// ==========================================
// RuleEvaluator - 规则评估引擎
// ==========================================
pub struct RuleEvaluator {
    rules: Vec<Box<dyn NelsonRule + Send + Sync>>,
}

impl RuleEvaluator {
    /// 标准评估器: 规则1-4
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(Rule1PointBeyondLimits),
                Box::new(Rule2SystematicShift),
                Box::new(Rule3Trend),
                Box::new(Rule4OuterZoneCluster),
            ],
        }
    }

    /// 评估完整历史,返回本小时规则结果
    ///
    /// # 保证
    /// - 各规则独立评估,结果为并集 (按规则编号升序)
    /// - 历史不足某规则窗口时该规则跳过,不报错
    pub fn inspect(&self, rates: &[f64], limits: &ControlLimits) -> RuleResult {
        let mut fired = Vec::new();

        for rule in &self.rules {
            // 逐规则窗口防护
            if rates.len() < rule.min_points() {
                continue;
            }

            if let Some(points) = rule.evaluate(rates, limits) {
                fired.push(RuleViolation {
                    rule: rule.id(),
                    points,
                });
            }
        }

        fired.sort_by_key(|v| v.rule.number());
        RuleResult::from_violations(fired)
    }
}

impl Default for RuleEvaluator {
    fn default() -> Self {
        Self::new()
    }
}
