// ==========================================
// 包装产线SPC监控系统 - 小时观测领域模型
// ==========================================
// 职责: 单小时观测记录与产线历史序列
// 不变量: defect_count <= production_count, defect_rate ∈ [0,1]
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// Observation - 小时观测
// ==========================================
// 由采样器生成,生成后不可变
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Observation {
    pub hour: u64,             // 小时序号 (1起始,单调递增)
    pub production_count: u64, // 当小时产量
    pub defect_count: u64,     // 当小时缺陷数
    pub defect_rate: f64,      // 缺陷率 (产量为0时定义为0)
}

impl Observation {
    /// 由产量与缺陷数构建观测,缺陷率在此统一推导
    pub fn new(hour: u64, production_count: u64, defect_count: u64) -> Self {
        let defect_count = defect_count.min(production_count);
        let defect_rate = if production_count == 0 {
            0.0
        } else {
            defect_count as f64 / production_count as f64
        };

        Self {
            hour,
            production_count,
            defect_count,
            defect_rate,
        }
    }
}

// ==========================================
// History - 产线观测历史
// ==========================================
// 追加专用,插入顺序即小时顺序,会话期内持续增长
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    observations: Vec<Observation>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, observation: Observation) {
        self.observations.push(observation);
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// 缺陷率序列 (规则评估的输入)
    pub fn defect_rates(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.defect_rate).collect()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }
}
