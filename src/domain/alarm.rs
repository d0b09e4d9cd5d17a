// ==========================================
// 包装产线SPC监控系统 - 报警领域模型
// ==========================================
// 职责: Nelson/Western Electric 规则编号、触发记录与每小时输出元组
// ==========================================

use crate::domain::limits::ControlLimits;
use crate::domain::observation::Observation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ==========================================
// RuleId - 规则编号
// ==========================================
// 仅实现前4条规则,5-8为非目标
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RuleId {
    Rule1, // 单点越限 (UCL/LCL 外)
    Rule2, // 系统性偏移 (连续7点同侧)
    Rule3, // 趋势 (连续6点单调)
    Rule4, // 外区聚集 (末4点同侧A区)
}

impl RuleId {
    pub fn number(&self) -> u8 {
        match self {
            RuleId::Rule1 => 1,
            RuleId::Rule2 => 2,
            RuleId::Rule3 => 3,
            RuleId::Rule4 => 4,
        }
    }

    /// 报警说明 (可解释性: 每条报警必须带显式原因)
    pub fn description(&self) -> &'static str {
        match self {
            RuleId::Rule1 => "控制限越界: 最新点落在 UCL/LCL 之外",
            RuleId::Rule2 => "系统性偏移: 连续7点位于中心线同一侧",
            RuleId::Rule3 => "趋势: 连续6点严格单调递增或递减",
            RuleId::Rule4 => "外区聚集: 连续4点位于同侧外1/3区 (可能为方差增大)",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "规则{}", self.number())
    }
}

// ==========================================
// RuleViolation - 单条规则触发记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleViolation {
    pub rule: RuleId,      // 触发的规则
    pub points: Vec<usize>, // 涉及的历史点下标 (0起始,升序)
}

// ==========================================
// RuleResult - 单产线单小时评估结果
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleResult {
    pub fired: Vec<RuleViolation>, // 触发规则集合 (按规则编号升序)
    pub out_of_control: bool,      // 失控标志 (= fired 非空)
}

impl RuleResult {
    pub fn in_control() -> Self {
        Self::default()
    }

    pub fn from_violations(fired: Vec<RuleViolation>) -> Self {
        let out_of_control = !fired.is_empty();
        Self {
            fired,
            out_of_control,
        }
    }

    /// 指定规则是否触发
    pub fn has_fired(&self, rule: RuleId) -> bool {
        self.fired.iter().any(|v| v.rule == rule)
    }
}

// ==========================================
// HourlyRecord - 每小时输出记录
// ==========================================
// 用途: 核心层对外输出的唯一数据形状,渲染层只读消费
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyRecord {
    pub session_id: Uuid,           // 会话标识
    pub line_name: String,          // 产线名称
    pub hour: u64,                  // 监控小时序号
    pub observation: Observation,   // 当小时观测
    pub limits: ControlLimits,      // 冻结控制限 (渲染用)
    pub result: RuleResult,         // 规则评估结果
    pub recorded_at: DateTime<Utc>, // 记录时间戳
}
