// ==========================================
// 包装产线SPC监控系统 - 仿真会话引擎
// ==========================================
// 职责: 会话状态机与逐小时编排
// 流程: 基线采集 → 控制限冻结 → 监控循环
// 每小时: 采样 → 追加历史 → 规则评估 → 输出记录批次
// ==========================================
// 状态机: Uninitialized → BaselineCollection → Monitoring → Terminated
// 调度: 由外部驱动方逐小时推进 (step),核心不阻塞等待渲染
// ==========================================

use crate::config::SimulationConfig;
use crate::domain::alarm::HourlyRecord;
use crate::domain::limits::ControlLimits;
use crate::domain::line::{Line, LineRegistry};
use crate::domain::observation::History;
use crate::engine::limits::ControlLimitEstimator;
use crate::engine::rules::RuleEvaluator;
use crate::engine::sampler::HourlySampler;
use crate::error::SpcError;
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ==========================================
// SessionState - 会话状态
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionState {
    Uninitialized,      // 已创建,未开始
    BaselineCollection, // 基线采集中
    Monitoring,         // 监控中
    Terminated,         // 已终止
}

impl SessionState {
    fn name(&self) -> &'static str {
        match self {
            SessionState::Uninitialized => "UNINITIALIZED",
            SessionState::BaselineCollection => "BASELINE_COLLECTION",
            SessionState::Monitoring => "MONITORING",
            SessionState::Terminated => "TERMINATED",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ==========================================
// LineMonitor - 单产线监控聚合
// ==========================================
// 每条产线独占自己的历史与控制限,线间无共享可变状态
struct LineMonitor {
    line: Line,
    history: History,
    limits: Option<ControlLimits>, // 基线冻结后为 Some,此后只读
}

impl LineMonitor {
    fn new(line: Line) -> Self {
        Self {
            line,
            history: History::new(),
            limits: None,
        }
    }
}

// ==========================================
// Simulation - 仿真会话
// ==========================================
pub struct Simulation {
    session_id: Uuid,
    config: SimulationConfig,
    state: SessionState,
    hour: u64, // 已完成的小时数 (基线+监控累计,单调递增)
    monitors: Vec<LineMonitor>,
    sampler: HourlySampler,
    estimator: ControlLimitEstimator,
    evaluator: RuleEvaluator,
    rng: StdRng,
}

impl Simulation {
    /// 创建会话 (Uninitialized)
    pub fn new(registry: LineRegistry, config: SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let monitors = registry
            .lines()
            .iter()
            .cloned()
            .map(LineMonitor::new)
            .collect();

        Self {
            session_id: Uuid::new_v4(),
            config,
            state: SessionState::Uninitialized,
            hour: 0,
            monitors,
            sampler: HourlySampler::new(),
            estimator: ControlLimitEstimator::new(),
            evaluator: RuleEvaluator::new(),
            rng,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// 已完成的小时数 (含基线期)
    pub fn hours_elapsed(&self) -> u64 {
        self.hour
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// 指定产线的冻结控制限 (基线完成前为 None)
    pub fn limits_for(&self, line_name: &str) -> Option<ControlLimits> {
        self.monitors
            .iter()
            .find(|m| m.line.name == line_name)
            .and_then(|m| m.limits)
    }

    // ==========================================
    // 启动: 基线采集与控制限冻结
    // ==========================================

    /// 运行基线期并冻结所有产线控制限
    ///
    /// 基线策略固定 (默认50小时 @ sigma=0.03),与监控期sigma无关。
    /// 全部产线冻结成功后转入 Monitoring。
    ///
    /// # 错误
    /// - `InvalidState`: 会话已启动或已终止
    /// - `InvalidBaseline`: 某产线基线均值产量为0 (会话启动失败,致命)
    pub fn start(&mut self) -> Result<(), SpcError> {
        if self.state != SessionState::Uninitialized {
            return Err(SpcError::InvalidState {
                from: self.state.name(),
                operation: "start",
            });
        }

        self.transition(SessionState::BaselineCollection);
        let policy = self.config.baseline;
        tracing::info!(
            window_hours = policy.window_hours,
            sigma = policy.sigma,
            lines = self.monitors.len(),
            "开始基线采集"
        );

        // 基线采集: 每条产线独立采样 window_hours 小时
        for hour in 1..=policy.window_hours {
            for monitor in &mut self.monitors {
                let observation =
                    self.sampler
                        .generate(&monitor.line, hour, policy.sigma, &mut self.rng);
                monitor.history.push(observation);
            }
        }
        self.hour = policy.window_hours;

        // 控制限冻结: 任一产线失败即会话启动失败
        for monitor in &mut self.monitors {
            let limits = self
                .estimator
                .estimate(&monitor.line.name, monitor.history.observations())?;

            tracing::info!(
                line = %monitor.line.name,
                cl = limits.cl,
                ucl = limits.ucl,
                lcl = limits.lcl,
                "控制限已冻结"
            );
            monitor.limits = Some(limits);

            // 基线窗口仅用于估计,监控历史从空序列重新积累:
            // 规则2-4的窗口只能由监控期观测构成
            monitor.history = History::new();
        }

        self.transition(SessionState::Monitoring);
        Ok(())
    }

    // ==========================================
    // 监控: 逐小时推进
    // ==========================================

    /// 推进一个监控小时,返回本小时全部产线的有序记录批次
    ///
    /// 顺序保证: 批次顺序 = 注册表产线顺序;
    /// 本小时所有产线完成 采样→追加→评估 后才返回,不阻塞于渲染。
    ///
    /// # 错误
    /// - `InvalidState`: 会话不处于 Monitoring
    pub fn step(&mut self) -> Result<Vec<HourlyRecord>, SpcError> {
        if self.state != SessionState::Monitoring {
            return Err(SpcError::InvalidState {
                from: self.state.name(),
                operation: "step",
            });
        }

        self.hour += 1;
        let hour = self.hour;
        let sigma = self.config.sigma;
        let mut records = Vec::with_capacity(self.monitors.len());

        for monitor in &mut self.monitors {
            // 产线级故障隔离: 无冻结控制限的产线跳过本小时,其余照常
            let Some(limits) = monitor.limits else {
                tracing::warn!(
                    line = %monitor.line.name,
                    hour,
                    "产线缺少冻结控制限,本小时跳过"
                );
                continue;
            };

            let observation = self
                .sampler
                .generate(&monitor.line, hour, sigma, &mut self.rng);
            monitor.history.push(observation);

            let result = self
                .evaluator
                .inspect(&monitor.history.defect_rates(), &limits);

            if result.out_of_control {
                for violation in &result.fired {
                    tracing::warn!(
                        line = %monitor.line.name,
                        hour,
                        rule = %violation.rule,
                        "检测到失控: {}",
                        violation.rule.description()
                    );
                }
            }

            records.push(HourlyRecord {
                session_id: self.session_id,
                line_name: monitor.line.name.clone(),
                hour,
                observation,
                limits,
                result,
                recorded_at: Utc::now(),
            });
        }

        tracing::info!(
            hour,
            lines = records.len(),
            out_of_control = records.iter().filter(|r| r.result.out_of_control).count(),
            "监控小时完成"
        );

        Ok(records)
    }

    // ==========================================
    // 终止
    // ==========================================

    /// 外部停止信号: 转入 Terminated,此后 step 拒绝执行
    pub fn stop(&mut self) {
        if self.state != SessionState::Terminated {
            self.transition(SessionState::Terminated);
            tracing::info!(hours = self.hour, "仿真会话终止");
        }
    }

    fn transition(&mut self, next: SessionState) {
        tracing::debug!(from = %self.state, to = %next, "会话状态转换");
        self.state = next;
    }
}
