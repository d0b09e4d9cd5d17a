// ==========================================
// 包装产线SPC监控系统 - 错误类型
// ==========================================
// 职责: 定义核心层错误类型
// 原则: 配置级错误启动即致命,仿真级故障按产线隔离后继续
// 所有错误信息必须包含显式原因 (可解释性)
// ==========================================

use thiserror::Error;

/// 核心层错误类型
#[derive(Error, Debug)]
pub enum SpcError {
    // ==========================================
    // 配置级错误 (启动时致命)
    // ==========================================
    /// 产线月度参数非法 (注册表加载时校验)
    #[error("产线配置非法: line={line}, monthly_production={monthly_production}, monthly_defects={monthly_defects}")]
    InvalidLineConfig {
        line: String,
        monthly_production: u64,
        monthly_defects: u64,
    },

    /// 基线窗口均值产量为0,无法估计控制限
    #[error("基线数据非法: line={line}, 基线窗口均值产量为0,无法计算控制限")]
    InvalidBaseline { line: String },

    // ==========================================
    // 会话状态错误 (驱动方使用错误)
    // ==========================================
    /// 非法的会话状态转换
    #[error("非法的会话状态转换: from={from} 不允许执行 {operation}")]
    InvalidState {
        from: &'static str,
        operation: &'static str,
    },
}
