// ==========================================
// 教师代课分配系统 - 分配参数配置
// ==========================================
// 职责: 集中存放评分权重与时间口径参数
// 红线: 默认值即生产口径,调整需评审
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// AllocationConfig - 分配参数
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationConfig {
    /// 工时均衡分权重 (balance 内部): 0.95
    pub hours_weight: f64,
    /// 调课次数均衡分权重 (balance 内部): 0.05
    pub offset_count_weight: f64,
    /// 可用性得分权重 (final 内部): 0.5
    pub availability_weight: f64,
    /// 均衡得分权重 (final 内部): 0.5
    pub balance_weight: f64,
    /// 辅导角色课时折算系数: 0.75
    pub tutor_hour_factor: f64,
    /// 调课冲突粗筛窗口 (小时): ±36
    pub conflict_scan_window_hours: i64,
    /// 民用日历相对 UTC 的偏移 (小时): +7 (Asia/Bangkok 口径)
    pub civil_offset_hours: i64,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            hours_weight: 0.95,
            offset_count_weight: 0.05,
            availability_weight: 0.5,
            balance_weight: 0.5,
            tutor_hour_factor: 0.75,
            conflict_scan_window_hours: 36,
            civil_offset_hours: 7,
        }
    }
}
