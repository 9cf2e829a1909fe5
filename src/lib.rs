// ==========================================
// 教师代课分配系统 - 核心库
// ==========================================
// 系统定位: 调课/补课课次的教师分配引擎
//           (资质过滤 × 冲突检测 × 工作量均衡)
// 调用方式: 由外部服务层进程内调用,本库不持有
//           HTTP / 持久化 / 通知等外围设施
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 只读数据契约
pub mod repository;

// 引擎层 - 分配业务规则
pub mod engine;

// 配置层 - 评分权重与时间口径
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{ClassStatus, DayOfWeek, EmploymentStatus, ScheduleRole};

// 领域实体
pub use domain::{
    ClassRequest, FixedSchedule, FixedScheduleLeave, OffsetClass, QualifiedCandidate,
    ScheduledSlot, ShiftTemplate, SubjectLevelQualification, Teacher, WorkShift,
};

// 引擎
pub use engine::{
    AllocationError, AllocationOutcome, AllocationService, AvailabilityChecker,
    AvailabilityOutcome, BatchAllocationItem, CandidateQualifier, CandidateScore,
    LocalDayNormalizer, NotFoundReason, ScoringEngine, SelectedTeacher, TimeArithmetic,
    WorkloadAggregator, WorkloadSummary,
};

// 仓储
pub use repository::{InMemoryScheduleStore, RepositoryError, RepositoryResult, ScheduleReader};

// 配置
pub use config::AllocationConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "教师代课分配系统";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
