// ==========================================
// 教师代课分配系统 - 引擎层
// ==========================================
// 职责: 实现分配业务规则,不做持久化
// 红线: Engine 只经 ScheduleReader 读数据,
//       所有拒绝/失败必须输出 reason
// ==========================================

pub mod allocator;
pub mod availability;
pub mod civil_day;
pub mod qualifier;
pub mod scoring;
pub mod time_arith;
pub mod workload;

// 重导出核心引擎
pub use allocator::{
    AllocationError, AllocationOutcome, AllocationService, BatchAllocationItem, NotFoundReason,
    SelectedTeacher,
};
pub use availability::{AvailabilityChecker, AvailabilityOutcome, RejectionReason};
pub use civil_day::{LocalDayNormalizer, DEFAULT_CIVIL_OFFSET_HOURS};
pub use qualifier::{CandidateQualifier, QualificationPool};
pub use scoring::{CandidateScore, ScoringEngine};
pub use time_arith::TimeArithmetic;
pub use workload::{occurrences_of_weekday_in_month, WorkloadAggregator, WorkloadSummary};
