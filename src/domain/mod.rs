// ==========================================
// 教师代课分配系统 - 领域层
// ==========================================
// 职责: 实体与类型定义,不含业务规则
// ==========================================

pub mod offset_class;
pub mod schedule;
pub mod teacher;
pub mod types;

// 重导出领域实体
pub use offset_class::{ClassRequest, OffsetClass, ScheduledSlot};
pub use schedule::{FixedSchedule, FixedScheduleLeave, ShiftTemplate, WorkShift};
pub use teacher::{QualifiedCandidate, SubjectLevelQualification, Teacher};
pub use types::{ClassStatus, DayOfWeek, EmploymentStatus, ScheduleRole};
