// ==========================================
// 教师代课分配系统 - 排班数据读取 Trait
// ==========================================
// 职责: 定义分配引擎所需的数据读取接口 (不包含实现)
// 红线: 只读契约,不包含写入、不包含业务逻辑
// 实现者: 生产环境为外部持久层适配器,
//         测试环境为 InMemoryScheduleStore
// ==========================================

use crate::domain::offset_class::{OffsetClass, ScheduledSlot};
use crate::domain::schedule::{FixedSchedule, FixedScheduleLeave, WorkShift};
use crate::domain::teacher::QualifiedCandidate;
use crate::domain::types::{ClassStatus, DayOfWeek};
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

// ==========================================
// ScheduleReader Trait
// ==========================================
#[async_trait]
pub trait ScheduleReader: Send + Sync {
    /// 查询持有某科目等级有效资质的在职教师
    ///
    /// # 参数
    /// - subject_level_id: 科目等级标识
    ///
    /// # 返回
    /// - Vec<QualifiedCandidate>: 有效资质 × 在职教师的连接结果
    ///   (is_active=false 的资质、非 ACTIVE 的教师均不出现)
    async fn list_qualified_teachers(
        &self,
        subject_level_id: &str,
    ) -> RepositoryResult<Vec<QualifiedCandidate>>;

    /// 查询教师在 [from, to) 区间内的班次安排
    ///
    /// # 参数
    /// - teacher_id: 教师标识
    /// - from / to: UTC 时间区间 (班次日期以 UTC 零点锚定存储,
    ///   调用方传入 UTC 日界即可得到当日班次)
    async fn list_work_shifts(
        &self,
        teacher_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RepositoryResult<Vec<WorkShift>>;

    /// 查询教师的固定课表
    ///
    /// # 参数
    /// - teacher_id: 教师标识
    /// - day_of_week: 限定星期; None 表示不限 (月度工作量用)
    /// - active_only: 仅返回 is_active=true 的课表
    async fn list_fixed_schedules(
        &self,
        teacher_id: &str,
        day_of_week: Option<DayOfWeek>,
        active_only: bool,
    ) -> RepositoryResult<Vec<FixedSchedule>>;

    /// 查询某固定课表在 [from, to) 区间内的请假记录
    async fn list_fixed_schedule_leaves(
        &self,
        teacher_id: &str,
        fixed_schedule_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RepositoryResult<Vec<FixedScheduleLeave>>;

    /// 查询教师在 [from, to) 区间内、状态属于 statuses 的已排课时段
    ///
    /// # 用途
    /// - 冲突检测 (±36h 粗筛窗口)
    /// - 月度工作量统计 (UTC 月界窗口)
    async fn list_offset_like_classes(
        &self,
        teacher_id: &str,
        statuses: &[ClassStatus],
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RepositoryResult<Vec<ScheduledSlot>>;

    /// 按标识加载调课课次 (重分配入口用)
    ///
    /// # 返回
    /// - None 表示课次不存在
    async fn find_offset_class(
        &self,
        class_id: &str,
    ) -> RepositoryResult<Option<OffsetClass>>;
}
