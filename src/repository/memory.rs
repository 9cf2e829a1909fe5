// ==========================================
// 教师代课分配系统 - 内存排班存储
// ==========================================
// 职责: ScheduleReader 的内存实现
// 用途: 单元/集成测试的假存储;同时作为各读取契约
//       过滤语义的参考实现
// 红线: 过滤规则与生产查询保持一致
//       (资质有效性、在职状态、半开区间)
// ==========================================

use crate::domain::offset_class::{OffsetClass, ScheduledSlot};
use crate::domain::schedule::{FixedSchedule, FixedScheduleLeave, WorkShift};
use crate::domain::teacher::{QualifiedCandidate, SubjectLevelQualification, Teacher};
use crate::domain::types::{ClassStatus, DayOfWeek};
use crate::repository::error::RepositoryResult;
use crate::repository::reader::ScheduleReader;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::RwLock;

// ==========================================
// 内部数据集
// ==========================================
#[derive(Debug, Default)]
struct Inner {
    teachers: Vec<Teacher>,
    qualifications: Vec<SubjectLevelQualification>,
    work_shifts: Vec<WorkShift>,
    fixed_schedules: Vec<FixedSchedule>,
    leaves: Vec<FixedScheduleLeave>,
    offset_classes: Vec<OffsetClass>,
}

// ==========================================
// InMemoryScheduleStore
// ==========================================
#[derive(Debug, Default)]
pub struct InMemoryScheduleStore {
    inner: RwLock<Inner>,
}

impl InMemoryScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== 数据装载辅助 =====

    pub fn insert_teacher(&self, teacher: Teacher) {
        self.inner.write().expect("store lock").teachers.push(teacher);
    }

    pub fn insert_qualification(&self, qualification: SubjectLevelQualification) {
        self.inner
            .write()
            .expect("store lock")
            .qualifications
            .push(qualification);
    }

    pub fn insert_work_shift(&self, shift: WorkShift) {
        self.inner.write().expect("store lock").work_shifts.push(shift);
    }

    pub fn insert_fixed_schedule(&self, schedule: FixedSchedule) {
        self.inner
            .write()
            .expect("store lock")
            .fixed_schedules
            .push(schedule);
    }

    pub fn insert_leave(&self, leave: FixedScheduleLeave) {
        self.inner.write().expect("store lock").leaves.push(leave);
    }

    pub fn insert_offset_class(&self, class: OffsetClass) {
        self.inner
            .write()
            .expect("store lock")
            .offset_classes
            .push(class);
    }
}

#[async_trait]
impl ScheduleReader for InMemoryScheduleStore {
    async fn list_qualified_teachers(
        &self,
        subject_level_id: &str,
    ) -> RepositoryResult<Vec<QualifiedCandidate>> {
        let inner = self.inner.read().expect("store lock");
        let mut candidates = Vec::new();

        // 有效资质 × 在职教师 连接
        for qualification in &inner.qualifications {
            if qualification.subject_level_id != subject_level_id || !qualification.is_active {
                continue;
            }
            let teacher = inner
                .teachers
                .iter()
                .find(|t| t.teacher_id == qualification.teacher_id);
            if let Some(teacher) = teacher {
                if teacher.is_active() {
                    candidates.push(QualifiedCandidate {
                        teacher: teacher.clone(),
                        experience_years: qualification.experience_years,
                    });
                }
            }
        }

        Ok(candidates)
    }

    async fn list_work_shifts(
        &self,
        teacher_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RepositoryResult<Vec<WorkShift>> {
        let inner = self.inner.read().expect("store lock");
        Ok(inner
            .work_shifts
            .iter()
            .filter(|s| s.teacher_id == teacher_id && s.date >= from && s.date < to)
            .cloned()
            .collect())
    }

    async fn list_fixed_schedules(
        &self,
        teacher_id: &str,
        day_of_week: Option<DayOfWeek>,
        active_only: bool,
    ) -> RepositoryResult<Vec<FixedSchedule>> {
        let inner = self.inner.read().expect("store lock");
        Ok(inner
            .fixed_schedules
            .iter()
            .filter(|s| s.teacher_id == teacher_id)
            .filter(|s| day_of_week.map_or(true, |day| s.day_of_week == day))
            .filter(|s| !active_only || s.is_active)
            .cloned()
            .collect())
    }

    async fn list_fixed_schedule_leaves(
        &self,
        teacher_id: &str,
        fixed_schedule_id: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RepositoryResult<Vec<FixedScheduleLeave>> {
        let inner = self.inner.read().expect("store lock");
        Ok(inner
            .leaves
            .iter()
            .filter(|l| {
                l.teacher_id == teacher_id
                    && l.fixed_schedule_id == fixed_schedule_id
                    && l.date >= from
                    && l.date < to
            })
            .cloned()
            .collect())
    }

    async fn list_offset_like_classes(
        &self,
        teacher_id: &str,
        statuses: &[ClassStatus],
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> RepositoryResult<Vec<ScheduledSlot>> {
        let inner = self.inner.read().expect("store lock");
        Ok(inner
            .offset_classes
            .iter()
            .filter(|c| c.assigned_teacher_id.as_deref() == Some(teacher_id))
            .filter(|c| statuses.contains(&c.status))
            .filter(|c| c.scheduled_date >= from && c.scheduled_date < to)
            .map(|c| ScheduledSlot {
                scheduled_date: c.scheduled_date,
                start_time: c.start_time.clone(),
                end_time: c.end_time.clone(),
                status: c.status,
            })
            .collect())
    }

    async fn find_offset_class(
        &self,
        class_id: &str,
    ) -> RepositoryResult<Option<OffsetClass>> {
        let inner = self.inner.read().expect("store lock");
        Ok(inner
            .offset_classes
            .iter()
            .find(|c| c.class_id == class_id)
            .cloned())
    }
}
