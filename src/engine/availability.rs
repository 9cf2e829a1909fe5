// ==========================================
// 教师代课分配系统 - 可用性检测引擎
// ==========================================
// 职责: 对单个教师 × 日期 × 时段做三源冲突扫描
// 冲突源: ① 班次安排 ② 固定课表 ③ 同日其他调课课次
// 输出: Available / Rejected(原因) 二元结果,
//       仅在进入评分时折算为 0 / 100
// 红线: 任一源命中冲突立即短路;所有拒绝必须输出原因
// ==========================================

use crate::config::AllocationConfig;
use crate::domain::offset_class::ClassRequest;
use crate::engine::civil_day::LocalDayNormalizer;
use crate::engine::time_arith::TimeArithmetic;
use crate::repository::error::RepositoryResult;
use crate::repository::reader::ScheduleReader;
use chrono::Duration;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument};

// ==========================================
// RejectionReason - 拒绝原因
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub enum RejectionReason {
    /// 当日无覆盖课次开始时刻的可用班次 (含当日完全无班次)
    NoCoveringShift,
    /// 与固定课表重叠
    FixedScheduleConflict {
        class_name: String,
        start_time: String,
        end_time: String,
    },
    /// 与同一民用日的其他调课课次重叠
    OffsetClassConflict {
        start_time: String,
        end_time: String,
    },
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::NoCoveringShift => {
                write!(f, "NO_COVERING_SHIFT: 当日无覆盖开始时刻的可用班次")
            }
            RejectionReason::FixedScheduleConflict {
                class_name,
                start_time,
                end_time,
            } => write!(
                f,
                "FIXED_SCHEDULE_CONFLICT: 与固定课表 {} ({}-{}) 重叠",
                class_name, start_time, end_time
            ),
            RejectionReason::OffsetClassConflict {
                start_time,
                end_time,
            } => write!(
                f,
                "OFFSET_CLASS_CONFLICT: 与同日调课课次 ({}-{}) 重叠",
                start_time, end_time
            ),
        }
    }
}

// ==========================================
// AvailabilityOutcome - 可用性结果
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub enum AvailabilityOutcome {
    Available,
    Rejected(RejectionReason),
}

impl AvailabilityOutcome {
    /// 折算为评分边界使用的数值 (0 / 100)
    pub fn score(&self) -> f64 {
        match self {
            AvailabilityOutcome::Available => 100.0,
            AvailabilityOutcome::Rejected(_) => 0.0,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, AvailabilityOutcome::Available)
    }
}

// ==========================================
// AvailabilityChecker - 可用性检测引擎
// ==========================================
pub struct AvailabilityChecker<R>
where
    R: ScheduleReader,
{
    reader: Arc<R>,
    config: AllocationConfig,
}

impl<R> AvailabilityChecker<R>
where
    R: ScheduleReader,
{
    pub fn new(reader: Arc<R>, config: AllocationConfig) -> Self {
        Self { reader, config }
    }

    /// 检测教师对某课次的可用性
    ///
    /// # 检查顺序 (命中即短路)
    /// 1. 班次: 按 UTC 日界查询当日班次,须存在 is_available=true
    ///    且 [start, end) 覆盖课次开始时刻的班次 (仅开始时刻口径)
    /// 2. 固定课表: 星期匹配的有效课表与课次时段不得重叠
    /// 3. 调课课次: ±36h 粗筛 + 民用日精配,同日课次不得重叠
    ///
    /// # 参数
    /// - teacher_id: 教师标识
    /// - request: 分配请求 (日期 + 时段)
    #[instrument(skip(self, request), fields(teacher_id = %teacher_id))]
    pub async fn check(
        &self,
        teacher_id: &str,
        request: &ClassRequest,
    ) -> RepositoryResult<AvailabilityOutcome> {
        // === 检查 1: 班次覆盖 ===
        let (day_start, day_end) = LocalDayNormalizer::utc_day_bounds(request.scheduled_date);
        let shifts = self
            .reader
            .list_work_shifts(teacher_id, day_start, day_end)
            .await?;

        let covered = shifts.iter().any(|shift| {
            shift.is_available
                && TimeArithmetic::contains(
                    &request.start_time,
                    &request.end_time,
                    &shift.shift_template.start_time,
                    &shift.shift_template.end_time,
                )
        });
        if !covered {
            let outcome = AvailabilityOutcome::Rejected(RejectionReason::NoCoveringShift);
            debug!(reason = %RejectionReason::NoCoveringShift, "可用性拒绝");
            return Ok(outcome);
        }

        // === 检查 2: 固定课表重叠 ===
        let weekday = LocalDayNormalizer::utc_weekday(request.scheduled_date);
        let schedules = self
            .reader
            .list_fixed_schedules(teacher_id, Some(weekday), true)
            .await?;

        for schedule in &schedules {
            if TimeArithmetic::overlaps(
                &request.start_time,
                &request.end_time,
                &schedule.start_time,
                &schedule.end_time,
            ) {
                let reason = RejectionReason::FixedScheduleConflict {
                    class_name: schedule.class_name.clone(),
                    start_time: schedule.start_time.clone(),
                    end_time: schedule.end_time.clone(),
                };
                debug!(reason = %reason, "可用性拒绝");
                return Ok(AvailabilityOutcome::Rejected(reason));
            }
        }

        // === 检查 3: 同日调课课次重叠 ===
        // 存储的 scheduled_date 时分量不可靠: 先用 ±36h 粗筛窗口
        // 避免漏检,再用民用日相等做精配避免误检
        let window = Duration::hours(self.config.conflict_scan_window_hours);
        let slots = self
            .reader
            .list_offset_like_classes(
                teacher_id,
                &crate::domain::types::ClassStatus::occupying(),
                request.scheduled_date - window,
                request.scheduled_date + window,
            )
            .await?;

        let target_day =
            LocalDayNormalizer::civil_day(request.scheduled_date, self.config.civil_offset_hours);
        for slot in &slots {
            let slot_day =
                LocalDayNormalizer::civil_day(slot.scheduled_date, self.config.civil_offset_hours);
            if slot_day != target_day {
                continue;
            }
            if TimeArithmetic::overlaps(
                &request.start_time,
                &request.end_time,
                &slot.start_time,
                &slot.end_time,
            ) {
                let reason = RejectionReason::OffsetClassConflict {
                    start_time: slot.start_time.clone(),
                    end_time: slot.end_time.clone(),
                };
                debug!(reason = %reason, "可用性拒绝");
                return Ok(AvailabilityOutcome::Rejected(reason));
            }
        }

        Ok(AvailabilityOutcome::Available)
    }
}
