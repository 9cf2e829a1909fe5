// ==========================================
// 教师代课分配系统 - 月度工作量引擎
// ==========================================
// 职责: 计算教师当前日历月 (UTC 月界) 的已承诺工作量
// 构成: 固定课表投影 (扣除请假,按角色加权)
//       + 调课课时 + 调课次数
// 红线: 每次分配调用全量重算,不做缓存
//       (候选池规模小,分配不在低延迟路径上)
// ==========================================

use crate::config::AllocationConfig;
use crate::domain::types::{ClassStatus, DayOfWeek, ScheduleRole};
use crate::engine::civil_day::LocalDayNormalizer;
use crate::engine::time_arith::TimeArithmetic;
use crate::repository::error::RepositoryResult;
use crate::repository::reader::ScheduleReader;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, instrument};

// ==========================================
// WorkloadSummary - 工作量汇总
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkloadSummary {
    /// 当月总课时 (固定课表 + 调课)
    pub total_hours: f64,
    /// 当月调课课次数
    pub offset_count: usize,
}

/// 统计某星期在月内的发生次数
///
/// 同时约束课表生效窗口与请假剔除;独立纯函数,
/// 工作量统计与报表共用。
///
/// # 参数
/// - month_start: 月初日期 (含)
/// - month_end: 次月初日期 (不含)
/// - weekday: 目标星期
/// - valid_from / valid_to: 课表生效窗口 (含两端,None 不限)
/// - leave_dates: 请假日期集合 (已做民用日归一)
///
/// # 返回
/// - 满足全部约束的日期数
pub fn occurrences_of_weekday_in_month(
    month_start: NaiveDate,
    month_end: NaiveDate,
    weekday: DayOfWeek,
    valid_from: Option<NaiveDate>,
    valid_to: Option<NaiveDate>,
    leave_dates: &HashSet<NaiveDate>,
) -> u32 {
    let mut count = 0;
    let mut day = month_start;
    while day < month_end {
        let in_validity = valid_from.map_or(true, |from| day >= from)
            && valid_to.map_or(true, |to| day <= to);
        if DayOfWeek::from_weekday(chrono::Datelike::weekday(&day)) == weekday
            && in_validity
            && !leave_dates.contains(&day)
        {
            count += 1;
        }
        day += Duration::days(1);
    }
    count
}

// ==========================================
// WorkloadAggregator - 月度工作量引擎
// ==========================================
pub struct WorkloadAggregator<R>
where
    R: ScheduleReader,
{
    reader: Arc<R>,
    config: AllocationConfig,
}

impl<R> WorkloadAggregator<R>
where
    R: ScheduleReader,
{
    pub fn new(reader: Arc<R>, config: AllocationConfig) -> Self {
        Self { reader, config }
    }

    /// 汇总教师在 now 所在 UTC 日历月的工作量
    ///
    /// # 计算口径
    /// 1. 固定课表: 每周课时 × 月内发生次数 (生效窗口内、
    ///    剔除请假),TUTOR 角色课时按 0.75 折算
    /// 2. 调课: PENDING/ASSIGNED/COMPLETED 课次的课时之和
    /// 3. total_hours = ① + ②;offset_count = ② 的条数
    #[instrument(skip(self), fields(teacher_id = %teacher_id))]
    pub async fn assess(
        &self,
        teacher_id: &str,
        now: DateTime<Utc>,
    ) -> RepositoryResult<WorkloadSummary> {
        let (month_start, month_end) = LocalDayNormalizer::utc_month_bounds(now);

        // === 固定课表课时 ===
        let schedules = self
            .reader
            .list_fixed_schedules(teacher_id, None, true)
            .await?;

        let mut fixed_hours = 0.0;
        for schedule in &schedules {
            let mut hours_per_session =
                TimeArithmetic::duration_hours(&schedule.start_time, &schedule.end_time);
            if schedule.role == ScheduleRole::Tutor {
                hours_per_session *= self.config.tutor_hour_factor;
            }
            if hours_per_session == 0.0 {
                continue;
            }

            // 请假日期的存储时分量同样不可靠: 月初前一天起取宽窗口
            // 粗筛,再用民用日归一精配 (与调课冲突扫描同一口径)
            let leaves = self
                .reader
                .list_fixed_schedule_leaves(
                    teacher_id,
                    &schedule.fixed_schedule_id,
                    month_start - Duration::days(1),
                    month_end,
                )
                .await?;
            let leave_dates: HashSet<NaiveDate> = leaves
                .iter()
                .map(|l| LocalDayNormalizer::civil_day(l.date, self.config.civil_offset_hours))
                .collect();

            let sessions = occurrences_of_weekday_in_month(
                month_start.date_naive(),
                month_end.date_naive(),
                schedule.day_of_week,
                schedule.start_date.map(|d| d.date_naive()),
                schedule.end_date.map(|d| d.date_naive()),
                &leave_dates,
            );

            fixed_hours += hours_per_session * f64::from(sessions);
        }

        // === 调课课时与次数 ===
        let slots = self
            .reader
            .list_offset_like_classes(
                teacher_id,
                &ClassStatus::occupying(),
                month_start,
                month_end,
            )
            .await?;
        let offset_hours: f64 = slots
            .iter()
            .map(|s| TimeArithmetic::duration_hours(&s.start_time, &s.end_time))
            .sum();
        let offset_count = slots.len();

        let summary = WorkloadSummary {
            total_hours: fixed_hours + offset_hours,
            offset_count,
        };
        debug!(
            fixed_hours,
            offset_hours,
            offset_count,
            "月度工作量汇总完成"
        );
        Ok(summary)
    }
}
