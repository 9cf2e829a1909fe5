// ==========================================
// 教师代课分配系统 - 日历归一纯函数库
// ==========================================
// 职责: UTC 时间点 → 民用日 (UTC+7) 归一,
//       以及 UTC 日界 / 月界 / 星期推导
// 红线: 所有"同一天"比较必须经 civil_day 归一,
//       禁止直接比较原始时间点
// ==========================================

use crate::domain::types::DayOfWeek;
use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc};

/// 民用日历相对 UTC 的默认偏移 (小时)
///
/// 业务所在时区为 UTC+7 (Asia/Bangkok 口径),无夏令时。
pub const DEFAULT_CIVIL_OFFSET_HOURS: i64 = 7;

// ==========================================
// LocalDayNormalizer - 纯函数工具类
// ==========================================
pub struct LocalDayNormalizer;

impl LocalDayNormalizer {
    /// 将 UTC 时间点归一为民用日 (UTC+7)
    ///
    /// 无论源时间点如何构造 (UTC 零点锚定或带任意时分),
    /// 加 7 小时后读取 UTC 日历日期都会得到稳定的民用日。
    /// `NaiveDate` 的 Display 即 "YYYY-MM-DD"。
    ///
    /// # 参数
    /// - instant: UTC 时间点
    /// - offset_hours: 民用偏移 (小时,生产口径为 +7)
    pub fn civil_day(instant: DateTime<Utc>, offset_hours: i64) -> NaiveDate {
        (instant + Duration::hours(offset_hours)).date_naive()
    }

    /// 时间点所在原始 UTC 日历日的 [零点, 次日零点) 区间
    ///
    /// 用于班次查询: 班次日期以 UTC 零点锚定存储,
    /// 此处不做民用日归一。
    pub fn utc_day_bounds(instant: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        let day_start = Self::start_of_utc_day(instant.date_naive());
        (day_start, day_start + Duration::days(1))
    }

    /// 时间点所在 UTC 日历月的 [月初零点, 次月初零点) 区间
    ///
    /// 用于月度工作量统计窗口。
    pub fn utc_month_bounds(instant: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
        let date = instant.date_naive();
        let month_start = NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
            .unwrap_or(date);
        let next_month_start = if date.month() == 12 {
            NaiveDate::from_ymd_opt(date.year() + 1, 1, 1).unwrap_or(date)
        } else {
            NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1).unwrap_or(date)
        };
        (
            Self::start_of_utc_day(month_start),
            Self::start_of_utc_day(next_month_start),
        )
    }

    /// 时间点所在原始 UTC 日历日的星期
    ///
    /// 与 utc_day_bounds 共用同一日口径 (班次查询、固定课表
    /// 星期匹配在同一步骤内必须一致)。
    pub fn utc_weekday(instant: DateTime<Utc>) -> DayOfWeek {
        DayOfWeek::from_weekday(instant.date_naive().weekday())
    }

    fn start_of_utc_day(date: NaiveDate) -> DateTime<Utc> {
        Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap_or_default())
    }
}
