// ==========================================
// 教师代课分配系统 - 领域类型定义
// ==========================================
// 职责: 分配引擎共用的枚举类型
// 序列化格式: SCREAMING_SNAKE_CASE (与数据库一致)
// ==========================================

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 在职状态 (Employment Status)
// ==========================================
// 红线: 只有 ACTIVE 教师可进入候选池
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentStatus {
    Active,   // 在职
    OnLeave,  // 休假
    Inactive, // 离职
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmploymentStatus::Active => write!(f, "ACTIVE"),
            EmploymentStatus::OnLeave => write!(f, "ON_LEAVE"),
            EmploymentStatus::Inactive => write!(f, "INACTIVE"),
        }
    }
}

// ==========================================
// 课次状态 (Class Status)
// ==========================================
// 生命周期: PENDING → ASSIGNED → COMPLETED / CANCELLED
// 状态流转由外部调用方负责,引擎只读
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClassStatus {
    Pending,   // 待分配
    Assigned,  // 已分配
    Completed, // 已完成
    Cancelled, // 已取消
}

impl ClassStatus {
    /// 冲突检测与工作量统计所关注的状态集合
    ///
    /// CANCELLED 课次不占用教师时间,不参与任何统计。
    pub fn occupying() -> [ClassStatus; 3] {
        [
            ClassStatus::Pending,
            ClassStatus::Assigned,
            ClassStatus::Completed,
        ]
    }
}

impl fmt::Display for ClassStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassStatus::Pending => write!(f, "PENDING"),
            ClassStatus::Assigned => write!(f, "ASSIGNED"),
            ClassStatus::Completed => write!(f, "COMPLETED"),
            ClassStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

// ==========================================
// 固定课表角色 (Schedule Role)
// ==========================================
// 工作量加权: TUTOR 课时按 0.75 折算
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleRole {
    Teacher, // 主讲教师
    Tutor,   // 辅导教师
}

impl fmt::Display for ScheduleRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleRole::Teacher => write!(f, "TEACHER"),
            ScheduleRole::Tutor => write!(f, "TUTOR"),
        }
    }
}

// ==========================================
// 星期 (Day of Week)
// ==========================================
// 存储口径: 英文全名 (Sunday..Saturday), 与固定课表表一致
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    /// 从 chrono 的星期类型转换
    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sun => DayOfWeek::Sunday,
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
        }
    }

    /// 转换为 chrono 的星期类型
    pub fn to_weekday(self) -> Weekday {
        match self {
            DayOfWeek::Sunday => Weekday::Sun,
            DayOfWeek::Monday => Weekday::Mon,
            DayOfWeek::Tuesday => Weekday::Tue,
            DayOfWeek::Wednesday => Weekday::Wed,
            DayOfWeek::Thursday => Weekday::Thu,
            DayOfWeek::Friday => Weekday::Fri,
            DayOfWeek::Saturday => Weekday::Sat,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayOfWeek::Sunday => write!(f, "Sunday"),
            DayOfWeek::Monday => write!(f, "Monday"),
            DayOfWeek::Tuesday => write!(f, "Tuesday"),
            DayOfWeek::Wednesday => write!(f, "Wednesday"),
            DayOfWeek::Thursday => write!(f, "Thursday"),
            DayOfWeek::Friday => write!(f, "Friday"),
            DayOfWeek::Saturday => write!(f, "Saturday"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_of_week_roundtrip() {
        let days = [
            DayOfWeek::Sunday,
            DayOfWeek::Monday,
            DayOfWeek::Tuesday,
            DayOfWeek::Wednesday,
            DayOfWeek::Thursday,
            DayOfWeek::Friday,
            DayOfWeek::Saturday,
        ];
        for day in days {
            assert_eq!(DayOfWeek::from_weekday(day.to_weekday()), day);
        }
    }

    #[test]
    fn test_occupying_statuses_exclude_cancelled() {
        assert!(!ClassStatus::occupying().contains(&ClassStatus::Cancelled));
    }
}
