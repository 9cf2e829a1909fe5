// ==========================================
// 教师代课分配系统 - 排班领域模型
// ==========================================
// 职责: 班次 / 固定课表 / 课表请假 实体定义
// 时间口径: 时刻字段统一为 "HH:MM" 字符串,
//           日期字段统一为 UTC 时间点 (比较时再做日历归一)
// ==========================================

use crate::domain::types::{DayOfWeek, ScheduleRole};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// ShiftTemplate - 班次模板
// ==========================================
// 用途: 命名的工作时段 (如 "早班 08:00-12:00")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftTemplate {
    pub name: String,       // 班次名称
    pub start_time: String, // 开始时刻 "HH:MM"
    pub end_time: String,   // 结束时刻 "HH:MM"
}

// ==========================================
// WorkShift - 班次安排
// ==========================================
// 红线: date 以 UTC 零点锚定存储,按 UTC 日界查询
// is_available=false 表示当日排了班但教师不可用(如请假)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkShift {
    pub teacher_id: String,         // 关联教师 (FK)
    pub date: DateTime<Utc>,        // 班次日期 (UTC 零点锚定)
    pub shift_template: ShiftTemplate, // 引用的班次模板
    pub is_available: bool,         // 当日可用标记
}

// ==========================================
// FixedSchedule - 固定课表
// ==========================================
// 每周重复的固定授课承诺
// 生效窗口: [start_date, end_date] 可选,缺省视为长期有效
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedSchedule {
    // ===== 主键与关联 =====
    pub fixed_schedule_id: String, // 课表唯一标识
    pub teacher_id: String,        // 关联教师 (FK)

    // ===== 课表内容 =====
    pub class_name: String,      // 班级名称
    pub subject_id: String,      // 科目标识
    pub day_of_week: DayOfWeek,  // 每周重复的星期
    pub start_time: String,      // 开始时刻 "HH:MM"
    pub end_time: String,        // 结束时刻 "HH:MM"
    pub role: ScheduleRole,      // 授课角色 (工作量加权依据)

    // ===== 生效窗口 =====
    pub start_date: Option<DateTime<Utc>>, // 生效起始 (含)
    pub end_date: Option<DateTime<Utc>>,   // 生效截止 (含)

    // ===== 状态 =====
    pub is_active: bool, // 有效标记
}

// ==========================================
// FixedScheduleLeave - 课表请假记录
// ==========================================
// 用途: 剔除固定课表在某一天的单次发生
// 影响: 该次课不计入工作量,也不再占用教师时间
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixedScheduleLeave {
    pub fixed_schedule_id: String, // 关联固定课表 (FK)
    pub teacher_id: String,        // 关联教师 (FK)
    pub date: DateTime<Utc>,       // 请假日期
}
