// ==========================================
// 教师代课分配系统 - 调课课次领域模型
// ==========================================
// 职责: 调课/补课课次实体与分配请求
// 说明: 补课 (SupplementaryClass) 与测试课 (TestClass)
//       结构与调课课次一致,统一用本实体表达
// ==========================================

use crate::domain::types::ClassStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ==========================================
// OffsetClass - 调课课次
// ==========================================
// 生命周期: 创建时 PENDING,经分配引擎转 ASSIGNED,
//           COMPLETED/CANCELLED 由外部调用方写入
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OffsetClass {
    // ===== 主键 =====
    pub class_id: String, // 课次唯一标识

    // ===== 课次内容 =====
    pub subject_level_id: String,      // 所需科目等级 (资质过滤依据)
    pub scheduled_date: DateTime<Utc>, // 上课日期 (UTC 时间点,比较时做日历归一)
    pub start_time: String,            // 开始时刻 "HH:MM"
    pub end_time: String,              // 结束时刻 "HH:MM"

    // ===== 分配状态 =====
    pub status: ClassStatus,               // 课次状态
    pub assigned_teacher_id: Option<String>, // 当前分配的教师
    pub assigned_history: Vec<String>,     // 曾被分配后又被替换的教师

    // ===== 审计字段 =====
    pub created_at: DateTime<Utc>, // 记录创建时间
    pub updated_at: DateTime<Utc>, // 记录更新时间
}

impl OffsetClass {
    /// 构造新的待分配课次
    pub fn new_pending(
        subject_level_id: impl Into<String>,
        scheduled_date: DateTime<Utc>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            class_id: Uuid::new_v4().to_string(),
            subject_level_id: subject_level_id.into(),
            scheduled_date,
            start_time: start_time.into(),
            end_time: end_time.into(),
            status: ClassStatus::Pending,
            assigned_teacher_id: None,
            assigned_history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// 重分配时的排除集合: 当前教师 + 全部历史教师
    pub fn exclusion_set(&self) -> Vec<String> {
        let mut excluded: Vec<String> = Vec::new();
        if let Some(current) = &self.assigned_teacher_id {
            excluded.push(current.clone());
        }
        for previous in &self.assigned_history {
            if !excluded.contains(previous) {
                excluded.push(previous.clone());
            }
        }
        excluded
    }

    /// 转换为分配请求
    pub fn to_request(&self) -> ClassRequest {
        ClassRequest {
            subject_level_id: self.subject_level_id.clone(),
            scheduled_date: self.scheduled_date,
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone(),
        }
    }
}

// ==========================================
// ClassRequest - 分配请求
// ==========================================
// 用途: findSuitableTeacher 的输入 (课次的时间与资质要求切片)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassRequest {
    pub subject_level_id: String,      // 所需科目等级
    pub scheduled_date: DateTime<Utc>, // 上课日期
    pub start_time: String,            // 开始时刻 "HH:MM"
    pub end_time: String,              // 结束时刻 "HH:MM"
}

// ==========================================
// ScheduledSlot - 已排课时段
// ==========================================
// 用途: listOffsetLikeClasses 的查询结果行
//       (冲突检测与月度工作量共用)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledSlot {
    pub scheduled_date: DateTime<Utc>, // 上课日期
    pub start_time: String,            // 开始时刻 "HH:MM"
    pub end_time: String,              // 结束时刻 "HH:MM"
    pub status: ClassStatus,           // 课次状态
}
