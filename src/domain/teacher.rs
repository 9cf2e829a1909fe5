// ==========================================
// 教师代课分配系统 - 教师领域模型
// ==========================================
// 职责: 教师主数据与科目等级资质
// 用途: 管理后台写入,分配引擎只读
// ==========================================

use crate::domain::types::EmploymentStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Teacher - 教师主数据
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    // ===== 主键 =====
    pub teacher_id: String, // 教师唯一标识

    // ===== 基础信息 =====
    pub name: String,                 // 姓名
    pub email: Option<String>,        // 邮箱
    pub status: EmploymentStatus,     // 在职状态

    // ===== 审计字段 =====
    pub created_at: DateTime<Utc>, // 记录创建时间
    pub updated_at: DateTime<Utc>, // 记录更新时间
}

impl Teacher {
    /// 是否可进入候选池 (仅 ACTIVE)
    pub fn is_active(&self) -> bool {
        self.status == EmploymentStatus::Active
    }
}

// ==========================================
// SubjectLevelQualification - 科目等级资质
// ==========================================
// 关联: Teacher × SubjectLevel
// 红线: is_active=false 的资质视同不存在
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectLevelQualification {
    pub teacher_id: String,       // 关联教师 (FK)
    pub subject_level_id: String, // 关联科目等级 (FK)
    pub is_active: bool,          // 资质有效标记
    pub experience_years: i32,    // 教学年限 (目前不参与评分)
}

// ==========================================
// QualifiedCandidate - 资质查询结果行
// ==========================================
// 用途: listQualifiedTeachers 的连接结果 (有效资质 × 在职教师)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualifiedCandidate {
    pub teacher: Teacher,
    pub experience_years: i32,
}

impl QualifiedCandidate {
    pub fn teacher_id(&self) -> &str {
        &self.teacher.teacher_id
    }
}
