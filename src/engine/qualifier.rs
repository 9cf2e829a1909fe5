// ==========================================
// 教师代课分配系统 - 资质过滤引擎
// ==========================================
// 职责: 按科目等级筛选候选教师,并剔除排除集合
// 输入: subject_level_id + 排除教师集合
// 输出: 候选教师列表 (含排除前数量,供诊断区分)
// 红线: 资质有效性与在职状态由读取契约保证,
//       本引擎不重复校验
// ==========================================

use crate::domain::teacher::QualifiedCandidate;
use crate::repository::error::RepositoryResult;
use crate::repository::reader::ScheduleReader;
use std::sync::Arc;
use tracing::{debug, instrument};

// ==========================================
// QualificationPool - 过滤结果
// ==========================================
#[derive(Debug, Clone)]
pub struct QualificationPool {
    /// 排除后的候选教师
    pub candidates: Vec<QualifiedCandidate>,
    /// 排除前的合格教师数 (用于区分"无资质"与"全被排除")
    pub qualified_count: usize,
}

// ==========================================
// CandidateQualifier - 资质过滤引擎
// ==========================================
pub struct CandidateQualifier<R>
where
    R: ScheduleReader,
{
    reader: Arc<R>,
}

impl<R> CandidateQualifier<R>
where
    R: ScheduleReader,
{
    pub fn new(reader: Arc<R>) -> Self {
        Self { reader }
    }

    /// 筛选候选教师
    ///
    /// # 参数
    /// - subject_level_id: 所需科目等级
    /// - exclude_teacher_ids: 排除的教师标识集合 (重分配时为
    ///   当前教师 + 历史教师)
    ///
    /// # 返回
    /// - QualificationPool: 排除后的候选列表与排除前数量
    #[instrument(skip(self, exclude_teacher_ids), fields(subject_level_id = %subject_level_id))]
    pub async fn qualified_candidates(
        &self,
        subject_level_id: &str,
        exclude_teacher_ids: &[String],
    ) -> RepositoryResult<QualificationPool> {
        let qualified = self.reader.list_qualified_teachers(subject_level_id).await?;
        let qualified_count = qualified.len();

        let candidates: Vec<QualifiedCandidate> = qualified
            .into_iter()
            .filter(|c| !exclude_teacher_ids.iter().any(|id| id == c.teacher_id()))
            .collect();

        debug!(
            qualified_count,
            candidate_count = candidates.len(),
            "资质过滤完成"
        );

        Ok(QualificationPool {
            candidates,
            qualified_count,
        })
    }
}
