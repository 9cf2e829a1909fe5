// ==========================================
// 教师代课分配系统 - 分配编排引擎
// ==========================================
// 职责: 串联 资质过滤 → 可用性检测 → 工作量汇总 → 均衡评分,
//       输出最佳教师或"无可用教师"结果
// 红线: "无可用教师"是预期业务结果,不是错误;
//       只有数据读取失败才作为硬错误向上抛出
// 并发: 幸存候选的工作量查询并发发起,排序仍由评分引擎唯一决定
// ==========================================

use crate::config::AllocationConfig;
use crate::domain::offset_class::ClassRequest;
use crate::domain::teacher::{QualifiedCandidate, Teacher};
use crate::engine::availability::AvailabilityChecker;
use crate::engine::qualifier::CandidateQualifier;
use crate::engine::scoring::ScoringEngine;
use crate::engine::workload::{WorkloadAggregator, WorkloadSummary};
use crate::repository::error::RepositoryError;
use crate::repository::reader::ScheduleReader;
use chrono::{DateTime, Utc};
use futures::future::try_join_all;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

// ==========================================
// AllocationError - 分配硬错误
// ==========================================
#[derive(Error, Debug)]
pub enum AllocationError {
    #[error("数据读取失败: {0}")]
    Upstream(#[from] RepositoryError),

    #[error("课次未找到: class_id={class_id}")]
    ClassNotFound { class_id: String },
}

// ==========================================
// NotFoundReason - 无可用教师的原因
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    /// 候选池为空: 无人持有该科目等级的有效资质
    NoQualifiedTeachers,
    /// 候选池仅因排除集合而清空
    NoCandidatesAfterExclusion,
    /// 有合格候选,但全部未通过可用性检测
    NoAvailableTeacher,
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotFoundReason::NoQualifiedTeachers => {
                write!(f, "NO_QUALIFIED_TEACHERS: 无持有该科目等级有效资质的在职教师")
            }
            NotFoundReason::NoCandidatesAfterExclusion => {
                write!(f, "NO_CANDIDATES_AFTER_EXCLUSION: 合格教师均在排除集合内")
            }
            NotFoundReason::NoAvailableTeacher => {
                write!(f, "NO_AVAILABLE_TEACHER: 合格教师均未通过可用性检测")
            }
        }
    }
}

// ==========================================
// SelectedTeacher - 选中结果
// ==========================================
#[derive(Debug, Clone)]
pub struct SelectedTeacher {
    pub teacher: Teacher,
    pub experience_years: i32,
    pub final_score: f64,
    pub workload: WorkloadSummary,
}

// ==========================================
// AllocationOutcome - 分配结果
// ==========================================
#[derive(Debug, Clone)]
pub enum AllocationOutcome {
    Assigned(SelectedTeacher),
    NotFound(NotFoundReason),
}

impl AllocationOutcome {
    pub fn assigned(&self) -> Option<&SelectedTeacher> {
        match self {
            AllocationOutcome::Assigned(selected) => Some(selected),
            AllocationOutcome::NotFound(_) => None,
        }
    }
}

// ==========================================
// BatchAllocationItem - 批量分配单项结果
// ==========================================
#[derive(Debug, Clone)]
pub struct BatchAllocationItem {
    pub request: ClassRequest,
    pub teacher: Option<SelectedTeacher>,
    pub success: bool,
    pub message: String,
}

// ==========================================
// AllocationService - 分配编排引擎
// ==========================================
pub struct AllocationService<R>
where
    R: ScheduleReader,
{
    reader: Arc<R>,
    qualifier: CandidateQualifier<R>,
    availability: AvailabilityChecker<R>,
    workload: WorkloadAggregator<R>,
    scoring: ScoringEngine,
}

impl<R> AllocationService<R>
where
    R: ScheduleReader,
{
    pub fn new(reader: Arc<R>, config: AllocationConfig) -> Self {
        Self {
            qualifier: CandidateQualifier::new(Arc::clone(&reader)),
            availability: AvailabilityChecker::new(Arc::clone(&reader), config.clone()),
            workload: WorkloadAggregator::new(Arc::clone(&reader), config.clone()),
            scoring: ScoringEngine::new(config),
            reader,
        }
    }

    /// 为课次寻找最佳教师
    ///
    /// # 流程
    /// 1. 资质过滤 (剔除排除集合)
    /// 2. 逐候选可用性检测 (三源冲突扫描,短路)
    /// 3. 幸存候选的月度工作量并发查询
    /// 4. 均衡评分排序,取首位
    ///
    /// # 参数
    /// - request: 分配请求
    /// - exclude_teacher_ids: 排除的教师集合 (可为空)
    ///
    /// # 返回
    /// - Assigned: 最佳教师
    /// - NotFound: 无可用教师 (带原因)
    #[instrument(skip(self, request, exclude_teacher_ids), fields(subject_level_id = %request.subject_level_id))]
    pub async fn find_suitable_teacher(
        &self,
        request: &ClassRequest,
        exclude_teacher_ids: &[String],
    ) -> Result<AllocationOutcome, AllocationError> {
        // === 步骤 1: 资质过滤 ===
        let pool = self
            .qualifier
            .qualified_candidates(&request.subject_level_id, exclude_teacher_ids)
            .await?;

        if pool.candidates.is_empty() {
            let reason = if pool.qualified_count > 0 {
                NotFoundReason::NoCandidatesAfterExclusion
            } else {
                NotFoundReason::NoQualifiedTeachers
            };
            info!(reason = %reason, "分配失败");
            return Ok(AllocationOutcome::NotFound(reason));
        }

        // === 步骤 2: 可用性检测 ===
        let mut survivors: Vec<(QualifiedCandidate, f64)> = Vec::new();
        for candidate in pool.candidates {
            let outcome = self
                .availability
                .check(candidate.teacher_id(), request)
                .await?;
            if outcome.is_available() {
                survivors.push((candidate, outcome.score()));
            }
        }

        if survivors.is_empty() {
            info!(reason = %NotFoundReason::NoAvailableTeacher, "分配失败");
            return Ok(AllocationOutcome::NotFound(NotFoundReason::NoAvailableTeacher));
        }

        // === 步骤 3: 工作量并发查询 ===
        let now = Utc::now();
        let summaries = self.collect_workloads(&survivors, now).await?;

        // === 步骤 4: 评分与选择 ===
        let entries = survivors
            .into_iter()
            .zip(summaries)
            .map(|((candidate, availability_score), workload)| {
                (candidate, availability_score, workload)
            })
            .collect();
        let ranked = self.scoring.rank(entries);

        for score in &ranked {
            debug!(reason = %score.score_reason(), "候选评分");
        }

        match ranked.into_iter().next() {
            Some(best) => {
                info!(
                    teacher_id = %best.candidate.teacher_id(),
                    final_score = best.final_score,
                    "分配成功"
                );
                Ok(AllocationOutcome::Assigned(SelectedTeacher {
                    experience_years: best.candidate.experience_years,
                    teacher: best.candidate.teacher,
                    final_score: best.final_score,
                    workload: best.workload,
                }))
            }
            // rank 对非空输入不返回空,此分支仅作兜底
            None => Ok(AllocationOutcome::NotFound(NotFoundReason::NoAvailableTeacher)),
        }
    }

    /// 重分配: 排除当前教师与全部历史教师后重试
    ///
    /// # 参数
    /// - class_id: 课次标识
    ///
    /// # 说明
    /// 本方法不回写课次记录,状态流转由调用方负责。
    #[instrument(skip(self), fields(class_id = %class_id))]
    pub async fn reallocate(
        &self,
        class_id: &str,
    ) -> Result<AllocationOutcome, AllocationError> {
        let class = self
            .reader
            .find_offset_class(class_id)
            .await?
            .ok_or_else(|| AllocationError::ClassNotFound {
                class_id: class_id.to_string(),
            })?;

        let excluded = class.exclusion_set();
        debug!(excluded_count = excluded.len(), "重分配排除集合");
        self.find_suitable_teacher(&class.to_request(), &excluded)
            .await
    }

    /// 批量分配: 逐请求独立执行,不做跨请求互斥或全局寻优
    ///
    /// 单个请求失败 (含数据读取失败) 只记录在对应结果项上,
    /// 不中断批次。
    pub async fn allocate_multiple(
        &self,
        requests: &[ClassRequest],
    ) -> Vec<BatchAllocationItem> {
        let mut items = Vec::with_capacity(requests.len());
        for request in requests {
            let item = match self.find_suitable_teacher(request, &[]).await {
                Ok(AllocationOutcome::Assigned(selected)) => BatchAllocationItem {
                    request: request.clone(),
                    message: format!("分配成功: {}", selected.teacher.teacher_id),
                    teacher: Some(selected),
                    success: true,
                },
                Ok(AllocationOutcome::NotFound(reason)) => BatchAllocationItem {
                    request: request.clone(),
                    teacher: None,
                    success: false,
                    message: reason.to_string(),
                },
                Err(error) => {
                    warn!(error = %error, "批量分配单项失败");
                    BatchAllocationItem {
                        request: request.clone(),
                        teacher: None,
                        success: false,
                        message: error.to_string(),
                    }
                }
            };
            items.push(item);
        }
        items
    }

    /// 并发获取幸存候选的月度工作量
    async fn collect_workloads(
        &self,
        survivors: &[(QualifiedCandidate, f64)],
        now: DateTime<Utc>,
    ) -> Result<Vec<WorkloadSummary>, AllocationError> {
        let futures = survivors
            .iter()
            .map(|(candidate, _)| self.workload.assess(candidate.teacher_id(), now));
        Ok(try_join_all(futures).await?)
    }
}
