// ==========================================
// 教师代课分配系统 - 均衡评分引擎
// ==========================================
// 职责: 对通过可用性检测的候选教师做相对均衡评分并排序
// 输入: 候选教师 + 可用性得分 + 月度工作量
// 输出: 按最终得分降序的候选列表
// 红线: 均衡分是候选集合内的相对值 (min-max 归一),
//       不同候选集合之间不可比
// ==========================================

use crate::config::AllocationConfig;
use crate::domain::teacher::QualifiedCandidate;
use crate::engine::workload::WorkloadSummary;
use std::cmp::Ordering;

// ==========================================
// CandidateScore - 候选评分
// ==========================================
#[derive(Debug, Clone)]
pub struct CandidateScore {
    pub candidate: QualifiedCandidate,
    pub workload: WorkloadSummary,
    /// 可用性得分 (0 / 100)
    pub availability_score: f64,
    /// 工时均衡分 [0,100] (越闲越高)
    pub hours_score: f64,
    /// 调课次数均衡分 [0,100]
    pub offset_score: f64,
    /// 均衡分 = 0.95×工时 + 0.05×次数
    pub balance_score: f64,
    /// 最终得分 = 0.5×可用性 + 0.5×均衡
    pub final_score: f64,
}

impl CandidateScore {
    /// 生成评分原因 (可解释性)
    ///
    /// # 返回
    /// JSON 格式的评分明细字符串
    pub fn score_reason(&self) -> String {
        serde_json::json!({
            "teacher_id": self.candidate.teacher_id(),
            "total_hours": self.workload.total_hours,
            "offset_count": self.workload.offset_count,
            "hours_score": self.hours_score,
            "offset_score": self.offset_score,
            "balance_score": self.balance_score,
            "final_score": self.final_score,
        })
        .to_string()
    }
}

// ==========================================
// ScoringEngine - 均衡评分引擎
// ==========================================
// 无状态引擎,仅依赖权重配置
pub struct ScoringEngine {
    config: AllocationConfig,
}

impl ScoringEngine {
    pub fn new(config: AllocationConfig) -> Self {
        Self { config }
    }

    /// 评分并排序
    ///
    /// # 评分规则
    /// - hours_score = 100 − 100×(hours−min)/(max−min);全员相同时取 50
    /// - offset_score 对调课次数同理
    /// - 两者截断到 [0,100]
    /// - balance = 0.95×hours_score + 0.05×offset_score
    /// - final = 0.5×availability + 0.5×balance
    ///
    /// # 排序规则
    /// 1. final_score 降序
    /// 2. total_hours 升序 (同分取更闲者)
    /// 3. teacher_id 升序 (保证确定性)
    pub fn rank(
        &self,
        entries: Vec<(QualifiedCandidate, f64, WorkloadSummary)>,
    ) -> Vec<CandidateScore> {
        if entries.is_empty() {
            return Vec::new();
        }

        let min_hours = entries
            .iter()
            .map(|(_, _, w)| w.total_hours)
            .fold(f64::INFINITY, f64::min);
        let max_hours = entries
            .iter()
            .map(|(_, _, w)| w.total_hours)
            .fold(f64::NEG_INFINITY, f64::max);
        let min_count = entries
            .iter()
            .map(|(_, _, w)| w.offset_count)
            .min()
            .unwrap_or(0);
        let max_count = entries
            .iter()
            .map(|(_, _, w)| w.offset_count)
            .max()
            .unwrap_or(0);

        let mut scores: Vec<CandidateScore> = entries
            .into_iter()
            .map(|(candidate, availability_score, workload)| {
                let hours_score = Self::relative_score(
                    workload.total_hours,
                    min_hours,
                    max_hours,
                );
                let offset_score = Self::relative_score(
                    workload.offset_count as f64,
                    min_count as f64,
                    max_count as f64,
                );
                let balance_score = self.config.hours_weight * hours_score
                    + self.config.offset_count_weight * offset_score;
                let final_score = self.config.availability_weight * availability_score
                    + self.config.balance_weight * balance_score;
                CandidateScore {
                    candidate,
                    workload,
                    availability_score,
                    hours_score,
                    offset_score,
                    balance_score,
                    final_score,
                }
            })
            .collect();

        scores.sort_by(Self::compare);
        scores
    }

    /// min-max 相对分: 值越小越闲,得分越高
    fn relative_score(value: f64, min: f64, max: f64) -> f64 {
        let score = if max > min {
            100.0 - 100.0 * (value - min) / (max - min)
        } else {
            // 全员相同 → 持平
            50.0
        };
        score.clamp(0.0, 100.0)
    }

    /// 三键比较: final 降序 → 工时升序 → 教师标识升序
    fn compare(a: &CandidateScore, b: &CandidateScore) -> Ordering {
        match b
            .final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(Ordering::Equal)
        {
            Ordering::Equal => {}
            other => return other,
        }

        match a
            .workload
            .total_hours
            .partial_cmp(&b.workload.total_hours)
            .unwrap_or(Ordering::Equal)
        {
            Ordering::Equal => {}
            other => return other,
        }

        a.candidate.teacher_id().cmp(b.candidate.teacher_id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::teacher::Teacher;
    use crate::domain::types::EmploymentStatus;
    use chrono::Utc;

    fn make_candidate(id: &str) -> QualifiedCandidate {
        QualifiedCandidate {
            teacher: Teacher {
                teacher_id: id.to_string(),
                name: format!("教师{}", id),
                email: None,
                status: EmploymentStatus::Active,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            experience_years: 2,
        }
    }

    fn workload(hours: f64, count: usize) -> WorkloadSummary {
        WorkloadSummary {
            total_hours: hours,
            offset_count: count,
        }
    }

    fn engine() -> ScoringEngine {
        ScoringEngine::new(AllocationConfig::default())
    }

    #[test]
    fn test_balance_score_symmetry() {
        // 10h vs 20h,调课次数持平
        let scores = engine().rank(vec![
            (make_candidate("T1"), 100.0, workload(10.0, 2)),
            (make_candidate("T2"), 100.0, workload(20.0, 2)),
        ]);

        assert_eq!(scores[0].candidate.teacher_id(), "T1");
        assert!((scores[0].hours_score - 100.0).abs() < 1e-9);
        assert!((scores[0].offset_score - 50.0).abs() < 1e-9);
        assert!((scores[0].balance_score - 97.5).abs() < 1e-9);

        assert!((scores[1].hours_score - 0.0).abs() < 1e-9);
        assert!((scores[1].offset_score - 50.0).abs() < 1e-9);
        assert!((scores[1].balance_score - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_all_tied_workload_scores_fifty() {
        let scores = engine().rank(vec![
            (make_candidate("T1"), 100.0, workload(12.0, 3)),
            (make_candidate("T2"), 100.0, workload(12.0, 3)),
        ]);
        for score in &scores {
            assert!((score.balance_score - 50.0).abs() < 1e-9);
            // final = 0.5×100 + 0.5×50 = 75
            assert!((score.final_score - 75.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_tie_break_is_deterministic() {
        // 完全同分 → 教师标识升序
        let scores = engine().rank(vec![
            (make_candidate("T2"), 100.0, workload(12.0, 3)),
            (make_candidate("T1"), 100.0, workload(12.0, 3)),
        ]);
        assert_eq!(scores[0].candidate.teacher_id(), "T1");
        assert_eq!(scores[1].candidate.teacher_id(), "T2");
    }

    #[test]
    fn test_final_score_range_for_available_candidates() {
        let scores = engine().rank(vec![
            (make_candidate("T1"), 100.0, workload(0.0, 0)),
            (make_candidate("T2"), 100.0, workload(40.0, 9)),
        ]);
        // 可用候选的最终得分落在 [50, 100]
        for score in &scores {
            assert!(score.final_score >= 50.0 && score.final_score <= 100.0);
        }
        assert!((scores[0].final_score - 100.0).abs() < 1e-9);
        assert!((scores[1].final_score - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_entries_yield_empty_ranking() {
        assert!(engine().rank(Vec::new()).is_empty());
    }

    #[test]
    fn test_score_reason_is_valid_json() {
        let scores = engine().rank(vec![(make_candidate("T1"), 100.0, workload(10.0, 2))]);
        let reason: serde_json::Value =
            serde_json::from_str(&scores[0].score_reason()).unwrap();
        assert_eq!(reason["teacher_id"], "T1");
        assert_eq!(reason["offset_count"], 2);
        assert_eq!(reason["balance_score"], 50.0);
    }
}
