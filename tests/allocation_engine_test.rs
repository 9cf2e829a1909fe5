// ==========================================
// 分配编排引擎集成测试
// ==========================================
// 职责: 验证 资质过滤 → 可用性 → 工作量 → 评分 全链路
// 场景: 均衡选择 / 资质门控 / 排除集合 / 重分配 / 批量分配
// ==========================================


use teacher_allocation::config::AllocationConfig;
use teacher_allocation::logging;
use teacher_allocation::domain::types::{DayOfWeek, EmploymentStatus, ScheduleRole};
use teacher_allocation::domain::teacher::SubjectLevelQualification;
use teacher_allocation::engine::allocator::{
    AllocationError, AllocationOutcome, AllocationService, NotFoundReason,
};
use teacher_allocation::repository::memory::InMemoryScheduleStore;
use std::sync::Arc;
use test_helpers::*;

fn service(store: Arc<InMemoryScheduleStore>) -> AllocationService<InMemoryScheduleStore> {
    AllocationService::new(store, AllocationConfig::default())
}

// ==========================================
// 均衡选择
// ==========================================

#[tokio::test]
async fn test_prefers_lighter_workload() {
    logging::init_test();
    let store = Arc::new(InMemoryScheduleStore::new());
    // 2025-03-10 是周一;两位教师当日均有覆盖班次
    let class_date = dt(2025, 3, 10, 0, 0);
    seed_qualified_teacher(&store, "T1", "SL1", 3);
    seed_qualified_teacher(&store, "T2", "SL1", 5);
    seed_shift(&store, "T1", class_date, "08:00", "12:00", true);
    seed_shift(&store, "T2", class_date, "08:00", "12:00", true);
    // 周二固定课表拉开月度工时差距 (不与周一课次冲突):
    // T1 每周 2h,T2 每周 4h
    seed_fixed_schedule(&store, "FS1", "T1", DayOfWeek::Tuesday, "14:00", "16:00", ScheduleRole::Teacher);
    seed_fixed_schedule(&store, "FS2", "T2", DayOfWeek::Tuesday, "14:00", "18:00", ScheduleRole::Teacher);

    let outcome = service(Arc::clone(&store))
        .find_suitable_teacher(&make_request("SL1", class_date, "09:00", "10:00"), &[])
        .await
        .unwrap();

    let selected = outcome.assigned().expect("应选出教师");
    assert_eq!(selected.teacher.teacher_id, "T1");
    // 两人局面下,更闲者 balance=97.5 → final=98.75
    assert!((selected.final_score - 98.75).abs() < 1e-9);
    // 固定课表确实投影进了工作量
    assert!(selected.workload.total_hours > 0.0);
}

// ==========================================
// 资质门控
// ==========================================

#[tokio::test]
async fn test_inactive_teacher_never_in_pool() {
    logging::init_test();
    let store = Arc::new(InMemoryScheduleStore::new());
    let class_date = dt(2025, 3, 10, 0, 0);
    // 离职教师,资质有效,班次完备 → 仍不可被选中
    store.insert_teacher(create_teacher("T1", EmploymentStatus::Inactive));
    store.insert_qualification(SubjectLevelQualification {
        teacher_id: "T1".to_string(),
        subject_level_id: "SL1".to_string(),
        is_active: true,
        experience_years: 8,
    });
    seed_shift(&store, "T1", class_date, "08:00", "12:00", true);

    let outcome = service(Arc::clone(&store))
        .find_suitable_teacher(&make_request("SL1", class_date, "09:00", "10:00"), &[])
        .await
        .unwrap();

    assert!(matches!(
        outcome,
        AllocationOutcome::NotFound(NotFoundReason::NoQualifiedTeachers)
    ));
}

#[tokio::test]
async fn test_inactive_qualification_never_in_pool() {
    logging::init_test();
    let store = Arc::new(InMemoryScheduleStore::new());
    let class_date = dt(2025, 3, 10, 0, 0);
    store.insert_teacher(create_teacher("T1", EmploymentStatus::Active));
    store.insert_qualification(SubjectLevelQualification {
        teacher_id: "T1".to_string(),
        subject_level_id: "SL1".to_string(),
        is_active: false,
        experience_years: 8,
    });
    seed_shift(&store, "T1", class_date, "08:00", "12:00", true);

    let outcome = service(Arc::clone(&store))
        .find_suitable_teacher(&make_request("SL1", class_date, "09:00", "10:00"), &[])
        .await
        .unwrap();

    assert!(matches!(
        outcome,
        AllocationOutcome::NotFound(NotFoundReason::NoQualifiedTeachers)
    ));
}

// ==========================================
// 排除集合
// ==========================================

#[tokio::test]
async fn test_exclusion_is_idempotent() {
    logging::init_test();
    let store = Arc::new(InMemoryScheduleStore::new());
    let class_date = dt(2025, 3, 10, 0, 0);
    seed_qualified_teacher(&store, "T1", "SL1", 3);
    seed_qualified_teacher(&store, "T2", "SL1", 5);
    seed_shift(&store, "T1", class_date, "08:00", "12:00", true);
    seed_shift(&store, "T2", class_date, "08:00", "12:00", true);
    // T2 背上沉重工时 → T1 是自然首选
    seed_fixed_schedule(&store, "FS2", "T2", DayOfWeek::Tuesday, "08:00", "18:00", ScheduleRole::Teacher);

    let svc = service(Arc::clone(&store));
    let request = make_request("SL1", class_date, "09:00", "10:00");

    // 排除 T1 → 即便 T1 得分最高也绝不返回 T1
    let outcome = svc
        .find_suitable_teacher(&request, &["T1".to_string()])
        .await
        .unwrap();
    assert_eq!(outcome.assigned().unwrap().teacher.teacher_id, "T2");

    // 排除全员 → 仅因排除而清空
    let outcome = svc
        .find_suitable_teacher(&request, &["T1".to_string(), "T2".to_string()])
        .await
        .unwrap();
    assert!(matches!(
        outcome,
        AllocationOutcome::NotFound(NotFoundReason::NoCandidatesAfterExclusion)
    ));
}

// ==========================================
// 拒绝传播
// ==========================================

#[tokio::test]
async fn test_all_rejected_propagates_not_found() {
    logging::init_test();
    let store = Arc::new(InMemoryScheduleStore::new());
    let class_date = dt(2025, 3, 10, 0, 0);
    // 两位合格教师,但当日均无班次
    seed_qualified_teacher(&store, "T1", "SL1", 3);
    seed_qualified_teacher(&store, "T2", "SL1", 5);

    let outcome = service(Arc::clone(&store))
        .find_suitable_teacher(&make_request("SL1", class_date, "09:00", "10:00"), &[])
        .await
        .unwrap();

    assert!(matches!(
        outcome,
        AllocationOutcome::NotFound(NotFoundReason::NoAvailableTeacher)
    ));
}

// ==========================================
// 重分配
// ==========================================

#[tokio::test]
async fn test_reallocate_excludes_previous_teacher() {
    logging::init_test();
    let store = Arc::new(InMemoryScheduleStore::new());
    let class_date = dt(2025, 3, 10, 0, 0);
    seed_qualified_teacher(&store, "T1", "SL1", 3);
    seed_qualified_teacher(&store, "T2", "SL1", 5);
    seed_shift(&store, "T1", class_date, "08:00", "12:00", true);
    seed_shift(&store, "T2", class_date, "08:00", "12:00", true);

    let class_id = seed_assigned_class(&store, "T1", class_date, "09:00", "10:00");

    let outcome = service(Arc::clone(&store))
        .reallocate(&class_id)
        .await
        .unwrap();

    // 结果必须是 T1 以外的教师
    assert_eq!(outcome.assigned().unwrap().teacher.teacher_id, "T2");
}

#[tokio::test]
async fn test_reallocate_with_no_remaining_candidates() {
    logging::init_test();
    let store = Arc::new(InMemoryScheduleStore::new());
    let class_date = dt(2025, 3, 10, 0, 0);
    seed_qualified_teacher(&store, "T1", "SL1", 3);
    seed_shift(&store, "T1", class_date, "08:00", "12:00", true);

    let class_id = seed_assigned_class(&store, "T1", class_date, "09:00", "10:00");

    let outcome = service(Arc::clone(&store))
        .reallocate(&class_id)
        .await
        .unwrap();

    assert!(matches!(
        outcome,
        AllocationOutcome::NotFound(NotFoundReason::NoCandidatesAfterExclusion)
    ));
}

#[tokio::test]
async fn test_reallocate_missing_class_is_hard_error() {
    logging::init_test();
    let store = Arc::new(InMemoryScheduleStore::new());
    let result = service(store).reallocate("missing-class").await;
    assert!(matches!(
        result,
        Err(AllocationError::ClassNotFound { .. })
    ));
}

// ==========================================
// 批量分配
// ==========================================

#[tokio::test]
async fn test_allocate_multiple_records_per_item_results() {
    logging::init_test();
    let store = Arc::new(InMemoryScheduleStore::new());
    let class_date = dt(2025, 3, 10, 0, 0);
    seed_qualified_teacher(&store, "T1", "SL1", 3);
    seed_shift(&store, "T1", class_date, "08:00", "12:00", true);

    let requests = vec![
        make_request("SL1", class_date, "09:00", "10:00"),
        // 无人持有 SL9 资质 → 单项失败,批次继续
        make_request("SL9", class_date, "09:00", "10:00"),
        make_request("SL1", class_date, "10:00", "11:00"),
    ];

    let items = service(Arc::clone(&store)).allocate_multiple(&requests).await;

    assert_eq!(items.len(), 3);
    assert!(items[0].success);
    assert!(!items[1].success);
    assert!(items[1].message.contains("NO_QUALIFIED_TEACHERS"));
    assert!(items[2].success);
}

#[tokio::test]
async fn test_allocate_multiple_is_independent_per_request() {
    logging::init_test();
    let store = Arc::new(InMemoryScheduleStore::new());
    let class_date = dt(2025, 3, 10, 0, 0);
    seed_qualified_teacher(&store, "T1", "SL1", 3);
    seed_shift(&store, "T1", class_date, "08:00", "12:00", true);

    // 同一时段的两条请求: 逐条独立评估,互不感知,
    // 均会选中同一教师 (跨请求互斥由调用方落库后重试解决)
    let requests = vec![
        make_request("SL1", class_date, "09:00", "10:00"),
        make_request("SL1", class_date, "09:00", "10:00"),
    ];

    let items = service(Arc::clone(&store)).allocate_multiple(&requests).await;

    assert!(items[0].success && items[1].success);
    assert_eq!(
        items[0].teacher.as_ref().unwrap().teacher.teacher_id,
        items[1].teacher.as_ref().unwrap().teacher.teacher_id
    );
}
