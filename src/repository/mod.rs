// ==========================================
// 教师代课分配系统 - 数据仓储层
// ==========================================
// 职责: 只读数据契约与内存实现
// 红线: 真实持久层是外部协作方,本层只定义查询语义
// ==========================================

pub mod error;
pub mod memory;
pub mod reader;

pub use error::{RepositoryError, RepositoryResult};
pub use memory::InMemoryScheduleStore;
pub use reader::ScheduleReader;
