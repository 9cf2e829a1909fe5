// ==========================================
// 教师代课分配系统 - 时刻运算纯函数库
// ==========================================
// 职责: "HH:MM" 解析、区间重叠、区间包含
// 红线: 无状态、无副作用;畸形输入不向调用方抛错,
//       一律按"不匹配"处理 (宁可拒绝可用性,不可崩溃)
// ==========================================

use tracing::warn;

// ==========================================
// TimeArithmetic - 纯函数工具类
// ==========================================
pub struct TimeArithmetic;

impl TimeArithmetic {
    /// 解析 "HH:MM" 为当日分钟数
    ///
    /// # 规则
    /// - 只取前 5 个字符 ("09:00:00" 按 "09:00" 解析)
    /// - HH ∈ 00..=23, MM ∈ 00..=59
    /// - 畸形输入返回 None 并记录 warn 日志
    ///
    /// # 参数
    /// - time: 时刻字符串
    pub fn to_minutes(time: &str) -> Option<u32> {
        let parsed = Self::parse_hh_mm(time);
        if parsed.is_none() {
            warn!(time, "时刻格式无效,按不匹配处理");
        }
        parsed
    }

    fn parse_hh_mm(time: &str) -> Option<u32> {
        let head: String = time.chars().take(5).collect();
        let (hh, mm) = head.split_once(':')?;
        if hh.len() != 2 || mm.len() != 2 {
            return None;
        }
        let hours: u32 = hh.parse().ok()?;
        let minutes: u32 = mm.parse().ok()?;
        if hours > 23 || minutes > 59 {
            return None;
        }
        Some(hours * 60 + minutes)
    }

    /// 判断两个半开区间 [a_start, a_end) 与 [b_start, b_end) 是否重叠
    ///
    /// # 规则
    /// - a_start < b_end && a_end > b_start
    /// - 首尾相接 (10:00 结束 / 10:00 开始) 不算重叠
    /// - 任一时刻解析失败 → false
    pub fn overlaps(a_start: &str, a_end: &str, b_start: &str, b_end: &str) -> bool {
        match (
            Self::to_minutes(a_start),
            Self::to_minutes(a_end),
            Self::to_minutes(b_start),
            Self::to_minutes(b_end),
        ) {
            (Some(a_s), Some(a_e), Some(b_s), Some(b_e)) => {
                Self::overlaps_minutes(a_s, a_e, b_s, b_e)
            }
            _ => false,
        }
    }

    /// 分钟级重叠判断 (半开区间)
    pub fn overlaps_minutes(a_start: u32, a_end: u32, b_start: u32, b_end: u32) -> bool {
        a_start < b_end && a_end > b_start
    }

    /// 判断候选区间是否被容器区间"包含"
    ///
    /// # 规则
    /// - 只检查候选区间的开始时刻是否落在 [container_start, container_end)
    /// - 课次从班次内开始、越过班次结束仍判定为包含 (业务口径,勿改)
    /// - 任一时刻解析失败 → false
    pub fn contains(
        candidate_start: &str,
        _candidate_end: &str,
        container_start: &str,
        container_end: &str,
    ) -> bool {
        match (
            Self::to_minutes(candidate_start),
            Self::to_minutes(container_start),
            Self::to_minutes(container_end),
        ) {
            (Some(cand_s), Some(cont_s), Some(cont_e)) => {
                Self::contains_minutes(cand_s, cont_s, cont_e)
            }
            _ => false,
        }
    }

    /// 分钟级包含判断 (仅开始时刻)
    pub fn contains_minutes(candidate_start: u32, container_start: u32, container_end: u32) -> bool {
        candidate_start >= container_start && candidate_start < container_end
    }

    /// 计算时段时长 (小时)
    ///
    /// # 规则
    /// - (end - start) / 60
    /// - 解析失败或 end <= start → 0.0 (畸形数据不计入工作量)
    pub fn duration_hours(start: &str, end: &str) -> f64 {
        match (Self::to_minutes(start), Self::to_minutes(end)) {
            (Some(s), Some(e)) if e > s => f64::from(e - s) / 60.0,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_minutes_basic() {
        assert_eq!(TimeArithmetic::to_minutes("00:00"), Some(0));
        assert_eq!(TimeArithmetic::to_minutes("09:30"), Some(570));
        assert_eq!(TimeArithmetic::to_minutes("23:59"), Some(1439));
    }

    #[test]
    fn test_to_minutes_truncates_to_five_chars() {
        // 带秒的存储值按前 5 字符解析
        assert_eq!(TimeArithmetic::to_minutes("09:30:45"), Some(570));
    }

    #[test]
    fn test_to_minutes_malformed() {
        assert_eq!(TimeArithmetic::to_minutes(""), None);
        assert_eq!(TimeArithmetic::to_minutes("9:30"), None);
        assert_eq!(TimeArithmetic::to_minutes("24:00"), None);
        assert_eq!(TimeArithmetic::to_minutes("12:60"), None);
        assert_eq!(TimeArithmetic::to_minutes("ab:cd"), None);
    }

    #[test]
    fn test_overlaps_half_open() {
        // 首尾相接不算重叠
        assert!(!TimeArithmetic::overlaps("08:00", "09:00", "09:00", "10:00"));
        assert!(!TimeArithmetic::overlaps("09:00", "10:00", "08:00", "09:00"));
        // 真实交叠
        assert!(TimeArithmetic::overlaps("08:00", "09:01", "09:00", "10:00"));
        // 完全包含
        assert!(TimeArithmetic::overlaps("08:00", "12:00", "09:00", "10:00"));
    }

    #[test]
    fn test_overlaps_malformed_is_false() {
        assert!(!TimeArithmetic::overlaps("bad", "09:00", "08:00", "10:00"));
        assert!(!TimeArithmetic::overlaps("08:00", "09:00", "08:00", "xx"));
    }

    #[test]
    fn test_contains_start_only() {
        // 开始时刻在班次内、结束越界 → 仍判包含
        assert!(TimeArithmetic::contains("09:00", "13:00", "08:00", "10:00"));
        // 开始时刻恰在班次结束 → 不包含 (右开)
        assert!(!TimeArithmetic::contains("10:00", "11:00", "08:00", "10:00"));
        // 开始时刻恰在班次开始 → 包含 (左闭)
        assert!(TimeArithmetic::contains("08:00", "09:00", "08:00", "10:00"));
        // 开始时刻早于班次 → 不包含
        assert!(!TimeArithmetic::contains("07:59", "09:00", "08:00", "10:00"));
    }

    #[test]
    fn test_duration_hours() {
        assert!((TimeArithmetic::duration_hours("09:00", "10:30") - 1.5).abs() < 1e-9);
        assert_eq!(TimeArithmetic::duration_hours("10:00", "09:00"), 0.0);
        assert_eq!(TimeArithmetic::duration_hours("bad", "10:00"), 0.0);
    }
}
