// ==========================================
// ARK 服务器配置工作台 - 经验进度表模型
// ==========================================
// 不变量:
// - level 从 1 开始连续
// - total_xp[i] = total_xp[i-1] + xp_for_level[i]，total_xp[0] = xp_for_level[0]
// - 累计值必须落在 u64 内，溢出的表不可构造
// 表的增删改见 engine::progression
// ==========================================

use serde::{Deserialize, Serialize};

/// 单级经验条目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionEntry {
    pub level: u32,
    #[serde(rename = "xpForLevel")]
    pub xp_for_level: u64,
    #[serde(rename = "totalXP")]
    pub total_xp: u64,
}

/// 经验进度表
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProgressionTable {
    pub(crate) entries: Vec<ProgressionEntry>,
}

impl ProgressionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 由每级经验值构建（按前缀和累计 total_xp）
    ///
    /// # 返回
    /// - None: 累计经验超出 u64
    pub fn from_xp_values<I: IntoIterator<Item = u64>>(values: I) -> Option<Self> {
        let mut entries = Vec::new();
        let mut total: u64 = 0;
        for (idx, xp) in values.into_iter().enumerate() {
            total = total.checked_add(xp)?;
            entries.push(ProgressionEntry {
                level: idx as u32 + 1,
                xp_for_level: xp,
                total_xp: total,
            });
        }
        Some(Self { entries })
    }

    pub fn entries(&self) -> &[ProgressionEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&ProgressionEntry> {
        self.entries.get(index)
    }

    pub fn last(&self) -> Option<&ProgressionEntry> {
        self.entries.last()
    }

    /// 最后一级的累计经验（空表为 0）
    pub fn max_total_xp(&self) -> u64 {
        self.entries.last().map(|e| e.total_xp).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn xp_values(&self) -> impl Iterator<Item = u64> + '_ {
        self.entries.iter().map(|e| e.xp_for_level)
    }

    /// 检查等级连续性与前缀和
    pub fn is_consistent(&self) -> bool {
        let mut total: u64 = 0;
        self.entries.iter().enumerate().all(|(idx, entry)| {
            match total.checked_add(entry.xp_for_level) {
                Some(next) => total = next,
                None => return false,
            }
            entry.level == idx as u32 + 1 && entry.total_xp == total
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_xp_values_prefix_sum() {
        let table = ProgressionTable::from_xp_values([100, 200, 300]).unwrap();
        let totals: Vec<u64> = table.entries().iter().map(|e| e.total_xp).collect();
        assert_eq!(totals, vec![100, 300, 600]);
        assert_eq!(table.max_total_xp(), 600);
        assert!(table.is_consistent());
    }

    #[test]
    fn test_overflowing_values_rejected() {
        assert!(ProgressionTable::from_xp_values([u64::MAX, 1]).is_none());
        assert!(ProgressionTable::from_xp_values([u64::MAX]).is_some());
    }

    #[test]
    fn test_saturated_totals_are_inconsistent() {
        let table = ProgressionTable {
            entries: vec![
                ProgressionEntry { level: 1, xp_for_level: u64::MAX, total_xp: u64::MAX },
                ProgressionEntry { level: 2, xp_for_level: 5, total_xp: u64::MAX },
            ],
        };
        assert!(!table.is_consistent());
    }

    #[test]
    fn test_empty_table() {
        let table = ProgressionTable::new();
        assert_eq!(table.max_total_xp(), 0);
        assert!(table.is_consistent());
    }
}
