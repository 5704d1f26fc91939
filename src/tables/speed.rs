// ==========================================
// 制造成本估算引擎 - 激光速度表
// ==========================================
// 依据: Legacy_Macro_Parity_v0.9.md - 激光进给/穿孔表
// 依据: Cost_Engine_Specs_v1.4.md - 4.1 速度行选择规则
// ==========================================
// 红线: 三张族表彼此独立,行序按厚度非降排列;
//       行选择为"向上取最近规格,容差 0.005in",不是最近匹配
// ==========================================

use crate::domain::types::MaterialFamily;
use crate::tables::error::TableError;
use serde::{Deserialize, Serialize};

// ==========================================
// SpeedEntry - 速度行
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedEntry {
    pub thickness_in: f64,   // 规格厚度（in）
    pub feed_rate_ipm: f64,  // 进给速度（in/min）
    pub pierce_seconds: f64, // 单孔穿孔时间（s）
}

// ==========================================
// SpeedTable - 单族速度表
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpeedTable {
    pub entries: Vec<SpeedEntry>,
}

impl SpeedTable {
    pub fn from_rows(rows: &[(f64, f64, f64)]) -> Self {
        Self {
            entries: rows
                .iter()
                .map(|(t, f, p)| SpeedEntry {
                    thickness_in: *t,
                    feed_rate_ipm: *f,
                    pierce_seconds: *p,
                })
                .collect(),
        }
    }

    /// 校验厚度非降序
    pub fn validate(&self) -> Result<(), TableError> {
        for pair in self.entries.windows(2) {
            if pair[1].thickness_in < pair[0].thickness_in {
                return Err(TableError::InvalidTable(format!(
                    "厚度乱序: {} 在 {} 之后",
                    pair[1].thickness_in, pair[0].thickness_in
                )));
            }
        }
        Ok(())
    }

    /// 行选择
    ///
    /// # 规则
    /// - 阈值 = thickness − tolerance
    /// - 升序扫描,返回第一行 thickness ≥ 阈值（向上取规格）
    /// - 全部行都太薄 → 最厚行兜底
    /// - 空表 → None（调用方按"无激光工序"处理）
    pub fn select(&self, thickness_in: f64, tolerance_in: f64) -> Option<&SpeedEntry> {
        let threshold = thickness_in - tolerance_in;
        self.entries
            .iter()
            .find(|e| e.thickness_in >= threshold)
            .or_else(|| self.entries.last())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ==========================================
// SpeedTableSet - 三族速度表集合
// ==========================================
// 红线: 构造后只读,批量估算期间不得变更
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeedTableSet {
    pub stainless: SpeedTable,
    pub carbon_steel: SpeedTable,
    pub aluminum: SpeedTable,
}

impl SpeedTableSet {
    /// 内置默认表（宏系统常量逐位照搬）
    pub fn builtin() -> Self {
        Self {
            stainless: SpeedTable::from_rows(STAINLESS_ROWS),
            carbon_steel: SpeedTable::from_rows(CARBON_STEEL_ROWS),
            aluminum: SpeedTable::from_rows(ALUMINUM_ROWS),
        }
    }

    pub fn table_for(&self, family: MaterialFamily) -> &SpeedTable {
        match family {
            MaterialFamily::Stainless => &self.stainless,
            MaterialFamily::CarbonSteel => &self.carbon_steel,
            MaterialFamily::Aluminum => &self.aluminum,
        }
    }

    /// 三表全量校验
    pub fn validate(&self) -> Result<(), TableError> {
        self.stainless.validate()?;
        self.carbon_steel.validate()?;
        self.aluminum.validate()?;
        Ok(())
    }
}

// ==========================================
// 内置表数据 (thickness_in, feed_rate_ipm, pierce_seconds)
// ==========================================

// 碳钢表
const CARBON_STEEL_ROWS: &[(f64, f64, f64)] = &[
    (0.030, 2800.0, 0.03),
    (0.036, 2600.0, 0.03),
    (0.048, 2200.0, 0.04),
    (0.060, 1800.0, 0.05),
    (0.075, 1400.0, 0.06),
    (0.105, 1000.0, 0.08),
    (0.120, 850.0, 0.10),
    (0.135, 700.0, 0.12),
    (0.187, 450.0, 0.18),
    (0.250, 280.0, 0.30),
    (0.375, 150.0, 0.60),
    (0.500, 90.0, 1.00),
    (0.625, 60.0, 1.50),
    (0.750, 40.0, 2.20),
    (1.000, 25.0, 3.50),
];

// 不锈钢表
const STAINLESS_ROWS: &[(f64, f64, f64)] = &[
    (0.030, 2400.0, 0.03),
    (0.048, 1900.0, 0.05),
    (0.060, 1500.0, 0.06),
    (0.075, 1100.0, 0.08),
    (0.105, 800.0, 0.10),
    (0.120, 650.0, 0.12),
    (0.187, 350.0, 0.20),
    (0.250, 200.0, 0.35),
    (0.375, 100.0, 0.80),
    (0.500, 55.0, 1.40),
    (0.750, 25.0, 2.80),
];

// 铝表
const ALUMINUM_ROWS: &[(f64, f64, f64)] = &[
    (0.025, 3200.0, 0.02),
    (0.040, 2800.0, 0.03),
    (0.063, 2200.0, 0.04),
    (0.080, 1700.0, 0.05),
    (0.090, 1500.0, 0.06),
    (0.125, 1100.0, 0.08),
    (0.190, 600.0, 0.15),
    (0.250, 380.0, 0.25),
    (0.375, 180.0, 0.50),
    (0.500, 100.0, 0.90),
];

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 0.005;

    // ==========================================
    // 测试 1: 行选择规则
    // ==========================================

    #[test]
    fn test_select_exact_row() {
        let table = SpeedTable::from_rows(CARBON_STEEL_ROWS);
        let row = table.select(0.075, TOL).unwrap();
        assert_eq!(row.thickness_in, 0.075);
        assert_eq!(row.feed_rate_ipm, 1400.0);
        assert_eq!(row.pierce_seconds, 0.06);
    }

    #[test]
    fn test_select_rounds_up_to_next_gauge() {
        let table = SpeedTable::from_rows(CARBON_STEEL_ROWS);
        // 0.090 − 0.005 = 0.085 → 第一行 ≥0.085 是 0.105
        let row = table.select(0.090, TOL).unwrap();
        assert_eq!(row.thickness_in, 0.105);
    }

    #[test]
    fn test_select_tolerance_boundary() {
        let table = SpeedTable::from_rows(CARBON_STEEL_ROWS);
        // 恰好在容差边界: 0.080 − 0.005 = 0.075 → 命中 0.075 行
        let row = table.select(0.080, TOL).unwrap();
        assert_eq!(row.thickness_in, 0.075);
        // 略超边界: 0.0801 − 0.005 = 0.0751 → 上跳 0.105 行
        let row = table.select(0.0801, TOL).unwrap();
        assert_eq!(row.thickness_in, 0.105);
        // 略低于边界: 0.0799 − 0.005 = 0.0749 → 仍命中 0.075 行
        let row = table.select(0.0799, TOL).unwrap();
        assert_eq!(row.thickness_in, 0.075);
    }

    #[test]
    fn test_select_fallback_to_thickest() {
        let table = SpeedTable::from_rows(CARBON_STEEL_ROWS);
        // 超过所有行 → 最厚行兜底,绝不返回空
        let row = table.select(2.5, TOL).unwrap();
        assert_eq!(row.thickness_in, 1.000);
    }

    #[test]
    fn test_select_empty_table() {
        let table = SpeedTable::default();
        assert!(table.select(0.075, TOL).is_none());
    }

    #[test]
    fn test_select_deterministic() {
        let table = SpeedTable::from_rows(STAINLESS_ROWS);
        let first = table.select(0.1, TOL).copied();
        for _ in 0..100 {
            assert_eq!(table.select(0.1, TOL).copied(), first);
        }
    }

    // ==========================================
    // 测试 2: 表校验
    // ==========================================

    #[test]
    fn test_builtin_tables_are_sorted() {
        SpeedTableSet::builtin().validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_out_of_order() {
        let table = SpeedTable::from_rows(&[(0.075, 1400.0, 0.06), (0.060, 1800.0, 0.05)]);
        assert!(table.validate().is_err());
    }
}
