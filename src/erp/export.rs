// ==========================================
// 制造成本估算引擎 - ERP 平面文件导出
// ==========================================
// 依据: Cost_Engine_Specs_v1.4.md - 6. 外部接口 ERP 导出
// ==========================================
// 红线: 数值精度约定 — 工时 4 位小数,金额 2 位小数;
//       历史导出需逐字节可比,格式化在此层一次完成
// ==========================================

use crate::domain::cost::PartCostRecord;
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// ERP 导出错误类型
#[derive(Error, Debug)]
pub enum ErpExportError {
    #[error("CSV 写出失败: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV 缓冲回收失败: {0}")]
    Flush(String),

    #[error("CSV 编码非 UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

// ==========================================
// ErpRow - 导出行
// ==========================================
// 行类型: WC（工作中心）/ MATL（材料）/ TOTAL（合计）
#[derive(Debug, Serialize)]
struct ErpRow<'a> {
    part_no: &'a str,
    quote_date: NaiveDate,
    classification: String,
    description: &'a str,
    line_type: &'static str,
    code: String,
    setup_hours: String,
    run_hours: String,
    quantity: u32,
    price: String,
}

// ==========================================
// ErpExporter - 平面文件导出器
// ==========================================
pub struct ErpExporter;

impl ErpExporter {
    /// 导出 CSV 文本
    ///
    /// # 行结构（每零件）
    /// 1. 每工作中心一行（含零值中心,保证历史可比）
    /// 2. MATL 材料行
    /// 3. TOTAL 合计行
    pub fn export_csv(
        parts: &[(&PartCostRecord, String)],
        quote_date: NaiveDate,
    ) -> Result<String, ErpExportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        for (record, description) in parts {
            for result in record.work_centers.values() {
                writer.serialize(ErpRow {
                    part_no: &record.part_no,
                    quote_date,
                    classification: record.classification.to_string(),
                    description,
                    line_type: "WC",
                    code: result.work_center.code().to_string(),
                    setup_hours: format!("{:.4}", result.setup_hours),
                    run_hours: format!("{:.4}", result.run_hours),
                    quantity: record.quantity,
                    price: format!("{:.2}", result.price),
                })?;
            }

            writer.serialize(ErpRow {
                part_no: &record.part_no,
                quote_date,
                classification: record.classification.to_string(),
                description,
                line_type: "MATL",
                code: format!("{:.2}", record.material.cost_per_lb),
                setup_hours: "0.0000".to_string(),
                run_hours: "0.0000".to_string(),
                quantity: record.quantity,
                price: format!("{:.2}", record.material.total_material_cost),
            })?;

            writer.serialize(ErpRow {
                part_no: &record.part_no,
                quote_date,
                classification: record.classification.to_string(),
                description,
                line_type: "TOTAL",
                code: String::new(),
                setup_hours: "0.0000".to_string(),
                run_hours: "0.0000".to_string(),
                quantity: record.quantity,
                price: format!("{:.2}", record.grand_total),
            })?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ErpExportError::Flush(e.to_string()))?;
        Ok(String::from_utf8(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cost::{MaterialCost, WorkCenterResult};
    use crate::domain::types::{PartClass, WorkCenter};
    use crate::engine::aggregator::CostAggregator;

    fn sample_record() -> PartCostRecord {
        CostAggregator::finalize(
            "B1",
            PartClass::SheetMetal,
            vec![],
            1,
            vec![WorkCenterResult {
                work_center: WorkCenter::F115,
                setup_hours: 0.01,
                run_hours: 0.123456,
                price: 22.019,
            }],
            MaterialCost {
                cost_per_lb: 0.62,
                adjusted_weight_lb: 3.1,
                cost_per_piece: 1.922,
                total_material_cost: 1.922,
            },
        )
    }

    #[test]
    fn test_export_rounding_conventions() {
        let record = sample_record();
        let date = NaiveDate::from_ymd_opt(2026, 8, 4).unwrap();
        let csv = ErpExporter::export_csv(&[(&record, "14 GA CS SHEET METAL".to_string())], date)
            .unwrap();

        // 工时 4 位小数,金额 2 位小数
        assert!(csv.contains("0.1235")); // run_hours 四舍五入
        assert!(csv.contains("22.02")); // 价格两位
        assert!(csv.contains("TOTAL"));
        assert!(csv.contains("2026-08-04"));
    }

    #[test]
    fn test_export_is_reproducible() {
        let record = sample_record();
        let date = NaiveDate::from_ymd_opt(2026, 8, 4).unwrap();
        let a = ErpExporter::export_csv(&[(&record, "D".to_string())], date).unwrap();
        let b = ErpExporter::export_csv(&[(&record, "D".to_string())], date).unwrap();
        assert_eq!(a, b); // 逐字节可比
    }
}
