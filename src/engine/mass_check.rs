// ==========================================
// 制造成本估算引擎 - 质量交叉校验
// ==========================================
// 依据: Cost_Engine_Specs_v1.4.md - 8. 质量校验容差
// ==========================================
// 用途: QA 工具按需调用,计算质量 vs 实测质量
// 无状态,不持久化
// ==========================================

use crate::domain::cost::MassComparisonResult;

// ==========================================
// MassValidator - 质量校验器
// ==========================================
pub struct MassValidator;

impl MassValidator {
    /// 质量交叉校验
    ///
    /// # 规则
    /// - 任一侧 ≤0 → 无法校验,偏差 100%,不在容差内
    /// - 偏差% = |计算 − 实测| / 实测 × 100
    /// - 在容差内 ⇔ 偏差 ≤ tolerance_pct
    pub fn compare(
        calculated_kg: f64,
        measured_kg: f64,
        tolerance_pct: f64,
    ) -> MassComparisonResult {
        if calculated_kg <= 0.0 || measured_kg <= 0.0 {
            return MassComparisonResult {
                calculated_kg,
                measured_kg,
                percent_difference: 100.0,
                within_tolerance: false,
                message: "无法校验: 质量非正值".to_string(),
            };
        }

        let percent_difference = ((calculated_kg - measured_kg).abs() / measured_kg) * 100.0;
        let within_tolerance = percent_difference <= tolerance_pct;

        let message = if within_tolerance {
            format!(
                "偏差 {:.2}% 在容差 {:.1}% 内",
                percent_difference, tolerance_pct
            )
        } else {
            format!(
                "偏差 {:.2}% 超出容差 {:.1}%",
                percent_difference, tolerance_pct
            )
        };

        MassComparisonResult {
            calculated_kg,
            measured_kg,
            percent_difference,
            within_tolerance,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_tolerance() {
        let result = MassValidator::compare(100.0, 105.0, 5.0);
        assert!(result.within_tolerance);
        assert!((result.percent_difference - 4.7619).abs() < 0.001);
    }

    #[test]
    fn test_outside_tolerance() {
        let result = MassValidator::compare(100.0, 110.0, 5.0);
        assert!(!result.within_tolerance);
        assert!((result.percent_difference - 9.0909).abs() < 0.001);
    }

    #[test]
    fn test_zero_calculated_cannot_validate() {
        let result = MassValidator::compare(0.0, 100.0, 5.0);
        assert!(!result.within_tolerance);
        assert_eq!(result.percent_difference, 100.0);
        assert!(result.message.contains("无法校验"));
    }

    #[test]
    fn test_zero_measured_cannot_validate() {
        let result = MassValidator::compare(100.0, 0.0, 5.0);
        assert!(!result.within_tolerance);
        assert_eq!(result.percent_difference, 100.0);
    }

    #[test]
    fn test_exact_match() {
        let result = MassValidator::compare(50.0, 50.0, 5.0);
        assert!(result.within_tolerance);
        assert_eq!(result.percent_difference, 0.0);
    }
}
