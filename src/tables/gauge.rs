// ==========================================
// 制造成本估算引擎 - 钣金规格号表
// ==========================================
// 依据: Legacy_Macro_Parity_v0.9.md - 规格号反查表
// 用途: 厚度 → 规格号（描述生成用）
// ==========================================

// 厚度容差与速度行选择容差同源
const GAUGE_TOLERANCE_IN: f64 = 0.005;

// 规格号表 (gauge, 厚度 in)
const GAUGE_CHART: &[(u32, f64)] = &[
    (7, 0.1793),
    (10, 0.1345),
    (11, 0.1196),
    (12, 0.1046),
    (14, 0.0747),
    (16, 0.0598),
    (18, 0.0478),
    (20, 0.0359),
    (22, 0.0299),
];

/// 厚度反查规格号
///
/// # 规则
/// - ±0.005in 内命中 → Some(规格号)
/// - 不命中 → None（调用方退回十进制厚度描述）
pub fn resolve_gauge(thickness_in: f64) -> Option<u32> {
    GAUGE_CHART
        .iter()
        .find(|(_, t)| (thickness_in - t).abs() <= GAUGE_TOLERANCE_IN)
        .map(|(ga, _)| *ga)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_14_gauge() {
        assert_eq!(resolve_gauge(0.075), Some(14)); // 0.0747 ± 0.005
        assert_eq!(resolve_gauge(0.0747), Some(14));
    }

    #[test]
    fn test_resolve_off_chart() {
        assert_eq!(resolve_gauge(0.500), None);
        assert_eq!(resolve_gauge(0.090), None); // 14/12 规格之间
    }
}
