// ==========================================
// 制造成本估算引擎 - 零件描述生成
// ==========================================
// 依据: Cost_Engine_Specs_v1.4.md - 2. Description/ERP mapping
// ==========================================
// 用途: 读取已终结记录生成传统格式描述串（只读下游）
// ==========================================

use crate::domain::part::PartMetrics;
use crate::domain::types::{PartClass, TubeShape};
use crate::tables::gauge::resolve_gauge;
use crate::tables::nps::resolve_nps;

/// 传统格式零件描述
///
/// # 规则
/// - 钣金: 规格号命中 → "14 GA CS SHEET METAL",否则十进制厚度
/// - 圆管: NPS 命中 → "1-1/2 SCH 40 PIPE",否则 OD×壁厚
/// - 圆棒/方管/矩形管/角钢/槽钢: 对应传统叫法
/// - 外购/客供/通用件: 固定叫法
pub fn describe(metrics: &PartMetrics, classification: PartClass) -> String {
    let material = metrics.material_code.trim().to_uppercase();

    match classification {
        PartClass::SheetMetal => match resolve_gauge(metrics.thickness_in) {
            Some(ga) => format!("{} GA {} SHEET METAL", ga, material),
            None => format!("{:.3} {} SHEET METAL", metrics.thickness_in, material),
        },

        PartClass::Tube => {
            let Some(tube) = &metrics.tube else {
                return format!("{} TUBE", material);
            };
            match tube.shape {
                TubeShape::RoundBar => format!(
                    "{:.3} DIA X {:.3} ROUND BAR",
                    tube.outer_diameter_in, tube.length_in
                ),
                TubeShape::Round => {
                    if tube.is_solid_round_bar() {
                        format!(
                            "{:.3} DIA X {:.3} ROUND BAR",
                            tube.outer_diameter_in, tube.length_in
                        )
                    } else {
                        match resolve_nps(tube.outer_diameter_in, tube.wall_thickness_in) {
                            Some(nps) => format!("{} PIPE", nps),
                            None => format!(
                                "{:.3} OD X {:.3} WALL ROUND TUBE",
                                tube.outer_diameter_in, tube.wall_thickness_in
                            ),
                        }
                    }
                }
                TubeShape::Square => format!(
                    "{:.3} SQ X {:.3} WALL SQUARE TUBE",
                    tube.outer_diameter_in, tube.wall_thickness_in
                ),
                TubeShape::Rectangle => format!(
                    "{:.3} X {:.3} WALL RECTANGULAR TUBE",
                    tube.outer_diameter_in, tube.wall_thickness_in
                ),
                TubeShape::Angle => format!(
                    "{:.3} X {:.3} ANGLE",
                    tube.outer_diameter_in, tube.wall_thickness_in
                ),
                TubeShape::Channel => format!(
                    "{:.3} X {:.3} CHANNEL",
                    tube.outer_diameter_in, tube.wall_thickness_in
                ),
            }
        }

        PartClass::Purchased => {
            if metrics.customer_supplied_flag {
                "CUSTOMER SUPPLIED COMPONENT".to_string()
            } else {
                "PURCHASED COMPONENT".to_string()
            }
        }

        PartClass::Generic => format!("MACHINED COMPONENT, {}", material),

        PartClass::Unknown => "UNCLASSIFIED COMPONENT".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::part::TubeFacts;

    fn metrics(classification_hint: &str) -> PartMetrics {
        PartMetrics {
            part_no: "P1".to_string(),
            file_path: None,
            configuration: None,
            thickness_in: 0.075,
            material_code: "cs".to_string(),
            cut_length_in: 40.0,
            pierce_count: 8,
            mass_kg: 1.2,
            bbox_length_in: 12.0,
            bbox_width_in: 6.0,
            has_flat_pattern: classification_hint == "sheet",
            purchased_flag: false,
            customer_supplied_flag: false,
            sheet: None,
            tube: None,
        }
    }

    #[test]
    fn test_sheet_gauge_description() {
        let m = metrics("sheet");
        assert_eq!(describe(&m, PartClass::SheetMetal), "14 GA CS SHEET METAL");
    }

    #[test]
    fn test_sheet_decimal_fallback() {
        let mut m = metrics("sheet");
        m.thickness_in = 0.500;
        assert_eq!(describe(&m, PartClass::SheetMetal), "0.500 CS SHEET METAL");
    }

    #[test]
    fn test_pipe_description_via_nps() {
        let mut m = metrics("tube");
        m.tube = Some(TubeFacts {
            shape: TubeShape::Round,
            outer_diameter_in: 1.900,
            wall_thickness_in: 0.145,
            inner_diameter_in: 1.610,
            length_in: 48.0,
        });
        assert_eq!(describe(&m, PartClass::Tube), "1-1/2 SCH 40 PIPE");
    }

    #[test]
    fn test_round_tube_fallback_description() {
        let mut m = metrics("tube");
        m.tube = Some(TubeFacts {
            shape: TubeShape::Round,
            outer_diameter_in: 5.250,
            wall_thickness_in: 0.120,
            inner_diameter_in: 5.010,
            length_in: 48.0,
        });
        assert_eq!(
            describe(&m, PartClass::Tube),
            "5.250 OD X 0.120 WALL ROUND TUBE"
        );
    }

    #[test]
    fn test_purchased_descriptions() {
        let mut m = metrics("any");
        m.purchased_flag = true;
        assert_eq!(describe(&m, PartClass::Purchased), "PURCHASED COMPONENT");
        m.customer_supplied_flag = true;
        assert_eq!(
            describe(&m, PartClass::Purchased),
            "CUSTOMER SUPPLIED COMPONENT"
        );
    }
}
