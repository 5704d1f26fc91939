// ==========================================
// 制造成本估算引擎 - 领域类型定义
// ==========================================
// 依据: Cost_Engine_Specs_v1.4.md - 0.2 分类与工作中心体系
// 依据: Legacy_Macro_Parity_v0.9.md - 工作中心代码表
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 零件分类 (Part Classification)
// ==========================================
// 红线: 分类一旦终结不可变更,顺序为钣金优先、管材其次
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartClass {
    SheetMetal, // 钣金件（有效展开图）
    Tube,       // 管材件（含实心圆棒变体）
    Purchased,  // 外购/客供件（短路分类）
    Generic,    // 通用实体件（有实际质量的机加工件）
    Unknown,    // 未分类
}

impl fmt::Display for PartClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartClass::SheetMetal => write!(f, "SHEET_METAL"),
            PartClass::Tube => write!(f, "TUBE"),
            PartClass::Purchased => write!(f, "PURCHASED"),
            PartClass::Generic => write!(f, "GENERIC"),
            PartClass::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

// ==========================================
// 管材截面形状 (Tube Shape)
// ==========================================
// 依据: Cost_Engine_Specs_v1.4.md - 3. 数据模型 tube 子记录
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TubeShape {
    Round,     // 圆管
    Square,    // 方管
    Rectangle, // 矩形管
    Angle,     // 角钢
    Channel,   // 槽钢
    RoundBar,  // 实心圆棒（壁厚为0的特例）
}

impl fmt::Display for TubeShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TubeShape::Round => write!(f, "ROUND"),
            TubeShape::Square => write!(f, "SQUARE"),
            TubeShape::Rectangle => write!(f, "RECTANGLE"),
            TubeShape::Angle => write!(f, "ANGLE"),
            TubeShape::Channel => write!(f, "CHANNEL"),
            TubeShape::RoundBar => write!(f, "ROUND_BAR"),
        }
    }
}

// ==========================================
// 工作中心代码 (Work Center Code)
// ==========================================
// 依据: Legacy_Macro_Parity_v0.9.md - 工作中心代码表
// 每个工作中心有独立的工时模型与小时费率
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WorkCenter {
    F110, // 大管激光（外径 2~6in）
    F115, // 平板激光/水刀
    F140, // 折弯机
    F210, // 去毛刺
    F220, // 攻丝
    F300, // 锯切（实心圆棒 / 超大管材分流）
    F325, // 滚弯成型
    N145, // 小管激光（外径 ≤2in）
    NPUR, // 外购件标记
    CUST, // 客供件标记
}

impl WorkCenter {
    /// 工作中心代码字符串（与 ERP 导出格式一致）
    pub fn code(&self) -> &'static str {
        match self {
            WorkCenter::F110 => "F110",
            WorkCenter::F115 => "F115",
            WorkCenter::F140 => "F140",
            WorkCenter::F210 => "F210",
            WorkCenter::F220 => "F220",
            WorkCenter::F300 => "F300",
            WorkCenter::F325 => "F325",
            WorkCenter::N145 => "N145",
            WorkCenter::NPUR => "NPUR",
            WorkCenter::CUST => "CUST",
        }
    }

    /// 从代码字符串解析工作中心
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "F110" => Some(WorkCenter::F110),
            "F115" => Some(WorkCenter::F115),
            "F140" => Some(WorkCenter::F140),
            "F210" => Some(WorkCenter::F210),
            "F220" => Some(WorkCenter::F220),
            "F300" => Some(WorkCenter::F300),
            "F325" => Some(WorkCenter::F325),
            "N145" => Some(WorkCenter::N145),
            "NPUR" => Some(WorkCenter::NPUR),
            "CUST" => Some(WorkCenter::CUST),
            _ => None,
        }
    }
}

impl fmt::Display for WorkCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ==========================================
// 材料族 (Material Family)
// ==========================================
// 用途: 选择激光速度表、密度表、磅价兜底值
// 红线: 材料代码子串匹配规则与宏系统保持一致,不得改动匹配顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaterialFamily {
    CarbonSteel, // 碳钢（A36/CS/1018/1020/1045）
    Aluminum,    // 铝（6061/5052/3003/5083/AL）
    Stainless,   // 不锈钢（默认族）
}

impl fmt::Display for MaterialFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaterialFamily::CarbonSteel => write!(f, "CARBON_STEEL"),
            MaterialFamily::Aluminum => write!(f, "ALUMINUM"),
            MaterialFamily::Stainless => write!(f, "STAINLESS"),
        }
    }
}
