use serde::Serialize;
use utoipa::ToSchema;

/// 转盘奖品格
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PrizeSlot {
    /// 格子ID (1 起始，顺时针)
    pub id: i64,
    /// 奖品文案
    pub label: String,
    /// 表情符号 (前端拼接展示: "{emoji} {label}")
    pub emoji: String,
    /// 格子背景色
    pub color: String,
}

/// 转盘固定配置: 12 格，数组顺序即绘制顺序。
/// 高价值奖品与"谢谢参与"交替排布，出现两轮保证视觉均匀。
const WHEEL_SLOTS: &[(&str, &str, &str)] = &[
    ("Free Mini Cake", "🎂", "#FFE5E5"),
    ("Mini Chinchin Pouch", "🍪", "#FFF4E0"),
    ("10% Off Your Next Order", "💸", "#FFD4E5"),
    ("Better Luck Next Time", "❌", "#F5E6D3"),
    ("₦500 Off Your Next Order", "💰", "#FFE5E5"),
    ("Mystery Gift", "🎁", "#FFF4E0"),
    ("Free Delivery", "🛵", "#FFD4E5"),
    ("5% Off Your Next Order", "🧾", "#F5E6D3"),
    ("Free Mini Cake", "🎂", "#FFE5E5"),
    ("Mini Chinchin Pouch", "🍪", "#FFF4E0"),
    ("10% Off Your Next Order", "💸", "#FFD4E5"),
    ("Better Luck Next Time", "❌", "#F5E6D3"),
];

/// 返回转盘全部格子 (前端据此绘制并等概率随机选格)
pub fn wheel_slots() -> Vec<PrizeSlot> {
    WHEEL_SLOTS
        .iter()
        .enumerate()
        .map(|(i, (label, emoji, color))| PrizeSlot {
            id: (i + 1) as i64,
            label: (*label).to_string(),
            emoji: (*emoji).to_string(),
            color: (*color).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_has_twelve_slots() {
        let slots = wheel_slots();
        assert_eq!(slots.len(), 12);
        // ID 连续且从 1 开始
        for (i, slot) in slots.iter().enumerate() {
            assert_eq!(slot.id, (i + 1) as i64);
        }
    }

    #[test]
    fn test_wheel_slots_are_renderable() {
        for slot in wheel_slots() {
            assert!(!slot.label.is_empty());
            assert!(!slot.emoji.is_empty());
            assert!(slot.color.starts_with('#'));
        }
    }
}
