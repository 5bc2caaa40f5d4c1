use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::user_spin_entity as spin_entity;

/// 查询抽奖状态参数
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SpinStatusQuery {
    /// 手机号
    pub phone_number: String,
}

/// 抽奖状态响应
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SpinStatusResponse {
    /// 是否已抽过奖
    pub has_spun: bool,
    /// 已抽中的奖品 (未抽过为空)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prize: Option<String>,
    /// 抽奖时填写的姓名 (未抽过为空)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl From<Option<spin_entity::Model>> for SpinStatusResponse {
    fn from(record: Option<spin_entity::Model>) -> Self {
        match record {
            Some(m) => SpinStatusResponse {
                has_spun: true,
                prize: Some(m.prize),
                name: Some(m.name),
            },
            None => SpinStatusResponse {
                has_spun: false,
                prize: None,
                name: None,
            },
        }
    }
}

/// 登记抽奖结果请求
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct RecordSpinRequest {
    /// 手机号
    pub phone_number: String,
    /// 用户姓名 (最长100字符)
    pub name: String,
    /// 抽中的奖品文案
    pub prize: String,
}

/// 登记抽奖结果响应
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecordSpinResponse {
    /// 提示信息
    pub message: String,
    /// 已登记的奖品文案
    pub prize: String,
}

/// 抽奖记录查询参数
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct SpinRecordQuery {
    /// 页码 (默认 1)
    pub page: Option<u32>,
    /// 每页数量 (默认 20)
    pub per_page: Option<u32>,
}

/// 抽奖记录响应
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SpinRecordResponse {
    /// 记录ID
    pub id: i64,
    /// 手机号
    pub phone: String,
    /// 用户姓名
    pub name: String,
    /// 奖品文案 (历史快照)
    pub prize: String,
    /// 抽奖时间
    pub created_at: DateTime<Utc>,
}

impl From<spin_entity::Model> for SpinRecordResponse {
    fn from(m: spin_entity::Model) -> Self {
        SpinRecordResponse {
            id: m.id,
            phone: m.phone,
            name: m.name,
            prize: m.prize,
            created_at: m.created_at.unwrap_or_else(Utc::now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_response_from_record() {
        let model = spin_entity::Model {
            id: 1,
            phone: "+2348012345678".to_string(),
            name: "Ada".to_string(),
            prize: "🎁 Mystery Gift".to_string(),
            created_at: None,
        };

        let resp = SpinStatusResponse::from(Some(model));
        assert!(resp.has_spun);
        assert_eq!(resp.prize.as_deref(), Some("🎁 Mystery Gift"));
        assert_eq!(resp.name.as_deref(), Some("Ada"));

        let resp = SpinStatusResponse::from(None);
        assert!(!resp.has_spun);
        assert!(resp.prize.is_none());
        assert!(resp.name.is_none());
    }
}
