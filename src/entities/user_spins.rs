use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 转盘记录实体
/// 说明:
/// - 一个手机号只允许一条记录 (phone 唯一索引，迁移中创建)
/// - prize 冗余存储抽中奖品文案 (即使转盘配置后续修改仍可回溯)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "user_spins")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// 手机号 (唯一键)
    pub phone: String,
    /// 用户姓名
    pub name: String,
    /// 奖品文案 (历史快照)
    pub prize: String,
    /// 创建时间
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
