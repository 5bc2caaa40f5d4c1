use crate::entities::user_spin_entity as spins;
use crate::error::{AppError, AppResult};
use crate::models::{
    PaginatedResponse, PaginationParams, PrizeSlot, RecordSpinRequest, RecordSpinResponse,
    SpinRecordQuery, SpinRecordResponse, SpinStatusResponse, wheel_slots,
};
use crate::utils::{normalize_phone, validate_phone};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, SqlErr,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct SpinService {
    pool: Arc<DatabaseConnection>,
}

impl SpinService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }

    /// 查询手机号抽奖状态 (已抽过附带奖品与姓名)
    pub async fn check_status(&self, phone_number: &str) -> AppResult<SpinStatusResponse> {
        let phone = normalize_phone(phone_number);
        validate_phone(&phone)?;

        let record = self.find_by_phone(&phone).await?;

        Ok(record.into())
    }

    /// 获取转盘格子配置 (固定在代码中，不走数据库)
    pub fn list_prizes(&self) -> Vec<PrizeSlot> {
        wheel_slots()
    }

    /// 登记一次抽奖结果:
    /// 1. 校验字段 (手机号格式 / 姓名长度 / 奖品文案)
    /// 2. 先查后插: 已有记录返回 409 并附带已抽中的奖品
    /// 3. 插入命中唯一索引冲突 (并发竞争输家) 时回查赢家的奖品返回
    pub async fn record_spin(&self, request: RecordSpinRequest) -> AppResult<RecordSpinResponse> {
        let (phone, name, prize) = validate_record_request(&request)?;

        // 应用层存在性检查，重复抽奖按正常业务结果处理
        if let Some(existing) = self.find_by_phone(&phone).await? {
            return Err(AppError::AlreadySpun {
                existing_prize: Some(existing.prize),
            });
        }

        let insert_result = spins::ActiveModel {
            phone: Set(phone.clone()),
            name: Set(name),
            prize: Set(prize.clone()),
            ..Default::default()
        }
        .insert(self.pool.as_ref())
        .await;

        match insert_result {
            Ok(_) => Ok(RecordSpinResponse {
                message: "Spin recorded successfully".to_string(),
                prize,
            }),
            // 唯一索引兜底: 两个请求竞争同一手机号时，输家回查并返回赢家的奖品
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                let existing = self.find_by_phone(&phone).await?;
                Err(AppError::AlreadySpun {
                    existing_prize: existing.map(|m| m.prize),
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// 分页获取抽奖记录（倒序）
    pub async fn list_records(
        &self,
        query: &SpinRecordQuery,
    ) -> AppResult<PaginatedResponse<SpinRecordResponse>> {
        let params = PaginationParams::new(query.page, query.per_page);
        let offset = params.get_offset();
        let limit = params.get_limit();

        let base_query = spins::Entity::find();

        let total = base_query.clone().count(self.pool.as_ref()).await? as i64;

        let items_models = base_query
            .order_by(spins::Column::CreatedAt, Order::Desc)
            .limit(limit as u64)
            .offset(offset as u64)
            .all(self.pool.as_ref())
            .await?;

        let items: Vec<SpinRecordResponse> = items_models.into_iter().map(Into::into).collect();

        Ok(PaginatedResponse::new(
            items,
            params.get_page(),
            params.get_page_size(),
            total,
        ))
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<spins::Model>, DbErr> {
        spins::Entity::find()
            .filter(spins::Column::Phone.eq(phone))
            .one(self.pool.as_ref())
            .await
    }
}

/// 校验并规整登记请求，返回 (phone, name, prize)
fn validate_record_request(request: &RecordSpinRequest) -> AppResult<(String, String, String)> {
    let phone = normalize_phone(&request.phone_number);
    let name = request.name.trim().to_string();
    let prize = request.prize.trim().to_string();

    if phone.is_empty() || name.is_empty() || prize.is_empty() {
        return Err(AppError::ValidationError(
            "Missing required fields: phone_number, name, prize".to_string(),
        ));
    }

    validate_phone(&phone)?;

    if name.chars().count() > 100 {
        return Err(AppError::ValidationError(
            "Name must not exceed 100 characters".to_string(),
        ));
    }

    if prize.chars().count() > 255 {
        return Err(AppError::ValidationError(
            "Prize must not exceed 255 characters".to_string(),
        ));
    }

    Ok((phone, name, prize))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn record(id: i64, phone: &str, prize: &str) -> spins::Model {
        spins::Model {
            id,
            phone: phone.to_string(),
            name: "Ada".to_string(),
            prize: prize.to_string(),
            created_at: None,
        }
    }

    fn request(phone: &str) -> RecordSpinRequest {
        RecordSpinRequest {
            phone_number: phone.to_string(),
            name: "Ada".to_string(),
            prize: "🎁 Mystery Gift".to_string(),
        }
    }

    #[tokio::test]
    async fn test_check_status_not_spun() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<spins::Model>::new()])
            .into_connection();

        let service = SpinService::new(db);
        let resp = service.check_status("+2348012345678").await.unwrap();
        assert!(!resp.has_spun);
        assert!(resp.prize.is_none());
    }

    #[tokio::test]
    async fn test_check_status_already_spun() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![record(1, "+2348012345678", "🎁 Mystery Gift")]])
            .into_connection();

        let service = SpinService::new(db);
        let resp = service.check_status("+2348012345678").await.unwrap();
        assert!(resp.has_spun);
        assert_eq!(resp.prize.as_deref(), Some("🎁 Mystery Gift"));
        assert_eq!(resp.name.as_deref(), Some("Ada"));
    }

    #[tokio::test]
    async fn test_check_status_rejects_invalid_phone_before_query() {
        // 不预置任何查询结果: 校验不通过时不应触达数据库
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let service = SpinService::new(db);
        let err = service.check_status("not-a-phone").await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_record_spin_conflict_returns_existing_prize() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![record(1, "+2348012345678", "🎂 Free Mini Cake")]])
            .into_connection();

        let service = SpinService::new(db);
        let err = service
            .record_spin(request("+2348012345678"))
            .await
            .unwrap_err();

        match err {
            AppError::AlreadySpun { existing_prize } => {
                // 第二次抽奖返回第一次的奖品，不覆盖
                assert_eq!(existing_prize.as_deref(), Some("🎂 Free Mini Cake"));
            }
            other => panic!("expected AlreadySpun, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_record_spin_rejects_invalid_request_before_query() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let service = SpinService::new(db);

        let err = service.record_spin(request("12345")).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[test]
    fn test_validate_record_request_trims_fields() {
        let req = RecordSpinRequest {
            phone_number: " +2348012345678 ".to_string(),
            name: " Ada ".to_string(),
            prize: " 🎁 Mystery Gift ".to_string(),
        };

        let (phone, name, prize) = validate_record_request(&req).unwrap();
        assert_eq!(phone, "+2348012345678");
        assert_eq!(name, "Ada");
        assert_eq!(prize, "🎁 Mystery Gift");
    }

    #[test]
    fn test_validate_record_request_rejects_empty_fields() {
        let mut req = request("+2348012345678");
        req.name = "   ".to_string();
        assert!(matches!(
            validate_record_request(&req),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn test_validate_record_request_rejects_long_name() {
        let mut req = request("+2348012345678");
        req.name = "a".repeat(101);
        assert!(matches!(
            validate_record_request(&req),
            Err(AppError::ValidationError(_))
        ));
    }
}
