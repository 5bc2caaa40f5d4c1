use crate::models::*;
use crate::services::SpinService;
use actix_web::{HttpResponse, ResponseError, Result, web};

#[utoipa::path(
    get,
    path = "/spin/status",
    tag = "spin",
    params(
        ("phone_number" = String, Query, description = "手机号")
    ),
    responses(
        (status = 200, description = "查询抽奖状态成功", body = SpinStatusResponse),
        (status = 400, description = "手机号缺失或格式无效")
    )
)]
/// 查询手机号是否已抽过奖
/// 已抽过时返回当时的奖品与姓名 (幂等的 "already spun" 查询)
pub async fn check_status(
    service: web::Data<SpinService>,
    query: web::Query<SpinStatusQuery>,
) -> Result<HttpResponse> {
    match service.check_status(&query.phone_number).await {
        Ok(data) => Ok(HttpResponse::Ok().json(ApiResponse::success(data))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/spin/prizes",
    tag = "spin",
    responses(
        (status = 200, description = "获取转盘格子配置成功", body = [PrizeSlot])
    )
)]
/// 获取转盘格子配置 (前端据此绘制转盘并等概率选格)
pub async fn get_prizes(service: web::Data<SpinService>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(service.list_prizes())))
}

#[utoipa::path(
    post,
    path = "/spin",
    tag = "spin",
    request_body = RecordSpinRequest,
    responses(
        (status = 201, description = "登记抽奖结果成功", body = RecordSpinResponse),
        (status = 400, description = "字段缺失或格式无效"),
        (status = 409, description = "该手机号已抽过奖，error 中附带 existing_prize")
    )
)]
/// 登记一次抽奖结果 (一个手机号只能登记一次):
/// 1. 校验手机号 / 姓名 / 奖品文案
/// 2. 先查后插，已有记录返回 409 与已抽中的奖品
/// 3. 并发竞争时由唯一索引兜底，输家同样收到赢家的奖品
pub async fn record_spin(
    service: web::Data<SpinService>,
    request: web::Json<RecordSpinRequest>,
) -> Result<HttpResponse> {
    match service.record_spin(request.into_inner()).await {
        Ok(data) => Ok(HttpResponse::Created().json(ApiResponse::success(data))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/spin/records",
    tag = "spin",
    params(
        ("page" = Option<u32>, Query, description = "页码 (默认1)"),
        ("per_page" = Option<u32>, Query, description = "每页数量 (默认20)")
    ),
    responses(
        (status = 200, description = "获取抽奖记录成功", body = PaginatedResponse<SpinRecordResponse>)
    )
)]
/// 分页获取抽奖记录（倒序，供运营查看）
pub async fn get_records(
    service: web::Data<SpinService>,
    query: web::Query<SpinRecordQuery>,
) -> Result<HttpResponse> {
    match service.list_records(&query.into_inner()).await {
        Ok(page) => Ok(HttpResponse::Ok().json(ApiResponse::success(page))),
        Err(e) => Ok(e.error_response()),
    }
}

/// 路由配置
pub fn spin_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/spin")
            .route("/status", web::get().to(check_status))
            .route("/prizes", web::get().to(get_prizes))
            .route("/records", web::get().to(get_records))
            .route("", web::post().to(record_spin)),
    );
}
