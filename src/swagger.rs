use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::spin::check_status,
        handlers::spin::get_prizes,
        handlers::spin::record_spin,
        handlers::spin::get_records,
    ),
    components(
        schemas(
            SpinStatusQuery,
            SpinStatusResponse,
            RecordSpinRequest,
            RecordSpinResponse,
            SpinRecordQuery,
            SpinRecordResponse,
            PrizeSlot,
            ApiError,
        )
    ),
    tags(
        (name = "spin", description = "Spin the wheel API"),
    ),
    info(
        title = "Spin & Win Backend API",
        version = "1.0.0",
        description = "Spin & Win promotional wheel REST API documentation"
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
