use actix_cors::Cors;

pub fn create_cors() -> Cors {
    // 活动页面会被嵌入各种推广渠道，跨域放开；客户端不携带凭据
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_any_header()
        .max_age(3600)
}
