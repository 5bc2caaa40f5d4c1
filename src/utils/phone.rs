use crate::error::{AppError, AppResult};
use regex::Regex;

/// 验证手机号格式
/// 接受两种形式:
/// - 国际格式: +国家码(1-3位) 可带一个空格或连字符分隔 (+234 8012345678)
/// - 本地格式: 0 开头的 10-11 位数字 (08012345678)
/// 去掉空格与连字符后总长度须在 10-15 之间
pub fn validate_phone(phone: &str) -> AppResult<()> {
    let phone_regex = Regex::new(r"^(\+\d{1,3}[- ]?\d{1,12}|0\d{9,10})$").unwrap();

    if !phone_regex.is_match(phone) {
        return Err(AppError::ValidationError(
            "Invalid phone number format".to_string(),
        ));
    }

    let compact: String = phone.chars().filter(|c| *c != ' ' && *c != '-').collect();
    if compact.chars().count() < 10 || compact.chars().count() > 15 {
        return Err(AppError::ValidationError(
            "Invalid phone number format".to_string(),
        ));
    }

    Ok(())
}

/// 规整手机号 (仅去除首尾空白，保留用户输入的原始形式作为唯一键)
pub fn normalize_phone(phone: &str) -> String {
    phone.trim().to_string()
}
