//! 二维码通行证
//!
//! 游戏站扫码后读取的是一段 JSON：`{name, username, email, token, age?, gender?, phone?}`。

use gamepass_shared::Session;
use qrcode::render::svg;
use qrcode::{EcLevel, QrCode};
use serde::Serialize;

pub const PASS_SIZE: u32 = 250;
pub const PASS_CAPTION: &str = "Scan this QR code at any game station to start playing";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PassError {
    #[error("Failed to encode pass payload: {0}")]
    Encode(String),
    #[error("Failed to build QR code: {0}")]
    Qr(String),
}

/// 字段顺序即 JSON 键的顺序
#[derive(Debug, Serialize)]
struct PassPayload<'a> {
    name: &'a str,
    username: &'a str,
    email: &'a str,
    token: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gender: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<&'a str>,
}

pub fn pass_payload(session: &Session) -> Result<String, PassError> {
    let payload = PassPayload {
        name: &session.name,
        username: &session.username,
        email: &session.email,
        token: &session.token,
        age: session.age,
        gender: session.gender.as_deref(),
        phone: session.phone.as_deref(),
    };
    serde_json::to_string(&payload).map_err(|e| PassError::Encode(e.to_string()))
}

/// 渲染为内联 SVG，最高纠错等级并保留静区
pub fn render_pass_svg(session: &Session) -> Result<String, PassError> {
    let payload = pass_payload(session)?;
    let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::H)
        .map_err(|e| PassError::Qr(e.to_string()))?;

    Ok(code
        .render::<svg::Color>()
        .min_dimensions(PASS_SIZE, PASS_SIZE)
        .quiet_zone(true)
        .build())
}
