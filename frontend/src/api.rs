use gamepass::{ApiConfig, GamePassApi};
use leptos::prelude::*;

use crate::web::FetchClient;

pub type Api = GamePassApi<FetchClient>;

/// 构建 API 客户端，主机地址在编译期通过 `GAMEPASS_API_HOST` 覆盖
pub fn provide_api() {
    provide_context(GamePassApi::new(ApiConfig::from_env(), FetchClient));
}

pub fn use_api() -> Api {
    use_context::<Api>().expect("GamePassApi should be provided")
}
