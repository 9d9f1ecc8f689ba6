//! HTTP 请求封装模块
//!
//! 使用 `web_sys::fetch` 实现核心库的 `HttpClient` 特性。

use async_trait::async_trait;
use gamepass::RequestError;
use gamepass::request::{HttpClient, HttpRequest, HttpResponse};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// 浏览器 fetch 客户端，每次调用只发一次请求
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FetchClient;

/// JS 异常转为传输错误，优先使用 `Error.message`
fn transport_error(e: JsValue) -> RequestError {
    let message = e
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .or_else(|| e.as_string())
        .unwrap_or_else(|| format!("{:?}", e));
    RequestError::Transport(message)
}

#[async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, RequestError> {
        let headers = Headers::new().map_err(transport_error)?;
        for (key, value) in &req.headers {
            headers.set(key, value).map_err(transport_error)?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());

        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(&req.url, &opts).map_err(transport_error)?;

        let window = web_sys::window()
            .ok_or_else(|| RequestError::Transport("window is not available".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(transport_error)?;

        let response: Response = resp_value.dyn_into().map_err(transport_error)?;
        let status = response.status();

        let text = JsFuture::from(response.text().map_err(transport_error)?)
            .await
            .map_err(transport_error)?;

        Ok(HttpResponse {
            status,
            body: text.as_string().unwrap_or_default(),
        })
    }
}
