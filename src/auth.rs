//! 登录与注册流程
//!
//! 表单校验、请求发送以及从响应构造 `Session`。写入会话存储和跳转由调用方负责。

use std::fmt::Display;
use std::str::FromStr;

use gamepass_shared::Session;
use gamepass_shared::protocol::{AuthResponse, LoginRequest, RegisterRequest};

use crate::api::GamePassApi;
use crate::request::{HttpClient, RequestError};

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";

/// 发请求之前就能发现的问题
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Please enter a valid age")]
    InvalidAge,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Request(#[from] RequestError),
}

impl AuthError {
    /// 显示用文本，消息为空时使用 `fallback`
    pub fn message_or(&self, fallback: &str) -> String {
        let message = self.to_string();
        if message.is_empty() {
            fallback.to_string()
        } else {
            message
        }
    }
}

// =========================================================
// 登录
// =========================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    fn to_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// 服务端没有返回的资料用空串或提交的邮箱补齐
pub fn session_from_login(resp: AuthResponse, submitted_email: &str) -> Session {
    let user = resp.user;
    Session {
        id: user.id,
        name: user.name.unwrap_or_default(),
        username: user.username.unwrap_or_default(),
        email: user
            .email
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| submitted_email.to_string()),
        token: resp.token,
        age: user.age,
        gender: user.gender,
        phone: user.phone,
        photo_url: None,
    }
}

pub async fn login<C: HttpClient>(
    api: &GamePassApi<C>,
    form: &LoginForm,
) -> Result<Session, AuthError> {
    let resp = api.login(&form.to_request()).await?;
    log_info!("[Auth] Signed in as {}", resp.user.id);
    Ok(session_from_login(resp, &form.email))
}

// =========================================================
// 注册
// =========================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL.into_iter().find(|g| g.as_str() == s).ok_or(())
    }
}

/// 注册表单的原始输入，年龄保持为文本直到提交
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub age: String,
    pub gender: Gender,
    pub phone: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<RegisterRequest, FormError> {
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        let age = self
            .age
            .trim()
            .parse::<u32>()
            .map_err(|_| FormError::InvalidAge)?;

        Ok(RegisterRequest {
            name: self.name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            age,
            gender: self.gender.as_str().to_string(),
            phone: self.phone.clone(),
        })
    }
}

/// 只取响应中的 id 和 token，其余资料来自表单
pub fn session_from_registration(resp: AuthResponse, req: &RegisterRequest) -> Session {
    Session {
        id: resp.user.id,
        name: req.name.clone(),
        username: req.username.clone(),
        email: req.email.clone(),
        token: resp.token,
        age: Some(req.age),
        gender: Some(req.gender.clone()),
        phone: Some(req.phone.clone()),
        photo_url: None,
    }
}

pub async fn register<C: HttpClient>(
    api: &GamePassApi<C>,
    form: &RegistrationForm,
) -> Result<Session, AuthError> {
    let req = form.validate()?;
    let resp = api.register(&req).await?;
    log_info!("[Auth] Registered {}", resp.user.id);
    Ok(session_from_registration(resp, &req))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use crate::request::MockHttpClient;
    use crate::session::{MemoryBackend, SessionStore};
    use serde_json::{Value, json};

    const HOST: &str = "http://api.test";
    const LOGIN_URL: &str = "http://api.test/api/auth/login";
    const REGISTER_URL: &str = "http://api.test/api/auth/register";

    fn api(client: &MockHttpClient) -> GamePassApi<&MockHttpClient> {
        GamePassApi::new(ApiConfig::new(HOST), client)
    }

    fn registration() -> RegistrationForm {
        RegistrationForm {
            name: "Ada Lovelace".into(),
            username: "ada".into(),
            email: "ada@example.com".into(),
            password: "secret".into(),
            confirm_password: "secret".into(),
            age: "36".into(),
            gender: Gender::Female,
            phone: "555-0100".into(),
        }
    }

    #[tokio::test]
    async fn test_login_fills_missing_profile_fields() {
        let client = MockHttpClient::new();
        client.mock_response(
            LOGIN_URL,
            200,
            json!({"token": "tok", "user": {"id": "u1", "age": 30}}),
        );

        let form = LoginForm {
            email: "ada@example.com".into(),
            password: "pw".into(),
        };
        let session = login(&api(&client), &form).await.unwrap();

        assert_eq!(session.id, "u1");
        assert_eq!(session.name, "");
        assert_eq!(session.username, "");
        assert_eq!(session.email, "ada@example.com");
        assert_eq!(session.token, "tok");
        assert_eq!(session.age, Some(30));
        assert_eq!(session.gender, None);
    }

    #[tokio::test]
    async fn test_rejected_login_leaves_store_untouched() {
        let client = MockHttpClient::new();
        client.mock_response(LOGIN_URL, 401, json!({"message": "Invalid credentials"}));

        let mut store = SessionStore::restore(MemoryBackend::default());
        let form = LoginForm {
            email: "ada@example.com".into(),
            password: "wrong".into(),
        };

        match login(&api(&client), &form).await {
            Ok(session) => store.login(session),
            Err(e) => assert_eq!(e.message_or(LOGIN_FAILED), "Invalid credentials"),
        }
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn test_password_mismatch_sends_nothing() {
        let client = MockHttpClient::new();
        let mut form = registration();
        form.confirm_password = "different".into();

        let err = register(&api(&client), &form).await.unwrap_err();

        assert_eq!(err, AuthError::Form(FormError::PasswordMismatch));
        assert_eq!(err.to_string(), "Passwords do not match");
        assert_eq!(client.request_count(), 0);
    }

    #[tokio::test]
    async fn test_non_numeric_age_is_rejected_locally() {
        let client = MockHttpClient::new();
        let mut form = registration();
        form.age = "old".into();

        let err = register(&api(&client), &form).await.unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid age");
        assert_eq!(client.request_count(), 0);
    }

    #[tokio::test]
    async fn test_registration_sends_integer_age_and_builds_session_from_form() {
        let client = MockHttpClient::new();
        client.mock_response(
            REGISTER_URL,
            201,
            json!({"token": "tok-r", "user": {"id": "u9", "name": "Server Name"}}),
        );

        let session = register(&api(&client), &registration()).await.unwrap();

        let reqs = client.requests.borrow();
        let body: Value = serde_json::from_str(reqs[0].3.as_deref().unwrap()).unwrap();
        assert_eq!(body["age"], json!(36));
        assert_eq!(body["gender"], json!("female"));
        assert!(body.get("confirmPassword").is_none());

        assert_eq!(session.id, "u9");
        assert_eq!(session.token, "tok-r");
        assert_eq!(session.name, "Ada Lovelace");
        assert_eq!(session.phone.as_deref(), Some("555-0100"));
    }

    #[tokio::test]
    async fn test_registration_conflict_surfaces_server_message() {
        let client = MockHttpClient::new();
        client.mock_response(REGISTER_URL, 409, json!({"message": "Email already exists"}));

        let err = register(&api(&client), &registration()).await.unwrap_err();
        assert_eq!(err.message_or(REGISTRATION_FAILED), "Email already exists");
    }

    #[test]
    fn test_gender_defaults_to_male() {
        assert_eq!(RegistrationForm::default().gender, Gender::Male);
        assert_eq!("other".parse::<Gender>(), Ok(Gender::Other));
        assert!("unknown".parse::<Gender>().is_err());
    }

    #[test]
    fn test_empty_message_uses_fallback() {
        let err = AuthError::from(RequestError::Transport(String::new()));
        assert_eq!(err.message_or(LOGIN_FAILED), "Login failed");
    }
}
