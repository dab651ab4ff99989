// 认证客户端模块
// 负责登录、注册与 Google OAuth 回调

use anyhow::{anyhow, Result};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tracing::debug;

use crate::models::{AuthSession, UserProfile};

/// 远端认证服务客户端
#[derive(Clone)]
pub struct AuthClient {
    client: Client,
}

impl AuthClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// 邮箱密码登录
    pub async fn login(&self, api_url: &str, email: &str, password: &str) -> Result<AuthSession> {
        self.post_auth(
            api_url,
            "/api/auth/login",
            json!({ "email": email, "password": password }),
            "登录失败",
        )
        .await
    }

    /// 注册新账号
    pub async fn register(
        &self,
        api_url: &str,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<AuthSession> {
        self.post_auth(
            api_url,
            "/api/auth/register",
            json!({ "email": email, "password": password, "name": name }),
            "注册失败",
        )
        .await
    }

    /// 使用 Google 身份令牌登录
    ///
    /// 服务端同时接受 id_token 和 credential 字段，两者携带
    /// 同一令牌。
    pub async fn login_with_google(&self, api_url: &str, id_token: &str) -> Result<AuthSession> {
        self.post_auth(
            api_url,
            "/api/auth/oauth/google",
            json!({ "id_token": id_token, "credential": id_token }),
            "Google 登录失败",
        )
        .await
    }

    /// 校验令牌并获取当前用户信息
    pub async fn fetch_current_user(&self, api_url: &str, token: &str) -> Result<UserProfile> {
        let url = format!("{}/api/auth/me", api_url.trim_end_matches('/'));
        debug!("校验会话令牌: {}", url);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| anyhow!("无法连接认证服务: {}", e))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(anyhow!("{}", error_message(status, &body, "获取用户信息失败")));
        }

        serde_json::from_str(&body).map_err(|e| anyhow!("认证服务返回了无法解析的内容: {}", e))
    }

    async fn post_auth(
        &self,
        api_url: &str,
        path: &str,
        payload: Value,
        failure: &str,
    ) -> Result<AuthSession> {
        let url = format!("{}{}", api_url.trim_end_matches('/'), path);
        debug!("提交认证请求: {}", url);

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| anyhow!("无法连接认证服务: {}", e))?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if !status.is_success() {
            return Err(anyhow!("{}", error_message(status, &body, failure)));
        }

        serde_json::from_str(&body).map_err(|e| anyhow!("认证服务返回了无法解析的内容: {}", e))
    }
}

/// 从失败响应中提取错误信息：优先取响应体的 error 字段
fn error_message(status: StatusCode, body: &str, fallback: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("error")
                .and_then(|e| e.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| format!("{} (HTTP {})", fallback, status.as_u16()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_uses_body_error_field() {
        let message = error_message(
            StatusCode::UNAUTHORIZED,
            r#"{"error": "Invalid email or password"}"#,
            "登录失败",
        );
        assert_eq!(message, "Invalid email or password");
    }

    #[test]
    fn test_error_message_generic_fallback() {
        let message = error_message(StatusCode::UNAUTHORIZED, "", "登录失败");
        assert_eq!(message, "登录失败 (HTTP 401)");
    }
}
