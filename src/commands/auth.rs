//! 认证命令
//!
//! 登录、注册与 Google OAuth；成功后令牌写入会话状态，
//! 任一失败路径都会先清除残留的会话再返回错误信息。

use tracing::{info, warn};

use crate::models::{AuthSession, UserProfile};
use crate::AppState;

/// 邮箱密码登录
#[tauri::command]
pub async fn login(
    state: tauri::State<'_, AppState>,
    email: String,
    password: String,
) -> Result<UserProfile, String> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("请输入邮箱和密码".to_string());
    }

    let settings = state.storage_domain.get_settings().get().await;
    let outcome = state
        .auth_domain
        .get_client()
        .login(&settings.api_url, email.trim(), &password)
        .await;

    finish_auth(&state, outcome).await
}

/// 注册新账号
#[tauri::command]
pub async fn register(
    state: tauri::State<'_, AppState>,
    email: String,
    password: String,
    name: Option<String>,
) -> Result<UserProfile, String> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("请输入邮箱和密码".to_string());
    }

    let settings = state.storage_domain.get_settings().get().await;
    let outcome = state
        .auth_domain
        .get_client()
        .register(&settings.api_url, email.trim(), &password, name.as_deref())
        .await;

    finish_auth(&state, outcome).await
}

/// 使用 Google 身份令牌登录
#[tauri::command]
pub async fn login_with_google(
    state: tauri::State<'_, AppState>,
    id_token: String,
) -> Result<UserProfile, String> {
    if id_token.trim().is_empty() {
        return Err("缺少 Google 身份令牌".to_string());
    }

    let settings = state.storage_domain.get_settings().get().await;
    let outcome = state
        .auth_domain
        .get_client()
        .login_with_google(&settings.api_url, id_token.trim())
        .await;

    finish_auth(&state, outcome).await
}

/// 登出，清除本地会话
#[tauri::command]
pub async fn logout(state: tauri::State<'_, AppState>) -> Result<(), String> {
    state
        .auth_domain
        .get_session()
        .clear()
        .await
        .map_err(|e| format!("清除会话失败: {}", e))?;

    info!("已登出");
    Ok(())
}

/// 获取当前登录用户；令牌缺失或失效时返回 None
#[tauri::command]
pub async fn current_user(
    state: tauri::State<'_, AppState>,
) -> Result<Option<UserProfile>, String> {
    let Some(token) = state.auth_domain.get_session().token().await else {
        return Ok(None);
    };

    let settings = state.storage_domain.get_settings().get().await;

    match state
        .auth_domain
        .get_client()
        .fetch_current_user(&settings.api_url, &token)
        .await
    {
        Ok(user) => Ok(Some(user)),
        Err(e) => {
            // 令牌失效视为未登录，同时清掉本地会话
            warn!("令牌校验失败: {}", e);
            clear_session(&state).await;
            Ok(None)
        }
    }
}

/// 认证调用的统一收尾：成功写入令牌，失败清除会话
async fn finish_auth(
    state: &tauri::State<'_, AppState>,
    outcome: anyhow::Result<AuthSession>,
) -> Result<UserProfile, String> {
    match outcome {
        Ok(auth) => {
            state
                .auth_domain
                .get_session()
                .set_token(auth.token)
                .await
                .map_err(|e| format!("保存会话失败: {}", e))?;

            info!("认证成功: {}", auth.user.email);
            Ok(auth.user)
        }
        Err(e) => {
            clear_session(state).await;
            Err(e.to_string())
        }
    }
}

async fn clear_session(state: &tauri::State<'_, AppState>) {
    if let Err(e) = state.auth_domain.get_session().clear().await {
        warn!("清除会话失败: {}", e);
    }
}
