// 认证领域管理器
//
// 负责远端认证调用与本地会话令牌
// 包含 AuthClient 和 SessionManager 两个核心组件

use std::sync::Arc;

use crate::auth::AuthClient;
use crate::session::SessionManager;

/// 认证领域管理器 - 负责认证客户端和会话状态
#[derive(Clone)]
pub struct AuthDomain {
    client: Arc<AuthClient>,
    session: Arc<SessionManager>,
}

impl AuthDomain {
    /// 创建新的认证领域管理器
    pub fn new(client: Arc<AuthClient>, session: Arc<SessionManager>) -> Self {
        Self { client, session }
    }

    /// 获取认证客户端
    pub fn get_client(&self) -> &Arc<AuthClient> {
        &self.client
    }

    /// 获取会话管理器
    pub fn get_session(&self) -> &Arc<SessionManager> {
        &self.session
    }
}
