use crate::config::ServiceConfig;
use crate::domain::{
    models::{CommandContext, CommandResult, Suggestion},
    service::CommandService,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

const AUTHENTICATE_PATH: &str = "/web/session/authenticate";
const CALL_KW_PATH: &str = "/web/dataset/call_kw";

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server error {code}: {message}")]
    Remote { code: i64, message: String },
    #[error("malformed response: {0}")]
    Protocol(String),
    #[error("authentication rejected for {login}")]
    Authentication { login: String },
}

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    method: &'static str,
    params: &'a Value,
    id: u64,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcFault>,
}

#[derive(Debug, Deserialize)]
struct RpcFault {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
    #[serde(default)]
    data: Option<FaultData>,
}

#[derive(Debug, Deserialize)]
struct FaultData {
    #[serde(default)]
    message: Option<String>,
}

impl RpcResponse {
    fn into_result(self) -> Result<Value, RpcError> {
        if let Some(fault) = self.error {
            // The useful text lives in data.message; the top-level one is generic
            let message = fault
                .data
                .and_then(|d| d.message)
                .filter(|m| !m.is_empty())
                .unwrap_or(fault.message);
            return Err(RpcError::Remote {
                code: fault.code,
                message,
            });
        }
        Ok(self.result.unwrap_or(Value::Null))
    }
}

/// JSON-RPC client for the palette model exposed by an Odoo server.
pub struct RpcAdapter {
    client: reqwest::Client,
    base_url: String,
    model: String,
    next_id: AtomicU64,
}

impl RpcAdapter {
    pub fn new(config: &ServiceConfig) -> Result<Self, RpcError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            next_id: AtomicU64::new(1),
        })
    }

    /// Opens a session (kept in the cookie jar) and returns the user id.
    pub async fn authenticate(
        &self,
        database: &str,
        login: &str,
        password: &str,
    ) -> Result<i64, RpcError> {
        let params = json!({
            "db": database,
            "login": login,
            "password": password,
        });
        let result = self.call(AUTHENTICATE_PATH, &params).await?;
        let uid = result.get("uid").and_then(Value::as_i64).ok_or_else(|| {
            RpcError::Authentication {
                login: login.to_string(),
            }
        })?;
        tracing::info!(uid, login, "authenticated");
        Ok(uid)
    }

    async fn call(&self, path: &str, params: &Value) -> Result<Value, RpcError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = RpcRequest {
            jsonrpc: "2.0",
            method: "call",
            params,
            id,
        };

        tracing::debug!(id, path, "rpc request");
        let response: RpcResponse = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        response.into_result()
    }

    async fn call_kw(&self, method: &str, args: Value, kwargs: Value) -> Result<Value, RpcError> {
        let params = call_kw_params(&self.model, method, args, kwargs);
        self.call(CALL_KW_PATH, &params).await
    }
}

fn call_kw_params(model: &str, method: &str, args: Value, kwargs: Value) -> Value {
    json!({
        "model": model,
        "method": method,
        "args": args,
        "kwargs": kwargs,
    })
}

#[async_trait]
impl CommandService for RpcAdapter {
    async fn command_suggestions(&self, partial: &str) -> anyhow::Result<Vec<Suggestion>> {
        let value = self
            .call_kw("get_command_suggestions", json!([partial]), json!({}))
            .await?;
        let suggestions: Vec<Suggestion> = serde_json::from_value(value)
            .map_err(|e| RpcError::Protocol(format!("suggestions: {e}")))?;
        Ok(suggestions)
    }

    async fn execute_command(
        &self,
        command: &str,
        context: &CommandContext,
    ) -> anyhow::Result<CommandResult> {
        let value = self
            .call_kw(
                "execute_command",
                json!([command]),
                json!({ "context": context }),
            )
            .await?;
        Ok(CommandResult::from_value(value))
    }
}
