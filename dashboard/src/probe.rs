//! アグリゲーター
//!
//! レジストリ順に各バックエンドへヘルスチェックと購読者一覧取得を行い、
//! 成否を値として集約する。1つのバックエンドの障害が他のバックエンドの
//! 結果へ波及しないことがこのモジュールの中心的な性質。

use std::time::{Duration, Instant};

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::registry::{BackendEntry, BackendRegistry};

/// プローブ失敗種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// 接続失敗・タイムアウト等のトランスポート層エラー
    Transport,
    /// 非成功HTTPステータス
    Application,
}

/// プローブ失敗の内容
///
/// `detail` はそのまま表示できる人間向けマーカー行。
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{detail}")]
pub struct ProbeFailure {
    /// 失敗種別
    pub kind: FailureKind,
    /// 人間向けの原因説明
    pub detail: String,
}

impl ProbeFailure {
    fn transport(detail: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Transport,
            detail: detail.into(),
        }
    }

    fn application(detail: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Application,
            detail: detail.into(),
        }
    }
}

/// プローブ結果（成功本文または失敗内容）
///
/// 集約境界を例外が越えることはなく、失敗もこの値として運ばれる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// 成功（応答本文をそのまま保持）
    Ok {
        /// 応答本文
        body: String,
    },
    /// 失敗
    Failed {
        /// 失敗内容
        #[serde(flatten)]
        failure: ProbeFailure,
    },
}

impl ProbeOutcome {
    /// 成功結果を作る
    pub fn ok(body: impl Into<String>) -> Self {
        Self::Ok { body: body.into() }
    }

    /// 失敗結果を作る
    pub fn failed(failure: ProbeFailure) -> Self {
        Self::Failed { failure }
    }

    /// 成功かどうか
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }

    /// 表示用テキスト（成功は本文、失敗はマーカー行）
    pub fn display_text(&self) -> &str {
        match self {
            Self::Ok { body } => body,
            Self::Failed { failure } => &failure.detail,
        }
    }
}

/// バックエンド1件の集約結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceReport {
    /// バックエンド表示名
    pub name: String,
    /// ヘルスチェック結果
    pub status: ProbeOutcome,
    /// 購読者一覧取得結果
    pub users: ProbeOutcome,
}

/// 集約結果全体。必ずレジストリと同数・同順
pub type ResultSet = Vec<ServiceReport>;

/// プローブのタイムアウト設定
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// ヘルスチェックのタイムアウト
    pub health_timeout: Duration,
    /// 一覧取得のタイムアウト
    pub users_timeout: Duration,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            health_timeout: Duration::from_secs(2),
            users_timeout: Duration::from_secs(3),
        }
    }
}

/// アグリゲーター
///
/// HTTPクライアントとタイムアウト設定を保持し、レジストリ全体の集約を行う。
#[derive(Clone)]
pub struct Collector {
    client: reqwest::Client,
    config: ProbeConfig,
}

impl Collector {
    /// プローブ設定からアグリゲーターを作成する
    pub fn new(config: ProbeConfig) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("Failed to create HTTP client");
        Self { client, config }
    }

    /// レジストリ全体を集約する
    ///
    /// レジストリ順に1件ずつ処理し、必ずレジストリと同数の結果を返す。
    /// 個々の失敗は値として記録し、他のバックエンドの処理を妨げない。
    pub async fn collect(&self, registry: &BackendRegistry) -> ResultSet {
        let mut reports = Vec::with_capacity(registry.len());
        for entry in registry.entries() {
            reports.push(self.probe_backend(entry).await);
        }
        reports
    }

    /// バックエンド1件に対してヘルスチェックと一覧取得を行う
    ///
    /// 両プローブは独立しており、片方の失敗はもう片方を妨げない。
    async fn probe_backend(&self, entry: &BackendEntry) -> ServiceReport {
        let status = self.probe_health(entry).await;
        let users = self.probe_users(entry).await;
        ServiceReport {
            name: entry.name.clone(),
            status,
            users,
        }
    }

    /// GET {base_url}/health
    async fn probe_health(&self, entry: &BackendEntry) -> ProbeOutcome {
        let url = format!("{}/health", entry.base_url);
        let started = Instant::now();
        let result = self
            .client
            .get(&url)
            .timeout(self.config.health_timeout)
            .send()
            .await;
        let latency_ms = started.elapsed().as_millis();

        match result {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    match response.text().await {
                        Ok(body) => {
                            debug!("health probe for {} ok in {}ms", entry.name, latency_ms);
                            ProbeOutcome::ok(body)
                        }
                        Err(e) => {
                            warn!("health probe for {} failed to read body: {}", entry.name, e);
                            ProbeOutcome::failed(ProbeFailure::transport(format!(
                                "❌ unreachable: {}",
                                describe_transport_error(&e, self.config.health_timeout)
                            )))
                        }
                    }
                } else {
                    warn!(
                        "health probe for {} returned HTTP {} in {}ms",
                        entry.name,
                        status.as_u16(),
                        latency_ms
                    );
                    ProbeOutcome::failed(ProbeFailure::application(format!(
                        "❌ HTTP {}",
                        status.as_u16()
                    )))
                }
            }
            Err(e) => {
                warn!(
                    "health probe for {} failed after {}ms: {}",
                    entry.name, latency_ms, e
                );
                ProbeOutcome::failed(ProbeFailure::transport(format!(
                    "❌ unreachable: {}",
                    describe_transport_error(&e, self.config.health_timeout)
                )))
            }
        }
    }

    /// GET {base_url}/users
    ///
    /// 成功時は本文を一切解釈せずそのまま保持する。非成功ステータスの
    /// 本文は決して中継しない。
    async fn probe_users(&self, entry: &BackendEntry) -> ProbeOutcome {
        let url = format!("{}/users", entry.base_url);
        let started = Instant::now();
        let result = self
            .client
            .get(&url)
            .timeout(self.config.users_timeout)
            .send()
            .await;
        let latency_ms = started.elapsed().as_millis();

        match result {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    match response.text().await {
                        Ok(body) => {
                            debug!("users fetch for {} ok in {}ms", entry.name, latency_ms);
                            ProbeOutcome::ok(body)
                        }
                        Err(e) => {
                            warn!("users fetch for {} failed to read body: {}", entry.name, e);
                            ProbeOutcome::failed(ProbeFailure::transport(format!(
                                "❌ no data: {}",
                                describe_transport_error(&e, self.config.users_timeout)
                            )))
                        }
                    }
                } else {
                    warn!(
                        "users fetch for {} returned HTTP {} in {}ms",
                        entry.name,
                        status.as_u16(),
                        latency_ms
                    );
                    ProbeOutcome::failed(ProbeFailure::application(format!(
                        "❌ failed to fetch users (HTTP {})",
                        status.as_u16()
                    )))
                }
            }
            Err(e) => {
                warn!(
                    "users fetch for {} failed after {}ms: {}",
                    entry.name, latency_ms, e
                );
                ProbeOutcome::failed(ProbeFailure::transport(format!(
                    "❌ no data: {}",
                    describe_transport_error(&e, self.config.users_timeout)
                )))
            }
        }
    }
}

/// トランスポートエラーを短い人間向け文字列にする
fn describe_transport_error(e: &reqwest::Error, timeout: Duration) -> String {
    if e.is_timeout() {
        format!("timed out after {}", format_timeout(timeout))
    } else {
        e.to_string()
    }
}

fn format_timeout(timeout: Duration) -> String {
    if timeout.as_secs() > 0 && timeout.subsec_millis() == 0 {
        format!("{}s", timeout.as_secs())
    } else {
        format!("{}ms", timeout.as_millis())
    }
}
