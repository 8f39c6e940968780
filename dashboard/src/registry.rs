//! バックエンドレジストリ
//!
//! 起動時に一度だけ構築する、順序付きで不変のバックエンド一覧。
//! 表示名はレジストリ内で一意。

use std::collections::HashSet;

use subdash_common::error::{CommonError, CommonResult};

/// 監視対象バックエンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendEntry {
    /// 表示名（レジストリ内で一意）
    pub name: String,
    /// ベースURL（末尾スラッシュは除去済み）
    pub base_url: String,
}

impl BackendEntry {
    /// 表示名とベースURLからエントリを作成する
    pub fn new(name: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            name: name.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// `Name=URL` 形式の文字列をパースする
    pub fn parse(raw: &str) -> CommonResult<Self> {
        let (name, url) = raw.split_once('=').ok_or_else(|| {
            CommonError::Config(format!("invalid backend entry '{}', expected Name=URL", raw))
        })?;
        let name = name.trim();
        let url = url.trim();
        if name.is_empty() || url.is_empty() {
            return Err(CommonError::Config(format!(
                "invalid backend entry '{}', expected Name=URL",
                raw
            )));
        }
        Ok(Self::new(name, url))
    }
}

/// 設定順を保持する不変レジストリ
#[derive(Debug, Clone, Default)]
pub struct BackendRegistry {
    entries: Vec<BackendEntry>,
}

impl BackendRegistry {
    /// エントリ列からレジストリを構築する
    ///
    /// 表示名の重複は設定エラー。
    pub fn new(entries: Vec<BackendEntry>) -> CommonResult<Self> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.name.as_str()) {
                return Err(CommonError::Config(format!(
                    "duplicate backend name '{}'",
                    entry.name
                )));
            }
        }
        Ok(Self { entries })
    }

    /// `Name=URL` 形式の文字列列からレジストリを構築する
    pub fn parse(raw_entries: &[String]) -> CommonResult<Self> {
        let entries = raw_entries
            .iter()
            .map(|raw| BackendEntry::parse(raw))
            .collect::<CommonResult<Vec<_>>>()?;
        Self::new(entries)
    }

    /// 設定順のエントリ一覧
    pub fn entries(&self) -> &[BackendEntry] {
        &self.entries
    }

    /// 登録済みバックエンド数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// レジストリが空かどうか
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
