use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;
use serde::Deserialize;

/// 設定ファイルのパスを指定する環境変数。
pub const CONFIG_ENV: &str = "SCG_BILLING_CONFIG";

const APP_DIR: &str = "scg-billing";
const CONFIG_FILE: &str = "invoice.toml";

/// 請求書のヘッダーとフッターに載せる事業者情報。
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BusinessIdentity {
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

impl BusinessIdentity {
    /// ヘッダー用の名前と住所のブロックを返す。
    pub fn text_block(&self) -> String {
        format!(
            "{}\n{}\n{}, {} {}\n",
            self.name, self.street, self.city, self.state, self.zip
        )
    }
}

/// 事業者情報の取得元。
#[cfg_attr(test, mockall::automock)]
pub trait BusinessIdentitySource {
    /// 事業者情報を取得する。取得できない場合はI/Oエラーを返す。
    fn business_identity(&self) -> io::Result<BusinessIdentity>;
}

/// TOMLファイルから事業者情報を読み込む。
///
/// 読み込みは請求書を描画するたびに行い、結果をキャッシュしない。
pub struct TomlBusinessIdentity {
    path: PathBuf,
}

impl TomlBusinessIdentity {
    /// 新しい`TomlBusinessIdentity`を返す。
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// 引数、環境変数、OSの設定ディレクトリの順に設定ファイルのパスを決める。
    ///
    /// # Arguments
    ///
    /// * `path` - コマンドラインで指定されたパス
    pub fn locate(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            return Ok(Self::new(path));
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(Self::new(PathBuf::from(path)));
        }

        let mut path = dirs::config_dir().context("failed to resolve OS config directory")?;
        path.push(APP_DIR);
        path.push(CONFIG_FILE);

        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BusinessIdentitySource for TomlBusinessIdentity {
    fn business_identity(&self) -> io::Result<BusinessIdentity> {
        debug!("Loading business identity from: {:?}", self.path);
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("config file {:?} unreadable: {}", self.path, e),
            )
        })?;

        toml::from_str(&contents).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("failed to parse TOML from config file {:?}: {}", self.path, e),
            )
        })
    }
}
