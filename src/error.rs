use thiserror::Error;

/// 請求処理のドメインで発生するエラー。
#[derive(Debug, Error)]
pub enum BillingError {
    /// 作業時間が1時間未満で登録されようとした。
    #[error("hours must be greater than zero: {0}")]
    InvalidHours(i32),

    /// 月として扱えない値が指定された。
    #[error("invalid billing month: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },

    /// 開始日が終了日より後の期間が指定された。
    #[error("start date {start} is after end date {end}")]
    InvertedDateRange {
        start: chrono::NaiveDate,
        end: chrono::NaiveDate,
    },

    /// 入力コレクションに想定外の種類の要素が含まれていた。
    #[error("{collection}[{index}]: expected {expected}, found {found}")]
    UnexpectedKind {
        collection: &'static str,
        index: usize,
        expected: &'static str,
        found: String,
    },

    /// time cardが存在しないクライアントを参照していた。
    #[error("unknown client account: {0}")]
    UnknownClient(String),

    /// 請求書のヘッダーに使う事業者情報を取得できなかった。
    #[error("business identity unavailable: {0}")]
    BusinessIdentity(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BillingError>;
