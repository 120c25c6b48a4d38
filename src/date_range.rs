use anyhow::{Context, Result};
use chrono::{Months, NaiveDate};

use crate::error::BillingError;

/// 両端を含む日付の期間。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl DateRange {
    /// 新しい`DateRange`を返す。
    ///
    /// 開始日が終了日より後の場合はエラーを返す。
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> crate::error::Result<Self> {
        if start_date > end_date {
            return Err(BillingError::InvertedDateRange {
                start: start_date,
                end: end_date,
            });
        }

        Ok(Self {
            start_date,
            end_date,
        })
    }

    /// 指定した月の初日から末日までの期間を返す。
    pub fn for_month(year: i32, month: u32) -> crate::error::Result<Self> {
        let start_date = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(BillingError::InvalidMonth { year, month })?;
        let end_date = start_date
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or(BillingError::InvalidMonth { year, month })?;

        Self::new(start_date, end_date)
    }

    /// `YYYY-MM-DD`形式の2つの日付をパースして期間を返す。
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        let start_date = NaiveDate::parse_from_str(start, "%Y-%m-%d")
            .with_context(|| format!("Failed to parse start date: {}", start))?;
        let end_date = NaiveDate::parse_from_str(end, "%Y-%m-%d")
            .with_context(|| format!("Failed to parse end date: {}", end))?;

        Ok(Self::new(start_date, end_date)?)
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// 日付が期間に含まれるかを返す。両端を含む。
    pub fn is_in_range(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}
