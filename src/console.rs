use std::io::Write;

use anyhow::{Context, Result};

use crate::config::BusinessIdentitySource;
use crate::invoice::Invoice;
use crate::time_card::TimeCard;

/// レポートを出力するためのtrait。
pub trait ReportPresenter {
    /// 請求書を表示する。
    ///
    /// # Arguments
    ///
    /// * `invoices` - 表示する請求書
    /// * `source` - ヘッダーに使う事業者情報の取得元
    fn show_invoices(
        &mut self,
        invoices: &[Invoice],
        source: &dyn BusinessIdentitySource,
    ) -> Result<()>;

    /// time cardを表示する。
    fn show_time_cards(&mut self, time_cards: &[TimeCard]) -> Result<()>;
}

/// レポートをそのままのテキストで書き出す。
pub struct ConsoleReport<'a, W: Write> {
    writer: &'a mut W,
}

impl<'a, W: Write> ConsoleReport<'a, W> {
    /// 新しい`ConsoleReport`を返す。
    pub fn new(writer: &'a mut W) -> Self {
        Self { writer }
    }
}

impl<'a, W: Write> ReportPresenter for ConsoleReport<'a, W> {
    fn show_invoices(
        &mut self,
        invoices: &[Invoice],
        source: &dyn BusinessIdentitySource,
    ) -> Result<()> {
        for invoice in invoices {
            let report = invoice.to_report_string(source).with_context(|| {
                format!("Failed to render invoice for {}", invoice.client().name)
            })?;
            write!(self.writer, "{}", report)
                .with_context(|| format!("Failed to write invoice for {}", invoice.client().name))?;
        }

        Ok(())
    }

    fn show_time_cards(&mut self, time_cards: &[TimeCard]) -> Result<()> {
        for time_card in time_cards {
            write!(self.writer, "{}", time_card.to_report_string()).with_context(|| {
                format!(
                    "Failed to write time card: {} {}",
                    time_card.consultant(),
                    time_card.week_starting_day()
                )
            })?;
        }

        Ok(())
    }
}
