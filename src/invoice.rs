use std::rc::Rc;

use chrono::{Datelike, NaiveDate};
use log::debug;

use crate::account::ClientAccount;
use crate::config::BusinessIdentitySource;
use crate::datetime;
use crate::error::{BillingError, Result};
use crate::invoice_header::{InvoiceFooter, InvoiceHeader};
use crate::invoice_line_item::{format_amount, InvoiceLineItem};
use crate::time_card::TimeCard;

/// 1ページに載せる明細の数。
pub const ITEMS_PER_PAGE: usize = 5;

const COLUMN_RULE: &str =
    "-----------  --------------------------  -------------------  -----  -----------\n";
const END_OF_PAGE: &str =
    "=================================================================================\n";

/// 1クライアントの1か月分の請求書。
///
/// 合計は保持せず、参照するたびに明細から計算する。
#[derive(Clone, Debug)]
pub struct Invoice {
    client: Rc<ClientAccount>,
    invoice_date: NaiveDate,
    start_date: NaiveDate,
    line_items: Vec<InvoiceLineItem>,
}

impl Invoice {
    /// 新しい`Invoice`を返す。請求日は今日になる。
    ///
    /// # Arguments
    ///
    /// * `client` - 請求先
    /// * `month` - 請求対象の月 (1から12)
    /// * `year` - 請求対象の年
    pub fn new(client: Rc<ClientAccount>, month: u32, year: i32) -> Result<Self> {
        let start_date = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(BillingError::InvalidMonth { year, month })?;

        Ok(Self {
            client,
            invoice_date: datetime::today(),
            start_date,
            line_items: Vec::new(),
        })
    }

    pub fn client(&self) -> &Rc<ClientAccount> {
        &self.client
    }

    pub fn invoice_date(&self) -> NaiveDate {
        self.invoice_date
    }

    /// 請求対象月の初日を返す。
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn line_items(&self) -> &[InvoiceLineItem] {
        &self.line_items
    }

    pub fn total_hours(&self) -> i64 {
        self.line_items
            .iter()
            .map(|item| i64::from(item.hours()))
            .sum()
    }

    pub fn total_charges(&self) -> i64 {
        self.line_items.iter().map(InvoiceLineItem::charge).sum()
    }

    pub fn add_line_item(&mut self, line_item: InvoiceLineItem) {
        self.line_items.push(line_item);
    }

    /// time cardから、この請求書のクライアントと月に該当する請求可能な作業を明細として追加する。
    ///
    /// 同じtime cardを2回渡すと明細も重複する。
    pub fn extract_line_items(&mut self, time_card: &TimeCard) {
        let year = self.start_date.year();
        let month = self.start_date.month();
        let items: Vec<InvoiceLineItem> = time_card
            .billable_hours_for_client(&self.client.name)
            .into_iter()
            .filter(|entry| entry.date().year() == year && entry.date().month() == month)
            .map(|entry| {
                InvoiceLineItem::new(
                    entry.date(),
                    time_card.consultant().clone(),
                    entry.skill(),
                    entry.hours(),
                )
            })
            .collect();
        debug!(
            "Extracted {} line items for {} from time card of {}",
            items.len(),
            self.client.name,
            time_card.consultant()
        );

        items.into_iter().for_each(|item| self.add_line_item(item));
    }

    /// ページ分けした請求書のテキストを作成する。
    ///
    /// 明細を`ITEMS_PER_PAGE`件出すごとにフッター、区切り線、ヘッダーを挟む。
    /// 最終ページのフッターの前でページ番号を必ず1つ進めるため、
    /// 明細数がページサイズの倍数のときは実際のページ数より1大きい番号になる。
    ///
    /// # Arguments
    ///
    /// * `source` - ヘッダーに使う事業者情報の取得元
    pub fn to_report_string<S>(&self, source: &S) -> Result<String>
    where
        S: BusinessIdentitySource + ?Sized,
    {
        let business = source.business_identity()?;
        let header = InvoiceHeader::new(&business, &self.client, self.invoice_date, self.start_date);
        let mut footer = InvoiceFooter::new(&business.name);

        let mut lines = String::new();
        for (i, item) in self.line_items.iter().enumerate() {
            lines.push_str(&item.to_string());
            if (i + 1) % ITEMS_PER_PAGE == 0 {
                footer.increment_page_number();
                lines.push('\n');
                lines.push_str(&footer.to_string());
                lines.push_str(END_OF_PAGE);
                lines.push('\n');
                lines.push_str(&header.to_string());
                lines.push('\n');
            }
        }
        footer.increment_page_number();

        let mut report = String::new();
        report.push_str(&header.to_string());
        report.push('\n');
        report.push_str(&column_names());
        report.push_str(&lines);
        report.push('\n');
        report.push_str(&format!(
            "Total: {:>62} {:>10}\n",
            self.total_hours(),
            format_amount(self.total_charges())
        ));
        report.push('\n');
        report.push_str(&footer.to_string());
        report.push_str(END_OF_PAGE);

        Ok(report)
    }
}

fn column_names() -> String {
    format!(
        "{} {:>18} {:>22} {:>20} {:>7} \n{}",
        "Date", "Consultant", "Skill", "Hours", "Charge", COLUMN_RULE
    )
}

/// クライアントごとに指定月の請求書を作成し、全てのtime cardから明細を抽出する。
pub fn create_invoices(
    clients: &[Rc<ClientAccount>],
    time_cards: &[TimeCard],
    month: u32,
    year: i32,
) -> Result<Vec<Invoice>> {
    clients
        .iter()
        .map(|client| {
            let mut invoice = Invoice::new(client.clone(), month, year)?;
            time_cards
                .iter()
                .for_each(|card| invoice.extract_line_items(card));
            Ok(invoice)
        })
        .collect()
}
