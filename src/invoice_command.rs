use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use log::{info, warn};

use crate::dataset::BillingRepository;
use crate::datetime;
use crate::invoice::{create_invoices, Invoice};

/// `invoice`サブコマンドの引数。
#[derive(Debug, clap::Args)]
pub struct InvoiceArgs {
    #[clap(
        short = 'm',
        long = "month",
        help = "Sets the billing month in the format YYYY-MM",
        parse(try_from_str = parse_month),
    )]
    month: Option<NaiveDate>,

    #[clap(short = 'c', long = "client", help = "Only invoice the named client")]
    client: Option<String>,
}

pub struct InvoiceCommand<'a, T: BillingRepository> {
    repository: &'a T,
}

impl<'a, T: BillingRepository> InvoiceCommand<'a, T> {
    /// 新しい`InvoiceCommand`を返す。
    ///
    /// # Arguments
    /// * `repository` - 請求データの読み込み元
    pub fn new(repository: &'a T) -> Self {
        Self { repository }
    }

    /// `invoice`サブコマンドの処理を行う。
    ///
    /// 指定された月のクライアントごとの請求書を作成し、明細が1件以上あるものを返す。
    /// 月が指定されていない場合は、Localタイムゾーンで今月を利用する。
    ///
    /// # Arguments
    ///
    /// * `args` - `invoice`サブコマンドの引数
    pub fn run(&self, args: InvoiceArgs) -> Result<Vec<Invoice>> {
        let month = args.month.unwrap_or_else(datetime::today);
        info!("Billing month: {}", month.format("%Y-%m"));

        let dataset = self
            .repository
            .read_dataset()
            .context("Failed to read billing data")?;
        let clients: Vec<_> = dataset
            .client_accounts
            .into_iter()
            .filter(|client| args.client.as_ref().map_or(true, |name| &client.name == name))
            .collect();
        if clients.is_empty() {
            warn!("No client account matched: {:?}", args.client);
        }

        let invoices = create_invoices(&clients, &dataset.time_cards, month.month(), month.year())
            .context("Failed to create invoices")?;
        let invoices: Vec<Invoice> = invoices
            .into_iter()
            .filter(|invoice| !invoice.line_items().is_empty())
            .collect();
        info!("Created {} invoices.", invoices.len());

        Ok(invoices)
    }
}

/// 月をパースする。
fn parse_month(s: &str) -> Result<NaiveDate> {
    let target_date = s.to_string() + "-01";
    let date = NaiveDate::parse_from_str(&target_date, "%Y-%m-%d")
        .with_context(|| format!("Failed to parse month: {}", s))?;

    Ok(date)
}
