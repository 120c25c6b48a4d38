use std::fmt;

use chrono::NaiveDate;

use crate::account::ClientAccount;
use crate::config::BusinessIdentity;

/// 請求書の各ページ先頭に出すヘッダー。
pub struct InvoiceHeader<'a> {
    business: &'a BusinessIdentity,
    client: &'a ClientAccount,
    invoice_date: NaiveDate,
    invoice_for_month: NaiveDate,
}

impl<'a> InvoiceHeader<'a> {
    pub fn new(
        business: &'a BusinessIdentity,
        client: &'a ClientAccount,
        invoice_date: NaiveDate,
        invoice_for_month: NaiveDate,
    ) -> Self {
        Self {
            business,
            client,
            invoice_date,
            invoice_for_month,
        }
    }
}

impl fmt::Display for InvoiceHeader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.business.text_block())?;
        writeln!(f, "Invoice for: ")?;
        writeln!(f, "{}", self.client)?;
        writeln!(
            f,
            "Invoice For Month of: {}",
            self.invoice_for_month.format("%B %Y")
        )?;
        writeln!(f, "Invoice Date: {}", self.invoice_date.format("%B %d, %Y"))
    }
}

/// 請求書の各ページ末尾に出すフッター。ページ番号を数える。
pub struct InvoiceFooter<'a> {
    business_name: &'a str,
    page_number: u32,
}

impl<'a> InvoiceFooter<'a> {
    pub fn new(business_name: &'a str) -> Self {
        Self {
            business_name,
            page_number: 0,
        }
    }

    pub fn increment_page_number(&mut self) {
        self.page_number += 1;
    }

    pub fn page_number(&self) -> u32 {
        self.page_number
    }
}

impl fmt::Display for InvoiceFooter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<70} Page: {}", self.business_name, self.page_number)
    }
}

#[cfg(test)]
mod tests {
    use super::{InvoiceFooter, InvoiceHeader};
    use crate::config::tests::business;
    use crate::time_card::tests::{client, date};

    /// ヘッダーの表示形式を確認する。
    #[test]
    fn test_header() {
        let business = business();
        let client = client("Acme");
        let header = InvoiceHeader::new(&business, &client, date(2017, 4, 5), date(2017, 3, 1));

        assert_eq!(
            header.to_string(),
            "The Small Consulting Group\n1616 Index Ct.\nRedmond, WA 98055\n\n\
             Invoice for: \n\
             Acme\n1024 Kilobyte Dr.\nSilicon Gulch, CA 94040\nAhab, Captain A\n\n\
             Invoice For Month of: March 2017\n\
             Invoice Date: April 05, 2017\n"
        );
    }

    /// ページ番号を進めるとフッターに反映されることを確認する。
    #[test]
    fn test_footer_page_number() {
        let mut footer = InvoiceFooter::new("SCG");
        assert_eq!(footer.page_number(), 0);

        footer.increment_page_number();
        footer.increment_page_number();

        assert_eq!(footer.page_number(), 2);
        assert_eq!(footer.to_string(), format!("{:<70} Page: 2\n", "SCG"));
    }
}
