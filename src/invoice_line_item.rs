use std::fmt;
use std::rc::Rc;

use chrono::NaiveDate;

use crate::consultant::Consultant;
use crate::skill::Skill;

/// 請求書の1行。金額は作成時に一度だけ計算する。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvoiceLineItem {
    date: NaiveDate,
    consultant: Rc<Consultant>,
    skill: Skill,
    hours: i32,
    charge: i64,
}

impl InvoiceLineItem {
    /// 新しい`InvoiceLineItem`を返す。金額は`時間 × スキルの単価`。
    pub fn new(date: NaiveDate, consultant: Rc<Consultant>, skill: Skill, hours: i32) -> Self {
        Self {
            date,
            consultant,
            skill,
            hours,
            charge: skill.rate() * i64::from(hours),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn consultant(&self) -> &Rc<Consultant> {
        &self.consultant
    }

    pub fn skill(&self) -> Skill {
        self.skill
    }

    pub fn hours(&self) -> i32 {
        self.hours
    }

    pub fn charge(&self) -> i64 {
        self.charge
    }
}

impl fmt::Display for InvoiceLineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}   {} {:>29} {:>8}   {:>6}",
            self.date.format("%m/%d/%Y"),
            self.consultant.name(),
            self.skill,
            self.hours,
            format_amount(self.charge)
        )
    }
}

/// 金額を3桁区切り、小数点以下2桁で整形する。
pub fn format_amount(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if amount < 0 { "-" } else { "" };

    format!("{}{}.00", sign, grouped)
}
