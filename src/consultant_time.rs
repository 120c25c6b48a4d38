use std::fmt;

use chrono::NaiveDate;

use crate::account::Account;
use crate::error::{BillingError, Result};
use crate::skill::Skill;

/// ある日付に、ある計上先へ、あるスキルで行った作業時間。
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConsultantTime {
    date: NaiveDate,
    account: Account,
    skill: Skill,
    hours: i32,
}

impl ConsultantTime {
    /// 新しい`ConsultantTime`を返す。
    ///
    /// `hours`が1未満の場合はエラーを返す。
    pub fn new(date: NaiveDate, account: Account, skill: Skill, hours: i32) -> Result<Self> {
        if hours <= 0 {
            return Err(BillingError::InvalidHours(hours));
        }

        Ok(Self {
            date,
            account,
            skill,
            hours,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn skill(&self) -> Skill {
        self.skill
    }

    pub fn hours(&self) -> i32 {
        self.hours
    }

    pub fn is_billable(&self) -> bool {
        self.account.is_billable()
    }
}

/// time cardの1行として表示する。
impl fmt::Display for ConsultantTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<29} {}{:>7} {:>17} ",
            self.account.name(),
            self.date.format("%m/%d/%Y"),
            self.hours,
            self.skill
        )
    }
}
