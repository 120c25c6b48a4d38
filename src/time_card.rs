use std::fmt;
use std::rc::Rc;

use chrono::NaiveDate;

use crate::consultant::Consultant;
use crate::consultant_time::ConsultantTime;

const DIVIDER: &str =
    "===================================================================\n";
const COLUMN_RULE: &str =
    "----------------------------  ----------  -----  ------------------\n";

/// 1人のコンサルタントの1週間分の作業記録。
///
/// 作業時間は追加のみで、追加した順序を保持する。
#[derive(Clone, Debug)]
pub struct TimeCard {
    consultant: Rc<Consultant>,
    week_starting_day: NaiveDate,
    consulting_hours: Vec<ConsultantTime>,
}

impl TimeCard {
    /// 新しい`TimeCard`を返す。
    ///
    /// # Arguments
    ///
    /// * `consultant` - 作業したコンサルタント
    /// * `week_starting_day` - 週の初日
    pub fn new(consultant: Rc<Consultant>, week_starting_day: NaiveDate) -> Self {
        Self {
            consultant,
            week_starting_day,
            consulting_hours: Vec::new(),
        }
    }

    pub fn consultant(&self) -> &Rc<Consultant> {
        &self.consultant
    }

    pub fn week_starting_day(&self) -> NaiveDate {
        self.week_starting_day
    }

    pub fn consulting_hours(&self) -> &[ConsultantTime] {
        &self.consulting_hours
    }

    /// 作業時間を末尾に追加する。
    pub fn add_consultant_time(&mut self, consultant_time: ConsultantTime) {
        self.consulting_hours.push(consultant_time);
    }

    /// 請求可能な作業時間の合計を返す。
    pub fn total_billable_hours(&self) -> i64 {
        self.sum_hours(true)
    }

    /// 請求できない作業時間の合計を返す。
    pub fn total_non_billable_hours(&self) -> i64 {
        self.sum_hours(false)
    }

    pub fn total_hours(&self) -> i64 {
        self.total_billable_hours() + self.total_non_billable_hours()
    }

    /// 指定したクライアントに請求できる作業時間を、追加した順に返す。
    ///
    /// # Arguments
    ///
    /// * `client_name` - クライアント名
    pub fn billable_hours_for_client(&self, client_name: &str) -> Vec<&ConsultantTime> {
        self.consulting_hours
            .iter()
            .filter(|entry| entry.is_billable())
            .filter(|entry| entry.account().name() == client_name)
            .collect()
    }

    /// 週次のtime cardレポートを作成する。
    pub fn to_report_string(&self) -> String {
        let (billable, non_billable): (Vec<_>, Vec<_>) = self
            .consulting_hours
            .iter()
            .partition(|entry| entry.is_billable());

        let mut report = String::new();
        report.push_str(DIVIDER);
        report.push_str(&self.to_string());
        report.push_str("Billable Time:\n");
        report.push_str(&column_names());
        billable
            .iter()
            .for_each(|entry| report.push_str(&entry.to_string()));
        report.push('\n');
        report.push_str("Non-billable Time: \n");
        report.push_str(&column_names());
        non_billable
            .iter()
            .for_each(|entry| report.push_str(&entry.to_string()));
        report.push('\n');
        report.push_str("Summary:\n");
        report.push_str(&format!("Total Billable:{:>32}\n", self.total_billable_hours()));
        report.push_str(&format!(
            "Total Non-Billable:{:>28}\n",
            self.total_non_billable_hours()
        ));
        report.push_str(&format!("Total Hours:{:>35}\n", self.total_hours()));
        report.push_str(DIVIDER);

        report
    }

    fn sum_hours(&self, billable: bool) -> i64 {
        self.consulting_hours
            .iter()
            .filter(|entry| entry.is_billable() == billable)
            .map(|entry| i64::from(entry.hours()))
            .sum()
    }
}

fn column_names() -> String {
    format!(
        "{:<29} {:<11} {:>5} {:>6}\n{}",
        "Account", "Date", "Hours", "Skill", COLUMN_RULE
    )
}

impl fmt::Display for TimeCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Consultant: {:<27} Week Starting: {}\n\n",
            self.consultant,
            self.week_starting_day.format("%b %d, %Y")
        )
    }
}
