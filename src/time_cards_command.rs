use std::rc::Rc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::info;

use crate::dataset::BillingRepository;
use crate::date_range::DateRange;
use crate::personal_name::PersonalName;
use crate::time_card::TimeCard;
use crate::time_card_list::{time_cards_for_consultant, time_cards_for_date_range, TimeCardOrder};

/// `timecards`サブコマンドの引数。
#[derive(Debug, clap::Args)]
pub struct TimeCardsArgs {
    #[clap(
        long = "from",
        help = "First day of the range in the format YYYY-MM-DD",
        requires = "to",
        parse(try_from_str = parse_date),
    )]
    from: Option<NaiveDate>,

    #[clap(
        long = "to",
        help = "Last day of the range in the format YYYY-MM-DD",
        requires = "from",
        parse(try_from_str = parse_date),
    )]
    to: Option<NaiveDate>,

    #[clap(
        long = "consultant",
        help = "Consultant name in the format \"Last, First [Middle]\"",
        parse(try_from_str = parse_name),
    )]
    consultant: Option<PersonalName>,

    #[clap(
        long = "sort",
        value_enum,
        default_value = "start-date",
        help = "Sort order of the printed time cards"
    )]
    sort: TimeCardOrder,
}

pub struct TimeCardsCommand<'a, T: BillingRepository> {
    repository: &'a T,
}

impl<'a, T: BillingRepository> TimeCardsCommand<'a, T> {
    /// 新しい`TimeCardsCommand`を返す。
    pub fn new(repository: &'a T) -> Self {
        Self { repository }
    }

    /// `timecards`サブコマンドの処理を行う。
    ///
    /// コンサルタントと期間でtime cardを絞り込み、指定された順に並べて返す。
    pub fn run(&self, args: TimeCardsArgs) -> Result<Vec<TimeCard>> {
        let dataset = self
            .repository
            .read_dataset()
            .context("Failed to read billing data")?;
        let mut time_cards = dataset.time_cards;

        if let Some(name) = &args.consultant {
            let consultant = time_cards
                .iter()
                .map(|card| card.consultant())
                .find(|consultant| consultant.name() == name)
                .map(Rc::clone);
            time_cards = match consultant {
                Some(consultant) => time_cards_for_consultant(&time_cards, &consultant)
                    .into_iter()
                    .cloned()
                    .collect(),
                None => Vec::new(),
            };
        }

        if let (Some(from), Some(to)) = (args.from, args.to) {
            let range = DateRange::new(from, to).context("Invalid date range")?;
            time_cards = time_cards_for_date_range(&time_cards, &range)
                .into_iter()
                .cloned()
                .collect();
        }

        args.sort.sort(&mut time_cards);
        info!("Selected {} time cards.", time_cards.len());

        Ok(time_cards)
    }
}

/// 日付をパースする。
fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("Failed to parse date: {}", s))
}

/// `Last, First [Middle]`形式の名前をパースする。
fn parse_name(s: &str) -> Result<PersonalName> {
    PersonalName::parse(s).with_context(|| format!("Failed to parse consultant name: {}", s))
}
