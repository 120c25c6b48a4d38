use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::info;
use serde::Deserialize;
use serde_json::Value;

use crate::account::{Account, ClientAccount, NonBillableAccount};
use crate::consultant::Consultant;
use crate::consultant_time::ConsultantTime;
use crate::error::BillingError;
use crate::personal_name::PersonalName;
use crate::skill::Skill;
use crate::time_card::TimeCard;

const CLIENT_ACCOUNT_KIND: &str = "client_account";
const TIME_CARD_KIND: &str = "time_card";

/// 請求処理の入力になるクライアントとtime cardの一式。
#[derive(Debug, Default)]
pub struct Dataset {
    pub client_accounts: Vec<Rc<ClientAccount>>,
    pub time_cards: Vec<TimeCard>,
}

/// 請求データを読み込むためのtrait。
#[cfg_attr(test, mockall::automock)]
pub trait BillingRepository {
    /// クライアントとtime cardを読み込む。
    fn read_dataset(&self) -> Result<Dataset>;
}

/// ファイル全体をデシリアライズするための構造体。要素の種類はまだ検査していない。
#[derive(Debug, Deserialize)]
struct RawDataset {
    #[serde(default)]
    client_accounts: Vec<Value>,
    #[serde(default)]
    time_cards: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct TimeCardRecord {
    consultant: PersonalName,
    week_starting_day: NaiveDate,
    #[serde(default)]
    entries: Vec<EntryRecord>,
}

#[derive(Debug, Deserialize)]
struct EntryRecord {
    date: NaiveDate,
    account: AccountRecord,
    skill: Skill,
    hours: i32,
}

/// 作業時間の計上先。クライアントは名前で参照する。
#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum AccountRecord {
    Client(String),
    NonBillable(NonBillableAccount),
}

/// JSONファイルから請求データを読み込む。
///
/// # Examples
///
/// ```ignore
/// let repository = JsonDataset::new(PathBuf::from("billing.json"));
/// let dataset = repository.read_dataset().unwrap();
/// ```
pub struct JsonDataset {
    path: PathBuf,
}

impl JsonDataset {
    /// 新しい`JsonDataset`を返す。
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl BillingRepository for JsonDataset {
    fn read_dataset(&self) -> Result<Dataset> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read dataset file: {:?}", self.path))?;
        let raw: RawDataset = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to deserialize dataset file: {:?}", self.path))?;
        let dataset = decode_dataset(raw)?;
        info!(
            "Loaded {} client accounts and {} time cards from {:?}",
            dataset.client_accounts.len(),
            dataset.time_cards.len(),
            self.path
        );

        Ok(dataset)
    }
}

/// 要素の種類を全て検査してから、クライアントとtime cardを組み立てる。
fn decode_dataset(raw: RawDataset) -> Result<Dataset> {
    check_kinds("client_accounts", &raw.client_accounts, CLIENT_ACCOUNT_KIND)?;
    check_kinds("time_cards", &raw.time_cards, TIME_CARD_KIND)?;

    let client_accounts = raw
        .client_accounts
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value::<ClientAccount>(value)
                .map(Rc::new)
                .with_context(|| format!("Failed to decode client_accounts[{}]", index))
        })
        .collect::<Result<Vec<_>>>()?;

    let clients_by_name: HashMap<&str, &Rc<ClientAccount>> = client_accounts
        .iter()
        .map(|client| (client.name.as_str(), client))
        .collect();
    let mut consultants: HashMap<PersonalName, Rc<Consultant>> = HashMap::new();
    let mut time_cards = Vec::with_capacity(raw.time_cards.len());
    for (index, value) in raw.time_cards.into_iter().enumerate() {
        let record: TimeCardRecord = serde_json::from_value(value)
            .with_context(|| format!("Failed to decode time_cards[{}]", index))?;
        // 同じ名前のコンサルタントは1つの`Rc`を共有させる
        let consultant = consultants
            .entry(record.consultant.clone())
            .or_insert_with(|| Rc::new(Consultant::new(record.consultant)))
            .clone();
        let mut time_card = TimeCard::new(consultant, record.week_starting_day);
        for entry in record.entries {
            let account = match entry.account {
                AccountRecord::Client(name) => clients_by_name
                    .get(name.as_str())
                    .map(|client| Account::Client(Rc::clone(client)))
                    .ok_or(BillingError::UnknownClient(name))?,
                AccountRecord::NonBillable(account) => Account::NonBillable(account),
            };
            let consultant_time =
                ConsultantTime::new(entry.date, account, entry.skill, entry.hours)
                    .with_context(|| format!("Invalid entry in time_cards[{}]", index))?;
            time_card.add_consultant_time(consultant_time);
        }
        time_cards.push(time_card);
    }

    Ok(Dataset {
        client_accounts,
        time_cards,
    })
}

/// コレクションの全要素の`kind`が期待する種類であることを検査する。
fn check_kinds(
    collection: &'static str,
    values: &[Value],
    expected: &'static str,
) -> std::result::Result<(), BillingError> {
    values.iter().enumerate().try_for_each(|(index, value)| {
        match value.get("kind").and_then(Value::as_str) {
            Some(kind) if kind == expected => Ok(()),
            found => Err(BillingError::UnexpectedKind {
                collection,
                index,
                expected,
                found: found.map_or_else(|| describe(value), str::to_string),
            }),
        }
    })
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object without kind",
    }
    .to_string()
}
