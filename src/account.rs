use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use serde::Deserialize;

use crate::address::Address;
use crate::personal_name::PersonalName;

/// 請求対象のクライアント。常に請求可能。
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct ClientAccount {
    pub name: String,
    pub contact: PersonalName,
    pub address: Address,
}

impl ClientAccount {
    /// 新しい`ClientAccount`を返す。
    pub fn new(name: &str, contact: PersonalName, address: Address) -> Self {
        Self {
            name: name.to_string(),
            contact,
            address,
        }
    }
}

/// 名前、担当者、住所の順に比較する。
impl Ord for ClientAccount {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.contact.cmp(&other.contact))
            .then_with(|| self.address.cmp(&other.address))
    }
}

impl PartialOrd for ClientAccount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ClientAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        write!(f, "{}", self.address)?;
        writeln!(f, "{}", self.contact)
    }
}

/// 請求できない作業区分。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonBillableAccount {
    BusinessDevelopment,
    SickLeave,
    Vacation,
}

impl NonBillableAccount {
    pub fn name(&self) -> &'static str {
        match self {
            NonBillableAccount::BusinessDevelopment => "Business Development",
            NonBillableAccount::SickLeave => "Sick Leave",
            NonBillableAccount::Vacation => "Vacation",
        }
    }
}

/// 作業時間の計上先。
///
/// クライアントは複数のtime cardから共有されるため`Rc`で保持する。
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Account {
    Client(Rc<ClientAccount>),
    NonBillable(NonBillableAccount),
}

impl Account {
    pub fn name(&self) -> &str {
        match self {
            Account::Client(client) => &client.name,
            Account::NonBillable(account) => account.name(),
        }
    }

    pub fn is_billable(&self) -> bool {
        matches!(self, Account::Client(_))
    }
}

impl From<Rc<ClientAccount>> for Account {
    fn from(client: Rc<ClientAccount>) -> Self {
        Account::Client(client)
    }
}

impl From<NonBillableAccount> for Account {
    fn from(account: NonBillableAccount) -> Self {
        Account::NonBillable(account)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;
    use std::rc::Rc;

    use rstest::rstest;

    use super::{Account, ClientAccount, NonBillableAccount};
    use crate::address::{Address, StateCode};
    use crate::personal_name::PersonalName;

    fn client(name: &str, contact_first: &str, postal_code: &str) -> ClientAccount {
        ClientAccount::new(
            name,
            PersonalName::new("Ahab", contact_first, "A"),
            Address::new("1024 Kilobyte Dr.", "Silicon Gulch", StateCode::CA, postal_code),
        )
    }

    /// クライアントが名前、担当者、住所の順に比較されることを確認する。
    #[rstest]
    #[case::same(client("Acme", "Captain", "94040"), Ordering::Equal)]
    #[case::name_first(client("Bcme", "Able", "00000"), Ordering::Less)]
    #[case::contact_second(client("Acme", "Able", "99999"), Ordering::Greater)]
    #[case::address_last(client("Acme", "Captain", "94041"), Ordering::Less)]
    fn test_cmp(#[case] other: ClientAccount, #[case] expected: Ordering) {
        assert_eq!(client("Acme", "Captain", "94040").cmp(&other), expected);
    }

    /// クライアントだけが請求可能になることを確認する。
    #[test]
    fn test_account_billable() {
        let client = Account::from(Rc::new(client("Acme", "Captain", "94040")));
        let vacation = Account::from(NonBillableAccount::Vacation);

        assert!(client.is_billable());
        assert_eq!(client.name(), "Acme");
        assert!(!vacation.is_billable());
        assert_eq!(vacation.name(), "Vacation");
    }

    /// クライアントの表示形式を確認する。
    #[test]
    fn test_display() {
        assert_eq!(
            client("Acme", "Captain", "94040").to_string(),
            "Acme\n1024 Kilobyte Dr.\nSilicon Gulch, CA 94040\nAhab, Captain A\n"
        );
    }
}
