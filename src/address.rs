use std::cmp::Ordering;
use std::fmt;

use serde::Deserialize;

/// 州コード。宣言順に順序付けされる。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum StateCode {
    CA,
    WA,
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            StateCode::CA => "CA",
            StateCode::WA => "WA",
        };
        f.write_str(code)
    }
}

/// 住所を表す値。
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct Address {
    pub street_number: String,
    pub city: String,
    pub state: StateCode,
    pub postal_code: String,
}

impl Address {
    /// 新しい`Address`を返す。
    pub fn new(street_number: &str, city: &str, state: StateCode, postal_code: &str) -> Self {
        Self {
            street_number: street_number.to_string(),
            city: city.to_string(),
            state,
            postal_code: postal_code.to_string(),
        }
    }
}

/// 州コード、郵便番号、番地の順に比較する。
impl Ord for Address {
    fn cmp(&self, other: &Self) -> Ordering {
        self.state
            .cmp(&other.state)
            .then_with(|| self.postal_code.cmp(&other.postal_code))
            .then_with(|| self.street_number.cmp(&other.street_number))
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.street_number)?;
        writeln!(f, "{}, {} {}", self.city, self.state, self.postal_code)
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use rstest::rstest;

    use super::{Address, StateCode};

    fn base() -> Address {
        Address::new("1616 Index Ct.", "Redmond", StateCode::WA, "98055")
    }

    /// 住所が州、郵便番号、番地の順に比較されることを確認する。
    #[rstest]
    #[case::same(base(), Ordering::Equal)]
    #[case::city_is_ignored(Address::new("1616 Index Ct.", "Kirkland", StateCode::WA, "98055"), Ordering::Equal)]
    #[case::state_first(Address::new("9 A St.", "Irvine", StateCode::CA, "99999"), Ordering::Greater)]
    #[case::postal_code_second(Address::new("0 A St.", "Redmond", StateCode::WA, "98056"), Ordering::Less)]
    #[case::street_number_last(Address::new("2 Main St.", "Redmond", StateCode::WA, "98055"), Ordering::Less)]
    fn test_cmp(#[case] other: Address, #[case] expected: Ordering) {
        assert_eq!(base().cmp(&other), expected);
    }

    /// 同じ内容の住所は等しいことを確認する。
    #[test]
    fn test_equality_is_structural() {
        let other = Address::new("1616 Index Ct.", "Kirkland", StateCode::WA, "98055");

        assert_ne!(base(), other);
        assert_eq!(base(), base());
    }

    /// 住所の表示形式を確認する。
    #[test]
    fn test_display() {
        assert_eq!(base().to_string(), "1616 Index Ct.\nRedmond, WA 98055\n");
    }
}
