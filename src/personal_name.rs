use std::cmp::Ordering;
use std::fmt;

use serde::Deserialize;

const NO_LAST_NAME: &str = "NLN";
const NO_FIRST_NAME: &str = "NFN";
const NO_MIDDLE_NAME: &str = "NMN";

/// 人名を表す値。
///
/// 等価性とハッシュは各フィールドの値で決まる。
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
pub struct PersonalName {
    pub last_name: String,
    pub first_name: String,
    #[serde(default = "default_middle_name")]
    pub middle_name: String,
}

impl PersonalName {
    /// 新しい`PersonalName`を返す。
    pub fn new(last_name: &str, first_name: &str, middle_name: &str) -> Self {
        Self {
            last_name: last_name.to_string(),
            first_name: first_name.to_string(),
            middle_name: middle_name.to_string(),
        }
    }

    /// ミドルネームを持たない`PersonalName`を返す。
    pub fn without_middle(last_name: &str, first_name: &str) -> Self {
        Self::new(last_name, first_name, NO_MIDDLE_NAME)
    }

    /// `Last, First`形式の文字列をパースする。
    pub fn parse(s: &str) -> Option<Self> {
        let (last, rest) = s.split_once(',')?;
        let mut parts = rest.split_whitespace();
        let first = parts.next()?;
        let middle = parts.next().unwrap_or(NO_MIDDLE_NAME);

        Some(Self::new(last.trim(), first, middle))
    }
}

impl Default for PersonalName {
    fn default() -> Self {
        Self::new(NO_LAST_NAME, NO_FIRST_NAME, NO_MIDDLE_NAME)
    }
}

fn default_middle_name() -> String {
    NO_MIDDLE_NAME.to_string()
}

/// 名、ミドルネーム、姓の順に比較する。
impl Ord for PersonalName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.first_name
            .cmp(&other.first_name)
            .then_with(|| self.middle_name.cmp(&other.middle_name))
            .then_with(|| self.last_name.cmp(&other.last_name))
    }
}

impl PartialOrd for PersonalName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for PersonalName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} {}",
            self.last_name, self.first_name, self.middle_name
        )
    }
}
