use std::fmt;

use crate::personal_name::PersonalName;

/// コンサルタント。順序は名前の順序に従う。
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Consultant {
    name: PersonalName,
}

impl Consultant {
    /// 新しい`Consultant`を返す。
    pub fn new(name: PersonalName) -> Self {
        Self { name }
    }

    pub fn name(&self) -> &PersonalName {
        &self.name
    }
}

impl fmt::Display for Consultant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.name.to_string())
    }
}
