use std::fmt;

use serde::Deserialize;

/// コンサルタントのスキル。スキルごとに時間単価が固定されている。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    ProjectManager,
    SystemArchitect,
    SoftwareEngineer,
    SoftwareTester,
    #[serde(rename = "unknown")]
    UnknownSkill,
}

impl Skill {
    /// 時間単価を返す。
    pub fn rate(&self) -> i64 {
        match self {
            Skill::ProjectManager => 250,
            Skill::SystemArchitect => 200,
            Skill::SoftwareEngineer => 150,
            Skill::SoftwareTester => 100,
            Skill::UnknownSkill => 50,
        }
    }

    /// 表示名を返す。
    pub fn name(&self) -> &'static str {
        match self {
            Skill::ProjectManager => "Project Manager",
            Skill::SystemArchitect => "System Architect",
            Skill::SoftwareEngineer => "Software Engineer",
            Skill::SoftwareTester => "Software Tester",
            Skill::UnknownSkill => "Unknown",
        }
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 幅指定を効かせるためにpadを使う
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::Skill;

    /// スキルごとの単価と表示名を確認する。
    #[rstest]
    #[case(Skill::ProjectManager, 250, "Project Manager")]
    #[case(Skill::SystemArchitect, 200, "System Architect")]
    #[case(Skill::SoftwareEngineer, 150, "Software Engineer")]
    #[case(Skill::SoftwareTester, 100, "Software Tester")]
    #[case(Skill::UnknownSkill, 50, "Unknown")]
    fn test_rate_and_name(#[case] skill: Skill, #[case] rate: i64, #[case] name: &str) {
        assert_eq!(skill.rate(), rate);
        assert_eq!(skill.to_string(), name);
    }

    /// 表示時に幅指定が効くことを確認する。
    #[test]
    fn test_display_honors_width() {
        assert_eq!(format!("{:>10}", Skill::UnknownSkill), "   Unknown");
    }
}
