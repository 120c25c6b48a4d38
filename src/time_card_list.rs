use std::cmp::Ordering;
use std::rc::Rc;

use chrono::Duration;

use crate::consultant::Consultant;
use crate::date_range::DateRange;
use crate::time_card::TimeCard;

/// time cardの並び順。
///
/// 同じ`TimeCard`に対して互いに異なる2つの全順序があり、呼び出し側が明示的に選ぶ。
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum TimeCardOrder {
    /// 週の初日、コンサルタント名、請求可能時間、請求不可時間の順。
    StartDate,
    /// コンサルタント、週の初日、請求可能時間、請求不可時間の順。
    Consultant,
}

impl TimeCardOrder {
    /// 2つのtime cardを比較する。前のキーが等しい場合のみ次のキーを比較する。
    pub fn compare(&self, a: &TimeCard, b: &TimeCard) -> Ordering {
        match self {
            TimeCardOrder::StartDate => a
                .week_starting_day()
                .cmp(&b.week_starting_day())
                .then_with(|| a.consultant().name().cmp(b.consultant().name()))
                .then_with(|| compare_hours(a, b)),
            TimeCardOrder::Consultant => a
                .consultant()
                .cmp(b.consultant())
                .then_with(|| a.week_starting_day().cmp(&b.week_starting_day()))
                .then_with(|| compare_hours(a, b)),
        }
    }

    /// time cardの列をこの順序で並び替える。
    pub fn sort(&self, time_cards: &mut [TimeCard]) {
        time_cards.sort_by(|a, b| self.compare(a, b));
    }
}

fn compare_hours(a: &TimeCard, b: &TimeCard) -> Ordering {
    a.total_billable_hours()
        .cmp(&b.total_billable_hours())
        .then_with(|| a.total_non_billable_hours().cmp(&b.total_non_billable_hours()))
}

/// 指定したコンサルタントのtime cardを返す。
///
/// コンサルタントは同一性で比較するため、同じ`Rc`を共有している必要がある。
pub fn time_cards_for_consultant<'a>(
    time_cards: &'a [TimeCard],
    consultant: &Rc<Consultant>,
) -> Vec<&'a TimeCard> {
    time_cards
        .iter()
        .filter(|card| Rc::ptr_eq(card.consultant(), consultant))
        .collect()
}

/// 期間に掛かるtime cardを返す。
///
/// 週の初日か最終日(初日から6日後)のどちらかが期間に含まれるものを選ぶ。
/// 週の途中だけが期間に掛かる場合は選ばれない。
pub fn time_cards_for_date_range<'a>(
    time_cards: &'a [TimeCard],
    date_range: &DateRange,
) -> Vec<&'a TimeCard> {
    time_cards
        .iter()
        .filter(|card| {
            let first = card.week_starting_day();
            let last = first + Duration::days(6);
            date_range.is_in_range(first) || date_range.is_in_range(last)
        })
        .collect()
}

/// 週の初日を先頭キーとして並び替える。
pub fn sort_by_start_date(time_cards: &mut [TimeCard]) {
    TimeCardOrder::StartDate.sort(time_cards);
}

/// コンサルタントを先頭キーとして並び替える。
pub fn sort_by_consultant_name(time_cards: &mut [TimeCard]) {
    TimeCardOrder::Consultant.sort(time_cards);
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use chrono::NaiveDate;
    use rstest::rstest;

    use super::*;
    use crate::account::NonBillableAccount;
    use crate::skill::Skill;
    use crate::time_card::tests::{client, consultant, date, entry};

    fn card(consultant: &Rc<Consultant>, week: NaiveDate, billable: i32, non_billable: i32) -> TimeCard {
        let mut card = TimeCard::new(consultant.clone(), week);
        if billable > 0 {
            card.add_consultant_time(entry(week, client("Acme").into(), Skill::SoftwareEngineer, billable));
        }
        if non_billable > 0 {
            card.add_consultant_time(entry(week, NonBillableAccount::Vacation.into(), Skill::UnknownSkill, non_billable));
        }
        card
    }

    fn weeks(cards: &[TimeCard]) -> Vec<(String, NaiveDate)> {
        cards
            .iter()
            .map(|c| (c.consultant().name().last_name.clone(), c.week_starting_day()))
            .collect()
    }

    /// 2つの並び順で先頭キーが異なることを確認する。
    #[test]
    fn test_orders_differ_on_consultant_and_week() {
        let alice = consultant("Zeta", "Alice");
        let bob = consultant("Alpha", "Bob");
        let mut by_start = vec![
            card(&alice, date(2017, 3, 13), 8, 0),
            card(&bob, date(2017, 3, 6), 8, 0),
            card(&alice, date(2017, 3, 6), 8, 0),
            card(&bob, date(2017, 3, 13), 8, 0),
        ];
        let mut by_consultant = by_start.clone();

        sort_by_start_date(&mut by_start);
        sort_by_consultant_name(&mut by_consultant);

        assert_eq!(
            weeks(&by_start),
            vec![
                ("Zeta".to_string(), date(2017, 3, 6)),
                ("Alpha".to_string(), date(2017, 3, 6)),
                ("Zeta".to_string(), date(2017, 3, 13)),
                ("Alpha".to_string(), date(2017, 3, 13)),
            ]
        );
        assert_eq!(
            weeks(&by_consultant),
            vec![
                ("Zeta".to_string(), date(2017, 3, 6)),
                ("Zeta".to_string(), date(2017, 3, 13)),
                ("Alpha".to_string(), date(2017, 3, 6)),
                ("Alpha".to_string(), date(2017, 3, 13)),
            ]
        );
        assert_ne!(weeks(&by_start), weeks(&by_consultant));
    }

    /// 日付とコンサルタントが同じ場合は作業時間で比較することを確認する。
    #[rstest]
    #[case::billable_breaks_tie(card_pair(3, 0, 4, 0), Ordering::Less)]
    #[case::non_billable_breaks_tie(card_pair(3, 2, 3, 1), Ordering::Greater)]
    #[case::all_equal(card_pair(3, 1, 3, 1), Ordering::Equal)]
    fn test_hours_tie_breakers(
        #[case] pair: (TimeCard, TimeCard),
        #[case] expected: Ordering,
    ) {
        let (a, b) = pair;

        assert_eq!(TimeCardOrder::StartDate.compare(&a, &b), expected);
        assert_eq!(TimeCardOrder::Consultant.compare(&a, &b), expected);
    }

    fn card_pair(a_bill: i32, a_non: i32, b_bill: i32, b_non: i32) -> (TimeCard, TimeCard) {
        let carl = consultant("Coder", "Carl");
        (
            card(&carl, date(2017, 3, 6), a_bill, a_non),
            card(&carl, date(2017, 3, 6), b_bill, b_non),
        )
    }

    /// 作業時間の合計が大きいtime cardも並び替えられることを確認する。
    #[test]
    fn test_sort_with_hours_beyond_i32_range() {
        let carl = consultant("Coder", "Carl");
        let mut large = card(&carl, date(2017, 3, 6), i32::MAX, 1);
        large.add_consultant_time(entry(date(2017, 3, 7), client("Acme").into(), Skill::SoftwareEngineer, i32::MAX));
        let mut cards = vec![large, card(&carl, date(2017, 3, 6), 1, 1)];

        sort_by_start_date(&mut cards);

        assert_eq!(cards[0].total_billable_hours(), 1);
        assert_eq!(cards[1].total_billable_hours(), 2 * i64::from(i32::MAX));
    }

    /// コンサルタントを同一性で選ぶことを確認する。
    #[test]
    fn test_time_cards_for_consultant_uses_identity() {
        let carl = consultant("Coder", "Carl");
        let twin = consultant("Coder", "Carl");
        let cards = vec![
            card(&carl, date(2017, 3, 6), 1, 0),
            card(&twin, date(2017, 3, 6), 1, 0),
            card(&carl, date(2017, 3, 13), 1, 0),
        ];

        let selected = time_cards_for_consultant(&cards, &carl);

        assert_eq!(selected.len(), 2);
        assert!(selected.iter().all(|c| Rc::ptr_eq(c.consultant(), &carl)));
    }

    /// 週の初日か最終日が期間に含まれるものだけを選ぶことを確認する。
    #[rstest]
    #[case::start_inside(date(2017, 3, 6), date(2017, 3, 6), true)]
    #[case::last_day_inside(date(2017, 3, 12), date(2017, 3, 20), true)]
    #[case::range_before_week(date(2017, 3, 1), date(2017, 3, 5), false)]
    #[case::range_after_week(date(2017, 3, 13), date(2017, 3, 20), false)]
    #[case::range_strictly_inside_week(date(2017, 3, 8), date(2017, 3, 10), false)]
    fn test_time_cards_for_date_range(
        #[case] start: NaiveDate,
        #[case] end: NaiveDate,
        #[case] selected: bool,
    ) {
        let cards = vec![card(&consultant("Coder", "Carl"), date(2017, 3, 6), 1, 0)];
        let range = DateRange::new(start, end).unwrap();

        assert_eq!(time_cards_for_date_range(&cards, &range).len(), usize::from(selected));
    }
}
