//! Property tests for salary apportionment.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use salary_apportioner::calculation::{apportion_salary, count_working_days};
use salary_apportioner::models::{
    EmploymentContract, PayCycle, PayCycleRange, WorkingDay, WorkingDays,
};

/// Mondays between 2000 and roughly 2038.
fn weekly_range() -> impl Strategy<Value = PayCycleRange> {
    // 2000-01-03 is a Monday
    (0i64..2000).prop_map(|week| {
        let start = NaiveDate::from_ymd_opt(2000, 1, 3).unwrap() + Duration::weeks(week);
        PayCycleRange::new(start, start + Duration::days(6))
    })
}

fn monthly_range() -> impl Strategy<Value = PayCycleRange> {
    (2000i32..2040, 1u32..=12).prop_map(|(year, month)| {
        let start = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
        };
        PayCycleRange::new(start, next.pred_opt().unwrap())
    })
}

fn any_cycle() -> impl Strategy<Value = (PayCycle, PayCycleRange)> {
    prop_oneof![
        weekly_range().prop_map(|r| (PayCycle::Weekly, r)),
        monthly_range().prop_map(|r| (PayCycle::Monthly, r)),
    ]
}

fn any_working_days() -> impl Strategy<Value = WorkingDays> {
    (0u8..128).prop_map(|mask| {
        WorkingDay::ALL
            .into_iter()
            .filter(|day| mask & (1 << u8::from(*day)) != 0)
            .collect()
    })
}

fn any_salary() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000, 0u32..4).prop_map(|(units, scale)| Decimal::new(units, scale))
}

fn contract(
    pay_cycle: PayCycle,
    pay_cycle_salary: Decimal,
    working_days: WorkingDays,
    start_date: NaiveDate,
) -> EmploymentContract {
    EmploymentContract {
        pay_cycle,
        pay_cycle_salary,
        working_days,
        start_date,
    }
}

proptest! {
    #[test]
    fn full_salary_when_tenure_covers_cycle(
        (pay_cycle, range) in any_cycle(),
        salary in any_salary(),
        days in any_working_days(),
        days_before in 0i64..400,
    ) {
        prop_assume!(!days.is_empty());
        let c = contract(pay_cycle, salary, days, range.start - Duration::days(days_before));
        prop_assert_eq!(apportion_salary(&c, &range).unwrap(), salary);
    }

    #[test]
    fn nothing_due_when_employment_starts_after_cycle(
        (pay_cycle, range) in any_cycle(),
        salary in any_salary(),
        days in any_working_days(),
        days_after in 1i64..400,
    ) {
        let c = contract(pay_cycle, salary, days, range.end + Duration::days(days_after));
        prop_assert_eq!(apportion_salary(&c, &range).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn nothing_due_without_working_days(
        (pay_cycle, range) in any_cycle(),
        salary in any_salary(),
        offset in -40i64..40,
    ) {
        let c = contract(pay_cycle, salary, WorkingDays::empty(), range.start + Duration::days(offset));
        prop_assert_eq!(apportion_salary(&c, &range).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn amount_never_exceeds_salary(
        (pay_cycle, range) in any_cycle(),
        salary in any_salary(),
        days in any_working_days(),
        offset in -10i64..40,
    ) {
        let c = contract(pay_cycle, salary, days, range.start + Duration::days(offset));
        let amount = apportion_salary(&c, &range).unwrap();
        prop_assert!(amount >= Decimal::ZERO);
        prop_assert!(amount <= salary);
    }

    #[test]
    fn earlier_start_never_pays_less(
        (pay_cycle, range) in any_cycle(),
        salary in any_salary(),
        days in any_working_days(),
        later in 0i64..35,
        shift in 1i64..35,
    ) {
        let later_start = range.start + Duration::days(later);
        let earlier_start = later_start - Duration::days(shift);

        let later_amount = apportion_salary(&contract(pay_cycle, salary, days, later_start), &range).unwrap();
        let earlier_amount = apportion_salary(&contract(pay_cycle, salary, days, earlier_start), &range).unwrap();
        prop_assert!(earlier_amount >= later_amount);
    }

    #[test]
    fn repeated_calls_agree_and_leave_range_unchanged(
        (pay_cycle, range) in any_cycle(),
        salary in any_salary(),
        days in any_working_days(),
        offset in -10i64..40,
    ) {
        let c = contract(pay_cycle, salary, days, range.start + Duration::days(offset));
        let before = range;
        let first = apportion_salary(&c, &range).unwrap();
        let second = apportion_salary(&c, &range).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(range, before);
    }

    #[test]
    fn weekly_cycle_counts_each_scheduled_weekday_once(
        range in weekly_range(),
        days in any_working_days(),
    ) {
        let c = contract(PayCycle::Weekly, Decimal::ONE, days, range.start);
        let tally = count_working_days(&c, &range);
        prop_assert_eq!(tally.working_days_in_cycle as usize, days.len());
        prop_assert_eq!(tally.days_worked as usize, days.len());
    }

    #[test]
    fn monthly_range_rejected_for_weekly_contract(
        range in monthly_range(),
        days in any_working_days(),
    ) {
        // A month is never exactly one Monday to Sunday week.
        let c = contract(PayCycle::Weekly, Decimal::ONE, days, range.start);
        prop_assert!(apportion_salary(&c, &range).is_err());
    }
}
