use crate::model::{LedgerError, Money, Person};

/// Fair-share calculation service: the average payment and each person's
/// debt or credit relative to it.
pub struct ShareCalculator;

impl ShareCalculator {
    /// Mean of all paid amounts.
    ///
    /// An empty person list has no meaningful average and errors with
    /// [`LedgerError::EmptyLedger`] instead of dividing by zero.
    pub fn average_payment(&self, persons: &[Person]) -> Result<Money, LedgerError> {
        if persons.is_empty() {
            return Err(LedgerError::EmptyLedger);
        }
        let total: f64 = persons.iter().map(|person| person.paid.amount()).sum();
        Ok(Money::from_f64(total / persons.len() as f64))
    }

    /// Resets every person's debt and credit, then assigns them relative to
    /// `average`. Returns the total debt accumulated across all persons.
    ///
    /// A person exactly at the average ends up with both at zero. Single
    /// linear pass; the result does not depend on person order.
    pub fn assign_debts_and_credits(&self, persons: &mut [Person], average: Money) -> Money {
        let mut total_debt = Money::ZERO;
        for person in persons.iter_mut() {
            person.debt = Money::ZERO;
            person.credit = Money::ZERO;
            if person.paid < average {
                person.debt = average - person.paid;
                total_debt += person.debt;
            } else {
                person.credit = person.paid - average;
            }
        }
        total_debt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn persons(paid: &[f64]) -> Vec<Person> {
        paid.iter()
            .enumerate()
            .map(|(idx, &amount)| Person::new(&format!("P{idx}"), amount).0)
            .collect()
    }

    #[rstest]
    #[case::three_values(&[10.0, 20.0, 30.0], 20.0)]
    #[case::single_value(&[50.0], 50.0)]
    #[case::all_zero(&[0.0, 0.0], 0.0)]
    #[case::fractional(&[1.0, 2.0], 1.5)]
    fn average_is_mean_of_paid(#[case] paid: &[f64], #[case] expected: f64) {
        let persons = persons(paid);
        let average = ShareCalculator.average_payment(&persons).expect("non-empty list");
        assert_eq!(average, Money::from_f64(expected));
    }

    #[test]
    fn average_of_no_persons_is_an_error() {
        assert!(matches!(
            ShareCalculator.average_payment(&[]),
            Err(LedgerError::EmptyLedger)
        ));
    }

    #[test]
    fn debts_and_credits_split_around_average() {
        let mut persons = persons(&[30.0, 10.0, 20.0]);
        let total_debt =
            ShareCalculator.assign_debts_and_credits(&mut persons, Money::from_f64(20.0));

        assert_eq!(total_debt, Money::from_f64(10.0));
        assert_eq!(persons[0].credit(), Money::from_f64(10.0));
        assert!(persons[0].debt().is_zero());
        assert_eq!(persons[1].debt(), Money::from_f64(10.0));
        assert!(persons[1].credit().is_zero());
        assert!(persons[2].debt().is_zero());
        assert!(persons[2].credit().is_zero());
    }

    #[test]
    fn exactly_average_person_owes_and_is_owed_nothing() {
        let mut persons = persons(&[25.0]);
        ShareCalculator.assign_debts_and_credits(&mut persons, Money::from_f64(25.0));
        assert!(persons[0].debt().is_zero());
        assert!(persons[0].credit().is_zero());
    }

    #[test]
    fn reassignment_clears_previous_run() {
        let mut persons = persons(&[30.0, 10.0]);
        ShareCalculator.assign_debts_and_credits(&mut persons, Money::from_f64(20.0));
        assert_eq!(persons[1].debt(), Money::from_f64(10.0));

        // A different average must fully replace the earlier assignment.
        let total_debt =
            ShareCalculator.assign_debts_and_credits(&mut persons, Money::from_f64(10.0));
        assert_eq!(total_debt, Money::ZERO);
        assert!(persons[1].debt().is_zero());
        assert_eq!(persons[0].credit(), Money::from_f64(20.0));
    }
}
