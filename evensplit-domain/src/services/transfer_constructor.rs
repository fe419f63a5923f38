use crate::model::{LedgerError, Money, PaymentRecord, Person, PersonId};

/// Settlement service: turns assigned debts and credits into a sequence of
/// pairwise payment records.
///
/// Greedy heuristic: repeatedly matches the largest outstanding debtor
/// against the largest outstanding creditor. This keeps the transfer count
/// low compared to naive pairwise settlement but carries no minimality
/// guarantee.
pub struct TransferConstructor;

impl TransferConstructor {
    /// Settles all debts, mutating each person's debt/credit down to zero
    /// and returning the records in the order they were produced.
    ///
    /// Expects `total_debt` as computed by
    /// [`ShareCalculator::assign_debts_and_credits`](crate::ShareCalculator::assign_debts_and_credits);
    /// total credit equals total debt there, so every iteration finds both a
    /// debtor and a creditor. If a scan still comes up empty while debt
    /// remains, the balances are corrupt and the construction aborts with
    /// [`LedgerError::InconsistentBalances`].
    pub fn construct(
        &self,
        persons: &mut [Person],
        total_debt: Money,
    ) -> Result<Vec<PaymentRecord>, LedgerError> {
        let mut records = Vec::new();
        let mut remaining = total_debt;

        while remaining.is_positive() {
            // Two independent scans. Strict-greater comparison keeps the
            // earliest-added person on ties.
            let debtor = max_positive(persons, |person| person.debt)
                .ok_or(LedgerError::InconsistentBalances { remaining })?;
            let creditor = max_positive(persons, |person| person.credit)
                .ok_or(LedgerError::InconsistentBalances { remaining })?;

            let amount = persons[debtor].debt.min(persons[creditor].credit);
            let record = PaymentRecord::new(
                PersonId(debtor),
                PersonId(creditor),
                amount,
                persons.len(),
            )?;
            records.push(record);

            persons[debtor].debt -= amount;
            persons[creditor].credit -= amount;
            remaining -= amount;
        }

        debug_assert!(persons
            .iter()
            .all(|person| !person.debt.is_positive() && !person.credit.is_positive()));

        Ok(records)
    }
}

/// Index of the person with the largest strictly positive value of `key`,
/// or `None` if nobody has one. Scans in insertion order; the first maximal
/// person wins.
fn max_positive(persons: &[Person], key: impl Fn(&Person) -> Money) -> Option<usize> {
    let mut best: Option<(usize, Money)> = None;
    for (idx, person) in persons.iter().enumerate() {
        let value = key(person);
        if !value.is_positive() {
            continue;
        }
        match best {
            Some((_, max)) if value <= max => {}
            _ => best = Some((idx, value)),
        }
    }
    best.map(|(idx, _)| idx)
}
