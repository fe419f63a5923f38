use std::{
    fmt,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

use thiserror::Error;

use crate::services::{ShareCalculator, TransferConstructor};

/// Maximum stored length of a person's name, in bytes.
pub const PERSON_NAME_MAX_LEN: usize = 64;

/// A monetary amount.
///
/// Amounts produced by settlement only compare meaningfully up to
/// [`Money::EPSILON`]; use [`Money::is_zero`] / [`Money::is_positive`]
/// instead of exact comparison against zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Money(f64);

impl Money {
    pub const ZERO: Self = Self(0.0);

    /// Tolerance under which an amount counts as settled.
    pub const EPSILON: f64 = 1e-6;

    pub fn from_f64(value: f64) -> Self {
        Self(value)
    }

    pub fn amount(self) -> f64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0.abs() <= Self::EPSILON
    }

    pub fn is_positive(self) -> bool {
        self.0 > Self::EPSILON
    }

    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

/// Handle to a person owned by a [`Ledger`].
///
/// Persons are append-only, so a handle issued by a ledger stays valid for
/// that ledger's whole lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PersonId(pub usize);

/// Non-fatal outcome of adding a person.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputWarning {
    /// A negative paid amount was supplied and stored as zero.
    NegativePaidClamped { supplied: f64 },
}

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("cannot process a ledger with no persons")]
    EmptyLedger,
    #[error("payment record refers to unknown person {0:?}")]
    UnknownPerson(PersonId),
    #[error("settlement stalled with {remaining} still outstanding")]
    InconsistentBalances { remaining: Money },
}

/// A participant: what they paid, and the debt or credit assigned to them by
/// the most recent [`Ledger::process`] call. At most one of `debt`/`credit`
/// is nonzero once processing completes.
#[derive(Clone, Debug)]
pub struct Person {
    pub(crate) name: String,
    pub(crate) paid: Money,
    pub(crate) debt: Money,
    pub(crate) credit: Money,
}

impl Person {
    /// Builds a person with zeroed debt and credit.
    ///
    /// Negative `paid` is clamped to zero and reported back as a warning;
    /// names longer than [`PERSON_NAME_MAX_LEN`] bytes are truncated on a
    /// char boundary.
    pub fn new(name: &str, paid: f64) -> (Self, Option<InputWarning>) {
        let warning = (paid < 0.0).then_some(InputWarning::NegativePaidClamped { supplied: paid });
        let person = Self {
            name: truncate_name(name).to_owned(),
            paid: Money::from_f64(paid.max(0.0)),
            debt: Money::ZERO,
            credit: Money::ZERO,
        };
        (person, warning)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn paid(&self) -> Money {
        self.paid
    }

    pub fn debt(&self) -> Money {
        self.debt
    }

    pub fn credit(&self) -> Money {
        self.credit
    }
}

fn truncate_name(name: &str) -> &str {
    if name.len() <= PERSON_NAME_MAX_LEN {
        return name;
    }
    let mut end = PERSON_NAME_MAX_LEN;
    while !name.is_char_boundary(end) {
        end -= 1;
    }
    &name[..end]
}

/// A settled transfer between two persons of the owning ledger.
///
/// Stores handles, never person data; names are resolved on read through
/// [`Ledger::transfers`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaymentRecord {
    from: PersonId,
    to: PersonId,
    amount: Money,
}

impl PaymentRecord {
    /// Fails with [`LedgerError::UnknownPerson`] if either endpoint is not a
    /// valid handle into a person list of `person_count` entries.
    pub(crate) fn new(
        from: PersonId,
        to: PersonId,
        amount: Money,
        person_count: usize,
    ) -> Result<Self, LedgerError> {
        if from.0 >= person_count {
            return Err(LedgerError::UnknownPerson(from));
        }
        if to.0 >= person_count {
            return Err(LedgerError::UnknownPerson(to));
        }
        debug_assert_ne!(from, to);
        Ok(Self { from, to, amount })
    }

    pub fn from(&self) -> PersonId {
        self.from
    }

    pub fn to(&self) -> PersonId {
        self.to
    }

    pub fn amount(&self) -> Money {
        self.amount
    }
}

/// Name-resolved read view of a [`PaymentRecord`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transfer<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub amount: Money,
}

/// The settlement aggregate: an insertion-ordered list of persons plus the
/// payment records produced by the most recent [`Ledger::process`] call.
#[derive(Debug, Default)]
pub struct Ledger {
    persons: Vec<Person>,
    records: Vec<PaymentRecord>,
    average_payment: Money,
    total_debt: Money,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a person and returns their handle, alongside any validation
    /// warning raised while normalizing the input.
    pub fn add_person(&mut self, name: &str, paid: f64) -> (PersonId, Option<InputWarning>) {
        let (person, warning) = Person::new(name, paid);
        self.persons.push(person);
        (PersonId(self.persons.len() - 1), warning)
    }

    /// Computes the average payment, assigns every person's debt or credit
    /// relative to it, and settles all debts into payment records.
    ///
    /// Prior results are overwritten wholesale, so calling this twice with
    /// no intervening [`Ledger::add_person`] yields identical records.
    pub fn process(&mut self) -> Result<(), LedgerError> {
        let calculator = ShareCalculator;
        self.average_payment = calculator.average_payment(&self.persons)?;
        self.total_debt =
            calculator.assign_debts_and_credits(&mut self.persons, self.average_payment);
        self.records = TransferConstructor.construct(&mut self.persons, self.total_debt)?;
        Ok(())
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.persons.get(id.0)
    }

    /// Records from the most recent [`Ledger::process`] call, in the order
    /// the settlement produced them. Empty before the first call.
    pub fn payment_records(&self) -> &[PaymentRecord] {
        &self.records
    }

    /// Name-resolved view of [`Ledger::payment_records`].
    pub fn transfers(&self) -> impl Iterator<Item = Transfer<'_>> {
        // Records only ever come out of `process`, which checks both handles
        // against this ledger's append-only person list.
        self.records.iter().map(|record| Transfer {
            from: self.persons[record.from.0].name(),
            to: self.persons[record.to.0].name(),
            amount: record.amount,
        })
    }

    /// Average paid amount as of the most recent [`Ledger::process`] call.
    pub fn average_payment(&self) -> Money {
        self.average_payment
    }

    /// Sum of all debts as of the most recent [`Ledger::process`] call.
    pub fn total_debt(&self) -> Money {
        self.total_debt
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}
