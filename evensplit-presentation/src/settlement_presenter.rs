use evensplit_domain::{Ledger, Person};

/// Renders a processed ledger as plain text, one line per fact.
pub struct SettlementPresenter;

pub struct SettlementView {
    pub balance_lines: Vec<String>,
    pub transfer_lines: Vec<String>,
}

impl SettlementPresenter {
    pub fn render(ledger: &Ledger) -> SettlementView {
        let balance_lines = ledger.persons().iter().map(Self::balance_line).collect();

        let transfer_lines = ledger
            .transfers()
            .map(|transfer| {
                format!(
                    "{} pays ${} to {}",
                    transfer.from, transfer.amount, transfer.to
                )
            })
            .collect();

        SettlementView {
            balance_lines,
            transfer_lines,
        }
    }

    fn balance_line(person: &Person) -> String {
        let name = person.name();
        let paid = person.paid();
        if person.debt().is_positive() {
            format!("{name} paid ${paid}, owes ${}", person.debt())
        } else if person.credit().is_positive() {
            format!("{name} paid ${paid}, is owed ${}", person.credit())
        } else {
            format!("{name} paid ${paid}, settled")
        }
    }
}
