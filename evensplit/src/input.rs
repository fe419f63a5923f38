//! Pure parsing helpers for the menu loop, kept free of I/O so they can be
//! tested directly.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    AddPerson,
    Process,
    DisplayPayments,
    Quit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddPerson),
            "2" => Some(Self::Process),
            "3" => Some(Self::DisplayPayments),
            "4" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Parses an amount entered at the prompt. A leading `$` is tolerated;
/// non-finite values are rejected so the engine only ever sees real numbers.
pub fn parse_amount(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let value: f64 = trimmed.parse().ok()?;
    value.is_finite().then_some(value)
}

/// Trims the entered name; `None` if nothing is left.
pub fn parse_name(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::add("1", Some(MenuChoice::AddPerson))]
    #[case::process("2", Some(MenuChoice::Process))]
    #[case::display("3", Some(MenuChoice::DisplayPayments))]
    #[case::quit("4", Some(MenuChoice::Quit))]
    #[case::padded(" 2 \n", Some(MenuChoice::Process))]
    #[case::out_of_range("5", None)]
    #[case::garbage("abc", None)]
    #[case::empty("", None)]
    fn menu_choices_parse(#[case] input: &str, #[case] expected: Option<MenuChoice>) {
        assert_eq!(MenuChoice::parse(input), expected);
    }

    #[rstest]
    #[case::plain("12.5", Some(12.5))]
    #[case::integer("40", Some(40.0))]
    #[case::dollar_prefix("$7.25", Some(7.25))]
    #[case::negative("-5", Some(-5.0))]
    #[case::padded(" 3.0 \n", Some(3.0))]
    #[case::garbage("twelve", None)]
    #[case::empty("", None)]
    #[case::infinite("inf", None)]
    #[case::nan("NaN", None)]
    fn amounts_parse(#[case] input: &str, #[case] expected: Option<f64>) {
        assert_eq!(parse_amount(input), expected);
    }

    #[rstest]
    #[case::plain("Ada", Some("Ada"))]
    #[case::padded("  Ada \n", Some("Ada"))]
    #[case::empty("", None)]
    #[case::whitespace_only("   \n", None)]
    fn names_parse(#[case] input: &str, #[case] expected: Option<&str>) {
        assert_eq!(parse_name(input), expected);
    }
}
