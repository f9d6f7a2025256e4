use rust_decimal::Decimal;

use crate::ui::util::format_amount;

/// Reasons an add can be refused. Checked in declaration order; the first
/// failing check wins and the list is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AddError {
    BlankFields,
    InvalidPrice(String),
    LimitExceeded {
        subtotal: Decimal,
        price: Decimal,
        ceiling: Decimal,
    },
    DuplicateName(String),
}

impl AddError {
    /// Short heading shown on the alert.
    pub(crate) fn title(&self) -> &'static str {
        match self {
            Self::BlankFields => "Blank fields",
            Self::InvalidPrice(_) => "Invalid price",
            Self::LimitExceeded { .. } => "Limit exceeded",
            Self::DuplicateName(_) => "Heads up",
        }
    }

    pub(crate) fn message(&self) -> &'static str {
        match self {
            Self::BlankFields => "Please fill in every field.",
            Self::InvalidPrice(_) => "Please enter a valid price.",
            Self::LimitExceeded { .. } => "The items add up to more than the maximum allowed.",
            Self::DuplicateName(_) => "That item is already on the list!",
        }
    }

    /// The specifics behind the message, when there are any worth showing.
    pub(crate) fn detail(&self) -> Option<String> {
        match self {
            Self::BlankFields => None,
            Self::InvalidPrice(input) => Some(format!("'{input}' is not a price")),
            Self::LimitExceeded {
                subtotal,
                price,
                ceiling,
            } => Some(format!(
                "{} + {} is over {}",
                format_amount(*subtotal),
                format_amount(*price),
                format_amount(*ceiling)
            )),
            Self::DuplicateName(name) => Some(format!("'{name}' is already listed")),
        }
    }
}

impl std::fmt::Display for AddError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title(), self.message())
    }
}

impl std::error::Error for AddError {}
