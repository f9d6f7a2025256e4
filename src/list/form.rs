use crate::models::MAX_NAME_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Name,
    Price,
    Budget,
}

impl FormField {
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Name => "Item",
            Self::Price => "Price",
            Self::Budget => "Max total",
        }
    }

    pub(crate) fn is_numeric(&self) -> bool {
        matches!(self, Self::Price | Self::Budget)
    }
}

/// The three text inputs of the screen. Values are kept as typed; parsing
/// happens when an item is submitted.
#[derive(Debug, Clone, Default)]
pub(crate) struct Form {
    name: String,
    price: String,
    budget: String,
}

impl Form {
    pub(crate) fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Price => &self.price,
            FormField::Budget => &self.budget,
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn price(&self) -> &str {
        &self.price
    }

    pub(crate) fn budget(&self) -> &str {
        &self.budget
    }

    /// Replace the name, keeping at most `MAX_NAME_LEN` characters.
    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = name.chars().take(MAX_NAME_LEN).collect();
    }

    pub(crate) fn set_price(&mut self, price: &str) {
        self.price = price.to_string();
    }

    pub(crate) fn set_budget(&mut self, budget: &str) {
        self.budget = budget.to_string();
    }

    /// Append a typed character. Returns false when the field refuses it:
    /// the name is full, or a numeric field got something other than a
    /// digit or decimal separator.
    pub(crate) fn push(&mut self, field: FormField, c: char) -> bool {
        if field.is_numeric() && !(c.is_ascii_digit() || c == '.' || c == ',') {
            return false;
        }
        if field == FormField::Name && self.name.chars().count() >= MAX_NAME_LEN {
            return false;
        }
        self.buffer_mut(field).push(c);
        true
    }

    pub(crate) fn pop(&mut self, field: FormField) {
        self.buffer_mut(field).pop();
    }

    pub(crate) fn clear(&mut self, field: FormField) {
        self.buffer_mut(field).clear();
    }

    /// Reset the item inputs after a successful add. The budget stays.
    pub(crate) fn clear_item_fields(&mut self) {
        self.name.clear();
        self.price.clear();
    }

    fn buffer_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Price => &mut self.price,
            FormField::Budget => &mut self.budget,
        }
    }
}
