mod error;
mod form;

pub(crate) use error::AddError;
pub(crate) use form::{Form, FormField};

use anyhow::Result;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::{Item, ItemId};
use crate::prompt::{Confirmation, Decision, Prompt};

/// Everything a user can do to the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Action {
    /// Submit the item currently in the form.
    Add,
    Toggle(ItemId),
    Remove { id: ItemId, decision: Decision },
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Outcome {
    Added(ItemId),
    Toggled { id: ItemId, completed: bool },
    Removed(Item),
    /// The user backed out of a removal.
    Kept,
    /// The targeted item is no longer on the list.
    Missing,
}

/// The session's shopping list together with its form. Items are only
/// changed through [`ShoppingList::apply`].
#[derive(Debug, Clone, Default)]
pub(crate) struct ShoppingList {
    items: Vec<Item>,
    next_id: u64,
    pub(crate) form: Form,
}

impl ShoppingList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_budget(budget: &str) -> Self {
        let mut list = Self::new();
        list.form.set_budget(budget);
        list
    }

    pub(crate) fn items(&self) -> &[Item] {
        &self.items
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Sum of the prices of every item not yet completed.
    pub(crate) fn subtotal(&self) -> Decimal {
        subtotal(&self.items)
    }

    /// The budget ceiling, or `None` when the budget field is blank or
    /// unreadable, in which case nothing is over budget.
    pub(crate) fn ceiling(&self) -> Option<Decimal> {
        parse_amount(self.form.budget())
    }

    /// Headroom left under the ceiling. Negative once the ceiling has been
    /// lowered below the current subtotal.
    pub(crate) fn remaining(&self) -> Option<Decimal> {
        self.ceiling()
            .map(|c| c.checked_sub(self.subtotal()).unwrap_or(Decimal::MIN))
    }

    pub(crate) fn apply(&mut self, action: Action) -> Result<Outcome, AddError> {
        match action {
            Action::Add => self.add_item().map(Outcome::Added),
            Action::Toggle(id) => Ok(self.toggle(id)),
            Action::Remove { id, decision } => Ok(self.remove(id, decision)),
        }
    }

    /// Ask `prompt` whether the item should go, then act on the answer.
    /// An id that is not on the list is reported without prompting.
    pub(crate) fn request_removal(
        &mut self,
        id: ItemId,
        prompt: &mut impl Prompt,
    ) -> Result<Outcome> {
        let Some(item) = self.get(id) else {
            return Ok(Outcome::Missing);
        };
        let decision = prompt.confirm(&Confirmation::remove_item(item))?;
        Ok(self.remove(id, decision))
    }

    fn add_item(&mut self) -> Result<ItemId, AddError> {
        let price = validate_candidate(
            &self.items,
            self.form.name(),
            self.form.price(),
            self.form.budget(),
        )?;

        self.next_id += 1;
        let id = ItemId(self.next_id);
        let item = Item::new(id, self.form.name().to_string(), price);
        self.items.push(item);
        self.form.clear_item_fields();
        Ok(id)
    }

    fn toggle(&mut self, id: ItemId) -> Outcome {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.toggle();
                Outcome::Toggled {
                    id,
                    completed: item.completed,
                }
            }
            None => Outcome::Missing,
        }
    }

    fn remove(&mut self, id: ItemId, decision: Decision) -> Outcome {
        let Some(pos) = self.items.iter().position(|i| i.id == id) else {
            return Outcome::Missing;
        };
        match decision {
            Decision::Cancel => Outcome::Kept,
            Decision::Confirm => Outcome::Removed(self.items.remove(pos)),
        }
    }
}

/// Sum of the outstanding prices. Adds refuse any price that would make
/// the sum of every price unrepresentable, so the fold never overflows on a
/// list built through [`ShoppingList::apply`]; `Decimal::MAX` is the cap
/// otherwise.
pub(crate) fn subtotal(items: &[Item]) -> Decimal {
    items
        .iter()
        .map(Item::outstanding)
        .try_fold(Decimal::ZERO, Decimal::checked_add)
        .unwrap_or(Decimal::MAX)
}

/// Run the add checks in order against `items` and return the parsed
/// price when the candidate may be added.
pub(crate) fn validate_candidate(
    items: &[Item],
    name: &str,
    price: &str,
    ceiling: &str,
) -> Result<Decimal, AddError> {
    if name.trim().is_empty() || price.trim().is_empty() {
        return Err(AddError::BlankFields);
    }

    let price_val = match parse_amount(price) {
        Some(p) if p >= Decimal::ZERO => p,
        _ => return Err(AddError::InvalidPrice(price.trim().to_string())),
    };

    if let Some(ceiling) = parse_amount(ceiling) {
        let subtotal = subtotal(items);
        let over = match subtotal.checked_add(price_val) {
            Some(total) => total > ceiling,
            None => true,
        };
        if over {
            return Err(AddError::LimitExceeded {
                subtotal,
                price: price_val,
                ceiling,
            });
        }
    }

    // Completed items can be toggled back, so every price must fit in one sum.
    let fits = items
        .iter()
        .try_fold(price_val, |acc, i| acc.checked_add(i.price))
        .is_some();
    if !fits {
        return Err(AddError::InvalidPrice(price.trim().to_string()));
    }

    if items.iter().any(|i| i.text == name) {
        return Err(AddError::DuplicateName(name.to_string()));
    }

    Ok(price_val)
}

/// Parse a money amount as typed into a field. Surrounding whitespace is
/// ignored and a lone comma is read as the decimal separator.
pub(crate) fn parse_amount(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    let normalized = if !s.contains('.') && s.matches(',').count() == 1 {
        s.replace(',', ".")
    } else {
        s.to_string()
    };
    Decimal::from_str(&normalized).ok()
}
