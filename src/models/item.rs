use rust_decimal::Decimal;

/// Longest item name the form accepts, in characters.
pub const MAX_NAME_LEN: usize = 25;

/// Identifier handed out by a [`crate::list::ShoppingList`]. Ids only grow
/// and are never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub u64);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    pub price: Decimal,
    pub completed: bool,
    /// Local wall-clock time the item was added, "HH:MM".
    pub added_at: String,
}

impl Item {
    pub fn new(id: ItemId, text: String, price: Decimal) -> Self {
        Self {
            id,
            text,
            price,
            completed: false,
            added_at: chrono::Local::now().format("%H:%M").to_string(),
        }
    }

    /// Price still owed on this item: zero once it has been picked up.
    pub fn outstanding(&self) -> Decimal {
        if self.completed {
            Decimal::ZERO
        } else {
            self.price
        }
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}
