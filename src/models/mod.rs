mod item;

pub use item::{Item, ItemId, MAX_NAME_LEN};

#[cfg(test)]
mod tests;
