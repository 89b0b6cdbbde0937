use serde::{Deserialize, Serialize};

/// A single dish on the restaurant menu.
///
/// Loaded once from the menu file and shared read-only by every worker
/// through the [`Catalog`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: f64,
}

impl MenuItem {
    /// Creates a new MenuItem instance.
    ///
    /// # Arguments
    /// * `name` - Dish name, matched exactly against ordered item names
    /// * `price` - Dish price
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// The in-memory set of menu items available for matching.
///
/// Names are not required to be unique; lookups return the first entry
/// in file order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<MenuItem>,
}

impl Catalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Finds the first item whose name equals `name` exactly (case-sensitive).
    pub fn find(&self, name: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<MenuItem>> for Catalog {
    fn from(items: Vec<MenuItem>) -> Self {
        Self::new(items)
    }
}
