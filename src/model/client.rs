use serde::{Deserialize, Serialize};

/// A restaurant guest and the dish names they ordered, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub name: String,
    pub order: Vec<String>,
}

impl Client {
    /// Creates a new Client instance.
    ///
    /// # Arguments
    /// * `name` - Client's display name
    /// * `order` - Ordered dish names; may be empty
    pub fn new<I, S>(name: impl Into<String>, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            order: order.into_iter().map(Into::into).collect(),
        }
    }
}
