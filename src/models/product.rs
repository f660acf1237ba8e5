use std::fmt;

use serde::{Deserialize, Serialize};

/// Fallback text rendered when a product carries no description.
pub const NO_DESCRIPTION: &str = "(no description)";

/// A catalog product as returned by the backend.
///
/// The server owns the record: ids are assigned on create and the client
/// never keeps a copy beyond the current render.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

impl Product {
    /// Description text for rendering, falling back when absent or empty.
    pub fn description_or_fallback(&self) -> &str {
        match self.description.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => NO_DESCRIPTION,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] {}", self.id, self.name)?;
        writeln!(f, "    {}", self.description_or_fallback())?;
        write!(f, "    Price: {:.2}", self.price)
    }
}

/// Write payload for create (POST) and full-replace update (PUT).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl ProductDraft {
    /// Validates raw form input and builds the write payload.
    ///
    /// This is the only client-side gate before a write request: the name
    /// must be non-empty after trimming and the price must parse to a
    /// finite number greater than zero. Uniqueness and everything else is
    /// the server's business.
    pub fn parse(name: &str, description: &str, price: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let price: f64 = price
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidPrice)?;
        if !price.is_finite() || price <= 0.0 {
            return Err(ValidationError::InvalidPrice);
        }

        Ok(Self {
            name: name.to_string(),
            description: description.trim().to_string(),
            price,
        })
    }
}

/// Client-detected input violation. Never reaches the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyName,
    InvalidPrice,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyName => write!(f, "Product name cannot be empty"),
            ValidationError::InvalidPrice => {
                write!(f, "Price must be a positive number")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
