mod product;

pub use product::{Product, ProductDraft, ValidationError, NO_DESCRIPTION};
