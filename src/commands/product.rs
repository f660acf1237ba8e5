use clap::{Args, Subcommand, ValueEnum};

use prodcat::api::CatalogClient;
use prodcat::models::ProductDraft;
use prodcat::ui::{Confirm, StdinConfirm};

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct ProductCommand {
    #[command(subcommand)]
    pub command: ProductSubcommand,
}

#[derive(Subcommand)]
pub enum ProductSubcommand {
    /// List products, optionally filtered by a search term
    List {
        /// Search term matched against name and description
        #[arg(long, short)]
        search: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show a single product
    Show {
        /// Product ID
        id: i64,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Create a new product
    Add {
        /// Product name
        name: String,

        /// Product description
        #[arg(long, short, default_value = "")]
        description: String,

        /// Price (must be positive)
        #[arg(long, short)]
        price: String,
    },

    /// Update an existing product
    Edit {
        /// Product ID
        id: i64,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New price
        #[arg(long)]
        price: Option<String>,
    },

    /// Delete a product
    Delete {
        /// Product ID
        id: i64,

        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },
}

impl ProductCommand {
    pub async fn run(&self, client: &CatalogClient) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            ProductSubcommand::List { search, format } => {
                let products = client.list(search.as_deref()).await?;

                if products.is_empty() {
                    println!("No products to display.");
                    return Ok(());
                }

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&products)?);
                    }
                    OutputFormat::Text => {
                        for product in &products {
                            println!("{}", product);
                        }
                        println!("\nTotal: {} product(s)", products.len());
                    }
                }
                Ok(())
            }

            ProductSubcommand::Show { id, format } => {
                let product = client.get(*id).await?;

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&product)?);
                    }
                    OutputFormat::Text => {
                        println!("{}", product);
                    }
                }
                Ok(())
            }

            ProductSubcommand::Add {
                name,
                description,
                price,
            } => {
                // Validation happens before any request goes out.
                let draft = ProductDraft::parse(name, description, price)?;
                let message = client.create(&draft).await?;
                println!("{}", message);
                Ok(())
            }

            ProductSubcommand::Edit {
                id,
                name,
                description,
                price,
            } => {
                if name.is_none() && description.is_none() && price.is_none() {
                    return Err("Nothing to update. Provide at least one option.".into());
                }

                // Fetch the current record, then send a full replacement
                // with the changed fields merged over it.
                let current = client.get(*id).await?;

                let name = name.as_deref().unwrap_or(&current.name);
                let description = match description.as_deref() {
                    Some(d) => d.to_string(),
                    None => current.description.clone().unwrap_or_default(),
                };
                let price = match price.as_deref() {
                    Some(p) => p.to_string(),
                    None => format!("{}", current.price),
                };

                let draft = ProductDraft::parse(name, &description, &price)?;
                let message = client.update(*id, &draft).await?;
                println!("{}", message);
                Ok(())
            }

            ProductSubcommand::Delete { id, force } => {
                if !force {
                    let product = client.get(*id).await?;
                    let prompt =
                        format!("Delete product '{}'? This cannot be undone.", product.name);
                    if !StdinConfirm.confirm(&prompt) {
                        println!("Deletion cancelled.");
                        return Ok(());
                    }
                }

                let message = client.delete(*id).await?;
                println!("{}", message);
                Ok(())
            }
        }
    }
}
