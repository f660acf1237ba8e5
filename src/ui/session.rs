//! Interactive browse session.
//!
//! A line-oriented front end over `CatalogController`: the list view with
//! its search filter, the create form, the per-record editor, and the
//! confirmation-gated delete all live here. The initial load runs exactly
//! once when the session starts.

use std::io::{self, BufRead, Write};
use std::time::Instant;

use super::controller::{CatalogController, Confirm};
use super::view::LOADING;
use crate::api::CatalogClient;

const HELP: &str = "\
Commands:
  list            reload the product list
  search <text>   filter the list by a search term
  clear           remove the filter and show all products
  add             create a new product
  edit <id>       edit a product
  delete <id>     delete a product (asks for confirmation)
  refresh         re-run the current query
  help            show this help
  quit            leave the session";

pub struct Session {
    controller: CatalogController,
    input: Box<dyn BufRead + Send>,
}

/// Confirmation prompt answered from the session's input stream.
struct ReaderConfirm<'a> {
    input: &'a mut (dyn BufRead + Send),
}

impl Confirm for ReaderConfirm<'_> {
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{} [y/N] ", prompt);
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => false,
            Ok(_) => line.trim().eq_ignore_ascii_case("y"),
        }
    }
}

impl Session {
    pub fn new(client: CatalogClient) -> Self {
        Self::with_input(client, Box::new(io::BufReader::new(io::stdin())))
    }

    /// Builds a session reading commands from an arbitrary source.
    pub fn with_input(client: CatalogClient, input: Box<dyn BufRead + Send>) -> Self {
        Self {
            controller: CatalogController::new(client),
            input,
        }
    }

    pub fn controller(&self) -> &CatalogController {
        &self.controller
    }

    /// Runs the session until the user quits or input closes.
    pub async fn run(&mut self) -> io::Result<()> {
        println!("prodcat interactive session. Type 'help' for commands.\n");

        println!("{}", LOADING);
        self.controller.load_products(None).await;
        self.render();

        loop {
            let line = match self.prompt("catalog> ")? {
                Some(line) => line,
                None => break,
            };

            let (command, argument) = split_command(&line);
            match command {
                "" => continue,
                "quit" | "exit" => break,
                "help" => {
                    println!("{}", HELP);
                    continue;
                }
                "list" | "clear" => {
                    println!("{}", LOADING);
                    self.controller.load_products(None).await;
                }
                "search" => {
                    if argument.is_empty() {
                        println!("Usage: search <text>");
                        continue;
                    }
                    println!("{}", LOADING);
                    self.controller.load_products(Some(argument)).await;
                }
                "refresh" => {
                    let filter = self.controller.view().filter.clone();
                    println!("{}", LOADING);
                    self.controller.load_products(filter.as_deref()).await;
                }
                "add" => {
                    self.add_flow().await?;
                }
                "edit" => match argument.parse::<i64>() {
                    Ok(id) => self.edit_flow(id).await?,
                    Err(_) => {
                        println!("Usage: edit <id>");
                        continue;
                    }
                },
                "delete" => match argument.parse::<i64>() {
                    Ok(id) => {
                        let mut confirm = ReaderConfirm {
                            input: &mut *self.input,
                        };
                        self.controller.delete_product(id, &mut confirm).await;
                    }
                    Err(_) => {
                        println!("Usage: delete <id>");
                        continue;
                    }
                },
                other => {
                    println!("Unknown command '{}'. Type 'help' for commands.", other);
                    continue;
                }
            }

            self.render();
        }

        Ok(())
    }

    fn render(&self) {
        println!();
        println!("{}", self.controller.view().render_list());
        for notice in self.controller.view().render_notices(Instant::now()) {
            println!("{}", notice);
        }
        println!();
    }

    /// The create form. On a failed attempt the entered values are
    /// offered back as defaults for correction; 'cancel' abandons the
    /// form without a request.
    async fn add_flow(&mut self) -> io::Result<()> {
        println!("New product ('cancel' to abort):");

        let mut name = String::new();
        let mut description = String::new();
        let mut price = String::new();

        loop {
            name = match self.read_field("  name", &name)? {
                Some(value) => value,
                None => {
                    println!("Cancelled.");
                    return Ok(());
                }
            };
            description = match self.read_field("  description", &description)? {
                Some(value) => value,
                None => {
                    println!("Cancelled.");
                    return Ok(());
                }
            };
            price = match self.read_field("  price", &price)? {
                Some(value) => value,
                None => {
                    println!("Cancelled.");
                    return Ok(());
                }
            };

            if self
                .controller
                .create_product(&name, &description, &price)
                .await
            {
                // Success clears the form.
                return Ok(());
            }

            self.print_notices();
            if !self.retry_prompt()? {
                return Ok(());
            }
        }
    }

    /// The editor flow: fetch-and-open, then edit fields and submit.
    /// An empty input keeps a field's current value; 'cancel' at any
    /// prompt discards unsaved edits immediately.
    async fn edit_flow(&mut self, id: i64) -> io::Result<()> {
        if !self.controller.open_editor(id).await {
            return Ok(());
        }

        loop {
            if let Some(rendered) = self.controller.view().render_editor() {
                println!("\n{}", rendered);
            }
            println!("(empty input keeps the current value, 'cancel' discards)");

            let current = match self.controller.view().editor.as_ref() {
                Some(form) => (form.name.clone(), form.description.clone(), form.price.clone()),
                None => return Ok(()),
            };

            let name = match self.read_field("  name", &current.0)? {
                Some(value) => value,
                None => return self.cancel_edit(),
            };
            let description = match self.read_field("  description", &current.1)? {
                Some(value) => value,
                None => return self.cancel_edit(),
            };
            let price = match self.read_field("  price", &current.2)? {
                Some(value) => value,
                None => return self.cancel_edit(),
            };

            if let Some(form) = self.controller.editor_mut() {
                form.name = name;
                form.description = description;
                form.price = price;
            }

            if self.controller.submit_edit().await {
                return Ok(());
            }

            // Submit failed; the editor is still open with its notice.
            self.print_notices();
            if !self.retry_prompt()? {
                return self.cancel_edit();
            }
        }
    }

    fn cancel_edit(&mut self) -> io::Result<()> {
        self.controller.close_editor();
        println!("Edit cancelled.");
        Ok(())
    }

    fn print_notices(&self) {
        for notice in self.controller.view().render_notices(Instant::now()) {
            println!("{}", notice);
        }
    }

    fn retry_prompt(&mut self) -> io::Result<bool> {
        match self.prompt("Try again? [y/N] ")? {
            Some(answer) => Ok(answer.trim().eq_ignore_ascii_case("y")),
            None => Ok(false),
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        print!("{}", text);
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Reads one form field. Empty input keeps `current`; returns `None`
    /// on 'cancel' or end of input.
    fn read_field(&mut self, label: &str, current: &str) -> io::Result<Option<String>> {
        let shown = if current.is_empty() {
            format!("{}: ", label)
        } else {
            format!("{} [{}]: ", label, current)
        };

        match self.prompt(&shown)? {
            None => Ok(None),
            Some(text) if text.trim().eq_ignore_ascii_case("cancel") => Ok(None),
            Some(text) if text.trim().is_empty() => Ok(Some(current.to_string())),
            Some(text) => Ok(Some(text)),
        }
    }
}

/// Convenience entry point used by the `browse` command.
pub async fn run(client: CatalogClient) -> io::Result<()> {
    Session::new(client).run().await
}

fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim();
    match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    }
}
