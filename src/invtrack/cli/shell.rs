//! The interactive menu.
//!
//! The shell owns nothing but a prompter; the inventory lives in the
//! [`InventoryApi`] it borrows, so the caller decides what happens to it
//! afterwards. Leaving through the menu or closing stdin both save first.

use super::prompt::{PromptError, Prompter};
use super::render::{
    print_error, print_messages, render_heading, render_menu, render_product_detail,
    render_product_table, render_summary,
};
use anyhow::Context;
use colored::Colorize;
use invtrack::api::{CmdResult, InventoryApi, SortKey};
use invtrack::model::{parse_price, parse_quantity, NewProduct, ProductRecord, ProductUpdate};
use invtrack::store::InventoryBackend;
use std::io::{BufRead, Write};
use tracing::debug;

/// What the menu loop should do after an operation.
enum Flow {
    Continue,
    Exit,
}

pub struct Shell<'a, B: InventoryBackend, R, W> {
    api: &'a mut InventoryApi<B>,
    prompter: Prompter<R, W>,
}

impl<'a, B, R, W> Shell<'a, B, R, W>
where
    B: InventoryBackend,
    R: BufRead,
    W: Write,
{
    pub fn new(api: &'a mut InventoryApi<B>, prompter: Prompter<R, W>) -> Self {
        Self { api, prompter }
    }

    pub fn run(mut self) -> anyhow::Result<()> {
        loop {
            render_menu(self.out())?;
            let choice = match self.prompter.ask("Choose an option (1-7): ") {
                Ok(choice) => choice,
                Err(PromptError::Closed) => return self.save_on_closed_input(),
                Err(e) => return Err(e.into()),
            };
            debug!(choice = %choice, "menu choice");

            let outcome = match choice.as_str() {
                "1" => self.add(),
                "2" => self.update(),
                "3" => self.remove(),
                "4" => self.search(),
                "5" => self.list(),
                "6" => self.save().map(|_| Flow::Continue),
                "7" => self.exit(),
                _ => {
                    print_error(self.out(), "Invalid option. Please choose 1-7.")?;
                    Ok(Flow::Continue)
                }
            };

            match outcome {
                Ok(Flow::Exit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(PromptError::TooManyAttempts) => {
                    print_error(self.out(), "Too many invalid attempts. Operation cancelled.")?;
                }
                Err(PromptError::Closed) => return self.save_on_closed_input(),
                Err(PromptError::Io(e)) => return Err(e).context("terminal I/O failed"),
            }

            match self.prompter.ask("\nPress Enter to continue...") {
                Ok(_) => {}
                Err(PromptError::Closed) => return self.save_on_closed_input(),
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn out(&mut self) -> &mut W {
        self.prompter.output()
    }

    fn print(&mut self, result: &CmdResult) -> Result<(), PromptError> {
        print_messages(self.out(), &result.messages)?;
        Ok(())
    }

    fn add(&mut self) -> Result<Flow, PromptError> {
        render_heading(self.out(), "ADD NEW PRODUCT")?;

        let id = self.prompter.ask("Enter product ID: ")?;
        if id.is_empty() {
            print_error(self.out(), "Product ID cannot be empty.")?;
            return Ok(Flow::Continue);
        }

        if self.api.contains(&id) {
            print_error(
                self.out(),
                format!("Product with ID '{}' already exists.", id),
            )?;
            if self
                .prompter
                .confirm("Do you want to update it instead? (y/n): ")?
            {
                return self.update_existing(&id);
            }
            return Ok(Flow::Continue);
        }

        let name = self.prompter.ask("Enter product name: ")?;
        if name.is_empty() {
            print_error(self.out(), "Product name cannot be empty.")?;
            return Ok(Flow::Continue);
        }

        let quantity = self.prompter.ask_valid("Enter quantity: ", parse_quantity)?;
        let price = self.prompter.ask_valid("Enter price: $", parse_price)?;
        let category = self.prompter.ask("Enter category (optional): ")?;

        let product = NewProduct::new(id, name, quantity, price).with_category(category);
        match self.api.add_product(product) {
            Ok(result) => self.print(&result)?,
            Err(e) => print_error(self.out(), e)?,
        }
        Ok(Flow::Continue)
    }

    fn update(&mut self) -> Result<Flow, PromptError> {
        render_heading(self.out(), "UPDATE PRODUCT")?;
        let id = self.prompter.ask("Enter product ID to update: ")?;
        self.update_existing(&id)
    }

    fn update_existing(&mut self, id: &str) -> Result<Flow, PromptError> {
        let Some(current) = self.lookup(id)? else {
            return Ok(Flow::Continue);
        };

        writeln!(self.out(), "Current product details:")?;
        render_product_detail(self.out(), &current)?;
        writeln!(self.out(), "\nWhat would you like to update?")?;
        writeln!(self.out(), "1. Name\n2. Quantity\n3. Price\n4. Category\n5. All fields")?;

        let choice = self.prompter.ask("Choose option (1-5): ")?;
        let update = match choice.as_str() {
            "1" => ProductUpdate::new().with_name(self.ask_name(&current)?),
            "2" => ProductUpdate::new().with_quantity(self.ask_quantity(&current)?),
            "3" => ProductUpdate::new().with_price(self.ask_price(&current)?),
            "4" => ProductUpdate::new().with_category(self.ask_category(&current)?),
            "5" => {
                let name = self.ask_name(&current)?;
                let quantity = self.ask_quantity(&current)?;
                let price = self.ask_price(&current)?;
                let category = self.ask_category(&current)?;
                ProductUpdate::new()
                    .with_name(name)
                    .with_quantity(quantity)
                    .with_price(price)
                    .with_category(category)
            }
            _ => {
                print_error(self.out(), "Invalid option.")?;
                return Ok(Flow::Continue);
            }
        };

        match self.api.update_product(&current.id, &update) {
            Ok(result) => self.print(&result)?,
            Err(e) => print_error(self.out(), e)?,
        }
        Ok(Flow::Continue)
    }

    fn ask_name(&mut self, current: &ProductRecord) -> Result<String, PromptError> {
        self.prompter
            .ask(&format!("Enter new name (current: {}): ", current.name))
    }

    fn ask_quantity(&mut self, current: &ProductRecord) -> Result<u64, PromptError> {
        self.prompter.ask_valid(
            &format!("Enter new quantity (current: {}): ", current.quantity),
            parse_quantity,
        )
    }

    fn ask_price(&mut self, current: &ProductRecord) -> Result<f64, PromptError> {
        self.prompter.ask_valid(
            &format!("Enter new price (current: ${:.2}): $", current.price),
            parse_price,
        )
    }

    fn ask_category(&mut self, current: &ProductRecord) -> Result<String, PromptError> {
        self.prompter
            .ask(&format!("Enter new category (current: {}): ", current.category))
    }

    fn remove(&mut self) -> Result<Flow, PromptError> {
        render_heading(self.out(), "REMOVE PRODUCT")?;
        let id = self.prompter.ask("Enter product ID to remove: ")?;
        let Some(current) = self.lookup(&id)? else {
            return Ok(Flow::Continue);
        };

        writeln!(self.out(), "Product to be removed:")?;
        render_product_detail(self.out(), &current)?;

        if self
            .prompter
            .confirm("\nAre you sure you want to remove this product? (y/n): ")?
        {
            match self.api.remove_product(&current.id) {
                Ok(result) => self.print(&result)?,
                Err(e) => print_error(self.out(), e)?,
            }
        } else {
            writeln!(self.out(), "{}", "Product removal cancelled.".dimmed())?;
        }
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow, PromptError> {
        render_heading(self.out(), "SEARCH PRODUCTS")?;
        let term = self
            .prompter
            .ask("Enter search term (ID, name, or category): ")?;

        let result = self.api.search_products(&term);
        self.print(&result)?;
        if !result.listed_products.is_empty() {
            render_product_table(self.out(), &result.listed_products)?;
        }
        Ok(Flow::Continue)
    }

    fn list(&mut self) -> Result<Flow, PromptError> {
        render_heading(self.out(), "ALL PRODUCTS")?;
        if self.api.inventory().is_empty() {
            writeln!(self.out(), "No products in inventory.")?;
            return Ok(Flow::Continue);
        }

        writeln!(self.out(), "Sort by:")?;
        writeln!(self.out(), "1. ID\n2. Name\n3. Price\n4. Quantity\n5. Category")?;
        let choice = self.prompter.ask("Choose sort option (1-5): ")?;

        let result = self.api.list_products(&sort_key_for_choice(&choice));
        self.print(&result)?;
        render_product_table(self.out(), &result.listed_products)?;
        if let Some(summary) = &result.summary {
            render_summary(self.out(), summary)?;
        }
        Ok(Flow::Continue)
    }

    /// Returns whether the save succeeded.
    fn save(&mut self) -> Result<bool, PromptError> {
        match self.api.save() {
            Ok(result) => {
                self.print(&result)?;
                Ok(true)
            }
            Err(e) => {
                print_error(self.out(), e)?;
                Ok(false)
            }
        }
    }

    fn exit(&mut self) -> Result<Flow, PromptError> {
        writeln!(self.out(), "\nSaving inventory before exit...")?;
        if !self.save()?
            && !self
                .prompter
                .confirm("Exit anyway? Unsaved changes will be lost. (y/n): ")?
        {
            return Ok(Flow::Continue);
        }
        writeln!(
            self.out(),
            "Thank you for using the Inventory Management System!"
        )?;
        Ok(Flow::Exit)
    }

    /// Stdin is gone, so there is nobody left to ask: save, and make a failed
    /// save the process's error.
    fn save_on_closed_input(&mut self) -> anyhow::Result<()> {
        writeln!(self.out(), "\nSaving inventory before exit...")?;
        let result = self
            .api
            .save()
            .context("could not save inventory before exiting")?;
        print_messages(self.out(), &result.messages)?;
        Ok(())
    }

    fn lookup(&mut self, id: &str) -> Result<Option<ProductRecord>, PromptError> {
        match self.api.view_product(id) {
            Ok(result) => Ok(result.listed_products.into_iter().next()),
            Err(e) => {
                print_error(self.out(), e)?;
                Ok(None)
            }
        }
    }
}

/// Maps the numbered sort menu onto sort keys. Anything else is passed
/// through, so typed key names work and unknown input gets the list
/// command's warning.
fn sort_key_for_choice(choice: &str) -> String {
    let key = match choice {
        "1" => SortKey::Id,
        "2" => SortKey::Name,
        "3" => SortKey::PriceAsc,
        "4" => SortKey::QuantityDesc,
        "5" => SortKey::Category,
        other => return other.to_string(),
    };
    key.to_string()
}
