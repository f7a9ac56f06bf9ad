//! Terminal rendering. Every function writes to a caller supplied writer so
//! the interactive shell and the subcommands share one set of layouts, and
//! tests can capture the output.

use chrono::{Local, NaiveDateTime};
use colored::Colorize;
use invtrack::api::{CmdMessage, MessageLevel, Summary};
use invtrack::model::{timestamp, ProductRecord};
use std::fmt::Display;
use std::io::{self, Write};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const RULE_WIDTH: usize = 80;
const BANNER_WIDTH: usize = 50;
const DETAIL_RULE_WIDTH: usize = 40;

const ID_WIDTH: usize = 10;
const NAME_WIDTH: usize = 20;
const QTY_WIDTH: usize = 8;
const PRICE_WIDTH: usize = 9;
const CATEGORY_WIDTH: usize = 15;
const VALUE_WIDTH: usize = 11;

pub fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub fn print_error<W: Write>(out: &mut W, error: impl Display) -> io::Result<()> {
    writeln!(out, "{}", format!("Error: {}", error).red())
}

pub fn render_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(BANNER_WIDTH))?;
    writeln!(out, "{}", "           INVENTORY MANAGEMENT SYSTEM".bold())?;
    writeln!(out, "{}", "=".repeat(BANNER_WIDTH))?;
    for (n, label) in [
        "Add Product",
        "Update Product",
        "Remove Product",
        "Search Product",
        "List All Products",
        "Save Inventory",
        "Exit",
    ]
    .iter()
    .enumerate()
    {
        writeln!(out, "{}. {}", n + 1, label)?;
    }
    writeln!(out, "{}", "-".repeat(BANNER_WIDTH))
}

pub fn render_heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", format!("--- {} ---", title).bold())
}

pub fn render_product_table<W: Write>(out: &mut W, products: &[ProductRecord]) -> io::Result<()> {
    if products.is_empty() {
        return writeln!(out, "No products to display.");
    }

    writeln!(
        out,
        "{} {} {} {} {} {}",
        fit_to_width("ID", ID_WIDTH),
        fit_to_width("Name", NAME_WIDTH),
        fit_to_width("Qty", QTY_WIDTH),
        fit_to_width("Price", PRICE_WIDTH + 1),
        fit_to_width("Category", CATEGORY_WIDTH),
        "Total Value"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    for product in products {
        writeln!(
            out,
            "{} {} {} ${} {} ${}",
            fit_to_width(&product.id, ID_WIDTH),
            fit_to_width(&product.name, NAME_WIDTH),
            pad_to_width(&product.quantity.to_string(), QTY_WIDTH),
            pad_to_width(&format!("{:.2}", product.price), PRICE_WIDTH),
            fit_to_width(&product.category, CATEGORY_WIDTH),
            pad_to_width(&format!("{:.2}", product.total_value()), VALUE_WIDTH),
        )?;
    }
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

pub fn render_product_detail<W: Write>(out: &mut W, product: &ProductRecord) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(DETAIL_RULE_WIDTH))?;
    writeln!(out, "ID: {}", product.id.yellow())?;
    writeln!(out, "Name: {}", product.name.bold())?;
    writeln!(out, "Quantity: {}", product.quantity)?;
    writeln!(out, "Price: {}", format_money(product.price))?;
    writeln!(out, "Category: {}", product.category)?;
    writeln!(out, "Total Value: {}", format_money(product.total_value()))?;
    writeln!(out, "Added: {}", timestamp::format(&product.added_at))?;
    if let Some(updated) = &product.updated_at {
        writeln!(
            out,
            "Updated: {} {}",
            timestamp::format(updated),
            format!("({})", format_time_ago(updated)).dimmed()
        )?;
    }
    Ok(())
}

pub fn render_summary<W: Write>(out: &mut W, summary: &Summary) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "INVENTORY SUMMARY:".bold())?;
    writeln!(out, "Total Products: {}", summary.product_count)?;
    writeln!(out, "Total Quantity: {}", summary.total_quantity)?;
    writeln!(out, "Total Value: {}", format_money(summary.total_value))?;
    writeln!(out, "Categories: {}", summary.categories.join(", "))
}

pub fn format_money(amount: f64) -> String {
    let fixed = format!("{:.2}", amount);
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${}.{}", grouped, cents)
}

/// Pads `s` to at least `width` columns. Numbers are never cut short.
fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

/// Pads `s` to exactly `width` columns, truncating with an ellipsis when it
/// does not fit.
fn fit_to_width(s: &str, width: usize) -> String {
    let current = s.width();
    if current <= width {
        format!("{}{}", s, " ".repeat(width - current))
    } else {
        let truncated = truncate_to_width(s, width);
        let padding = width.saturating_sub(truncated.width());
        format!("{}{}", truncated, " ".repeat(padding))
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(ts: &NaiveDateTime) -> String {
    let elapsed = Local::now().naive_local().signed_duration_since(*ts);
    Formatter::new().convert(elapsed.to_std().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use invtrack::model::timestamp;

    fn product(id: &str, name: &str) -> ProductRecord {
        ProductRecord {
            id: id.into(),
            name: name.into(),
            quantity: 3,
            price: 1234.5,
            category: "Tools".into(),
            added_at: timestamp::now(),
            updated_at: None,
        }
    }

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn formats_money_with_grouping() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(9.999), "$10.00");
        assert_eq!(format_money(1234.5), "$1,234.50");
        assert_eq!(format_money(1234567.891), "$1,234,567.89");
    }

    #[test]
    fn fits_columns() {
        assert_eq!(fit_to_width("abc", 5), "abc  ");
        assert_eq!(fit_to_width("abcdefgh", 5), "abcd…");
        assert_eq!(fit_to_width("abcde", 5), "abcde");
        assert_eq!(pad_to_width("12.50", 8), "12.50   ");
        assert_eq!(pad_to_width("1234567.89", 5), "1234567.89");
    }

    #[test]
    fn table_rows_have_fixed_columns() {
        let text = rendered(|out| {
            render_product_table(
                out,
                &[
                    product("P1", "Widget"),
                    product("LONG-IDENTIFIER", "A very long product name indeed"),
                ],
            )
        });
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("ID         Name"));
        assert!(lines[2].starts_with("P1         Widget"));
        assert!(lines[2].contains("$1234.50"));
        assert!(lines[2].contains("$3703.50"));
        assert!(lines[3].starts_with("LONG-IDEN… A very long product…"));
    }

    #[test]
    fn large_amounts_are_not_truncated() {
        let mut big = product("P9", "Crane");
        big.quantity = 123_456_789;
        big.price = 98_765_432.1;
        let text = rendered(|out| render_product_table(out, &[big.clone()]));
        let row = text.lines().nth(2).unwrap();
        assert!(row.contains("123456789"));
        assert!(row.contains("$98765432.10"));
        assert!(row.contains(&format!("${:.2}", big.total_value())));
        assert!(!row.contains('…'));
    }

    #[test]
    fn empty_table_says_so() {
        let text = rendered(|out| render_product_table(out, &[]));
        assert_eq!(text.trim(), "No products to display.");
    }

    #[test]
    fn detail_shows_updated_only_when_present() {
        let mut p = product("P1", "Widget");
        let text = rendered(|out| render_product_detail(out, &p));
        assert!(text.contains("Total Value: $3,703.50"));
        assert!(!text.contains("Updated:"));

        p.updated_at = Some(timestamp::now());
        let text = rendered(|out| render_product_detail(out, &p));
        assert!(text.contains("Updated:"));
    }

    #[test]
    fn summary_lists_categories() {
        let summary = Summary {
            product_count: 2,
            total_quantity: 3,
            total_value: 16.0,
            categories: vec!["Tools".into(), "Food".into()],
        };
        let text = rendered(|out| render_summary(out, &summary));
        assert!(text.contains("Total Products: 2"));
        assert!(text.contains("Total Quantity: 3"));
        assert!(text.contains("Total Value: $16.00"));
        assert!(text.contains("Categories: Tools, Food"));
    }
}
