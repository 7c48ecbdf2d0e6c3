//! Output formatting for the CLI.

use console::style;
use shopfront_commerce::cart::{CartState, Notification, NotificationSink, Severity};
use shopfront_commerce::catalog::Product;

/// Output handler for CLI messages.
#[derive(Debug, Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a list item.
    pub fn list_item(&self, item: &str) {
        if self.json {
            return;
        }
        println!("  {} {}", style("•").dim(), item);
    }

    /// Print a table row.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        println!("  {}", format_row(cols, widths));
    }

    /// Print products as a table.
    pub fn products(&self, products: &[Product]) {
        const WIDTHS: [usize; 4] = [4, 32, 18, 10];
        self.table_row(&["ID", "TITLE", "CATEGORY", "PRICE"], &WIDTHS);
        for product in products {
            let id = product.id.to_string();
            let title = truncate(&product.title, WIDTHS[1]);
            let price = product.price_display();
            self.table_row(&[&id, &title, &product.category, &price], &WIDTHS);
        }
    }

    /// Print the cart lines and totals.
    pub fn cart(&self, cart: &CartState) {
        if cart.is_empty() {
            self.info("Your cart is empty.");
            return;
        }

        const WIDTHS: [usize; 5] = [4, 32, 10, 4, 10];
        self.table_row(&["ID", "TITLE", "PRICE", "QTY", "TOTAL"], &WIDTHS);
        for line in cart.lines() {
            let id = line.id().to_string();
            let title = truncate(&line.product.title, WIDTHS[1]);
            let price = line.product.price_display();
            let quantity = line.quantity.to_string();
            let total = line.line_total().display();
            self.table_row(&[&id, &title, &price, &quantity, &total], &WIDTHS);
        }

        self.header("Totals");
        self.kv("items", &cart.total_quantity().to_string());
        self.kv("price", &cart.total_price().display());
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Prints cart notifications the way the storefront shows its toasts.
impl NotificationSink for Output {
    fn notify(&self, notification: Notification) {
        match notification.severity {
            Severity::Info => self.info(&notification.message),
            Severity::Success => self.success(&notification.message),
            Severity::Warning => self.warn(&notification.message),
            Severity::Error => self.error(&notification.message),
        }
    }
}

fn format_row(cols: &[&str], widths: &[usize]) -> String {
    let formatted: Vec<String> = cols
        .iter()
        .zip(widths.iter())
        .map(|(col, width)| format!("{:width$}", col, width = width))
        .collect();
    formatted.join("  ").trim_end().to_string()
}

/// Shorten `text` to at most `max` characters, marking the cut with `…`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}
