//! Interactive menu-driven front-end over [`PortfolioService`].

pub mod chart;

use std::io::{self, BufRead, Write};

use tracing::error;

use crate::models::{AssetRecord, PortfolioTable, UpdateOutcome, COLUMNS};
use crate::services::PortfolioService;
use crate::store::LoadSource;
use crate::views::format_percent;

const MENU: &str = "\nMenu:\n\
1. Add a new asset\n\
2. View portfolio\n\
3. Update asset price\n\
4. Calculate portfolio metrics\n\
5. Visualize portfolio performance\n\
6. Save portfolio\n\
7. Load portfolio\n\
8. Exit\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    Exit,
}

pub struct ConsoleSession<R, W> {
    service: PortfolioService,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    pub fn new(service: PortfolioService, input: R, output: W) -> Self {
        Self { service, input, output }
    }

    pub fn service(&self) -> &PortfolioService {
        &self.service
    }

    pub fn into_parts(self) -> (PortfolioService, W) {
        (self.service, self.output)
    }

    /// Runs the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to the Investment Portfolio Tracker!")?;

        loop {
            write!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Choose an option (1-8): ")? else {
                break;
            };

            let step = match choice.trim() {
                "1" => self.add_asset()?,
                "2" => self.view_portfolio()?,
                "3" => self.update_price()?,
                "4" => self.show_metrics()?,
                "5" => self.visualize()?,
                "6" => self.save()?,
                "7" => self.load()?,
                "8" => Step::Exit,
                _ => {
                    writeln!(self.output, "Invalid option. Please choose a valid option (1-8).")?;
                    Step::Continue
                }
            };

            if step == Step::Exit {
                break;
            }
        }

        writeln!(self.output, "Goodbye!")?;
        self.output.flush()
    }

    /// Prints `message` and reads one line. `None` means end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Reads a number. Returns `Err(step)` when the action should stop.
    fn prompt_number(&mut self, message: &str) -> io::Result<Result<f64, Step>> {
        let Some(raw) = self.prompt(message)? else {
            return Ok(Err(Step::Exit));
        };
        match raw.trim().parse::<f64>() {
            Ok(value) => Ok(Ok(value)),
            Err(_) => {
                writeln!(self.output, "Invalid number '{}'. Returning to menu.", raw.trim())?;
                Ok(Err(Step::Continue))
            }
        }
    }

    fn add_asset(&mut self) -> io::Result<Step> {
        let Some(name) = self.prompt("Enter the asset name: ")? else {
            return Ok(Step::Exit);
        };
        let name = name.trim().to_string();
        if name.is_empty() {
            writeln!(self.output, "Asset name cannot be empty.")?;
            return Ok(Step::Continue);
        }

        let purchase_price = match self.prompt_number(&format!("Enter the purchase price of {}: ", name))? {
            Ok(v) => v,
            Err(step) => return Ok(step),
        };
        let quantity = match self.prompt_number(&format!("Enter the quantity of {} owned: ", name))? {
            Ok(v) => v,
            Err(step) => return Ok(step),
        };
        let current_price = match self.prompt_number(&format!("Enter the current price of {}: ", name))? {
            Ok(v) => v,
            Err(step) => return Ok(step),
        };

        self.service
            .add_asset(AssetRecord::new(name.as_str(), purchase_price, quantity, current_price));
        writeln!(self.output, "Asset {} added successfully!", name)?;
        Ok(Step::Continue)
    }

    fn view_portfolio(&mut self) -> io::Result<Step> {
        if self.service.table().is_empty() {
            writeln!(self.output, "Your portfolio is empty.")?;
        } else {
            writeln!(self.output, "\nCurrent Portfolio:")?;
            write!(self.output, "{}", render_table(self.service.table()))?;
        }
        Ok(Step::Continue)
    }

    fn update_price(&mut self) -> io::Result<Step> {
        let Some(name) = self.prompt("Enter the asset name to update: ")? else {
            return Ok(Step::Exit);
        };
        let name = name.trim().to_string();
        if !self.service.table().contains(&name) {
            writeln!(self.output, "Asset {} not found in your portfolio.", name)?;
            return Ok(Step::Continue);
        }

        let new_price = match self.prompt_number(&format!("Enter the new price for {}: ", name))? {
            Ok(v) => v,
            Err(step) => return Ok(step),
        };

        match self.service.update_price(&name, new_price) {
            UpdateOutcome::Updated { .. } => {
                writeln!(self.output, "Price for {} updated to {}!", name, new_price)?
            }
            UpdateOutcome::NotFound => {
                writeln!(self.output, "Asset {} not found in your portfolio.", name)?
            }
        }
        Ok(Step::Continue)
    }

    fn show_metrics(&mut self) -> io::Result<Step> {
        let metrics = self.service.metrics();
        let Some(summary) = metrics.summary else {
            writeln!(self.output, "Your portfolio is empty. Add assets to calculate metrics.")?;
            return Ok(Step::Continue);
        };

        let width = label_width(metrics.assets.iter().map(|m| m.asset.as_str()), "Asset");
        writeln!(self.output, "\nAsset Performance:")?;
        writeln!(self.output, "{:<width$}  {:>15}  {:>15}", "Asset", "Current Value", "Performance (%)")?;
        for m in &metrics.assets {
            writeln!(
                self.output,
                "{:<width$}  {:>15.2}  {:>15}",
                m.asset,
                m.current_value,
                format_percent(m.performance_percent)
            )?;
        }

        writeln!(self.output, "\nTotal Portfolio Value: ${:.2}", summary.total_value)?;
        writeln!(
            self.output,
            "Overall Portfolio Percentage Change: {}",
            format_percent(summary.overall_change_percent)
        )?;
        Ok(Step::Continue)
    }

    fn visualize(&mut self) -> io::Result<Step> {
        if self.service.table().is_empty() {
            writeln!(self.output, "Your portfolio is empty. Add assets to visualize performance.")?;
            return Ok(Step::Continue);
        }
        let metrics = self.service.metrics();
        write!(self.output, "\n{}", chart::render_default(&metrics.assets))?;
        Ok(Step::Continue)
    }

    fn save(&mut self) -> io::Result<Step> {
        let path = self.service.store().path().display().to_string();
        match self.service.save() {
            Ok(()) => writeln!(self.output, "Portfolio saved to {}.", path)?,
            Err(e) => {
                error!("Failed to save portfolio to {}: {}", path, e);
                writeln!(self.output, "Failed to save portfolio: {}", e)?;
            }
        }
        Ok(Step::Continue)
    }

    fn load(&mut self) -> io::Result<Step> {
        let path = self.service.store().path().display().to_string();
        match self.service.load() {
            Ok(LoadSource::File) => writeln!(self.output, "Portfolio loaded from {}.", path)?,
            Ok(LoadSource::Missing) => writeln!(
                self.output,
                "No {} file found. Starting with an empty portfolio.",
                path
            )?,
            Err(e) => {
                error!("Failed to load portfolio from {}: {}", path, e);
                writeln!(self.output, "Failed to load portfolio: {}", e)?;
            }
        }
        Ok(Step::Continue)
    }
}

fn label_width<'a>(labels: impl Iterator<Item = &'a str>, header: &str) -> usize {
    labels
        .map(|l| l.chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0)
}

/// Plain-text table of the persisted columns.
pub fn render_table(table: &PortfolioTable) -> String {
    let width = label_width(table.records().iter().map(|r| r.asset.as_str()), COLUMNS[0]);
    let mut out = format!(
        "{:<width$}  {:>14}  {:>10}  {:>13}  {:<19}\n",
        COLUMNS[0], COLUMNS[1], COLUMNS[2], COLUMNS[3], COLUMNS[4]
    );
    for r in table.records() {
        out.push_str(&format!(
            "{:<width$}  {:>14}  {:>10}  {:>13}  {:<19}\n",
            r.asset,
            r.purchase_price,
            r.quantity,
            r.current_price,
            r.last_updated_display()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::PortfolioStore;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn run_script(service: PortfolioService, script: &str) -> (PortfolioService, String) {
        let mut session = ConsoleSession::new(service, Cursor::new(script.to_string()), Vec::new());
        session.run().unwrap();
        let (service, output) = session.into_parts();
        (service, String::from_utf8(output).unwrap())
    }

    fn empty_service(dir: &tempfile::TempDir) -> PortfolioService {
        PortfolioService::new(PortfolioStore::new(dir.path().join("portfolio.csv")))
    }

    #[test]
    fn test_add_then_metrics() {
        let dir = tempdir().unwrap();
        let (service, out) = run_script(empty_service(&dir), "1\nACME\n10\n5\n12\n4\n8\n");

        assert_eq!(service.table().len(), 1);
        assert!(out.contains("Asset ACME added successfully!"));
        assert!(out.contains("Total Portfolio Value: $60.00"));
        assert!(out.contains("Overall Portfolio Percentage Change: 20.00%"));
        assert!(out.trim_end().ends_with("Goodbye!"));
    }

    #[test]
    fn test_invalid_option_reprompts() {
        let dir = tempdir().unwrap();
        let (_, out) = run_script(empty_service(&dir), "9\nabc\n8\n");

        assert_eq!(out.matches("Invalid option. Please choose a valid option (1-8).").count(), 2);
        assert!(out.contains("Goodbye!"));
    }

    #[test]
    fn test_invalid_number_returns_to_menu() {
        let dir = tempdir().unwrap();
        let (service, out) = run_script(empty_service(&dir), "1\nACME\nten\n2\n8\n");

        assert!(service.table().is_empty());
        assert!(out.contains("Invalid number 'ten'. Returning to menu."));
        assert!(out.contains("Your portfolio is empty."));
    }

    #[test]
    fn test_update_unknown_asset() {
        let dir = tempdir().unwrap();
        let (_, out) = run_script(empty_service(&dir), "3\nGHOST\n8\n");
        assert!(out.contains("Asset GHOST not found in your portfolio."));
    }

    #[test]
    fn test_update_known_asset() {
        let dir = tempdir().unwrap();
        let mut service = empty_service(&dir);
        service.add_asset(AssetRecord::new("ACME", 10.0, 5.0, 12.0));

        let (service, out) = run_script(service, "3\nACME\n15\n8\n");

        assert!(out.contains("Price for ACME updated to 15!"));
        assert_eq!(service.table().records()[0].current_price, 15.0);
    }

    #[test]
    fn test_metrics_on_empty_portfolio() {
        let dir = tempdir().unwrap();
        let (_, out) = run_script(empty_service(&dir), "4\n5\n8\n");
        assert!(out.contains("Your portfolio is empty. Add assets to calculate metrics."));
        assert!(out.contains("Your portfolio is empty. Add assets to visualize performance."));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let (_, out) = run_script(empty_service(&dir), "1\nACME\n10\n5\n12\n6\n8\n");
        assert!(out.contains("Portfolio saved to"));

        let (service, out) = run_script(empty_service(&dir), "7\n2\n8\n");
        assert!(out.contains("Portfolio loaded from"));
        assert!(out.contains("Current Portfolio:"));
        assert_eq!(service.table().records()[0].asset, "ACME");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let (_, out) = run_script(empty_service(&dir), "7\n8\n");
        assert!(out.contains("file found. Starting with an empty portfolio."));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let dir = tempdir().unwrap();
        let (_, out) = run_script(empty_service(&dir), "1\nACME\n");
        assert!(out.trim_end().ends_with("Goodbye!"));
    }

    #[test]
    fn test_visualize_prints_chart() {
        let dir = tempdir().unwrap();
        let mut service = empty_service(&dir);
        service.add_asset(AssetRecord::new("ACME", 10.0, 5.0, 12.0));

        let (_, out) = run_script(service, "5\n8\n");

        assert!(out.contains("Portfolio Performance (%)"));
        assert!(out.contains("20.00%"));
    }

    #[test]
    fn test_visualize_survives_overflowing_performance() {
        let dir = tempdir().unwrap();
        let script = "1\nACME\n10\n5\n12\n1\nMOON\n1e-320\n1\n1e300\n5\n8\n";

        let (service, out) = run_script(empty_service(&dir), script);

        assert_eq!(service.table().len(), 2);
        assert!(out.contains("Portfolio Performance (%)"));
        assert!(out.contains("inf%"));
        assert!(out.trim_end().ends_with("Goodbye!"));
    }

    #[test]
    fn test_render_table_lists_rows_in_order() {
        let table = PortfolioTable::from_records(vec![
            AssetRecord::new("ACME", 10.0, 5.0, 12.0),
            AssetRecord::new("BETA", 20.0, 5.0, 18.0),
        ]);
        let text = render_table(&table);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("Asset"));
        assert!(lines[1].starts_with("ACME"));
        assert!(lines[2].starts_with("BETA"));
    }
}
