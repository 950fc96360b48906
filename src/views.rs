//! Server-rendered HTML for the web front-end.

use crate::models::{AssetMetrics, MetricsResponse, PortfolioSummary, PortfolioTable};

pub const EMPTY_PORTFOLIO_MESSAGE: &str = "Portfolio is empty. Please add assets first.";

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Two-decimal percentage, or `n/a` when undefined.
pub fn format_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}%", v),
        None => "n/a".to_string(),
    }
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n\
         <nav><a href=\"/\">Portfolio</a> | <a href=\"/add_asset\">Add Asset</a> | <a href=\"/metrics\">Metrics</a></nav>\n\
         <h1>{title}</h1>\n{body}</body>\n</html>\n",
        title = escape_html(title),
        body = body
    )
}

pub fn render_index(table: &PortfolioTable) -> String {
    if table.is_empty() {
        return page("Investment Portfolio", "<p>Your portfolio is empty.</p>\n");
    }

    let mut body = String::from(
        "<table>\n<tr><th>Asset</th><th>Purchase Price</th><th>Quantity</th><th>Current Price</th><th>Last Updated</th></tr>\n",
    );
    for record in table.records() {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape_html(&record.asset),
            record.purchase_price,
            record.quantity,
            record.current_price,
            record.last_updated_display()
        ));
    }
    body.push_str("</table>\n");

    page("Investment Portfolio", &body)
}

pub fn render_add_form() -> String {
    let body = "<form method=\"post\" action=\"/add_asset\">\n\
                <label>Asset Name <input type=\"text\" name=\"asset_name\" required></label><br>\n\
                <label>Purchase Price <input type=\"number\" step=\"any\" name=\"purchase_price\" required></label><br>\n\
                <label>Quantity <input type=\"number\" step=\"any\" name=\"quantity\" required></label><br>\n\
                <label>Current Price <input type=\"number\" step=\"any\" name=\"current_price\" required></label><br>\n\
                <button type=\"submit\">Add Asset</button>\n\
                </form>\n";
    page("Add Asset", body)
}

fn metrics_row(m: &AssetMetrics) -> String {
    format!(
        "<tr><td>{}</td><td>{:.2}</td><td>{}</td></tr>\n",
        escape_html(&m.asset),
        m.current_value,
        format_percent(m.performance_percent)
    )
}

fn summary_block(summary: &PortfolioSummary) -> String {
    format!(
        "<p>Total Portfolio Value: ${:.2}</p>\n<p>Overall Portfolio Percentage Change: {}</p>\n",
        summary.total_value,
        format_percent(summary.overall_change_percent)
    )
}

/// Renders the metrics page. Callers must check for an empty portfolio first.
pub fn render_metrics(metrics: &MetricsResponse, summary: &PortfolioSummary) -> String {
    let mut body = String::from(
        "<table>\n<tr><th>Asset</th><th>Current Value</th><th>Performance (%)</th></tr>\n",
    );
    for m in &metrics.assets {
        body.push_str(&metrics_row(m));
    }
    body.push_str("</table>\n");
    body.push_str(&summary_block(summary));

    page("Portfolio Metrics", &body)
}
