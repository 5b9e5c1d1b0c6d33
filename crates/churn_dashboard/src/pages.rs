//! HTML pages for the dashboard.
//!
//! Self-contained markup with inline CSS; no external assets. The page
//! shell carries the mode navigation (Predictor | EDA), each page body
//! renders one mode.

/// Wraps page content in the shared shell with the mode nav.
pub fn layout(title: &str, active: &str, main: &str) -> String {
    let nav = nav_links(active);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <nav>
        <span class="brand">Churn Dashboard</span>
        {nav}
    </nav>
    <div class="container">
        {main}
    </div>
</body>
</html>"#,
        css = inline_css(),
    )
}

fn nav_links(active: &str) -> String {
    ["Predictor", "EDA"]
        .iter()
        .map(|mode| {
            let href = if *mode == "Predictor" { "/predictor" } else { "/eda" };
            let class = if *mode == active { "active" } else { "" };
            format!(r#"<a class="{class}" href="{href}">{mode}</a>"#)
        })
        .collect()
}

/// The predictor mode: five input controls, one submit, and optionally
/// the verdict from the last submission.
pub fn predictor_page(verdict: Option<&str>) -> String {
    let verdict = verdict.unwrap_or("");
    let main = format!(
        r#"<h1>Customer Churn Prediction</h1>
<form method="post" action="/predict">
    <label for="age">Age</label>
    <input type="number" id="age" name="age" min="22" max="65" step="1" value="22" required>

    <label for="total_purchase">Total Purchase</label>
    <input type="number" id="total_purchase" name="total_purchase" min="100.0" max="18026.01" step="0.01" value="100.0" required>

    <label for="account_manager">Has Account Manager</label>
    <select id="account_manager" name="account_manager">
        <option value="Yes">Yes</option>
        <option value="No">No</option>
    </select>

    <label for="years">Years</label>
    <input type="range" id="years" name="years" min="1.0" max="9.15" step="0.01" value="1.0"
        oninput="this.nextElementSibling.value = this.value">
    <output>1.0</output>

    <label for="num_sites">No. of Sites</label>
    <input type="range" id="num_sites" name="num_sites" min="3" max="14" step="1" value="3"
        oninput="this.nextElementSibling.value = this.value">
    <output>3</output>

    <button type="submit">Predict Churn</button>
</form>
{verdict}"#
    );
    layout("Customer Churn Prediction", "Predictor", &main)
}

/// The EDA mode: pure display of the rendered report.
pub fn eda_page(report_markup: &str) -> String {
    layout("Exploratory Data Analysis", "EDA", report_markup)
}

/// Verdict box for a churn-risk prediction.
pub fn churn_alert() -> String {
    r#"<div class="alert alert-error">This customer is likely to churn!</div>"#.to_string()
}

/// Verdict box for a retention prediction.
pub fn retain_alert() -> String {
    r#"<div class="alert alert-success">This customer is unlikely to churn.</div>"#.to_string()
}

/// Error box shown when the prediction call fails.
pub fn failure_alert(message: &str) -> String {
    format!(
        r#"<div class="alert alert-error">Prediction failed: {}</div>"#,
        escape_html(message)
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Inline CSS styles
fn inline_css() -> &'static str {
    r#"
* {
    box-sizing: border-box;
    margin: 0;
    padding: 0;
}

body {
    font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
    line-height: 1.6;
    color: #111827;
    background: #ffffff;
}

nav {
    display: flex;
    align-items: center;
    gap: 1rem;
    padding: 0.75rem 1.5rem;
    border-bottom: 1px solid #e5e7eb;
}

nav .brand {
    font-weight: 600;
    margin-right: 1rem;
}

nav a {
    color: #4b5563;
    text-decoration: none;
    padding: 0.25rem 0.5rem;
    border-radius: 4px;
}

nav a.active {
    color: #111827;
    background: #f3f4f6;
    font-weight: 600;
}

.container {
    max-width: 900px;
    margin: 0 auto;
    padding: 1.5rem;
}

h1, h2 {
    margin: 1rem 0 0.5rem;
}

h3 {
    margin: 0.75rem 0 0.25rem;
}

p {
    margin: 0.5rem 0;
    color: #374151;
}

form {
    display: flex;
    flex-direction: column;
    gap: 0.4rem;
    max-width: 420px;
    margin: 1rem 0;
}

label {
    font-weight: 600;
    margin-top: 0.5rem;
}

input, select {
    padding: 0.4rem;
    border: 1px solid #d1d5db;
    border-radius: 4px;
}

button {
    margin-top: 1rem;
    padding: 0.5rem;
    border: none;
    border-radius: 4px;
    background: #4c78a8;
    color: white;
    font-size: 1rem;
    cursor: pointer;
}

button:hover {
    background: #3b5f86;
}

.alert {
    max-width: 420px;
    margin: 1rem 0;
    padding: 0.75rem 1rem;
    border-radius: 4px;
}

.alert-error {
    background: #fee2e2;
    color: #991b1b;
    border: 1px solid #fecaca;
}

.alert-success {
    background: #d1fae5;
    color: #065f46;
    border: 1px solid #a7f3d0;
}

table {
    border-collapse: collapse;
    width: 100%;
    margin: 0.75rem 0;
    font-size: 0.85rem;
}

th, td {
    border: 1px solid #e5e7eb;
    padding: 0.35rem 0.5rem;
    text-align: left;
    white-space: nowrap;
}

th {
    background: #f9fafb;
}

svg {
    margin: 0.5rem 0;
    max-width: 100%;
}
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predictor_page_has_five_controls() {
        let page = predictor_page(None);
        for name in ["age", "total_purchase", "account_manager", "years", "num_sites"] {
            assert!(page.contains(&format!(r#"name="{name}""#)), "missing control: {name}");
        }
        assert!(page.contains("Predict Churn"));
    }

    #[test]
    fn test_form_carries_input_ranges() {
        let page = predictor_page(None);
        assert!(page.contains(r#"min="22" max="65""#));
        assert!(page.contains(r#"min="100.0" max="18026.01""#));
        assert!(page.contains(r#"min="1.0" max="9.15""#));
        assert!(page.contains(r#"min="3" max="14""#));
    }

    #[test]
    fn test_nav_marks_active_mode() {
        let page = eda_page("<p>report</p>");
        assert!(page.contains(r#"<a class="active" href="/eda">EDA</a>"#));
        assert!(page.contains(r#"<a class="" href="/predictor">Predictor</a>"#));
    }

    #[test]
    fn test_failure_alert_escapes_message() {
        let alert = failure_alert("<script>alert(1)</script>");
        assert!(!alert.contains("<script>"));
        assert!(alert.contains("&lt;script&gt;"));
    }
}
