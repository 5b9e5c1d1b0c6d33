//! Static EDA report over the customer churn dataset.
//!
//! Renders the analysis markup the dashboard serves on its EDA page: a
//! head-of-table preview, four SVG charts over pre-computed aggregates,
//! and the accompanying narrative. Everything is a pure function of the
//! dataset passed in; the page shell (nav, CSS) belongs to the server.

use std::fmt::Write;

use dataset::{CustomerDataset, CustomerRecord};

mod charts;

pub use charts::{
    bar_chart_svg, box_plot_svg, compute_box_stats, heatmap_svg, scatter_svg, BoxStats,
};

/// Error rates from the offline XGBoost evaluation run.
const TRAINING_ERROR: f64 = 0.093056;
const TESTING_ERROR: f64 = 0.122222;

/// Rows shown in the dataset preview.
const PREVIEW_ROWS: usize = 5;

/// Renders the full EDA report markup.
pub fn render_report(data: &CustomerDataset) -> String {
    format!(
        "{intro}{eda_header}{overview}{churn}{correlation}{scatter}{boxplot}{model}{conclusion}",
        intro = render_intro(),
        eda_header = "<h2>Exploratory Data Analysis (EDA)</h2>",
        overview = render_overview(data),
        churn = render_churn_distribution(data),
        correlation = render_correlation_heatmap(data),
        scatter = render_years_vs_sites(data),
        boxplot = render_purchase_by_churn(data),
        model = render_model_results(),
        conclusion = render_conclusion(),
    )
}

fn render_intro() -> String {
    r#"<h2>Introduction</h2>
<p>The marketing agency is facing high customer churn. Our goal is to create a machine learning model that can predict
whether a customer will churn based on historical data. This will help the company assign account managers to at-risk customers.
The dataset contains customer demographics and behavior data such as the number of ads purchased, account manager assignment, and number of years as a customer.</p>"#
        .to_string()
}

fn render_overview(data: &CustomerDataset) -> String {
    format!(
        "<h3>Dataset Overview</h3>\n<p>Here are the first few rows of the dataset:</p>\n{}",
        render_head_table(data.head(PREVIEW_ROWS))
    )
}

fn render_churn_distribution(data: &CustomerDataset) -> String {
    let counts = data.churn_value_counts();
    format!(
        "<h3>Churn Distribution</h3>\n{}\n<p>The dataset contains more customers who have not churned, creating an imbalance between the churned and non-churned classes.</p>",
        bar_chart_svg(&counts)
    )
}

fn render_correlation_heatmap(data: &CustomerDataset) -> String {
    let matrix = data.correlation_matrix();
    format!(
        "<h3>Correlation Heatmap</h3>\n{}\n<p>From the heatmap, we observe a moderate positive correlation between the number of sites (Num_Sites) and churn.
Other features like <code>Total_Purchase</code> and <code>Age</code> show weaker relationships with churn.</p>",
        heatmap_svg(&matrix.labels, &matrix.values)
    )
}

fn render_years_vs_sites(data: &CustomerDataset) -> String {
    let points: Vec<(f64, f64, i64)> = data
        .records()
        .iter()
        .map(|r| (r.years, r.num_sites, r.churn as i64))
        .collect();

    format!(
        "<h3>Years as Customer vs Number of Sites by Churn</h3>\n{}\n<p>Customers with more websites using the service are more likely to churn, especially those with a longer tenure.</p>",
        scatter_svg(
            &points,
            "Years as a Customer vs Number of Sites by Churn",
            "Years as a Customer",
            "Number of Sites",
        )
    )
}

fn render_purchase_by_churn(data: &CustomerDataset) -> String {
    let mut groups = Vec::new();
    for churn in [0i64, 1] {
        let values: Vec<f64> = data
            .records()
            .iter()
            .filter(|r| r.churn as i64 == churn)
            .map(|r| r.total_purchase)
            .collect();
        if let Some(stats) = compute_box_stats(&values) {
            groups.push((churn.to_string(), stats));
        }
    }

    format!(
        "<h3>Total Purchase by Churn</h3>\n{}\n<p>There is no significant difference in total purchases between churned and non-churned customers.</p>",
        box_plot_svg(
            &groups,
            "Total Purchase by Churn",
            "Churn (0 = No, 1 = Yes)",
            "Total Purchase",
        )
    )
}

fn render_model_results() -> String {
    format!(
        r#"<h2>XGBoost Model Results</h2>
<h3>Model Overview</h3>
<p>The XGBoost model was used to predict customer churn based on the features from the dataset. XGBoost was chosen due to its strong
performance on structured datasets and its ability to handle non-linear relationships.</p>
<h3>Model Performance</h3>
<p><strong>Training Accuracy</strong>: {train:.2}%</p>
<p><strong>Testing Accuracy</strong>: {test:.2}%</p>
<p>The model demonstrates a solid performance based on the accuracy metrics. With a training accuracy of
approximately 90.69%, and a testing accuracy of 87.78%, the model is able to generalize well from the training data
to unseen test data.</p>"#,
        train = (1.0 - TRAINING_ERROR) * 100.0,
        test = (1.0 - TESTING_ERROR) * 100.0,
    )
}

fn render_conclusion() -> String {
    r"<h2>Conclusion</h2>
<p>The analysis and model results show that customer churn can be effectively predicted using features like the number of websites and years as a customer.
By implementing this model, the company can proactively assign account managers to high-risk customers, potentially reducing churn and improving customer retention.</p>"
        .to_string()
}

/// The dataset preview as an HTML table.
fn render_head_table(records: &[CustomerRecord]) -> String {
    let mut rows = String::new();
    for r in records {
        let _ = write!(
            rows,
            "<tr><td>{name}</td><td>{age}</td><td>{purchase}</td><td>{manager}</td><td>{years}</td><td>{sites}</td><td>{onboard}</td><td>{location}</td><td>{company}</td><td>{churn}</td></tr>\n",
            name = escape_html(&r.name),
            age = fmt_num(r.age),
            purchase = fmt_num(r.total_purchase),
            manager = fmt_num(r.account_manager),
            years = fmt_num(r.years),
            sites = fmt_num(r.num_sites),
            onboard = escape_html(&r.onboard_date),
            location = escape_html(&r.location),
            company = escape_html(&r.company),
            churn = fmt_num(r.churn),
        );
    }

    format!(
        "<table>\n<thead><tr><th>Names</th><th>Age</th><th>Total_Purchase</th><th>Account_Manager</th><th>Years</th><th>Num_Sites</th><th>Onboard_date</th><th>Location</th><th>Company</th><th>Churn</th></tr></thead>\n<tbody>\n{rows}</tbody>\n</table>"
    )
}

/// Formats a numeric cell, dropping a spurious trailing `.0`.
fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{v:.0}")
    } else {
        format!("{v}")
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dataset() -> CustomerDataset {
        let mut records = Vec::new();
        for i in 0..10 {
            records.push(CustomerRecord {
                name: format!("Customer {i}"),
                age: f64::from(25 + i * 3),
                total_purchase: f64::from(2000 + 900 * i),
                account_manager: f64::from(i % 2),
                years: 1.0 + f64::from(i) * 0.8,
                num_sites: f64::from(3 + i),
                onboard_date: "2013-08-30 07:00:40".to_string(),
                location: "10265 Elizabeth Mission".to_string(),
                company: "Harvey & Sons".to_string(),
                churn: if i % 3 == 0 { 1.0 } else { 0.0 },
            });
        }
        CustomerDataset::new(records)
    }

    #[test]
    fn test_report_carries_all_sections() {
        let report = render_report(&sample_dataset());

        for heading in [
            "Introduction",
            "Exploratory Data Analysis (EDA)",
            "Dataset Overview",
            "Churn Distribution",
            "Correlation Heatmap",
            "Years as Customer vs Number of Sites by Churn",
            "Total Purchase by Churn",
            "XGBoost Model Results",
            "Model Performance",
            "Conclusion",
        ] {
            assert!(report.contains(heading), "missing section: {heading}");
        }
    }

    #[test]
    fn test_report_has_four_charts() {
        let report = render_report(&sample_dataset());
        assert_eq!(report.matches("<svg").count(), 4);
    }

    #[test]
    fn test_fixed_accuracies_are_static_text() {
        let report = render_report(&sample_dataset());
        assert!(report.contains("90.69%"));
        assert!(report.contains("87.78%"));
    }

    #[test]
    fn test_head_table_shows_five_rows() {
        let report = render_report(&sample_dataset());
        assert_eq!(report.matches("<tr><td>").count(), 5);
        assert!(report.contains("Customer 0"));
        assert!(report.contains("Harvey &amp; Sons"));
    }

    #[test]
    fn test_fmt_num_trims_integral_values() {
        assert_eq!(fmt_num(42.0), "42");
        assert_eq!(fmt_num(7.22), "7.22");
    }
}
