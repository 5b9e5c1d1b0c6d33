use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use crate::error::DatasetError;
use crate::record::CustomerRecord;
use crate::stats;

/// The non-identifier numeric columns, in file order.
///
/// `Names`, `Onboard_date`, `Location` and `Company` are identifiers and
/// excluded from correlation analysis.
pub const NUMERIC_COLUMNS: [&str; 6] = [
    "Age",
    "Total_Purchase",
    "Account_Manager",
    "Years",
    "Num_Sites",
    "Churn",
];

/// Correlation matrix over the numeric columns.
#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    /// Column labels, one per row/column of `values`.
    pub labels: Vec<&'static str>,
    /// Square matrix of Pearson coefficients.
    pub values: Vec<Vec<f64>>,
}

/// Immutable in-memory copy of the customer churn dataset.
///
/// Loaded once at startup and only read afterwards.
#[derive(Debug, Clone)]
pub struct CustomerDataset {
    records: Vec<CustomerRecord>,
}

impl CustomerDataset {
    /// Creates a dataset from already-parsed records.
    #[must_use]
    pub fn new(records: Vec<CustomerRecord>) -> Self {
        Self { records }
    }

    /// Loads the dataset from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Io`] if the file cannot be read,
    /// [`DatasetError::Csv`] if a row does not match the expected schema,
    /// and [`DatasetError::Empty`] if the file holds no data rows.
    pub fn from_csv_path(path: &Path) -> Result<Self, DatasetError> {
        let file = File::open(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut reader = csv::Reader::from_reader(file);
        let mut records = Vec::new();
        for row in reader.deserialize::<CustomerRecord>() {
            records.push(row?);
        }

        if records.is_empty() {
            return Err(DatasetError::Empty(path.to_path_buf()));
        }

        Ok(Self { records })
    }

    /// Number of rows in the dataset.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All rows, in file order.
    #[must_use]
    pub fn records(&self) -> &[CustomerRecord] {
        &self.records
    }

    /// The first `n` rows, for the table preview.
    #[must_use]
    pub fn head(&self, n: usize) -> &[CustomerRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// Counts of the `Churn` column, ordered by descending count.
    ///
    /// Ties break by ascending churn value, matching the ordering the
    /// source dashboard displays.
    #[must_use]
    pub fn churn_value_counts(&self) -> Vec<(i64, usize)> {
        let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.churn as i64).or_insert(0) += 1;
        }

        let mut counts: Vec<(i64, usize)> = counts.into_iter().collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        counts
    }

    /// The numeric columns as named series, in [`NUMERIC_COLUMNS`] order.
    #[must_use]
    pub fn numeric_columns(&self) -> Vec<(&'static str, Vec<f64>)> {
        NUMERIC_COLUMNS
            .iter()
            .map(|&name| (name, self.column(name)))
            .collect()
    }

    /// Pearson correlation matrix over the numeric columns.
    #[must_use]
    pub fn correlation_matrix(&self) -> CorrelationMatrix {
        let columns = self.numeric_columns();
        let values = stats::correlation_matrix(&columns);
        CorrelationMatrix {
            labels: NUMERIC_COLUMNS.to_vec(),
            values,
        }
    }

    /// A single numeric column by name.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not one of [`NUMERIC_COLUMNS`].
    #[must_use]
    pub fn column(&self, name: &str) -> Vec<f64> {
        self.records
            .iter()
            .map(|r| match name {
                "Age" => r.age,
                "Total_Purchase" => r.total_purchase,
                "Account_Manager" => r.account_manager,
                "Years" => r.years,
                "Num_Sites" => r.num_sites,
                "Churn" => r.churn,
                other => panic!("unknown numeric column: {other}"),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn record(churn: f64) -> CustomerRecord {
        CustomerRecord {
            name: "Test Customer".to_string(),
            age: 40.0,
            total_purchase: 5000.0,
            account_manager: 0.0,
            years: 5.0,
            num_sites: 8.0,
            onboard_date: "2013-08-30 07:00:40".to_string(),
            location: "10265 Elizabeth Mission".to_string(),
            company: "Harvey LLC".to_string(),
            churn,
        }
    }

    #[test]
    fn test_churn_value_counts() {
        let dataset =
            CustomerDataset::new([0.0, 0.0, 1.0, 0.0, 1.0].map(record).to_vec());
        assert_eq!(dataset.churn_value_counts(), vec![(0, 3), (1, 2)]);
    }

    #[test]
    fn test_head_is_clamped() {
        let dataset = CustomerDataset::new(vec![record(0.0), record(1.0)]);
        assert_eq!(dataset.head(5).len(), 2);
        assert_eq!(dataset.head(1).len(), 1);
    }

    #[test]
    fn test_numeric_columns_order() {
        let dataset = CustomerDataset::new(vec![record(1.0)]);
        let columns = dataset.numeric_columns();
        let names: Vec<&str> = columns.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, NUMERIC_COLUMNS.to_vec());
        assert_eq!(columns[0].1, vec![40.0]);
        assert_eq!(columns[5].1, vec![1.0]);
    }

    #[test]
    fn test_correlation_matrix_diagonal() {
        let mut records = Vec::new();
        for i in 0..5 {
            let mut r = record(f64::from(i % 2));
            r.age = f64::from(20 + i);
            r.total_purchase = f64::from(1000 * (i + 1));
            r.years = f64::from(i) + 1.0;
            r.num_sites = f64::from(3 + i);
            r.account_manager = f64::from((i + 1) % 2);
            records.push(r);
        }
        let dataset = CustomerDataset::new(records);
        let matrix = dataset.correlation_matrix();

        assert_eq!(matrix.labels.len(), 6);
        for i in 0..6 {
            assert!((matrix.values[i][i] - 1.0).abs() < 1e-12);
        }
        // Age and Years both increase linearly with the row index
        assert!((matrix.values[0][3] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_csv_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "Names,Age,Total_Purchase,Account_Manager,Years,Num_Sites,Onboard_date,Location,Company,Churn"
        )
        .unwrap();
        writeln!(
            file,
            "Cameron Williams,42.0,11066.8,0,7.22,8.0,2013-08-30 07:00:40,\"10265 Elizabeth Mission\",Harvey LLC,1"
        )
        .unwrap();
        writeln!(
            file,
            "Kevin Mueller,41.0,11916.22,0,6.5,11.0,2013-08-13 00:38:46,\"6157 Frank Gardens\",Wilson PLC,0"
        )
        .unwrap();
        file.flush().unwrap();

        let dataset = CustomerDataset::from_csv_path(file.path()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[0].name, "Cameron Williams");
        assert!((dataset.records()[0].total_purchase - 11066.8).abs() < 1e-9);
        assert_eq!(dataset.records()[1].churn, 0.0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = CustomerDataset::from_csv_path(Path::new("/nonexistent/churn.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[test]
    fn test_malformed_row_is_csv_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "Names,Age,Total_Purchase,Account_Manager,Years,Num_Sites,Onboard_date,Location,Company,Churn"
        )
        .unwrap();
        writeln!(file, "Broken Row,not-a-number,1,1,1,1,x,y,z,0").unwrap();
        file.flush().unwrap();

        let err = CustomerDataset::from_csv_path(file.path()).unwrap_err();
        assert!(matches!(err, DatasetError::Csv(_)));
    }

    #[test]
    fn test_empty_file_is_empty_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "Names,Age,Total_Purchase,Account_Manager,Years,Num_Sites,Onboard_date,Location,Company,Churn"
        )
        .unwrap();
        file.flush().unwrap();

        let err = CustomerDataset::from_csv_path(file.path()).unwrap_err();
        assert!(matches!(err, DatasetError::Empty(_)));
    }
}
