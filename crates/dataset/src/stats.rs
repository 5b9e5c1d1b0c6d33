//! Small statistics helpers for the report aggregations.

/// Pearson correlation coefficient between two equal-length series.
///
/// Returns `f64::NAN` when either series has zero variance or the series
/// are empty, matching how dataframe libraries report undefined
/// correlations.
#[must_use]
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    if n == 0 {
        return f64::NAN;
    }

    let nf = n as f64;
    let mean_x = xs[..n].iter().sum::<f64>() / nf;
    let mean_y = ys[..n].iter().sum::<f64>() / nf;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for i in 0..n {
        let dx = xs[i] - mean_x;
        let dy = ys[i] - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return f64::NAN;
    }

    cov / (var_x.sqrt() * var_y.sqrt())
}

/// Pearson correlation matrix over a set of named columns.
///
/// The result is square with one row/column per input column, diagonal 1.0.
#[must_use]
pub fn correlation_matrix(columns: &[(&str, Vec<f64>)]) -> Vec<Vec<f64>> {
    let k = columns.len();
    let mut matrix = vec![vec![0.0; k]; k];

    for i in 0..k {
        for j in 0..k {
            matrix[i][j] = if i == j {
                1.0
            } else {
                pearson(&columns[i].1, &columns[j].1)
            };
        }
    }

    matrix
}
