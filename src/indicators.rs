/// Technical indicators used by the scanner
pub struct TechnicalIndicators;

impl TechnicalIndicators {
    /// Exponentially weighted mean with `alpha = 2 / (span + 1)`, in its
    /// adjusted form: every output is the weighted average of all inputs seen
    /// so far, weights `(1 - alpha)^age` normalised by their sum. Early entries
    /// therefore behave like a plain average of the few points available.
    pub fn calculate_ewm(values: &[f64], span: usize) -> Vec<f64> {
        let alpha = 2.0 / (span as f64 + 1.0);
        let decay = 1.0 - alpha.min(1.0);

        let mut ewm = Vec::with_capacity(values.len());
        let mut numerator = 0.0;
        let mut denominator = 0.0;

        for &value in values {
            numerator = value + decay * numerator;
            denominator = 1.0 + decay * denominator;
            ewm.push(numerator / denominator);
        }
        ewm
    }

    /// Arithmetic mean, `None` for an empty slice.
    pub fn mean(values: &[f64]) -> Option<f64> {
        if values.is_empty() {
            return None;
        }
        Some(values.iter().sum::<f64>() / values.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Direct evaluation of the weighted-sum definition.
    fn ewm_closed_form(values: &[f64], span: usize) -> Vec<f64> {
        let alpha = 2.0 / (span as f64 + 1.0);
        (0..values.len())
            .map(|t| {
                let (mut num, mut den) = (0.0, 0.0);
                for i in 0..=t {
                    let w = (1.0 - alpha).powi(i as i32);
                    num += w * values[t - i];
                    den += w;
                }
                num / den
            })
            .collect()
    }

    #[test]
    fn ewm_matches_weighted_sum_definition() {
        let prices: Vec<f64> = (0..100)
            .map(|i| 100.0 + (i as f64 * 0.37).sin() * 5.0 + i as f64 * 0.1)
            .collect();

        let recursive = TechnicalIndicators::calculate_ewm(&prices, 99);
        let direct = ewm_closed_form(&prices, 99);

        assert_eq!(recursive.len(), prices.len());
        for (a, b) in recursive.iter().zip(direct.iter()) {
            assert!((a - b).abs() < 1e-9, "{} vs {}", a, b);
        }
    }

    #[test]
    fn ewm_first_values_are_seeded_from_available_points() {
        let ewm = TechnicalIndicators::calculate_ewm(&[10.0, 20.0], 3);
        // alpha = 0.5: second value = (20 + 0.5 * 10) / 1.5
        assert_eq!(ewm[0], 10.0);
        assert!((ewm[1] - 50.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn ewm_of_constant_series_is_constant() {
        let ewm = TechnicalIndicators::calculate_ewm(&[7.5; 30], 99);
        assert!(ewm.iter().all(|v| (v - 7.5).abs() < 1e-12));
    }

    #[test]
    fn ewm_of_empty_input_is_empty() {
        assert!(TechnicalIndicators::calculate_ewm(&[], 99).is_empty());
    }

    #[test]
    fn mean_handles_empty_and_values() {
        assert_eq!(TechnicalIndicators::mean(&[]), None);
        assert_eq!(TechnicalIndicators::mean(&[5.0, 7.0, 13.0, 16.0, 18.0]), Some(11.8));
    }
}
