use crate::core::{SeriesSet, validate_series_key};
use crate::error::{ChartError, ChartResult};
use crate::render::validate_color;

use super::DensityChartConfig;

pub(super) fn validate_config(config: &DensityChartConfig) -> ChartResult<()> {
    if config.bins == 0 {
        return Err(ChartError::InvalidData("bins must be > 0".to_owned()));
    }
    if !config.smoothing.is_finite() || config.smoothing <= 0.0 {
        return Err(ChartError::InvalidData(
            "smoothing must be finite and > 0".to_owned(),
        ));
    }

    config.x_range.validate('x')?;
    config.y_range.validate('y')?;
    config.x_grid.validate('x')?;
    config.y_grid.validate('y')?;

    for entry in &config.legend {
        validate_series_key(&entry.key)?;
    }
    for (key, color) in &config.colors {
        validate_series_key(key)?;
        validate_color(color)?;
    }

    Ok(())
}

pub(super) fn validate_series(series: &SeriesSet) -> ChartResult<()> {
    for (name, samples) in series.iter() {
        validate_series_key(name)?;
        if samples.is_empty() {
            return Err(ChartError::InvalidData(format!(
                "series `{name}` has no samples"
            )));
        }
        if let Some(index) = samples.iter().position(|sample| !sample.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "series `{name}` sample #{index} is not finite"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_config, validate_series};
    use crate::api::DensityChartConfig;
    use crate::core::SeriesSet;

    #[test]
    fn defaults_are_valid() {
        assert!(validate_config(&DensityChartConfig::default()).is_ok());
    }

    #[test]
    fn zero_bins_and_zero_smoothing_are_rejected() {
        assert!(validate_config(&DensityChartConfig::new().with_bins(0)).is_err());
        assert!(validate_config(&DensityChartConfig::new().with_smoothing(0.0)).is_err());
        assert!(validate_config(&DensityChartConfig::new().with_smoothing(-1.0)).is_err());
    }

    #[test]
    fn color_keys_must_be_class_safe() {
        let config = DensityChartConfig::new().with_color("two words", "red");
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn empty_and_non_finite_series_are_rejected() {
        let empty = SeriesSet::new().with_series("a", Vec::new());
        assert!(validate_series(&empty).is_err());

        let nan = SeriesSet::new().with_series("a", vec![0.1, f64::NAN]);
        assert!(validate_series(&nan).is_err());
    }
}
