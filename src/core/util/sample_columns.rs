use crate::core::data::screen_point::ScreenPoint;
use crate::core::util::coordinate_mapper::CoordinateMapper;

/// One function evaluation for one pixel column.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sample {
    pub pixel_x: u32,
    pub world_x: f64,
    pub world_y: f64,
}

/// Function values sampled once per horizontal pixel column, left to right.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleSequence {
    samples: Vec<Sample>,
}

/// Evaluates `f` at the world x of every pixel column in `0..width`.
///
/// Sampling follows the pixel grid rather than a fixed world step so that a
/// function oscillating faster than the visible range still gets one value per column.
pub fn sample_columns<F>(mapper: &CoordinateMapper, width: u32, f: F) -> SampleSequence
where
    F: Fn(f64) -> f64,
{
    let samples = (0..width)
        .map(|pixel_x| {
            let world_x = mapper.x.to_world(pixel_x as f64);

            Sample {
                pixel_x,
                world_x,
                world_y: f(world_x),
            }
        })
        .collect();

    SampleSequence { samples }
}

impl SampleSequence {
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Connected screen-space polyline through every finite sample.
    #[must_use]
    pub fn polyline(&self, mapper: &CoordinateMapper) -> Vec<ScreenPoint> {
        self.polylines_where(mapper, |_| true).into_iter().flatten().collect()
    }

    /// Splits the polyline into runs of consecutive samples accepted by `keep`.
    ///
    /// A rejected or non-finite sample ends the current run, leaving a visible gap.
    #[must_use]
    pub fn polylines_where<K>(&self, mapper: &CoordinateMapper, keep: K) -> Vec<Vec<ScreenPoint>>
    where
        K: Fn(f64) -> bool,
    {
        let mut runs = Vec::new();
        let mut current: Vec<ScreenPoint> = Vec::new();

        for sample in &self.samples {
            if sample.world_y.is_finite() && keep(sample.world_y) {
                current.push(ScreenPoint {
                    x: sample.pixel_x as f64,
                    y: mapper.y.to_screen(sample.world_y),
                });
            } else if !current.is_empty() {
                runs.push(std::mem::take(&mut current));
            }
        }

        if !current.is_empty() {
            runs.push(current);
        }

        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::world_point::WorldPoint;
    use crate::core::data::world_rect::WorldRect;
    use approx::assert_abs_diff_eq;

    fn mapper(width: u32, height: u32) -> CoordinateMapper {
        let region = WorldRect::new(WorldPoint::new(-8.0, -4.0), WorldPoint::new(8.0, 4.0)).unwrap();

        CoordinateMapper::from_world_rect(region, width, height).unwrap()
    }

    #[test]
    fn test_one_sample_per_column() {
        let mapper = mapper(160, 80);

        let sequence = sample_columns(&mapper, 160, |x| x);

        assert_eq!(sequence.len(), 160);
        for (index, sample) in sequence.samples().iter().enumerate() {
            assert_eq!(sample.pixel_x, index as u32);
        }
    }

    #[test]
    fn test_samples_evaluate_at_inverse_mapped_x() {
        let mapper = mapper(160, 80);

        let sequence = sample_columns(&mapper, 160, |x| 2.0 * x);

        let first = sequence.samples()[0];
        let middle = sequence.samples()[80];
        assert_abs_diff_eq!(first.world_x, -8.0, epsilon = 1e-12);
        assert_abs_diff_eq!(middle.world_x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(first.world_y, -16.0, epsilon = 1e-12);
    }

    #[test]
    fn test_polyline_maps_values_to_rows() {
        let mapper = mapper(160, 80);
        let sequence = sample_columns(&mapper, 160, |_| 0.0);

        let line = sequence.polyline(&mapper);

        assert_eq!(line.len(), 160);
        assert!(line.iter().all(|p| (p.y - 40.0).abs() < 1e-9));
    }

    #[test]
    fn test_rejected_samples_split_the_polyline() {
        let mapper = mapper(160, 80);
        let sequence = sample_columns(&mapper, 160, |x| x);

        let runs = sequence.polylines_where(&mapper, |y| y.abs() > 1.0);

        assert_eq!(runs.len(), 2);
        assert!(runs[0].last().unwrap().x < runs[1].first().unwrap().x - 1.0);
    }

    #[test]
    fn test_non_finite_samples_are_dropped() {
        let mapper = mapper(160, 80);
        let sequence = sample_columns(&mapper, 160, |x| if x < 0.0 { f64::NAN } else { x });

        let runs = sequence.polylines_where(&mapper, |_| true);

        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].len(), 80);
    }
}
