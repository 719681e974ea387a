//! Band, linear and sequential scales plus the percentile helpers behind the
//! heatmap's clipped colour domain.

use super::color::Ramp;

/// Evenly spaced bands over a continuous range, one per category.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
	domain: Vec<String>,
	start: f64,
	step: f64,
	bandwidth: f64,
}

impl BandScale {
	/// `padding` is used for both the inner and the outer padding, as a fraction of a step.
	pub fn new(domain: Vec<String>, range: (f64, f64), padding: f64) -> Self {
		let n = domain.len() as f64;
		let (r0, r1) = range;
		let step = (r1 - r0) / (n - padding + 2.0 * padding).max(1.0);
		let start = r0 + (r1 - r0 - step * (n - padding)) * 0.5;
		Self {
			domain,
			start,
			step,
			bandwidth: step * (1.0 - padding),
		}
	}

	pub fn position(&self, key: &str) -> Option<f64> {
		self.domain
			.iter()
			.position(|k| k == key)
			.map(|i| self.start + self.step * i as f64)
	}

	pub fn position_at(&self, index: usize) -> f64 {
		self.start + self.step * index as f64
	}

	pub fn bandwidth(&self) -> f64 {
		self.bandwidth
	}

	pub fn domain(&self) -> &[String] {
		&self.domain
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
	pub domain: (f64, f64),
	pub range: (f64, f64),
}

impl LinearScale {
	pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
		Self { domain, range }
	}

	/// Map a domain value onto the range. A zero-span domain maps everything to the range start.
	pub fn map(&self, v: f64) -> f64 {
		let (d0, d1) = self.domain;
		let (r0, r1) = self.range;
		if d1 == d0 {
			return r0;
		}
		r0 + (v - d0) / (d1 - d0) * (r1 - r0)
	}

	/// Extend the domain outwards to round tick boundaries.
	pub fn nice(mut self, count: usize) -> Self {
		let (d0, d1) = self.domain;
		if let Some(step) = tick_step(d0, d1, count) {
			self.domain = ((d0 / step).floor() * step, (d1 / step).ceil() * step);
		}
		self
	}

	/// Round tick values inside the domain, roughly `count` of them.
	pub fn ticks(&self, count: usize) -> Vec<f64> {
		let (d0, d1) = self.domain;
		let Some(step) = tick_step(d0, d1, count) else {
			return vec![d0];
		};
		let (first, last) = ((d0 / step).ceil() as i64, (d1 / step).floor() as i64);
		(first..=last).map(|i| i as f64 * step).collect()
	}
}

fn tick_step(d0: f64, d1: f64, count: usize) -> Option<f64> {
	let span = d1 - d0;
	if !(span > 0.0) || count == 0 {
		return None;
	}
	let raw = span / count as f64;
	let power = 10f64.powf(raw.log10().floor());
	let error = raw / power;
	let factor = if error >= 50f64.sqrt() {
		10.0
	} else if error >= 10f64.sqrt() {
		5.0
	} else if error >= 2f64.sqrt() {
		2.0
	} else {
		1.0
	};
	Some(factor * power)
}

/// Maps a numeric domain onto a colour ramp, optionally clamping out-of-domain values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SequentialScale {
	pub domain: (f64, f64),
	pub ramp: Ramp,
	pub clamp: bool,
}

impl SequentialScale {
	pub fn new(domain: (f64, f64), ramp: Ramp) -> Self {
		Self {
			domain,
			ramp,
			clamp: false,
		}
	}

	pub fn clamped(mut self) -> Self {
		self.clamp = true;
		self
	}

	/// Position of `v` along the ramp. A zero-span domain sits at the midpoint.
	pub fn normalize(&self, v: f64) -> f64 {
		let (d0, d1) = self.domain;
		if d1 == d0 {
			return 0.5;
		}
		let t = (v - d0) / (d1 - d0);
		if self.clamp { t.clamp(0.0, 1.0) } else { t }
	}

	pub fn color(&self, v: f64) -> String {
		self.ramp.at(self.normalize(v))
	}
}

/// Value at percentile `p` of an ascending slice, indexed by `floor(n * p)`.
pub fn percentile(sorted: &[f64], p: f64) -> Option<f64> {
	if sorted.is_empty() {
		return None;
	}
	let i = ((sorted.len() as f64) * p).floor() as usize;
	Some(sorted[i.min(sorted.len() - 1)])
}

/// The [5th, 95th] percentile bounds of a pool of values.
pub fn percentile_domain(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
	let mut sorted: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
	sorted.sort_by(f64::total_cmp);
	Some((percentile(&sorted, 0.05)?, percentile(&sorted, 0.95)?))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bands_cover_range_with_padding() {
		let scale = BandScale::new(vec!["a".into(), "b".into()], (0.0, 100.0), 0.1);
		let a = scale.position("a").unwrap();
		let b = scale.position("b").unwrap();
		assert!(a > 0.0);
		assert!((b + scale.bandwidth()) < 100.0);
		assert!((b - a - 100.0 / 2.1).abs() < 1e-9);
		assert!(scale.position("c").is_none());
	}

	#[test]
	fn linear_zero_span_maps_to_range_start() {
		let scale = LinearScale::new((0.0, 0.0), (300.0, 0.0));
		assert_eq!(scale.map(0.0), 300.0);
		assert_eq!(scale.ticks(5), vec![0.0]);
	}

	#[test]
	fn ticks_are_round() {
		let scale = LinearScale::new((0.0, 95.0), (0.0, 1.0));
		assert_eq!(scale.ticks(5), vec![0.0, 20.0, 40.0, 60.0, 80.0]);
		assert_eq!(scale.nice(5).domain, (0.0, 100.0));
	}

	#[test]
	fn percentile_index_is_floor_of_n_p() {
		let sorted: Vec<f64> = (0..20).map(f64::from).collect();
		assert_eq!(percentile(&sorted, 0.05), Some(1.0));
		assert_eq!(percentile(&sorted, 0.95), Some(19.0));
		assert_eq!(percentile(&[7.0], 0.95), Some(7.0));
		assert_eq!(percentile(&[], 0.5), None);
	}

	#[test]
	fn percentile_domain_covers_most_values() {
		let mut pool: Vec<f64> = (0..200).map(|i| ((i * 37) % 101) as f64).collect();
		pool.push(10_000.0);
		pool.push(-500.0);
		let (lo, hi) = percentile_domain(pool.iter().copied()).unwrap();
		let inside = pool.iter().filter(|v| lo <= **v && **v <= hi).count();
		assert!(inside as f64 >= 0.9 * pool.len() as f64);
		assert!(lo <= hi);
	}

	#[test]
	fn clamped_scale_stays_on_ramp() {
		let scale = SequentialScale::new((10.0, 20.0), Ramp::Blues).clamped();
		assert_eq!(scale.normalize(-100.0), 0.0);
		assert_eq!(scale.normalize(1e9), 1.0);
		assert_eq!(scale.color(1e9), Ramp::Blues.at(1.0));
		assert_eq!(scale.color(0.0), Ramp::Blues.at(0.0));

		let flat = SequentialScale::new((5.0, 5.0), Ramp::Blues).clamped();
		assert_eq!(flat.normalize(5.0), 0.5);
	}
}
