//! Fixed palettes and piecewise-linear colour ramps.

pub const BACKGROUND: &str = "#282828";
pub const TEXT: &str = "white";
pub const EMPTY_CELL: &str = "#333";
pub const AXIS: &str = "#bbb";

pub const STEELBLUE: &str = "steelblue";
pub const ORANGE: &str = "orange";

/// Cycled across platforms in the players chart.
pub const PLATFORM_PALETTE: &[&str] = &["#8B0000", "#1E90FF", "#FF8C00", "#4B0082", "#006400", "#FFD700"];

const BLUES: &[[u8; 3]] = &[
	[0xf7, 0xfb, 0xff],
	[0xde, 0xeb, 0xf7],
	[0xc6, 0xdb, 0xef],
	[0x9e, 0xca, 0xe1],
	[0x6b, 0xae, 0xd6],
	[0x42, 0x92, 0xc6],
	[0x21, 0x71, 0xb5],
	[0x08, 0x51, 0x9c],
	[0x08, 0x30, 0x6b],
];

const VIRIDIS: &[[u8; 3]] = &[
	[0x44, 0x01, 0x54],
	[0x48, 0x28, 0x78],
	[0x3e, 0x49, 0x89],
	[0x31, 0x68, 0x8e],
	[0x26, 0x82, 0x8e],
	[0x1f, 0x9e, 0x89],
	[0x35, 0xb7, 0x79],
	[0x6e, 0xce, 0x58],
	[0xb5, 0xde, 0x2b],
	[0xfd, 0xe7, 0x25],
];

/// A sequential colour ramp sampled on `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ramp {
	Blues,
	Viridis,
}

impl Ramp {
	fn stops(self) -> &'static [[u8; 3]] {
		match self {
			Ramp::Blues => BLUES,
			Ramp::Viridis => VIRIDIS,
		}
	}

	/// CSS colour at `t`; `t` outside `[0, 1]` is pinned to the nearest end.
	pub fn at(self, t: f64) -> String {
		let stops = self.stops();
		let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
		let pos = t * (stops.len() - 1) as f64;
		let i = (pos.floor() as usize).min(stops.len() - 2);
		let f = pos - i as f64;
		let (a, b) = (stops[i], stops[i + 1]);
		let mix = |k: usize| (a[k] as f64 + (b[k] as f64 - a[k] as f64) * f).round() as u8;
		format!("rgb({}, {}, {})", mix(0), mix(1), mix(2))
	}
}
