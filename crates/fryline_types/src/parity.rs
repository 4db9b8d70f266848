//! Positional parity classification.
//!
//! Adjacent tiles of the same type can be visually desynchronised by giving
//! them different parity classes. The class is a pure function of the grid
//! position, computed once when a tile is placed.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnimationSpecError;

/// Grid coordinate of a placed tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct GridPos {
	/// Column
	pub x: i32,
	/// Row
	pub y: i32,
}

impl GridPos {
	/// Creates a grid coordinate.
	pub const fn new(x: i32, y: i32) -> Self {
		Self {
			x,
			y,
		}
	}
}

impl std::fmt::Display for GridPos {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "({}, {})", self.x, self.y)
	}
}

/// Parity class of a tile instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ParityClass {
	/// Position sums to an odd number
	Odd,
	/// Position sums to an even number
	Even,
	/// Tile type ignores parity
	#[default]
	None,
}

impl ParityClass {
	/// All classes, in storage order.
	pub const ALL: [ParityClass; 3] = [Self::Odd, Self::Even, Self::None];

	/// Dense index used for per-parity storage.
	pub const fn index(self) -> usize {
		match self {
			Self::Odd => 0,
			Self::Even => 1,
			Self::None => 2,
		}
	}

	/// Returns the payload key of this class.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Odd => "odd",
			Self::Even => "even",
			Self::None => "none",
		}
	}
}

impl FromStr for ParityClass {
	type Err = AnimationSpecError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_ascii_lowercase().as_str() {
			"odd" => Ok(Self::Odd),
			"even" => Ok(Self::Even),
			"none" => Ok(Self::None),
			_ => Err(AnimationSpecError::UnknownParity {
				name: s.to_string(),
			}),
		}
	}
}

impl std::fmt::Display for ParityClass {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Rule mapping a grid position to [`ParityClass::Odd`] or [`ParityClass::Even`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParityRule {
	/// `(x + y) mod 2`
	#[default]
	Checkerboard,
	/// `y mod 2`, alternating rows
	Rows,
	/// `x mod 2`, alternating columns
	Columns,
}

/// Classifies `position` under `rule`.
///
/// Negative coordinates use the Euclidean remainder, so the checkerboard is
/// continuous across the origin.
///
/// # Examples
///
/// ```
/// use fryline_types::parity::{GridPos, ParityClass, ParityRule, classify};
///
/// assert_eq!(classify(GridPos::new(0, 0), ParityRule::Checkerboard), ParityClass::Even);
/// assert_eq!(classify(GridPos::new(1, 0), ParityRule::Checkerboard), ParityClass::Odd);
/// assert_eq!(classify(GridPos::new(-1, 0), ParityRule::Checkerboard), ParityClass::Odd);
/// ```
pub fn classify(position: GridPos, rule: ParityRule) -> ParityClass {
	let value = match rule {
		ParityRule::Checkerboard => i64::from(position.x) + i64::from(position.y),
		ParityRule::Rows => i64::from(position.y),
		ParityRule::Columns => i64::from(position.x),
	};

	if value.rem_euclid(2) == 1 {
		ParityClass::Odd
	} else {
		ParityClass::Even
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_checkerboard_alternates_between_neighbours() {
		let origin = classify(GridPos::new(3, 4), ParityRule::Checkerboard);
		for neighbour in [GridPos::new(2, 4), GridPos::new(4, 4), GridPos::new(3, 3), GridPos::new(3, 5)] {
			assert_ne!(classify(neighbour, ParityRule::Checkerboard), origin);
		}
	}

	#[test]
	fn test_rows_and_columns() {
		assert_eq!(classify(GridPos::new(7, 2), ParityRule::Rows), ParityClass::Even);
		assert_eq!(classify(GridPos::new(7, 2), ParityRule::Columns), ParityClass::Odd);
		assert_eq!(classify(GridPos::new(0, -3), ParityRule::Rows), ParityClass::Odd);
	}

	#[test]
	fn test_extreme_coordinates_do_not_overflow() {
		let pos = GridPos::new(i32::MAX, i32::MAX);
		assert_eq!(classify(pos, ParityRule::Checkerboard), ParityClass::Even);
	}

	#[test]
	fn test_parse_parity_keys() {
		assert_eq!("Odd".parse::<ParityClass>().unwrap(), ParityClass::Odd);
		assert_eq!("even".parse::<ParityClass>().unwrap(), ParityClass::Even);
		assert!("diagonal".parse::<ParityClass>().is_err());
	}
}
