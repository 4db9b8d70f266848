//! Tile grid.
//!
//! [`TileGrid`] owns every placed [`TileInstance`] in a generational arena.
//! Instances refer to their tile type by [`TileTypeKey`](fryline_types::catalog::TileTypeKey)
//! only; the catalog itself is borrowed per call.
//!
//! An [`InstanceId`] stays valid until the instance is removed. Removing bumps
//! the slot generation, so a stale id never reaches the instance that later
//! reuses the slot.
//!
//! # Examples
//!
//! ```
//! use fryline_anim::grid::TileGrid;
//! use fryline_types::prelude::*;
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Catalog::from_definitions([5], [TileTypeDefinition::new("Floor", 5)], &BuildConfig::default())?;
//!
//! let mut grid = TileGrid::new();
//! let floor = grid.place(&catalog, "Floor", GridPos::new(0, 0), false)?;
//!
//! let report = grid.tick(&catalog, Duration::from_millis(16), [(floor, true)]);
//! assert_eq!(report.advanced, 1);
//! assert_eq!(grid.current_frame(floor), Some(5));
//! # Ok(())
//! # }
//! ```

use std::{collections::BTreeMap, time::Duration};

use log::trace;

use fryline_types::{anim::FrameId, catalog::Catalog, parity::GridPos};

use crate::{error::GridError, instance::TileInstance, resolver::Resolver};

/// Handle of an instance inside a [`TileGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstanceId {
	index: u32,
	generation: u32,
}

impl InstanceId {
	/// Arena slot of the instance.
	pub fn index(self) -> usize {
		self.index as usize
	}

	/// Generation of the slot when the instance was placed.
	pub fn generation(self) -> u32 {
		self.generation
	}
}

impl std::fmt::Display for InstanceId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{}v{}", self.index, self.generation)
	}
}

/// Summary of one [`TileGrid::tick`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
	/// Instances advanced
	pub advanced: usize,
	/// Instances that received a signal
	pub signals_applied: usize,
	/// Signals addressed to ids that are not on the grid
	pub unknown_signals: usize,
}

impl std::fmt::Display for TickReport {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"{} advanced, {} signalled, {} unknown signals",
			self.advanced, self.signals_applied, self.unknown_signals
		)
	}
}

#[derive(Debug, Clone)]
struct Slot {
	generation: u32,
	instance: Option<TileInstance>,
}

/// Arena of placed tile instances.
#[derive(Debug, Clone, Default)]
pub struct TileGrid {
	slots: Vec<Slot>,
	free: Vec<u32>,
	len: usize,
}

impl TileGrid {
	/// Creates an empty grid.
	pub fn new() -> Self {
		Self::default()
	}

	/// Places a tile of type `type_id` at `position`.
	///
	/// Several instances may share a position; the grid does not interpret
	/// coordinates beyond parity classification.
	///
	/// # Errors
	///
	/// Returns [`GridError::UnknownTileType`] if `type_id` is not in `catalog`.
	pub fn place(
		&mut self,
		catalog: &Catalog,
		type_id: &str,
		position: GridPos,
		initial_state: bool,
	) -> Result<InstanceId, GridError> {
		let instance = catalog
			.key(type_id)
			.and_then(|key| Resolver::new(catalog).place(key, position, initial_state))
			.ok_or_else(|| GridError::UnknownTileType(type_id.into()))?;

		let id = self.insert(instance);
		trace!("Placed {type_id} as {id}");
		Ok(id)
	}

	fn insert(&mut self, instance: TileInstance) -> InstanceId {
		self.len += 1;

		if let Some(index) = self.free.pop() {
			let slot = &mut self.slots[index as usize];
			slot.instance = Some(instance);
			return InstanceId {
				index,
				generation: slot.generation,
			};
		}

		let index = self.slots.len() as u32;
		self.slots.push(Slot {
			generation: 0,
			instance: Some(instance),
		});
		InstanceId {
			index,
			generation: 0,
		}
	}

	/// Removes an instance, returning its final state.
	///
	/// The slot is reused by a later placement with a new generation.
	pub fn remove(&mut self, id: InstanceId) -> Option<TileInstance> {
		let slot = self.slots.get_mut(id.index()).filter(|slot| slot.generation == id.generation)?;
		let instance = slot.instance.take()?;

		self.len -= 1;

		// a slot whose generation is exhausted is retired, never reused
		if let Some(next) = slot.generation.checked_add(1) {
			slot.generation = next;
			self.free.push(id.index);
		} else {
			trace!("Retiring grid slot {}", id.index);
		}
		Some(instance)
	}

	/// Returns the instance behind `id`.
	pub fn get(&self, id: InstanceId) -> Option<&TileInstance> {
		self.slots
			.get(id.index())
			.filter(|slot| slot.generation == id.generation)
			.and_then(|slot| slot.instance.as_ref())
	}

	/// Returns `true` if `id` refers to a live instance.
	pub fn contains(&self, id: InstanceId) -> bool {
		self.get(id).is_some()
	}

	/// Frame to render for `id`.
	pub fn current_frame(&self, id: InstanceId) -> Option<FrameId> {
		self.get(id).map(TileInstance::current_frame)
	}

	/// Number of live instances.
	pub fn len(&self) -> usize {
		self.len
	}

	/// Returns `true` if no instance is placed.
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Iterates over live instances in slot order.
	pub fn iter(&self) -> impl Iterator<Item = (InstanceId, &TileInstance)> + '_ {
		self.slots.iter().enumerate().filter_map(|(index, slot)| {
			slot.instance.as_ref().map(|instance| {
				(
					InstanceId {
						index: index as u32,
						generation: slot.generation,
					},
					instance,
				)
			})
		})
	}

	/// Render output: id, position and frame of every live instance.
	pub fn frames(&self) -> impl Iterator<Item = (InstanceId, GridPos, FrameId)> + '_ {
		self.iter().map(|(id, instance)| (id, instance.position(), instance.current_frame()))
	}

	/// Advances every live instance by `dt`.
	///
	/// Each signal is delivered to the instance it names before that instance
	/// advances. When one id is signalled more than once, the last signal wins.
	/// Signals for removed or unknown ids are dropped and counted.
	pub fn tick(
		&mut self,
		catalog: &Catalog,
		dt: Duration,
		signals: impl IntoIterator<Item = (InstanceId, bool)>,
	) -> TickReport {
		let mut report = TickReport::default();
		let mut routed = BTreeMap::new();

		for (id, on) in signals {
			if self.contains(id) {
				routed.insert(id, on);
			} else {
				trace!("Ignoring signal {on} for unknown instance {id}");
				report.unknown_signals += 1;
			}
		}
		report.signals_applied = routed.len();

		let resolver = Resolver::new(catalog);
		for (index, slot) in self.slots.iter_mut().enumerate() {
			let Some(instance) = slot.instance.as_mut() else {
				continue;
			};
			let id = InstanceId {
				index: index as u32,
				generation: slot.generation,
			};
			resolver.advance(instance, dt, routed.get(&id).copied());
			report.advanced += 1;
		}

		report
	}
}
