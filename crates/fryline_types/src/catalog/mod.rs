//! Tile type catalog.
//!
//! The catalog is built once at load time from the loader's raw records and is
//! read-only afterwards. Building validates every animation payload:
//!
//! - A **malformed** payload degrades the affected tile type (or parity
//!   variant) to a static frame. The problem is logged and kept as a
//!   [`Diagnostic`]; the build continues.
//! - A **dangling** frame reference, i.e. a frame id that is not part of the
//!   tileset, aborts the whole build with
//!   [`CatalogError::DanglingFrameReference`]. No partial catalog is returned.
//!
//! Each tile type is stored once per [`ParityClass`] with its variant already
//! applied, so lookups never merge overrides at tick time.
//!
//! # Examples
//!
//! ```
//! use fryline_types::catalog::Catalog;
//! use fryline_types::parity::ParityClass;
//! use fryline_types::raw::{RawTileRecord, RawTileset};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tileset = RawTileset {
//!     frames: vec![5, 6],
//!     types: vec![RawTileRecord {
//!         type_id: "Floor".to_string(),
//!         base_frame: 5,
//!         parity_variants: Default::default(),
//!         animation: None,
//!         anim_speed_percent: None,
//!     }],
//! };
//!
//! let catalog = Catalog::build(&tileset)?;
//! let floor = catalog.lookup("Floor", ParityClass::None).unwrap();
//! assert_eq!(floor.base_frame(), 5);
//! assert!(catalog.diagnostics().is_empty());
//! # Ok(())
//! # }
//! ```

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, warn};

use crate::{
	anim::FrameId,
	config::BuildConfig,
	error::{AnimationSpecError, CatalogError},
	parity::{GridPos, ParityClass, ParityRule},
	raw::{RawTileset, parse_record},
	tile::{TileTypeDefinition, TileTypeId},
};

/// Dense handle of a tile type inside one catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileTypeKey(u32);

impl TileTypeKey {
	/// Position of the type in catalog order.
	pub fn index(self) -> usize {
		self.0 as usize
	}
}

/// What went wrong with a record that was still loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
	/// Payload could not be parsed; the part was degraded
	Malformed(AnimationSpecError),
	/// A second record used an existing type id and was skipped
	DuplicateType,
}

/// A non-fatal problem recorded during the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
	/// Tile type the problem belongs to
	pub type_id: TileTypeId,
	/// Parity variant the problem belongs to, if any
	pub parity: Option<ParityClass>,
	/// The problem
	pub kind: DiagnosticKind,
}

impl std::fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.type_id)?;
		if let Some(parity) = self.parity {
			write!(f, " ({parity})")?;
		}
		match &self.kind {
			DiagnosticKind::Malformed(error) => write!(f, ": degraded to static frame: {error}"),
			DiagnosticKind::DuplicateType => write!(f, ": duplicate type id, record skipped"),
		}
	}
}

#[derive(Debug, Clone)]
struct Entry {
	base: TileTypeDefinition,
	resolved: [TileTypeDefinition; 3],
}

/// Immutable registry of tile type definitions.
#[derive(Debug, Clone)]
pub struct Catalog {
	frames: BTreeSet<FrameId>,
	entries: Vec<Entry>,
	index: BTreeMap<TileTypeId, TileTypeKey>,
	diagnostics: Vec<Diagnostic>,
	parity_rule: ParityRule,
}

impl Catalog {
	/// Builds a catalog with [`BuildConfig::default`].
	///
	/// # Errors
	///
	/// Returns [`CatalogError::DanglingFrameReference`] if any record refers to a
	/// frame outside `tileset.frames`.
	pub fn build(tileset: &RawTileset) -> Result<Self, CatalogError> {
		Self::build_with_config(tileset, &BuildConfig::default())
	}

	/// Builds a catalog with a custom configuration.
	///
	/// # Errors
	///
	/// Returns [`CatalogError::DanglingFrameReference`] for unknown frames, and
	/// [`CatalogError::Malformed`] for malformed payloads when `config.strict`
	/// is set.
	pub fn build_with_config(tileset: &RawTileset, config: &BuildConfig) -> Result<Self, CatalogError> {
		let mut diagnostics = Vec::new();
		let mut definitions = Vec::with_capacity(tileset.types.len());

		for record in &tileset.types {
			let (definition, issues) = parse_record(record);
			for issue in issues {
				if config.strict {
					return Err(CatalogError::Malformed {
						type_id: definition.type_id().clone(),
						source: issue.error,
					});
				}
				diagnostics.push(Diagnostic {
					type_id: definition.type_id().clone(),
					parity: issue.parity,
					kind: DiagnosticKind::Malformed(issue.error),
				});
			}
			definitions.push(definition);
		}

		let mut catalog = Self::from_definitions(tileset.frames.iter().copied(), definitions, config)?;
		diagnostics.append(&mut catalog.diagnostics);
		catalog.diagnostics = diagnostics;

		for diagnostic in &catalog.diagnostics {
			warn!("{diagnostic}");
		}
		debug!(
			"Built tile catalog: {} types, {} frames, {} diagnostics",
			catalog.len(),
			catalog.frames.len(),
			catalog.diagnostics.len()
		);

		Ok(catalog)
	}

	/// Builds a catalog from already parsed definitions.
	///
	/// The first definition of a type id wins; later ones are skipped and
	/// recorded as [`DiagnosticKind::DuplicateType`].
	///
	/// # Errors
	///
	/// Returns [`CatalogError::DanglingFrameReference`] if any definition refers
	/// to a frame outside `frames`.
	pub fn from_definitions(
		frames: impl IntoIterator<Item = FrameId>,
		definitions: impl IntoIterator<Item = TileTypeDefinition>,
		config: &BuildConfig,
	) -> Result<Self, CatalogError> {
		let frames: BTreeSet<FrameId> = frames.into_iter().collect();
		let mut entries = Vec::new();
		let mut index = BTreeMap::new();
		let mut diagnostics = Vec::new();

		for definition in definitions {
			if index.contains_key(definition.type_id()) {
				diagnostics.push(Diagnostic {
					type_id: definition.type_id().clone(),
					parity: None,
					kind: DiagnosticKind::DuplicateType,
				});
				continue;
			}

			if let Some((frame_id, location)) =
				definition.frame_references().into_iter().find(|(frame, _)| !frames.contains(frame))
			{
				return Err(CatalogError::DanglingFrameReference {
					type_id: definition.type_id().clone(),
					frame_id,
					location,
				});
			}

			let key = TileTypeKey(entries.len() as u32);
			index.insert(definition.type_id().clone(), key);
			entries.push(Entry {
				resolved: ParityClass::ALL.map(|parity| definition.resolve(parity)),
				base: definition,
			});
		}

		Ok(Self {
			frames,
			entries,
			index,
			diagnostics,
			parity_rule: config.parity_rule,
		})
	}

	/// Returns the definition of `type_id` resolved for `parity`.
	pub fn lookup(&self, type_id: &str, parity: ParityClass) -> Option<&TileTypeDefinition> {
		self.key(type_id).and_then(|key| self.definition(key, parity))
	}

	/// Returns the key of `type_id`.
	pub fn key(&self, type_id: &str) -> Option<TileTypeKey> {
		self.index.get(type_id).copied()
	}

	/// Returns the definition behind `key` resolved for `parity`.
	pub fn definition(&self, key: TileTypeKey, parity: ParityClass) -> Option<&TileTypeDefinition> {
		self.entries.get(key.index()).map(|entry| &entry.resolved[parity.index()])
	}

	/// Returns the definition behind `key` as declared, without variants applied.
	pub fn declared(&self, key: TileTypeKey) -> Option<&TileTypeDefinition> {
		self.entries.get(key.index()).map(|entry| &entry.base)
	}

	/// Parity class of an instance of `key` placed at `position`.
	pub fn classify(&self, key: TileTypeKey, position: GridPos) -> Option<ParityClass> {
		self.declared(key).map(|definition| definition.classify(position, self.parity_rule))
	}

	/// Rule used by [`Catalog::classify`].
	pub fn parity_rule(&self) -> ParityRule {
		self.parity_rule
	}

	/// Returns `true` if `frame` is part of the tileset.
	pub fn contains_frame(&self, frame: FrameId) -> bool {
		self.frames.contains(&frame)
	}

	/// Every known frame id, ascending.
	pub fn frames(&self) -> impl Iterator<Item = FrameId> + '_ {
		self.frames.iter().copied()
	}

	/// Non-fatal problems found during the build.
	pub fn diagnostics(&self) -> &[Diagnostic] {
		&self.diagnostics
	}

	/// Number of tile types.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if the catalog holds no tile types.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over the declared definitions in catalog order.
	pub fn iter(&self) -> impl Iterator<Item = (TileTypeKey, &TileTypeDefinition)> + '_ {
		self.entries.iter().enumerate().map(|(i, entry)| (TileTypeKey(i as u32), &entry.base))
	}
}
