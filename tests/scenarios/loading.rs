//! Tileset loading

use fryline_rs::prelude::*;

use super::{TILESET_JSON, bundled_catalog};

#[test_log::test]
fn test_bundled_tileset_is_clean() {
	let catalog = bundled_catalog();

	assert_eq!(catalog.len(), 7);
	assert!(catalog.diagnostics().is_empty());
	for name in ["Floor", "Start", "Exit", "Conveyor", "Frier", "Spinner", "Screen"] {
		assert!(catalog.key(name).is_some(), "{name} missing");
	}
}

#[test]
fn test_bundled_kinds() {
	let catalog = bundled_catalog();
	let kind = |name: &str| catalog.lookup(name, ParityClass::None).unwrap().animation().kind();

	assert_eq!(kind("Floor"), "none");
	assert_eq!(kind("Conveyor"), "pausable");
	assert_eq!(kind("Frier"), "state_machine");
	assert_eq!(kind("Spinner"), "pausable");
	assert_eq!(kind("Screen"), "state_machine");
}

#[test_log::test]
fn test_broken_record_is_degraded_not_fatal() {
	let mut tileset: RawTileset = serde_json::from_str(TILESET_JSON).unwrap();
	let broken: RawTileRecord = serde_json::from_str(
		r#"{
			"type_id": "Press",
			"base_frame": 4,
			"animation": { "squash": [{ "frame_id": 4, "duration_ms": 100 }] }
		}"#,
	)
	.unwrap();
	tileset.types.push(broken);

	let catalog = Catalog::build(&tileset).unwrap();
	assert_eq!(catalog.len(), 8);
	assert!(catalog.lookup("Press", ParityClass::None).unwrap().animation().is_static());
	assert_eq!(
		catalog.diagnostics()[0].kind,
		DiagnosticKind::Malformed(AnimationSpecError::UnknownSequence {
			name: "squash".into(),
		})
	);

	assert!(Catalog::build_with_config(&tileset, &BuildConfig::strict()).is_err());
}

#[test]
fn test_missing_frame_rejects_tileset() {
	let mut tileset: RawTileset = serde_json::from_str(TILESET_JSON).unwrap();
	tileset.frames.retain(|&frame| frame != 22);

	match Catalog::build(&tileset) {
		Err(CatalogError::DanglingFrameReference {
			type_id,
			frame_id,
			location,
		}) => {
			assert_eq!(type_id.as_str(), "Frier");
			assert_eq!(frame_id, 22);
			assert_eq!(location, "on_anim[2]");
		}
		other => panic!("expected dangling frame error, got {other:?}"),
	}
}
