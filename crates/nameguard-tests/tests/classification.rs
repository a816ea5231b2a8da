//! End-to-end classification, validation and rename tests.

use pretty_assertions::assert_eq;

use nameguard_lint::{AppliedRule, AssetDescriptor, RenameInstruction, RunSummary, Verdict};
use nameguard_tests::fixtures::{self, *};
use nameguard_tests::TestProject;

#[test]
fn missing_prefix_is_invalid_and_rename_fixes_it() {
    let validator = sample_validator();
    let cube = AssetDescriptor::new("Cube", STATIC_MESH, "/Game/Props");

    let result = validator.classify(&cube);
    assert_eq!(result.verdict, Verdict::Invalid);
    assert_eq!(
        result.message.as_deref(),
        Some("Assets of class '/Script/Engine.StaticMesh' must have a name which starts with SM_")
    );

    let proposed = validator.proposed_name(&cube).unwrap();
    assert_eq!(proposed, "SM_Cube");
    assert_eq!(validator.classify(&cube.renamed(proposed)).verdict, Verdict::Valid);
}

#[test]
fn engine_content_is_excluded_regardless_of_type() {
    let validator = sample_validator();
    for class in [STATIC_MESH, "/Script/Unknown.Thing", ""] {
        let asset = AssetDescriptor::new("anything", class, "/Engine/Basic/Shapes");
        assert_eq!(validator.classify(&asset).verdict, Verdict::Excluded, "class {}", class);
    }
}

#[test]
fn configured_path_fragment_is_excluded() {
    let validator = sample_validator();
    let asset = AssetDescriptor::new("Cube", STATIC_MESH, "/Game/Developers/alice");
    assert_eq!(validator.classify(&asset).verdict, Verdict::Excluded);
}

#[test]
fn excluded_class_covers_descendants() {
    let mut config = sample_config();
    config.excluded_classes.push(TEXTURE.to_string());
    let validator = nameguard_lint::NamingValidator::from_config(&config).unwrap();

    let texture = AssetDescriptor::new("Noise", TEXTURE_2D, "/Game/Textures");
    assert_eq!(validator.classify(&texture).verdict, Verdict::Excluded);

    let level = AssetDescriptor::new("Level01", WORLD, "/Game/Maps");
    assert_eq!(validator.classify(&level).verdict, Verdict::Excluded);
}

#[test]
fn rules_apply_to_descendant_classes() {
    let validator = sample_validator();
    let texture = AssetDescriptor::new("Noise", TEXTURE_2D, "/Game/Textures");
    assert_eq!(validator.proposed_name(&texture).as_deref(), Some("T_Noise"));
}

#[test]
fn first_rule_wins_over_more_specific_rule() {
    let validator = sample_validator();
    let hero = fixtures::blueprint("BP_Char_Hero", "/Game/Characters", CHARACTER);

    let result = validator.classify(&hero);
    assert_eq!(result.verdict, Verdict::Invalid);
    assert_eq!(result.applied, Some(AppliedRule::Table(4)));
    assert_eq!(validator.proposed_name(&hero).as_deref(), Some("BP_Pawn_BP_Char_Hero"));
}

#[test]
fn generic_blueprint_falls_back_to_default_category() {
    let validator = sample_validator();
    let door = fixtures::blueprint("Door", "/Game/Props", ACTOR);

    let result = validator.classify(&door);
    assert_eq!(result.verdict, Verdict::Invalid);
    assert_eq!(result.applied, Some(AppliedRule::DefaultCategory));
    assert_eq!(validator.proposed_name(&door).as_deref(), Some("BP_Door"));
    assert_eq!(validator.classify(&door.renamed("BP_Door")).verdict, Verdict::Valid);
}

#[test]
fn unresolvable_type_is_unknown() {
    let validator = sample_validator();
    let unknown_class = AssetDescriptor::new("Thing", "/Script/Plugin.Thing", "/Game");
    let no_class = AssetDescriptor::new("Thing", "", "/Game");

    assert_eq!(validator.classify(&unknown_class).verdict, Verdict::Unknown);
    assert_eq!(validator.classify(&no_class).verdict, Verdict::Unknown);
}

#[test]
fn class_without_rule_counts_as_unable_to_validate() {
    let project = TestProject::new(
        &sample_config(),
        vec![AssetDescriptor::new("Spawner", ACTOR, "/Game/Gameplay")],
    );
    let output = project.validate(&[]);

    assert!(output.success);
    assert_eq!(
        output.summary,
        RunSummary {
            checked: 1,
            valid: 0,
            invalid: 0,
            skipped: 0,
            unable_to_validate: 1,
        }
    );
    assert_eq!(output.report.warnings.len(), 1);
}

fn mixed_assets() -> Vec<AssetDescriptor> {
    vec![
        AssetDescriptor::new("SM_Rock", STATIC_MESH, "/Game/Props"),
        AssetDescriptor::new("Boulder", STATIC_MESH, "/Game/Props"),
        AssetDescriptor::new("Grass", TEXTURE_2D, "/Game/Textures"),
        AssetDescriptor::new("S_Rain", SOUND_WAVE, "/Game/Audio"),
        AssetDescriptor::new("Sphere", STATIC_MESH, "/Engine/Basic/Shapes"),
        AssetDescriptor::new("Level01", WORLD, "/Game/Maps"),
        AssetDescriptor::new("Spawner", ACTOR, "/Game/Gameplay"),
        fixtures::blueprint("Door", "/Plugins/Doors", ACTOR),
    ]
}

#[test]
fn validate_project_end_to_end() {
    let project = TestProject::new(&sample_config(), mixed_assets());
    let output = project.validate(&[]);

    assert!(!output.success);
    assert_eq!(
        output.summary,
        RunSummary {
            checked: 6,
            valid: 1,
            invalid: 4,
            skipped: 2,
            unable_to_validate: 1,
        }
    );
    assert_eq!(output.summary.total(), 8);
    assert!(output.dropped.is_empty());

    let errors: Vec<&str> = output.report.errors.iter().map(|e| e.asset_path.as_str()).collect();
    assert_eq!(
        errors,
        vec![
            "/Game/Props/Boulder",
            "/Game/Textures/Grass",
            "/Game/Audio/S_Rain",
            "/Plugins/Doors/Door"
        ]
    );
    assert_eq!(
        output.report.errors[2].detail.as_deref(),
        Some("Assets of class '/Script/Engine.SoundWave' must have a name which ends with _Wav")
    );
    assert_eq!(
        output.report.last_summary().unwrap().counts(),
        "Files Checked: 6, Passed: 1, Failed: 4, Skipped: 2, Unable to validate: 1"
    );
}

#[test]
fn validate_respects_scope() {
    let project = TestProject::new(&sample_config(), mixed_assets());
    let output = project.validate(&["/Game/Props", "/Game/Audio"]);

    assert_eq!(output.verdicts.len(), 3);
    assert_eq!(output.summary.invalid, 2);
}

#[test]
fn rename_project_end_to_end() {
    let project = TestProject::new(&sample_config(), mixed_assets());
    let (output, plan) = project.rename();

    assert!(output.success);
    assert_eq!(output.summary.renamed, 4);
    assert_eq!(output.summary.skipped, 2);
    assert_eq!(
        plan.renames,
        vec![
            RenameInstruction {
                original_path: "/Game/Props/Boulder.Boulder".to_string(),
                proposed_path: "/Game/Props/SM_Boulder.SM_Boulder".to_string(),
            },
            RenameInstruction {
                original_path: "/Game/Textures/Grass.Grass".to_string(),
                proposed_path: "/Game/Textures/T_Grass.T_Grass".to_string(),
            },
            RenameInstruction {
                original_path: "/Game/Audio/S_Rain.S_Rain".to_string(),
                proposed_path: "/Game/Audio/S_Rain_Wav.S_Rain_Wav".to_string(),
            },
            RenameInstruction {
                original_path: "/Plugins/Doors/Door.Door".to_string(),
                proposed_path: "/Plugins/Doors/BP_Door.BP_Door".to_string(),
            },
        ]
    );
}

#[test]
fn rename_collision_is_counted_as_failure() {
    let project = TestProject::new(
        &sample_config(),
        vec![
            AssetDescriptor::new("SM_Rock", STATIC_MESH, "/Game/Props"),
            AssetDescriptor::new("Rock", STATIC_MESH, "/Game/Props"),
            AssetDescriptor::new("Pebble", STATIC_MESH, "/Game/Props"),
        ],
    );
    let (output, plan) = project.rename();

    assert!(!output.success);
    assert_eq!(output.summary.failed, 1);
    assert_eq!(output.summary.renamed, 1);
    assert_eq!(output.report.errors[0].asset_path, "/Game/Props/Rock");
    assert_eq!(plan.renames.len(), 1);
    assert_eq!(plan.renames[0].proposed_path, "/Game/Props/SM_Pebble.SM_Pebble");
}

#[test]
fn renamed_manifest_validates_cleanly() {
    let validator = sample_validator();
    let renamed: Vec<AssetDescriptor> = mixed_assets()
        .into_iter()
        .map(|asset| match validator.proposed_name(&asset) {
            Some(name) => asset.renamed(name),
            None => asset,
        })
        .collect();

    let project = TestProject::new(&sample_config(), renamed);
    let output = project.validate(&[]);
    assert!(output.success);
    assert_eq!(output.summary.invalid, 0);
}

#[test]
fn rules_command_lists_resolved_table() {
    let mut config = sample_config();
    config.rules.push(nameguard_lint::config::RuleConfig::prefix("/Script/Missing.Class", "X_"));
    let project = TestProject::new(&config, Vec::new());

    let output = project.rules();
    assert_eq!(output.rules.len(), 6);
    assert_eq!(output.excluded_classes, vec![WORLD.to_string()]);
    assert_eq!(
        output.excluded_paths,
        vec!["/Game/Developers/".to_string(), "/Engine/".to_string()]
    );
    assert_eq!(output.dropped.len(), 1);
    assert_eq!(output.dropped[0].value, "/Script/Missing.Class");
}
