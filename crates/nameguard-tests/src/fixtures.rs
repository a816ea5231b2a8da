//! Sample configuration shared by the integration tests.

use nameguard_lint::config::{ClassConfig, RuleConfig};
use nameguard_lint::{AssetDescriptor, NamingConfig, NamingValidator};

pub const OBJECT: &str = "/Script/CoreUObject.Object";
pub const ACTOR: &str = "/Script/Engine.Actor";
pub const PAWN: &str = "/Script/Engine.Pawn";
pub const CHARACTER: &str = "/Script/Engine.Character";
pub const BLUEPRINT: &str = "/Script/Engine.Blueprint";
pub const STATIC_MESH: &str = "/Script/Engine.StaticMesh";
pub const TEXTURE: &str = "/Script/Engine.Texture";
pub const TEXTURE_2D: &str = "/Script/Engine.Texture2D";
pub const MATERIAL: &str = "/Script/Engine.Material";
pub const SOUND_WAVE: &str = "/Script/Engine.SoundWave";
pub const WORLD: &str = "/Script/Engine.World";

/// Engine-like hierarchy with a handful of common rules.
///
/// Pawn is listed before Character, so characters match the Pawn rule.
pub fn sample_config() -> NamingConfig {
    let mut config = NamingConfig::default();
    config.classes = vec![
        ClassConfig::root(OBJECT),
        ClassConfig::child(ACTOR, OBJECT),
        ClassConfig::child(PAWN, ACTOR),
        ClassConfig::child(CHARACTER, PAWN),
        ClassConfig::child(BLUEPRINT, OBJECT),
        ClassConfig::child(STATIC_MESH, OBJECT),
        ClassConfig::child(TEXTURE, OBJECT),
        ClassConfig::child(TEXTURE_2D, TEXTURE),
        ClassConfig::child(MATERIAL, OBJECT),
        ClassConfig::child(SOUND_WAVE, OBJECT),
        ClassConfig::child(WORLD, OBJECT),
    ];
    config.rules = vec![
        RuleConfig::prefix(STATIC_MESH, "SM_"),
        RuleConfig::prefix(TEXTURE, "T_"),
        RuleConfig::prefix(MATERIAL, "M_"),
        RuleConfig::new(SOUND_WAVE, "S_", "_Wav"),
        RuleConfig::prefix(PAWN, "BP_Pawn_"),
        RuleConfig::prefix(CHARACTER, "BP_Char_"),
    ];
    config.excluded_classes = vec![WORLD.to_string()];
    config.excluded_paths = vec!["/Game/Developers/".to_string()];
    config.default_category.class_marker = BLUEPRINT.to_string();
    config
}

pub fn sample_validator() -> NamingValidator {
    NamingValidator::from_config(&sample_config()).expect("sample config is valid")
}

/// A blueprint asset whose generated class derives from `native_parent`.
pub fn blueprint(name: &str, path: &str, native_parent: &str) -> AssetDescriptor {
    AssetDescriptor::new(name, BLUEPRINT, path).with_tag("NativeParentClass", native_parent)
}
