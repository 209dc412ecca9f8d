use super::data::*;
use super::loader::GameContent;
use super::validation::validate_content;

fn ron_options() -> ron::Options {
    ron::Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

// ============================================================================
// Shipped data files
// ============================================================================

#[test]
fn shipped_config_parses() {
    let text = include_str!("../../assets/data/config.ron");
    let config: GameConfigDef = ron_options().from_str(text).unwrap();

    assert!(config.start_level.is_some());
    assert!(config.player_max_health > 0.0);
    assert!(config.checkpoint_radius > 0.0);
    assert!(config.movement.is_some());
}

#[test]
fn shipped_levels_parse() {
    let text = include_str!("../../assets/data/levels.ron");
    let file: DataFile<LevelDef> = ron_options().from_str(text).unwrap();

    assert_eq!(file.schema_version, 1);
    assert!(!file.items.is_empty());
    for level in &file.items {
        assert!(!level.id.is_empty());
        assert!(!level.blocks.is_empty(), "level '{}' has no geometry", level.id);
        assert!(level.size.0 > 0.0 && level.size.1 > 0.0);
    }
}

#[test]
fn shipped_sounds_parse() {
    let text = include_str!("../../assets/data/sounds.ron");
    let manifest: SoundManifestDef = ron_options().from_str(text).unwrap();

    assert!(!manifest.sounds.is_empty());
    for entry in &manifest.sounds {
        assert!(!entry.clips.is_empty(), "{:?} has no clips", entry.kind);
    }
}

#[test]
fn shipped_content_cross_references_are_valid() {
    let content = GameContent {
        config: ron_options()
            .from_str(include_str!("../../assets/data/config.ron"))
            .unwrap(),
        levels: ron_options()
            .from_str::<DataFile<LevelDef>>(include_str!("../../assets/data/levels.ron"))
            .unwrap()
            .items,
        sounds: ron_options()
            .from_str(include_str!("../../assets/data/sounds.ron"))
            .unwrap(),
    };

    let errors = validate_content(&content);
    assert!(errors.is_empty(), "validation errors: {:?}", errors);
}

// ============================================================================
// Defaults and partial files
// ============================================================================

#[test]
fn config_defaults_fill_missing_fields() {
    let config: GameConfigDef = ron_options().from_str("(start_level: \"a\")").unwrap();

    assert_eq!(config.start_level.as_deref(), Some("a"));
    assert_eq!(config.player_max_health, 30.0);
    assert_eq!(config.stomp_cone_angle_deg, 100.0);
    assert!(config.movement.is_none());
}

#[test]
fn minimal_level_def_parses() {
    let text = r#"(
        id: "test",
        name: "Test",
        size: (800.0, 600.0),
        player_spawn: (0.0, 0.0),
        blocks: [(pos: (0.0, -100.0), size: (800.0, 40.0))],
        exit: None,
    )"#;
    let level: LevelDef = ron_options().from_str(text).unwrap();

    assert_eq!(level.fall_limit, -2000.0);
    assert_eq!(level.decor_seed, 0);
    assert!(level.music_track.is_none());
    assert!(level.checkpoints.is_empty());
    assert!(level.enemies.is_empty());
    assert_eq!(level.blocks[0].surface, SurfaceDef::Ground);
    assert!(level.exit.is_none());
}

#[test]
fn enemy_def_defaults() {
    let enemy: EnemyDef = ron_options().from_str("(pos: (10.0, 20.0))").unwrap();

    assert_eq!(enemy.max_health, 20.0);
    assert_eq!(enemy.contact_damage, 10.0);
}

#[test]
fn door_rule_variants_parse() {
    let always: DoorDef = ron_options()
        .from_str("(pos: (0.0, 0.0), target: \"next\")")
        .unwrap();
    assert_eq!(always.rule, DoorRuleDef::Always);
    assert_eq!(always.size, (36.0, 56.0));

    let keyed: DoorDef = ron_options()
        .from_str("(pos: (0.0, 0.0), target: None, rule: RequiresKeys(2))")
        .unwrap();
    assert_eq!(keyed.rule, DoorRuleDef::RequiresKeys(2));
    assert!(keyed.target.is_none());
}

// ============================================================================
// Validation
// ============================================================================

fn level_with_exit(id: &str, target: Option<&str>, rule: DoorRuleDef) -> LevelDef {
    LevelDef {
        id: id.to_string(),
        name: id.to_string(),
        size: (800.0, 600.0),
        player_spawn: (0.0, 0.0),
        fall_limit: -2000.0,
        decor_seed: 0,
        music_track: None,
        blocks: Vec::new(),
        checkpoints: Vec::new(),
        collectibles: Vec::new(),
        enemies: Vec::new(),
        kill_zones: Vec::new(),
        exit: Some(DoorDef {
            pos: (0.0, 0.0),
            size: (36.0, 56.0),
            target: target.map(String::from),
            rule,
        }),
    }
}

#[test]
fn validation_accepts_consistent_content() {
    let content = GameContent {
        config: GameConfigDef {
            start_level: Some("a".to_string()),
            ..Default::default()
        },
        levels: vec![
            level_with_exit("a", Some("b"), DoorRuleDef::Always),
            level_with_exit("b", None, DoorRuleDef::Always),
        ],
        sounds: SoundManifestDef::default(),
    };

    assert!(validate_content(&content).is_empty());
}

#[test]
fn validation_flags_missing_start_level() {
    let content = GameContent {
        config: GameConfigDef {
            start_level: Some("nowhere".to_string()),
            ..Default::default()
        },
        levels: vec![level_with_exit("a", None, DoorRuleDef::Always)],
        sounds: SoundManifestDef::default(),
    };

    let errors = validate_content(&content);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "start_level");
}

#[test]
fn validation_flags_dangling_door_target() {
    let content = GameContent {
        config: GameConfigDef::default(),
        levels: vec![level_with_exit("a", Some("missing"), DoorRuleDef::Always)],
        sounds: SoundManifestDef::default(),
    };

    let errors = validate_content(&content);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].source_id, "a");
    assert_eq!(errors[0].field, "exit.target");
}

#[test]
fn validation_flags_duplicate_level_ids() {
    let content = GameContent {
        config: GameConfigDef::default(),
        levels: vec![
            level_with_exit("a", None, DoorRuleDef::Always),
            level_with_exit("a", None, DoorRuleDef::Always),
        ],
        sounds: SoundManifestDef::default(),
    };

    let errors = validate_content(&content);
    assert!(errors.iter().any(|e| e.message.contains("duplicate")));
}

#[test]
fn validation_flags_cleared_rule_without_enemies() {
    let content = GameContent {
        config: GameConfigDef::default(),
        levels: vec![level_with_exit("a", None, DoorRuleDef::EnemiesCleared)],
        sounds: SoundManifestDef::default(),
    };

    let errors = validate_content(&content);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "exit.rule");
}

#[test]
fn validation_flags_music_track_out_of_range() {
    let mut level = level_with_exit("a", None, DoorRuleDef::Always);
    level.music_track = Some(2);

    let content = GameContent {
        config: GameConfigDef::default(),
        levels: vec![level],
        sounds: SoundManifestDef {
            music_tracks: vec!["audio/music/theme.ogg".to_string()],
            ..Default::default()
        },
    };

    let errors = validate_content(&content);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "music_track");
}
