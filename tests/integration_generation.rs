//! Integration tests for end-to-end dungeon generation.

use delve::{
    generate_dungeon, CircleBounds, DelveError, DelveResult, DungeonGenerator, GenerationConfig,
    Generator, Player, Position, Room, SpawnSink, TileType,
};
use std::io::Write;

fn scenario_config(seed: u64) -> GenerationConfig {
    GenerationConfig {
        seed,
        rect_rooms: 1,
        room_min_size: 4,
        room_max_size: 4,
        map_width: 20,
        map_height: 20,
        circ_rooms: 0,
        max_radius: 1,
        min_radius: 1,
        placement_attempts: 1,
        circle_bounds: CircleBounds::PreviousRoom,
    }
}

#[test]
fn test_single_room_scenario_is_byte_identical() -> DelveResult<()> {
    let config = scenario_config(98765);

    let mut first_player = Player::new("Hero".to_string(), Position::origin());
    let first = generate_dungeon(
        &config,
        &mut delve::generation::utils::create_rng(&config),
        &mut first_player,
    )?;

    let mut second_player = Player::new("Hero".to_string(), Position::origin());
    let second = generate_dungeon(
        &config,
        &mut delve::generation::utils::create_rng(&config),
        &mut second_player,
    )?;

    assert_eq!(serde_json::to_vec(&first)?, serde_json::to_vec(&second)?);
    assert_eq!(first.to_string(), second.to_string());
    assert_eq!(first_player.position(), second_player.position());

    // One 3x3 floor block centered on the spawn point
    assert_eq!(first.floor_count(), 9);
    let spawn = first_player.position();
    for dy in -1..=1 {
        for dx in -1..=1 {
            let pos = Position::new(spawn.x + dx, spawn.y + dy);
            assert_eq!(first.get_tile(pos), Some(TileType::Floor));
        }
    }

    Ok(())
}

#[test]
fn test_different_seeds_diverge() -> DelveResult<()> {
    let generator = DungeonGenerator::new();
    let dungeons: Vec<_> = (0..8)
        .map(|seed| {
            let config = GenerationConfig::new(seed);
            generator.generate(&config, &mut delve::generation::utils::create_rng(&config))
        })
        .collect::<DelveResult<_>>()?;

    let first = &dungeons[0];
    assert!(dungeons.iter().skip(1).any(|dungeon| dungeon.map != first.map));
    Ok(())
}

#[test]
fn test_dimensions_match_regardless_of_room_counts() -> DelveResult<()> {
    for (rect_rooms, circ_rooms) in [(0, 0), (0, 3), (1, 0), (5, 5), (30, 2)] {
        let mut config = GenerationConfig::new(55);
        config.map_width = 33;
        config.map_height = 21;
        config.rect_rooms = rect_rooms;
        config.circ_rooms = circ_rooms;

        let mut spawn = None;
        let map = generate_dungeon(
            &config,
            &mut delve::generation::utils::create_rng(&config),
            &mut spawn,
        )?;

        assert_eq!(map.width, 33);
        assert_eq!(map.height, 21);
        assert_eq!(map.tiles.len(), 21);
        assert!(map.tiles.iter().all(|row| row.len() == 33));
        assert_eq!(spawn.is_some(), rect_rooms > 0);
    }
    Ok(())
}

#[test]
fn test_single_attempt_under_generates_on_crowded_maps() -> DelveResult<()> {
    // Rooms nearly as large as the map cannot all fit
    let mut config = GenerationConfig::new(4);
    config.map_width = 24;
    config.map_height = 24;
    config.room_min_size = 14;
    config.room_max_size = 16;
    config.rect_rooms = 10;
    config.circ_rooms = 0;

    let dungeon = DungeonGenerator::new()
        .generate(&config, &mut delve::generation::utils::create_rng(&config))?;

    assert_eq!(dungeon.rooms.len(), 1);
    Ok(())
}

#[test]
fn test_retries_never_exceed_requested_slots() -> DelveResult<()> {
    let mut config = GenerationConfig::new(8);
    config.placement_attempts = 50;

    let dungeon = DungeonGenerator::new()
        .generate(&config, &mut delve::generation::utils::create_rng(&config))?;
    let (rectangular, circular) = dungeon.room_counts();

    assert!(rectangular <= config.rect_rooms as usize);
    assert!(circular <= (rectangular * config.circ_rooms as usize));
    Ok(())
}

#[test]
fn test_spawn_is_first_room_center_on_floor() -> DelveResult<()> {
    for seed in 100..130 {
        let config = GenerationConfig::new(seed);
        let mut player = Player::new("Hero".to_string(), Position::new(-1, -1));

        let dungeon = DungeonGenerator::new().assemble(
            &config,
            &mut delve::generation::utils::create_rng(&config),
            &mut player,
        )?;

        let first = dungeon.rooms.first().expect("first slot always succeeds");
        assert!(matches!(first, Room::Rectangular(_)));
        assert_eq!(player.position(), first.center());
        assert_eq!(dungeon.spawn, Some(first.center()));
        assert!(dungeon.map.is_walkable(player.position()));
    }
    Ok(())
}

/// Records every spawn write the generator makes.
#[derive(Default)]
struct CountingSink {
    calls: usize,
    last: Option<Position>,
}

impl SpawnSink for CountingSink {
    fn set_spawn(&mut self, pos: Position) {
        self.calls += 1;
        self.last = Some(pos);
    }
}

#[test]
fn test_spawn_is_written_exactly_once() -> DelveResult<()> {
    for seed in 0..20 {
        let mut config = GenerationConfig::new(seed);
        config.circ_rooms = 3;
        config.placement_attempts = 4;
        let mut sink = CountingSink::default();

        let dungeon = DungeonGenerator::new().assemble(
            &config,
            &mut delve::generation::utils::create_rng(&config),
            &mut sink,
        )?;

        assert_eq!(sink.calls, 1);
        assert_eq!(sink.last, dungeon.spawn);
    }

    let mut config = GenerationConfig::new(3);
    config.rect_rooms = 0;
    config.circ_rooms = 3;
    let mut sink = CountingSink::default();
    DungeonGenerator::new().assemble(
        &config,
        &mut delve::generation::utils::create_rng(&config),
        &mut sink,
    )?;
    assert_eq!(sink.calls, 0);
    assert_eq!(sink.last, None);
    Ok(())
}

#[test]
fn test_config_file_round_trip() -> DelveResult<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(
        file,
        r#"{{
            "seed": 321,
            "rect_rooms": 6,
            "map_width": 60,
            "map_height": 30,
            "placement_attempts": 3,
            "circle_bounds": "radius"
        }}"#
    )?;

    let config = GenerationConfig::from_json_file(file.path())?;
    assert_eq!(config.seed, 321);
    assert_eq!(config.rect_rooms, 6);
    assert_eq!(config.map_width, 60);
    assert_eq!(config.placement_attempts, 3);
    assert_eq!(config.circle_bounds, CircleBounds::Radius);
    assert_eq!(config.room_max_size, delve::config::DEFAULT_ROOM_MAX_SIZE);

    let dungeon = DungeonGenerator::new()
        .generate(&config, &mut delve::generation::utils::create_rng(&config))?;
    assert_eq!(dungeon.map.width, 60);
    Ok(())
}

#[test]
fn test_config_file_errors() {
    let missing = GenerationConfig::from_json_file("/definitely/not/a/config.json");
    assert!(matches!(missing, Err(DelveError::Io(_))));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "room_min_size": 5, "room_max_size": 2 }}"#).unwrap();
    let invalid = GenerationConfig::from_json_file(file.path());
    assert!(matches!(invalid, Err(DelveError::InvalidConfig(_))));
}
