use gridcast::BLOCK_SIZE;
use gridcast::core::level::{Level, LevelError, Tile, tile_center};

/// Count non-wall/out-of-bounds 4-neighbors straight from the symbol grid.
fn open_neighbors(lines: &[&str], i: usize, j: usize) -> usize {
    let grid: Vec<Vec<char>> = lines.iter().map(|l| l.chars().collect()).collect();
    let offsets = [(-1isize, 0isize), (0, -1), (1, 0), (0, 1)];
    offsets
        .iter()
        .filter(|(di, dj)| {
            let ni = i as isize + di;
            let nj = j as isize + dj;
            if ni < 0 || nj < 0 {
                return true;
            }
            match grid.get(nj as usize).and_then(|row| row.get(ni as usize)) {
                Some(&c) => c != '#',
                None => true,
            }
        })
        .count()
}

// ── exposure ─────────────────────────────────────────────────────────────────

#[test]
fn exposed_edges_match_open_neighbors() {
    let lines = ["####", "#@0#", "#0!#", "####"];
    let level = Level::parse(&lines.join("\n")).unwrap();
    for (j, row) in level.rows().iter().enumerate() {
        for (i, tile) in row.iter().enumerate() {
            if let Tile::Wall(wall) = tile {
                assert_eq!(
                    wall.edges.len(),
                    open_neighbors(&lines, i, j),
                    "wall at ({i}, {j})"
                );
            }
        }
    }
}

#[test]
fn lone_wall_exposes_all_four_sides() {
    let level = Level::parse("#@").unwrap();
    let wall = level.walls().next().unwrap();
    assert_eq!(wall.edges.len(), 4);
}

#[test]
fn interior_wall_fully_surrounded_by_walls_has_no_edges() {
    let level = Level::parse("###\n###\n###\n0@0").unwrap();
    let center = level
        .walls()
        .find(|w| w.pos == tile_center(1, 1))
        .unwrap();
    assert!(center.edges.is_empty());
    assert!(center.responses.is_empty());
}

#[test]
fn short_rows_are_padded_with_floor() {
    // second row is shorter; the wall above the padded cell gains a bottom edge
    let level = Level::parse("##\n#@").unwrap();
    let right = level
        .walls()
        .find(|w| w.pos == tile_center(1, 0))
        .unwrap();
    // top and right face the boundary, bottom faces the padded floor
    assert_eq!(right.edges.len(), 3);
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn parse_is_deterministic() {
    let text = "#####\n#@0!#\n#0#0#\n#####";
    let a = Level::parse(text).unwrap();
    let b = Level::parse(text).unwrap();
    let edges_a: Vec<_> = a.walls().flat_map(|w| w.edges.clone()).collect();
    let edges_b: Vec<_> = b.walls().flat_map(|w| w.edges.clone()).collect();
    assert_eq!(edges_a, edges_b);
}

// ── spawns and errors ────────────────────────────────────────────────────────

#[test]
fn player_spawn_is_tile_center() {
    let level = Level::parse("00\n0@").unwrap();
    assert_eq!(level.player_spawn.x, 1.5 * BLOCK_SIZE);
    assert_eq!(level.player_spawn.y, 1.5 * BLOCK_SIZE);
}

#[test]
fn enemy_spawns_are_collected_in_order() {
    let level = Level::parse("@0!\n$00").unwrap();
    let spawns: Vec<_> = level.enemy_spawns().collect();
    assert_eq!(spawns.len(), 2);
    assert_eq!(spawns[0].0, tile_center(2, 0));
    assert_eq!(spawns[1].0, tile_center(0, 1));
}

#[test]
fn missing_player_spawn_is_fatal() {
    let err = Level::parse("###\n#0#\n###").unwrap_err();
    assert!(matches!(err, LevelError::MissingPlayerSpawn));
}

#[test]
fn duplicate_player_spawn_is_fatal() {
    let err = Level::parse("@0@").unwrap_err();
    assert!(matches!(err, LevelError::DuplicatePlayerSpawn));
}

#[test]
fn unknown_symbol_is_fatal() {
    let err = Level::parse("@z").unwrap_err();
    match err {
        LevelError::UnknownSymbol { symbol, row, col } => {
            assert_eq!(symbol, 'z');
            assert_eq!((row, col), (0, 1));
        }
        other => panic!("expected UnknownSymbol, got {other:?}"),
    }
}

#[test]
fn empty_level_is_fatal() {
    assert!(matches!(Level::parse("\n\n"), Err(LevelError::Empty)));
}

#[test]
fn out_of_range_tile_lookup_is_none() {
    let level = Level::parse("#@").unwrap();
    assert!(level.tile_at(-1, 0).is_none());
    assert!(level.tile_at(0, 5).is_none());
    assert!(level.tile_at(0, 0).is_some());
}
