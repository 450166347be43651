//! Level loading: plain-text symbol grid into tiles with precomputed walls.

use std::fs;
use std::path::Path;

use raylib::prelude::Vector2;
use thiserror::Error;
use tracing::info;

use crate::BLOCK_SIZE;
use crate::core::entity::EnemyKind;
use crate::core::wall::Wall;

pub const WALL_SYM: char = '#';
pub const PLAYER_SPAWN_SYM: char = '@';
const FLOOR_SYMS: [char; 3] = ['0', '.', ' '];

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("could not read level file: {0}")]
    Io(#[from] std::io::Error),
    #[error("level has no player spawn ('{PLAYER_SPAWN_SYM}')")]
    MissingPlayerSpawn,
    #[error("level has more than one player spawn ('{PLAYER_SPAWN_SYM}')")]
    DuplicatePlayerSpawn,
    #[error("unknown symbol '{symbol}' at row {row}, column {col}")]
    UnknownSymbol { symbol: char, row: usize, col: usize },
    #[error("level is empty")]
    Empty,
}

#[derive(Debug)]
pub enum Tile {
    Wall(Wall),
    Floor,
    PlayerSpawn,
    EnemySpawn(EnemyKind),
}

impl Tile {
    #[inline]
    pub fn is_wall(&self) -> bool {
        matches!(self, Tile::Wall(_))
    }
}

#[derive(Debug)]
pub struct Level {
    tiles: Vec<Vec<Tile>>,
    pub width: usize,
    pub height: usize,
    pub player_spawn: Vector2,
}

/// Center of grid cell (i, j) in world units.
#[inline]
pub fn tile_center(i: usize, j: usize) -> Vector2 {
    Vector2::new((i as f32 + 0.5) * BLOCK_SIZE, (j as f32 + 0.5) * BLOCK_SIZE)
}

impl Level {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse a symbol grid. Short rows are padded with floor to the widest
    /// row. Exactly one player spawn is required; any symbol outside the
    /// recognized set is a content error.
    pub fn parse(text: &str) -> Result<Self, LevelError> {
        let mut grid: Vec<Vec<char>> = text
            .lines()
            .filter(|line| !line.trim_end().is_empty())
            .map(|line| line.trim_end_matches(['\r', '\n']).chars().collect())
            .collect();
        if grid.is_empty() {
            return Err(LevelError::Empty);
        }
        let width = grid.iter().map(|r| r.len()).max().unwrap_or(0);
        for row in &mut grid {
            while row.len() < width {
                row.push('0');
            }
        }
        let height = grid.len();

        let mut player_spawn = None;
        let mut tiles: Vec<Vec<Tile>> = Vec::with_capacity(height);
        let mut enemy_count = 0usize;

        for (j, row) in grid.iter().enumerate() {
            let mut tile_row = Vec::with_capacity(width);
            for (i, &sym) in row.iter().enumerate() {
                let tile = if sym == WALL_SYM {
                    Tile::Wall(Wall::new(tile_center(i, j), WALL_SYM, exposure_at(&grid, i, j)))
                } else if sym == PLAYER_SPAWN_SYM {
                    if player_spawn.replace(tile_center(i, j)).is_some() {
                        return Err(LevelError::DuplicatePlayerSpawn);
                    }
                    Tile::PlayerSpawn
                } else if FLOOR_SYMS.contains(&sym) {
                    Tile::Floor
                } else if let Some(kind) = EnemyKind::from_symbol(sym) {
                    enemy_count += 1;
                    Tile::EnemySpawn(kind)
                } else {
                    return Err(LevelError::UnknownSymbol { symbol: sym, row: j, col: i });
                };
                tile_row.push(tile);
            }
            tiles.push(tile_row);
        }

        let player_spawn = player_spawn.ok_or(LevelError::MissingPlayerSpawn)?;
        info!(width, height, enemies = enemy_count, "level parsed");

        Ok(Self { tiles, width, height, player_spawn })
    }

    /// Tile lookup with signed indices; out-of-range is `None`, not an error.
    #[inline]
    pub fn tile_at(&self, i: isize, j: isize) -> Option<&Tile> {
        if i < 0 || j < 0 {
            return None;
        }
        self.tiles.get(j as usize)?.get(i as usize)
    }

    pub fn walls(&self) -> impl Iterator<Item = &Wall> {
        self.tiles.iter().flatten().filter_map(|tile| match tile {
            Tile::Wall(wall) => Some(wall),
            _ => None,
        })
    }

    /// Enemy spawn points with their kind, in row-major order.
    pub fn enemy_spawns(&self) -> impl Iterator<Item = (Vector2, EnemyKind)> + '_ {
        self.tiles.iter().enumerate().flat_map(|(j, row)| {
            row.iter().enumerate().filter_map(move |(i, tile)| match tile {
                Tile::EnemySpawn(kind) => Some((tile_center(i, j), *kind)),
                _ => None,
            })
        })
    }

    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.tiles
    }
}

/// Which sides of the wall at (i, j) face non-wall tiles, in (left, top,
/// right, bottom) order. The map boundary counts as non-wall, so a wall on
/// the outer ring exposes its boundary face too.
fn exposure_at(grid: &[Vec<char>], i: usize, j: usize) -> [bool; 4] {
    let open = |di: isize, dj: isize| -> bool {
        let ni = i as isize + di;
        let nj = j as isize + dj;
        if ni < 0 || nj < 0 {
            return true;
        }
        match grid.get(nj as usize).and_then(|row| row.get(ni as usize)) {
            Some(&sym) => sym != WALL_SYM,
            None => true,
        }
    };
    [open(-1, 0), open(0, -1), open(1, 0), open(0, 1)]
}
