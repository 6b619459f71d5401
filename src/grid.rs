use crate::dungeon_gen::{DungeonGenerator, Rect};
use crate::tile::Tile;
#[cfg(test)]
use crate::tile::TileType;
use rand::Rng;

/// One dungeon floor: terrain plus the rooms it was built from.
/// Never mutated during a turn; replaced wholesale on floor transitions.
pub struct Grid {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<Tile>,
    pub rooms: Vec<Rect>,
}

impl Grid {
    /// Generate a fresh dungeon floor.
    pub fn new_floor(width: usize, height: usize, rng: &mut impl Rng) -> Self {
        let result = DungeonGenerator::generate(width, height, rng);

        Self {
            width,
            height,
            tiles: result.tiles,
            rooms: result.rooms,
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&Tile> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(&self.tiles[y as usize * self.width + x as usize])
    }

    /// Out-of-bounds cells are never walkable.
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.get(x, y)
            .map(|t| t.tile_type.is_walkable())
            .unwrap_or(false)
    }

    /// Rejection-sample the whole grid until a floor cell turns up.
    /// The grid must contain at least one floor cell.
    pub fn random_floor_cell(&self, rng: &mut impl Rng) -> (i32, i32) {
        loop {
            let x = rng.gen_range(0..self.width as i32);
            let y = rng.gen_range(0..self.height as i32);
            if self.is_walkable(x, y) {
                return (x, y);
            }
        }
    }

    #[cfg(test)]
    pub fn floor_count(&self) -> usize {
        self.tiles
            .iter()
            .filter(|t| t.tile_type == TileType::Floor)
            .count()
    }

    /// A walled grid with the given rooms carved and no corridors.
    #[cfg(test)]
    pub fn with_rooms(width: usize, height: usize, rooms: &[Rect]) -> Self {
        let mut tiles = vec![Tile::new(TileType::Wall); width * height];
        for room in rooms {
            for y in room.y..room.y + room.height {
                for x in room.x..room.x + room.width {
                    tiles[y as usize * width + x as usize] = Tile::new(TileType::Floor);
                }
            }
        }
        Self {
            width,
            height,
            tiles,
            rooms: rooms.to_vec(),
        }
    }
}
