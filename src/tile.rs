/// Terrain kinds a dungeon cell can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileType {
    Wall,
    Floor,
}

impl TileType {
    /// Character drawn for this terrain
    pub fn glyph(&self) -> char {
        match self {
            TileType::Wall => '#',
            TileType::Floor => '.',
        }
    }

    pub fn is_walkable(&self) -> bool {
        matches!(self, TileType::Floor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub tile_type: TileType,
}

impl Tile {
    pub fn new(tile_type: TileType) -> Self {
        Self { tile_type }
    }

    pub fn glyph(&self) -> char {
        self.tile_type.glyph()
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::new(TileType::Wall)
    }
}
