use crate::constants::*;
use crate::tile::{Tile, TileType};
use rand::Rng;

/// A rectangle representing a room or region
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Check if a point is inside this rectangle
    #[cfg(test)]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Result of dungeon generation
pub struct DungeonResult {
    pub tiles: Vec<Tile>,
    /// Rooms in the order they were placed; each one is joined to its predecessor
    pub rooms: Vec<Rect>,
}

pub struct DungeonGenerator {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl DungeonGenerator {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::new(TileType::Wall); width * height],
        }
    }

    /// Generate a floor: rooms placed one after another, each joined to the
    /// previous one by an L-shaped corridor. Rooms may overlap.
    pub fn generate(width: usize, height: usize, rng: &mut impl Rng) -> DungeonResult {
        puffin::profile_function!();

        let mut gen = Self::new(width, height);
        let room_count = DUNGEON_BASE_ROOMS + rng.gen_range(0..DUNGEON_EXTRA_ROOMS);
        let mut rooms: Vec<Rect> = Vec::with_capacity(room_count as usize);

        for _ in 0..room_count {
            let room = gen.place_room(rng);
            gen.carve_room(&room);

            if let Some(prev) = rooms.last() {
                gen.connect_rooms(prev, &room);
            }
            rooms.push(room);
        }

        log::debug!("generated {} rooms on a {}x{} grid", rooms.len(), width, height);

        DungeonResult {
            tiles: gen.tiles,
            rooms,
        }
    }

    /// Roll a room size and an origin that keeps the room off the outer wall.
    fn place_room(&self, rng: &mut impl Rng) -> Rect {
        let room_width = rng.gen_range(DUNGEON_MIN_ROOM_WIDTH..=DUNGEON_MAX_ROOM_WIDTH);
        let room_height = rng.gen_range(DUNGEON_MIN_ROOM_HEIGHT..=DUNGEON_MAX_ROOM_HEIGHT);

        let x_span = (self.width as i32 - room_width - DUNGEON_ROOM_MARGIN).max(1);
        let y_span = (self.height as i32 - room_height - DUNGEON_ROOM_MARGIN).max(1);

        let room_x = 1 + rng.gen_range(0..x_span);
        let room_y = 1 + rng.gen_range(0..y_span);

        Rect::new(room_x, room_y, room_width, room_height)
    }

    fn get_index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    fn set_tile(&mut self, x: i32, y: i32, tile_type: TileType) {
        if let Some(idx) = self.get_index(x, y) {
            self.tiles[idx] = Tile::new(tile_type);
        }
    }

    fn carve_room(&mut self, room: &Rect) {
        for y in room.y..room.y + room.height {
            for x in room.x..room.x + room.width {
                self.set_tile(x, y, TileType::Floor);
            }
        }
    }

    /// Connect two rooms with an L-shaped corridor: along the first room's
    /// center row, then down the second room's center column.
    fn connect_rooms(&mut self, from: &Rect, to: &Rect) {
        let (x1, y1) = from.center();
        let (x2, y2) = to.center();

        self.create_h_corridor(x1, x2, y1);
        self.create_v_corridor(y1, y2, x2);
    }

    fn create_h_corridor(&mut self, x1: i32, x2: i32, y: i32) {
        let start = x1.min(x2);
        let end = x1.max(x2);

        for x in start..=end {
            self.set_tile(x, y, TileType::Floor);
        }
    }

    fn create_v_corridor(&mut self, y1: i32, y2: i32, x: i32) {
        let start = y1.min(y2);
        let end = y1.max(y2);

        for y in start..=end {
            self.set_tile(x, y, TileType::Floor);
        }
    }
}
