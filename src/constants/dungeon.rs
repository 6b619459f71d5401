//! Dungeon generation constants.

/// Dungeon width in cells
pub const DUNGEON_WIDTH: usize = 40;
/// Dungeon height in cells
pub const DUNGEON_HEIGHT: usize = 20;

/// Rooms always placed per floor
pub const DUNGEON_BASE_ROOMS: u32 = 5;
/// Extra rooms rolled on top of the base count (exclusive upper bound)
pub const DUNGEON_EXTRA_ROOMS: u32 = 4;

/// Room width range (inclusive)
pub const DUNGEON_MIN_ROOM_WIDTH: i32 = 5;
pub const DUNGEON_MAX_ROOM_WIDTH: i32 = 12;
/// Room height range (inclusive)
pub const DUNGEON_MIN_ROOM_HEIGHT: i32 = 4;
pub const DUNGEON_MAX_ROOM_HEIGHT: i32 = 9;

/// Cells reserved past the far edge of a room when choosing its origin
pub const DUNGEON_ROOM_MARGIN: i32 = 2;
