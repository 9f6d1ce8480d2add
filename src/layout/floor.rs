use rand::Rng;
use tracing::{debug, warn};

use crate::error::{GeometryError, LayoutError, Result};
use crate::math::angle::rotation_degrees;
use crate::math::adjacency_2d::polygons_adjacent_2d;
use crate::math::polygon_2d::midpoint_2d;
use crate::math::{Point2, TOLERANCE};
use crate::shaper;
use crate::space::{copy_offset, place_row, Axis, Space, SpaceGroup};

use super::corridor::{Corridor, CorridorShape};

/// Default floor outline extents and height.
const DEFAULT_X_SIZE: f64 = 15_000.0;
const DEFAULT_Y_SIZE: f64 = 10_000.0;
const DEFAULT_HEIGHT: f64 = 4000.0;

/// Minimum area for an occupiable room.
const MIN_SPACE: f64 = 1000.0;

/// Cosmetic labels drawn for perimeter rooms.
const ROOM_TYPES: [&str; 5] = ["Office", "Bathroom", "Conference", "Kitchen", "Incubator"];

/// Room-band request for a straight corridor layout.
///
/// Counts above two clamp to two per side; nonzero band depths clamp up
/// to the minimum room area threshold. `rotation` follows the flexible
/// angle convention: magnitudes up to `2π` are radians, larger values
/// degrees, positive turning counter-clockwise.
#[derive(Debug, Clone, Copy)]
pub struct LayoutParams {
    /// Corridor shift from the floor's horizontal midline.
    pub offset: f64,
    /// Rotation applied to the finished layout.
    pub rotation: f64,
    /// Rooms stacked along the corridor's west flank.
    pub rooms_west: u32,
    /// Rooms stacked along the corridor's east flank.
    pub rooms_east: u32,
    /// Rooms in the band across the north side.
    pub rooms_north: u32,
    /// Depth of the north band.
    pub north_depth: f64,
    /// Rooms in the band across the south side.
    pub rooms_south: u32,
    /// Depth of the south band.
    pub south_depth: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            offset: 0.0,
            rotation: 0.0,
            rooms_west: 2,
            rooms_east: 2,
            rooms_north: 0,
            north_depth: 3000.0,
            rooms_south: 0,
            south_depth: 3000.0,
        }
    }
}

/// The spatial configuration of a single floor: an outline, a corridor
/// and the rooms laid around it.
#[derive(Debug, Clone)]
pub struct Floor {
    corridor: Corridor,
    outline: Space,
    rooms: SpaceGroup,
}

impl Default for Floor {
    fn default() -> Self {
        Self::new()
    }
}

impl Floor {
    /// Creates a floor with the default 15000 x 10000 outline at height
    /// 4000 on level zero.
    #[must_use]
    pub fn new() -> Self {
        let mut outline = Space::new();
        outline.set_height(DEFAULT_HEIGHT);
        outline.set_level(0.0);
        if let Ok(points) = shaper::make_box(Point2::origin(), DEFAULT_X_SIZE, DEFAULT_Y_SIZE) {
            let _ = outline.set_boundary(points);
        }
        let mut corridor = Corridor::default();
        corridor.space_mut().set_height(DEFAULT_HEIGHT);
        Self {
            corridor,
            outline,
            rooms: SpaceGroup::new(),
        }
    }

    /// Creates a floor with an explicit box outline.
    ///
    /// # Errors
    ///
    /// Returns a `ShapeError` when either extent is not positive.
    pub fn with_outline(x_size: f64, y_size: f64, height: f64, level: f64) -> Result<Self> {
        let mut floor = Self::new();
        let points = shaper::make_box(Point2::origin(), x_size, y_size)?;
        floor.outline.set_boundary(points)?;
        floor.outline.set_height(height);
        floor.outline.set_level(level);
        floor.corridor.space_mut().set_height(height);
        Ok(floor)
    }

    /// The corridor.
    #[must_use]
    pub fn corridor(&self) -> &Corridor {
        &self.corridor
    }

    /// Mutable access to the corridor, e.g. to change its capacity.
    pub fn corridor_mut(&mut self) -> &mut Corridor {
        &mut self.corridor
    }

    /// The floor outline space.
    #[must_use]
    pub fn outline(&self) -> &Space {
        &self.outline
    }

    /// The occupiable rooms accepted by the last layout run.
    #[must_use]
    pub fn rooms(&self) -> &SpaceGroup {
        &self.rooms
    }

    /// Lays a straight corridor with room bands on up to four sides.
    ///
    /// Convenience wrapper over [`Floor::make_i_with_rng`] drawing room
    /// labels from the thread-local generator.
    ///
    /// # Errors
    ///
    /// As [`Floor::make_i_with_rng`].
    pub fn make_i(&mut self, params: &LayoutParams) -> Result<()> {
        self.make_i_with_rng(params, &mut rand::thread_rng())
    }

    /// Lays a straight corridor with room bands on up to four sides.
    ///
    /// Single pass, no backtracking: the outline is copied and
    /// un-rotated into an axis-aligned frame, the corridor and candidate
    /// rooms are built as boxes, rooms failing corridor adjacency or the
    /// minimum area are merged into their traversal successor, and the
    /// requested rotation is re-applied to everything that survived.
    /// Candidate rooms are validated in south, east, north, west order.
    ///
    /// # Errors
    ///
    /// `LayoutError::DimensionExceeded` when the corridor width reaches
    /// the floor's x extent or the band depths its y extent; generator
    /// and merge errors propagate. On failure the floor keeps whatever
    /// partial state the failing step left behind.
    pub fn make_i_with_rng<R: Rng + ?Sized>(
        &mut self,
        params: &LayoutParams,
        rng: &mut R,
    ) -> Result<()> {
        // Placement math happens in an axis-aligned frame; the requested
        // rotation is undone here and re-applied at the end.
        let rotation = rotation_degrees(params.rotation);
        let mut frame = copy_offset(&self.outline, 0.0, 0.0);
        if rotation != 0.0 {
            frame.rotate(-rotation);
        }

        let width = self.corridor.width();
        if width >= frame.size_x() {
            warn!(
                width,
                floor_x = frame.size_x(),
                "critical corridor dimension exceeds floor boundary"
            );
            return Err(LayoutError::DimensionExceeded {
                required: width,
                available: frame.size_x(),
            }
            .into());
        }

        let mut rooms_west = params.rooms_west.min(2);
        let mut rooms_east = params.rooms_east.min(2);
        let rooms_north = params.rooms_north.min(2);
        let rooms_south = params.rooms_south.min(2);
        let north_depth = if rooms_north == 0 {
            0.0
        } else {
            params.north_depth.max(MIN_SPACE)
        };
        let south_depth = if rooms_south == 0 {
            0.0
        } else {
            params.south_depth.max(MIN_SPACE)
        };
        if frame.size_y() <= north_depth + south_depth {
            warn!(
                north_depth,
                south_depth,
                floor_y = frame.size_y(),
                "room bands leave no corridor extent"
            );
            return Err(LayoutError::DimensionExceeded {
                required: north_depth + south_depth,
                available: frame.size_y(),
            }
            .into());
        }

        let frame_box = frame.bounds().ok_or(GeometryError::EmptyBoundary)?;

        // Corridor origin: midline plus offset, kept off the floor edges
        // so at least one side retains a usable band.
        let mut x_pnt = midpoint_2d(&frame_box.sw, &frame_box.se).x - width * 0.5 + params.offset;
        let x_min = frame_box.sw.x;
        let x_max = frame_box.se.x - (width + MIN_SPACE);
        if x_pnt < x_min {
            x_pnt = x_min;
        }
        if x_pnt > x_max {
            x_pnt = x_max;
        }
        if (x_pnt - x_min).abs() < TOLERANCE {
            rooms_west = 0;
        }
        if (x_pnt - x_max).abs() < TOLERANCE {
            rooms_east = 0;
        }

        let mut y_pnt = frame_box.sw.y;
        if rooms_south > 0 {
            y_pnt += south_depth;
        }
        let y_size = if rooms_north > 0 {
            (frame_box.nw.y - north_depth) - y_pnt
        } else {
            frame_box.nw.y - y_pnt
        };

        self.corridor.space_mut().set_level(frame.level());
        let origin = Point2::new(x_pnt, y_pnt);
        let points = shaper::make_box(origin, width, y_size)?;
        self.corridor
            .set_boundary_tagged(points, CorridorShape::I)?;
        if !self.corridor.space().fit_within(frame.boundary()) {
            warn!("corridor does not fit the floor outline");
            return Err(LayoutError::OutsideBoundary.into());
        }

        // West band: equal cells stacked along y, listed north to south.
        let mut west_rooms: Vec<Space> = Vec::new();
        if rooms_west > 0 {
            let x_room = origin.x - frame_box.sw.x;
            let y_room = y_size / f64::from(rooms_west);
            let room_origin = Point2::new(frame_box.sw.x, origin.y);
            let room = Space::from_boundary(shaper::make_box(room_origin, x_room, y_room)?)?;
            west_rooms.push(room.clone());
            west_rooms.extend(place_row(&room, (rooms_west - 1) as usize, Axis::Y, y_room));
            west_rooms.reverse();
            for room in &mut west_rooms {
                room.set_name(ROOM_TYPES[rng.gen_range(0..ROOM_TYPES.len())]);
            }
        }

        // East band: equal cells stacked along y, listed south to north.
        let mut east_rooms: Vec<Space> = Vec::new();
        if rooms_east > 0 {
            let x_room = frame_box.se.x - (origin.x + width);
            let y_room = y_size / f64::from(rooms_east);
            let room_origin = Point2::new(origin.x + width, origin.y);
            let room = Space::from_boundary(shaper::make_box(room_origin, x_room, y_room)?)?;
            east_rooms.push(room.clone());
            east_rooms.extend(place_row(&room, (rooms_east - 1) as usize, Axis::Y, y_room));
            for room in &mut east_rooms {
                room.set_name(ROOM_TYPES[rng.gen_range(0..ROOM_TYPES.len())]);
            }
        }

        // North band: one or two cells across the full width.
        let mut north_rooms: Vec<Space> = Vec::new();
        if rooms_north > 0 {
            let room_origin = Point2::new(frame_box.nw.x, frame_box.nw.y - north_depth);
            let mut x_room = frame_box.ne.x - frame_box.nw.x;
            if rooms_north == 2 {
                x_room *= 0.5;
            }
            let mut room =
                Space::from_boundary(shaper::make_box(room_origin, x_room, north_depth)?)?;
            room.set_name("Lobby");
            north_rooms.push(room.clone());
            if rooms_north == 2 {
                north_rooms.push(copy_offset(&room, x_room, 0.0));
                north_rooms.reverse();
            }
        }

        // South band: one or two cells across the full width.
        let mut south_rooms: Vec<Space> = Vec::new();
        if rooms_south > 0 {
            let room_origin = frame_box.sw;
            let mut x_room = frame_box.ne.x - frame_box.nw.x;
            if rooms_south == 2 {
                x_room *= 0.5;
            }
            let room = Space::from_boundary(shaper::make_box(room_origin, x_room, south_depth)?)?;
            south_rooms.push(room.clone());
            if rooms_south == 2 {
                south_rooms.push(copy_offset(&room, x_room, 0.0));
            }
            for room in &mut south_rooms {
                room.set_name(ROOM_TYPES[rng.gen_range(0..ROOM_TYPES.len())]);
            }
        }

        // Candidate order fixes the merge traversal: south, east, north,
        // west. A room failing corridor adjacency or the area threshold
        // is folded into its circular successor and dropped later.
        let mut candidates: Vec<Space> = Vec::new();
        candidates.extend(south_rooms);
        candidates.extend(east_rooms);
        candidates.extend(north_rooms);
        candidates.extend(west_rooms);

        let corridor_boundary = self.corridor.space().boundary().to_vec();
        let count = candidates.len();
        for index in 0..count {
            let adjacent =
                polygons_adjacent_2d(candidates[index].boundary(), &corridor_boundary);
            if !adjacent || candidates[index].area() < MIN_SPACE {
                let absorbed = candidates[index].boundary().to_vec();
                let successor = (index + 1) % count;
                if successor != index {
                    candidates[successor].add(&absorbed)?;
                }
            }
        }

        self.rooms.clear();
        self.rooms.extend(candidates.into_iter().filter(|room| {
            room.fit_within(frame.boundary())
                && polygons_adjacent_2d(room.boundary(), &corridor_boundary)
                && room.area() >= MIN_SPACE
        }));

        if rotation != 0.0 {
            if let Some(center) = frame.center() {
                self.corridor.space_mut().rotate_about(rotation, center);
                self.rooms.rotate_about(rotation, center);
            }
        }
        debug!(rooms = self.rooms.len(), rotation, "floor layout complete");
        Ok(())
    }
}
