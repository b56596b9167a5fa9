//! Discovering the valid cells by walking outward from the origin cell.
//!
//! Every walk steps from a start cell in one direction and stops at the
//! first invalid cell it meets. The search order is:
//!
//! 1. the origin `(0, 0)`;
//! 2. upward along column 0, and for each row reached (including the row
//!    whose column-0 cell ends the upward walk) a left and a right walk;
//! 3. the same downward;
//! 4. left and right along row 0.
//!
//! # Known limitation
//!
//! Expansion assumes validity is monotonic along every walk: once a cell is
//! off the page, every further cell in that direction is too. That holds for
//! an unrotated grid, but a rotated and offset grid can leave the page and
//! re-enter it along one row or column. Cells past such a gap are never
//! visited and so never recorded.

use super::placer::{CardPlacer, PlacedCard};
use super::registry::CardRegistry;
use crate::log;
use crate::params::PageSetup;
use crate::types::GridCoord;

/// One of the four grid axes a walk can follow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Grid step; `y` grows downward.
    pub const fn step(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// Counters gathered during one expansion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpansionStats {
    /// Total cards placed and tested, valid or not
    pub placements: usize,
    /// Number of walks started
    pub walks: usize,
    /// Most placements made by a single left/right walk
    pub longest_horizontal: usize,
    /// Most placements made by a single up/down walk
    pub longest_vertical: usize,
}

impl ExpansionStats {
    fn note(&mut self, dir: Direction, placements: usize) {
        self.walks += 1;
        self.placements += placements;
        let longest = if dir.is_vertical() {
            &mut self.longest_vertical
        } else {
            &mut self.longest_horizontal
        };
        *longest = (*longest).max(placements);
    }
}

/// Steps away from a start cell, yielding each placed card up to and
/// including the first invalid one.
pub struct Walk<'a> {
    placer: &'a CardPlacer,
    dir: Direction,
    next: GridCoord,
    placements: usize,
    max_steps: usize,
    done: bool,
}

impl Walk<'_> {
    /// Cards placed so far, including the one that ended the walk
    pub fn placements(&self) -> usize {
        self.placements
    }
}

impl Iterator for Walk<'_> {
    type Item = PlacedCard;

    fn next(&mut self) -> Option<PlacedCard> {
        if self.done {
            return None;
        }
        if self.placements >= self.max_steps {
            log::warn!(
                "walk {:?} hit the step cap of {} at {}",
                self.dir,
                self.max_steps,
                self.next
            );
            self.done = true;
            return None;
        }
        let card = self.placer.place(self.next);
        self.placements += 1;
        self.done = !card.valid;
        let (dx, dy) = self.dir.step();
        self.next = self.next.offset(dx, dy);
        Some(card)
    }
}

/// Finds every valid cell reachable from the origin under the monotonic
/// validity assumption (see the module docs).
#[derive(Debug, Clone, Copy)]
pub struct GridExpander {
    placer: CardPlacer,
    max_steps: usize,
}

impl GridExpander {
    pub fn new(setup: PageSetup) -> Self {
        GridExpander {
            placer: CardPlacer::new(setup),
            max_steps: step_cap(&setup),
        }
    }

    /// Walk from `start` (exclusive) in `dir`.
    pub fn walk(&self, start: GridCoord, dir: Direction) -> Walk<'_> {
        let (dx, dy) = dir.step();
        Walk {
            placer: &self.placer,
            dir,
            next: start.offset(dx, dy),
            placements: 0,
            max_steps: self.max_steps,
            done: false,
        }
    }

    /// Run the full search and return the recorded cells.
    pub fn expand(&self) -> (CardRegistry, ExpansionStats) {
        let mut registry = CardRegistry::new();
        let mut stats = ExpansionStats::default();

        let setup = self.placer.setup();
        if !setup.card.has_positive_sides() || !setup.paper.has_positive_sides() {
            log::warn!("nothing to tile: {} cards on a {} page", setup.card, setup.paper);
            return (registry, stats);
        }

        let origin = self.placer.place(GridCoord::ORIGIN);
        stats.placements += 1;
        if origin.valid {
            registry.record(origin);
        }

        for dir in [Direction::Up, Direction::Down] {
            let mut column = self.walk(GridCoord::ORIGIN, dir);
            for cell in column.by_ref() {
                self.expand_row(cell.coord, &mut registry, &mut stats);
                if cell.valid {
                    registry.record(cell);
                }
            }
            stats.note(dir, column.placements());
        }

        self.expand_row(GridCoord::ORIGIN, &mut registry, &mut stats);

        log::debug!(
            "expansion found {} cells with {} placements over {} walks",
            registry.len(),
            stats.placements,
            stats.walks
        );
        (registry, stats)
    }

    /// Left then right walks from `start`, recording valid cells.
    fn expand_row(&self, start: GridCoord, registry: &mut CardRegistry, stats: &mut ExpansionStats) {
        for dir in [Direction::Left, Direction::Right] {
            let mut walk = self.walk(start, dir);
            for cell in walk.by_ref().filter(|c| c.valid) {
                registry.record(cell);
            }
            stats.note(dir, walk.placements());
        }
    }
}

/// Upper bound on placements for a single walk.
///
/// A valid card's centre lies on the page, so it is at most half a diagonal
/// from the page centre; the grid offset moves cells by at most its length;
/// each step moves at least the shorter card side.
fn step_cap(setup: &PageSetup) -> usize {
    let reach = setup.paper.to_vec().length() * 0.5 + setup.offset.length();
    let stride = setup.card.w.raw().min(setup.card.h.raw());
    // Degenerate sizes saturate here; `expand` refuses them before walking.
    ((reach / stride).ceil() as usize).saturating_add(2)
}
