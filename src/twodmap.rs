// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field, sized to match an image,
/// holding one value per pixel: a visited flag while walking the
/// islands, or a membership flag for the island being kept.
#[derive(Debug, Clone)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    pub width: u32,
    pub height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map with every cell at its default value.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    // Keep the index math in one place and never mess with it.  Same
    // row-major layout that ImageBuffer uses.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Reset every cell to its default value, keeping the allocation.
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = P::default());
    }

    /// The four axis-aligned neighbours of a point that fall inside
    /// the map.  No diagonals.
    pub fn neighbors(&self, x: u32, y: u32) -> impl Iterator<Item = (u32, u32)> {
        let (width, height) = (self.width, self.height);
        let up = if y > 0 { Some((x, y - 1)) } else { None };
        let down = if y + 1 < height { Some((x, y + 1)) } else { None };
        let left = if x > 0 { Some((x - 1, y)) } else { None };
        let right = if x + 1 < width { Some((x + 1, y)) } else { None };
        up.into_iter().chain(down).chain(left).chain(right)
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}
