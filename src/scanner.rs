//! Scanner bar animation state
//!
//! The bar center sweeps back and forth across the panel: it moves by a fixed
//! step each tick and bounces off the travel bounds `[width / 2, WIDTH - width / 2]`.
//! A move that would reach or cross a bound lands exactly on it and reverses
//! direction, so an advanced position is never outside the bounds.
//!
//! ## Example
//!
//! ```
//! use ssd1351_splash::Scanner;
//!
//! let mut scanner = Scanner::default();
//! assert_eq!(scanner.center(), 0);
//! assert_eq!(scanner.advance(), 10); // clamped onto the lower bound
//! assert_eq!(scanner.advance(), 14);
//! ```

use crate::frame::WIDTH;

/// Direction of travel of the bar center
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Toward higher columns
    #[default]
    Forward,
    /// Toward column 0
    Backward,
}

impl Direction {
    /// +1 or -1
    pub const fn sign(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Position and direction of the scanner bar
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scanner {
    center: i32,
    direction: Direction,
    width: i32,
    step: i32,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_STEP)
    }
}

impl Scanner {
    /// Full bar width in columns
    pub const DEFAULT_WIDTH: i32 = 20;
    /// Columns moved per tick
    pub const DEFAULT_STEP: i32 = 4;

    /// Start at column 0 moving forward
    ///
    /// `width` is expected in `2..=WIDTH` and `step` positive; the
    /// [`Builder`](crate::Builder) validates both.
    pub const fn new(width: i32, step: i32) -> Self {
        Self {
            center: 0,
            direction: Direction::Forward,
            width,
            step,
        }
    }

    /// Current bar center column
    pub const fn center(&self) -> i32 {
        self.center
    }

    /// Current direction of travel
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Full bar width; also the distance at which the gradient goes dark
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Lowest and highest center column reachable by [`advance`](Self::advance)
    pub const fn bounds(&self) -> (i32, i32) {
        let margin = self.width / 2;
        (margin, WIDTH as i32 - margin)
    }

    /// Move one step, bouncing off the travel bounds, and return the new center
    pub fn advance(&mut self) -> i32 {
        let (low, high) = self.bounds();
        self.center += self.step * self.direction.sign();

        if self.center >= high {
            self.center = high;
            self.direction = Direction::Backward;
        } else if self.center <= low {
            self.center = low;
            self.direction = Direction::Forward;
        }

        self.center
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn positions(scanner: &mut Scanner, ticks: usize) -> Vec<i32> {
        (0..ticks).map(|_| scanner.advance()).collect()
    }

    #[test]
    fn test_default_bounds() {
        assert_eq!(Scanner::default().bounds(), (10, 118));
    }

    #[test]
    fn test_first_move_clamps_onto_lower_bound() {
        let mut scanner = Scanner::default();
        assert_eq!(scanner.advance(), 10);
        assert_eq!(scanner.direction(), Direction::Forward);
    }

    #[test]
    fn test_sweep_is_bounded_triangle_wave() {
        let mut scanner = Scanner::default();
        let sweep = positions(&mut scanner, 55);

        let up: Vec<i32> = (10..=118).step_by(4).collect();
        assert_eq!(sweep[..up.len()], up[..]);
        assert_eq!(scanner.center(), 10);

        let down: Vec<i32> = (10..=114).rev().step_by(4).collect();
        assert_eq!(sweep[up.len()..up.len() + down.len()], down[..]);
    }

    #[test]
    fn test_direction_flips_at_upper_bound() {
        let mut scanner = Scanner::default();
        while scanner.advance() != 118 {}
        assert_eq!(scanner.direction(), Direction::Backward);
        assert_eq!(scanner.advance(), 114);
    }

    #[test]
    fn test_uneven_step_clamps_without_overshoot() {
        let mut scanner = Scanner::new(20, 7);
        let sweep = positions(&mut scanner, 200);
        assert!(sweep.iter().all(|&c| (10..=118).contains(&c)));
        assert!(sweep.contains(&118));
        assert!(sweep.contains(&10));
    }

    #[test]
    fn test_each_tick_moves_at_most_one_step() {
        let mut scanner = Scanner::default();
        let sweep = positions(&mut scanner, 500);
        for pair in sweep.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert_ne!(a, b);
            assert!((a - b).abs() <= Scanner::DEFAULT_STEP);
        }
    }
}
