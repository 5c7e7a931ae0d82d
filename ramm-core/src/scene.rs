//! Scene renderer
//!
//! Turns robot positions into framebuffer edits. The scene starts as a
//! field of dust tiles with the robot on top; every time the robot changes
//! cell the new cell is drawn and the old one is cleared, which also wipes
//! the dust the robot has passed over.

use crate::config::SceneConfig;
use crate::graphics::Framebuffer;
use crate::robot::Position;

/// A pending redraw from one rendered position to the next
///
/// Drawing and erasing are separate so the caller can present the
/// framebuffer in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameDiff {
    /// Last committed position still on screen, `None` before the first
    /// frame or when the robot is back on it
    pub previous: Option<Position>,
    /// Position to render
    pub current: Position,
    /// Cell drawn by an earlier diff that was never committed
    pub stale: Option<Position>,
    side: u8,
}

impl FrameDiff {
    fn draw<const W: usize, const P: usize>(&self, fb: &mut Framebuffer<W, P>) {
        if let Some(stale) = self.stale {
            self.clear(fb, stale);
        }
        let Position { x, y } = self.current;
        fb.draw_square(self.side.into(), x.into(), y.into());
    }

    fn erase<const W: usize, const P: usize>(&self, fb: &mut Framebuffer<W, P>) {
        if let Some(previous) = self.previous {
            self.clear(fb, previous);
        }
    }

    fn clear<const W: usize, const P: usize>(&self, fb: &mut Framebuffer<W, P>, at: Position) {
        fb.erase_square(self.side.into(), at.x.into(), at.y.into());
    }
}

/// Tracks what is currently on screen
///
/// At most two robot cells are ever in the framebuffer: the committed one
/// and the one drawn by a diff that has not been committed yet.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Scene {
    config: SceneConfig,
    rendered: Option<Position>,
    drawn: Option<Position>,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            rendered: None,
            drawn: None,
        }
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Position of the robot currently in the framebuffer
    pub fn rendered(&self) -> Option<Position> {
        self.rendered
    }

    /// Top-left corners of the dust tiles covering a `width` x `height` area
    ///
    /// Tiles are yielded column by column.
    pub fn dust_tiles(&self, width: usize, height: usize) -> impl Iterator<Item = (u16, u16)> {
        let origin = usize::from(self.config.dust_origin);
        let spacing = usize::from(self.config.dust_spacing).max(1);

        (origin..width).step_by(spacing).flat_map(move |x| {
            (origin..height)
                .step_by(spacing)
                .filter_map(move |y| Some((u16::try_from(x).ok()?, u16::try_from(y).ok()?)))
        })
    }

    /// Draw a single dust tile
    pub fn draw_dust<const W: usize, const P: usize>(
        &self,
        fb: &mut Framebuffer<W, P>,
        (x, y): (u16, u16),
    ) {
        fb.draw_square(self.config.dust_side.into(), x, y);
    }

    /// Render the whole scene from scratch
    pub fn draw_initial<const W: usize, const P: usize>(
        &mut self,
        fb: &mut Framebuffer<W, P>,
        position: Position,
    ) {
        fb.fill(false);
        for tile in self.dust_tiles(fb.width(), fb.height()) {
            self.draw_dust(fb, tile);
        }
        self.rendered = None;
        self.drawn = None;
        let frame = FrameDiff {
            previous: None,
            current: position,
            stale: None,
            side: self.config.robot_side,
        };
        self.draw(fb, frame);
        self.commit(frame);
    }

    /// Work out what must change to show the robot at `position`
    ///
    /// Returns `None` when the robot is already rendered there and nothing
    /// else is left on screen.
    pub fn diff(&self, position: Position) -> Option<FrameDiff> {
        let stale = self
            .drawn
            .filter(|&drawn| Some(drawn) != self.rendered && drawn != position);
        if self.rendered == Some(position) && stale.is_none() {
            return None;
        }
        Some(FrameDiff {
            previous: self.rendered.filter(|&rendered| rendered != position),
            current: position,
            stale,
            side: self.config.robot_side,
        })
    }

    /// Draw the robot at its new cell, clearing any uncommitted cell first
    pub fn draw<const W: usize, const P: usize>(
        &mut self,
        fb: &mut Framebuffer<W, P>,
        frame: FrameDiff,
    ) {
        frame.draw(fb);
        self.drawn = Some(frame.current);
    }

    /// Clear the robot's previous cell
    pub fn erase<const W: usize, const P: usize>(
        &self,
        fb: &mut Framebuffer<W, P>,
        frame: FrameDiff,
    ) {
        frame.erase(fb);
    }

    /// Record a diff as rendered
    pub fn commit(&mut self, frame: FrameDiff) {
        self.rendered = Some(frame.current);
        self.drawn = None;
    }

    /// Apply a diff in one go (draw, erase, commit)
    pub fn render<const W: usize, const P: usize>(
        &mut self,
        fb: &mut Framebuffer<W, P>,
        position: Position,
    ) -> Option<FrameDiff> {
        let frame = self.diff(position)?;
        self.draw(fb, frame);
        self.erase(fb, frame);
        self.commit(frame);
        Some(frame)
    }
}
