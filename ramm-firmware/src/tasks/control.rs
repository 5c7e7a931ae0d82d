//! Control task
//!
//! Single owner of the robot: applies queued commands, advances the sweep
//! and renders every position change to the OLED.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_time::Timer;

use ramm_core::config::PacingConfig;
use ramm_core::robot::Applied;
use ramm_core::traits::ModeIndicators;
use ramm_core::{Oled128x64, Position, RobotStateMachine, Scene};
use ramm_display::Ssd1306;

use crate::channels::COMMAND_CHANNEL;

/// OLED on I2C1
pub type Display = Ssd1306<I2c<'static, I2C1, i2c::Async>>;

/// Manual and automatic mode LEDs
pub type Indicators = ModeIndicators<Output<'static>, Output<'static>>;

/// Framebuffer, scene and panel, kept in step
struct Renderer {
    display: Display,
    fb: Oled128x64,
    scene: Scene,
    pacing: PacingConfig,
}

impl Renderer {
    /// Lay the dust field one tile at a time, then place the robot
    async fn boot(&mut self, position: Position) -> Result<(), i2c::Error> {
        self.fb.fill(false);

        let tiles = self.scene.dust_tiles(self.fb.width(), self.fb.height());
        for tile in tiles {
            self.scene.draw_dust(&mut self.fb, tile);
            self.display.present(&self.fb).await?;
            Timer::after_millis(self.pacing.dust_pause_ms.into()).await;
        }

        if let Some(frame) = self.scene.diff(position) {
            self.scene.draw(&mut self.fb, frame);
            self.display.present(&self.fb).await?;
            self.scene.commit(frame);
        }
        Timer::after_millis(self.pacing.frame_pause_ms.into()).await;

        Ok(())
    }

    /// Move the robot on screen if it changed cell
    ///
    /// The new cell is shown before the old one is cleared. The frame is
    /// only committed once both updates reached the panel; after a failed
    /// transfer the next diff also clears the cell drawn by this one.
    async fn update(&mut self, position: Position) -> Result<(), i2c::Error> {
        let Some(frame) = self.scene.diff(position) else {
            return Ok(());
        };

        self.scene.draw(&mut self.fb, frame);
        self.display.present(&self.fb).await?;
        Timer::after_millis(self.pacing.frame_pause_ms.into()).await;

        self.scene.erase(&mut self.fb, frame);
        self.display.present(&self.fb).await?;
        self.scene.commit(frame);

        Ok(())
    }
}

/// Control task - drives the robot and the display
#[embassy_executor::task]
pub async fn control_task(display: Display, mut indicators: Indicators, pacing: PacingConfig) {
    info!("Control task started");

    let mut robot = RobotStateMachine::new();
    let mut renderer = Renderer {
        display,
        fb: Oled128x64::new(),
        scene: Scene::default(),
        pacing,
    };

    if let Err(e) = renderer.boot(robot.position()).await {
        warn!("Boot animation failed: {:?}", e);
    }
    info!("Robot ready at {}", robot.position());

    loop {
        while let Ok(command) = COMMAND_CHANNEL.try_receive() {
            let Applied {
                mode_changed,
                motion,
            } = robot.apply(command);
            debug!("{:?} -> {:?}", command, motion);

            if let Some(mode) = mode_changed {
                info!("Mode: {:?}", mode);
            }
            let Ok(_) = indicators.sync(robot.mode());
        }

        if let Err(e) = renderer.update(robot.position()).await {
            warn!("Display update failed: {:?}", e);
        }

        if robot.mode().is_automatic() {
            if let Some(event) = robot.tick() {
                trace!("Sweep: {:?}", event);
            }
            Timer::after_millis(pacing.auto_step_interval_ms.into()).await;
        }

        Timer::after_millis(pacing.loop_interval_ms.into()).await;
    }
}
