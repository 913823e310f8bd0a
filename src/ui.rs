// ui.rs - eframe front end: ticks the engine, dispatches keys, paints live cells

use std::time::Instant;

use eframe::egui;
use egui::{Color32, Rect, Vec2};
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::GridError;
use crate::grid::Grid;
use crate::input::{self, Action};
use crate::life;
use crate::tick::TickClock;

pub const BACKGROUND_COLOR: Color32 = Color32::from_rgb(26, 26, 36);
pub const LIVE_COLOR: Color32 = Color32::from_rgb(63, 78, 96);

pub struct LifeApp {
    grid: Grid,
    clock: TickClock,
    generation: u64,
    rng: StdRng,
}

impl LifeApp {
    /// Allocates the grid and seeds it from `rng`.
    pub fn new(config: &Config, rng: StdRng) -> Result<Self, GridError> {
        let mut app = Self {
            grid: Grid::new(config.columns, config.rows)?,
            clock: TickClock::new(config.update_interval(), Instant::now()),
            generation: 0,
            rng,
        };
        app.reset();
        Ok(app)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn reset(&mut self) {
        life::randomize(&mut self.grid, &mut self.rng);
        self.generation = 0;
        info!(population = self.grid.live_count(), "grid randomized");
    }

    /// Advances one generation if the tick interval has elapsed by `now`.
    pub fn step(&mut self, now: Instant) -> bool {
        if !self.clock.tick(now) {
            return false;
        }
        self.grid = life::advance(&self.grid);
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.grid.live_count(),
            "advanced"
        );
        true
    }

    /// Applies the actions bound to this frame's key presses.
    fn handle_input(&mut self, ctx: &egui::Context) {
        let actions = ctx.input(|i| input::actions_from_events(&i.events));
        for action in actions {
            self.dispatch(action, ctx);
        }
    }

    fn dispatch(&mut self, action: Action, ctx: &egui::Context) {
        match action {
            Action::Reset => self.reset(),
            Action::Quit => {
                info!(generation = self.generation, "quit requested");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }

    fn paint(&self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let area = response.rect;
        let cell = Vec2::new(
            area.width() / self.grid.columns() as f32,
            area.height() / self.grid.rows() as f32,
        );

        for (x, y) in self.grid.iter_live() {
            let min = area.min + Vec2::new(x as f32 * cell.x, y as f32 * cell.y);
            painter.rect_filled(Rect::from_min_size(min, cell), 0.0, LIVE_COLOR);
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.step(Instant::now());
        self.handle_input(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND_COLOR))
            .show(ctx, |ui| self.paint(ui));

        ctx.request_repaint();
    }
}
