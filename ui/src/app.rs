use log::error;
use roster_business::{FetchUsersCommand, FetchUsersCompute, apply_fetched_users};

use crate::{state::State, widgets};

pub struct RosterApp {
    pub state: State,
}

impl RosterApp {
    /// Called once before the first frame. Starts the member list fetch.
    pub fn new(state: State) -> Self {
        if let Err(err) = state.ctx.dispatch::<FetchUsersCommand>() {
            error!("Cannot start member fetch: {err}");
        }
        Self { state }
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Sync Compute for render
        self.state.ctx.sync_computes();
        if apply_fetched_users(&mut self.state.ctx) {
            // Rebuild the view now so the loaded rows show up in this frame.
            self.state.ctx.run_computed();
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Roster");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::user_table_panel(&mut self.state.ctx, ui);
        });

        self.state.ctx.run_computed();

        // The fetch completes on another thread and cannot wake the UI itself.
        let loading = self
            .state
            .ctx
            .cached::<FetchUsersCompute>()
            .is_some_and(FetchUsersCompute::is_loading);
        if loading {
            ctx.request_repaint();
        }
    }
}
