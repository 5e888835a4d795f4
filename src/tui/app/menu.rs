use crate::game::{DealConfig, Game};
use crate::seat::Seat;

use super::AppState;

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    HomeSeat,
    Vulnerability,
    BotDelayMs,
    Seed,
}

const MENU_ITEMS: [MenuItem; 4] =
    [MenuItem::HomeSeat, MenuItem::Vulnerability, MenuItem::BotDelayMs, MenuItem::Seed];

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::HomeSeat => format!("Your Seat: {}", app.cfg_home_seat.name()),
            MenuItem::Vulnerability => format!("Vulnerability: {}", app.cfg_vulnerability.label()),
            MenuItem::BotDelayMs => format!("Bot Delay (ms): {}", app.cfg_bot_delay_ms),
            MenuItem::Seed => match app.cfg_seed {
                Some(seed) => format!("Seed: {seed}"),
                None => "Seed: random".to_string(),
            },
        }
    }

    fn inc(self, app: &mut AppState) {
        match self {
            MenuItem::HomeSeat => app.cfg_home_seat = app.cfg_home_seat.next(),
            MenuItem::Vulnerability => app.cfg_vulnerability = app.cfg_vulnerability.cycle(1),
            MenuItem::BotDelayMs => {
                app.cfg_bot_delay_ms = app.cfg_bot_delay_ms.saturating_add(100);
            }
            MenuItem::Seed => {
                app.cfg_seed = Some(app.cfg_seed.map_or(1, |s| s.saturating_add(1)));
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        match self {
            MenuItem::HomeSeat => app.cfg_home_seat = app.cfg_home_seat.offset(3),
            MenuItem::Vulnerability => app.cfg_vulnerability = app.cfg_vulnerability.cycle(-1),
            MenuItem::BotDelayMs => {
                app.cfg_bot_delay_ms = app.cfg_bot_delay_ms.saturating_sub(100);
            }
            // Stepping below 1 returns to a random seed.
            MenuItem::Seed => {
                app.cfg_seed = match app.cfg_seed {
                    Some(s) if s > 1 => Some(s - 1),
                    _ => None,
                };
            }
        }
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.scene = match self.scene {
            super::Scene::Menu => super::Scene::Table,
            _ => {
                self.open_menu();
                super::Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.menu_index = 0;
        self.cfg_home_seat = self.home_seat;
        self.cfg_vulnerability = self.vulnerability_mode;
        self.cfg_bot_delay_ms = self.bot_delay_ms;
        self.cfg_seed = self.seed;
        self.scene = super::Scene::Menu;
    }

    /// Start a fresh rubber of deals with the edited settings.
    pub fn apply_menu(&mut self) {
        self.home_seat = self.cfg_home_seat;
        self.vulnerability_mode = self.cfg_vulnerability;
        self.bot_delay_ms = self.cfg_bot_delay_ms;
        self.seed = self.cfg_seed;

        let mut config = DealConfig::default()
            .with_vulnerability(self.vulnerability_mode.for_deal(1))
            .with_dealer(Seat::North);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        self.game = Game::new(config);
        self.install_agents();
        self.scoreboard = Default::default();
        self.deal_started = false;
        self.scene = super::Scene::Table;
        log::info!(
            "table ready: home {}, vulnerability {}, seed {:?}",
            self.home_seat,
            self.vulnerability_mode.label(),
            self.seed
        );
    }

    pub fn cancel_menu(&mut self) {
        self.scene = super::Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
