use crate::agents::{
    human_seat_for_play, suggested_action, Action, AgentTable, BotAgent, BotProfile, HumanAgent,
    Scoreboard,
};
use crate::bidding::Call;
use crate::game::{DealConfig, Game, Phase};
use crate::scoring::Vulnerability;
use crate::seat::Seat;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// How vulnerability is chosen for each deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum VulnerabilityMode {
    None,
    Both,
    NorthSouth,
    EastWest,
    /// Follow the duplicate board cycle.
    ByBoard,
}

impl VulnerabilityMode {
    const ALL: [VulnerabilityMode; 5] = [
        VulnerabilityMode::None,
        VulnerabilityMode::Both,
        VulnerabilityMode::NorthSouth,
        VulnerabilityMode::EastWest,
        VulnerabilityMode::ByBoard,
    ];

    pub fn label(self) -> &'static str {
        match self {
            VulnerabilityMode::None => "None",
            VulnerabilityMode::Both => "Both",
            VulnerabilityMode::NorthSouth => "NS",
            VulnerabilityMode::EastWest => "EW",
            VulnerabilityMode::ByBoard => "By board",
        }
    }

    pub fn for_deal(self, deal_number: u32) -> Vulnerability {
        match self {
            VulnerabilityMode::None => Vulnerability::NONE,
            VulnerabilityMode::Both => Vulnerability::BOTH,
            VulnerabilityMode::NorthSouth => Vulnerability::NORTH_SOUTH,
            VulnerabilityMode::EastWest => Vulnerability::EAST_WEST,
            VulnerabilityMode::ByBoard => Vulnerability::for_board(deal_number),
        }
    }

    pub(crate) fn cycle(self, step: isize) -> Self {
        let n = Self::ALL.len() as isize;
        let i = Self::ALL.iter().position(|&m| m == self).unwrap_or(0) as isize;
        Self::ALL[(i + step).rem_euclid(n) as usize]
    }
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    NewDeal,
    ChoiceNext,
    ChoicePrev,
    Submit,
    Pass,
    Hint,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub started: Instant,
    // Core game engine instance
    pub game: Game,
    pub agents: AgentTable,
    pub scoreboard: Scoreboard,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg_home_seat: Seat,
    pub cfg_vulnerability: VulnerabilityMode,
    pub cfg_bot_delay_ms: u64,
    pub cfg_seed: Option<u64>,
    // Applied config
    pub home_seat: Seat,
    pub vulnerability_mode: VulnerabilityMode,
    pub bot_delay_ms: u64,
    pub seed: Option<u64>,
    pub deal_started: bool,
    human_seat: Seat,
    choice: usize,
    scored: bool,
    help_open: bool,
    history_open: bool,
    history_offset: usize,
    notice: Option<String>,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        let mode = VulnerabilityMode::None;
        let default_delay = 400;
        Self {
            scene: Scene::Menu,
            started: Instant::now(),
            game: Game::new(DealConfig::default().with_vulnerability(mode.for_deal(1))),
            agents: AgentTable::new(),
            scoreboard: Scoreboard::default(),
            menu_index: 0,
            cfg_home_seat: Seat::South,
            cfg_vulnerability: mode,
            cfg_bot_delay_ms: default_delay,
            cfg_seed: None,
            home_seat: Seat::South,
            vulnerability_mode: mode,
            bot_delay_ms: default_delay,
            seed: None,
            deal_started: false,
            human_seat: Seat::South,
            choice: 0,
            scored: false,
            help_open: false,
            history_open: false,
            history_offset: 0,
            notice: None,
            action_error: None,
            action_error_at: None,
        }
    }
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);

    /// Seat the human currently plays from.
    pub fn human_seat(&self) -> Seat {
        self.human_seat
    }

    /// The seat the human must act for now (their own or, as declarer, dummy).
    pub fn human_turn(&self) -> Option<Seat> {
        if self.scene != Scene::Table || !self.deal_started {
            return None;
        }
        let seat = self.game.to_act()?;
        (self.game.controller_of(seat) == self.human_seat).then_some(seat)
    }

    /// Legal actions offered to the human, in display order.
    pub fn choices(&self) -> Vec<Action> {
        let Some(seat) = self.human_turn() else {
            return Vec::new();
        };
        match self.game.phase() {
            Phase::Bidding => std::iter::once(Call::Pass)
                .chain(self.game.auction().legal_bids().map(Call::Bid))
                .map(Action::Call)
                .collect(),
            Phase::Playing => self.game.legal_cards(seat).into_iter().map(Action::Play).collect(),
            _ => Vec::new(),
        }
    }

    pub fn choice_index(&self) -> usize {
        self.choice
    }

    pub fn selected_choice(&self) -> Option<Action> {
        let choices = self.choices();
        choices.get(self.choice.min(choices.len().saturating_sub(1))).copied()
    }

    fn move_choice(&mut self, step: isize) {
        let n = self.choices().len() as isize;
        if n == 0 {
            self.choice = 0;
            return;
        }
        self.choice = (self.choice as isize + step).rem_euclid(n) as usize;
    }

    fn queue_action(&mut self, action: Action) -> bool {
        if self.human_turn().is_none() {
            return false;
        }
        self.clear_action_error();
        self.agents.receive(self.human_seat, action)
    }

    fn hint(&mut self) {
        let Some(seat) = self.human_turn() else {
            return;
        };
        if let Some(action) = suggested_action(&self.game, seat) {
            if let Some(i) = self.choices().iter().position(|&a| a == action) {
                self.choice = i;
            }
        }
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn close_history(&mut self) {
        self.history_open = false;
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.history_open = false;
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::ToggleHistory => {
                if self.scene == Scene::Table {
                    self.help_open = false;
                    if !self.history_open {
                        self.history_offset = 0;
                    }
                    self.history_open = !self.history_open;
                }
                false
            }
            InputAction::HistoryUp => {
                if self.scene == Scene::Table && self.history_open {
                    let max_offset =
                        self.game.history_len().saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.scene == Scene::Table && self.history_open && self.history_offset > 0 {
                    self.history_offset -= 1;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::NewDeal => {
                if self.scene == Scene::Table {
                    self.new_deal();
                }
                false
            }
            InputAction::ChoiceNext => {
                self.move_choice(1);
                false
            }
            InputAction::ChoicePrev => {
                self.move_choice(-1);
                false
            }
            InputAction::Submit => match self.selected_choice() {
                Some(action) => self.queue_action(action),
                None => false,
            },
            InputAction::Pass => {
                self.game.phase() == Phase::Bidding && self.queue_action(Action::Call(Call::Pass))
            }
            InputAction::Hint => {
                self.hint();
                false
            }
        }
    }

    /// Deal the next board. Ignored while a deal is still being bid or played.
    pub fn new_deal(&mut self) {
        if self.deal_started && matches!(self.game.phase(), Phase::Bidding | Phase::Playing) {
            return;
        }
        if self.deal_started {
            self.deal_next();
        } else {
            self.deal_started = true;
        }
        self.notice = None;
    }

    fn deal_next(&mut self) {
        let next = self.game.deal_number() + 1;
        self.game.set_vulnerability(self.vulnerability_mode.for_deal(next));
        self.game.new_deal(None);
        self.reseat(self.home_seat);
        self.choice = 0;
        self.scored = false;
        self.history_offset = 0;
        self.clear_action_error();
    }

    fn reseat(&mut self, target: Seat) {
        if target != self.human_seat {
            self.agents.swap(self.human_seat, target);
            self.human_seat = target;
        }
    }

    /// Follow the deal through its phase changes: move the human to the
    /// declarer's chair, redeal a passed-out board, and bank the score.
    fn sync_deal(&mut self) {
        match self.game.phase() {
            Phase::Playing => {
                if let Some(contract) = self.game.contract() {
                    self.reseat(human_seat_for_play(contract, self.home_seat));
                }
            }
            Phase::Void => {
                log::info!("deal {} passed out; redealing", self.game.deal_number());
                self.deal_next();
                self.notice = Some("Passed out. Redealt.".to_string());
            }
            Phase::Complete => {
                if let (false, Some(score)) = (self.scored, self.game.score()) {
                    self.scoreboard.record(&score);
                    self.notice = Some(score.summary());
                    self.scored = true;
                }
            }
            _ => {}
        }
        let n = self.choices().len();
        if self.choice >= n {
            self.choice = n.saturating_sub(1);
        }
    }

    pub fn agents_on_turn(&mut self) {
        if self.scene != Scene::Table || !self.deal_started {
            return;
        }
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
        match self.agents.on_turn(&mut self.game) {
            Ok(true) => {
                self.clear_action_error();
                self.choice = 0;
            }
            Ok(false) => {}
            Err(err) => {
                self.action_error = Some(err.to_string());
                self.action_error_at = Some(Instant::now());
            }
        }
        self.sync_deal();
    }

    pub(crate) fn install_agents(&mut self) {
        self.agents = AgentTable::new();
        self.agents.set_min_action_delay_ms(self.bot_delay_ms / 2);
        for seat in Seat::ALL {
            if seat == self.home_seat {
                self.agents.set_agent(seat, Some(Box::new(HumanAgent::new())));
                continue;
            }
            let mut profile = BotProfile::default().with_delay_ms(self.bot_delay_ms);
            if let Some(seed) = self.seed {
                profile = profile.with_seed(seed.wrapping_add(seat.index() as u64));
            }
            self.agents.set_agent(seat, Some(Box::new(BotAgent::new(profile))));
        }
        self.human_seat = self.home_seat;
    }
}
