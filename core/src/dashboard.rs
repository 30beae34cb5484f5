//! The dashboard: one handler call per operator interaction.
//!
//! EVERY INTERACTION:
//!   1. Check the login gate.
//!   2. Load the full table from the store (if the command needs it).
//!   3. Apply at most one mutation.
//!   4. Persist the whole table.
//!
//! RULES:
//!   - The dashboard holds no table between interactions. `state()`
//!     re-reads the file every time.
//!   - All randomness flows through the injected `PriceRng` streams.
//!   - Session state is passed in by the caller, never kept here.

use crate::{
    clock::Clock,
    command::DashboardCommand,
    config::DashboardConfig,
    error::{WatchError, WatchResult},
    event::Notice,
    market::{generate_demo, perturb_competitor_prices},
    record::PriceRecord,
    rng::{PriceRng, RngBank, StreamSlot},
    session::Session,
    snapshot::DashboardState,
    store::PriceStore,
    types::Price,
    view::{derive_region, market_comparison, price_strategy, summarize},
};

pub struct Dashboard {
    config:   DashboardConfig,
    store:    PriceStore,
    clock:    Clock,
    demo_rng: Box<dyn PriceRng>,
    live_rng: Box<dyn PriceRng>,
}

impl Dashboard {
    /// Build a dashboard on the configured data file, with the system
    /// clock and both random streams derived from `seed`.
    pub fn new(config: DashboardConfig, seed: u64) -> Self {
        let bank = RngBank::new(seed);
        Self {
            store:    PriceStore::open(&config.data_file),
            clock:    Clock::System,
            demo_rng: Box::new(bank.for_stream(StreamSlot::Demo)),
            live_rng: Box::new(bank.for_stream(StreamSlot::LiveUpdate)),
            config,
        }
    }

    pub fn with_store(mut self, store: PriceStore) -> Self {
        self.store = store;
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Replace both random streams, e.g. with scripted sequences in tests.
    pub fn with_rngs(mut self, demo: Box<dyn PriceRng>, live: Box<dyn PriceRng>) -> Self {
        self.demo_rng = demo;
        self.live_rng = live;
        self
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn store(&self) -> &PriceStore {
        &self.store
    }

    /// A fresh session holding only the configured default account.
    pub fn open_session(&self) -> Session {
        Session::new(&self.config.default_account)
    }

    /// Run one interaction.
    ///
    /// Operator-fixable failures come back as rejection notices with the
    /// table untouched. Only I/O and similar failures are returned as `Err`.
    pub fn handle(
        &mut self,
        session: &mut Session,
        command: DashboardCommand,
    ) -> WatchResult<Vec<Notice>> {
        let name = command.name();
        if command.requires_login() && !session.is_logged_in() {
            log::warn!("{name}: rejected, not logged in");
            return Ok(vec![Notice::LoginRequired { command: name.to_string() }]);
        }

        match self.apply(session, command) {
            Ok(notices) => Ok(notices),
            Err(e) if e.is_user_facing() => {
                log::warn!("{name}: rejected: {e}");
                Ok(vec![rejection(name, &e)])
            }
            Err(e) => Err(e),
        }
    }

    fn apply(
        &mut self,
        session: &mut Session,
        command: DashboardCommand,
    ) -> WatchResult<Vec<Notice>> {
        let notice = match command {
            DashboardCommand::Login { username, password } => {
                if session.login(&username, &password) {
                    log::debug!("login: '{username}' accepted");
                    Notice::LoggedIn { username }
                } else {
                    Notice::LoginRejected
                }
            }
            DashboardCommand::Register { username, password } => {
                session.accounts.register(&username, &password)?;
                Notice::Registered { username }
            }
            DashboardCommand::Logout => {
                session.logout();
                Notice::LoggedOut
            }
            DashboardCommand::LoadDemo => {
                let table = generate_demo(&self.config.demo, self.clock.today(), self.demo_rng.as_mut());
                self.store.save(&table)?;
                Notice::DemoLoaded { rows: table.len() }
            }
            DashboardCommand::LiveUpdate => {
                let table = self.store.load()?;
                let table = perturb_competitor_prices(&table, self.config.live_jitter, self.live_rng.as_mut());
                self.store.save(&table)?;
                Notice::PricesRefreshed { rows: table.len() }
            }
            DashboardCommand::AddDish {
                region,
                dish,
                own_price,
                competitor_a_price,
                competitor_b_price,
            } => {
                let record = PriceRecord::new(
                    region.clone(),
                    dish.clone(),
                    required("own_price", own_price)?,
                    required("competitor_a_price", competitor_a_price)?,
                    required("competitor_b_price", competitor_b_price)?,
                    self.clock.today(),
                );
                let table = self.store.load()?;
                let table = table.append(record)?;
                self.store.save(&table)?;
                Notice::DishAdded { region, dish }
            }
            DashboardCommand::SelectRegion { region } => {
                let table = self.store.load()?;
                if !table.regions().contains(&region.as_str()) {
                    return Err(WatchError::InvalidInput(format!("unknown region '{region}'")));
                }
                session.select_region(region.clone());
                Notice::RegionSelected { region }
            }
        };
        Ok(vec![notice])
    }

    /// Render the current view for `session` from a fresh read of the file.
    ///
    /// The selected region falls back to the first region in the table
    /// when nothing is selected or the selection no longer exists.
    pub fn state(&self, session: &Session) -> WatchResult<DashboardState> {
        let Some(user) = session.user() else {
            return Ok(DashboardState::logged_out());
        };

        let table = self.store.load()?;
        let regions: Vec<String> = table.regions().into_iter().map(String::from).collect();
        let Some(first) = regions.first() else {
            return Ok(DashboardState::empty_table(user));
        };

        let selected = session
            .selected_region()
            .filter(|r| regions.iter().any(|known| known == r))
            .unwrap_or(first.as_str())
            .to_string();

        let rows = derive_region(&table, &selected, self.config.suggested_ratio)?;
        Ok(DashboardState {
            logged_in:       true,
            user:            Some(user.to_string()),
            summary:         Some(summarize(&selected, &rows)),
            charts:          vec![market_comparison(&rows), price_strategy(&rows)],
            selected_region: Some(selected),
            regions,
            rows,
            hint:            None,
        })
    }
}

fn required(field: &str, value: Option<Price>) -> WatchResult<Price> {
    value.ok_or_else(|| WatchError::InvalidInput(format!("{field} is required")))
}

fn rejection(command: &str, err: &WatchError) -> Notice {
    let reason = match err {
        WatchError::InvalidInput(msg) | WatchError::CorruptData(msg) => msg.clone(),
        WatchError::DuplicateUser(_) => "Username already exists".to_string(),
        other => other.to_string(),
    };
    match command {
        "register" => Notice::RegistrationRejected { reason },
        "add_dish" => Notice::DishRejected { reason },
        _ => Notice::ActionFailed { command: command.to_string(), reason },
    }
}
