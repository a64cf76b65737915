// TUI application state. Each view owns its transient state; the navigator
// owns the current path.
use ratatui::widgets::ListState;
use spacebio_core::models::{ExperimentWithDetails, Organism, Paper};
use spacebio_core::route::query_param;
use spacebio_core::{
    ActiveRoute, ApiStatus, Catalog, Navigator, Route, SearchGeneration, SearchQuery,
    SearchResult,
};
use tracing::debug;

/// Organisms offered as one-key searches on the home view
pub const POPULAR_ORGANISMS: [&str; 5] = [
    "Arabidopsis",
    "E. coli",
    "Saccharomyces",
    "Human cells",
    "C. elegans",
];

/// Quick queries the dashboard cycles through
pub const QUICK_SEARCHES: [&str; 5] = [
    "Arabidopsis microgravity",
    "E. coli radiation",
    "Yeast space",
    "Human cells ISS",
    "Plant growth",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,    // Moving around the current view
    Editing,   // Typing into the current view's query box
    Filtering, // Picking conditions in the filter panel
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardTab {
    #[default]
    AiSearch,
    Organisms,
    Papers,
}

impl DashboardTab {
    pub fn next(&self) -> Self {
        match self {
            DashboardTab::AiSearch => DashboardTab::Organisms,
            DashboardTab::Organisms => DashboardTab::Papers,
            DashboardTab::Papers => DashboardTab::AiSearch,
        }
    }
}

/// Work the event loop must do outside the state machine
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Search { ticket: u64, query: SearchQuery },
    CheckHealth { ticket: u64 },
    OpenUrl(String),
}

/// Results coming back from background work
#[derive(Debug)]
pub enum AppEvent {
    SearchFinished {
        ticket: u64,
        result: spacebio_core::Result<SearchResult>,
    },
    HealthChecked { ticket: u64, status: ApiStatus },
}

#[derive(Debug, Default)]
pub struct HomeState {
    pub input: String,
    pub popular: ListState,
}

#[derive(Debug, Default)]
pub struct DashboardState {
    pub query: String,
    pub tab: DashboardTab,
    pub show_filters: bool,
    pub filter_cursor: usize,
    pub selected_conditions: Vec<String>,
    pub organisms: Vec<Organism>,
    pub papers: Vec<Paper>,
    pub list: ListState,
    pub result: Option<SearchResult>,
    pub result_scroll: u16,
    pub show_chunks: bool,
    pub loading: bool,
    pub error: Option<String>,
    /// None while the health check is outstanding
    pub api_status: Option<ApiStatus>,
    pub generation: SearchGeneration,
    pub health_generation: SearchGeneration,
    pub suggestion: usize,
}

#[derive(Debug, Default)]
pub struct ExploreState {
    pub query: String,
    pub organisms: Vec<Organism>,
    pub organism_list: ListState,
    pub selected_organism: Option<Organism>,
    pub experiments: Vec<ExperimentWithDetails>,
    pub experiment_list: ListState,
    pub show_filters: bool,
    pub filter_cursor: usize,
    pub selected_conditions: Vec<String>,
    pub paper: Option<ExperimentWithDetails>,
}

pub struct App {
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub navigator: Navigator,
    pub active: ActiveRoute,
    /// Route whose view state is currently live
    pub shown_route: Route,
    pub catalog: Catalog,
    pub condition_names: Vec<String>,
    /// Last query the user searched for, carried between views
    pub shared_query: String,
    pub home: HomeState,
    pub dashboard: DashboardState,
    pub explore: ExploreState,
    pub status_message: Option<String>,
    commands: Vec<Command>,
}

impl App {
    pub fn new(start_path: &str, catalog: Catalog) -> Self {
        let mut navigator = Navigator::new(start_path);
        let active = navigator.track_active_route();
        let condition_names = catalog.condition_names();

        let mut home = HomeState::default();
        home.popular.select(Some(0));

        let mut app = Self {
            should_quit: false,
            input_mode: InputMode::Normal,
            shown_route: active.get(),
            navigator,
            active,
            catalog,
            condition_names,
            shared_query: String::new(),
            home,
            dashboard: DashboardState::default(),
            explore: ExploreState::default(),
            status_message: None,
            commands: Vec::new(),
        };
        app.enter(app.shown_route);
        app
    }

    pub fn route(&self) -> Route {
        self.active.get()
    }

    /// Commands queued since the last call
    pub fn drain_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    // --- navigation -------------------------------------------------------

    /// Link activation
    pub fn navigate(&mut self, path: impl Into<String>) {
        self.navigator.navigate(path);
        self.sync_view();
    }

    pub fn back(&mut self) {
        if self.navigator.back() {
            self.sync_view();
        }
    }

    pub fn forward(&mut self) {
        if self.navigator.forward() {
            self.sync_view();
        }
    }

    pub fn next_link(&mut self) {
        let target = self.route().next();
        self.navigate(target.path());
    }

    pub fn previous_link(&mut self) {
        let target = self.route().previous();
        self.navigate(target.path());
    }

    /// Tear down the old view and set up the new one when the route changed
    fn sync_view(&mut self) {
        let route = self.active.get();
        if route == self.shown_route {
            return;
        }
        debug!("View switch {} -> {}", self.shown_route, route);
        self.leave(self.shown_route);
        self.shown_route = route;
        self.input_mode = InputMode::Normal;
        self.status_message = None;
        self.enter(route);
    }

    fn leave(&mut self, route: Route) {
        match route {
            Route::Dashboard => {
                // Anything still in flight belongs to a view that is gone
                self.dashboard.generation.invalidate();
                self.dashboard.health_generation.invalidate();
                self.dashboard.result = None;
                self.dashboard.loading = false;
                self.dashboard.error = None;
                self.dashboard.result_scroll = 0;
            }
            Route::Explore | Route::Organisms => {
                self.explore.paper = None;
                self.explore.selected_organism = None;
                self.explore.experiments.clear();
                self.explore.selected_conditions.clear();
                self.explore.show_filters = false;
            }
            Route::Home | Route::About => {}
        }
    }

    fn enter(&mut self, route: Route) {
        if let Some(q) = query_param(self.navigator.current_path(), "q") {
            self.shared_query = q;
        }

        match route {
            Route::Dashboard => {
                self.dashboard.query = self.shared_query.clone();
                self.load_dashboard_catalog();
                self.recheck_health();
            }
            Route::Explore | Route::Organisms => {
                self.explore.query = self.shared_query.clone();
                self.load_organisms();
            }
            Route::Home | Route::About => {}
        }
    }

    // --- home -------------------------------------------------------------

    /// Search from the home view: hand the query to the dashboard
    pub fn submit_home_search(&mut self) {
        let text = self.home.input.trim().to_string();
        if text.is_empty() {
            return;
        }
        self.start_dashboard_search(&text);
    }

    pub fn search_popular(&mut self) {
        let Some(name) = self
            .home
            .popular
            .selected()
            .and_then(|i| POPULAR_ORGANISMS.get(i).copied())
        else {
            return;
        };
        self.start_dashboard_search(name);
    }

    fn start_dashboard_search(&mut self, text: &str) {
        self.shared_query = text.to_string();
        self.navigate(Route::Dashboard.with_query(text));
    }

    // --- dashboard --------------------------------------------------------

    /// Submit the dashboard form for the active tab
    pub fn submit_dashboard(&mut self) {
        self.shared_query = self.dashboard.query.trim().to_string();
        match self.dashboard.tab {
            DashboardTab::AiSearch => self.begin_ai_search(),
            DashboardTab::Organisms | DashboardTab::Papers => self.load_dashboard_catalog(),
        }
    }

    fn begin_ai_search(&mut self) {
        let condition = self.dashboard.selected_conditions.first().map(String::as_str);
        let query = match SearchQuery::new(&self.dashboard.query, condition) {
            Ok(q) => q,
            Err(e) => {
                self.dashboard.error = Some(e.to_string());
                return;
            }
        };

        match &self.dashboard.api_status {
            Some(status) if status.connected => {}
            Some(status) => {
                self.dashboard.error = Some(format!("AI search disabled: {}", status.message));
                return;
            }
            None => {
                self.dashboard.error = Some("Still checking the API, try again shortly".into());
                return;
            }
        }

        let ticket = self.dashboard.generation.begin();
        self.dashboard.loading = true;
        self.dashboard.error = None;
        self.dashboard.result = None;
        self.dashboard.result_scroll = 0;
        self.commands.push(Command::Search { ticket, query });
    }

    pub fn load_dashboard_catalog(&mut self) {
        let query = Some(self.dashboard.query.as_str());
        self.dashboard.organisms = self.catalog.organisms(query);
        self.dashboard.papers = self.catalog.papers(query);
        self.dashboard.list.select(Some(0));
    }

    pub fn recheck_health(&mut self) {
        let ticket = self.dashboard.health_generation.begin();
        self.dashboard.api_status = None;
        self.commands.push(Command::CheckHealth { ticket });
    }

    pub fn next_tab(&mut self) {
        self.dashboard.tab = self.dashboard.tab.next();
        self.dashboard.list.select(Some(0));
    }

    pub fn toggle_chunks(&mut self) {
        self.dashboard.show_chunks = !self.dashboard.show_chunks;
    }

    pub fn next_suggestion(&mut self) {
        let idx = self.dashboard.suggestion % QUICK_SEARCHES.len();
        self.dashboard.query = QUICK_SEARCHES[idx].to_string();
        self.dashboard.suggestion = idx + 1;
    }

    /// Apply background results. Stale or orphaned responses are dropped.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SearchFinished { ticket, result } => {
                if !self.dashboard.generation.is_current(ticket) {
                    debug!("Dropping stale search response #{}", ticket);
                    return;
                }
                self.dashboard.loading = false;
                match result {
                    Ok(result) => self.dashboard.result = Some(result),
                    Err(e) => self.dashboard.error = Some(e.to_string()),
                }
            }
            AppEvent::HealthChecked { ticket, status } => {
                if !self.dashboard.health_generation.is_current(ticket) {
                    debug!("Dropping stale health check #{}", ticket);
                    return;
                }
                self.dashboard.api_status = Some(status);
            }
        }
    }

    // --- explore ----------------------------------------------------------

    pub fn load_organisms(&mut self) {
        self.explore.organisms = self.catalog.organisms(Some(&self.explore.query));
        self.explore.organism_list.select(Some(0));

        if let [only] = self.explore.organisms.as_slice() {
            let only = only.clone();
            self.select_organism(only);
        }
    }

    pub fn submit_explore_search(&mut self) {
        self.explore.query = self.explore.query.trim().to_string();
        self.shared_query = self.explore.query.clone();
        self.explore.selected_organism = None;
        self.explore.experiments.clear();
        self.load_organisms();
    }

    pub fn open_selected_organism(&mut self) {
        let organism = self
            .explore
            .organism_list
            .selected()
            .and_then(|i| self.explore.organisms.get(i))
            .cloned();
        if let Some(organism) = organism {
            self.select_organism(organism);
        }
    }

    fn select_organism(&mut self, organism: Organism) {
        self.explore.selected_organism = Some(organism);
        self.explore.selected_conditions.clear();
        self.load_experiments();
    }

    pub fn load_experiments(&mut self) {
        let Some(organism) = &self.explore.selected_organism else {
            return;
        };
        self.explore.experiments = self
            .catalog
            .experiments(&organism.id, &self.explore.selected_conditions);
        self.explore.experiment_list.select(Some(0));
    }

    pub fn back_to_organisms(&mut self) {
        self.explore.selected_organism = None;
        self.explore.experiments.clear();
        self.explore.selected_conditions.clear();
        self.explore.show_filters = false;
    }

    pub fn open_selected_paper(&mut self) {
        self.explore.paper = self
            .explore
            .experiment_list
            .selected()
            .and_then(|i| self.explore.experiments.get(i))
            .cloned();
    }

    pub fn close_paper(&mut self) {
        self.explore.paper = None;
    }

    pub fn open_paper_pdf(&mut self) {
        let url = self
            .explore
            .paper
            .as_ref()
            .and_then(|p| p.paper.pdf_url.clone());
        match url {
            Some(url) => self.commands.push(Command::OpenUrl(url)),
            None => self.status_message = Some("This paper has no PDF link".into()),
        }
    }

    // --- condition filters (dashboard and explore share the list) --------

    pub fn toggle_filters(&mut self) {
        let shown = match self.route() {
            Route::Dashboard => {
                self.dashboard.show_filters = !self.dashboard.show_filters;
                self.dashboard.show_filters
            }
            Route::Explore | Route::Organisms if self.explore.selected_organism.is_some() => {
                self.explore.show_filters = !self.explore.show_filters;
                self.explore.show_filters
            }
            _ => false,
        };
        self.input_mode = if shown {
            InputMode::Filtering
        } else {
            InputMode::Normal
        };
    }

    fn filter_cursor_mut(&mut self) -> &mut usize {
        match self.route() {
            Route::Dashboard => &mut self.dashboard.filter_cursor,
            _ => &mut self.explore.filter_cursor,
        }
    }

    pub fn next_filter(&mut self) {
        let last = self.condition_names.len().saturating_sub(1);
        let cursor = self.filter_cursor_mut();
        *cursor = (*cursor + 1).min(last);
    }

    pub fn previous_filter(&mut self) {
        let cursor = self.filter_cursor_mut();
        *cursor = cursor.saturating_sub(1);
    }

    pub fn toggle_condition(&mut self) {
        let cursor = *self.filter_cursor_mut();
        let Some(name) = self.condition_names.get(cursor).cloned() else {
            return;
        };
        let on_explore = self.route() != Route::Dashboard;
        let selected = if on_explore {
            &mut self.explore.selected_conditions
        } else {
            &mut self.dashboard.selected_conditions
        };
        if let Some(pos) = selected.iter().position(|c| *c == name) {
            selected.remove(pos);
        } else {
            selected.push(name);
        }
        if on_explore {
            self.load_experiments();
        }
    }

    pub fn clear_conditions(&mut self) {
        if self.route() == Route::Dashboard {
            self.dashboard.selected_conditions.clear();
        } else {
            self.explore.selected_conditions.clear();
            self.load_experiments();
        }
    }

    // --- list movement ----------------------------------------------------

    pub fn move_selection(&mut self, down: bool) {
        let (state, len) = match self.route() {
            Route::Home => (&mut self.home.popular, POPULAR_ORGANISMS.len()),
            Route::Dashboard => match self.dashboard.tab {
                DashboardTab::AiSearch => {
                    let scroll = &mut self.dashboard.result_scroll;
                    *scroll = if down {
                        scroll.saturating_add(1)
                    } else {
                        scroll.saturating_sub(1)
                    };
                    return;
                }
                DashboardTab::Organisms => (&mut self.dashboard.list, self.dashboard.organisms.len()),
                DashboardTab::Papers => (&mut self.dashboard.list, self.dashboard.papers.len()),
            },
            Route::Explore | Route::Organisms => {
                if self.explore.selected_organism.is_some() {
                    (&mut self.explore.experiment_list, self.explore.experiments.len())
                } else {
                    (&mut self.explore.organism_list, self.explore.organisms.len())
                }
            }
            Route::About => return,
        };
        step(state, len, down);
    }

    /// The query buffer the current view edits, if it has one
    pub fn query_buffer(&mut self) -> Option<&mut String> {
        match self.route() {
            Route::Home => Some(&mut self.home.input),
            Route::Dashboard => Some(&mut self.dashboard.query),
            Route::Explore | Route::Organisms => Some(&mut self.explore.query),
            Route::About => None,
        }
    }

    pub fn submit_query(&mut self) {
        match self.route() {
            Route::Home => self.submit_home_search(),
            Route::Dashboard => self.submit_dashboard(),
            Route::Explore | Route::Organisms => self.submit_explore_search(),
            Route::About => {}
        }
    }
}

fn step(state: &mut ListState, len: usize, down: bool) {
    if len == 0 {
        state.select(None);
        return;
    }
    let current = state.selected().unwrap_or(0);
    let next = if down {
        (current + 1).min(len - 1)
    } else {
        current.saturating_sub(1)
    };
    state.select(Some(next));
}

#[cfg(test)]
mod tests {
    use super::*;
    use spacebio_core::models::ScientificDetails;
    use spacebio_core::Error;

    fn app_at(path: &str) -> App {
        App::new(path, Catalog::seeded())
    }

    fn sample_result(name: &str) -> SearchResult {
        SearchResult {
            organism_name: name.to_string(),
            condition: None,
            description: "desc".into(),
            scientific_details: ScientificDetails {
                classification: "c".into(),
                response_mechanisms: vec![],
                experimental_findings: "f".into(),
                applications: "a".into(),
            },
            relevant_chunks: vec![],
        }
    }

    /// Ticket of the single health check queued since the last drain
    fn health_ticket(app: &mut App) -> u64 {
        let commands = app.drain_commands();
        match commands.as_slice() {
            [Command::CheckHealth { ticket }] => *ticket,
            _ => panic!("expected one health check, got {:?}", commands),
        }
    }

    fn ready_dashboard(query: &str) -> App {
        let mut app = app_at(&Route::Dashboard.with_query(query));
        let ticket = health_ticket(&mut app);
        app.handle_event(AppEvent::HealthChecked {
            ticket,
            status: ApiStatus::ready(),
        });
        app
    }

    #[test]
    fn test_home_to_dashboard_and_back() {
        let mut app = app_at("/");
        assert_eq!(app.route(), Route::Home);

        app.navigate("/dashboard");
        assert_eq!(app.route(), Route::Dashboard);
        health_ticket(&mut app);

        app.back();
        assert_eq!(app.route(), Route::Home);
        assert_eq!(app.navigator.current_path(), "/");
    }

    #[test]
    fn test_starting_on_dashboard_checks_health() {
        let mut app = app_at("/dashboard");
        health_ticket(&mut app);
        assert!(app.dashboard.api_status.is_none());
    }

    #[test]
    fn test_stale_health_check_is_dropped() {
        let mut app = app_at("/dashboard");
        let first = health_ticket(&mut app);

        app.navigate("/about");
        app.navigate("/dashboard");
        let second = health_ticket(&mut app);
        assert_ne!(first, second);

        app.handle_event(AppEvent::HealthChecked {
            ticket: second,
            status: ApiStatus::ready(),
        });
        // The check from the earlier visit finishes last
        app.handle_event(AppEvent::HealthChecked {
            ticket: first,
            status: ApiStatus::unreachable(),
        });

        assert!(app.dashboard.api_status.as_ref().is_some_and(|s| s.connected));
    }

    #[test]
    fn test_recheck_supersedes_pending_health_check() {
        let mut app = app_at("/dashboard");
        let first = health_ticket(&mut app);
        app.recheck_health();
        let second = health_ticket(&mut app);

        app.handle_event(AppEvent::HealthChecked {
            ticket: first,
            status: ApiStatus::ready(),
        });
        assert!(app.dashboard.api_status.is_none());

        app.handle_event(AppEvent::HealthChecked {
            ticket: second,
            status: ApiStatus::unreachable(),
        });
        assert!(app.dashboard.api_status.as_ref().is_some_and(|s| !s.connected));
    }

    #[test]
    fn test_home_search_prefills_dashboard() {
        let mut app = app_at("/");
        app.home.input = "  yeast space ".into();
        app.submit_home_search();

        assert_eq!(app.route(), Route::Dashboard);
        assert_eq!(app.navigator.current_path(), "/dashboard?q=yeast%20space");
        assert_eq!(app.dashboard.query, "yeast space");
    }

    #[test]
    fn test_empty_query_is_rejected_locally() {
        let mut app = ready_dashboard("");
        app.dashboard.query = "   ".into();
        app.submit_dashboard();

        assert!(app.drain_commands().is_empty());
        assert_eq!(app.dashboard.error.as_deref(), Some("Please enter a search query"));
        assert!(!app.dashboard.loading);
    }

    #[test]
    fn test_search_refused_while_api_unavailable() {
        let mut app = app_at("/dashboard?q=yeast");
        let ticket = health_ticket(&mut app);
        app.submit_dashboard();
        assert!(app.drain_commands().is_empty());
        assert!(app.dashboard.error.is_some());

        app.handle_event(AppEvent::HealthChecked {
            ticket,
            status: ApiStatus::unreachable(),
        });
        app.submit_dashboard();
        assert!(app.drain_commands().is_empty());
        assert!(app
            .dashboard
            .error
            .as_deref()
            .is_some_and(|e| e.contains("Failed to connect to API")));
    }

    #[test]
    fn test_search_uses_first_selected_condition() {
        let mut app = ready_dashboard("E. coli");
        app.dashboard.selected_conditions = vec!["Cosmic Radiation".into(), "Microgravity".into()];
        app.submit_dashboard();

        let commands = app.drain_commands();
        let [Command::Search { query, .. }] = commands.as_slice() else {
            panic!("expected one search, got {:?}", commands);
        };
        assert_eq!(query.text(), "E. coli");
        assert_eq!(query.condition(), Some("Cosmic Radiation"));
        assert!(app.dashboard.loading);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut app = ready_dashboard("yeast");
        app.submit_dashboard();
        app.submit_dashboard();
        let tickets: Vec<u64> = app
            .drain_commands()
            .into_iter()
            .filter_map(|c| match c {
                Command::Search { ticket, .. } => Some(ticket),
                _ => None,
            })
            .collect();
        assert_eq!(tickets.len(), 2);

        // Newer answer first, then the superseded one straggles in
        app.handle_event(AppEvent::SearchFinished {
            ticket: tickets[1],
            result: Ok(sample_result("new")),
        });
        app.handle_event(AppEvent::SearchFinished {
            ticket: tickets[0],
            result: Ok(sample_result("old")),
        });

        assert_eq!(
            app.dashboard.result.as_ref().map(|r| r.organism_name.as_str()),
            Some("new")
        );
    }

    #[test]
    fn test_navigating_away_discards_result_and_inflight_search() {
        let mut app = ready_dashboard("yeast");
        app.dashboard.result = Some(sample_result("kept?"));
        app.submit_dashboard();
        let ticket = match app.drain_commands().pop() {
            Some(Command::Search { ticket, .. }) => ticket,
            other => panic!("expected search, got {:?}", other),
        };

        app.navigate("/about");
        assert!(app.dashboard.result.is_none());
        assert!(!app.dashboard.loading);

        app.handle_event(AppEvent::SearchFinished {
            ticket,
            result: Ok(sample_result("late")),
        });
        assert!(app.dashboard.result.is_none());
    }

    #[test]
    fn test_search_error_is_shown_inline() {
        let mut app = ready_dashboard("yeast");
        app.submit_dashboard();
        let Some(Command::Search { ticket, .. }) = app.drain_commands().pop() else {
            panic!("expected search");
        };

        app.handle_event(AppEvent::SearchFinished {
            ticket,
            result: Err(Error::Http {
                status: 500,
                message: "overloaded".into(),
            }),
        });
        assert_eq!(app.dashboard.error.as_deref(), Some("overloaded"));
        assert!(!app.dashboard.loading);
    }

    #[test]
    fn test_same_route_link_keeps_view_state() {
        let mut app = ready_dashboard("yeast");
        app.dashboard.result = Some(sample_result("stay"));

        app.navigate("/dashboard?q=other");
        assert_eq!(app.navigator.current_path(), "/dashboard?q=other");
        assert!(app.dashboard.result.is_some());
        assert!(app.drain_commands().is_empty());
    }

    #[test]
    fn test_explore_drills_into_experiments_and_paper() {
        let mut app = app_at("/explore");
        assert_eq!(app.explore.organisms.len(), 6);

        // Most-studied first: human cells, which has one experiment
        app.open_selected_organism();
        assert_eq!(
            app.explore.selected_organism.as_ref().map(|o| o.id.as_str()),
            Some("4")
        );
        assert_eq!(app.explore.experiments.len(), 1);

        app.open_selected_paper();
        assert_eq!(app.explore.paper.as_ref().map(|p| p.paper.id.as_str()), Some("3"));

        app.open_paper_pdf();
        assert_eq!(
            app.drain_commands(),
            vec![Command::OpenUrl("https://example.com/paper3.pdf".into())]
        );

        app.close_paper();
        app.back_to_organisms();
        assert!(app.explore.selected_organism.is_none());
    }

    #[test]
    fn test_single_match_is_selected_automatically() {
        let app = app_at("/organisms?q=nematode");
        assert_eq!(app.route(), Route::Organisms);
        assert_eq!(
            app.explore.selected_organism.as_ref().map(|o| o.name.as_str()),
            Some("Caenorhabditis elegans")
        );
    }

    #[test]
    fn test_explore_condition_filter_reloads_experiments() {
        let mut app = app_at("/explore?q=e.%20coli");
        assert!(app.explore.selected_organism.is_some());
        assert_eq!(app.explore.experiments.len(), 1);

        app.toggle_filters();
        assert_eq!(app.input_mode, InputMode::Filtering);

        // Alphabetical: "Isolation Stress" sits at index 1
        app.next_filter();
        app.toggle_condition();
        assert_eq!(app.explore.selected_conditions, ["Isolation Stress"]);
        assert!(app.explore.experiments.is_empty());

        app.clear_conditions();
        assert_eq!(app.explore.experiments.len(), 1);
    }

    #[test]
    fn test_header_links_cycle() {
        let mut app = app_at("/");
        app.next_link();
        assert_eq!(app.route(), Route::Dashboard);
        app.previous_link();
        assert_eq!(app.route(), Route::Home);
        app.previous_link();
        assert_eq!(app.route(), Route::About);
    }

    #[test]
    fn test_quick_searches_cycle() {
        let mut app = ready_dashboard("");
        app.next_suggestion();
        assert_eq!(app.dashboard.query, QUICK_SEARCHES[0]);
        app.next_suggestion();
        assert_eq!(app.dashboard.query, QUICK_SEARCHES[1]);
    }
}
