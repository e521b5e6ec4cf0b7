/// Application coordinator: routes input to the visible view, runs the
/// transition between presentations and commits mode changes to the store.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::config;
use super::mode_store::{ModeStore, Subscription};
use super::timer::TimerQueue;
use super::types::{Mode, MouseEvent, Vec2};
use crate::effects::particle_field::ParticleField;
use crate::effects::transition::{TransitionPhase, TransitionSequencer};
use crate::platform::renderer::Renderer;
use crate::views::creative_view::CreativeView;
use crate::views::entry_view::EntryView;
use crate::views::logical_view::LogicalView;
use crate::views::widgets::{self, ViewAction};

#[derive(Debug, Clone, Copy, PartialEq)]
enum AppTimer {
    CommitMode { mode: Mode, epoch: u64 },
    EntryFadeIn { view_epoch: u64 },
    SkillBars { view_epoch: u64 },
}

type LinkOpener = Box<dyn Fn(&str)>;

pub struct App {
    store: ModeStore,
    subscription: Subscription,
    mailbox: Rc<RefCell<VecDeque<Mode>>>,
    sequencer: TransitionSequencer,
    timers: TimerQueue<AppTimer>,
    /// Bumped by every transition request; a commit only lands if still current.
    commit_epoch: u64,
    /// Bumped on every mount; view timers from an earlier mount are dropped.
    view_epoch: u64,
    shown: Mode,
    entry: EntryView,
    logical: LogicalView,
    creative: CreativeView,
    open_link: LinkOpener,
    /// Last pointer position seen, replayed into a freshly mounted view.
    pointer: Option<Vec2>,
    now_ms: f64,
    width: f64,
    height: f64,
}

impl App {
    pub fn new(width: f64, height: f64, particles: ParticleField) -> Self {
        let store = ModeStore::new();
        let mailbox = Rc::new(RefCell::new(VecDeque::new()));
        let inbox = Rc::clone(&mailbox);
        let subscription = store.subscribe(move |mode| inbox.borrow_mut().push_back(mode));

        let mut sequencer = TransitionSequencer::new(particles);
        sequencer.set_viewport(width, height);

        let mut app = Self {
            store,
            subscription,
            mailbox,
            sequencer,
            timers: TimerQueue::new(),
            commit_epoch: 0,
            view_epoch: 0,
            shown: Mode::Entry,
            entry: EntryView::new(),
            logical: LogicalView::new(),
            creative: CreativeView::new(),
            open_link: Box::new(widgets::open_link),
            pointer: None,
            now_ms: 0.0,
            width,
            height,
        };
        app.mount(Mode::Entry);
        app
    }

    /// Skip the entry screen and show `mode` directly, without a transition.
    pub fn start_in(&mut self, mode: Mode) {
        log::info!("starting in {} mode", mode.label());
        self.store.set(mode);
        self.apply_mailbox();
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        if width == self.width && height == self.height {
            return;
        }
        self.width = width;
        self.height = height;
        self.sequencer.set_viewport(width, height);
        self.creative.resize();
    }

    /// Route a pointer event to the visible view. While a transition runs,
    /// only moves get through and any action they produce is dropped.
    pub fn handle_mouse(&mut self, e: &MouseEvent) {
        self.pointer = Some(e.pos());
        if self.sequencer.is_active() {
            if !e.pressed && !e.released {
                self.route_mouse(e);
            }
            return;
        }
        if let Some(action) = self.route_mouse(e) {
            self.dispatch(action);
        }
    }

    fn route_mouse(&mut self, e: &MouseEvent) -> Option<ViewAction> {
        let (w, h) = (self.width, self.height);
        match self.shown {
            Mode::Entry => self.entry.handle_mouse(e, w, h),
            Mode::Logical => self.logical.handle_mouse(e, w, h),
            Mode::Creative => self.creative.handle_mouse(e, w, h),
        }
    }

    fn dispatch(&mut self, action: ViewAction) {
        match action {
            ViewAction::Enter(mode) => self.select(mode),
            ViewAction::Toggle => self.toggle(),
            ViewAction::OpenLink(url) => (self.open_link)(&url),
        }
    }

    /// Entry choice: play the transition, then commit `mode`.
    pub fn select(&mut self, mode: Mode) {
        self.begin_transition(mode, mode == Mode::Creative);
    }

    /// Switch between the logical and creative presentations.
    pub fn toggle(&mut self) {
        let current = self.store.get();
        self.begin_transition(current.toggled(), current == Mode::Logical);
    }

    fn begin_transition(&mut self, target: Mode, from_logical: bool) {
        self.commit_epoch += 1;
        log::info!(
            "switching to {} (from_logical={}, epoch {})",
            target.label(),
            from_logical,
            self.commit_epoch
        );
        self.sequencer.activate(self.now_ms, from_logical);
        self.timers.schedule(
            self.now_ms,
            config::MODE_COMMIT_DELAY_MS,
            AppTimer::CommitMode {
                mode: target,
                epoch: self.commit_epoch,
            },
        );
    }

    /// Advance to `now_ms`: run the transition's due phases, fire app timers,
    /// deliver store notifications, then tick the visible view by one frame.
    /// Returns the transition phases entered during the call.
    ///
    /// Phase timers fall due before the commit, so they drain first.
    pub fn update(&mut self, now_ms: f64, dt_ms: f64) -> Vec<TransitionPhase> {
        self.now_ms = now_ms;
        let entered = self.sequencer.update(now_ms, dt_ms);

        for timer in self.timers.drain_due(now_ms) {
            match timer {
                AppTimer::CommitMode { mode, epoch } if epoch == self.commit_epoch => {
                    self.commit(mode);
                }
                AppTimer::EntryFadeIn { view_epoch }
                    if view_epoch == self.view_epoch && self.shown == Mode::Entry =>
                {
                    self.entry.begin_fade_in();
                }
                AppTimer::SkillBars { view_epoch }
                    if view_epoch == self.view_epoch && self.shown == Mode::Logical =>
                {
                    self.logical.begin_skill_bars();
                }
                stale => log::trace!("dropping stale timer {:?}", stale),
            }
        }
        self.apply_mailbox();

        match self.shown {
            Mode::Entry => self.entry.update(dt_ms),
            Mode::Logical => self.logical.update(dt_ms),
            Mode::Creative => self.creative.update(dt_ms),
        }
        entered
    }

    fn commit(&mut self, mode: Mode) {
        self.store.set(mode);
        self.sequencer.deactivate();
    }

    fn apply_mailbox(&mut self) {
        let pending: Vec<Mode> = self.mailbox.borrow_mut().drain(..).collect();
        if let Some(&mode) = pending.last() {
            if mode != self.shown {
                self.mount(mode);
            }
        }
    }

    fn mount(&mut self, mode: Mode) {
        self.view_epoch += 1;
        self.shown = mode;
        log::debug!("mounting {} view", mode.label());
        match mode {
            Mode::Entry => {
                self.entry.mount();
                self.timers.schedule(
                    self.now_ms,
                    config::ENTRY_FADE_DELAY_MS,
                    AppTimer::EntryFadeIn {
                        view_epoch: self.view_epoch,
                    },
                );
            }
            Mode::Logical => {
                self.logical.mount();
                self.timers.schedule(
                    self.now_ms,
                    config::SKILL_BAR_DELAY_MS,
                    AppTimer::SkillBars {
                        view_epoch: self.view_epoch,
                    },
                );
            }
            Mode::Creative => self.creative.mount(),
        }
        if let Some(pos) = self.pointer {
            self.route_mouse(&MouseEvent::moved(pos.x, pos.y));
        }
    }

    pub fn render(&mut self, r: &dyn Renderer) {
        let (w, h) = (self.width, self.height);
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        match self.shown {
            Mode::Entry => self.entry.render(r, w, h),
            Mode::Logical => self.logical.render(r, w, h),
            Mode::Creative => self.creative.render(r, w, h),
        }
        self.sequencer.render(r);
    }

    /// Stop animators and drop every store listener.
    pub fn shutdown(&mut self) {
        log::info!("shutting down");
        self.subscription.unsubscribe();
        self.store.clear();
        self.timers.clear();
        self.sequencer.deactivate();
    }
}

#[cfg(test)]
impl App {
    /// Route opened links somewhere other than the desktop handler.
    pub fn set_link_opener(&mut self, opener: impl Fn(&str) + 'static) {
        self.open_link = Box::new(opener);
    }

    pub fn mode(&self) -> Mode {
        self.store.get()
    }

    /// The presentation currently on screen.
    pub fn shown(&self) -> Mode {
        self.shown
    }

    pub fn store(&self) -> &ModeStore {
        &self.store
    }

    pub fn sequencer(&self) -> &TransitionSequencer {
        &self.sequencer
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    pub fn entry(&self) -> &EntryView {
        &self.entry
    }

    pub fn logical(&self) -> &LogicalView {
        &self.logical
    }

    pub fn creative(&self) -> &CreativeView {
        &self.creative
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.store.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::renderer_recording::RecordingRenderer;
    use crate::views::creative_view::PointerLight;

    const W: f64 = 1280.0;
    const H: f64 = 720.0;

    fn app() -> App {
        App::new(W, H, ParticleField::with_seed(7))
    }

    /// Run 16ms frames until `to`, returning phases seen at each frame.
    fn run(app: &mut App, to: f64) -> Vec<TransitionPhase> {
        let mut phases = Vec::new();
        let mut t = app.now_ms();
        while t < to {
            t = (t + 16.0).min(to);
            app.update(t, 16.0);
            phases.push(app.sequencer().phase());
        }
        phases
    }

    fn click_choice(app: &mut App, index: usize) {
        let c = EntryView::choice_center(index, W, H).unwrap();
        app.handle_mouse(&MouseEvent::click(c.x, c.y));
    }

    /// Distinct phases in order of first appearance.
    fn sequence(phases: &[TransitionPhase]) -> Vec<TransitionPhase> {
        let mut out: Vec<TransitionPhase> = Vec::new();
        for &p in phases {
            if out.last() != Some(&p) {
                out.push(p);
            }
        }
        out
    }

    #[test]
    fn test_recruiter_commits_logical_after_delay() {
        let mut app = app();
        run(&mut app, 200.0);
        click_choice(&mut app, 0);
        assert!(app.sequencer().is_active());
        assert_eq!(app.sequencer().phase(), TransitionPhase::Covering);

        run(&mut app, 1100.0);
        assert_eq!(app.mode(), Mode::Entry);
        assert_eq!(app.shown(), Mode::Entry);

        run(&mut app, 1216.0);
        assert_eq!(app.mode(), Mode::Logical);
        assert_eq!(app.shown(), Mode::Logical);
        assert_eq!(app.sequencer().phase(), TransitionPhase::Idle);
        assert!(!app.sequencer().particles().is_running());
    }

    #[test]
    fn test_toggle_round_trip_runs_one_sequence_each() {
        let mut app = app();
        click_choice(&mut app, 0);
        run(&mut app, 1100.0);
        assert_eq!(app.mode(), Mode::Logical);

        app.toggle();
        let start = app.now_ms();
        let phases = run(&mut app, start + 1100.0);
        assert_eq!(app.mode(), Mode::Creative);
        assert_eq!(
            sequence(&phases),
            vec![
                TransitionPhase::Covering,
                TransitionPhase::Wiping,
                TransitionPhase::Done,
                TransitionPhase::Idle
            ]
        );

        app.toggle();
        let start = app.now_ms();
        let phases = run(&mut app, start + 1100.0);
        assert_eq!(app.mode(), Mode::Logical);
        assert_eq!(sequence(&phases).len(), 4);
    }

    #[test]
    fn test_palette_follows_direction() {
        let mut app = app();
        app.start_in(Mode::Logical);
        app.toggle();
        run(&mut app, 450.0);
        assert_eq!(app.sequencer().particles().palette().map(|p| p.hue_min), Some(180.0));

        run(&mut app, 1100.0);
        assert_eq!(app.mode(), Mode::Creative);
        app.toggle();
        let start = app.now_ms();
        run(&mut app, start + 450.0);
        assert_eq!(app.sequencer().particles().palette().map(|p| p.hue_min), Some(30.0));
    }

    #[test]
    fn test_newer_toggle_supersedes_pending_commit() {
        let mut app = app();
        app.start_in(Mode::Logical);
        app.toggle();
        run(&mut app, 500.0);
        // Store still says Logical, so this also targets Creative but restarts the clock.
        app.toggle();
        run(&mut app, 1050.0);
        assert_eq!(app.mode(), Mode::Logical);
        assert!(app.sequencer().is_active());

        run(&mut app, 1600.0);
        assert_eq!(app.mode(), Mode::Creative);
        assert!(!app.sequencer().is_active());
    }

    #[test]
    fn test_input_ignored_during_transition() {
        let mut app = app();
        click_choice(&mut app, 1);
        run(&mut app, 100.0);
        // A second click mid-transition must not restart anything.
        let epoch = app.sequencer().epoch();
        click_choice(&mut app, 0);
        assert_eq!(app.sequencer().epoch(), epoch);

        run(&mut app, 1100.0);
        assert_eq!(app.mode(), Mode::Creative);
        assert_eq!(app.shown(), Mode::Creative);
    }

    #[test]
    fn test_stalled_frame_still_runs_every_phase() {
        let mut app = app();
        app.start_in(Mode::Logical);
        app.toggle();

        // One frame spanning Wiping (400), Done (800) and the commit (1000).
        let entered = app.update(1200.0, 1200.0);
        assert_eq!(entered, vec![TransitionPhase::Wiping, TransitionPhase::Done]);
        assert_eq!(app.mode(), Mode::Creative);
        assert_eq!(app.shown(), Mode::Creative);
        assert_eq!(app.sequencer().phase(), TransitionPhase::Idle);
        assert!(!app.sequencer().particles().is_running());
    }

    #[test]
    fn test_pointer_moves_reach_view_during_transition() {
        let mut app = app();
        app.start_in(Mode::Creative);
        app.toggle();
        run(&mut app, 100.0);

        let epoch = app.sequencer().epoch();
        app.handle_mouse(&MouseEvent::moved(320.0, 180.0));
        assert_eq!(app.creative().pointer(), PointerLight::at(320.0, 180.0, W, H));

        app.handle_mouse(&MouseEvent::click(320.0, 180.0));
        assert_eq!(app.sequencer().epoch(), epoch);
    }

    #[test]
    fn test_new_view_picks_up_last_pointer() {
        let mut app = app();
        app.start_in(Mode::Logical);
        app.toggle();
        run(&mut app, 500.0);
        app.handle_mouse(&MouseEvent::moved(900.0, 400.0));

        run(&mut app, 1100.0);
        assert_eq!(app.shown(), Mode::Creative);
        assert_eq!(app.creative().pointer(), PointerLight::at(900.0, 400.0, W, H));
    }

    #[test]
    fn test_entry_fades_in_after_mount_delay() {
        let mut app = app();
        run(&mut app, 96.0);
        assert_eq!(app.entry().opacity(), 0.0);
        run(&mut app, 100.0 + config::ENTRY_FADE_MS + 16.0);
        assert_eq!(app.entry().opacity(), 1.0);
    }

    #[test]
    fn test_skill_bars_start_after_logical_mount() {
        let mut app = app();
        app.start_in(Mode::Logical);
        run(&mut app, 592.0);
        assert_eq!(app.logical().skill_fill(0), 0.0);
        run(&mut app, 600.0 + config::SKILL_BAR_FILL_MS + 16.0);
        assert!((app.logical().skill_fill(0) - 0.95).abs() < 1e-9);
    }

    #[test]
    fn test_links_go_through_opener() {
        let opened = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&opened);
        let mut app = app();
        app.set_link_opener(move |url| sink.borrow_mut().push(url.to_string()));
        app.dispatch(ViewAction::OpenLink("mailto:x@y".to_string()));
        assert_eq!(*opened.borrow(), vec!["mailto:x@y".to_string()]);
    }

    #[test]
    fn test_shutdown_clears_listeners() {
        let mut app = app();
        let store = app.store().clone();
        let _extra = store.subscribe(|_| {});
        assert_eq!(store.listener_count(), 2);
        app.shutdown();
        assert_eq!(store.listener_count(), 0);

        let mut app = self::app();
        let store = app.store().clone();
        app.start_in(Mode::Creative);
        drop(app);
        assert_eq!(store.listener_count(), 0);
    }

    #[test]
    fn test_render_overlay_on_top_of_view() {
        let mut app = app();
        app.start_in(Mode::Logical);
        app.toggle();
        run(&mut app, 100.0);
        let rec = RecordingRenderer::new();
        app.render(&rec);
        let texts = rec.texts();
        assert_eq!(texts.last().map(String::as_str), Some("◈ SWITCHING REALITY ◈"));

        app.resize(0.0, 0.0);
        let rec = RecordingRenderer::new();
        app.render(&rec);
        assert!(rec.is_empty());
    }
}
