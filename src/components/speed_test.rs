use std::collections::VecDeque;

use chrono::NaiveTime;
use gloo_timers::callback::Timeout;
use log::{debug, info};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use yew::prelude::*;

use crate::components::speed_history_graph::SpeedHistoryGraph;

pub const PING_DELAY_MS: u32 = 1_000;
pub const TICK_MS: u32 = 100;
pub const HISTORY_CAPACITY: usize = 5;
pub const GAUGE_MAX_MBPS: f64 = 500.0;

/// Ramp parameters for one measured direction.
struct Ramp {
    max_step: f64,
    threshold: f64,
    settle: std::ops::Range<f64>,
}

const DOWNLOAD_RAMP: Ramp = Ramp { max_step: 50.0, threshold: 300.0, settle: 280.0..320.0 };
const UPLOAD_RAMP: Ramp = Ramp { max_step: 40.0, threshold: 280.0, settle: 260.0..300.0 };

impl Ramp {
    /// Adds one random increment. Once the threshold is crossed the value is
    /// snapped into the settle range and returned as the measurement.
    fn step<R: Rng + ?Sized>(&self, progress: &mut f64, rng: &mut R) -> Option<f64> {
        *progress += rng.gen_range(0.0..self.max_step);
        if *progress >= self.threshold {
            *progress = rng.gen_range(self.settle.clone());
            Some(*progress)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Ping,
    Download,
    Upload,
    Complete,
}

impl Phase {
    pub fn status_text(&self) -> Option<&'static str> {
        match self {
            Phase::Ping => Some("Midiendo latencia..."),
            Phase::Download => Some("Probando descarga..."),
            Phase::Upload => Some("Probando subida..."),
            Phase::Idle | Phase::Complete => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpeedTestError {
    #[error("a speed test is already running")]
    AlreadyRunning,
    #[error("the speed test view has been torn down")]
    Disposed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedTestResult {
    pub ping_ms: u32,
    pub download_mbps: u32,
    pub upload_mbps: u32,
}

/// One simulated measurement: ping, then download, then upload.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedTestRun {
    phase: Phase,
    ping_ms: u32,
    download_mbps: f64,
    upload_mbps: f64,
    progress: f64,
    current_mbps: f64,
}

impl Default for SpeedTestRun {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            ping_ms: 0,
            download_mbps: 0.0,
            upload_mbps: 0.0,
            progress: 0.0,
            current_mbps: 0.0,
        }
    }
}

impl SpeedTestRun {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn ping_ms(&self) -> u32 {
        self.ping_ms
    }

    pub fn download_mbps(&self) -> f64 {
        self.download_mbps
    }

    pub fn upload_mbps(&self) -> f64 {
        self.upload_mbps
    }

    /// Value under the gauge needle.
    pub fn current_mbps(&self) -> f64 {
        self.current_mbps
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Ping | Phase::Download | Phase::Upload)
    }

    pub fn start(&mut self) -> Result<(), SpeedTestError> {
        if self.is_running() {
            return Err(SpeedTestError::AlreadyRunning);
        }
        *self = Self { phase: Phase::Ping, ..Self::default() };
        Ok(())
    }

    /// Delay before the next [`SpeedTestRun::tick`], or `None` when nothing is pending.
    pub fn next_delay_ms(&self) -> Option<u32> {
        match self.phase {
            Phase::Ping => Some(PING_DELAY_MS),
            Phase::Download | Phase::Upload => Some(TICK_MS),
            Phase::Idle | Phase::Complete => None,
        }
    }

    /// Handles one timer firing. Returns the result when the run completes.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<SpeedTestResult> {
        match self.phase {
            Phase::Ping => {
                self.ping_ms = rng.gen_range(3..13);
                self.phase = Phase::Download;
                None
            }
            Phase::Download => {
                if let Some(measured) = DOWNLOAD_RAMP.step(&mut self.progress, rng) {
                    self.download_mbps = measured;
                    self.progress = 0.0;
                    self.phase = Phase::Upload;
                    self.current_mbps = measured;
                } else {
                    self.current_mbps = self.progress;
                }
                None
            }
            Phase::Upload => {
                let measured = UPLOAD_RAMP.step(&mut self.progress, rng);
                self.current_mbps = self.progress;
                let measured = measured?;
                self.upload_mbps = measured;
                self.phase = Phase::Complete;
                Some(SpeedTestResult {
                    ping_ms: self.ping_ms,
                    download_mbps: self.download_mbps.round() as u32,
                    upload_mbps: self.upload_mbps.round() as u32,
                })
            }
            Phase::Idle | Phase::Complete => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeedTestRecord {
    pub taken_at: String,
    pub download: u32,
    pub upload: u32,
    pub ping: u32,
}

impl SpeedTestRecord {
    pub fn new(result: SpeedTestResult, taken_at: NaiveTime) -> Self {
        Self {
            taken_at: taken_at.format("%H:%M:%S").to_string(),
            download: result.download_mbps,
            upload: result.upload_mbps,
            ping: result.ping_ms,
        }
    }
}

/// Sliding window of finished runs, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedTestHistory {
    entries: VecDeque<SpeedTestRecord>,
    capacity: usize,
}

impl Default for SpeedTestHistory {
    fn default() -> Self {
        Self::with_capacity(HISTORY_CAPACITY)
    }
}

impl SpeedTestHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, record: SpeedTestRecord) {
        if self.capacity == 0 {
            return;
        }
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(record);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &SpeedTestRecord> {
        self.entries.iter()
    }

    pub fn to_vec(&self) -> Vec<SpeedTestRecord> {
        self.entries.iter().cloned().collect()
    }
}

/// Run plus history for one mounted widget. Once disposed it ignores every
/// further event, so late timer callbacks cannot mutate it.
#[derive(Debug, Default)]
pub struct SpeedTestSession {
    run: SpeedTestRun,
    history: SpeedTestHistory,
    disposed: bool,
}

impl SpeedTestSession {
    pub fn run(&self) -> &SpeedTestRun {
        &self.run
    }

    pub fn history(&self) -> &SpeedTestHistory {
        &self.history
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn start(&mut self) -> Result<(), SpeedTestError> {
        if self.disposed {
            return Err(SpeedTestError::Disposed);
        }
        self.run.start()
    }

    pub fn next_delay_ms(&self) -> Option<u32> {
        if self.disposed {
            return None;
        }
        self.run.next_delay_ms()
    }

    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R, now: NaiveTime) -> Option<&SpeedTestRecord> {
        if self.disposed {
            return None;
        }
        let result = self.run.tick(rng)?;
        self.history.push(SpeedTestRecord::new(result, now));
        self.history.iter().next_back()
    }

    pub fn dispose(&mut self) {
        self.disposed = true;
    }
}

/// Needle angle in degrees, -90 at zero and +90 at [`GAUGE_MAX_MBPS`].
pub fn needle_rotation(speed_mbps: f64) -> f64 {
    (speed_mbps / GAUGE_MAX_MBPS).clamp(0.0, 1.0) * 180.0 - 90.0
}

#[derive(Properties, PartialEq)]
pub struct SpeedometerProps {
    pub speed: f64,
}

#[function_component(Speedometer)]
pub fn speedometer(props: &SpeedometerProps) -> Html {
    let rotation = needle_rotation(props.speed);
    html! {
        <div class="speedometer">
            <div class="speedometer-arc"></div>
            <div class="speedometer-marks">
                <span>{"0"}</span>
                <span class="accent">{"250"}</span>
                <span>{"500"}</span>
            </div>
            <div class="speedometer-needle" style={format!("transform: translateX(-50%) rotate({}deg);", rotation)}></div>
            <div class="speedometer-value">
                <strong>{ props.speed.round() as u32 }</strong>
                <small>{"Mbps"}</small>
            </div>
        </div>
    }
}

pub enum SpeedTestMsg {
    Start,
    Tick,
}

pub struct SpeedTestWidget {
    session: SpeedTestSession,
    timer: Option<Timeout>,
}

impl SpeedTestWidget {
    /// Arms the single timer of the active run, replacing any previous one.
    fn schedule(&mut self, ctx: &Context<Self>) {
        self.timer = self.session.next_delay_ms().map(|delay| {
            let link = ctx.link().clone();
            Timeout::new(delay, move || link.send_message(SpeedTestMsg::Tick))
        });
    }
}

impl Component for SpeedTestWidget {
    type Message = SpeedTestMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session: SpeedTestSession::default(),
            timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            SpeedTestMsg::Start => match self.session.start() {
                Ok(()) => {
                    debug!("Speed test started");
                    self.schedule(ctx);
                    true
                }
                Err(e) => {
                    debug!("Speed test not started: {}", e);
                    false
                }
            },
            SpeedTestMsg::Tick => {
                let now = chrono::Local::now().time();
                if let Some(record) = self.session.tick(&mut rand::thread_rng(), now) {
                    info!(
                        "Speed test finished: {} Mbps down, {} Mbps up, {} ms",
                        record.download, record.upload, record.ping
                    );
                }
                self.schedule(ctx);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let run = self.session.run();
        let history = self.session.history();
        let running = run.is_running();
        let on_start = ctx.link().callback(|_: MouseEvent| SpeedTestMsg::Start);

        let button_label = if running {
            "Midiendo..."
        } else if run.phase() == Phase::Complete {
            "Probar de nuevo"
        } else {
            "Iniciar Test"
        };

        html! {
            <div class="glass speed-test">
                <h3>{"Speed Test Premium"}</h3>
                <p class="muted">{"Mide tu velocidad de conexión en tiempo real"}</p>

                <Speedometer speed={run.current_mbps()} />

                {
                    if let Some(text) = run.phase().status_text() {
                        html! { <div class="phase-pill"><span class="pulse"></span>{ text }</div> }
                    } else {
                        html! {}
                    }
                }

                {
                    if run.phase() == Phase::Complete {
                        html! {
                            <div class="speed-results">
                                <div><strong class="ping">{ format!("{}ms", run.ping_ms()) }</strong><small>{"Ping"}</small></div>
                                <div><strong class="down">{ run.download_mbps().round() as u32 }</strong><small>{"Download Mbps"}</small></div>
                                <div><strong class="up">{ run.upload_mbps().round() as u32 }</strong><small>{"Upload Mbps"}</small></div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                <button class="btn-gradient wide" disabled={running} onclick={on_start}>
                    { button_label }
                </button>

                {
                    if history.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <div class="speed-history">
                                <h4>{"Historial"}</h4>
                                { for history.iter().map(|record| html! {
                                    <div class="history-row">
                                        <span class="muted">{ &record.taken_at }</span>
                                        <span class="down">{ format!("↓{}", record.download) }</span>
                                        <span class="up">{ format!("↑{}", record.upload) }</span>
                                        <span class="ping">{ format!("{}ms", record.ping) }</span>
                                    </div>
                                }) }
                                <SpeedHistoryGraph records={history.to_vec()} />
                            </div>
                        }
                    }
                }
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.timer.take();
        self.session.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quickcheck_macros::quickcheck;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 0, 0).unwrap()
    }

    /// Ticks until the run completes, recording every phase seen.
    fn drive(session: &mut SpeedTestSession, rng: &mut StdRng) -> Vec<Phase> {
        let mut phases = vec![session.run().phase()];
        for _ in 0..1_000 {
            if session.next_delay_ms().is_none() {
                break;
            }
            session.tick(rng, noon());
            let phase = session.run().phase();
            if phases.last() != Some(&phase) {
                phases.push(phase);
            }
        }
        phases
    }

    #[test]
    fn start_refused_while_running() {
        let mut run = SpeedTestRun::default();
        assert_eq!(run.start(), Ok(()));
        assert!(run.is_running());
        assert_eq!(run.start(), Err(SpeedTestError::AlreadyRunning));
    }

    #[test]
    fn start_zeroes_previous_measurements() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut session = SpeedTestSession::default();
        session.start().unwrap();
        drive(&mut session, &mut rng);
        assert!(session.run().download_mbps() > 0.0);

        session.start().unwrap();
        let run = session.run();
        assert_eq!(run.phase(), Phase::Ping);
        assert_eq!(run.ping_ms(), 0);
        assert_eq!(run.download_mbps(), 0.0);
        assert_eq!(run.upload_mbps(), 0.0);
    }

    #[test]
    fn phases_run_in_order() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut session = SpeedTestSession::default();
        let mut phases = vec![session.run().phase()];
        session.start().unwrap();
        phases.extend(drive(&mut session, &mut rng));
        phases.dedup();
        assert_eq!(
            phases,
            vec![Phase::Idle, Phase::Ping, Phase::Download, Phase::Upload, Phase::Complete]
        );
    }

    #[test]
    fn delays_follow_phase() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut run = SpeedTestRun::default();
        assert_eq!(run.next_delay_ms(), None);
        run.start().unwrap();
        assert_eq!(run.next_delay_ms(), Some(PING_DELAY_MS));
        run.tick(&mut rng);
        assert_eq!(run.next_delay_ms(), Some(TICK_MS));
    }

    #[test]
    fn measurements_stay_in_bounds() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut session = SpeedTestSession::default();
            session.start().unwrap();
            drive(&mut session, &mut rng);
            let run = session.run();
            assert!((3..13).contains(&run.ping_ms()), "ping {}", run.ping_ms());
            assert!((280.0..320.0).contains(&run.download_mbps()));
            assert!((260.0..300.0).contains(&run.upload_mbps()));
        }
    }

    #[test]
    fn completed_run_appends_one_rounded_entry() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = SpeedTestSession::default();
        session.start().unwrap();
        drive(&mut session, &mut rng);

        assert_eq!(session.history().len(), 1);
        let record = session.history().iter().next().unwrap();
        let run = session.run();
        assert_eq!(record.download, run.download_mbps().round() as u32);
        assert_eq!(record.upload, run.upload_mbps().round() as u32);
        assert_eq!(record.ping, run.ping_ms());
        assert_eq!(record.taken_at, "12:00:00");
    }

    #[test]
    fn history_evicts_oldest_first() {
        let mut history = SpeedTestHistory::with_capacity(3);
        for i in 0..5 {
            history.push(SpeedTestRecord {
                taken_at: format!("t{}", i),
                download: 300,
                upload: 280,
                ping: 5,
            });
        }
        let stamps: Vec<_> = history.iter().map(|r| r.taken_at.as_str()).collect();
        assert_eq!(stamps, vec!["t2", "t3", "t4"]);
    }

    #[quickcheck]
    fn history_never_exceeds_capacity(runs: u8) -> bool {
        let mut rng = StdRng::seed_from_u64(runs as u64);
        let mut session = SpeedTestSession::default();
        let runs = (runs % 12) as usize;
        for _ in 0..runs {
            if session.start().is_err() {
                return false;
            }
            drive(&mut session, &mut rng);
        }
        session.history().len() == runs.min(HISTORY_CAPACITY)
    }

    #[test]
    fn disposed_session_ignores_ticks() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut session = SpeedTestSession::default();
        session.start().unwrap();
        session.tick(&mut rng, noon());
        session.tick(&mut rng, noon());
        let frozen = session.run().clone();

        session.dispose();
        assert_eq!(session.next_delay_ms(), None);
        for _ in 0..100 {
            assert!(session.tick(&mut rng, noon()).is_none());
        }
        assert_eq!(session.run(), &frozen);
        assert!(session.history().is_empty());
        assert_eq!(session.start(), Err(SpeedTestError::Disposed));
    }

    #[test]
    fn needle_covers_half_circle() {
        assert_eq!(needle_rotation(0.0), -90.0);
        assert_eq!(needle_rotation(250.0), 0.0);
        assert_eq!(needle_rotation(500.0), 90.0);
        assert_eq!(needle_rotation(900.0), 90.0);
    }
}
