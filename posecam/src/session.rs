//! Capture/render loop.
//!
//! A [`Session`] owns the run state, the camera stream while it is live, and
//! the lazily created pose detector. `toggle` either starts capture and then
//! drives one detect-and-draw cycle per display refresh until stopped, or
//! stops a running session.
//!
//! Stopping is cooperative. Each start bumps an epoch; every continuation that
//! resumes after a suspension point compares its epoch against the current
//! one and bails out if the user toggled in the meantime. An inference result
//! that arrives after a stop is dropped without drawing.

use crate::{
    platform::{Capture, Detector, EstimateOptions, Platform},
    skeleton,
    stats::{FpsMeter, FrameStats},
    Canvas, Config, Error, Person, Result, Status,
};
use futures::lock::Mutex;
use log::{debug, error, info, warn};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};
use web_time::Instant;

pub struct Session<P: Platform> {
    platform: P,
    config: Config,
    canvas: RefCell<P::Canvas>,
    running: Cell<bool>,
    epoch: Cell<u64>,
    capture: RefCell<Option<Rc<P::Capture>>>,
    detector: Mutex<Option<Rc<P::Detector>>>,
    stats: Cell<FrameStats>,
    fps: RefCell<FpsMeter>,
}

impl<P: Platform> Session<P> {
    pub fn new(platform: P, canvas: P::Canvas, config: Config) -> Self {
        Self {
            platform,
            config,
            canvas: RefCell::new(canvas),
            running: Cell::new(false),
            epoch: Cell::new(0),
            capture: RefCell::new(None),
            detector: Mutex::new(None),
            stats: Cell::new(FrameStats::default()),
            fps: RefCell::new(FpsMeter::default()),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Totals since the session was created.
    pub fn stats(&self) -> FrameStats {
        self.stats.get()
    }

    /// Starts a stopped session or stops a running one.
    ///
    /// Starting resolves only once the render loop ends, either because a
    /// later `toggle` stopped it (`Ok`) or because something failed. Failures
    /// are already shown on the status line and have reset the session to
    /// stopped when they are returned here.
    pub async fn toggle(&self) -> Result<()> {
        if self.running.get() {
            self.stop();
            Ok(())
        } else {
            self.start().await
        }
    }

    fn stop(&self) {
        self.set_running(false);
        self.release_capture();
        self.canvas.borrow_mut().clear();
        self.platform.show_status(&Status::Idle);
        info!("pose estimation stopped");
    }

    async fn start(&self) -> Result<()> {
        let epoch = self.set_running(true);
        self.platform.show_status(&Status::Loading);
        self.fps.replace(FpsMeter::default());

        let (capture, detector) = match self.prepare(epoch).await {
            Ok(Some(prepared)) => prepared,
            Ok(None) => {
                debug!("start cancelled");
                return Ok(());
            }
            Err(err) => return Err(self.fail(epoch, err)),
        };

        self.platform.show_status(&Status::Running);
        info!("pose estimation running");
        self.run(epoch, &capture, &detector)
            .await
            .map_err(|err| self.fail(epoch, err))
    }

    /// Opens the camera, sizes the canvas and loads the detector. `None` means
    /// the session was stopped while one of these was pending.
    async fn prepare(&self, epoch: u64) -> Result<Option<(Rc<P::Capture>, Rc<P::Detector>)>> {
        let capture = Rc::new(self.platform.open_camera().await?);
        if !self.is_current(epoch) {
            capture.stop();
            return Ok(None);
        }
        self.capture.replace(Some(Rc::clone(&capture)));

        let dimensions = capture.ready().await?;
        if !self.is_current(epoch) {
            return Ok(None);
        }
        info!("camera ready at {}x{}", dimensions.width, dimensions.height);
        self.canvas
            .borrow_mut()
            .resize(dimensions.width, dimensions.height);

        let detector = self.detector().await?;
        if !self.is_current(epoch) {
            return Ok(None);
        }
        Ok(Some((capture, detector)))
    }

    /// The shared detector, created on first use. Concurrent callers wait for
    /// the same load.
    async fn detector(&self) -> Result<Rc<P::Detector>> {
        let mut slot = self.detector.lock().await;
        if let Some(detector) = slot.as_ref() {
            return Ok(Rc::clone(detector));
        }

        let config = &self.config.detector;
        info!("loading {}", config.model);
        let clock = Instant::now();
        let detector = Rc::new(self.platform.load_detector(config).await?);
        info!("model loaded in {:?}", clock.elapsed());

        *slot = Some(Rc::clone(&detector));
        Ok(detector)
    }

    async fn run(&self, epoch: u64, capture: &P::Capture, detector: &P::Detector) -> Result<()> {
        let options = EstimateOptions {
            flip_horizontal: self.config.detector.flip_horizontal,
        };

        while self.is_current(epoch) {
            let clock = Instant::now();
            let persons = match detector.estimate(capture, options).await {
                Ok(persons) => persons,
                Err(err) if !self.is_current(epoch) => {
                    debug!("ignoring estimation error after stop: {err}");
                    break;
                }
                Err(err) => return Err(err),
            };
            if !self.is_current(epoch) {
                debug!("dropping {} detections after stop", persons.len());
                break;
            }
            debug!("pose estimation took {:?}", clock.elapsed());

            self.draw(capture, &persons)?;
            self.record(persons.len());
            self.platform.next_paint().await;
        }
        Ok(())
    }

    fn draw(&self, capture: &P::Capture, persons: &[Person]) -> Result<()> {
        let mut canvas = self.canvas.borrow_mut();
        canvas.clear();
        canvas.draw_frame(capture)?;
        for person in persons {
            skeleton::render(person, &mut *canvas);
        }
        Ok(())
    }

    fn record(&self, persons: usize) {
        let mut stats = self.stats.get();
        stats.record(persons);
        self.stats.set(stats);

        if let Some(fps) = self.fps.borrow_mut().tick(Instant::now()) {
            info!("{fps:.1} fps, {persons} person(s) in view");
        }
    }

    /// Surfaces `err` and resets to stopped, unless the session already moved
    /// on from `epoch`.
    fn fail(&self, epoch: u64, err: Error) -> Error {
        if !self.is_current(epoch) {
            warn!("error after stop: {err}");
            return err;
        }
        error!("pose estimation failed: {err}");
        self.set_running(false);
        self.release_capture();
        self.canvas.borrow_mut().clear();
        self.platform.show_status(&Status::Failed(err.to_string()));
        err
    }

    fn set_running(&self, running: bool) -> u64 {
        let epoch = self.epoch.get() + 1;
        self.epoch.set(epoch);
        self.running.set(running);
        self.platform.set_running(running);
        epoch
    }

    fn is_current(&self, epoch: u64) -> bool {
        self.running.get() && self.epoch.get() == epoch
    }

    fn release_capture(&self) {
        let capture = self.capture.borrow_mut().take();
        if let Some(capture) = capture {
            capture.stop();
            debug!("camera released");
        }
    }
}
