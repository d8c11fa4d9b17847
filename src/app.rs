use crate::config::{save_settings_atomic, Paths, Settings};
use crate::input::{collect_actions, step_speed, Action};
use crate::render::{render_diff, render_scene, Frame, View};
use crate::Args;
use chrono::{DateTime, Utc};
use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::ResetColor,
    terminal::{
        self, BeginSynchronizedUpdate, Clear, ClearType, DisableLineWrap, EnableLineWrap,
        EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen,
    },
};
use solarium::Simulation;
use std::io::{self, Write};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Longest frame step fed to the simulation, so a stalled terminal does not
/// fling the planets forward.
const MAX_FRAME_SECONDS: f64 = 0.05;

struct Terminal {
    out: io::Stdout,
    prev: Frame,
    cur: Frame,
}

impl Terminal {
    fn begin() -> anyhow::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            out,
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide,
            DisableLineWrap,
            Clear(ClearType::All)
        )?;
        let (w, h) = terminal::size()?;
        Ok(Self { out, prev: Frame::new(w, h), cur: Frame::new(w, h) })
    }

    fn end(&mut self) -> anyhow::Result<()> {
        queue!(
            self.out,
            ResetColor,
            Clear(ClearType::All),
            cursor::Show,
            EnableLineWrap,
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        self.out.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn resize_if_needed(&mut self) -> anyhow::Result<()> {
        let (w, h) = terminal::size()?;
        if w != self.cur.w || h != self.cur.h {
            self.prev = Frame::new(w, h);
            self.cur = Frame::new(w, h);
            queue!(self.out, Clear(ClearType::All))?;
        }
        Ok(())
    }

    fn present(&mut self) -> anyhow::Result<()> {
        queue!(self.out, BeginSynchronizedUpdate)?;
        render_diff(&mut self.out, &mut self.prev, &self.cur)?;
        queue!(self.out, EndSynchronizedUpdate)?;
        self.out.flush()?;
        Ok(())
    }
}

struct App {
    sim: Simulation,
    settings: Settings,
    view: View,
    epoch: DateTime<Utc>,
    /// Speed to restore on unpause.
    resume_speed: f64,
    started: Instant,
    should_quit: bool,
}

impl App {
    fn new(sim: Simulation, settings: Settings, paused: bool) -> Self {
        let view = View {
            show_labels: settings.show_labels,
            show_orbits: settings.show_orbits,
            show_moons: false,
            paused: false,
            date: String::new(),
            pointer: None,
        };
        let mut app = Self {
            resume_speed: settings.speed,
            sim,
            settings,
            view,
            epoch: Utc::now(),
            started: Instant::now(),
            should_quit: false,
        };
        app.sim.set_speed(app.resume_speed);
        if paused {
            app.apply(Action::TogglePause);
        }
        app
    }

    fn now_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }

    fn apply(&mut self, action: Action) {
        let now_ms = self.now_ms();
        match action {
            Action::Quit => self.should_quit = true,
            Action::Pointer(col, row) => self.view.pointer = Some((col, row)),
            Action::Select(key) => {
                self.sim.select(key, now_ms);
            }
            Action::TogglePause => {
                self.view.paused = !self.view.paused;
                let speed = if self.view.paused { 0.0 } else { self.resume_speed };
                self.sim.set_speed(speed);
                debug!(paused = self.view.paused, "pause toggled");
            }
            Action::SpeedScale(k) => self.set_resume_speed(self.resume_speed * k),
            Action::SpeedStep(dir) => self.set_resume_speed(step_speed(self.resume_speed, dir)),
            Action::ToggleLabels => self.view.show_labels = !self.view.show_labels,
            Action::ToggleOrbits => self.view.show_orbits = !self.view.show_orbits,
            Action::ToggleMoons => self.view.show_moons = !self.view.show_moons,
            Action::DismissFact => self.sim.popup_mut().dismiss(),
            Action::Orbit { yaw, pitch } => self.sim.camera_mut().orbit(yaw, pitch),
            Action::Dolly(factor) => {
                let limits = self.sim.spec().orbit_limits;
                self.sim.camera_mut().dolly(factor, limits);
            }
        }
    }

    fn set_resume_speed(&mut self, speed: f64) {
        if !speed.is_finite() {
            return;
        }
        self.resume_speed = speed;
        if !self.view.paused {
            self.sim.set_speed(speed);
        }
    }

    fn run(&mut self, term: &mut Terminal) -> anyhow::Result<()> {
        let fps = self.settings.fps_cap.max(1);
        let frame_budget = Duration::from_secs_f64(1.0 / fps as f64);
        let mut last = Instant::now();

        while !self.should_quit {
            let frame_start = Instant::now();
            term.resize_if_needed()?;

            for action in collect_actions(frame_budget)? {
                self.apply(action);
                if self.should_quit {
                    break;
                }
            }

            let now = Instant::now();
            let dt = now.duration_since(last).as_secs_f64().min(MAX_FRAME_SECONDS);
            last = now;
            self.sim.frame(dt, self.now_ms());

            self.view.date = self.sim.clock().date_from(self.epoch).format("%Y-%m-%d").to_string();
            term.cur.clear();
            render_scene(&mut term.cur, &self.sim, &self.view, self.now_ms());
            term.present()?;

            let spent = frame_start.elapsed();
            if spent < frame_budget {
                std::thread::sleep(frame_budget - spent);
            }
        }
        Ok(())
    }

    fn into_settings(self) -> Settings {
        Settings {
            speed: self.resume_speed,
            show_labels: self.view.show_labels,
            show_orbits: self.view.show_orbits,
            ..self.settings
        }
    }
}

pub(crate) fn run(sim: Simulation, settings: Settings, paths: &Paths, args: &Args) -> anyhow::Result<()> {
    let mut app = App::new(sim, settings, args.paused);
    if let Some(key) = &args.select {
        let now_ms = app.now_ms();
        if app.sim.select(key, now_ms).is_none() {
            anyhow::bail!("unknown body or region '{key}'");
        }
    }

    let mut term = Terminal::begin()?;
    let result = app.run(&mut term);
    term.end()?;
    result?;

    if args.no_save {
        return Ok(());
    }
    let settings = app.into_settings();
    save_settings_atomic(&paths.settings_path, &settings)?;
    info!(path = %paths.settings_path.display(), "settings saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use solarium::Preset;

    fn app(paused: bool) -> App {
        let settings = Settings { speed: 10.0, ..Settings::default() };
        let sim = Simulation::new(Preset::Classic, 3).unwrap();
        App::new(sim, settings, paused)
    }

    #[test]
    fn pause_remembers_speed() {
        let mut a = app(false);
        assert_eq!(a.sim.speed(), 10.0);
        a.apply(Action::TogglePause);
        assert_eq!(a.sim.speed(), 0.0);
        a.apply(Action::SpeedScale(2.0));
        assert_eq!(a.sim.speed(), 0.0);
        a.apply(Action::TogglePause);
        assert_eq!(a.sim.speed(), 20.0);
    }

    #[test]
    fn starting_paused_keeps_saved_speed() {
        let a = app(true);
        assert!(a.view.paused);
        assert_eq!(a.sim.speed(), 0.0);
        assert_eq!(a.into_settings().speed, 10.0);
    }

    #[test]
    fn speed_steps_snap_to_ladder() {
        let mut a = app(false);
        a.apply(Action::SpeedStep(1));
        assert_eq!(a.sim.speed(), 100.0);
        a.apply(Action::SpeedStep(-1));
        a.apply(Action::SpeedStep(-1));
        assert_eq!(a.sim.speed(), 1.0);
    }

    #[test]
    fn toggles_flow_into_saved_settings() {
        let mut a = app(false);
        a.apply(Action::ToggleLabels);
        a.apply(Action::ToggleOrbits);
        let s = a.into_settings();
        assert!(!s.show_labels);
        assert!(!s.show_orbits);
    }

    #[test]
    fn mouse_motion_updates_pointer() {
        let mut a = app(false);
        assert_eq!(a.view.pointer, None);
        a.apply(Action::Pointer(4, 9));
        assert_eq!(a.view.pointer, Some((4, 9)));
    }

    #[test]
    fn orbit_input_cancels_transition() {
        let mut a = app(false);
        a.apply(Action::Select("earth"));
        assert!(a.sim.camera().is_animating());
        a.apply(Action::Orbit { yaw: 0.1, pitch: 0.0 });
        assert!(!a.sim.camera().is_animating());
        a.apply(Action::Quit);
        assert!(a.should_quit);
    }
}
