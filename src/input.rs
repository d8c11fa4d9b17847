use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use solarium::catalog::{ASTEROID_BELT, KUIPER_BELT, OORT_CLOUD, PLANETS, SOLAR_SYSTEM, SUN};
use std::time::Duration;

/// Speeds reachable with `<` and `>`.
pub(crate) const SPEED_STEPS: [f64; 5] = [0.0, 1.0, 10.0, 100.0, 1000.0];

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Action {
    Select(&'static str),
    TogglePause,
    SpeedScale(f64),
    SpeedStep(i32),
    ToggleLabels,
    ToggleOrbits,
    ToggleMoons,
    DismissFact,
    Orbit { yaw: f64, pitch: f64 },
    Dolly(f64),
    /// Mouse moved to (column, row).
    Pointer(u16, u16),
    Quit,
}

pub(crate) fn collect_actions(max_wait: Duration) -> anyhow::Result<Vec<Action>> {
    let mut out = Vec::new();
    let timeout = Duration::from_millis(1).min(max_wait);
    while event::poll(timeout)? {
        let action = match event::read()? {
            Event::Key(k) if k.kind == KeyEventKind::Press || k.kind == KeyEventKind::Repeat => {
                map_key(k.code, k.modifiers)
            }
            Event::Mouse(m) => map_mouse(m),
            _ => None,
        };
        if let Some(a) = action {
            // moves arrive in bursts; only the latest position matters
            if matches!(a, Action::Pointer(..)) && matches!(out.last(), Some(Action::Pointer(..))) {
                out.pop();
            }
            out.push(a);
        }
        if out.len() >= 32 {
            break;
        }
    }
    Ok(out)
}

pub(crate) fn map_mouse(m: MouseEvent) -> Option<Action> {
    match m.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(Action::Pointer(m.column, m.row)),
        _ => None,
    }
}

pub(crate) fn map_key(code: KeyCode, mods: KeyModifiers) -> Option<Action> {
    if mods.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }
    let a = match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,

        KeyCode::Char('0') => Action::Select(SOLAR_SYSTEM),
        KeyCode::Char(c @ '1'..='8') => Action::Select(PLANETS[(c as u8 - b'1') as usize]),
        KeyCode::Char('s') | KeyCode::Char('S') => Action::Select(SUN),
        KeyCode::Char('b') | KeyCode::Char('B') => Action::Select(ASTEROID_BELT),
        KeyCode::Char('k') | KeyCode::Char('K') => Action::Select(KUIPER_BELT),
        KeyCode::Char('o') | KeyCode::Char('O') => Action::Select(OORT_CLOUD),

        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Char('P') => Action::TogglePause,
        KeyCode::Char('=') | KeyCode::Char('+') => Action::SpeedScale(2.0),
        KeyCode::Char('-') => Action::SpeedScale(0.5),
        KeyCode::Char('>') | KeyCode::Char('.') => Action::SpeedStep(1),
        KeyCode::Char('<') | KeyCode::Char(',') => Action::SpeedStep(-1),

        KeyCode::Char('l') | KeyCode::Char('L') => Action::ToggleLabels,
        KeyCode::Char('r') | KeyCode::Char('R') => Action::ToggleOrbits,
        KeyCode::Char('m') | KeyCode::Char('M') => Action::ToggleMoons,
        KeyCode::Char('x') | KeyCode::Char('X') => Action::DismissFact,

        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Action::Orbit { yaw: -0.08, pitch: 0.0 },
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Action::Orbit { yaw: 0.08, pitch: 0.0 },
        KeyCode::Up => Action::Orbit { yaw: 0.0, pitch: 0.06 },
        KeyCode::Down => Action::Orbit { yaw: 0.0, pitch: -0.06 },
        KeyCode::Char('w') | KeyCode::Char('W') => Action::Dolly(1.0 / 1.15),
        KeyCode::Char('z') | KeyCode::Char('Z') => Action::Dolly(1.15),
        _ => return None,
    };
    Some(a)
}

/// Next speed preset in `dir` from `current`. Off-grid speeds snap to the
/// nearest preset in that direction.
pub(crate) fn step_speed(current: f64, dir: i32) -> f64 {
    if dir > 0 {
        SPEED_STEPS.iter().copied().find(|s| *s > current).unwrap_or(SPEED_STEPS[SPEED_STEPS.len() - 1])
    } else {
        SPEED_STEPS.iter().rev().copied().find(|s| *s < current).unwrap_or(SPEED_STEPS[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(c: char) -> Option<Action> {
        map_key(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn number_keys_pick_planets_in_order() {
        assert_eq!(key('0'), Some(Action::Select(SOLAR_SYSTEM)));
        assert_eq!(key('1'), Some(Action::Select("mercury")));
        assert_eq!(key('3'), Some(Action::Select("earth")));
        assert_eq!(key('8'), Some(Action::Select("neptune")));
        assert_eq!(key('9'), None);
    }

    #[test]
    fn region_keys() {
        assert_eq!(key('s'), Some(Action::Select(SUN)));
        assert_eq!(key('b'), Some(Action::Select(ASTEROID_BELT)));
        assert_eq!(key('K'), Some(Action::Select(KUIPER_BELT)));
        assert_eq!(key('o'), Some(Action::Select(OORT_CLOUD)));
    }

    #[test]
    fn ctrl_c_quits() {
        assert_eq!(map_key(KeyCode::Char('c'), KeyModifiers::CONTROL), Some(Action::Quit));
        assert_eq!(map_key(KeyCode::Esc, KeyModifiers::NONE), Some(Action::Quit));
    }

    #[test]
    fn mouse_motion_reports_the_cell() {
        use crossterm::event::MouseButton;
        let ev = |kind| MouseEvent { kind, column: 12, row: 7, modifiers: KeyModifiers::NONE };
        assert_eq!(map_mouse(ev(MouseEventKind::Moved)), Some(Action::Pointer(12, 7)));
        assert_eq!(map_mouse(ev(MouseEventKind::Drag(MouseButton::Left))), Some(Action::Pointer(12, 7)));
        assert_eq!(map_mouse(ev(MouseEventKind::ScrollUp)), None);
    }

    #[test]
    fn speed_steps_walk_the_ladder() {
        assert_eq!(step_speed(0.0, 1), 1.0);
        assert_eq!(step_speed(1.0, 1), 10.0);
        assert_eq!(step_speed(1000.0, 1), 1000.0);
        assert_eq!(step_speed(10.0, -1), 1.0);
        assert_eq!(step_speed(0.0, -1), 0.0);
        assert_eq!(step_speed(4.0, 1), 10.0);
        assert_eq!(step_speed(4.0, -1), 1.0);
    }
}
