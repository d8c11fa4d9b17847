use crossterm::{
    cursor, queue,
    style::{Color, Print, SetBackgroundColor, SetForegroundColor},
};
use solarium::{
    body::{BodyKind, CelestialBody},
    camera::CameraPose,
    catalog::STARS,
    math::{Vec3, TAU},
    orbit::BodyPose,
    panel::{distance_au, format_au, info_lines, moon_lines},
    Rgb, Simulation,
};
use std::io::{self, Write};
use std::ops::Range;

pub(crate) const ASPECT_X: f64 = 0.65;
const NEAR: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Cell {
    pub(crate) ch: char,
    pub(crate) fg: Color,
    pub(crate) bg: Color,
}

impl Cell {
    pub(crate) fn blank(bg: Color) -> Self {
        Self { ch: ' ', fg: Color::Reset, bg }
    }
}

pub(crate) fn to_color(c: Rgb) -> Color {
    Color::Rgb { r: c.r, g: c.g, b: c.b }
}

/// Cell grid plus a per-cell depth so nearer geometry wins.
pub(crate) struct Frame {
    pub(crate) w: u16,
    pub(crate) h: u16,
    pub(crate) cells: Vec<Cell>,
    depth: Vec<f64>,
}

impl Frame {
    pub(crate) fn new(w: u16, h: u16) -> Self {
        let n = w as usize * h as usize;
        Self {
            w,
            h,
            cells: vec![Cell::blank(Color::Black); n],
            depth: vec![f64::INFINITY; n],
        }
    }

    pub(crate) fn clear(&mut self) {
        self.cells.fill(Cell::blank(Color::Black));
        self.depth.fill(f64::INFINITY);
    }

    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.w as i32 || y >= self.h as i32 {
            return None;
        }
        Some(y as usize * self.w as usize + x as usize)
    }

    pub(crate) fn put(&mut self, x: i32, y: i32, c: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = c;
        }
    }

    /// Write only if nothing nearer already occupies the cell.
    pub(crate) fn put_depth(&mut self, x: i32, y: i32, z: f64, c: Cell) {
        if let Some(i) = self.idx(x, y) {
            if z <= self.depth[i] {
                self.depth[i] = z;
                self.cells[i] = c;
            }
        }
    }

    pub(crate) fn write_str(&mut self, x: u16, y: u16, s: &str, fg: Color) {
        for (i, ch) in s.chars().enumerate() {
            self.put(x as i32 + i as i32, y as i32, Cell { ch, fg, bg: Color::Black });
        }
    }

    /// Word-wrap `s` into `max_w` columns. Returns rows used.
    pub(crate) fn write_wrapped(&mut self, x: u16, y: u16, max_w: u16, s: &str, fg: Color) -> u16 {
        let lines = wrap(s, max_w as usize);
        for (i, line) in lines.iter().enumerate() {
            self.write_str(x, y.saturating_add(i as u16), line, fg);
        }
        lines.len() as u16
    }

    pub(crate) fn box_draw(&mut self, x0: u16, y0: u16, bw: u16, bh: u16, fg: Color) {
        if bw < 2 || bh < 2 {
            return;
        }
        let (x0, y0) = (x0 as i32, y0 as i32);
        let x1 = x0 + bw as i32 - 1;
        let y1 = y0 + bh as i32 - 1;
        let c = |ch| Cell { ch, fg, bg: Color::Black };
        for x in x0 + 1..x1 {
            self.put(x, y0, c('─'));
            self.put(x, y1, c('─'));
        }
        for y in y0 + 1..y1 {
            self.put(x0, y, c('│'));
            self.put(x1, y, c('│'));
        }
        self.put(x0, y0, c('┌'));
        self.put(x1, y0, c('┐'));
        self.put(x0, y1, c('└'));
        self.put(x1, y1, c('┘'));
    }
}

pub(crate) fn wrap(s: &str, max_w: usize) -> Vec<String> {
    let mut out = Vec::new();
    if max_w == 0 {
        return out;
    }
    let mut line = String::new();
    for word in s.split_whitespace() {
        let wlen = word.chars().count();
        if wlen > max_w {
            if !line.is_empty() {
                out.push(std::mem::take(&mut line));
            }
            let chars: Vec<char> = word.chars().collect();
            for chunk in chars.chunks(max_w) {
                out.push(chunk.iter().collect());
            }
            continue;
        }
        let need = if line.is_empty() { wlen } else { line.chars().count() + 1 + wlen };
        if need > max_w && !line.is_empty() {
            out.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        out.push(line);
    }
    out
}

pub(crate) fn render_diff(out: &mut impl Write, prev: &mut Frame, cur: &Frame) -> io::Result<()> {
    let mut cur_fg = Color::Reset;
    let mut cur_bg = Color::Reset;

    for y in 0..cur.h as usize {
        for x in 0..cur.w as usize {
            let i = y * cur.w as usize + x;
            if prev.cells[i] == cur.cells[i] {
                continue;
            }
            prev.cells[i] = cur.cells[i];

            let c = cur.cells[i];
            queue!(out, cursor::MoveTo(x as u16, y as u16))?;
            if c.bg != cur_bg {
                cur_bg = c.bg;
                queue!(out, SetBackgroundColor(cur_bg))?;
            }
            if c.fg != cur_fg {
                cur_fg = c.fg;
                queue!(out, SetForegroundColor(cur_fg))?;
            }
            queue!(out, Print(c.ch))?;
        }
    }
    Ok(())
}

// -------------------- Projection --------------------

/// Pinhole projection from a look-at camera into a cell rectangle.
pub(crate) struct Projector {
    eye: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    focal: f64,
    cx: f64,
    cy: f64,
    far: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Projected {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) depth: f64,
    /// Cells per world unit at this depth.
    pub(crate) scale: f64,
}

impl Projector {
    pub(crate) fn new(pose: CameraPose, fov_y_degrees: f64, far: f64, view_w: u16, view_h: u16) -> Self {
        let forward = (pose.look_at - pose.position).norm();
        let mut right = forward.cross(Vec3::new(0.0, 1.0, 0.0));
        if right.len() < 1e-9 {
            right = Vec3::new(1.0, 0.0, 0.0);
        }
        let right = right.norm();
        let up = right.cross(forward);
        let half = (fov_y_degrees.to_radians() * 0.5).tan().max(1e-6);
        Self {
            eye: pose.position,
            forward,
            right,
            up,
            focal: (view_h as f64 * 0.5) / half,
            cx: view_w as f64 * 0.5,
            cy: view_h as f64 * 0.5,
            far,
        }
    }

    pub(crate) fn project(&self, p: Vec3) -> Option<Projected> {
        let d = p - self.eye;
        let z = d.dot(self.forward);
        if z <= NEAR || z > self.far {
            return None;
        }
        let scale = self.focal / z;
        Some(Projected {
            x: self.cx + d.dot(self.right) * scale / ASPECT_X,
            y: self.cy - d.dot(self.up) * scale,
            depth: z,
            scale,
        })
    }

    /// Cast a ray from the eye through screen point `(x, y)` and return where
    /// it meets the orbital plane `y = 0`, if it does.
    pub(crate) fn ground_point(&self, x: f64, y: f64) -> Option<Vec3> {
        let dir = self.forward
            + self.right * ((x - self.cx) * ASPECT_X / self.focal)
            + self.up * ((self.cy - y) / self.focal);
        if dir.y.abs() < 1e-12 {
            return None;
        }
        let t = -self.eye.y / dir.y;
        if t <= 0.0 || !t.is_finite() {
            return None;
        }
        Some(self.eye + dir * t)
    }
}

// -------------------- Scene --------------------

pub(crate) struct View {
    pub(crate) show_labels: bool,
    pub(crate) show_orbits: bool,
    pub(crate) show_moons: bool,
    pub(crate) paused: bool,
    pub(crate) date: String,
    /// Last mouse cell, if the terminal reported one.
    pub(crate) pointer: Option<(u16, u16)>,
}

pub(crate) const HUD_W: u16 = 36;

pub(crate) fn render_scene(frame: &mut Frame, sim: &Simulation, view: &View, now_ms: f64) {
    let hud_w = HUD_W.min(frame.w / 2);
    let map_w = frame.w.saturating_sub(hud_w);
    let spec = sim.spec();
    let proj = Projector::new(sim.camera().pose(), spec.fov_y_degrees, spec.far_plane, map_w, frame.h);
    let (mw, fh) = (map_w as f64, frame.h as f64);
    let clip = |p: &Projected| p.x >= 0.0 && p.y >= 0.0 && p.x < mw && p.y < fh;

    for cloud in sim.clouds() {
        let is_stars = cloud.spec.key == STARS;
        for p in cloud.world_points() {
            let Some(s) = proj.project(p) else { continue };
            if !clip(&s) {
                continue;
            }
            let (ch, col) = if is_stars {
                ('·', Rgb { r: 150, g: 150, b: 170 })
            } else {
                (if s.scale * 3.0 > 0.5 { '•' } else { '·' }, cloud.spec.color)
            };
            frame.put_depth(s.x as i32, s.y as i32, s.depth, Cell { ch, fg: to_color(col), bg: Color::Black });
        }
    }

    if view.show_orbits {
        for body in sim.table().orbiting() {
            let Some(r) = body.orbit_radius else { continue };
            let steps = 360;
            for i in 0..steps {
                let a = TAU * i as f64 / steps as f64;
                let p = Vec3::new(a.cos() * r, 0.0, a.sin() * r);
                let Some(s) = proj.project(p) else { continue };
                if clip(&s) && i % 2 == 0 {
                    let col = Rgb { r: 60, g: 70, b: 90 };
                    frame.put_depth(s.x as i32, s.y as i32, s.depth, Cell { ch: '·', fg: to_color(col), bg: Color::Black });
                }
            }
        }
    }

    // far to near so labels of near bodies stay readable
    let mut visible: Vec<(&CelestialBody, &BodyPose, Projected)> = sim
        .bodies()
        .filter(|(b, _)| b.kind != BodyKind::Region)
        .filter_map(|(b, pose)| proj.project(pose.position).map(|s| (b, pose, s)))
        .collect();
    visible.sort_by(|a, b| b.2.depth.total_cmp(&a.2.depth));

    let selected = sim.selected().map(|b| b.key);
    for (body, pose, s) in &visible {
        draw_body(frame, &proj, body, pose, *s, map_w);
        if view.show_labels || selected == Some(body.key) {
            let r_cells = (body.visual_radius * s.scale).max(0.5);
            let lx = (s.x + r_cells / ASPECT_X + 1.0) as i32;
            let ly = (s.y - r_cells) as i32;
            let fg = if selected == Some(body.key) { Color::White } else { Color::Rgb { r: 150, g: 150, b: 150 } };
            for (i, ch) in body.display_name.chars().enumerate() {
                let x = lx + i as i32;
                if x < map_w as i32 {
                    frame.put(x, ly, Cell { ch, fg, bg: Color::Black });
                }
            }
        }
    }

    let cursor_au = view
        .pointer
        .and_then(|p| pointer_distance_au(&proj, p, map_w, frame.h, spec.units_per_au));
    render_hud(frame, sim, view, map_w, hud_w, cursor_au, now_ms);
}

/// Distance from the sun, in AU, of the orbital-plane point under a cell of
/// the map. `None` off the map or when the ray misses the plane.
pub(crate) fn pointer_distance_au(proj: &Projector, cell: (u16, u16), map_w: u16, h: u16, units_per_au: f64) -> Option<f64> {
    let (col, row) = cell;
    if col >= map_w || row >= h {
        return None;
    }
    let hit = proj.ground_point(col as f64 + 0.5, row as f64 + 0.5)?;
    Some(distance_au(hit, units_per_au))
}

fn draw_body(frame: &mut Frame, proj: &Projector, body: &CelestialBody, pose: &BodyPose, s: Projected, map_w: u16) {
    let r_cells = body.visual_radius * s.scale;
    let base = body.color;

    if let Some(ring) = body.rings {
        let inner = body.visual_radius + ring.inner_offset;
        let outer = body.visual_radius + ring.outer_offset;
        let (st, ct) = pose.tilt.sin_cos();
        for band in 0..4 {
            let rr = inner + (outer - inner) * (band as f64 + 0.5) / 4.0;
            for i in 0..96 {
                let a = TAU * i as f64 / 96.0 + pose.spin * 0.01;
                // equatorial ring, tilted about Z
                let local = Vec3::new(a.cos() * rr, 0.0, a.sin() * rr);
                let tilted = Vec3::new(local.x * ct - local.y * st, local.x * st + local.y * ct, local.z);
                let Some(p) = proj.project(pose.position + tilted) else { continue };
                if p.x >= 0.0 && p.x < map_w as f64 {
                    let col = ring.color.scale(0.55 + 0.1 * band as f64);
                    frame.put_depth(p.x as i32, p.y as i32, p.depth, Cell { ch: '─', fg: to_color(col), bg: Color::Black });
                }
            }
        }
    }

    if r_cells < 0.75 {
        let ch = if body.kind == BodyKind::Star { '☼' } else { '•' };
        if s.x < map_w as f64 {
            frame.put_depth(s.x as i32, s.y as i32, s.depth, Cell { ch, fg: to_color(base), bg: Color::Black });
        }
        return;
    }

    // shaded disc; light comes from the sun at the origin
    let light = (Vec3::ZERO - pose.position).norm();
    let (xs, ys) = disc_bounds(s, r_cells, map_w, frame.h);
    for y in ys {
        for x in xs.clone() {
            let nx = ((x as f64 + 0.5 - s.x) * ASPECT_X) / r_cells;
            let ny = (y as f64 + 0.5 - s.y) / r_cells;
            let rr = nx * nx + ny * ny;
            if rr > 1.0 {
                continue;
            }
            let nz = (1.0 - rr).sqrt();
            let shade = if body.kind == BodyKind::Star {
                0.75 + 0.25 * nz
            } else {
                // band texture drifts with the body's spin
                let band = 0.5 + 0.5 * (ny * 6.0 + pose.spin).sin();
                let n = proj.right * nx - proj.up * ny - proj.forward * nz;
                let lambert = n.dot(light).max(0.0);
                0.12 + 0.78 * lambert + 0.1 * band
            };
            let ch = if shade > 0.75 {
                '█'
            } else if shade > 0.5 {
                '▓'
            } else if shade > 0.3 {
                '▒'
            } else {
                '░'
            };
            let z = s.depth - nz * body.visual_radius;
            frame.put_depth(x, y, z, Cell { ch, fg: to_color(base.scale(shade.max(0.25))), bg: Color::Black });
        }
    }
}

/// Cell ranges covered by a disc of `r_cells` around `s`, cut to the map.
/// A body grazing the near plane projects far larger than the screen.
fn disc_bounds(s: Projected, r_cells: f64, map_w: u16, h: u16) -> (Range<i32>, Range<i32>) {
    let rx = r_cells / ASPECT_X + 1.0;
    let ry = r_cells + 1.0;
    let span = |c: f64, r: f64, len: u16| {
        let lo = (c - r).floor().max(0.0).min(len as f64) as i32;
        let hi = (c + r).ceil().max(-1.0).min(len as f64 - 1.0) as i32 + 1;
        lo..hi.max(lo)
    };
    (span(s.x, rx, map_w), span(s.y, ry, h))
}

fn render_hud(
    frame: &mut Frame,
    sim: &Simulation,
    view: &View,
    map_w: u16,
    hud_w: u16,
    cursor_au: Option<f64>,
    now_ms: f64,
) {
    let fg = Color::Rgb { r: 220, g: 220, b: 220 };
    let dim = Color::Rgb { r: 130, g: 130, b: 130 };
    let edge = Color::Rgb { r: 80, g: 95, b: 120 };
    let accent = Color::Rgb { r: 255, g: 210, b: 120 };

    for y in 0..frame.h {
        frame.put(map_w as i32, y as i32, Cell { ch: '│', fg: edge, bg: Color::Black });
    }
    frame.box_draw(map_w, 0, hud_w, frame.h, edge);

    let x = map_w + 2;
    let pw = hud_w.saturating_sub(4);
    let limit = frame.h.saturating_sub(2);
    let mut y = 1u16;
    let line = |frame: &mut Frame, y: &mut u16, s: &str, c: Color| {
        if *y <= limit {
            *y = y.saturating_add(frame.write_wrapped(x, *y, pw, s, c));
        }
    };

    let spec = sim.spec();
    let pose = sim.camera().pose();
    line(frame, &mut y, "Solar System Tour", fg);
    line(frame, &mut y, &format!("Date: {}", view.date), dim);
    line(frame, &mut y, &format!("Day: {:.1}", sim.simulated_days()), dim);
    line(
        frame,
        &mut y,
        &format!("Speed: {}x  {}", sim.speed(), if view.paused { "paused" } else { "running" }),
        dim,
    );
    line(frame, &mut y, &format!("Preset: {}", spec.preset), dim);
    line(frame, &mut y, &format!("Target: {}", format_au(distance_au(pose.look_at, spec.units_per_au))), dim);
    line(frame, &mut y, &format!("Camera: {}", format_au(distance_au(pose.position, spec.units_per_au))), dim);
    let cursor = cursor_au.map(format_au).unwrap_or_else(|| "N/A".to_string());
    line(frame, &mut y, &format!("Cursor: {cursor}"), dim);
    y = y.saturating_add(1);

    if let Some(body) = sim.selected() {
        line(frame, &mut y, body.display_name, accent);
        let lines = if view.show_moons { moon_lines(body) } else { info_lines(body) };
        for l in lines {
            line(frame, &mut y, &l, dim);
        }
        y = y.saturating_add(1);
    }

    if let Some(fact) = sim.popup().visible(now_ms) {
        let rows = wrapped_rows(fact, pw.saturating_sub(2));
        let bh = rows + 2;
        if y + bh <= limit {
            frame.box_draw(x - 1, y, pw + 2, bh, accent);
            frame.write_wrapped(x, y + 1, pw.saturating_sub(2), fact, fg);
            y += bh + 1;
        }
    }

    let controls = [
        "0 system  s sun  1-8 planets",
        "b asteroids  k kuiper  o oort",
        "space pause  +/- speed  </> steps",
        "arrows/a/d orbit  w/z zoom",
        "m moons  l labels  r orbits",
        "x close fact  mouse: distance",
        "q quit",
    ];
    let needed = controls.len() as u16 + 1;
    let mut by = limit.saturating_sub(needed).max(y);
    if by <= limit {
        frame.write_str(x, by, "Controls", fg);
        by += 1;
    }
    for c in controls {
        if by > limit {
            break;
        }
        frame.write_str(x, by, c, dim);
        by += 1;
    }
}

fn wrapped_rows(s: &str, w: u16) -> u16 {
    wrap(s, w as usize).len() as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use solarium::Preset;

    #[test]
    fn wrap_breaks_on_words_and_splits_long_ones() {
        assert_eq!(wrap("the quick brown fox", 9), vec!["the quick", "brown fox"]);
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert!(wrap("anything", 0).is_empty());
    }

    #[test]
    fn look_at_point_projects_to_centre() {
        let pose = CameraPose::new(Vec3::new(0.0, 500.0, 1000.0), Vec3::ZERO);
        let p = Projector::new(pose, 60.0, 1e6, 80, 40);
        let s = p.project(Vec3::ZERO).unwrap();
        assert!((s.x - 40.0).abs() < 1e-9 && (s.y - 20.0).abs() < 1e-9);
    }

    #[test]
    fn points_behind_camera_are_culled() {
        let pose = CameraPose::new(Vec3::new(0.0, 0.0, 100.0), Vec3::ZERO);
        let p = Projector::new(pose, 60.0, 1e6, 80, 40);
        assert!(p.project(Vec3::new(0.0, 0.0, 200.0)).is_none());
        assert!(p.project(Vec3::new(0.0, 10.0, 0.0)).unwrap().y < 20.0);
    }

    #[test]
    fn straight_down_view_does_not_degenerate() {
        let pose = CameraPose::new(Vec3::new(0.0, 1000.0, 0.0), Vec3::ZERO);
        let p = Projector::new(pose, 60.0, 1e6, 80, 40);
        let s = p.project(Vec3::new(100.0, 0.0, 0.0)).unwrap();
        assert!(s.x.is_finite() && s.y.is_finite());
    }

    #[test]
    fn nearer_cells_win() {
        let mut f = Frame::new(4, 4);
        let a = Cell { ch: 'a', fg: Color::White, bg: Color::Black };
        let b = Cell { ch: 'b', fg: Color::White, bg: Color::Black };
        f.put_depth(1, 1, 5.0, a);
        f.put_depth(1, 1, 9.0, b);
        assert_eq!(f.cells[5].ch, 'a');
        f.put_depth(1, 1, 1.0, b);
        assert_eq!(f.cells[5].ch, 'b');
        f.put_depth(-1, 9, 0.0, b);
    }

    #[test]
    fn diff_only_emits_changed_cells() {
        let mut prev = Frame::new(3, 2);
        let mut cur = Frame::new(3, 2);
        cur.write_str(0, 0, "hi", Color::White);
        let mut out = Vec::new();
        render_diff(&mut out, &mut prev, &cur).unwrap();
        assert!(!out.is_empty());
        assert_eq!(prev.cells, cur.cells);

        let mut again = Vec::new();
        render_diff(&mut again, &mut prev, &cur).unwrap();
        assert!(again.is_empty());
    }

    #[test]
    fn scene_renders_sun_and_hud() {
        let mut sim = Simulation::new(Preset::Classic, 1).unwrap();
        sim.select("sun", 0.0);
        sim.frame(0.016, 5000.0);
        let mut f = Frame::new(120, 40);
        let view = View { show_labels: true, show_orbits: true, show_moons: false, paused: false, date: "2026-10-19".into(), pointer: None };
        render_scene(&mut f, &sim, &view, 5000.0);
        let text: String = f.cells.iter().map(|c| c.ch).collect();
        assert!(text.contains("Solar System Tour"));
        assert!(text.contains('█'), "sun disc should be drawn up close");
        assert!(text.contains("Sun"));
        assert!(text.contains("Cursor: N/A"));
    }

    fn close_up() -> (Projector, CelestialBody) {
        let pose = CameraPose::new(Vec3::new(0.0, 0.0, 100.0), Vec3::ZERO);
        let proj = Projector::new(pose, 60.0, 300_000.0, 84, 40);
        let table = Preset::Classic.table().unwrap();
        (proj, table.get("jupiter").unwrap().clone())
    }

    #[test]
    fn body_grazing_the_near_plane_is_cut_to_the_map() {
        let (proj, jupiter) = close_up();
        let eye = Vec3::new(0.0, 0.0, 100.0);

        // just past the near plane and well off to the side
        let pose = BodyPose { position: eye + Vec3::new(150.0, 0.0, -0.12), spin: 0.0, tilt: 0.0 };
        let s = proj.project(pose.position).unwrap();
        let r_cells = jupiter.visual_radius * s.scale;
        assert!(r_cells > 1000.0);
        let (xs, ys) = disc_bounds(s, r_cells, 84, 40);
        assert!(xs.len() * ys.len() <= 84 * 40);
        let mut f = Frame::new(120, 40);
        draw_body(&mut f, &proj, &jupiter, &pose, s, 84);

        // dead ahead: the disc fills the whole map and nothing else
        let pose = BodyPose { position: eye + Vec3::new(0.0, 0.0, -0.12), spin: 0.0, tilt: 0.0 };
        let s = proj.project(pose.position).unwrap();
        let (xs, ys) = disc_bounds(s, jupiter.visual_radius * s.scale, 84, 40);
        assert_eq!((xs, ys), (0..84, 0..40));
        let mut f = Frame::new(120, 40);
        draw_body(&mut f, &proj, &jupiter, &pose, s, 84);
        for y in 0..40usize {
            assert!(f.cells[y * 120..y * 120 + 84].iter().all(|c| c.ch != ' '));
            assert!(f.cells[y * 120 + 84..(y + 1) * 120].iter().all(|c| c.ch == ' '));
        }
    }

    #[test]
    fn disc_off_screen_covers_nothing() {
        let s = Projected { x: -500.0, y: 20.0, depth: 10.0, scale: 1.0 };
        let (xs, _) = disc_bounds(s, 3.0, 84, 40);
        assert!(xs.is_empty());
        let s = Projected { x: 5000.0, y: 20.0, depth: 10.0, scale: 1.0 };
        let (xs, _) = disc_bounds(s, 3.0, 84, 40);
        assert!(xs.is_empty());
    }

    #[test]
    fn screen_centre_lands_on_the_look_at_point() {
        let target = Vec3::new(600.0, 0.0, 0.0);
        let pose = CameraPose::new(Vec3::new(600.0, 120.0, 240.0), target);
        let proj = Projector::new(pose, 60.0, 300_000.0, 84, 40);
        let hit = proj.ground_point(42.0, 20.0).unwrap();
        assert!((hit - target).len() < 1e-6);

        // any cell's ground point projects back onto that cell
        let hit = proj.ground_point(10.5, 30.5).unwrap();
        let back = proj.project(hit).unwrap();
        assert!((back.x - 10.5).abs() < 1e-6 && (back.y - 30.5).abs() < 1e-6);
    }

    #[test]
    fn pointer_above_the_horizon_has_no_distance() {
        let pose = CameraPose::new(Vec3::new(0.0, 10.0, 1000.0), Vec3::new(0.0, 10.0, 0.0));
        let proj = Projector::new(pose, 60.0, 300_000.0, 84, 40);
        assert!(pointer_distance_au(&proj, (42, 0), 84, 40, 600.0).is_none());
        assert!(pointer_distance_au(&proj, (42, 39), 84, 40, 600.0).is_some());
        // the HUD column is not part of the map
        assert!(pointer_distance_au(&proj, (90, 39), 84, 40, 600.0).is_none());
    }

    #[test]
    fn pointer_at_centre_reads_sun_distance() {
        let pose = CameraPose::new(Vec3::new(0.0, 500.0, 1000.0), Vec3::ZERO);
        let proj = Projector::new(pose, 60.0, 300_000.0, 84, 40);
        // cell (41, 19) has its centre half a cell off the exact middle
        let au = pointer_distance_au(&proj, (41, 19), 84, 40, 600.0).unwrap();
        assert!(au < 0.1, "{au}");
    }
}
