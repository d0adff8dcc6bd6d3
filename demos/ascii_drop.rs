use impulse_2d::{
    core::SystemClock,
    math::{Vector2, PI},
    shapes::{Polygon, Shape, MAX_POLY_VERTEX_COUNT},
    DebugFlags, FixedTimestep, Material, PhysicsWorld, RigidBody,
};
use std::io::{stdout, Stdout, Write};
use std::time::Duration;
use crossterm::{
    ExecutableCommand, QueueableCommand,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton, MouseEventKind},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
    cursor::{Hide, Show, MoveTo},
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use rand::Rng;

// Scene extents in world units; the terminal is stretched to fit
const SCENE_WIDTH: f32 = 80.0;
const SCENE_HEIGHT: f32 = 60.0;
const FRAME_DURATION: Duration = Duration::from_millis(16);

// Terminal size detection
fn get_terminal_size() -> (usize, usize) {
    match term_size::dimensions() {
        Some((w, h)) => (w, h.saturating_sub(2).max(10)),
        None => (80, 22),
    }
}

struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Vec<(char, Color)>>,
}

impl Canvas {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![vec![(' ', Color::Reset); width]; height],
        }
    }

    fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill((' ', Color::Reset));
        }
    }

    fn to_cell(&self, point: Vector2) -> Option<(usize, usize)> {
        let col = (point.x / SCENE_WIDTH * self.width as f32).round();
        let row = (point.y / SCENE_HEIGHT * self.height as f32).round();
        if col < 0.0 || row < 0.0 || col >= self.width as f32 || row >= self.height as f32 {
            return None;
        }
        Some((col as usize, row as usize))
    }

    fn to_world(&self, col: u16, row: u16) -> Vector2 {
        Vector2::new(
            col as f32 / self.width as f32 * SCENE_WIDTH,
            row as f32 / self.height as f32 * SCENE_HEIGHT,
        )
    }

    fn plot(&mut self, point: Vector2, glyph: char, color: Color) {
        if let Some((col, row)) = self.to_cell(point) {
            self.cells[row][col] = (glyph, color);
        }
    }

    fn line(&mut self, from: Vector2, to: Vector2, glyph: char, color: Color) {
        let steps = (from.distance(&to) * 2.0).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.plot(from + (to - from) * t, glyph, color);
        }
    }

    fn present(&self, stdout: &mut Stdout) -> std::io::Result<()> {
        for (row, cells) in self.cells.iter().enumerate() {
            stdout.queue(MoveTo(0, row as u16))?;
            for &(glyph, color) in cells {
                stdout.queue(SetForegroundColor(color))?.queue(Print(glyph))?;
            }
        }
        stdout.queue(ResetColor)?;
        Ok(())
    }
}

fn draw_body(canvas: &mut Canvas, body: &RigidBody) {
    let color = if body.is_static() { Color::White } else { Color::Cyan };
    let position = body.get_position();

    match body.get_shape() {
        Shape::Circle(circle) => {
            let radius = circle.get_radius();
            let segments = 24;
            let mut previous = position + Vector2::new(radius, 0.0).rotate(body.get_orientation());
            for i in 1..=segments {
                let angle = body.get_orientation() + i as f32 * 2.0 * PI / segments as f32;
                let next = position + Vector2::new(radius, 0.0).rotate(angle);
                canvas.line(previous, next, 'o', color);
                previous = next;
            }

            // Spoke so the rotation is visible
            let spoke = position + Vector2::new(radius, 0.0).rotate(body.get_orientation());
            canvas.line(position, spoke, '.', color);
        }
        Shape::Polygon(polygon) => {
            let vertices: Vec<Vector2> = polygon.world_vertices(position).collect();
            for (i, vertex) in vertices.iter().enumerate() {
                let next = vertices[(i + 1) % vertices.len()];
                canvas.line(*vertex, next, '#', color);
            }
        }
    }
}

fn draw_debug(canvas: &mut Canvas, world: &PhysicsWorld) {
    let flags = world.get_debug_flags();

    for manifold in world.get_contacts() {
        for contact in manifold.get_contacts() {
            if flags.contains(DebugFlags::NORMALS) {
                canvas.line(*contact, *contact + manifold.normal * 3.0, '+', Color::Green);
            }
            if flags.contains(DebugFlags::CONTACTS) {
                canvas.plot(*contact, '*', Color::Red);
            }
        }
    }
}

fn spawn_polygon(world: &mut PhysicsWorld, at: Vector2, rng: &mut impl Rng) {
    let count = rng.gen_range(3..=MAX_POLY_VERTEX_COUNT);
    let extent = rng.gen_range(5.0..10.0);
    let points: Vec<Vector2> = (0..count)
        .map(|_| Vector2::new(rng.gen_range(-extent..extent), rng.gen_range(-extent..extent)))
        .collect();

    // Random point sets can collapse to a degenerate hull
    let Ok(polygon) = Polygon::from_points(&points) else {
        return;
    };

    let mut body = RigidBody::new(Shape::from(polygon), at);
    body.set_orientation(rng.gen_range(-PI..PI));
    body.set_material(Material::new(1.0, 0.4, 0.2, 0.2));
    world.add_body(body);
}

fn spawn_circle(world: &mut PhysicsWorld, at: Vector2, rng: &mut impl Rng) {
    let handle = world.add(Shape::circle(rng.gen_range(1.0..3.0)), at.x, at.y);
    if let Ok(body) = world.get_body_mut(handle) {
        body.set_orientation(rng.gen_range(-PI..PI));
    }
}

fn build_scene(world: &mut PhysicsWorld) {
    world.add_body(RigidBody::new_static(Shape::circle(5.0), Vector2::new(40.0, 40.0)));
    world.add_body(RigidBody::new_static(Shape::rectangle(30.0, 1.0), Vector2::new(40.0, 55.0)));
}

fn main() -> std::io::Result<()> {
    let (width, height) = get_terminal_size();
    let mut canvas = Canvas::new(width, height);
    let mut rng = rand::thread_rng();

    let mut world = PhysicsWorld::new(1.0 / 60.0, 10);
    let mut timestep = FixedTimestep::from_config(world.get_config());
    let mut clock = SystemClock::new();
    build_scene(&mut world);

    // Initialize terminal
    let mut stdout = stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    stdout.execute(Hide)?;
    stdout.execute(Clear(ClearType::All))?;

    'running: loop {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break 'running,
                    KeyCode::Char('f') => {
                        let enabled = !timestep.is_frame_stepping();
                        timestep.set_frame_stepping(enabled);
                    }
                    KeyCode::Char(' ') => timestep.request_step(),
                    KeyCode::Char('d') => world.set_debug_mode(!world.is_debug_mode()),
                    KeyCode::Char('c') => {
                        world.set_debug_flags(world.get_debug_flags() ^ DebugFlags::CONTACTS)
                    }
                    KeyCode::Char('n') => {
                        world.set_debug_flags(world.get_debug_flags() ^ DebugFlags::NORMALS)
                    }
                    KeyCode::Char('r') => {
                        world.clear();
                        build_scene(&mut world);
                    }
                    _ => {}
                },
                Event::Mouse(mouse) => {
                    let at = canvas.to_world(mouse.column, mouse.row);
                    match mouse.kind {
                        MouseEventKind::Down(MouseButton::Left) => spawn_polygon(&mut world, at, &mut rng),
                        MouseEventKind::Down(MouseButton::Right) => spawn_circle(&mut world, at, &mut rng),
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        timestep.run_frame(&mut world, &mut clock);

        canvas.clear();
        for body in world.get_bodies() {
            draw_body(&mut canvas, body);
        }
        draw_debug(&mut canvas, &world);
        canvas.present(&mut stdout)?;

        stdout.queue(MoveTo(0, height as u16))?;
        stdout.queue(Clear(ClearType::CurrentLine))?;
        if world.is_debug_mode() {
            stdout.queue(Print(format!(
                "t={:.2}s steps={} bodies={} manifolds={}{}",
                world.get_time(),
                world.get_step_count(),
                world.body_count(),
                world.get_contacts().len(),
                if timestep.is_frame_stepping() { " [frame stepping]" } else { "" },
            )))?;
        }
        stdout.queue(MoveTo(0, height as u16 + 1))?;
        stdout.queue(Print(
            "left click: polygon  right click: circle  f: frame step  space: step  d/c/n: debug  r: reset  q: quit",
        ))?;
        stdout.flush()?;

        std::thread::sleep(FRAME_DURATION);
    }

    // Clean up
    stdout.execute(Show)?;
    stdout.execute(DisableMouseCapture)?;
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    Ok(())
}
