use ::rand::SeedableRng;
use ::rand::rngs::StdRng;
use macroquad::prelude::{
    BLACK, Color, KeyCode, WHITE, clear_background, draw_text, get_time, is_key_pressed, next_frame,
};
use tracing_subscriber::EnvFilter;
use veckit::math::utils::random_unit;
use veckit::math::{Anchor, AxisDirs};
use veckit::render::{MacroquadContext, StyleState, parse_hex_color};
use veckit::{AnchoredVec2, Stroke, Vec2, Veckit};

const ANCHORS: [Anchor; 7] = Anchor::ALL;

#[derive(Clone, Debug)]
struct Field {
    samples: Vec<(Vec2, f64)>,
}

impl Field {
    fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut samples = Vec::new();
        for i in -6..=6 {
            for j in -4..=4 {
                let p = Vec2::new(i as f64 * 40.0, j as f64 * 40.0);
                samples.push((p, random_unit(&mut rng)));
            }
        }
        Self { samples }
    }

    fn draw(&self, kit: &mut Veckit<MacroquadContext>, t: f64) -> veckit::Result<()> {
        let faint = Color::new(0.35, 0.35, 0.45, 1.0);
        for (p, n) in &self.samples {
            // Drift each sample slowly so the field animates.
            let n = ((n + 1.0 + t * 0.05).rem_euclid(2.0)) - 1.0;
            AnchoredVec2::new(*p, Vec2::from_noise(n) * 14.0).draw_arrow(
                kit,
                Stroke::new(faint, 1.0),
                Some(5.0),
            )?;
        }
        Ok(())
    }
}

fn draw_scene(kit: &mut Veckit<MacroquadContext>, field: &Field, t: f64) -> veckit::Result<()> {
    let red = parse_hex_color("#ff0000")?;
    let amber = parse_hex_color("#ffb000")?;

    field.draw(kit, t)?;

    // Axes
    for axis in [
        AnchoredVec2::from_points(Vec2::ZERO, Vec2::new(200.0, 0.0)),
        AnchoredVec2::from_points(Vec2::ZERO, Vec2::new(0.0, 200.0)),
    ] {
        axis.draw_arrow(kit, Stroke::INHERIT, None)?;
    }

    // The "F" glyph
    for stroke in [
        AnchoredVec2::from_points(Vec2::ZERO, Vec2::new(0.0, 100.0)),
        AnchoredVec2::from_points(Vec2::ZERO, Vec2::new(50.0, 0.0)).translate(Vec2::new(0.0, 50.0)),
        AnchoredVec2::from_points(Vec2::ZERO, Vec2::new(50.0, 0.0)).translate(Vec2::new(0.0, 100.0)),
    ] {
        stroke.draw_line(kit, Stroke::new(red, 2.0))?;
    }

    // A hand sweeping around a pivot.
    let pivot = Vec2::new(-120.0, 60.0);
    AnchoredVec2::new(pivot, Vec2::ZERO)
        .draw_plus(kit, Some(12.0), Stroke::color(amber))?
        .draw_circle(kit, 60.0, Stroke::new(amber, 1.0))?;
    AnchoredVec2::from_points(pivot + Vec2::new(20.0, 0.0), pivot + Vec2::new(60.0, 0.0))
        .rotate_around(t, pivot)
        .draw_arrow(kit, Stroke::new(amber, 2.0), None)?
        .draw_x(kit, None, Stroke::color(amber))?
        .draw_point(kit, Some(3.0), Some(amber))?;

    Ok(())
}

#[macroquad::main("veckit demo")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut kit = Veckit::bound(MacroquadContext::with_style(StyleState {
        stroke_color: WHITE,
        fill_color: WHITE,
        ..Default::default()
    }));
    let field = Field::new(7);

    let mut anchor_index = ANCHORS
        .iter()
        .position(|a| *a == Anchor::Center)
        .unwrap_or_default();
    let mut axes = AxisDirs::MATH;

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if is_key_pressed(KeyCode::Tab) {
            anchor_index = (anchor_index + 1) % ANCHORS.len();
        }
        if is_key_pressed(KeyCode::X) {
            axes = axes.flip_x();
        }
        if is_key_pressed(KeyCode::Y) {
            axes = axes.flip_y();
        }

        clear_background(BLACK);

        let anchor = ANCHORS[anchor_index];
        let t = get_time();
        let result = kit
            .set_coordinate_system(anchor, axes)
            .and_then(|_| draw_scene(&mut kit, &field, t))
            .and_then(|_| kit.reset_coordinate_system());
        if let Err(err) = result {
            tracing::error!(%err, "frame failed");
        }

        let overlay = format!(
            "anchor={anchor:?} x_right={} y_down={}\nKeys: Tab anchor | X flip x | Y flip y | Esc quit",
            axes.x_right, axes.y_down
        );
        draw_text(&overlay, 12.0, 20.0, 18.0, WHITE);

        next_frame().await;
    }
}
