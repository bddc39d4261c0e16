//! Monster sprites
//!
//! Each creature is a self-contained routine in a fixed pose on the
//! character grid. Nothing is configurable; auras and spirit wisps are
//! translucent passes over or under the body blocks.

use runeforge_core::{darken, hex, lighten, Color, ImageFrame, MonsterId, CHARACTER_GRID};
use tracing::debug;

use crate::canvas::{Canvas, Layer};
use crate::palette::{alpha, shade, Triad, RITUAL_RED, RUNE_CYAN};

const HAFT: Color = hex(0x6B4226);
const BRASS: Color = hex(0xC4A41A);
const ICE_GLINT: Color = hex(0xE0F4FF);
const FROST: Color = hex(0xB0E0FF);

/// Clear the canvas and draw a monster by id; unknown ids leave it blank
pub fn draw_monster(canvas: &mut Canvas, monster_id: &str) {
    canvas.clear();
    match MonsterId::from_id(monster_id) {
        Some(id) => draw_creature(canvas, id),
        None => debug!(monster_id, "Unknown monster, canvas left blank"),
    }
}

/// Draw a creature without clearing
pub fn draw_creature(canvas: &mut Canvas, id: MonsterId) {
    let outer = canvas.layer();
    canvas.set_layer(Layer::Monster);
    match id {
        MonsterId::DraugrWarrior => draugr(canvas),
        MonsterId::FrostWisp => frost_wisp(canvas),
        MonsterId::VikingRaider => viking_raider(canvas),
        MonsterId::IceGolem => ice_golem(canvas),
        MonsterId::FenrirWolf => fenrir_wolf(canvas),
        MonsterId::SeidrWitch => seidr_witch(canvas),
        MonsterId::JotunnBrute => jotunn_brute(canvas),
        MonsterId::ValkyrieShade => valkyrie_shade(canvas),
        MonsterId::NidhoggrSpawn => nidhoggr_spawn(canvas),
        MonsterId::CultistLoki => cultist_loki(canvas),
    }
    canvas.set_layer(outer);
}

/// Render a monster onto a fresh character-grid canvas
pub fn render_monster(monster_id: &str, scale: u32) -> ImageFrame {
    debug!(monster_id, scale, "Rendering monster");
    let mut canvas = Canvas::new(CHARACTER_GRID, scale);
    draw_monster(&mut canvas, monster_id);
    canvas.into_frame()
}

/// Shaded block: lit band on top, shadow band of the same height at the
/// bottom, dark edge
#[allow(clippy::too_many_arguments)]
fn block(canvas: &mut Canvas, x: f64, y: f64, w: f64, h: f64, tones: &Triad, band: f64, edge: Color) {
    canvas.fill_rect(x, y, w, h, tones.base);
    canvas.fill_rect(x, y, w, band, tones.highlight);
    canvas.fill_rect(x, y + h - band, w, band, tones.shadow);
    canvas.outline(x, y, w, h, edge);
}

fn pixels(canvas: &mut Canvas, points: &[(f64, f64)], color: Color) {
    for &(x, y) in points {
        canvas.pixel(x, y, color);
    }
}

/// Square glowing eyes over a faint halo, with a glint
fn glowing_eyes(canvas: &mut Canvas, xs: &[f64], y: f64, size: f64, iris: Color, glint: Color, halo: u8) {
    for &x in xs {
        canvas.fill_rect(x - 1.0, y - 1.0, size + 2.0, size + 2.0, alpha(iris, halo));
        canvas.fill_rect(x, y, size, size, iris);
        canvas.pixel(x + 1.0, y + 1.0, glint);
    }
}

fn ground_shadow(canvas: &mut Canvas, cy: f64, rx: f64, ry: f64) {
    canvas.fill_ellipse(24.0, cy, rx, ry, shade(0.3));
}

fn draugr(canvas: &mut Canvas) {
    let skin = Triad::new(hex(0x4A5A3A), hex(0x2A3A1A), hex(0x5A6A4A));
    let edge = hex(0x1A2A0A);
    ground_shadow(canvas, 47.0, 10.0, 2.0);

    // head
    canvas.fill_rect(16.0, 4.0, 16.0, 1.0, skin.base);
    block(canvas, 15.0, 5.0, 18.0, 14.0, &skin, 3.0, edge);
    glowing_eyes(canvas, &[19.0, 27.0], 10.0, 3.0, hex(0x88FF22), hex(0xCCFF88), 0x20);
    // decayed mouth
    canvas.fill_rect(22.0, 15.0, 5.0, 2.0, skin.shadow);
    pixels(canvas, &[(23.0, 15.0), (25.0, 15.0)], hex(0x2A2A1A));
    canvas.pixel(24.0, 16.0, hex(0xDDDDCC));

    // rusted helm
    block(canvas, 14.0, 1.0, 20.0, 7.0, &Triad::new(hex(0x5A3A1A), hex(0x3A1A0A), hex(0x6A4A2A)), 2.0, hex(0x1A0A00));
    pixels(canvas, &[(18.0, 3.0), (28.0, 4.0)], hex(0x7A5A2A));

    // tattered armor
    block(canvas, 12.0, 20.0, 24.0, 12.0, &Triad::new(hex(0x3A3A2A), hex(0x2A2A1A), hex(0x4A4A3A)), 3.0, hex(0x1A1A0A));
    pixels(canvas, &[(16.0, 24.0), (22.0, 26.0), (30.0, 23.0)], hex(0x5A3A1A));
    canvas.pixel(26.0, 28.0, skin.shadow);
    canvas.pixel(20.0, 25.0, hex(0xCCCCAA));

    for x in [7.0, 36.0] {
        block(canvas, x, 20.0, 5.0, 14.0, &skin, 3.0, edge);
    }
    for x in [16.0, 26.0] {
        canvas.fill_rect(x, 32.0, 6.0, 10.0, skin.shadow);
        canvas.outline(x, 32.0, 6.0, 10.0, edge);
    }

    // rusted sword
    canvas.fill_rect(41.0, 16.0, 2.0, 20.0, hex(0x6A5A4A));
    canvas.fill_rect(41.0, 10.0, 2.0, 7.0, hex(0x7A6A5A));
    canvas.fill_rect(40.0, 8.0, 4.0, 3.0, hex(0x8A7A6A));
    canvas.fill_rect(40.0, 16.0, 4.0, 1.0, hex(0x5A4A3A));
    pixels(canvas, &[(41.0, 12.0), (42.0, 14.0)], hex(0x6A4A2A));
}

fn frost_wisp(canvas: &mut Canvas) {
    let ice = |a: f32| Color::rgba(176, 224, 255, a);
    canvas.fill_circle(24.0, 20.0, 14.0, ice(0.15));
    canvas.fill_circle(24.0, 20.0, 10.0, ice(0.25));

    // core, rounded by one-unit caps on each side
    canvas.fill_rect(18.0, 14.0, 12.0, 12.0, FROST);
    canvas.fill_rect(17.0, 17.0, 1.0, 6.0, FROST);
    canvas.fill_rect(30.0, 17.0, 1.0, 6.0, FROST);
    canvas.fill_rect(20.0, 13.0, 8.0, 1.0, FROST);
    canvas.fill_rect(20.0, 26.0, 8.0, 1.0, FROST);
    canvas.fill_rect(20.0, 15.0, 4.0, 4.0, ICE_GLINT);
    canvas.pixel(21.0, 16.0, Color::WHITE);
    canvas.fill_rect(22.0, 18.0, 4.0, 4.0, hex(0x6AB0D0));
    for x in [21.0, 25.0] {
        canvas.fill_rect(x, 18.0, 2.0, 2.0, Color::WHITE);
        canvas.pixel(x, 18.0, ICE_GLINT);
    }

    // tendrils
    canvas.fill_rect(14.0, 27.0, 2.0, 6.0, ice(0.6));
    canvas.fill_rect(20.0, 28.0, 1.0, 7.0, ice(0.4));
    canvas.fill_rect(27.0, 28.0, 1.0, 7.0, ice(0.4));
    canvas.fill_rect(32.0, 27.0, 2.0, 6.0, ice(0.6));
    canvas.fill_rect(16.0, 35.0, 1.0, 3.0, ice(0.3));
    canvas.fill_rect(31.0, 36.0, 1.0, 2.0, ice(0.3));

    pixels(canvas, &[(12.0, 12.0), (34.0, 14.0), (14.0, 28.0), (33.0, 26.0)], ICE_GLINT);
    pixels(canvas, &[(10.0, 20.0), (36.0, 18.0)], FROST);
}

fn viking_raider(canvas: &mut Canvas) {
    let skin = Triad::new(hex(0xD4A574), hex(0xB8885C), hex(0xE8C298));
    let edge = skin.outline();
    ground_shadow(canvas, 47.0, 10.0, 2.0);

    canvas.fill_rect(16.0, 4.0, 16.0, 1.0, skin.base);
    block(canvas, 15.0, 5.0, 18.0, 14.0, &skin, 3.0, edge);
    for x in [19.0, 27.0] {
        canvas.fill_rect(x, 10.0, 3.0, 3.0, hex(0x1A1A2E));
        canvas.pixel(x, 10.0, Color::WHITE);
    }
    // war paint
    canvas.fill_rect(17.0, 9.0, 6.0, 1.0, RITUAL_RED);
    canvas.fill_rect(26.0, 9.0, 6.0, 1.0, RITUAL_RED);
    canvas.fill_rect(18.0, 10.0, 4.0, 1.0, hex(0xAA2222));
    canvas.fill_rect(27.0, 10.0, 4.0, 1.0, hex(0xAA2222));

    // wild red hair
    let hair = hex(0xB33A1A);
    canvas.fill_rect(14.0, 1.0, 20.0, 6.0, hair);
    canvas.fill_rect(15.0, 1.0, 18.0, 2.0, hex(0xCC4A2A));
    canvas.fill_rect(12.0, 4.0, 3.0, 12.0, hair);
    canvas.fill_rect(33.0, 4.0, 3.0, 12.0, hair);
    canvas.fill_rect(14.0, 6.0, 20.0, 1.0, hex(0x8A2A0A));

    block(canvas, 13.0, 20.0, 22.0, 12.0, &Triad::new(hex(0x7A5A2A), hex(0x5A3A1A), hex(0x8A6A3A)), 3.0, hex(0x2A1A0A));
    // belt and buckle
    canvas.fill_rect(13.0, 28.0, 22.0, 2.0, hex(0x4A3A2A));
    canvas.fill_rect(22.0, 27.0, 4.0, 4.0, BRASS);

    for x in [8.0, 35.0] {
        block(canvas, x, 20.0, 5.0, 14.0, &skin, 3.0, edge);
    }
    for x in [16.0, 26.0] {
        canvas.fill_rect(x, 32.0, 6.0, 10.0, hex(0x5A4A2A));
        canvas.outline(x, 32.0, 6.0, 10.0, hex(0x2A1A0A));
    }
    canvas.fill_rect(15.0, 40.0, 7.0, 4.0, hex(0x4A3A1A));
    canvas.fill_rect(26.0, 40.0, 7.0, 4.0, hex(0x4A3A1A));

    // twin axes
    for (haft, head) in [(4.0, 2.0), (42.0, 41.0)] {
        canvas.fill_rect(haft, 18.0, 2.0, 16.0, HAFT);
        canvas.fill_rect(head, 14.0, 5.0, 4.0, hex(0x8A8A8A));
        canvas.fill_rect(head - 1.0, 15.0, 7.0, 2.0, hex(0x7A7A7A));
    }
}

fn ice_golem(canvas: &mut Canvas) {
    let ice = Triad::new(hex(0x8AB4D0), hex(0x5A8AA0), hex(0xB0D4E8));
    let edge = hex(0x3A6A80);
    ground_shadow(canvas, 47.0, 14.0, 3.0);

    block(canvas, 15.0, 1.0, 18.0, 12.0, &ice, 3.0, edge);
    glowing_eyes(canvas, &[18.0, 26.0], 5.0, 4.0, RUNE_CYAN, Color::WHITE, 0x20);

    block(canvas, 8.0, 13.0, 32.0, 18.0, &ice, 5.0, edge);
    // cracks
    pixels(canvas, &[(12.0, 18.0), (34.0, 17.0)], ice.highlight);
    pixels(canvas, &[(14.0, 20.0), (28.0, 19.0)], ice.shadow);
    pixels(canvas, &[(20.0, 16.0), (30.0, 24.0)], ICE_GLINT);

    // shoulder crystals
    canvas.fill_rect(6.0, 11.0, 3.0, 6.0, ice.highlight);
    canvas.fill_rect(5.0, 13.0, 2.0, 3.0, ICE_GLINT);
    canvas.fill_rect(39.0, 11.0, 3.0, 6.0, ice.highlight);
    canvas.fill_rect(41.0, 13.0, 2.0, 3.0, ICE_GLINT);

    for x in [2.0, 40.0] {
        block(canvas, x, 15.0, 6.0, 16.0, &ice, 4.0, edge);
        canvas.fill_rect(x - 1.0, 31.0, 8.0, 4.0, ice.shadow);
    }
    for x in [11.0, 28.0] {
        canvas.fill_rect(x, 31.0, 9.0, 10.0, ice.shadow);
        canvas.outline(x, 31.0, 9.0, 10.0, edge);
    }
    pixels(canvas, &[(14.0, 35.0), (31.0, 37.0)], ice.highlight);
}

fn fenrir_wolf(canvas: &mut Canvas) {
    let fur = Triad::new(hex(0x3A4A6A), hex(0x1A2A4A), hex(0x5A6A8A));
    let edge = hex(0x0A1A3A);
    let spirit = |a: f32| Color::rgba(80, 120, 180, a);
    canvas.fill_ellipse(24.0, 42.0, 16.0, 4.0, spirit(0.15));

    block(canvas, 8.0, 18.0, 26.0, 12.0, &fur, 4.0, edge);
    pixels(canvas, &[(12.0, 20.0), (24.0, 21.0)], fur.shadow);
    pixels(canvas, &[(18.0, 19.0), (28.0, 20.0)], fur.highlight);

    // head and snout
    canvas.fill_rect(32.0, 12.0, 12.0, 12.0, fur.base);
    canvas.fill_rect(32.0, 12.0, 12.0, 4.0, fur.highlight);
    canvas.outline(32.0, 12.0, 12.0, 12.0, edge);
    canvas.fill_rect(42.0, 16.0, 6.0, 5.0, fur.highlight);
    canvas.fill_rect(42.0, 20.0, 6.0, 2.0, fur.shadow);
    canvas.outline(42.0, 16.0, 6.0, 5.0, edge);
    pixels(canvas, &[(44.0, 21.0), (46.0, 21.0)], Color::WHITE);
    glowing_eyes(canvas, &[36.0], 14.0, 3.0, RUNE_CYAN, Color::WHITE, 0x15);

    for x in [34.0, 40.0] {
        canvas.fill_rect(x, 8.0, 3.0, 5.0, fur.base);
        canvas.fill_rect(x, 8.0, 3.0, 2.0, fur.highlight);
    }

    // spectral tail
    canvas.fill_rect(2.0, 16.0, 7.0, 4.0, fur.shadow);
    canvas.fill_rect(0.0, 13.0, 4.0, 4.0, spirit(0.5));
    canvas.pixel(0.0, 12.0, spirit(0.3));

    for (x, y) in [(11.0, 30.0), (19.0, 30.0), (28.0, 28.0), (37.0, 24.0)] {
        canvas.fill_rect(x, y, 4.0, 10.0, fur.shadow);
    }
    canvas.outline(11.0, 30.0, 4.0, 10.0, edge);
    canvas.outline(19.0, 30.0, 4.0, 10.0, edge);

    pixels(canvas, &[(6.0, 12.0), (16.0, 10.0), (26.0, 14.0), (42.0, 8.0)], RUNE_CYAN);
    pixels(canvas, &[(10.0, 28.0), (30.0, 10.0)], alpha(RUNE_CYAN, 0x60));
}

/// Hooded caster shared by the witch and the cultist: robe to the ground,
/// hooded head with an open face
fn hooded_figure(canvas: &mut Canvas, robe: &Triad, edge: Color, robe_x: f64, robe_w: f64) {
    let skin = hex(0xC8A888);
    ground_shadow(canvas, 47.0, 10.0, 2.0);

    canvas.fill_rect(robe_x, 18.0, robe_w, 26.0, robe.base);
    canvas.fill_rect(robe_x - 1.0, 22.0, 1.0, 20.0, robe.base);
    canvas.fill_rect(robe_x + robe_w, 22.0, 1.0, 20.0, robe.base);
    canvas.fill_rect(robe_x, 18.0, robe_w, 4.0, robe.highlight);
    canvas.fill_rect(robe_x, 40.0, robe_w, 4.0, robe.shadow);
    canvas.outline(robe_x, 18.0, robe_w, 26.0, edge);
    // center seam
    canvas.fill_rect(23.0, 18.0, 2.0, 26.0, robe.highlight);

    canvas.fill_rect(17.0, 6.0, 14.0, 14.0, skin);
    canvas.fill_rect(17.0, 6.0, 14.0, 3.0, lighten(skin, 15));
    canvas.fill_rect(17.0, 17.0, 14.0, 3.0, darken(skin, 20));
    // hood
    canvas.fill_rect(14.0, 2.0, 20.0, 12.0, robe.base);
    canvas.fill_rect(15.0, 2.0, 18.0, 3.0, robe.highlight);
    canvas.outline(14.0, 2.0, 20.0, 12.0, edge);
    canvas.fill_rect(18.0, 8.0, 12.0, 8.0, skin);
}

fn seidr_witch(canvas: &mut Canvas) {
    let arcane = hex(0xAA44FF);
    let magic = |a: f32| Color::rgba(170, 68, 255, a);
    let robe = Triad::new(hex(0x2A0A3A), hex(0x1A0020), hex(0x4A2A5A));

    canvas.fill_circle(24.0, 30.0, 16.0, magic(0.1));
    hooded_figure(canvas, &robe, hex(0x0A0010), 13.0, 22.0);
    pixels(
        canvas,
        &[(17.0, 24.0), (19.0, 28.0), (29.0, 24.0), (31.0, 28.0), (20.0, 36.0), (27.0, 34.0)],
        arcane,
    );
    glowing_eyes(canvas, &[20.0, 26.0], 10.0, 3.0, arcane, hex(0xDD88FF), 0x15);

    // staff and crystal
    canvas.fill_rect(7.0, 6.0, 2.0, 38.0, HAFT);
    canvas.fill_rect(8.0, 6.0, 1.0, 38.0, hex(0x7B5236));
    canvas.fill_rect(5.0, 1.0, 6.0, 6.0, arcane);
    canvas.fill_rect(6.0, 2.0, 4.0, 4.0, hex(0xDD88FF));
    canvas.pixel(7.0, 3.0, hex(0xFFAAFF));
    canvas.outline(5.0, 1.0, 6.0, 6.0, hex(0x6A2A8A));
    canvas.fill_circle(8.0, 4.0, 5.0, magic(0.2));

    // sleeves
    canvas.fill_rect(9.0, 22.0, 4.0, 8.0, robe.base);
    canvas.fill_rect(35.0, 22.0, 4.0, 8.0, robe.base);

    for (x, y, a) in [(38.0, 8.0, 0.7), (40.0, 14.0, 0.5), (39.0, 20.0, 0.6), (5.0, 18.0, 0.4)] {
        canvas.pixel(x, y, magic(a));
    }
}

fn jotunn_brute(canvas: &mut Canvas) {
    let skin = Triad::new(hex(0x5A7A8A), hex(0x3A5A6A), hex(0x7A9AAA));
    let edge = hex(0x1A3A4A);
    ground_shadow(canvas, 47.0, 16.0, 3.0);

    block(canvas, 12.0, 0.0, 24.0, 16.0, &skin, 4.0, edge);
    for x in [16.0, 27.0] {
        canvas.fill_rect(x, 6.0, 5.0, 4.0, RUNE_CYAN);
        canvas.pixel(x + 1.0, 7.0, Color::WHITE);
    }
    // brow ridge
    canvas.fill_rect(15.0, 5.0, 18.0, 1.0, skin.shadow);
    canvas.fill_rect(18.0, 12.0, 12.0, 3.0, skin.shadow);
    canvas.outline(18.0, 12.0, 12.0, 3.0, edge);
    pixels(canvas, &[(19.0, 12.0), (21.0, 12.0), (25.0, 12.0), (28.0, 12.0)], Color::WHITE);

    // frost beard
    canvas.fill_rect(16.0, 14.0, 16.0, 5.0, hex(0xB0D4E8));
    canvas.fill_rect(17.0, 14.0, 14.0, 2.0, hex(0xD0E4F0));
    canvas.fill_rect(18.0, 18.0, 12.0, 2.0, hex(0x8AB4D0));
    pixels(canvas, &[(18.0, 19.0), (22.0, 20.0), (26.0, 19.0), (30.0, 20.0)], ICE_GLINT);

    block(canvas, 6.0, 20.0, 36.0, 14.0, &skin, 4.0, edge);
    canvas.fill_rect(6.0, 30.0, 36.0, 3.0, hex(0x3A2A1A));
    canvas.fill_rect(22.0, 29.0, 4.0, 5.0, BRASS);
    canvas.pixel(23.0, 30.0, hex(0xE4C43A));

    for x in [0.0, 42.0] {
        block(canvas, x, 20.0, 6.0, 18.0, &skin, 4.0, edge);
    }
    pixels(canvas, &[(2.0, 26.0), (44.0, 28.0)], hex(0xB0D4E8));
    pixels(canvas, &[(3.0, 30.0), (45.0, 24.0)], ICE_GLINT);

    for x in [10.0, 28.0] {
        canvas.fill_rect(x, 34.0, 10.0, 10.0, skin.shadow);
        canvas.outline(x, 34.0, 10.0, 10.0, edge);
    }

    // club
    canvas.fill_rect(44.0, 10.0, 3.0, 28.0, hex(0x4A3A2A));
    canvas.fill_rect(44.0, 10.0, 2.0, 28.0, hex(0x5A4A3A));
    canvas.fill_rect(42.0, 2.0, 6.0, 10.0, hex(0x5A6A7A));
    canvas.fill_rect(42.0, 2.0, 6.0, 3.0, hex(0x6A7A8A));
    canvas.outline(42.0, 2.0, 6.0, 10.0, hex(0x2A3A4A));
    pixels(canvas, &[(43.0, 5.0), (46.0, 8.0)], FROST);
}

fn valkyrie_shade(canvas: &mut Canvas) {
    let ghost = Color::rgba(180, 200, 220, 0.85);
    let ghost_hi = Color::rgba(220, 240, 255, 0.9);
    let armor = hex(0x6A7A9A);
    let armor_hi = hex(0x8A9ABA);
    let edge = hex(0x3A4A6A);

    canvas.fill_ellipse(24.0, 24.0, 18.0, 20.0, Color::rgba(180, 200, 220, 0.1));

    // wings
    for (x, tip) in [(0.0, 2.0), (38.0, 40.0)] {
        canvas.fill_rect(x, 8.0, 10.0, 20.0, ghost_hi);
        canvas.fill_rect(tip, 4.0, 6.0, 6.0, Color::rgba(220, 240, 255, 0.6));
    }
    for i in 0..6 {
        let y = 10.0 + i as f64 * 3.0;
        for (outer, inner) in [(2.0, 4.0), (45.0, 43.0)] {
            canvas.pixel(outer, y, Color::rgba(200, 220, 240, 0.5));
            canvas.pixel(inner, y + 1.0, Color::rgba(240, 250, 255, 0.4));
        }
    }

    canvas.fill_rect(17.0, 5.0, 14.0, 14.0, ghost);
    // winged helm
    canvas.fill_rect(15.0, 2.0, 18.0, 8.0, armor);
    canvas.fill_rect(15.0, 2.0, 18.0, 3.0, armor_hi);
    canvas.outline(15.0, 2.0, 18.0, 8.0, edge);
    canvas.fill_rect(12.0, 0.0, 4.0, 6.0, armor_hi);
    canvas.fill_rect(32.0, 0.0, 4.0, 6.0, armor_hi);
    canvas.fill_rect(11.0, -2.0, 3.0, 4.0, armor);
    canvas.fill_rect(34.0, -2.0, 3.0, 4.0, armor);

    for x in [19.0, 26.0] {
        canvas.fill_rect(x, 10.0, 3.0, 3.0, RUNE_CYAN);
        canvas.pixel(x + 1.0, 11.0, Color::WHITE);
    }

    canvas.fill_rect(14.0, 18.0, 20.0, 14.0, armor);
    canvas.fill_rect(14.0, 18.0, 20.0, 3.0, armor_hi);
    canvas.fill_rect(14.0, 28.0, 20.0, 4.0, darken(armor, 15));
    canvas.outline(14.0, 18.0, 20.0, 14.0, edge);
    canvas.fill_rect(22.0, 20.0, 4.0, 4.0, armor_hi);
    canvas.pixel(23.0, 21.0, Color::WHITE);

    // legs fading out
    for (x, lower) in [(17.0, 18.0), (25.0, 25.0)] {
        canvas.fill_rect(x, 32.0, 6.0, 6.0, ghost);
        canvas.fill_rect(lower, 38.0, 5.0, 4.0, Color::rgba(180, 200, 220, 0.5));
        canvas.fill_rect(lower + 1.0, 42.0, 4.0, 3.0, Color::rgba(180, 200, 220, 0.2));
    }

    // spear
    canvas.fill_rect(10.0, 2.0, 2.0, 42.0, hex(0x8A8A8A));
    canvas.fill_rect(9.0, -1.0, 4.0, 5.0, hex(0xCCCCCC));
    canvas.fill_rect(10.0, -2.0, 2.0, 3.0, hex(0xEEEEEE));
    canvas.outline(9.0, -1.0, 4.0, 5.0, hex(0x6A6A6A));
}

fn nidhoggr_spawn(canvas: &mut Canvas) {
    let scale = Triad::new(hex(0x2A5A2A), hex(0x1A3A1A), hex(0x3A7A3A));
    let edge = hex(0x0A2A0A);
    let venom = hex(0x88FF00);
    ground_shadow(canvas, 43.0, 14.0, 3.0);

    // coils
    canvas.fill_rect(10.0, 22.0, 24.0, 8.0, scale.base);
    canvas.fill_rect(10.0, 22.0, 24.0, 3.0, scale.highlight);
    canvas.fill_rect(10.0, 27.0, 24.0, 3.0, scale.shadow);
    canvas.fill_rect(8.0, 28.0, 28.0, 7.0, scale.shadow);
    canvas.fill_rect(6.0, 33.0, 32.0, 6.0, scale.base);
    canvas.outline(6.0, 33.0, 32.0, 6.0, edge);
    canvas.fill_rect(14.0, 30.0, 16.0, 3.0, scale.highlight);
    canvas.fill_rect(10.0, 35.0, 24.0, 2.0, hex(0x4A9A4A));
    for i in (0..20).step_by(3) {
        let i = i as f64;
        canvas.pixel(12.0 + i, 24.0, scale.shadow);
        canvas.pixel(13.0 + i, 26.0, scale.highlight);
        canvas.pixel(8.0 + i, 34.0, scale.shadow);
    }

    // raised neck and head
    canvas.fill_rect(24.0, 14.0, 6.0, 10.0, scale.base);
    canvas.fill_rect(24.0, 14.0, 3.0, 10.0, scale.highlight);
    canvas.outline(24.0, 14.0, 6.0, 10.0, edge);
    canvas.fill_rect(28.0, 6.0, 14.0, 12.0, scale.base);
    canvas.fill_rect(28.0, 6.0, 14.0, 4.0, scale.highlight);
    canvas.outline(28.0, 6.0, 14.0, 12.0, edge);
    canvas.fill_rect(40.0, 10.0, 6.0, 6.0, scale.highlight);
    canvas.fill_rect(40.0, 14.0, 6.0, 2.0, scale.shadow);
    canvas.outline(40.0, 10.0, 6.0, 6.0, edge);
    glowing_eyes(canvas, &[31.0, 37.0], 8.0, 3.0, venom, hex(0xDDFF88), 0x20);

    // fangs and dripping venom
    pixels(canvas, &[(43.0, 16.0), (44.0, 16.0)], Color::WHITE);
    canvas.pixel(43.0, 17.0, hex(0xEEEEDD));
    canvas.pixel(43.0, 18.0, venom);
    canvas.pixel(44.0, 19.0, hex(0x66DD00));
    canvas.pixel(43.0, 20.0, alpha(hex(0x44BB00), 0x80));

    // crest
    canvas.fill_rect(30.0, 4.0, 2.0, 3.0, scale.shadow);
    canvas.fill_rect(36.0, 3.0, 2.0, 4.0, scale.shadow);
    canvas.fill_rect(33.0, 2.0, 2.0, 5.0, scale.base);

    // tail
    canvas.fill_rect(2.0, 30.0, 6.0, 4.0, scale.shadow);
    canvas.fill_rect(0.0, 28.0, 4.0, 4.0, scale.base);
    canvas.pixel(0.0, 27.0, scale.highlight);
    canvas.pixel(0.0, 26.0, scale.shadow);
}

fn cultist_loki(canvas: &mut Canvas) {
    let trick = hex(0x44FF88);
    let smoke = |a: f32| Color::rgba(68, 255, 136, a);
    let cloak = Triad::new(hex(0x0A2A1A), hex(0x001A0A), hex(0x1A4A2A));
    let skin_shadow = darken(hex(0xC8A888), 20);

    canvas.fill_rect(10.0, 42.0, 28.0, 3.0, smoke(0.15));
    canvas.fill_rect(14.0, 43.0, 20.0, 2.0, smoke(0.1));
    hooded_figure(canvas, &cloak, hex(0x001000), 12.0, 24.0);

    // trickster sigil
    pixels(
        canvas,
        &[(23.0, 24.0), (22.0, 25.0), (24.0, 25.0), (23.0, 26.0), (21.0, 27.0), (25.0, 27.0), (20.0, 28.0), (26.0, 28.0)],
        trick,
    );
    pixels(canvas, &[(16.0, 30.0), (30.0, 32.0)], alpha(trick, 0x80));

    glowing_eyes(canvas, &[20.0, 26.0], 10.0, 3.0, trick, hex(0x88FFBB), 0x20);
    // smirk
    canvas.fill_rect(22.0, 14.0, 5.0, 1.0, skin_shadow);
    canvas.pixel(26.0, 13.0, skin_shadow);

    // hidden daggers
    for x in [7.0, 39.0] {
        canvas.fill_rect(x, 24.0, 2.0, 12.0, hex(0x8A8A8A));
        canvas.fill_rect(x, 20.0, 2.0, 5.0, hex(0xCCCCCC));
        canvas.pixel(x, 19.0, hex(0xEEEEEE));
    }

    pixels(canvas, &[(4.0, 10.0), (42.0, 8.0), (3.0, 28.0), (43.0, 26.0)], trick);
    pixels(canvas, &[(6.0, 16.0), (40.0, 14.0)], alpha(trick, 0x60));
}
