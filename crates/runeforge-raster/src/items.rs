//! Standalone item icons
//!
//! Inventory-sized icons on the item grid. Geometry is independent of the
//! character-relative equipment routines: each icon is centred on its own
//! grid with no body to anchor to.

use runeforge_core::{
    hex, BootsId, ChestId, Color, GlovesId, HelmetId, ImageFrame, ItemId, PantsId, Slot,
    WeaponId, ITEM_GRID,
};
use tracing::debug;

use crate::canvas::{Canvas, Layer};
use crate::palette::{GOLD, RITUAL_RED, RUNE_CYAN};

const BRASS: Color = hex(0xC4A41A);
const BRASS_HI: Color = hex(0xE4C43A);
const HAFT: Color = hex(0x6B4226);

/// Clear the canvas and draw one item icon. An id the slot does not know
/// leaves the canvas blank.
pub fn draw_item_sprite(canvas: &mut Canvas, slot: Slot, item_id: &str) {
    canvas.clear();
    match ItemId::resolve(slot, item_id) {
        Some(item) => draw_item_icon(canvas, item),
        None => debug!(%slot, item_id, "Unknown item, icon left blank"),
    }
}

/// Draw an item icon without clearing
pub fn draw_item_icon(canvas: &mut Canvas, item: ItemId) {
    let outer = canvas.layer();
    canvas.set_layer(Layer::Item);
    match item {
        ItemId::Helmet(id) => helmet(canvas, id),
        ItemId::Chest(id) => chest(canvas, id),
        ItemId::Gloves(id) => gloves(canvas, id),
        ItemId::Pants(id) => pants(canvas, id),
        ItemId::Boots(id) => boots(canvas, id),
        ItemId::Weapon(id) => weapon(canvas, id),
    }
    canvas.set_layer(outer);
}

/// Render an icon onto a fresh item-grid canvas
pub fn render_item(slot: Slot, item_id: &str, scale: u32) -> ImageFrame {
    debug!(%slot, item_id, scale, "Rendering item icon");
    let mut canvas = Canvas::new(ITEM_GRID, scale);
    draw_item_sprite(&mut canvas, slot, item_id);
    canvas.into_frame()
}

/// Block with a lit top band and a dark edge
#[allow(clippy::too_many_arguments)]
fn dome(canvas: &mut Canvas, x: f64, y: f64, w: f64, h: f64, base: u32, hi: u32, edge: u32) {
    canvas.fill_rect(x, y, w, h, hex(base));
    canvas.fill_rect(x, y, w, 3.0, hex(hi));
    canvas.outline(x, y, w, h, hex(edge));
}

fn pixels(canvas: &mut Canvas, points: &[(f64, f64)], color: Color) {
    for &(x, y) in points {
        canvas.pixel(x, y, color);
    }
}

fn helmet(canvas: &mut Canvas, id: HelmetId) {
    match id {
        HelmetId::IronNasal => {
            canvas.fill_rect(4.0, 4.0, 16.0, 10.0, hex(0x7A7A7A));
            canvas.fill_rect(4.0, 4.0, 16.0, 3.0, hex(0x9A9A9A));
            canvas.fill_rect(4.0, 12.0, 16.0, 2.0, hex(0x5A5A5A));
            canvas.outline(4.0, 4.0, 16.0, 10.0, hex(0x3A3A3A));
            // nasal guard
            canvas.fill_rect(11.0, 4.0, 2.0, 14.0, hex(0x6A6A6A));
            pixels(canvas, &[(7.0, 7.0), (15.0, 7.0)], hex(0xAAAAAA));
        }
        HelmetId::BearHead => {
            dome(canvas, 3.0, 2.0, 18.0, 12.0, 0x6B3A1A, 0x8B5A3A, 0x2A0A00);
            canvas.fill_rect(3.0, 2.0, 4.0, 4.0, hex(0x5B2A0A));
            canvas.fill_rect(17.0, 2.0, 4.0, 4.0, hex(0x5B2A0A));
            pixels(canvas, &[(5.0, 3.0), (18.0, 3.0)], hex(0x8B5A3A));
            canvas.fill_rect(3.0, 12.0, 18.0, 2.0, hex(0x8B6A4A));
        }
        HelmetId::RavenSkull => {
            dome(canvas, 4.0, 3.0, 16.0, 11.0, 0x2A2A3A, 0x3A3A4A, 0x0A0A1A);
            canvas.fill_rect(9.0, 1.0, 6.0, 3.0, hex(0x4A4A4A));
            canvas.fill_rect(10.0, 0.0, 4.0, 2.0, hex(0x3A3A3A));
            pixels(canvas, &[(6.0, 7.0), (17.0, 7.0), (8.0, 9.0), (15.0, 9.0)], hex(0xD4D4D4));
        }
        HelmetId::JarlGilded => {
            dome(canvas, 4.0, 3.0, 16.0, 11.0, 0xC4A41A, 0xE4C43A, 0x7A5A00);
            canvas.fill_rect(4.0, 12.0, 16.0, 2.0, hex(0xA4841A));
            // crown points
            canvas.fill_rect(6.0, 1.0, 3.0, 3.0, BRASS_HI);
            canvas.fill_rect(10.0, 0.0, 4.0, 3.0, BRASS_HI);
            canvas.fill_rect(15.0, 1.0, 3.0, 3.0, BRASS_HI);
            pixels(canvas, &[(11.0, 7.0), (12.0, 7.0)], hex(0xFF3333));
        }
        HelmetId::RunicWar => {
            dome(canvas, 4.0, 3.0, 16.0, 11.0, 0x5A5A6A, 0x7A7A8A, 0x1A1A2A);
            canvas.fill_rect(2.0, 5.0, 3.0, 6.0, hex(0x5A5A6A));
            canvas.fill_rect(19.0, 5.0, 3.0, 6.0, hex(0x5A5A6A));
            pixels(
                canvas,
                &[(7.0, 7.0), (9.0, 8.0), (11.0, 7.0), (13.0, 9.0), (15.0, 7.0), (17.0, 8.0)],
                RUNE_CYAN,
            );
        }
        HelmetId::WolfSkull => {
            dome(canvas, 3.0, 3.0, 18.0, 11.0, 0x5A5A5A, 0x7A7A7A, 0x2A2A2A);
            canvas.fill_rect(8.0, 0.0, 8.0, 4.0, hex(0x6A6A6A));
            pixels(canvas, &[(9.0, 1.0), (14.0, 1.0)], hex(0xDDDDDD));
            pixels(canvas, &[(11.0, 7.0), (12.0, 7.0)], hex(0xFF4444));
        }
        HelmetId::ValkyrieWing => {
            dome(canvas, 4.0, 3.0, 16.0, 11.0, 0x8A8AAA, 0xAAAACC, 0x4A4A6A);
            canvas.fill_rect(1.0, 1.0, 4.0, 7.0, hex(0x9A9ABB));
            canvas.fill_rect(19.0, 1.0, 4.0, 7.0, hex(0x9A9ABB));
            pixels(canvas, &[(11.0, 7.0), (12.0, 7.0)], RUNE_CYAN);
        }
        HelmetId::Dragonbone => {
            dome(canvas, 3.0, 3.0, 18.0, 11.0, 0xD4C8A8, 0xE4D8B8, 0x8A7A5A);
            canvas.fill_rect(2.0, 0.0, 3.0, 5.0, hex(0xC4B898));
            canvas.fill_rect(19.0, 0.0, 3.0, 5.0, hex(0xC4B898));
            pixels(canvas, &[(8.0, 7.0), (15.0, 7.0)], hex(0xA49878));
        }
    }
}

fn chest(canvas: &mut Canvas, id: ChestId) {
    let mesh = |canvas: &mut Canvas, color: Color| {
        for iy in (7..17).step_by(2) {
            for ix in (3..21).step_by(2) {
                canvas.pixel(ix as f64, iy as f64, color);
            }
        }
    };

    match id {
        ChestId::LeatherVest => {
            dome(canvas, 3.0, 3.0, 18.0, 14.0, 0x8B6914, 0x9B7924, 0x4A3000);
            canvas.fill_rect(3.0, 15.0, 18.0, 2.0, hex(0x7B5904));
            canvas.outline(3.0, 3.0, 18.0, 14.0, hex(0x4A3000));
            for i in (0..18).step_by(3) {
                canvas.pixel(3.0 + i as f64, 10.0, hex(0x6B4904));
            }
            canvas.fill_rect(10.0, 8.0, 4.0, 2.0, BRASS);
        }
        ChestId::Chainmail => {
            dome(canvas, 3.0, 3.0, 18.0, 14.0, 0x8A8A8A, 0x9A9A9A, 0x3A3A3A);
            mesh(canvas, hex(0x5A5A5A));
        }
        ChestId::FurCloak => {
            canvas.fill_rect(3.0, 4.0, 18.0, 13.0, hex(0x5A4A3A));
            // fur collar
            canvas.fill_rect(2.0, 2.0, 20.0, 4.0, hex(0x8B7A5A));
            canvas.outline(3.0, 4.0, 18.0, 13.0, hex(0x2A1A0A));
            for ix in (3..21).step_by(2) {
                canvas.pixel(ix as f64, 3.0, hex(0x9A8A6A));
            }
        }
        ChestId::BerserkerHarness => {
            canvas.fill_rect(3.0, 3.0, 18.0, 14.0, hex(0x4A3A2A));
            canvas.fill_rect(3.0, 3.0, 5.0, 6.0, hex(0x6A5A4A));
            canvas.fill_rect(16.0, 3.0, 5.0, 6.0, hex(0x6A5A4A));
            canvas.outline(3.0, 3.0, 18.0, 14.0, hex(0x1A0A00));
            // crossed straps
            for i in 0..10 {
                let i = i as f64;
                canvas.pixel(5.0 + i, 5.0 + i, hex(0x8B6914));
                canvas.pixel(18.0 - i, 5.0 + i, hex(0x8B6914));
            }
            pixels(canvas, &[(12.0, 9.0), (12.0, 12.0)], RITUAL_RED);
        }
        ChestId::RunestonePlate => {
            dome(canvas, 3.0, 3.0, 18.0, 14.0, 0x4A4A5A, 0x5A5A6A, 0x1A1A2A);
            canvas.fill_rect(3.0, 15.0, 18.0, 2.0, hex(0x3A3A4A));
            canvas.outline(3.0, 3.0, 18.0, 14.0, hex(0x1A1A2A));
            pixels(canvas, &[(7.0, 9.0), (10.0, 10.0), (14.0, 9.0), (17.0, 10.0)], RUNE_CYAN);
        }
        ChestId::BoneCuirass => {
            dome(canvas, 3.0, 3.0, 18.0, 14.0, 0xC4B898, 0xD4C8A8, 0x7A6A4A);
            canvas.fill_rect(10.0, 7.0, 4.0, 4.0, hex(0xE4D8B8));
            pixels(canvas, &[(11.0, 8.0), (12.0, 8.0)], hex(0x1A1A1A));
        }
        ChestId::Stormweave => {
            dome(canvas, 3.0, 3.0, 18.0, 14.0, 0x2A3A5A, 0x3A4A6A, 0x0A1A3A);
            pixels(canvas, &[(7.0, 8.0), (9.0, 10.0), (14.0, 8.0), (16.0, 10.0)], hex(0x88CCFF));
        }
        ChestId::BloodforgeMail => {
            dome(canvas, 3.0, 3.0, 18.0, 14.0, 0x4A1A1A, 0x6A2A2A, 0x1A0000);
            mesh(canvas, hex(0x2A0A0A));
            canvas.pixel(12.0, 8.0, hex(0xFF4444));
        }
    }
}

/// Left and right column x of paired icons
const PAIR_XS: [f64; 2] = [3.0, 13.0];

fn gloves(canvas: &mut Canvas, id: GlovesId) {
    let (base, hi, dark) = match id {
        GlovesId::LeatherWraps => (0x8B6914, 0x9B7924, 0x7B5904),
        GlovesId::FurGauntlets => (0x7A6A5A, 0x9A8A6A, 0x5A4A3A),
        GlovesId::IronBracers => (0x7A7A7A, 0x9A9A9A, 0x5A5A5A),
        GlovesId::BerserkerWraps => (0x4A2A1A, 0x5A3A2A, 0x3A1A0A),
        GlovesId::RunicGauntlets => (0x4A4A5A, 0x5A5A6A, 0x3A3A4A),
        GlovesId::SpikedFists => (0x5A5A5A, 0x7A7A7A, 0x3A3A3A),
        GlovesId::DragonscaleGrips => (0x2A5A3A, 0x3A6A4A, 0x1A4A2A),
        GlovesId::EmberWraps => (0x4A2A0A, 0x5A3A1A, 0x3A1A00),
    };
    for x in PAIR_XS {
        dome(canvas, x, 5.0, 8.0, 12.0, base, hi, dark);
    }

    let mark = match id {
        GlovesId::RunicGauntlets => Some((6.0, 16.0, 10.0, RUNE_CYAN)),
        GlovesId::BerserkerWraps => Some((7.0, 17.0, 10.0, RITUAL_RED)),
        GlovesId::SpikedFists => Some((2.0, 21.0, 8.0, hex(0xAAAAAA))),
        GlovesId::EmberWraps => Some((6.0, 16.0, 10.0, hex(0xFF6600))),
        GlovesId::DragonscaleGrips => Some((6.0, 16.0, 10.0, hex(0x4A8A5A))),
        _ => None,
    };
    if let Some((lx, rx, y, color)) = mark {
        pixels(canvas, &[(lx, y), (rx, y)], color);
    }
}

fn pants(canvas: &mut Canvas, id: PantsId) {
    let (base, hi, dark) = match id {
        PantsId::WoolTrousers => (0x6A5A3A, 0x7A6A4A, 0x3A2A1A),
        PantsId::LeatherLeggings => (0x5A4A2A, 0x6A5A3A, 0x2A1A0A),
        PantsId::FrostGreaves => (0x5A6A7A, 0x8A7A6A, 0x2A3A4A),
        PantsId::BerserkerSkirt => (0x5A4A3A, 0x7A6A4A, 0x2A1A0A),
        PantsId::RunicLegguards => (0x4A4A5A, 0x5A5A6A, 0x2A2A3A),
        PantsId::IronChainSkirt => (0x7A7A7A, 0x9A9A9A, 0x3A3A3A),
        PantsId::ShadowLeggings => (0x1A1A2A, 0x2A2A3A, 0x0A0A1A),
        PantsId::FlameGuards => (0x3A1A0A, 0x5A2A1A, 0x1A0A00),
    };
    let (base, hi, dark) = (hex(base), hex(hi), hex(dark));

    // waist
    canvas.fill_rect(3.0, 2.0, 18.0, 6.0, base);
    canvas.fill_rect(3.0, 2.0, 18.0, 2.0, hi);
    for x in PAIR_XS {
        canvas.fill_rect(x, 8.0, 8.0, 10.0, base);
    }
    canvas.outline(3.0, 2.0, 18.0, 6.0, dark);
    for x in PAIR_XS {
        canvas.outline(x, 8.0, 8.0, 10.0, dark);
    }

    let mark = match id {
        PantsId::RunicLegguards => Some((12.0, RUNE_CYAN)),
        PantsId::FlameGuards => Some((14.0, hex(0xFF6600))),
        PantsId::ShadowLeggings => Some((13.0, hex(0x3A3A5A))),
        _ => None,
    };
    if let Some((y, color)) = mark {
        pixels(canvas, &[(6.0, y), (16.0, y)], color);
    }
}

fn boots(canvas: &mut Canvas, id: BootsId) {
    let (base, hi, dark) = match id {
        BootsId::LeatherBoots | BootsId::IronToe => (0x6B4226, 0x7B5236, 0x3B1206),
        BootsId::FurBoots => (0x7A6A5A, 0x9A8A6A, 0x4A3A2A),
        BootsId::SilentHunter => (0x3A3A3A, 0x4A4A4A, 0x1A1A1A),
        BootsId::Stormforged => (0x4A4A5A, 0x5A5A6A, 0x2A2A3A),
        BootsId::BoneTreads => (0xC4B898, 0xD4C8A8, 0x8A7A5A),
        BootsId::Flamestep => (0x3A1A0A, 0x5A2A1A, 0x1A0A00),
        BootsId::ShadowStep => (0x1A1A2A, 0x2A2A3A, 0x0A0A1A),
    };
    let (base, hi, dark) = (hex(base), hex(hi), hex(dark));

    for x in PAIR_XS {
        canvas.fill_rect(x, 6.0, 8.0, 8.0, base);
        canvas.fill_rect(x, 6.0, 8.0, 3.0, hi);
        // sole
        canvas.fill_rect(x - 1.0, 12.0, 10.0, 3.0, dark);
        canvas.outline(x, 6.0, 8.0, 8.0, dark);
    }

    match id {
        BootsId::Stormforged => pixels(canvas, &[(6.0, 10.0), (16.0, 10.0)], RUNE_CYAN),
        BootsId::IronToe => {
            canvas.fill_rect(2.0, 11.0, 3.0, 3.0, hex(0x8A8A8A));
            canvas.fill_rect(12.0, 11.0, 3.0, 3.0, hex(0x8A8A8A));
        }
        BootsId::Flamestep => {
            pixels(canvas, &[(5.0, 13.0), (15.0, 13.0)], hex(0xFF6600));
            pixels(canvas, &[(7.0, 13.0), (17.0, 13.0)], hex(0xFF8800));
        }
        BootsId::BoneTreads => pixels(canvas, &[(2.0, 10.0), (21.0, 10.0)], hex(0xB4A888)),
        BootsId::ShadowStep => pixels(canvas, &[(2.0, 13.0), (21.0, 13.0)], hex(0x2A2A4A)),
        _ => {}
    }
}

fn weapon(canvas: &mut Canvas, id: WeaponId) {
    match id {
        WeaponId::BeardedAxe => {
            canvas.fill_rect(11.0, 2.0, 2.0, 18.0, HAFT);
            canvas.fill_rect(13.0, 3.0, 5.0, 3.0, hex(0x8A8A8A));
            canvas.fill_rect(13.0, 6.0, 6.0, 4.0, hex(0x7A7A7A));
            canvas.fill_rect(14.0, 10.0, 5.0, 3.0, hex(0x8A8A8A));
            canvas.fill_rect(18.0, 5.0, 2.0, 7.0, hex(0xCCCCCC));
            canvas.outline(13.0, 3.0, 7.0, 10.0, hex(0x4A4A4A));
        }
        WeaponId::Longsword => {
            canvas.fill_rect(11.0, 1.0, 2.0, 16.0, hex(0xAAAAAA));
            canvas.fill_rect(11.0, 1.0, 1.0, 16.0, hex(0xCCCCCC));
            canvas.fill_rect(11.0, 1.0, 2.0, 3.0, hex(0xDDDDDD));
            canvas.fill_rect(8.0, 17.0, 8.0, 1.0, BRASS);
            canvas.fill_rect(11.0, 18.0, 2.0, 4.0, HAFT);
            canvas.fill_rect(10.0, 22.0, 4.0, 2.0, BRASS);
        }
        WeaponId::WarSpear => {
            canvas.fill_rect(11.0, 4.0, 2.0, 18.0, HAFT);
            canvas.fill_rect(10.0, 1.0, 4.0, 5.0, hex(0x8A8A8A));
            canvas.fill_rect(11.0, 0.0, 2.0, 2.0, hex(0xCCCCCC));
            canvas.outline(10.0, 1.0, 4.0, 5.0, hex(0x5A5A5A));
        }
        WeaponId::TwinSeax => {
            for x in [6.0, 17.0] {
                canvas.fill_rect(x, 4.0, 1.0, 10.0, HAFT);
                canvas.fill_rect(x - 1.0, 1.0, 3.0, 5.0, hex(0xAAAAAA));
                canvas.fill_rect(x, 0.0, 1.0, 2.0, hex(0xCCCCCC));
            }
        }
        WeaponId::RunicHammer => {
            canvas.fill_rect(11.0, 8.0, 2.0, 14.0, HAFT);
            dome(canvas, 6.0, 2.0, 12.0, 7.0, 0x5A5A6A, 0x6A6A7A, 0x2A2A3A);
            pixels(canvas, &[(8.0, 5.0), (11.0, 4.0), (14.0, 5.0), (10.0, 6.0)], RUNE_CYAN);
        }
        WeaponId::FrostCleaver => {
            canvas.fill_rect(11.0, 4.0, 2.0, 16.0, hex(0x4A6A7A));
            canvas.fill_rect(13.0, 2.0, 6.0, 4.0, hex(0x8AB4D0));
            canvas.fill_rect(13.0, 6.0, 7.0, 6.0, hex(0x6A9AB0));
            canvas.fill_rect(19.0, 5.0, 1.0, 8.0, hex(0xB0E0FF));
            canvas.outline(13.0, 2.0, 7.0, 10.0, hex(0x3A5A6A));
        }
        WeaponId::BloodthirstBlade => {
            canvas.fill_rect(11.0, 1.0, 2.0, 18.0, hex(0x8A3A3A));
            canvas.fill_rect(11.0, 1.0, 1.0, 18.0, hex(0xAA5A5A));
            canvas.fill_rect(11.0, 1.0, 2.0, 3.0, hex(0xCC6666));
            canvas.fill_rect(8.0, 19.0, 8.0, 1.0, hex(0x4A1A1A));
            canvas.fill_rect(11.0, 20.0, 2.0, 3.0, hex(0x3A0A0A));
            canvas.pixel(12.0, 0.0, hex(0xFF0000));
        }
        WeaponId::ThunderMace => {
            canvas.fill_rect(11.0, 10.0, 2.0, 12.0, HAFT);
            canvas.fill_rect(7.0, 2.0, 10.0, 8.0, hex(0x7A7A7A));
            canvas.outline(7.0, 2.0, 10.0, 8.0, hex(0x3A3A3A));
            pixels(canvas, &[(6.0, 4.0), (6.0, 7.0), (17.0, 4.0), (17.0, 7.0)], hex(0x8A8A8A));
            pixels(canvas, &[(10.0, 5.0), (13.0, 6.0)], hex(0xFFFF44));
        }
        WeaponId::ShieldOfOdin => {
            let wood = hex(0x5A4A3A);
            canvas.fill_rect(4.0, 3.0, 16.0, 16.0, wood);
            canvas.fill_rect(5.0, 2.0, 14.0, 1.0, wood);
            canvas.fill_rect(5.0, 19.0, 14.0, 1.0, wood);
            canvas.outline(4.0, 3.0, 16.0, 16.0, hex(0x2A1A0A));
            canvas.fill_rect(4.0, 3.0, 16.0, 2.0, hex(0x7A6A4A));
            canvas.fill_rect(4.0, 17.0, 16.0, 2.0, hex(0x7A6A4A));
            // boss
            canvas.fill_rect(10.0, 9.0, 4.0, 4.0, BRASS);
            canvas.pixel(11.0, 10.0, BRASS_HI);
        }
        WeaponId::RagnarokGreatsword => {
            canvas.fill_rect(11.0, 0.0, 3.0, 18.0, hex(0x8A8AAA));
            canvas.fill_rect(11.0, 0.0, 1.0, 18.0, hex(0xAAAACC));
            canvas.fill_rect(11.0, 0.0, 3.0, 2.0, hex(0xCCCCEE));
            for y in (3..16).step_by(4) {
                canvas.pixel(12.0, y as f64, GOLD);
            }
            canvas.fill_rect(8.0, 18.0, 8.0, 2.0, BRASS);
            canvas.fill_rect(11.0, 20.0, 3.0, 4.0, hex(0x4A2A1A));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_paints_inside_grid() {
        for slot in Slot::ALL {
            for item in ItemId::all_in(*slot) {
                let mut canvas = Canvas::new(ITEM_GRID, 1);
                draw_item_sprite(&mut canvas, *slot, item.id());
                assert!(canvas.frame().opaque_count() > 10, "{}", item.id());
                assert_eq!(canvas.layer_count(Layer::Item), canvas.frame().opaque_count());
            }
        }
    }

    #[test]
    fn test_unknown_item_clears_canvas() {
        let mut canvas = Canvas::new(ITEM_GRID, 2);
        canvas.fill_rect(0.0, 0.0, 24.0, 24.0, Color::WHITE);
        draw_item_sprite(&mut canvas, Slot::Weapon, "broom");
        assert!(canvas.frame().is_blank());
    }

    #[test]
    fn test_item_from_other_slot_is_unknown() {
        let frame = render_item(Slot::Boots, "longsword", 1);
        assert!(frame.is_blank());
    }

    #[test]
    fn test_render_item_size() {
        let frame = render_item(Slot::Helmet, "jarl-gilded", 3);
        assert_eq!((frame.width, frame.height), (72, 72));
        // gem between the eyes
        assert_eq!(frame.get_pixel(11 * 3 + 1, 7 * 3 + 1), Some([0xFF, 0x33, 0x33, 255]));
    }
}
