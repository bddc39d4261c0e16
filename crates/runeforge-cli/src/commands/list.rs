//! List command

use std::io::{self, Write};

use runeforge_core::catalog::{Swatch, CATEGORIES, EYE_COLORS, HAIR_COLORS, ITEMS, MONSTERS, SKILLS};
use runeforge_core::{Color, Slot, SKIN_PALETTES};
use runeforge_raster::has_bespoke;
use serde::Serialize;

use super::CmdResult;
use crate::ListKind;

#[derive(Serialize)]
struct SkinEntry {
    id: &'static str,
    name: &'static str,
    base: Color,
    shadow: Color,
    highlight: Color,
}

#[derive(Serialize)]
struct Palettes {
    skin: Vec<SkinEntry>,
    hair: &'static [Swatch],
    eyes: &'static [Swatch],
}

fn palettes() -> Palettes {
    Palettes {
        skin: SKIN_PALETTES
            .iter()
            .map(|p| SkinEntry {
                id: p.id,
                name: p.name,
                base: p.base,
                shadow: p.shadow,
                highlight: p.highlight,
            })
            .collect(),
        hair: HAIR_COLORS,
        eyes: EYE_COLORS,
    }
}

pub fn run(what: ListKind, json: bool) -> CmdResult {
    let mut out = io::stdout().lock();
    write_list(&mut out, what, json)
}

fn write_list<W: Write>(out: &mut W, what: ListKind, json: bool) -> CmdResult {
    if json {
        let text = match what {
            ListKind::Items => serde_json::to_string_pretty(ITEMS)?,
            ListKind::Monsters => serde_json::to_string_pretty(MONSTERS)?,
            ListKind::Skills => serde_json::to_string_pretty(SKILLS)?,
            ListKind::Palettes => serde_json::to_string_pretty(&palettes())?,
        };
        writeln!(out, "{text}")?;
        return Ok(());
    }

    match what {
        ListKind::Items => {
            for slot in Slot::ALL {
                heading(out, &format!("{slot}"))?;
                for info in ITEMS.iter().filter(|i| i.slot() == *slot) {
                    writeln!(out, "  {:<22} {:<24} {}", info.id(), info.name, info.rarity)?;
                }
                writeln!(out)?;
            }
        }
        ListKind::Monsters => {
            heading(out, "Monsters")?;
            for info in MONSTERS {
                writeln!(out, "  {:<16} {:<18} {:<12} {}", info.id, info.name, info.difficulty, info.role)?;
            }
        }
        ListKind::Skills => {
            for category in CATEGORIES {
                heading(out, category.name)?;
                for info in SKILLS.iter().filter(|s| s.category == category.id) {
                    let marker = if has_bespoke(info.id) { "*" } else { " " };
                    writeln!(
                        out,
                        "  {marker} {:<18} {:<18} {:>4}  {}",
                        info.id, info.name, info.cooldown, info.damage
                    )?;
                }
                writeln!(out)?;
            }
            writeln!(out, "* has its own animation")?;
        }
        ListKind::Palettes => {
            heading(out, "Skin")?;
            for p in SKIN_PALETTES {
                writeln!(
                    out,
                    "  {:<8} {} {} {}",
                    p.id,
                    p.base.to_hex(),
                    p.shadow.to_hex(),
                    p.highlight.to_hex()
                )?;
            }
            for (title, table) in [("Hair", HAIR_COLORS), ("Eyes", EYE_COLORS)] {
                writeln!(out)?;
                heading(out, title)?;
                for s in table {
                    writeln!(out, "  {:<8} {}", s.id, s.color.to_hex())?;
                }
            }
        }
    }
    Ok(())
}

fn heading<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(title.chars().count()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listed(what: ListKind, json: bool) -> String {
        let mut out = Vec::new();
        write_list(&mut out, what, json).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_tables_name_every_entry() {
        let items = listed(ListKind::Items, false);
        assert!(ITEMS.iter().all(|i| items.contains(i.id())));

        let skills = listed(ListKind::Skills, false);
        assert!(skills.contains("Beam / Channel"));
        assert!(skills.contains("* ice-beam"));

        let palettes = listed(ListKind::Palettes, false);
        assert!(palettes.contains("olive"));
        assert!(palettes.contains("copper"));
    }

    #[test]
    fn test_json_lists_parse() {
        let monsters: serde_json::Value = serde_json::from_str(&listed(ListKind::Monsters, true)).unwrap();
        assert_eq!(monsters.as_array().unwrap().len(), MONSTERS.len());
        assert_eq!(monsters[0]["id"], "draugr-warrior");

        let items: serde_json::Value = serde_json::from_str(&listed(ListKind::Items, true)).unwrap();
        assert_eq!(items[0]["id"], ITEMS[0].id());

        let palettes: serde_json::Value = serde_json::from_str(&listed(ListKind::Palettes, true)).unwrap();
        assert_eq!(palettes["skin"].as_array().unwrap().len(), SKIN_PALETTES.len());
    }
}
