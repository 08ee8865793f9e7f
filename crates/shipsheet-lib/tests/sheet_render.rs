use std::fs;
use std::path::PathBuf;

use shipsheet_lib::{Compendium, SheetRenderer};

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

fn equipped_compendium() -> Compendium {
    Compendium::load(&fixture_dir()).expect("fixtures should load")
}

#[test]
fn renders_all_sheet_sections() {
    let compendium = equipped_compendium();
    let mut ship = compendium.ship("Emblem").expect("template present");
    compendium.equip_default_systems(&mut ship).unwrap();

    let sheet = SheetRenderer::default().render(&ship).expect("render");

    assert!(sheet.contains("EMBLEM"));
    assert!(sheet.contains("ESCORT CLASS - 4 POINTS"));
    assert!(sheet.contains("TRAITS"));
    assert!(sheet.contains("Maneuverable"));
    assert!(sheet.contains("Scout Rigging"));
    assert!(sheet.contains("SYSTEMS - CORE"));
    assert!(sheet.contains("SYSTEMS - SLOTS"));
    assert!(sheet.contains("Engine"));
    assert!(sheet.contains("WEAPONS"));
    assert!(sheet.contains("BAYS"));
    // Gauge and flat stat boxes.
    assert!(sheet.contains("/  8"));
    assert!(sheet.contains("(+  )"));
}

#[test]
fn partial_weapon_list_leaves_later_mounts_as_placeholders() {
    let compendium = equipped_compendium();
    let mut ship = compendium.ship("Emblem").expect("template present");
    compendium.equip_default_systems(&mut ship).unwrap();

    // One weapon for two mounts: only the first is equipped.
    let cannon = compendium.weapon("Light Cannon").unwrap().clone();
    ship.mounts[0].equip(cannon).unwrap();

    let sheet = SheetRenderer::default().render(&ship).expect("render");

    assert!(sheet.contains("[_] Light Cannon"));
    // The empty spinal mount renders a placeholder with its count.
    let placeholder = sheet
        .lines()
        .find(|line| line.contains("FS"))
        .expect("spinal mount row present");
    assert!(placeholder.contains("(x1)"));
    assert!(!placeholder.contains("Light Cannon"));
}

#[test]
fn shots_are_scaled_by_mount_count() {
    let compendium = equipped_compendium();
    let mut ship = compendium.ship("Emblem").expect("template present");
    compendium.equip_default_systems(&mut ship).unwrap();

    // Flak Battery fires Shots 2d6; mount 0 is replicated twice.
    let flak = compendium.weapon("Flak Battery").unwrap().clone();
    ship.mounts[0].equip(flak).unwrap();

    let sheet = SheetRenderer::default().render(&ship).expect("render");
    let row = sheet
        .lines()
        .find(|line| line.contains("Flak Battery"))
        .expect("flak row present");
    assert!(row.contains("4d6"), "shots column scales 2d6 by x2: {row}");
}

#[test]
fn highlander_and_swarm_counts_appear_in_the_bay_table() {
    let compendium = equipped_compendium();
    let mut ship = compendium.ship("Emblem").expect("template present");
    compendium.equip_default_systems(&mut ship).unwrap();

    let swarm = compendium.craft("Swarm Missile Cell").unwrap().clone();
    ship.bays[0].equip(swarm).unwrap();
    // Bay 1 is replicated four times, but Chaff is a Highlander.
    let chaff = compendium.craft("Chaff").unwrap().clone();
    ship.bays[1].equip(chaff).unwrap();

    let sheet = SheetRenderer::default().render(&ship).expect("render");
    assert!(sheet.contains("4(x2)"), "swarm dice times bay count");
    assert!(sheet.contains("1(x1)"), "highlander collapses to one");
}

#[test]
fn labelled_bubbles_render_per_hit_point() {
    let compendium = equipped_compendium();
    let mut ship = compendium.ship("Emblem").expect("template present");
    compendium.equip_default_systems(&mut ship).unwrap();
    let magazine = compendium.system("Reinforced Magazine").unwrap().clone();
    ship.equip(magazine).unwrap();

    let sheet = SheetRenderer::default().render(&ship).expect("render");
    assert!(sheet.contains("[3][6]"));
    assert!(sheet.contains("[_][_]"), "unlabelled systems use plain bubbles");
}

#[test]
fn write_overwrites_an_existing_file() {
    let compendium = equipped_compendium();
    let mut ship = compendium.ship("Emblem").expect("template present");
    compendium.equip_default_systems(&mut ship).unwrap();

    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("sheet.txt");
    fs::write(&path, "stale contents").unwrap();

    SheetRenderer::default().write(&ship, &path).expect("write");
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("EMBLEM"));
    assert!(!contents.contains("stale contents"));
}
