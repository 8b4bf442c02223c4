//! Integration test: export -> file -> import of a mid-game state

use abyss::data::{default_class_templates, GameConfig};
use abyss::items::{Item, ItemKind, Rarity};
use abyss::save::{load_from_path, save_to_path};
use abyss::{Direction, Game};

fn play_a_little(game: &mut Game) {
    let moves = [Direction::East, Direction::East, Direction::South, Direction::West, Direction::North];
    for (turn, dir) in moves.iter().cycle().take(40).enumerate() {
        if game.is_game_over() || game.in_shop() {
            break;
        }
        game.move_player(*dir);
        if turn % 7 == 0 && !game.inventory().is_empty() {
            game.use_item(0);
        }
    }
}

#[test]
fn test_mid_game_roundtrip_is_identical() {
    let classes = default_class_templates();
    let mut game = Game::new("Tester", classes.find("Rogue").expect("rogue"), GameConfig::default(), 2024);
    play_a_little(&mut game);

    // Fill every equipment slot and the pack so all of them go through the file
    let mut save = game.export();
    save.equipment
        .equip(Item::new("Chain Mail", ItemKind::Defense, 6, "", Rarity::Uncommon))
        .expect("armor slot");
    save.equipment
        .equip(Item::new("Amulet of Ferocity", ItemKind::CritDamage, 30, "", Rarity::Rare))
        .expect("amulet slot");
    save.inventory.push(Item::new("Health Potion", ItemKind::Heal, 4, "", Rarity::Common));
    save.inventory.push(Item::new("Amulet of Precision", ItemKind::CritChance, 5, "", Rarity::Epic));
    let game = Game::import(save, GameConfig::default(), Some(9)).expect("import filled save");
    assert!(game.equipment().weapon.is_some());
    assert_eq!(game.equipment().armor.as_ref().map(|i| i.kind), Some(ItemKind::Defense));
    assert_eq!(game.equipment().amulet.as_ref().map(|i| i.kind), Some(ItemKind::CritDamage));
    assert!(game.inventory().count() >= 2);

    let dir = std::env::temp_dir().join(format!("abyss-roundtrip-{}", std::process::id()));
    let path = dir.join("slot.json");
    save_to_path(&game, &path).expect("save");
    let restored = Game::import(load_from_path(&path).expect("load"), GameConfig::default(), Some(5)).expect("import");

    assert_eq!(restored.export(), game.export());
    assert_eq!(restored.view(), game.view());
    assert_eq!(restored.equipment(), game.equipment());
    assert_eq!(restored.inventory().items(), game.inventory().items());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_same_seed_same_run() {
    let classes = default_class_templates();
    let template = classes.find("Archer").expect("archer");
    let mut a = Game::new("A", template, GameConfig::default(), 77);
    let mut b = Game::new("A", template, GameConfig::default(), 77);
    play_a_little(&mut a);
    play_a_little(&mut b);
    assert_eq!(a.export(), b.export());
}
