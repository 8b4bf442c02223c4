//! Integration test: turn engine driven through imported states
//!
//! Each test builds a small hand-made level as a save record, imports it
//! and drives the public command API.

use abyss::data::{default_class_templates, GameConfig};
use abyss::entities::{Character, Enemy, EnemyType};
use abyss::game::{GameMessage, MessageCategory};
use abyss::items::{Equipment, Item, ItemKind, Rarity};
use abyss::save::{EnemySaveData, ItemOnGround, MapSaveData, SaveData, SaveError, ValidationError, SAVE_VERSION};
use abyss::world::generation::Room;
use abyss::{Direction, Game, Outcome, Position, TileType};

/// 9x7 grid with one 7x5 room; the player stands at (1, 3)
fn arena_save() -> SaveData {
    let (width, height) = (9, 7);
    let mut tiles = vec![TileType::Wall; (width * height) as usize];
    for y in 1..6 {
        for x in 1..8 {
            tiles[(y * width + x) as usize] = TileType::Floor;
        }
    }
    let classes = default_class_templates();
    let warrior = classes.find("Warrior").expect("warrior");
    let mut equipment = Equipment::default();
    equipment.weapon = Some(abyss::entities::starting_weapon(warrior));

    SaveData {
        version: SAVE_VERSION,
        player: Character::from_template("Tester", warrior, 100),
        player_pos: Position::new(1, 3),
        inventory: Vec::new(),
        equipment,
        map: MapSaveData { width, height, tiles },
        rooms: vec![Room::new(1, 1, 7, 5)],
        stairs: None,
        enemies: Vec::new(),
        items_on_ground: Vec::new(),
        depth: 1,
        in_shop: false,
        shop_stock: Vec::new(),
        messages: vec![GameMessage {
            text: "Welcome.".to_string(),
            category: MessageCategory::System,
        }],
        game_over: false,
    }
}

fn import(save: SaveData) -> Game {
    Game::import(save, GameConfig::default(), Some(7)).expect("valid arena")
}

#[test]
fn test_wall_move_keeps_position_and_skips_enemies() {
    let mut save = arena_save();
    save.enemies.push(EnemySaveData {
        position: Position::new(4, 3),
        enemy: Enemy::new(EnemyType::Orc, 1),
    });
    let mut game = import(save);

    assert_eq!(game.move_player(Direction::West), Outcome::Rejected);
    assert_eq!(game.player_pos(), Position::new(1, 3));
    // The orc did not get a phase
    assert!(game.enemies().contains_key(&Position::new(4, 3)));
}

#[test]
fn test_one_hp_enemy_removed_and_credited_once() {
    let mut save = arena_save();
    let mut troll = Enemy::new(EnemyType::Troll, 2);
    troll.hp = 1;
    save.enemies.push(EnemySaveData {
        position: Position::new(2, 3),
        enemy: troll,
    });
    let mut game = import(save);

    assert_eq!(game.move_player(Direction::East), Outcome::TurnTaken);
    assert!(game.enemies().is_empty());
    assert_eq!(game.player().xp, 60);
    assert_eq!(game.player().gold, 25);

    assert_eq!(game.move_player(Direction::East), Outcome::TurnTaken);
    assert_eq!(game.player_pos(), Position::new(2, 3));
    assert_eq!(game.player().xp, 60);
    assert_eq!(game.player().gold, 25);
}

#[test]
fn test_kill_triggers_level_up() {
    let mut save = arena_save();
    save.player.xp = 90;
    let mut goblin = Enemy::new(EnemyType::Goblin, 1);
    goblin.hp = 1;
    save.enemies.push(EnemySaveData {
        position: Position::new(1, 2),
        enemy: goblin,
    });
    let mut game = import(save);

    game.move_player(Direction::North);
    let player = game.player();
    assert_eq!(player.level, 2);
    assert_eq!(player.xp, 5);
    assert_eq!(player.xp_to_next, 150);
    assert_eq!(player.max_hp, 140);
    assert_eq!(player.hp, 140);
}

#[test]
fn test_combat_damage_at_least_one_both_ways() {
    let mut save = arena_save();
    save.player.attack = 0;
    save.player.crit_chance = 0.0;
    save.equipment.weapon = None;
    save.equipment.armor = Some(Item::new("Plate Armor", ItemKind::Defense, 99, "", Rarity::Epic));
    save.enemies.push(EnemySaveData {
        position: Position::new(2, 3),
        enemy: Enemy::new(EnemyType::Goblin, 1),
    });
    let mut game = import(save);
    let hp = game.player().hp;

    game.move_player(Direction::East);
    assert_eq!(game.enemies()[&Position::new(2, 3)].hp, 19);
    // 1 from retaliation plus 1..=15 from the adjacent goblin's chase
    assert!(game.player().hp <= hp - 2);
    assert!(game.player().hp >= hp - 16);
}

#[test]
fn test_pickup_then_equip_and_combine() {
    let mut save = arena_save();
    save.items_on_ground.push(ItemOnGround {
        position: Position::new(2, 3),
        item: Item::new("Spear", ItemKind::Attack, 5, "A spear.", Rarity::Common),
    });
    save.inventory.push(Item::new("Spear", ItemKind::Attack, 3, "A spear.", Rarity::Rare));
    let mut game = import(save);

    assert_eq!(game.move_player(Direction::East), Outcome::Free);
    assert_eq!(game.player_pos(), Position::new(1, 3));
    assert_eq!(game.inventory().count(), 2);

    assert_eq!(game.combine_items(1, 0), Outcome::Free);
    let spear = game.inventory().get(0).cloned().expect("combined spear");
    assert_eq!(spear.value, 8);
    assert_eq!(spear.rarity, Rarity::Rare);

    assert_eq!(game.use_item(0), Outcome::Free);
    assert_eq!(game.equipment().weapon_bonus(), 8);
    assert_eq!(game.inventory().get(0).map(|i| i.name.as_str()), Some("Iron Sword"));
}

#[test]
fn test_game_over_is_permanent() {
    let mut save = arena_save();
    save.game_over = true;
    save.player.hp = 0;
    let mut game = import(save);

    assert_eq!(game.move_player(Direction::East), Outcome::Rejected);
    assert_eq!(game.use_item(0), Outcome::Rejected);
    assert_eq!(game.combine_items(0, 1), Outcome::Rejected);
    assert_eq!(game.player_pos(), Position::new(1, 3));
}

#[test]
fn test_import_refuses_broken_records() {
    let mut save = arena_save();
    save.enemies.push(EnemySaveData {
        position: Position::new(20, 3),
        enemy: Enemy::new(EnemyType::Orc, 1),
    });
    let err = Game::import(save, GameConfig::default(), None).unwrap_err();
    assert!(matches!(err, SaveError::Invalid(ValidationError::OutOfBounds { what: "enemy", .. })));

    let mut save = arena_save();
    save.player_pos = Position::new(0, 3);
    let err = Game::import(save, GameConfig::default(), None).unwrap_err();
    assert!(matches!(err, SaveError::Invalid(ValidationError::PlayerNotOnFloor(_))));
}
