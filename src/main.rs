//! Shadows of the Abyss - Entry Point
//!
//! Line-oriented front end: draws the level as ASCII and reads one
//! command per line.

use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use abyss::data::{ClassTemplate, DataManager};
use abyss::game::{GameView, MessageCategory};
use abyss::items::EquipSlot;
use abyss::save::{load_from_path, load_game, save_exists, save_game, save_to_path};
use abyss::{Direction, Game, ShopTransaction};

#[derive(Parser, Debug)]
#[command(name = "abyss", version, about = "Shadows of the Abyss - a turn-based dungeon crawler")]
struct Args {
    /// Seed for the run; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Class to play (Warrior, Mage, Rogue, Archer)
    #[arg(long)]
    class: Option<String>,

    /// Resume from a save file
    #[arg(long)]
    load: Option<PathBuf>,

    /// Character name
    #[arg(long, default_value = "Hero")]
    name: String,
}

enum Command {
    Move(Direction),
    Use(usize),
    Combine(usize, usize),
    Buy(usize),
    Sell(usize),
    Leave,
    Save(Option<PathBuf>),
    Quit,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();
    log::info!("Starting abyss v{}", env!("CARGO_PKG_VERSION"));

    let data = DataManager::new();
    let seed = args.seed.unwrap_or_else(rand::random);
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let resume = args.load.is_none() && save_exists(0) && ask_yes_no("Found existing save. Load it?", &mut input)?;

    let mut game = match &args.load {
        Some(path) => {
            let save = load_from_path(path).with_context(|| format!("failed to load {}", path.display()))?;
            Game::import(save, data.config.clone(), Some(seed))?
        }
        None if resume => {
            let save = load_game(0).context("failed to load the saved game")?;
            Game::import(save, data.config.clone(), Some(seed))?
        }
        None => {
            let template = match &args.class {
                Some(name) => match data.classes.find(name) {
                    Some(template) => template.clone(),
                    None => bail!("unknown class '{}', expected one of {}", name, data.classes.names().join(", ")),
                },
                None => choose_class(&data, &mut input)?,
            };
            Game::new(args.name.clone(), &template, data.config.clone(), seed)
        }
    };

    run(&mut game, &mut input)?;
    log::info!("abyss shut down cleanly");
    Ok(())
}

/// Send logs to a file so they never interleave with the game screen
fn init_logging() {
    let target = match OpenOptions::new().create(true).write(true).truncate(true).open("abyss.log") {
        Ok(file) => env_logger::Target::Pipe(Box::new(file)),
        Err(_) => env_logger::Target::Pipe(Box::new(io::sink())),
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(target)
        .init();
}

/// Anything other than `y` or `yes` counts as no
fn ask_yes_no(question: &str, input: &mut impl BufRead) -> Result<bool> {
    print!("{} (y/n): ", question);
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

fn choose_class(data: &DataManager, input: &mut impl BufRead) -> Result<ClassTemplate> {
    println!("Choose your class:");
    for (i, class) in data.classes.templates.iter().enumerate() {
        println!(
            "  {}. {:<8} HP {:>3}  ATK {:>2}  DEF {:>2}  Crit {:>4.1}%  x{:.1}  - {}",
            i + 1,
            class.name,
            class.hp,
            class.attack,
            class.defense,
            class.crit_chance,
            class.crit_damage,
            class.playstyle
        );
    }

    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            bail!("no class selected");
        }
        let choice = line.trim();
        let by_number = choice
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| data.classes.templates.get(i));
        if let Some(template) = by_number.or_else(|| data.classes.find(choice)) {
            return Ok(template.clone());
        }
        println!("Unknown class '{}'.", choice);
    }
}

fn run(game: &mut Game, input: &mut impl BufRead) -> Result<()> {
    loop {
        draw(&game.view());
        if game.is_game_over() {
            println!("Your journey ends at depth {}.", game.depth());
            return Ok(());
        }

        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let Some(command) = parse_command(&line) else {
            game.add_message("Unknown command.", MessageCategory::Warning);
            continue;
        };

        let outcome = match command {
            Command::Move(direction) => game.move_player(direction),
            Command::Use(n) => game.use_item(n),
            Command::Combine(i, j) => game.combine_items(i, j),
            Command::Buy(n) => game.shop_transaction(ShopTransaction::Buy(n)),
            Command::Sell(n) => game.shop_transaction(ShopTransaction::Sell(n)),
            Command::Leave => game.leave_shop(),
            Command::Save(path) => {
                let result = match &path {
                    Some(path) => save_to_path(game, path),
                    None => save_game(game, 0),
                };
                match result {
                    Ok(()) => game.add_message("Game saved.", MessageCategory::System),
                    Err(e) => {
                        log::error!("Save failed: {}", e);
                        game.add_message(format!("Save failed: {}", e), MessageCategory::Warning);
                    }
                }
                continue;
            }
            Command::Quit => return Ok(()),
        };
        log::debug!("Command outcome: {:?}", outcome);
    }
}

/// Parse one input line. Item numbers are 1-based on screen.
fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let head = parts.next()?;
    let mut index = || -> Option<usize> {
        let n: usize = parts.next()?.parse().ok()?;
        Some(n.checked_sub(1).unwrap_or(usize::MAX))
    };

    let command = match head {
        "w" => Command::Move(Direction::North),
        "a" => Command::Move(Direction::West),
        "s" => match index() {
            Some(n) => Command::Sell(n),
            None => Command::Move(Direction::South),
        },
        "d" => Command::Move(Direction::East),
        "u" => Command::Use(index()?),
        "c" => {
            let i = index()?;
            let j = index()?;
            Command::Combine(i, j)
        }
        "b" => Command::Buy(index()?),
        "l" => Command::Leave,
        "save" => Command::Save(parts.next().map(PathBuf::from)),
        "q" | "quit" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

fn draw(view: &GameView) {
    println!();
    if view.in_shop {
        println!("=== Merchant's Shop (depth {}) ===", view.depth);
        for (i, item) in view.shop_stock.iter().enumerate() {
            println!("  {:>2}. {:<40} {:>5} gold", i + 1, item.to_string(), item.price());
        }
        println!("  b N: buy   s N: sell   l: leave");
    } else {
        for row in view.ascii_rows() {
            println!("{}", row);
        }
    }

    let p = &view.player;
    println!(
        "{} the {}  Lv {}  HP {}/{}  ATK {}  DEF {}  XP {}/{}  Gold {}  Depth {}",
        p.name, p.character_class, p.level, p.hp, p.max_hp, p.attack, p.defense, p.xp, p.xp_to_next, p.gold, view.depth
    );
    let worn: Vec<String> = EquipSlot::all()
        .iter()
        .map(|&slot| {
            let item = view.equipment.get(slot).map_or("-".to_string(), |i| i.to_string());
            format!("{}: {}", slot.name(), item)
        })
        .collect();
    println!("{}", worn.join("  "));

    if !view.inventory.is_empty() {
        println!("Inventory:");
        for (i, item) in view.inventory.iter().enumerate() {
            println!("  {:>2}. {}", i + 1, item);
        }
    }
    for message in &view.messages {
        println!("| {}", message.text);
    }
    if !view.in_shop {
        println!("w/a/s/d: move  u N: use  c I J: combine  save [path]  q: quit");
    }
}
