// src/bin/impostor_dev_cli.rs

use std::error::Error;
use std::path::PathBuf;

use chrono::Utc;
use pico_args::Arguments;

use impostor_engine::api::{
    build_results_view, build_turn_view, CategoryChoice, Command, SecretCardDto,
    StartGameCommand,
};
use impostor_engine::domain::category::{all_categories, parse_custom_words};
use impostor_engine::engine::{clamp_impostor_count, RandomSource};
use impostor_engine::infra::{DeterministicRng, JsonFileStore, RngSeed, SystemRng};
use impostor_engine::storage::HISTORY_LIMIT;
use impostor_engine::time_ctrl::{format_clock, TimerEvent};
use impostor_engine::PartyState;

const HELP: &str = "\
Прогон одного раунда «Самозванца» в терминале

USAGE:
  impostor_dev_cli [OPTIONS]

OPTIONS:
  --players NAMES     Имена через запятую [default: Ana,Bo,Cy,Dee]
  --category ID       Встроенная категория [default: animals]
  --custom WORDS      Свои слова через запятую (вместо --category)
  --impostors N       Число самозванцев [default: 1]
  --seed N            Seed для воспроизводимого раунда
  --data-dir PATH     Каталог хранилища [default: ./.impostor-data]
  --list-categories   Показать встроенные категории и выйти
  -h, --help          Эта справка
";

/// RNG для CLI: системный или с seed.
enum CliRng {
    System(SystemRng),
    Seeded(DeterministicRng),
}

impl RandomSource for CliRng {
    fn gen_index(&mut self, upper: usize) -> usize {
        match self {
            CliRng::System(rng) => rng.gen_index(upper),
            CliRng::Seeded(rng) => rng.gen_index(upper),
        }
    }
}

struct Args {
    players: Vec<String>,
    category: CategoryChoice,
    impostors: usize,
    seed: Option<u64>,
    data_dir: PathBuf,
}

fn split_list(raw: &str) -> Vec<String> {
    // Запятые превращаем в строки и разбираем как поле ввода своей категории.
    parse_custom_words(&raw.replace(',', "\n"))
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut pargs = Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    if pargs.contains("--list-categories") {
        for c in all_categories() {
            println!("{:<12} {} ({} слов)", c.id, c.name, c.word_count());
        }
        std::process::exit(0);
    }

    let players = pargs
        .opt_value_from_str::<_, String>("--players")?
        .map(|raw| split_list(&raw))
        .unwrap_or_else(|| vec!["Ana".into(), "Bo".into(), "Cy".into(), "Dee".into()]);

    let custom: Option<String> = pargs.opt_value_from_str("--custom")?;
    let category = match custom {
        Some(raw) => CategoryChoice::Custom(split_list(&raw)),
        None => CategoryChoice::BuiltIn(
            pargs
                .opt_value_from_str("--category")?
                .unwrap_or_else(|| "animals".to_string()),
        ),
    };

    Ok(Args {
        players,
        category,
        impostors: pargs.opt_value_from_str("--impostors")?.unwrap_or(1),
        seed: pargs.opt_value_from_str("--seed")?,
        data_dir: pargs
            .opt_value_from_str("--data-dir")?
            .unwrap_or_else(|| PathBuf::from(".impostor-data")),
    })
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = parse_args()?;

    let rng = match args.seed {
        Some(seed) => CliRng::Seeded(RngSeed::from_u64(seed).derive(0).to_rng()),
        None => CliRng::System(SystemRng),
    };

    let mut party = PartyState::new(JsonFileStore::new(&args.data_dir), rng);

    let impostors = clamp_impostor_count(args.impostors, args.players.len());
    if impostors != args.impostors {
        println!(
            "Самозванцев {}: слишком много для {} игроков, берём {}",
            args.impostors,
            args.players.len(),
            impostors
        );
    }

    let cmd = StartGameCommand {
        player_names: args.players,
        category: args.category,
        impostor_count: impostors,
    };

    let state = party.start_round(&cmd)?;
    println!("=== THE IMPOSTOR: {} ===", state.category_name);
    println!("Игроков: {}, самозванцев: {}\n", state.player_count(), state.impostor_count);

    // Фаза показа: по одной карточке на игрока.
    while let Some(turn) = party.active_game().and_then(build_turn_view) {
        let card = match &turn.card {
            SecretCardDto::Word(word) => format!("слово: {}", word),
            SecretCardDto::Impostor => "ТЫ САМОЗВАНЕЦ".to_string(),
        };
        println!(
            "[{} of {}] {} -> {}",
            turn.position, turn.total_players, turn.player_name, card
        );
        party.apply(&Command::FinishTurn)?;
    }

    // Обсуждение: симулируем время шагами по 30 секунд.
    let timer = party.start_discussion()?;
    println!("\nОбсуждение: {}", format_clock(timer.duration_secs));
    loop {
        match party.tick_discussion(30) {
            Some(TimerEvent::Running { remaining }) => println!("  осталось {}", format_clock(remaining)),
            Some(TimerEvent::Completed) => {
                println!("  Время вышло!");
                break;
            }
            Some(TimerEvent::Idle) | None => break,
        }
    }

    if let Some(state) = party.active_game() {
        let results = build_results_view(state);
        println!("\nСекретное слово: {}", results.secret_word);
        println!("Самозванцы: {}", results.impostors.join(", "));
        println!("Обычные игроки: {}", results.regular_players.join(", "));
    }

    let session = party.finish_round(Utc::now())?;
    println!(
        "\nРаунд {} записан в {} (храним последние {})",
        session.id,
        args.data_dir.display(),
        HISTORY_LIMIT
    );

    Ok(())
}
