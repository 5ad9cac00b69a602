use neon_arcade::achievements::{get_achievement_def, Achievements};
use neon_arcade::{
    build_info, Arcade, ArcadeConfig, Difficulty, FileStore, GameKind, ScoreEntry, Theme,
};
use std::io;
use std::path::PathBuf;

/// Rows shown by `leaderboard`.
const LEADERBOARD_ROWS: usize = 10;

enum Command {
    Leaderboard(Option<GameKind>),
    HighScores,
    Record(RecordArgs),
    Achievements,
    Stats,
    Theme(Option<Theme>),
    ClearLeaderboard,
    Reset,
}

struct RecordArgs {
    game: GameKind,
    score: u64,
    level: Option<u32>,
    difficulty: Option<Difficulty>,
    powerups: u32,
    combo: u32,
}

fn main() -> io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config = ArcadeConfig::from_env();

    let command = match parse_args(&args, &mut config) {
        Ok(Some(command)) => command,
        Ok(None) => return Ok(()),
        Err(message) => {
            eprintln!("{message}");
            eprintln!("Run 'neon-arcade --help' for usage.");
            std::process::exit(1);
        }
    };

    let mut arcade = Arcade::open(config)?;
    run(&mut arcade, command);
    Ok(())
}

/// Parse arguments into a command. `Ok(None)` means help or version was
/// printed and there is nothing left to do.
fn parse_args(args: &[String], config: &mut ArcadeConfig) -> Result<Option<Command>, String> {
    let mut rest = args;
    while let Some(first) = rest.first() {
        match first.as_str() {
            "--dir" => {
                let dir = rest.get(1).ok_or("--dir requires a path")?;
                config.data_dir = Some(PathBuf::from(dir));
                rest = &rest[2..];
            }
            _ => break,
        }
    }

    let Some((name, params)) = rest.split_first() else {
        print_usage();
        return Ok(None);
    };

    let command = match name.as_str() {
        "--version" | "-v" => {
            println!(
                "neon-arcade {} ({})",
                build_info::BUILD_DATE,
                build_info::BUILD_COMMIT
            );
            return Ok(None);
        }
        "--help" | "-h" => {
            print_usage();
            return Ok(None);
        }
        "leaderboard" => {
            let game = params.first().map(|g| g.parse::<GameKind>()).transpose()?;
            Command::Leaderboard(game)
        }
        "high-scores" => Command::HighScores,
        "record" => Command::Record(parse_record(params)?),
        "achievements" => Command::Achievements,
        "stats" => Command::Stats,
        "theme" => {
            let theme = params.first().map(|t| t.parse::<Theme>()).transpose()?;
            Command::Theme(theme)
        }
        "clear-leaderboard" => Command::ClearLeaderboard,
        "reset" => Command::Reset,
        other => return Err(format!("Unknown command: {other}")),
    };
    Ok(Some(command))
}

fn parse_record(params: &[String]) -> Result<RecordArgs, String> {
    let game: GameKind = params
        .first()
        .ok_or("record requires GAME and SCORE")?
        .parse()?;
    let score: u64 = params
        .get(1)
        .ok_or("record requires GAME and SCORE")?
        .parse()
        .map_err(|_| "SCORE must be a non-negative number".to_string())?;

    let mut record = RecordArgs {
        game,
        score,
        level: None,
        difficulty: None,
        powerups: 0,
        combo: 0,
    };

    let mut i = 2;
    while i < params.len() {
        let flag = params[i].as_str();
        let value = params
            .get(i + 1)
            .ok_or_else(|| format!("{flag} requires a value"))?;
        match flag {
            "--level" => record.level = Some(parse_number(flag, value)?),
            "--difficulty" => record.difficulty = Some(value.parse::<Difficulty>()?),
            "--powerups" => record.powerups = parse_number(flag, value)?,
            "--combo" => record.combo = parse_number(flag, value)?,
            other => return Err(format!("Unknown option: {other}")),
        }
        i += 2;
    }
    Ok(record)
}

fn parse_number(flag: &str, value: &str) -> Result<u32, String> {
    value
        .parse()
        .map_err(|_| format!("{flag} requires a number"))
}

fn run(arcade: &mut Arcade<FileStore>, command: Command) {
    match command {
        Command::Leaderboard(game) => {
            let entries = arcade.get_leaderboard(game.map(|g| g.id()));
            let title = game.map(|g| g.name()).unwrap_or("All Games");
            println!("LEADERBOARD - {title}");
            if entries.is_empty() {
                println!("  No scores yet.");
            }
            for (rank, entry) in entries.iter().take(LEADERBOARD_ROWS).enumerate() {
                print_entry(rank + 1, entry);
            }
        }
        Command::HighScores => {
            for (game, score) in arcade.high_scores() {
                println!("  {:<12} {score:>8}", game.name());
            }
        }
        Command::Record(args) => {
            let difficulty = args
                .difficulty
                .unwrap_or_else(|| args.game.default_difficulty());
            let mut session = arcade.start_session(args.game, difficulty);
            for _ in 0..args.powerups {
                session.collect_powerup();
            }
            if args.combo > 0 {
                session.record_combo(args.combo);
            }
            let outcome = session.finish(args.score, args.level);

            println!(
                "Recorded {} points in {} (level {}, {})",
                outcome.entry.score,
                args.game.name(),
                outcome.entry.level,
                outcome.entry.difficulty.label()
            );
            if outcome.new_high_score {
                println!("New high score! (previous: {})", outcome.previous_high_score);
            }
            for id in outcome.newly_unlocked {
                if let Some(def) = get_achievement_def(id) {
                    println!("Achievement unlocked: {} {}", def.icon, def.name);
                }
            }
        }
        Command::Achievements => {
            let achievements = arcade.view_achievements();
            let unlocked = achievements.iter().filter(|a| a.is_unlocked()).count();
            println!("ACHIEVEMENTS {unlocked}/{}", achievements.len());
            for status in achievements {
                let mark = match (status.unlocked, status.unlocked_at) {
                    (true, Some(at)) => format!("unlocked {}", at.format("%Y-%m-%d")),
                    (true, None) => "unlocked".to_string(),
                    (false, _) => "locked".to_string(),
                };
                println!(
                    "  {} {:<18} {:<40} {mark}",
                    status.def.icon, status.def.name, status.def.description
                );
            }
        }
        Command::Stats => {
            let stats = arcade.get_stats();
            println!("Games played:        {}", stats.total_games_played);
            println!("Total score:         {}", stats.total_score);
            println!("Power-ups collected: {}", stats.powerups_collected);
            println!(
                "Achievements:        {}/{}",
                arcade.unlocked_count(),
                Achievements::total_count()
            );
        }
        Command::Theme(None) => println!("{}", arcade.theme()),
        Command::Theme(Some(theme)) => {
            arcade.set_theme(theme);
            println!("Theme set to {theme}");
        }
        Command::ClearLeaderboard => {
            arcade.clear_leaderboard();
            println!("Leaderboard cleared.");
        }
        Command::Reset => {
            arcade.reset_all();
            println!("All scores, stats and achievements removed.");
        }
    }
}

fn print_entry(rank: usize, entry: &ScoreEntry) {
    let game = entry
        .game
        .parse::<GameKind>()
        .map(|g| g.name())
        .unwrap_or(entry.game.as_str());
    println!(
        "  #{rank:<3} {game:<12} {:>8}  lvl {:<3} {:<7} {}",
        entry.score,
        entry.level,
        entry.difficulty.label(),
        entry.recorded_at.format("%Y-%m-%d")
    );
}

fn print_usage() {
    println!(
        "Neon Arcade - scores, stats and achievements\n\
         \n\
         Usage: neon-arcade [--dir PATH] <command>\n\
         \n\
         Commands:\n\
         \x20 leaderboard [GAME]     Show the top scores, optionally for one game\n\
         \x20 high-scores            Best score of every game\n\
         \x20 record GAME SCORE      Record a finished game\n\
         \x20     --level N          Level reached (default: derived from score)\n\
         \x20     --difficulty D     easy, medium, hard or normal\n\
         \x20     --powerups N       Power-ups collected during the game\n\
         \x20     --combo N          Best combo multiplier reached\n\
         \x20 achievements           List achievements\n\
         \x20 stats                  Show lifetime stats\n\
         \x20 theme [dark|light]     Show or set the theme\n\
         \x20 clear-leaderboard      Delete all scores\n\
         \x20 reset                  Delete scores, stats and achievements\n\
         \x20 --version              Show version information\n\
         \x20 --help                 Show this help message\n\
         \n\
         Games: snake, block-blast, flappy-bird, dodge-game, memory-game, quiz-game"
    );
}
