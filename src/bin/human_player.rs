use clap::Parser;
use samegame::board::Position;
use samegame::config::GameConfig;
use samegame::engine::GameEngine;
use std::io::{self, Write}; // For input/output

#[derive(Parser, Debug)]
#[clap(author, version, about = "Play SameGame in the terminal", long_about = None)]
struct Args {
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: GameConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let mut game = GameEngine::from_config(&args.game)?;
    println!("Welcome to SameGame!");

    loop {
        println!("---------------------");
        println!(
            "Steps: {}, Reward: {}, Playable groups: {}",
            game.steps(),
            game.total_reward(),
            game.moves().len()
        );
        println!("{}", game.board().to_ansi_string());

        if game.is_terminal() {
            println!();
            println!("---------------------");
            if game.board().is_empty() {
                println!("🎉 BOARD CLEARED! 🎉");
            } else {
                println!("GAME OVER, {} tiles left.", game.board().tile_count());
            }
            println!("Total Reward: {}", game.total_reward());
            println!("Total Steps: {}", game.steps());
            println!("---------------------");
            break;
        }

        print!("Enter your move (x y), 'm' to list moves, 'q' to quit: ");
        io::stdout().flush()?; // Ensure prompt is shown before input

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            // EOF
            break;
        }

        let trimmed_input = input.trim();

        if trimmed_input == "q" {
            println!("Thanks for playing!");
            break;
        }

        if trimmed_input == "m" {
            for group in game.moves().groups() {
                println!(
                    "  {} {:?} x{}",
                    group.anchor(),
                    group.color(),
                    group.len()
                );
            }
            continue;
        }

        let parts: Vec<&str> = trimmed_input.split_whitespace().collect();
        if parts.len() != 2 {
            println!("Invalid input format. Use 'x y', 'm', or 'q'.");
            continue;
        }
        let (Ok(x), Ok(y)) = (parts[0].parse::<usize>(), parts[1].parse::<usize>()) else {
            println!("Invalid input: Please enter numbers for x and y (e.g., '3 0'), 'm', or 'q'.");
            continue;
        };

        match game.apply_move(Position::new(x, y)) {
            Ok(outcome) => println!(
                "Cleared {} tiles for a reward of {}.",
                outcome.cleared, outcome.reward
            ),
            Err(err) => println!("{}. Moves are addressed by a group's anchor, see 'm'.", err),
        }
    }

    Ok(())
}
