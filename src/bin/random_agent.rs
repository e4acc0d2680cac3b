use clap::Parser;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use samegame::config::GameConfig;
use samegame::env::SameGameEnv;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Play SameGame with uniformly random legal moves", long_about = None)]
struct Args {
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(flatten)]
    game: GameConfig,

    /// Seed for choosing moves, independent of the board seed
    #[arg(long, default_value_t = 0)]
    policy_seed: u64,

    /// Print one JSON object per step instead of rendering the board
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let mut env = SameGameEnv::new(args.game)?;
    let mut policy = SmallRng::seed_from_u64(args.policy_seed);

    if !args.json {
        println!("{}", env.render());
    }

    while let Some(&action) = env.legal_actions().choose(&mut policy) {
        let step = env.step(action)?;
        if args.json {
            println!("{}", serde_json::to_string(&step)?);
        } else {
            println!("Move: {}", action);
            println!("Move rewarded: {}", step.reward);
            println!("{}", env.render());
        }
        if step.done {
            break;
        }
    }

    if !args.json {
        println!("Game over.");
        println!("Total reward: {}", env.total_reward());
    }
    Ok(())
}
