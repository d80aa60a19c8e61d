use dicesim::{build_report, save_report, Die, Game};

fn parse_args() -> (usize, usize, u32, u64, Option<String>) {
    let args: Vec<String> = std::env::args().collect();
    let mut rounds = 1000usize;
    let mut dice = 3usize;
    let mut sides = 6u32;
    let mut seed = 42u64;
    let mut output: Option<String> = None;

    let usage = "Usage: dicesim-simulate [--rounds N] [--dice N] [--sides N] [--seed S] [--output FILE]";

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--rounds" => {
                i += 1;
                if i < args.len() {
                    rounds = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --rounds value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--dice" => {
                i += 1;
                if i < args.len() {
                    dice = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --dice value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--sides" => {
                i += 1;
                if i < args.len() {
                    sides = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --sides value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--seed" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().unwrap_or_else(|_| {
                        eprintln!("Invalid --seed value: {}", args[i]);
                        std::process::exit(1);
                    });
                }
            }
            "--output" => {
                i += 1;
                if i < args.len() {
                    output = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                println!("{usage}");
                println!();
                println!("Options:");
                println!("  --rounds N    Rounds to play (default: 1000)");
                println!("  --dice N      Number of dice (default: 3)");
                println!("  --sides N     Faces per die, 1..=N (default: 6)");
                println!("  --seed S      RNG seed (default: 42)");
                println!("  --output FILE Write the full JSON report to FILE");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("{usage}");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    (rounds, dice, sides, seed, output)
}

fn main() {
    let (rounds, num_dice, sides, seed, output) = parse_args();

    let die = Die::new((1..=sides).collect()).unwrap_or_else(|e| {
        eprintln!("Failed to build die: {}", e);
        std::process::exit(1);
    });
    let mut game = Game::new(vec![die; num_dice]).unwrap_or_else(|e| {
        eprintln!("Failed to build game: {}", e);
        std::process::exit(1);
    });

    println!(
        "Dice Simulation ({} rounds, {} x d{}, seed {})",
        rounds, num_dice, sides, seed
    );

    let start = std::time::Instant::now();
    if let Err(e) = game.play_seeded(rounds, seed) {
        eprintln!("Play failed: {}", e);
        std::process::exit(1);
    }
    let elapsed = start.elapsed();

    let report = match build_report(&game) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Analysis failed: {}", e);
            std::process::exit(1);
        }
    };

    // Expected jackpot rate for k fair dice with s sides: s^(1-k).
    let expected_rate = (sides as f64).powi(1 - num_dice as i32);

    println!("  Elapsed:       {:.1} ms", elapsed.as_secs_f64() * 1000.0);
    println!();
    println!("Results:");
    println!(
        "  Jackpots:      {} ({:.3}%, expected {:.3}%)",
        report.jackpots,
        report.jackpot_rate * 100.0,
        expected_rate * 100.0
    );
    println!("  Faces seen:    {}", report.face_counts.faces.len());
    println!("  Combinations:  {}", report.combos.len());
    println!("  Permutations:  {}", report.permutations.len());

    if let Some(ref path) = output {
        save_report(&report, path);
        let size_kb = (std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)) as f64 / 1024.0;
        println!();
        println!("  Report saved:  {} ({:.1} KB)", path, size_kb);
    }
}
