use std::error::Error;
use std::io;
use std::time::Instant;

mod console;

use checkers::boards::checkers_board::{CheckersBoard, Rules, INITIAL_LAYOUT};
use checkers::boards::perft::divide;

use clap::arg;
use clap::command;
use clap::ArgMatches;
use clap::Command;

use log::{debug, error, info, LevelFilter};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;

fn main() {
    let matches = cli().get_matches();

    init_logging(matches.get_flag("debug"));
    debug!("Parsed arguments: {:?}", matches);

    let result = match matches.subcommand() {
        Some(("play", arg_matches)) => board_from(arg_matches).and_then(play),
        Some(("moves", arg_matches)) => {
            board_from(arg_matches).and_then(|board| moves(&board, arg_matches.get_flag("either-side")))
        }
        Some(("perft", arg_matches)) => {
            let depth = arg_matches.get_one::<u8>("depth").copied().unwrap_or(3);
            let moves = arg_matches
                .get_many::<String>("moves")
                .unwrap_or_default()
                .filter(|&v| !v.is_empty())
                .collect::<Vec<_>>();
            board_from(arg_matches).and_then(|board| perft(board, moves, depth))
        }
        None => CheckersBoard::from_layout(INITIAL_LAYOUT)
            .map_err(Into::into)
            .and_then(play),
        _ => unreachable!("Exhausted list of subcommands"),
    };

    if let Err(err) = result {
        error!("{}", err);
        std::process::exit(1);
    }
}

fn cli() -> Command {
    command!()
        .version("v0.1.0")
        .propagate_version(true)
        .arg(arg!(
            -d --debug "Turn debugging information on"
        ))
        .subcommand(with_board_args(Command::new("play").about("Play a game on the console")))
        .subcommand(
            with_board_args(Command::new("moves").about("List the legal moves of a position")).arg(arg!(
                --"either-side" "Include moves of the side not on turn"
            )),
        )
        .subcommand(
            with_board_args(Command::new("perft").about("Run Perft test"))
                .arg(
                    arg!(
                    -x --depth <d> "depth"
                            )
                    .default_value("3")
                    .value_parser(clap::value_parser!(u8)),
                )
                .arg(
                    arg!(
                    -m --moves <moves> "List of moves"
                            )
                    .num_args(1..)
                    .value_parser(clap::value_parser!(String)),
                ),
        )
}

fn with_board_args(command: Command) -> Command {
    command
        .arg(
            arg!(
            -l --layout <LAYOUT> "Board layout, rows from rank 8 to rank 1 separated by '/'"
                    )
            .default_value(INITIAL_LAYOUT),
        )
        .arg(arg!(--black "Black moves first"))
        .arg(arg!(--"no-forced-jumps" "Allow simple moves while a capture is available"))
        .arg(arg!(--"partial-chains" "Allow a capture chain to stop before its longest continuation"))
}

fn board_from(matches: &ArgMatches) -> Result<CheckersBoard, Box<dyn Error>> {
    let layout = matches
        .get_one::<String>("layout")
        .map(String::as_str)
        .unwrap_or(INITIAL_LAYOUT);
    let rules = Rules {
        require_jumps: !matches.get_flag("no-forced-jumps"),
        require_all_jumps: !matches.get_flag("partial-chains"),
    };
    let mut board = CheckersBoard::from_layout(layout)?.with_rules(rules);
    if matches.get_flag("black") {
        let turn = board.turn().opposite();
        board = board.with_turn(turn);
    }
    debug!("Starting from {} with {:?}, {} to move", board.to_layout(), rules, board.turn());
    Ok(board)
}

fn init_logging(debug: bool) {
    let mut config_builder = ConfigBuilder::new();
    config_builder.set_time_level(LevelFilter::Off);
    config_builder.set_thread_level(LevelFilter::Off);
    config_builder.set_target_level(LevelFilter::Off);
    config_builder.set_location_level(LevelFilter::Off);

    let level = if debug { LevelFilter::Debug } else { LevelFilter::Warn };
    if let Err(err) = TermLogger::init(level, config_builder.build(), TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("Could not initialise logging: {}", err);
    }
}

fn play(mut board: CheckersBoard) -> Result<(), Box<dyn Error>> {
    info!("New game, {} to move", board.turn());
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    console::play(&mut board, stdin.lock(), &mut stdout)?;
    Ok(())
}

#[derive(Tabled)]
struct MoveRow {
    #[tabled(rename = "move")]
    notation: String,
    from: String,
    to: String,
    steps: usize,
    captures: String,
}

fn moves(board: &CheckersBoard, either_side: bool) -> Result<(), Box<dyn Error>> {
    let generator = if either_side {
        board.legal_moves().either_side()
    } else {
        board.legal_moves()
    };

    let rows: Vec<MoveRow> = generator
        .map(|action| MoveRow {
            notation: action.as_notation(),
            from: action.from().to_string(),
            to: action.to().to_string(),
            steps: action.step_count(),
            captures: action.captured().map(|field| field.to_string()).collect::<Vec<_>>().join(" "),
        })
        .collect();

    println!("{}", console::render_to_string(board));
    println!("{} to move, {} legal moves", board.turn(), rows.len());
    if !rows.is_empty() {
        println!("{}", Table::new(rows).with(Style::modern()));
    }
    Ok(())
}

#[derive(Tabled)]
struct PerftRow {
    #[tabled(rename = "move")]
    notation: String,
    nodes: u64,
}

fn perft(mut board: CheckersBoard, moves: Vec<&String>, depth: u8) -> Result<(), Box<dyn Error>> {
    println!("Perft test for {} moves {:?} with depth {}", board.to_layout(), moves, depth);
    for m in moves {
        let played = board.play_notation(m)?;
        debug!("Played {}", played);
    }

    let start_time = Instant::now();
    let result_moves = divide(&mut board, depth)?;
    let elapsed = start_time.elapsed();

    let num_nodes: u64 = result_moves.iter().map(|(_, count)| count).sum();
    let rows: Vec<PerftRow> = result_moves
        .into_iter()
        .map(|(mv, nodes)| PerftRow {
            notation: mv.as_notation(),
            nodes,
        })
        .collect();

    println!("{}", Table::new(rows).with(Style::modern()));
    println!("\nNodes searched: {}", num_nodes);
    info!("Perft {} took {:.3}s", depth, elapsed.as_secs_f32());
    Ok(())
}
