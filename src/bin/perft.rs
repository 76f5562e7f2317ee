use anyhow::anyhow;
use chessapp::Game;
use clap::Parser;
use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, Position};

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

#[derive(Parser, Debug)]
#[command(author, version, about = "Count pseudo-legal move-tree leaves", long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = String::from(START_FEN))]
    fen: String,

    #[arg(short, long, default_value_t = 3)]
    depth: u32,

    /// Print the node count below every root move
    #[arg(long)]
    divide: bool,

    /// Also count fully legal moves with shakmaty (counts differ once checks appear)
    #[arg(long)]
    compare: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut game =
        Game::from_fen(&args.fen).map_err(|e| anyhow!("invalid FEN '{}': {}", args.fen, e))?;

    println!("Running perft on FEN: '{}' at depth {}", game.to_fen(), args.depth);
    println!("Board:\n{}", game.board());

    let start = std::time::Instant::now();
    let nodes = if args.divide {
        let mut total = 0;
        for (mv, count) in game.perft_divide(args.depth) {
            println!("{}: {}", mv, count);
            total += count;
        }
        total
    } else {
        game.perft(args.depth)
    };
    let duration = start.elapsed();
    println!(
        "perft({}) = {} nodes ({} ms)",
        args.depth,
        nodes,
        duration.as_millis()
    );

    if args.compare {
        // castling and en passant are not part of the rules here, so compare on our own FEN
        let fen: Fen = game
            .to_fen()
            .parse()
            .map_err(|e| anyhow!("shakmaty could not parse FEN: {}", e))?;
        let pos: Chess = fen
            .into_position(CastlingMode::Standard)
            .map_err(|_| anyhow!("shakmaty rejected the position"))?;
        let reference = perft_shakmaty(&pos, args.depth);
        println!("shakmaty perft({}) = {} nodes", args.depth, reference);
    }

    Ok(())
}

fn perft_shakmaty(pos: &Chess, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0;
    for m in pos.legal_moves() {
        let mut new_pos = pos.clone();
        new_pos.play_unchecked(&m);
        nodes += perft_shakmaty(&new_pos, depth - 1);
    }
    nodes
}
