use std::io::stdout;
use std::process::ExitCode;

use log::{error, info};
use tictactoe::{
    input::PromptInput,
    render::{JsonRenderer, PlainRenderer},
    ConsoleArgs, Game, MoveSource, Player, RenderFormat, Renderer, Session, SessionError,
};

fn play<S: MoveSource, R: Renderer>(game: Game, source: S, renderer: R) -> ExitCode {
    match Session::new(game, source, renderer).run() {
        Ok(outcome) => {
            info!("Game finished: {}", outcome);
            ExitCode::SUCCESS
        }
        Err(SessionError::Closed) => {
            info!("Input closed, leaving the game unfinished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Game aborted: {}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = ConsoleArgs::from_env();
    info!("Console args: {:?}", args);

    let game = match Game::new(
        Player::new(args.player_one.as_str()),
        Player::new(args.player_two.as_str()),
    ) {
        Ok(game) => game,
        Err(e) => {
            error!("Failed to create game: {}", e);
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let source = match PromptInput::new() {
        Ok(source) => source,
        Err(e) => {
            error!("Failed to open the prompt: {}", e);
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match args.render_format {
        RenderFormat::Plain => play(game, source, PlainRenderer::new(stdout(), args.empty_glyph)),
        RenderFormat::Json => play(game, source, JsonRenderer::new(stdout())),
    }
}
