//! evo-runner: headless driver for the EvoLingo reveal controller.
//!
//! Usage:
//!   evo-runner --word robot
//!   evo-runner --config evolingo.json --ipc-mode

use anyhow::Result;
use evolingo_core::{
    chat::ChatRoom,
    controller::RevealController,
    playback::TickOutcome,
    provider::{FallbackProvider, IdiomDoc, PredictionDoc, WordProvider},
    render::RenderFrame,
    translate::IdentityTranslator,
    AppConfig,
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    Search { word: String },
    Scrub { year: i32 },
    Play,
    Pause,
    Tick { count: u64 },
    Idiom { word: String, language: String },
    GetState,
    Quit,
}

#[derive(serde::Serialize)]
struct UiState {
    generation: u64,
    frame: RenderFrame,
    bounds: Option<evolingo_core::types::YearBounds>,
    prediction: Option<PredictionDoc>,
    idiom: Option<IdiomDoc>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let word = arg_value(&args, "--word").unwrap_or("human");
    let config = match arg_value(&args, "--config") {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    if !ipc_mode {
        println!("EvoLingo — evo-runner");
        println!("  word:          {word}");
        println!("  present year:  {}", config.present_year);
        println!("  step:          {} years / {}ms", config.playback_step_years, config.playback_tick_ms);
        println!();
    }

    let provider = FallbackProvider::new(config.present_year);
    let mut controller = RevealController::new(config)?;

    if ipc_mode {
        run_ipc_loop(&mut controller, &provider)?;
    } else {
        run_demo(&mut controller, &provider, word)?;
    }

    Ok(())
}

fn run_ipc_loop(controller: &mut RevealController, provider: &FallbackProvider) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();
    let mut idiom: Option<IdiomDoc> = None;

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Malformed IPC command: {e}");
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::Search { word } => {
                idiom = None;
                if let Err(e) = controller.search(&word, provider) {
                    let err_json = serde_json::json!({ "error": e.to_string() });
                    writeln!(stdout, "{}", err_json)?;
                    stdout.flush()?;
                    continue;
                }
            }
            IpcCommand::Scrub { year } => controller.scrub(year),
            IpcCommand::Play => controller.play(),
            IpcCommand::Pause => controller.pause(),
            IpcCommand::Tick { count } => {
                for _ in 0..count {
                    if controller.tick() == TickOutcome::Idle {
                        break;
                    }
                }
            }
            IpcCommand::Idiom { word, language } => {
                idiom = provider.idiom(&word, &language).ok();
            }
            IpcCommand::GetState => {}
        }

        let state = build_ui_state(controller, idiom.clone());
        writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
        stdout.flush()?;
    }
    Ok(())
}

fn build_ui_state(controller: &mut RevealController, idiom: Option<IdiomDoc>) -> UiState {
    UiState {
        generation: controller.generation(),
        bounds: controller.bounds(),
        prediction: controller.prediction().cloned(),
        idiom,
        frame: controller.frame(),
    }
}

/// Non-IPC mode: search one word, play the timeline to the end and
/// print what the map would show along the way.
fn run_demo(
    controller: &mut RevealController,
    provider: &FallbackProvider,
    word: &str,
) -> Result<()> {
    controller.search(word, provider)?;

    let bounds = controller
        .bounds()
        .ok_or_else(|| anyhow::anyhow!("search produced no timeline"))?;
    println!("=== TIMELINE {} .. {} ===", bounds.min, bounds.max);

    controller.scrub(bounds.min);
    controller.play();
    loop {
        let frame = controller.frame();
        // Only chatter when the camera moves — every focus marks a
        // newly revealed waypoint.
        if let Some(focus) = frame.focus {
            let path_len = frame.path.as_ref().map(Vec::len).unwrap_or(0);
            println!(
                "  year {:>5} | markers {} | path {} | focus ({:.1}, {:.1})",
                frame.current_year,
                frame.markers.len(),
                path_len,
                focus.target.lat,
                focus.target.lng
            );
        }
        match controller.tick() {
            TickOutcome::Advanced(_) => {}
            TickOutcome::Finished(_) | TickOutcome::Idle => break,
        }
    }

    let final_frame = controller.frame();
    println!();
    println!("=== RUN SUMMARY ===");
    println!("  final year:  {}", final_frame.current_year);
    println!("  markers:     {}", final_frame.markers.len());
    println!("  playing:     {}", final_frame.is_playing);
    if let Some(prediction) = controller.prediction() {
        println!("  prediction:  {} ({})", prediction.word, prediction.year);
    }

    // A taste of the chat feature: one group, two locales.
    let translator = IdentityTranslator;
    let mut room = ChatRoom::new("etymology-nerds");
    let alex = room.join("Alex", "en");
    room.join("Mina", "fr");
    let delivery = room.post(alex, format!("Look up '{word}'!"), &translator)?;
    println!("  chat \"{}\" rendered for {} locale(s)", delivery.message.text, delivery.renderings.len());

    Ok(())
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
