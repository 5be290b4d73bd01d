// rnes frontend - headless runner and debugger entry point
//
// Usage: rnes [--debug] [--frames N] [--screenshot] <rom.nes>
//
// Without --debug the machine runs for a bounded number of frames and
// optionally dumps the last frame as a PNG. Exit code 0 on a clean quit,
// 1 on a usage error or emulation failure.

use std::env;
use std::process::ExitCode;

use rnes::debug::{disassemble_instruction, CpuDebugger};
use rnes::emulator::{save_screenshot, Emulator, EmulatorConfig};
use rnes::error::EmulatorError;

struct Options {
    rom_path: String,
    debug: bool,
    frames: Option<u64>,
    screenshot: bool,
}

fn usage(program: &str) {
    eprintln!("Usage: {} [--debug] [--frames N] [--screenshot] <rom.nes>", program);
}

fn parse_options(mut args: env::Args) -> Option<Options> {
    let _program = args.next();

    let mut rom_path = None;
    let mut debug = false;
    let mut frames = None;
    let mut screenshot = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--debug" => debug = true,
            "--screenshot" => screenshot = true,
            "--frames" => {
                frames = Some(args.next()?.parse().ok()?);
            }
            _ if arg.starts_with("--") => return None,
            _ if rom_path.is_none() => rom_path = Some(arg),
            _ => return None,
        }
    }

    Some(Options {
        rom_path: rom_path?,
        debug,
        frames,
        screenshot,
    })
}

/// Like `Emulator::run_frame`, logging a disassembled line per
/// instruction.
fn run_frame_traced(emulator: &mut Emulator) -> Result<(), EmulatorError> {
    loop {
        let pc = emulator.cpu().registers().pc;
        let line = disassemble_instruction(pc, emulator.cpu_mut().bus_mut());
        log::trace!("{}", line);

        if emulator.step()?.frame_complete {
            return Ok(());
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let program = env::args().next().unwrap_or_else(|| "rnes".to_string());
    let Some(options) = parse_options(env::args()) else {
        usage(&program);
        return ExitCode::from(1);
    };

    let config = EmulatorConfig::load_or_default(rnes::emulator::config::CONFIG_FILE);

    let mut emulator = match Emulator::from_ines_file(&options.rom_path) {
        Ok(emulator) => emulator,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    if options.debug {
        let mut debugger = CpuDebugger::new(emulator.cpu_mut());
        if let Err(e) = debugger.run() {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
        return ExitCode::SUCCESS;
    }

    let frames = options.frames.unwrap_or(config.run.default_frames);
    log::info!("running {} for {} frame(s)", options.rom_path, frames);

    for _ in 0..frames {
        let result = if config.run.trace_execution {
            run_frame_traced(&mut emulator)
        } else {
            emulator.run_frame()
        };
        if let Err(e) = result {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    }

    if options.screenshot {
        let result = save_screenshot(
            emulator.framebuffer(),
            &config.screenshot.directory,
            config.screenshot.include_timestamp,
        );
        if let Err(e) = result {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    }

    ExitCode::SUCCESS
}
