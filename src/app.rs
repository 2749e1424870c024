//! Event loop driving the view coordinator from scripted or interactive input.

use std::io::{BufRead, Write};

use crate::args::{Args, get_display_date};
use crate::error::Result;
use crate::formatter::print_frame;
use crate::types::WidgetContext;
use crate::view::{Event, ViewCoordinator};

/// Parse scripted events, failing on the first unknown token.
pub fn parse_events<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Event>> {
    tokens.iter().map(|token| token.as_ref().parse()).collect()
}

/// Apply `events` in order, then print one frame.
pub fn run_events<W: Write>(
    ctx: &WidgetContext,
    view: &mut ViewCoordinator,
    events: &[Event],
    out: &mut W,
) -> Result<()> {
    for &event in events {
        view.handle(event, ctx.today());
    }
    print_frame(ctx, &view.render(ctx.today()), out)?;
    Ok(())
}

/// Read one command per line and print a frame after each accepted event.
///
/// Unknown commands are reported and skipped. `q`, `quit` or end of input ends
/// the session.
pub fn run_interactive<R: BufRead, W: Write>(
    ctx: &WidgetContext,
    view: &mut ViewCoordinator,
    input: R,
    out: &mut W,
) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        match command {
            "" => continue,
            "q" | "quit" => break,
            _ => {}
        }

        match command.parse::<Event>() {
            Ok(event) => {
                view.handle(event, ctx.today());
                writeln!(out)?;
                print_frame(ctx, &view.render(ctx.today()), out)?;
            }
            Err(e) => {
                log::warn!("{}", e);
                writeln!(out, "{}", e)?;
            }
        }
    }
    Ok(())
}

pub fn run(args: &Args) -> Result<()> {
    let ctx = WidgetContext::new(args)?;
    let initial = get_display_date(args, ctx.today())?;
    let events = parse_events(&args.events)?;
    log::debug!("initial date {}, view {:?}", initial, args.view);

    let mut view = ViewCoordinator::new(initial, args.view);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    run_events(&ctx, &mut view, &events, &mut out)?;
    if args.interactive {
        let stdin = std::io::stdin();
        run_interactive(&ctx, &mut view, stdin.lock(), &mut out)?;
    }
    Ok(())
}
