//! Zendient Labs - the animated landing page, inline in your terminal.
//!
//! One haiku is picked per run (weighted by element), typed line by line
//! with a single cursor traveling between the lines, then the footer
//! appears. Press `q`, `Esc` or `Ctrl+C` to leave.
//!
//! Set `ZENDIENT_SEED` for a reproducible page.
//!
//! Run with: cargo run --example landing

use std::io;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use zendient_tui::content::{
    DELAY_OFFSET, KEYSTROKE_DURATION, PERSISTENCE_DURATION, TEXT_GAP,
};
use zendient_tui::{
    pick_haiku, year_to_roman, Attr, CursorGlyph, CursorOptions, Haiku, InlineRenderer,
    SequenceProps, SequencedTypingText, StyledLine, TimingConfig, Xorshift32,
};

/// The footer fades in this long after the haiku finishes typing.
const FOOTER_DELAY: u64 = 1500;

fn main() -> io::Result<()> {
    let seed = std::env::var("ZENDIENT_SEED")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.subsec_nanos())
                .unwrap_or(1)
        });

    let mut rng = Xorshift32::new(seed);
    let haiku = pick_haiku(&mut rng);

    let sequence = SequencedTypingText::new(SequenceProps {
        lines: haiku.lines_vec(),
        timing: TimingConfig {
            keystroke_duration: KEYSTROKE_DURATION,
            delay_offset: DELAY_OFFSET,
            text_gap: TEXT_GAP,
        },
        cursor: Some(CursorOptions {
            show_immediately: false,
            persistence_duration: Some(PERSISTENCE_DURATION),
        }),
        reserve_space: true,
    })
    .expect("a haiku always has three lines");

    let glyph = CursorGlyph::default();
    let mut renderer = InlineRenderer::new();
    let mut last_frame: Option<Vec<StyledLine>> = None;

    enable_raw_mode()?;
    execute!(io::stdout(), cursor::Hide)?;

    let start = Instant::now();
    let result = run(&sequence, haiku, &glyph, &mut renderer, &mut last_frame, start);

    execute!(io::stdout(), cursor::Show)?;
    disable_raw_mode()?;
    result
}

fn run(
    sequence: &SequencedTypingText,
    haiku: &Haiku,
    glyph: &CursorGlyph,
    renderer: &mut InlineRenderer,
    last_frame: &mut Option<Vec<StyledLine>>,
    start: Instant,
) -> io::Result<()> {
    loop {
        // Poll with short timeout (~60fps).
        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && should_quit(key.code, key.modifiers) {
                    return Ok(());
                }
            }
        }

        let now = start.elapsed().as_millis() as u64;
        sequence.tick(now);

        let frame = build_frame(sequence, haiku, glyph, now);
        if last_frame.as_ref() != Some(&frame) {
            renderer.render(&frame)?;
            *last_frame = Some(frame);
        }
    }
}

fn should_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Esc)
        || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL))
}

fn build_frame(
    sequence: &SequencedTypingText,
    haiku: &Haiku,
    glyph: &CursorGlyph,
    now: u64,
) -> Vec<StyledLine> {
    let element = haiku.element;
    let mut frame = vec![
        StyledLine::plain(""),
        StyledLine::centered(element.icon().to_string(), Attr::NONE).with_fg(element.accent()),
        StyledLine::plain(""),
        StyledLine::centered("Zendient Labs", Attr::BOLD),
        StyledLine::centered("Product · Design · Development", Attr::DIM),
        StyledLine::plain(""),
    ];

    // The haiku block. Space is reserved for every line up front so the
    // page never shifts as lines appear.
    let cursor_line = sequence.cursor_line();
    for (index, line) in sequence.lines().iter().enumerate() {
        let mut text = line.displayed().get();
        if cursor_line == Some(index) && glyph.is_visible(now, line.is_typing().get()) {
            text.push(glyph.glyph());
        }
        frame.push(StyledLine::centered(text, Attr::ITALIC));
    }

    frame.push(StyledLine::plain(""));

    // Footer, revealed once the haiku has settled.
    if now >= sequence.completion_time() + FOOTER_DELAY {
        frame.push(StyledLine::centered("GitHub · LinkedIn", Attr::DIM));
        frame.push(StyledLine::centered(year_to_roman(2026), Attr::BOLD));
        frame.push(StyledLine::centered(
            "Zendient Labs · Privacy Policy",
            Attr::DIM,
        ));
    } else {
        frame.extend([
            StyledLine::plain(""),
            StyledLine::plain(""),
            StyledLine::plain(""),
        ]);
    }

    frame
}
