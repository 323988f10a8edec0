use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Decoded terminal input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    /// A symbol for the key handler: `w`/`a`/`s`/`d`, `\n`, or any other letter.
    Key(char),
    Quit,
    Resize,
}

/// Block until the next event that means something to the game.
pub fn next_event() -> std::io::Result<TuiEvent> {
    loop {
        let decoded = match event::read()? {
            Event::Key(key_event) => {
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                translate_key(key_event)
            }
            Event::Resize(..) => Some(TuiEvent::Resize),
            _ => None,
        };
        if let Some(event) = decoded {
            return Ok(event);
        }
    }
}

/// Translate one key press. Arrow keys become their `wasd` equivalents,
/// letters are lower-cased, Escape is swallowed.
pub fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Windows reports releases too
    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char('q' | 'Q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Enter | KeyCode::Char('\r' | '\n')) => Some(TuiEvent::Key('\n')),
        (_, KeyCode::Up) => Some(TuiEvent::Key('w')),
        (_, KeyCode::Down) => Some(TuiEvent::Key('s')),
        (_, KeyCode::Left) => Some(TuiEvent::Key('a')),
        (_, KeyCode::Right) => Some(TuiEvent::Key('d')),
        (_, KeyCode::Char(c)) => Some(TuiEvent::Key(c.to_ascii_lowercase())),
        (_, KeyCode::Esc) => None,
        _ => None,
    }
}
