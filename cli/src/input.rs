use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use twenty_48::Direction;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Action {
    Move(Direction),
    Restart,
    Quit,
    Confirm,
    Redraw,
}

impl From<Direction> for Action {
    fn from(d: Direction) -> Self {
        Action::Move(d)
    }
}

pub fn action(event: &Event) -> Option<Action> {
    match event {
        Event::Key(k) if k.kind != KeyEventKind::Release => key_action(k),
        Event::Resize(..) => Some(Action::Redraw),
        _ => None,
    }
}

fn key_action(k: &KeyEvent) -> Option<Action> {
    match (k.code, k.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Action::Quit),
        (_, m) if m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => None,
        (KeyCode::Left | KeyCode::Char('a' | 'A'), _) => Some(Direction::Left.into()),
        (KeyCode::Right | KeyCode::Char('d' | 'D'), _) => Some(Direction::Right.into()),
        (KeyCode::Up | KeyCode::Char('w' | 'W'), _) => Some(Direction::Up.into()),
        (KeyCode::Down | KeyCode::Char('s' | 'S'), _) => Some(Direction::Down.into()),
        (KeyCode::Char('q' | 'Q'), _) => Some(Action::Quit),
        (KeyCode::Char('r' | 'R'), _) => Some(Action::Restart),
        (KeyCode::Enter, _) => Some(Action::Confirm),
        _ => None,
    }
}
